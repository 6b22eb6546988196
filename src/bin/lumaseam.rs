use lumaseam::dump::{write_energy_image, Scale};
use lumaseam::{
    gradient, io, luminance, run_interactive, CarveReport, Config, FrameSequence, SeamCarver,
    SeamStart, Target,
};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

extern crate clap;

use clap::{App, Arg, ArgGroup, ArgMatches};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// Log to stderr; RUST_LOG wins over -v.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn app() -> App<'static, 'static> {
    App::new("lumaseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image narrowing by seam carving")
        .arg(
            Arg::with_name("image")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result [default: <image>-carved.png]")
                .short("o")
                .long("output")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seams")
                .help("Number of seams to remove")
                .short("n")
                .long("seams")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("width")
                .help("Carve until the image is this wide")
                .short("w")
                .long("width")
                .takes_value(true),
        )
        .group(ArgGroup::with_name("target").args(&["seams", "width"]))
        .arg(
            Arg::with_name("random-start")
                .help("Start each seam at a random bottom column instead of the cheapest one")
                .long("random-start"),
        )
        .arg(
            Arg::with_name("seed")
                .help("Seed for --random-start")
                .long("seed")
                .takes_value(true)
                .requires("random-start"),
        )
        .arg(
            Arg::with_name("dump-energy")
                .help("Write lum.png and grad.png for the input image into this directory")
                .long("dump-energy")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("frames")
                .help("Save every intermediate frame into this directory")
                .long("frames")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .help("Log every seam")
                .short("v")
                .long("verbose"),
        )
}

fn number<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<Option<T>, failure::Error> {
    match matches.value_of(name) {
        None => Ok(None),
        Some(v) => v.parse().map(Some).map_err(|_| {
            failure::format_err!("--{} expects a non-negative integer, got {:?}", name, v)
        }),
    }
}

fn config_from(matches: &ArgMatches) -> Result<Config, failure::Error> {
    // Required by clap.
    let input = matches.value_of("image").unwrap_or_default();
    let mut config = Config::new(input);

    if let Some(output) = matches.value_of("output") {
        config.output = PathBuf::from(output);
    }
    if let Some(n) = number(matches, "seams")? {
        config.target = Target::Seams(n);
    }
    if let Some(w) = number(matches, "width")? {
        config.target = Target::Width(w);
    }
    if matches.is_present("random-start") {
        config.start = SeamStart::Random {
            seed: number(matches, "seed")?.unwrap_or(0),
        };
    }
    config.dump_energy = matches.value_of("dump-energy").map(PathBuf::from);
    config.frames = matches.value_of("frames").map(PathBuf::from);
    Ok(config)
}

fn run(config: &Config) -> Result<CarveReport, failure::Error> {
    let pixels = io::load(&config.input)?;

    if let Some(dir) = &config.dump_energy {
        std::fs::create_dir_all(dir)?;
        let lum = luminance(&pixels);
        write_energy_image(dir.join("lum.png"), &lum, Scale::Unit)?;
        write_energy_image(dir.join("grad.png"), &gradient(&lum), Scale::ToMax)?;
    }

    let mut carver = SeamCarver::new(pixels, config.start);
    let report = match &config.frames {
        Some(dir) => {
            config.target.check(carver.width())?;
            let goal = config.target.width_from(carver.width());
            let mut surface = FrameSequence::new(dir, goal)?;
            let removed = run_interactive(&mut carver, &mut surface)?;
            info!(frames = surface.frames(), "wrote frame sequence");
            CarveReport {
                seams_removed: removed,
                width: carver.width(),
                height: carver.height(),
                hit_floor: config.target.fell_short(removed),
            }
        }
        None => carver.carve(config.target)?,
    };

    io::save(&config.output, carver.pixels())?;
    Ok(report)
}

fn main() {
    let matches = app().get_matches();
    init_logging(matches.is_present("verbose"));

    let outcome = config_from(&matches).and_then(|config| run(&config));
    match outcome {
        Ok(report) => info!(
            removed = report.seams_removed,
            width = report.width,
            height = report.height,
            "done"
        ),
        Err(err) => {
            error!("{}", err);
            for cause in err.iter_causes() {
                error!("  caused by: {}", cause);
            }
            process::exit(1);
        }
    }
}
