use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::Rgba;
use lumaseam::{accumulate_cost, gradient, luminance, PixelBuffer, SeamCarver, SeamStart};

fn sample(width: u32, height: u32) -> PixelBuffer {
    let texels = (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);
            Rgba([(x * 7 % 256) as u8, (y * 3 % 256) as u8, ((x ^ y) % 256) as u8, 255])
        })
        .collect();
    PixelBuffer::from_texels(width, height, texels).unwrap()
}

fn energy_pipeline(c: &mut Criterion) {
    let buf = sample(320, 240);
    c.bench_function("luminance + gradient + cost 320x240", |b| {
        b.iter(|| accumulate_cost(&gradient(&luminance(black_box(&buf)))))
    });
}

fn one_seam(c: &mut Criterion) {
    let buf = sample(320, 240);
    c.bench_function("carve one seam 320x240", |b| {
        b.iter(|| {
            let mut carver = SeamCarver::new(buf.clone(), SeamStart::MinimumCost);
            black_box(carver.carve_once().unwrap());
        })
    });
}

criterion_group!(benches, energy_pipeline, one_seam);
criterion_main!(benches);
