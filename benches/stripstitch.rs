use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use stripstitch::{
    correlate, merge, resize, CorrelationConfig, Image, Pixel, Region, ScaleProfile, SeamConfig,
};

fn make_image(width: usize, height: usize, salt: usize) -> Image {
    Image::from_fn(width, height, |x, y| {
        let value = ((x * 13) ^ (y * 7) ^ (x * y) ^ salt) & 0xFF;
        Pixel::rgb(value as u8, (value / 2) as u8, (255 - value) as u8)
    })
    .unwrap()
}

fn bench_stages(c: &mut Criterion) {
    let a = make_image(1024, 10, 0);
    let b = make_image(1024, 10, 3);
    let region_a = Region::full(&a);
    let region_b = Region::full(&b);

    let seq_cfg = CorrelationConfig {
        parallel: false,
        ..CorrelationConfig::default()
    };
    c.bench_function("correlate_strip_sequential", |bench| {
        bench.iter(|| black_box(correlate(&a, region_a, &b, region_b, &seq_cfg).unwrap()));
    });

    if cfg!(feature = "rayon") {
        let par_cfg = CorrelationConfig::default();
        c.bench_function("correlate_strip_parallel", |bench| {
            bench.iter(|| black_box(correlate(&a, region_a, &b, region_b, &par_cfg).unwrap()));
        });
    }

    let frame = make_image(640, 480, 1);
    let factors: Vec<f32> = (0..48).map(|i| 1.0 + i as f32 / 48.0).collect();
    let profile = ScaleProfile::new(factors, 10, 64).unwrap();
    c.bench_function("resize_640x480", |bench| {
        bench.iter(|| black_box(resize(&frame, &profile).unwrap()));
    });

    let strips: Vec<Image> = (0..8).map(|i| make_image(64, 480, i)).collect();
    let refs: Vec<&Image> = strips.iter().collect();
    c.bench_function("merge_8_strips", |bench| {
        bench.iter(|| black_box(merge(&refs, &SeamConfig::default()).unwrap()));
    });
}

criterion_group!(benches, bench_stages);
criterion_main!(benches);
