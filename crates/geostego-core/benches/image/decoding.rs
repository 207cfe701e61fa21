use criterion::{criterion_group, criterion_main, Criterion};
use geostego_core::{NoProgress, PvdCodec, RgbaImage};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let codec = PvdCodec::new();
        let plain_image = RgbaImage::from_pixel(640, 480, image::Rgba([120, 140, 160, 255]));
        let img = codec
            .encode(&plain_image, "Hello World!", "BENCH", &mut NoProgress)
            .expect("Cannot hide secret message");

        b.iter(|| {
            let message = codec
                .decode(&img, "BENCH", &mut NoProgress)
                .expect("Failed to unveil secret message");
            assert_eq!(message, "Hello World!");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
