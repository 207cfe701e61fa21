use criterion::{criterion_group, criterion_main, Criterion};
use geostego_core::{NoProgress, PvdCodec, RgbaImage};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let plain_image = RgbaImage::from_fn(640, 480, |x, y| {
            image::Rgba([
                (x % 200) as u8 + 20,
                (y % 200) as u8 + 20,
                ((x ^ y) % 64) as u8 + 90,
                255,
            ])
        });
        let codec = PvdCodec::new();
        let secret_message = "Hello World!".repeat(40);

        b.iter(|| {
            codec
                .encode(&plain_image, &secret_message, "BENCH", &mut NoProgress)
                .expect("Cannot hide secret message")
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
