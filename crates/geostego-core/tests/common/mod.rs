use image::{ImageBuffer, RgbaImage};

/// A sky gradient above some rough ground, no channel gets close to 0 or 255.
pub fn landscape(width: u32, height: u32) -> RgbaImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        if y < height / 2 {
            let shade = (y * 60 / height) as u8;
            image::Rgba([70 + shade, 110 + shade, 150 + shade + (x % 7) as u8, 255])
        } else {
            let grain = ((x * y) % 23) as u8;
            image::Rgba([90 + grain, 120 + grain / 2, 40 + grain, 255])
        }
    })
}
