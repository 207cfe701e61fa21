use image::RgbaImage;

use crate::media::CarrierChannel;
use crate::pvd::PixelPair;

/// Read access to the carrier values of a pixel pair
pub trait PairSource {
    fn read_pair(&self, pair: &PixelPair) -> (u8, u8);
}

/// Read and write access to the carrier values of a pixel pair
pub trait PairSink: PairSource {
    fn write_pair(&mut self, pair: &PixelPair, values: (u8, u8));
}

/// read only view on the carrier channel of an `RgbaImage`
pub struct PixelView<'i> {
    image: &'i RgbaImage,
    channel: usize,
}

impl<'i> PixelView<'i> {
    pub fn new(image: &'i RgbaImage, channel: CarrierChannel) -> Self {
        Self {
            image,
            channel: channel.index(),
        }
    }
}

impl PairSource for PixelView<'_> {
    fn read_pair(&self, pair: &PixelPair) -> (u8, u8) {
        read_channel(self.image, self.channel, pair)
    }
}

/// exclusive, mutable view on the carrier channel of an `RgbaImage`
///
/// ## Example of usage
/// ```rust
/// use image::RgbaImage;
/// use geostego_core::media::image::{PairSink, PairSource, PixelBuffer};
/// use geostego_core::media::CarrierChannel;
/// use geostego_core::pvd::PixelPair;
///
/// let mut image = RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 255]));
/// let pair = PixelPair::anchored_at(1, 2);
/// {
///     let mut buffer = PixelBuffer::new(&mut image, CarrierChannel::Blue);
///     assert_eq!(buffer.read_pair(&pair), (30, 30));
///     buffer.write_pair(&pair, (33, 27));
/// }
/// assert_eq!(image.get_pixel(1, 2).0, [10, 20, 33, 255]);
/// assert_eq!(image.get_pixel(2, 2).0, [10, 20, 27, 255]);
/// ```
pub struct PixelBuffer<'i> {
    image: &'i mut RgbaImage,
    channel: usize,
}

impl<'i> PixelBuffer<'i> {
    pub fn new(image: &'i mut RgbaImage, channel: CarrierChannel) -> Self {
        Self {
            image,
            channel: channel.index(),
        }
    }
}

impl PairSource for PixelBuffer<'_> {
    fn read_pair(&self, pair: &PixelPair) -> (u8, u8) {
        read_channel(self.image, self.channel, pair)
    }
}

impl PairSink for PixelBuffer<'_> {
    fn write_pair(&mut self, pair: &PixelPair, values: (u8, u8)) {
        let (first, second) = values;
        self.image.get_pixel_mut(pair.first.x, pair.first.y).0[self.channel] = first;
        self.image.get_pixel_mut(pair.second.x, pair.second.y).0[self.channel] = second;
    }
}

fn read_channel(image: &RgbaImage, channel: usize, pair: &PixelPair) -> (u8, u8) {
    (
        image.get_pixel(pair.first.x, pair.first.y).0[channel],
        image.get_pixel(pair.second.x, pair.second.y).0[channel],
    )
}
