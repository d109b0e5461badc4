use ::image as imagex; // external, for IO

use super::Decoder;
use crate::image::{convert, ImageBuffer};

pub struct PngDecoder;

impl Decoder for PngDecoder {
    fn name(&self) -> &'static str {
        "png"
    }

    fn decode(&self, data: &[u8]) -> anyhow::Result<ImageBuffer> {
        let img_x = imagex::load_from_memory_with_format(data, imagex::ImageFormat::Png)?;
        convert::from_dynamic(&img_x)
    }
}
