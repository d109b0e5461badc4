use ::image as imagex; // external, for IO

use super::Decoder;
use crate::image::{convert, ImageBuffer};

pub struct JpegDecoder;

impl Decoder for JpegDecoder {
    fn name(&self) -> &'static str {
        "jpeg"
    }

    fn decode(&self, data: &[u8]) -> anyhow::Result<ImageBuffer> {
        let img_x = imagex::load_from_memory_with_format(data, imagex::ImageFormat::Jpeg)?;
        convert::from_dynamic(&img_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ConstImage;
    use crate::imgproc::threshold::is_foreground;

    #[test]
    fn test_decode_jpeg() {
        // lossy, so only check which side of the threshold each half lands on
        let img_x = imagex::RgbImage::from_fn(16, 8, |x, _| {
            if x < 8 {
                imagex::Rgb([0xff, 0xff, 0xff])
            } else {
                imagex::Rgb([0, 0, 0])
            }
        });
        let mut data = Vec::new();
        imagex::DynamicImage::ImageRgb8(img_x)
            .write_to(&mut std::io::Cursor::new(&mut data), imagex::ImageOutputFormat::Jpeg(95))
            .unwrap();

        let img = JpegDecoder.decode(&data).unwrap();
        assert_eq!(img.size(), (16, 8).into());
        assert!(is_foreground(img.pixel((1, 4).into())));
        assert!(!is_foreground(img.pixel((14, 4).into())));
    }

    #[test]
    fn test_rejects_png() {
        assert!(JpegDecoder.decode(b"\x89PNG\r\n\x1a\n").is_err());
    }
}
