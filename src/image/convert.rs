use ::image as imagex; // external, for IO
use anyhow::bail;

use super::*;

/// Copy a decoded image into our own RGBA8 buffer. Wider channel formats
/// (16-bit PNG, float) are scaled down to 8 bits here, and colour channels
/// come out premultiplied by alpha, so fully transparent pixels are black.
pub fn from_dynamic(img_x: &imagex::DynamicImage) -> anyhow::Result<ImageBuffer> {
    check_size(img_x.width(), img_x.height())?;
    Ok(from_rgba8(img_x.to_rgba8()))
}

pub fn check_size(width: u32, height: u32) -> anyhow::Result<()> {
    let len = width as u64 * height as u64 * 4;
    if len > MAX_DATA_LEN as u64 {
        bail!("image too large: {}x{}", width, height);
    }
    Ok(())
}

pub fn from_rgba8(mut img_x: imagex::RgbaImage) -> ImageBuffer {
    for px in img_x.pixels_mut() {
        let alpha = px.0[3] as u16;
        for c in &mut px.0[..3] {
            *c = (*c as u16 * alpha / 0xff) as u8;
        }
    }
    let width = img_x.width() as i32;
    let height = img_x.height() as i32;
    ImageBuffer::from_raw(width, height, img_x.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dynamic_gray16() {
        let mut img_x = imagex::ImageBuffer::<imagex::Luma<u16>, Vec<u16>>::new(3, 2);
        img_x.put_pixel(1, 1, imagex::Luma([0xffff]));
        img_x.put_pixel(2, 0, imagex::Luma([0x8080]));

        let img = from_dynamic(&imagex::DynamicImage::ImageLuma16(img_x)).unwrap();
        assert_eq!(img.size(), (3, 2).into());
        assert_eq!(img.pixel((1, 1).into()), Rgba::WHITE);
        assert_eq!(img.pixel((2, 0).into()), Rgba([0x80, 0x80, 0x80, 0xff]));
        assert_eq!(img.pixel((0, 0).into()), Rgba::BLACK);
    }

    #[test]
    fn test_premultiplied_alpha() {
        let mut img_x = imagex::RgbaImage::new(3, 1);
        img_x.put_pixel(0, 0, imagex::Rgba([0xff, 0xff, 0xff, 0]));
        img_x.put_pixel(1, 0, imagex::Rgba([0xff, 0x80, 0x00, 0x80]));
        img_x.put_pixel(2, 0, imagex::Rgba([0x12, 0x34, 0x56, 0xff]));

        let img = from_rgba8(img_x);
        assert_eq!(img.pixel((0, 0).into()), Rgba([0, 0, 0, 0]));
        assert_eq!(img.pixel((1, 0).into()), Rgba([0x80, 0x40, 0x00, 0x80]));
        assert_eq!(img.pixel((2, 0).into()), Rgba([0x12, 0x34, 0x56, 0xff]));
    }

    #[test]
    fn test_check_size() {
        assert!(check_size(1000, 1000).is_ok());
        assert!(check_size(0, 0).is_ok());
        let err = check_size(23200, 23200).unwrap_err();
        assert_eq!(err.to_string(), "image too large: 23200x23200");
    }
}
