use std::fmt::Debug;

use super::threshold::is_foreground;
use crate::image::*;

/// Bytes needed for one row of `width` 1bpp pixels.
pub fn minimum_pitch(width: i32) -> i32 {
    (width + 7) / 8
}

/// Packed monochrome image: 8 pixels per byte, MSB first, every row starts
/// on a byte boundary and its unused low bits are zero.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    data: Vec<u8>,
    width: i32,
    height: i32,
    pitch: i32,
}

impl Bitmap {
    pub fn width(&self) -> i32 {
        self.width
    }
    pub fn height(&self) -> i32 {
        self.height
    }
    pub fn pitch(&self) -> i32 {
        self.pitch
    }
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn row(&self, y: i32) -> &[u8] {
        assert!(y >= 0 && y < self.height, "row {} out of {}", y, self.height);
        let start = (y * self.pitch) as usize;
        &self.data[start..start + self.pitch as usize]
    }

    // x and y are relative to the packed image's top-left corner
    pub fn get(&self, x: i32, y: i32) -> bool {
        assert!(x >= 0 && x < self.width, "column {} out of {}", x, self.width);
        (self.row(y)[(x / 8) as usize] >> (7 - x % 8)) & 0x1 == 1
    }
}

impl Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} bitmap, pitch {}:\n", self.width, self.height, self.pitch)?;
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", if self.get(x, y) { '#' } else { '.' })?;
            }
            write!(f, "\n")?;
        }
        Ok(())
    }
}

pub fn pack<T: ConstImage + ?Sized>(image: &T) -> Bitmap {
    let bounds = image.bounds();
    let (width, height) = if bounds.is_empty() {
        (0, 0)
    } else {
        (bounds.size.width, bounds.size.height)
    };
    let pitch = minimum_pitch(width);
    let mut packed: Vec<u8> = Vec::with_capacity((pitch * height) as usize);

    if width > 0 {
        for y in bounds.rows() {
            let mut current: u8 = 0;
            let mut bit_index = 0;
            for x in bounds.cols() {
                if is_foreground(image.pixel((x, y).into())) {
                    current |= 0x80 >> bit_index;
                }
                bit_index += 1;
                if bit_index == 8 {
                    packed.push(current);
                    current = 0;
                    bit_index = 0;
                }
            }
            // end of row, remaining low bits are padding
            if bit_index > 0 {
                packed.push(current);
            }
        }
    }

    Bitmap {
        data: packed,
        width,
        height,
        pitch,
    }
}
