use std::ops::Range;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl<T> From<(T, T)> for Point
where
    T: Into<i32>,
{
    fn from(value: (T, T)) -> Self {
        Point {
            x: value.0.into(),
            y: value.1.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl<T> From<(T, T)> for Size
where
    T: Into<i32>,
{
    fn from(value: (T, T)) -> Self {
        Size {
            width: value.0.into(),
            height: value.1.into(),
        }
    }
}

/// Rectangle covered by an image. `min` is the top-left pixel, and the
/// bottom-right pixel is `max()` (inclusive).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min: Point,
    pub size: Size,
}

impl Bounds {
    pub fn new(min: Point, size: Size) -> Self {
        assert!(
            size.width >= 0 && size.height >= 0,
            "invalid width {} and height {}",
            size.width,
            size.height
        );
        Bounds { min, size }
    }

    pub fn is_empty(&self) -> bool {
        self.size.width == 0 || self.size.height == 0
    }

    // only meaningful for non-empty bounds
    pub fn max(&self) -> Point {
        Point {
            x: self.min.x + self.size.width - 1,
            y: self.min.y + self.size.height - 1,
        }
    }

    pub fn rows(&self) -> Range<i32> {
        self.min.y..(self.min.y + self.size.height)
    }

    pub fn cols(&self) -> Range<i32> {
        self.min.x..(self.min.x + self.size.width)
    }

    pub fn contains(&self, pt: Point) -> bool {
        self.cols().contains(&pt.x) && self.rows().contains(&pt.y)
    }
}

/// One pixel, 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const BLACK: Rgba = Rgba([0, 0, 0, 0xff]);
    pub const WHITE: Rgba = Rgba([0xff, 0xff, 0xff, 0xff]);

    pub fn red(&self) -> u8 {
        self.0[0]
    }
    pub fn green(&self) -> u8 {
        self.0[1]
    }
    pub fn blue(&self) -> u8 {
        self.0[2]
    }
    pub fn alpha(&self) -> u8 {
        self.0[3]
    }
}

const BYTES_PER_PIXEL: i32 = 4;

/// Largest pixel buffer we address; offsets are computed in `i32`.
pub const MAX_DATA_LEN: usize = i32::MAX as usize;

// `a * b` bytes, panics past MAX_DATA_LEN
fn checked_len(a: i32, b: i32) -> usize {
    match a.checked_mul(b) {
        Some(len) if len >= 0 => len as usize,
        _ => panic!("image too large: {} * {} bytes", a, b),
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ImageHeader {
    data_len: usize,
    bounds: Bounds,
    pitch: i32,
}

impl ImageHeader {
    pub fn new(data_len: usize, bounds: Bounds, pitch: Option<i32>) -> Self {
        let minimum_pitch = checked_len(bounds.size.width, BYTES_PER_PIXEL);
        let pitch = pitch.unwrap_or(minimum_pitch as i32);
        assert!(
            pitch >= minimum_pitch as i32,
            "invalid pitch {} for width {}",
            pitch,
            bounds.size.width
        );
        assert!(
            data_len >= checked_len(bounds.size.height, pitch),
            "invalid data len {} for height {} and pitch {}",
            data_len,
            bounds.size.height,
            pitch
        );
        ImageHeader {
            data_len,
            bounds,
            pitch,
        }
    }

    fn offset_of(&self, pt: Point) -> usize {
        let x = pt.x - self.bounds.min.x;
        let y = pt.y - self.bounds.min.y;
        (y * self.pitch + x * BYTES_PER_PIXEL) as usize
    }

    // `pt` is in absolute coordinates; the sub-image keeps them
    fn subimg(&self, pt: Point, size: Size) -> (Self, usize) {
        let sub_bounds = Bounds::new(pt, size);
        assert!(
            sub_bounds.is_empty()
                || (self.bounds.contains(sub_bounds.min) && self.bounds.contains(sub_bounds.max())),
            "sub image {:?} out of {:?}",
            sub_bounds,
            self.bounds
        );
        let offset = if sub_bounds.is_empty() {
            0
        } else {
            self.offset_of(pt)
        };
        (
            Self {
                data_len: self.data_len - offset,
                bounds: sub_bounds,
                pitch: self.pitch,
            },
            offset,
        )
    }
}

pub trait HasImageHeader {
    fn header(&self) -> ImageHeader;
}

/// Read access to an RGBA pixel grid.
pub trait ConstImage: HasImageHeader {
    fn data(&self) -> &[u8];

    fn bounds(&self) -> Bounds {
        self.header().bounds
    }
    fn width(&self) -> i32 {
        self.bounds().size.width
    }
    fn height(&self) -> i32 {
        self.bounds().size.height
    }
    fn size(&self) -> Size {
        self.bounds().size
    }
    fn pitch(&self) -> i32 {
        self.header().pitch
    }
    fn pixel(&self, pt: Point) -> Rgba {
        let header = self.header();
        assert!(
            header.bounds.contains(pt),
            "pixel {:?} out of {:?}",
            pt,
            header.bounds
        );
        let offset = header.offset_of(pt);
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data()[offset..offset + BYTES_PER_PIXEL as usize]);
        Rgba(px)
    }
    fn subimg(&self, pt: Point, size: Size) -> ConstImageView {
        let (sub_hdr, offset) = self.header().subimg(pt, size);
        ConstImageView {
            header: sub_hdr,
            data: &self.data()[offset..],
        }
    }
}

pub trait Image: ConstImage {
    fn mut_data(&mut self) -> &mut [u8];

    fn put_pixel(&mut self, pt: Point, px: Rgba) {
        let header = self.header();
        assert!(
            header.bounds.contains(pt),
            "pixel {:?} out of {:?}",
            pt,
            header.bounds
        );
        let offset = header.offset_of(pt);
        self.mut_data()[offset..offset + BYTES_PER_PIXEL as usize].copy_from_slice(&px.0);
    }

    fn fill(&mut self, px: Rgba) {
        let bounds = self.bounds();
        for y in bounds.rows() {
            for x in bounds.cols() {
                self.put_pixel((x, y).into(), px);
            }
        }
    }
}

pub struct ConstImageView<'a> {
    header: ImageHeader,
    data: &'a [u8],
}

impl<'a> ConstImageView<'a> {
    pub fn new(data: &'a [u8], width: i32, height: i32, pitch: Option<i32>) -> Self {
        let bounds = Bounds::new(Point::default(), (width, height).into());
        let header = ImageHeader::new(data.len(), bounds, pitch);
        ConstImageView { header, data }
    }
}

impl<'a> HasImageHeader for ConstImageView<'a> {
    fn header(&self) -> ImageHeader {
        self.header
    }
}

impl<'a> ConstImage for ConstImageView<'a> {
    fn data(&self) -> &[u8] {
        self.data
    }
}

#[derive(Debug)]
pub struct ImageBuffer {
    data: Vec<u8>,
    header: ImageHeader,
}

impl ImageBuffer {
    /// Transparent black image at the origin.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Bounds::new(Point::default(), (width, height).into());
        let data = vec![0; checked_len(checked_len(width, BYTES_PER_PIXEL) as i32, height)];
        let header = ImageHeader::new(data.len(), bounds, None);
        Self { data, header }
    }

    /// Wrap tightly packed RGBA8 rows.
    pub fn from_raw(width: i32, height: i32, data: Vec<u8>) -> Self {
        let bounds = Bounds::new(Point::default(), (width, height).into());
        let header = ImageHeader::new(data.len(), bounds, None);
        Self { data, header }
    }

    pub fn from_pixel(width: i32, height: i32, px: Rgba) -> Self {
        let mut img = Self::new(width, height);
        img.fill(px);
        img
    }
}

impl HasImageHeader for ImageBuffer {
    fn header(&self) -> ImageHeader {
        self.header
    }
}

impl ConstImage for ImageBuffer {
    fn data(&self) -> &[u8] {
        self.data.as_slice()
    }
}

impl Image for ImageBuffer {
    fn mut_data(&mut self) -> &mut [u8] {
        self.data.as_mut_slice()
    }
}

pub mod convert;
