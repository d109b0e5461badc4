pub mod bitpack;
pub mod threshold;

pub use bitpack::{pack, Bitmap};
