pub mod app;
pub mod decode;
pub mod image;
pub mod imgproc;
pub mod output;
