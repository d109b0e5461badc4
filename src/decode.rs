use anyhow::bail;
use log::debug;

use crate::image::{ConstImage, ImageBuffer};

#[cfg(feature = "jpeg")]
mod jpeg;
#[cfg(feature = "png")]
mod png;

#[cfg(feature = "jpeg")]
pub use jpeg::JpegDecoder;
#[cfg(feature = "png")]
pub use png::PngDecoder;

/// One container format. Implementations must fail, not guess, on data in
/// another format, so that the registry can move on to the next one.
pub trait Decoder {
    fn name(&self) -> &'static str;
    fn decode(&self, data: &[u8]) -> anyhow::Result<ImageBuffer>;
}

pub struct Registry {
    decoders: Vec<Box<dyn Decoder>>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            decoders: Vec::new(),
        }
    }

    pub fn register(&mut self, decoder: Box<dyn Decoder>) {
        self.decoders.push(decoder);
    }

    pub fn decoder_names(&self) -> Vec<&'static str> {
        self.decoders.iter().map(|d| d.name()).collect()
    }

    // first decoder that succeeds wins
    pub fn decode(&self, data: &[u8]) -> anyhow::Result<ImageBuffer> {
        if self.decoders.is_empty() {
            bail!("no image decoder available");
        }
        for decoder in &self.decoders {
            match decoder.decode(data) {
                Ok(img) => {
                    debug!(
                        "Decoded {} image, {}x{}",
                        decoder.name(),
                        img.size().width,
                        img.size().height
                    );
                    return Ok(img);
                }
                Err(err) => debug!("Not a {} image: {}", decoder.name(), err),
            }
        }
        bail!("unknown format (tried {})", self.decoder_names().join(", "))
    }
}

impl Default for Registry {
    fn default() -> Self {
        #[allow(unused_mut)]
        let mut registry = Registry::new();
        #[cfg(feature = "png")]
        registry.register(Box::new(PngDecoder));
        #[cfg(feature = "jpeg")]
        registry.register(Box::new(JpegDecoder));
        registry
    }
}
