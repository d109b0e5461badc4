use anyhow::{bail, Context};
use log::{debug, info, trace};
use std::path::PathBuf;

use super::decode::Registry;
use super::image::ConstImage;
use super::imgproc::bitpack;
use super::output;

/// Set `IMG2BITMAP_VERSION` at build time to override the package version.
pub const VERSION: &str = match option_env!("IMG2BITMAP_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

#[derive(Clone, Debug, Default)]
pub struct Options {
    pub image_file: Option<PathBuf>,
    pub print_version: bool,
}

pub fn run(options: &Options, out: &mut impl std::io::Write) -> anyhow::Result<()> {
    if options.print_version {
        writeln!(out, "{}", VERSION)?;
        return Ok(());
    }

    let image_file = match &options.image_file {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => bail!("empty file path"),
    };

    let data = std::fs::read(image_file).context("read file")?;
    debug!("Read {} bytes from {}", data.len(), image_file.display());

    let img = Registry::default().decode(&data).context("decode image")?;
    let bitmap = bitpack::pack(&img);
    info!(
        "Packed {}x{} image into {} bytes ({} per row)",
        img.width(),
        img.height(),
        bitmap.len(),
        bitmap.pitch()
    );
    trace!("{:?}", bitmap);

    output::write_hex_array(out, bitmap.as_bytes())?;
    Ok(())
}
