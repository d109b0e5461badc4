use clap::Parser;
use std::path::PathBuf;

use img2bitmap::app;

/// A tool to convert image to bitmap (arduino format)
#[derive(Parser, Debug)]
#[command(disable_version_flag = true)]
struct Args {
    /// PNG or JPEG image to convert
    image_file: Option<PathBuf>,

    // anything after the image path is ignored
    #[arg(hide = true)]
    extra_args: Vec<String>,

    /// print current version
    #[arg(long, default_value_t = false)]
    version: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp_micros()
        .init();
    let args = Args::parse();
    if !args.extra_args.is_empty() {
        log::debug!("Ignoring extra arguments: {:?}", args.extra_args);
    }

    let options = app::Options {
        image_file: args.image_file,
        print_version: args.version,
    };
    app::run(&options, &mut std::io::stdout().lock())
}
