use argh::FromArgs;
use std::path::PathBuf;
use std::str::FromStr;

use satblur::io::functional as F;
use satblur::{FilterKind, ImageProcessor};

#[derive(FromArgs)]
/// Apply a spatial kernel filter to an image and write the result as PPM
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to the output ppm image
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// filter: box-naive, box-sat, sharpen, edge-detect, gaussian, emboss (default: box-sat)
    #[argh(option, short = 'f', default = "String::from(\"box-sat\")")]
    filter: String,

    /// kernel size (default: 3)
    #[argh(option, short = 'k', default = "3")]
    kernel_size: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();
    let kind = FilterKind::from_str(&args.filter)?;

    let data = std::fs::read(&args.input)?;

    let mut processor = ImageProcessor::new();
    processor.load_image(&data)?;
    processor.apply_filter(args.kernel_size, kind)?;

    let image = processor.image().ok_or("no image to write")?;
    F::write_image_ppm(&args.output, image)?;

    log::info!(
        "wrote {}x{} filtered image to {}",
        processor.width(),
        processor.height(),
        args.output.display()
    );

    Ok(())
}
