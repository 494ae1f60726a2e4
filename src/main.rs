use clap::Parser;
use std::path::PathBuf;
use turify::params::TurifyParams;
use turify::session::TuringSession;

#[derive(Parser)]
#[command(name = "turify")]
#[command(about = "Grow Turing-pattern artifacts out of images by repeated blur/sharpen cycles")]
#[command(long_about = "\
Grow Turing-pattern artifacts out of images by repeated blur/sharpen cycles

Each iteration applies a Gaussian blur followed by an unsharp mask. The
feedback between the two filters settles into organic stripe-and-spot
structures reminiscent of reaction-diffusion patterns.

The sharpen radius is derived from the blur radius divided by the ratio, so
with the defaults (radius 5, ratio 0.5) sharpening works at radius 10.

By default the image is converted to grayscale before processing; pass
--colour to keep the colour channels. Large inputs can be pre-shrunk with
--shrink-factor to speed things up.")]
#[command(version)]
struct Cli {
    /// Input image
    path: PathBuf,

    /// Output image; format follows the extension
    output_path: PathBuf,

    /// How many times to blur and resharpen [default: 50]
    #[arg(short = 'i', long)]
    iterations: Option<u32>,

    /// Radius of the Gaussian blur; the sharpen radius is derived from it [default: 5]
    #[arg(short = 'r', long)]
    radius: Option<f64>,

    /// Ratio of blur radius to sharpen radius; must be positive [default: 0.5]
    #[arg(short = 'R', long)]
    ratio: Option<f64>,

    /// Unsharp mask strength in percent; values below 100 get strange [default: 100]
    #[arg(short = 'p', long)]
    percentage_sharp: Option<i32>,

    /// Divide both dimensions by this before processing, for speed [default: 1]
    #[arg(short = 's', long)]
    shrink_factor: Option<f64>,

    /// Keep colour instead of converting to grayscale
    #[arg(short = 'c', long)]
    colour: bool,

    /// Print progress during processing
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Overlay explicitly supplied flags onto the library defaults.
///
/// Value flags carry no clap defaults on purpose: an omitted flag falls
/// through to `TurifyParams::default()`, so the defaults live in exactly one
/// place.
fn params_from_cli(cli: &Cli) -> TurifyParams {
    let defaults = TurifyParams::default();
    TurifyParams {
        iterations: cli.iterations.unwrap_or(defaults.iterations),
        ratio: cli.ratio.unwrap_or(defaults.ratio),
        blur_radius: cli.radius.unwrap_or(defaults.blur_radius),
        percentage_sharp: cli.percentage_sharp.unwrap_or(defaults.percentage_sharp),
        shrink_factor: cli.shrink_factor.unwrap_or(defaults.shrink_factor),
        colour: cli.colour,
        verbose: cli.verbose,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let params = params_from_cli(&cli);

    TuringSession::open(&cli.path, params)?
        .turify()
        .save(&cli.output_path)?;

    Ok(())
}
