//! The processing session: one bitmap, mutated in place.
//!
//! [`TuringSession`] owns the image for the lifetime of a run. Construction
//! validates parameters, decodes the source, and applies the optional shrink
//! and grayscale preprocessing; after that every transition is caller-driven:
//!
//! ```text
//! open → (blur | sharpen | iterate | turify)* → save | show
//! ```
//!
//! Filter methods return `&mut Self` so runs chain:
//!
//! ```no_run
//! use turify::{params::TurifyParams, session::TuringSession};
//!
//! # fn main() -> Result<(), turify::session::TurifyError> {
//! TuringSession::open("in.png", TurifyParams::default())?
//!     .turify()
//!     .save("out.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! All errors are fatal to the run — there is no retry or partial-result
//! behaviour anywhere, matching the tool's single-shot batch nature.

use crate::filters;
use crate::output;
use crate::params::TurifyParams;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TurifyError {
    #[error("ratio must be a positive non-zero value (got {0})")]
    InvalidRatio(f64),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("could not launch image viewer: {0}")]
    Viewer(String),
}

/// One image being turified.
///
/// Owns the bitmap exclusively; every filter call replaces it in place.
pub struct TuringSession {
    img: DynamicImage,
    params: TurifyParams,
}

impl TuringSession {
    /// Decode `path` and preprocess it according to `params`.
    ///
    /// Validation happens before any file access: a non-positive (or NaN)
    /// `ratio` fails immediately with [`TurifyError::InvalidRatio`].
    ///
    /// Preprocessing, in order:
    /// 1. If `shrink_factor > 1`, divide both dimensions by it (truncating).
    ///    The result feeds straight into a blur, so a cheap triangle filter
    ///    is used rather than a quality resampler.
    /// 2. Normalize to 8-bit: grayscale (`Luma8`) unless `colour` is set,
    ///    in which case `Rgb8`. The unsharp blend operates on u8 samples.
    pub fn open(path: impl AsRef<Path>, params: TurifyParams) -> Result<Self, TurifyError> {
        let path = path.as_ref();
        if params.ratio <= 0.0 || params.ratio.is_nan() {
            return Err(TurifyError::InvalidRatio(params.ratio));
        }

        let mut img = ImageReader::open(path)
            .map_err(TurifyError::Io)?
            .decode()
            .map_err(|e| TurifyError::Decode {
                path: path.to_path_buf(),
                source: e,
            })?;

        if params.shrink_factor > 1.0 {
            let (w, h) =
                filters::shrink_dimensions((img.width(), img.height()), params.shrink_factor);
            img = img.resize_exact(w, h, FilterType::Triangle);
        }

        img = if params.colour {
            DynamicImage::ImageRgb8(img.to_rgb8())
        } else {
            DynamicImage::ImageLuma8(img.to_luma8())
        };

        if params.verbose {
            println!(
                "{}",
                output::opened_line(
                    img.width(),
                    img.height(),
                    params.blur_radius,
                    params.sharp_radius()
                )
            );
        }

        Ok(Self { img, params })
    }

    /// Gaussian-blur the bitmap with `blur_radius`, in place.
    pub fn blur(&mut self) -> &mut Self {
        self.img = filters::gaussian_blur(&self.img, self.params.blur_radius);
        self
    }

    /// Unsharp-mask the bitmap in place: radius `sharp_radius`, strength
    /// `percentage_sharp` percent, threshold 0.
    pub fn sharpen(&mut self) -> &mut Self {
        self.img = filters::unsharp_mask(
            &self.img,
            self.params.sharp_radius(),
            self.params.percentage_sharp,
        );
        self
    }

    /// One blur-then-sharpen round. The order is the whole effect:
    /// sharpening a freshly blurred image is what grows the pattern.
    pub fn iterate(&mut self) -> &mut Self {
        self.blur().sharpen()
    }

    /// Run [`iterate`](Self::iterate) exactly `iterations` times.
    ///
    /// Sequential, no early exit, no convergence check. Zero iterations
    /// leaves the post-construction bitmap untouched.
    pub fn turify(&mut self) -> &mut Self {
        for i in 0..self.params.iterations {
            if self.params.verbose {
                println!("{}", output::iteration_line(i + 1));
            }
            self.iterate();
        }
        if self.params.verbose {
            println!("{}", output::completed_line(self.params.iterations));
        }
        self
    }

    /// Encode the bitmap to `path`; the format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TurifyError> {
        let path = path.as_ref();
        self.img.save(path).map_err(|e| match e {
            image::ImageError::IoError(io) => TurifyError::Io(io),
            other => TurifyError::Encode {
                path: path.to_path_buf(),
                source: other,
            },
        })?;
        if self.params.verbose {
            println!("{}", output::saved_line(path));
        }
        Ok(())
    }

    /// Write the bitmap to a temp PNG and hand it to the platform's default
    /// image viewer. The optional title becomes the temp file's stem.
    pub fn show(&self, title: Option<&str>) -> Result<(), TurifyError> {
        let stem = title.unwrap_or("turify-preview");
        let path = std::env::temp_dir().join(format!("{stem}.png"));
        self.save(&path)?;
        spawn_viewer(&path)
    }

    /// Current bitmap dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.img.width(), self.img.height())
    }

    /// The current bitmap.
    pub fn image(&self) -> &DynamicImage {
        &self.img
    }
}

#[cfg(target_os = "macos")]
const VIEWER: &[&str] = &["open"];
#[cfg(target_os = "windows")]
const VIEWER: &[&str] = &["cmd", "/C", "start", ""];
#[cfg(all(unix, not(target_os = "macos")))]
const VIEWER: &[&str] = &["xdg-open"];

fn spawn_viewer(path: &Path) -> Result<(), TurifyError> {
    std::process::Command::new(VIEWER[0])
        .args(&VIEWER[1..])
        .arg(path)
        .spawn()
        .map(|_| ())
        .map_err(|e| TurifyError::Viewer(format!("{} failed: {e}", VIEWER[0])))
}
