//! Progress line formatting for verbose mode.
//!
//! Pure string functions; the session decides when to print them based on
//! its `verbose` flag. Keeping formatting out of the session makes the exact
//! wording testable without capturing stdout.

use std::path::Path;

/// Line printed once after the bitmap is decoded and preprocessed.
pub fn opened_line(width: u32, height: u32, blur_radius: f64, sharp_radius: f64) -> String {
    format!(
        "Opened {width}x{height} image with blur radius {blur_radius} and sharp radius {sharp_radius}"
    )
}

/// Line printed before each blur+sharpen round. `n` is 1-based.
pub fn iteration_line(n: u32) -> String {
    format!("Processing iteration {n}")
}

/// Line printed after the full loop completes.
pub fn completed_line(total: u32) -> String {
    format!("Completed {total} iterations")
}

/// Line printed after the result is written out.
pub fn saved_line(path: &Path) -> String {
    format!("Saved to {}", path.display())
}
