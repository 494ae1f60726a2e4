//! Pure pixel operations and dimension math.
//!
//! Everything here is a function from image (or dimensions) to image — no
//! I/O, no session state — so the filter behaviour is unit-testable on
//! synthetic buffers.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Gaussian blur | `image::imageops::blur` |
//! | Unsharp mask | Gaussian blur + percent-strength blend (the `image` crate's `unsharpen` has no strength knob) |
//! | Shrink math | pure integer truncation |

use image::{DynamicImage, ImageBuffer, Pixel};

/// Gaussian-blur the image with the given radius, preserving its colour type.
pub fn gaussian_blur(img: &DynamicImage, radius: f64) -> DynamicImage {
    img.blur(radius as f32)
}

/// Percent-strength unsharp mask with a zero threshold.
///
/// Blurs a copy of the image at `radius` and adds `percent`% of the
/// difference back onto the original:
///
/// ```text
/// out = clamp(orig + (percent / 100) * (orig - blurred))
/// ```
///
/// With the threshold fixed at zero every pixel participates, so a flat
/// field is (near-)unchanged while edges gain contrast. `percent` is
/// deliberately unrestricted: 100 is the conventional strength, values below
/// it under-restore the blur, values above it overshoot.
pub fn unsharp_mask(img: &DynamicImage, radius: f64, percent: i32) -> DynamicImage {
    let amount = percent as f32 / 100.0;
    match img {
        DynamicImage::ImageLuma8(orig) => {
            DynamicImage::ImageLuma8(unsharp_buffer(orig, radius, amount))
        }
        DynamicImage::ImageRgb8(orig) => {
            DynamicImage::ImageRgb8(unsharp_buffer(orig, radius, amount))
        }
        DynamicImage::ImageRgba8(orig) => {
            DynamicImage::ImageRgba8(unsharp_buffer(orig, radius, amount))
        }
        // Sessions normalize to Luma8/Rgb8 up front; anything else (16-bit,
        // float) goes through an Rgb8 conversion.
        other => unsharp_mask(&DynamicImage::ImageRgb8(other.to_rgb8()), radius, percent),
    }
}

/// Unsharp-blend one 8-bit buffer against its own Gaussian blur.
fn unsharp_buffer<P>(
    orig: &ImageBuffer<P, Vec<u8>>,
    radius: f64,
    amount: f32,
) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let blurred = image::imageops::blur(orig, radius as f32);
    let mut out = orig.clone();
    for (o, b) in out.iter_mut().zip(blurred.iter()) {
        let diff = f32::from(*o) - f32::from(*b);
        *o = (f32::from(*o) + diff * amount).clamp(0.0, 255.0) as u8;
    }
    out
}

/// Dimensions after dividing both edges by `factor`.
///
/// Factors <= 1 are a no-op. Division truncates toward zero; an edge that
/// would truncate to 0 is held at 1 so the bitmap stays valid.
pub fn shrink_dimensions((width, height): (u32, u32), factor: f64) -> (u32, u32) {
    if factor <= 1.0 {
        return (width, height);
    }
    let scale = |edge: u32| ((f64::from(edge) / factor) as u32).max(1);
    (scale(width), scale(height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, GrayImage, Luma, Rgb, RgbImage};

    /// Gray image split into a dark left half and a bright right half.
    fn step_edge(width: u32, height: u32, low: u8, high: u8) -> GrayImage {
        GrayImage::from_fn(width, height, |x, _| {
            if x < width / 2 { Luma([low]) } else { Luma([high]) }
        })
    }

    #[test]
    fn shrink_noop_at_or_below_one() {
        assert_eq!(shrink_dimensions((100, 80), 1.0), (100, 80));
        assert_eq!(shrink_dimensions((100, 80), 0.5), (100, 80));
        assert_eq!(shrink_dimensions((100, 80), -3.0), (100, 80));
    }

    #[test]
    fn shrink_divides_and_truncates() {
        assert_eq!(shrink_dimensions((100, 100), 2.0), (50, 50));
        // 100 / 3 = 33.33 → 33, 55 / 3 = 18.33 → 18
        assert_eq!(shrink_dimensions((100, 55), 3.0), (33, 18));
        // 7 / 2 = 3.5 → 3
        assert_eq!(shrink_dimensions((7, 7), 2.0), (3, 3));
    }

    #[test]
    fn shrink_clamps_to_one_pixel() {
        assert_eq!(shrink_dimensions((3, 3), 10.0), (1, 1));
    }

    #[test]
    fn gaussian_blur_preserves_colour_type_and_size() {
        let img = DynamicImage::ImageLuma8(step_edge(16, 16, 0, 255));
        let blurred = gaussian_blur(&img, 2.0);
        assert_eq!(blurred.color(), img.color());
        assert_eq!(blurred.dimensions(), (16, 16));
    }

    #[test]
    fn gaussian_blur_softens_a_step_edge() {
        let img = DynamicImage::ImageLuma8(step_edge(16, 16, 0, 255));
        let blurred = gaussian_blur(&img, 2.0).to_luma8();
        // Pixels flanking the boundary move toward the middle.
        let left = blurred.get_pixel(7, 8)[0];
        let right = blurred.get_pixel(8, 8)[0];
        assert!(left > 0, "dark side should brighten, got {left}");
        assert!(right < 255, "bright side should darken, got {right}");
    }

    #[test]
    fn unsharp_zero_percent_is_identity() {
        let img = DynamicImage::ImageLuma8(step_edge(16, 16, 40, 200));
        let out = unsharp_mask(&img, 3.0, 0);
        assert_eq!(out.as_bytes(), img.as_bytes());
    }

    #[test]
    fn unsharp_near_identity_on_flat_field() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(16, 16, Luma([128])));
        let out = unsharp_mask(&img, 3.0, 100).to_luma8();
        for p in out.pixels() {
            assert!(
                (i16::from(p[0]) - 128).abs() <= 1,
                "flat field should stay flat, got {}",
                p[0]
            );
        }
    }

    #[test]
    fn unsharp_amplifies_edge_contrast() {
        let img = DynamicImage::ImageLuma8(step_edge(20, 20, 64, 192));
        let out = unsharp_mask(&img, 2.0, 100).to_luma8();
        // Overshoot on both sides of the boundary.
        assert!(out.get_pixel(9, 10)[0] < 64, "dark side should overshoot darker");
        assert!(out.get_pixel(10, 10)[0] > 192, "bright side should overshoot brighter");
    }

    #[test]
    fn unsharp_keeps_rgb_channels() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(16, 16, |x, _| {
            if x < 8 { Rgb([10, 120, 240]) } else { Rgb([240, 120, 10]) }
        }));
        let out = unsharp_mask(&img, 2.0, 100);
        assert_eq!(out.color(), image::ColorType::Rgb8);
        assert_eq!(out.dimensions(), (16, 16));
    }
}
