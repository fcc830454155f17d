//! Image loading and resizing for the logo column
//!
//! Decoding is delegated to the `image` crate; this layer only sizes the
//! result for the half-block renderer, which needs an even pixel height.

use std::path::Path;

use image::imageops::FilterType;
use image::GenericImageView;

use crate::canvas::pixmap::{PixelGrid, Rgb};
use crate::errors::{FetchError, Result};

/// Load an image and scale it to `target_width` columns, preserving aspect
/// ratio and forcing an even pixel height of at least 2.
///
/// With `target_width == None` the image is returned at native resolution.
/// Small targets amplify aliasing, so resizing uses Lanczos3.
///
/// Failures (missing file, unsupported format, corrupt data) are returned as
/// errors for the caller to absorb; "no image" is not fatal anywhere above.
pub fn prepare(path: &Path, target_width: Option<u32>) -> Result<PixelGrid> {
    let img = image::open(path).map_err(|e| FetchError::ImageDecode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let img = match target_width {
        None => img,
        Some(width) => {
            let height = scaled_height(img.width(), img.height(), width);
            img.resize_exact(width, height, FilterType::Lanczos3)
        }
    };

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = rgb
        .pixels()
        .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
        .collect();
    Ok(PixelGrid::from_pixels(width, height, pixels))
}

/// Aspect-preserving height for `target_width`, floored at 2 and rounded up
/// to even so rows can be paired.
fn scaled_height(orig_width: u32, orig_height: u32, target_width: u32) -> u32 {
    let mut height =
        (f64::from(orig_height) * f64::from(target_width) / f64::from(orig_width)).round() as u32;
    if height < 2 {
        height = 2;
    }
    if height % 2 == 1 {
        height += 1;
    }
    height
}
