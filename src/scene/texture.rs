//! Diffuse image for the cube faces.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::VistaError;

/// Edge length of the built-in checkerboard, in texels.
pub const CHECKER_SIZE: u32 = 256;
/// Cells per checkerboard edge.
pub const CHECKER_CELLS: u32 = 4;

const CHECKER_LIGHT: Rgba<u8> = Rgba([209, 158, 97, 255]);
const CHECKER_DARK: Rgba<u8> = Rgba([140, 92, 51, 255]);

/// Two-tone square checkerboard with `cells` cells per edge. The top-left
/// cell is the light tone.
#[must_use]
pub fn checkerboard(size: u32, cells: u32) -> RgbaImage {
    let size = size.max(1);
    let cell = (size / cells.max(1)).max(1);
    RgbaImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            CHECKER_LIGHT
        } else {
            CHECKER_DARK
        }
    })
}

/// Decode a PNG or JPEG file into RGBA8. Row 0 is the top of the image,
/// matching the cube's `v = 0` edge.
///
/// # Errors
///
/// Returns [`VistaError::Texture`] if the file is missing, unreadable, or
/// not a supported image.
pub fn load_image(path: &Path) -> Result<RgbaImage, VistaError> {
    Ok(image::open(path)?.into_rgba8())
}

/// The configured diffuse image, or the checkerboard when none is set or
/// the file cannot be loaded.
#[must_use]
pub fn diffuse_image(path: Option<&Path>) -> RgbaImage {
    let Some(path) = path else {
        return checkerboard(CHECKER_SIZE, CHECKER_CELLS);
    };
    match load_image(path) {
        Ok(image) => {
            log::info!(
                "loaded diffuse texture {} ({}x{})",
                path.display(),
                image.width(),
                image.height()
            );
            image
        }
        Err(e) => {
            log::warn!("{}: {e}; using checkerboard", path.display());
            checkerboard(CHECKER_SIZE, CHECKER_CELLS)
        }
    }
}
