use crate::error::Result;
use crate::matrix::BitMatrix;

use image::{ImageBuffer, Luma};
use std::fs;
use std::path::Path;
use tracing::info;

/// Pixels per module edge when saving a matrix as an image file.
pub const PNG_MODULE_PIXELS: u32 = 8;

/*---- Utilities ----*/

// Returns a string of SVG code depicting the given matrix, one unit per module.
// Border and size multiplier are whatever the matrix already carries.
// The string always uses Unix newlines (\n), regardless of the platform.
pub fn to_svg_string(matrix: &BitMatrix) -> String {
	let mut result = String::new();
	result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
	result += "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
	result += &format!(
		"<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {} {}\" stroke=\"none\">\n",
		matrix.width(), matrix.height());
	result += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
	result += "\t<path d=\"";
	let mut first = true;
	for (y, row) in matrix.rows().enumerate() {
		for (x, &dark) in row.iter().enumerate() {
			if dark {
				if !first {
					result += " ";
				}
				first = false;
				result += &format!("M{},{}h1v1h-1z", x, y);
			}
		}
	}
	result += "\" fill=\"#000000\"/>\n";
	result += "</svg>\n";
	result
}

/// Converts a matrix to a grayscale image buffer.
///
/// # Arguments
///
/// * `matrix` - The modules to draw, dark ones black and light ones white.
/// * `module_px` - Edge length in pixels of one module, at least 1.
///
/// # Example
///
/// ```
/// use qr_term::helper::to_image_buffer;
/// use qr_term::BitMatrix;
///
/// let matrix = BitMatrix::from_rows(vec![vec![true, false]]).unwrap();
/// let img = to_image_buffer(&matrix, 4);
/// assert_eq!(img.dimensions(), (8, 4));
/// ```
pub fn to_image_buffer(matrix: &BitMatrix, module_px: u32) -> ImageBuffer<Luma<u8>, Vec<u8>> {
    let module_px = module_px.max(1);
    let width = u32::try_from(matrix.width()).unwrap_or(u32::MAX);
    let height = u32::try_from(matrix.height()).unwrap_or(u32::MAX);

    ImageBuffer::from_fn(width.saturating_mul(module_px), height.saturating_mul(module_px), |x, y| {
        if matrix.get((x / module_px) as usize, (y / module_px) as usize) {
            Luma([0u8]) // Black
        } else {
            Luma([255u8]) // White
        }
    })
}

/// Saves a matrix as an image file, the format taken from the extension of `path`.
///
/// `.svg` paths get [`to_svg_string`], anything else goes through the `image` crate with
/// [`PNG_MODULE_PIXELS`] pixels per module.
///
/// # Errors
///
/// Returns [`QrTermError::Io`](crate::QrTermError::Io) if the parent directory cannot be
/// created or the SVG cannot be written, and [`QrTermError::Image`](crate::QrTermError::Image)
/// if encoding or saving the image fails.
pub fn save_image(matrix: &BitMatrix, path: &Path) -> Result<()> {
    // Check if the directory exists, create it if it doesn't
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    if has_extension(path, "svg") {
        fs::write(path, to_svg_string(matrix))?;
    } else {
        to_image_buffer(matrix, PNG_MODULE_PIXELS).save(path)?;
    }
    info!(path = %path.display(), "saved QR code image");
    Ok(())
}

/// Case-insensitive extension check.
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Whether `path` names an image format [`save_image`] writes.
pub fn is_image_path(path: &Path) -> bool {
    has_extension(path, "png") || has_extension(path, "svg")
}
