use tracing::debug;

use crate::ecc::QrCodeEcc;
use crate::error::{QrTermError, Result};
use crate::matrix::{BitMatrix, MatrixSource, QrcodeSource};
use crate::render::{render, RenderOptions};

/// Turns data into a terminal QR code.
///
/// The error correction level is picked from the data length, the matrix comes from the
/// [`MatrixSource`] and is then rendered with the configured [`RenderOptions`].
///
/// # Example
///
/// ```rust
/// use qr_term::{QrGenerator, RenderOptions};
///
/// let generator = QrGenerator::new(RenderOptions::new(1, 2, false, false));
/// let text = generator.generate("https://example.com").unwrap();
/// assert!(text.contains('\n'));
/// ```
#[derive(Clone, Debug, Default)]
pub struct QrGenerator<S = QrcodeSource> {
    options: RenderOptions,
    source: S,
}

impl QrGenerator {
    pub fn new(options: RenderOptions) -> Self {
        Self::with_source(options, QrcodeSource)
    }
}

impl<S: MatrixSource> QrGenerator<S> {
    pub fn with_source(options: RenderOptions, source: S) -> Self {
        Self { options, source }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Builds the module matrix for `data`, including border and size multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`QrTermError::EmptyInput`] for empty data, or whatever the source reports,
    /// typically [`QrTermError::Capacity`].
    pub fn generate_matrix(&self, data: &str) -> Result<BitMatrix> {
        if data.is_empty() {
            return Err(QrTermError::EmptyInput("data cannot be empty".to_string()));
        }
        let level = QrCodeEcc::for_data(data);
        debug!(chars = data.chars().count(), %level, "selected error correction level");

        let matrix = self.source.make_matrix(
            data,
            level,
            self.options.size_multiplier(),
            self.options.border(),
        )?;
        debug!(
            width = matrix.width(),
            height = matrix.height(),
            "built module matrix"
        );
        Ok(matrix)
    }

    /// Generates the rendered QR code text for `data`.
    ///
    /// # Errors
    ///
    /// See [`QrGenerator::generate_matrix`].
    pub fn generate(&self, data: &str) -> Result<String> {
        let matrix = self.generate_matrix(data)?;
        Ok(render(&matrix, &self.options))
    }
}
