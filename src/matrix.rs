//! Module matrices and the encoder boundary.
//!
//! The QR symbol itself is built by the [`qrcode`] crate. Everything downstream only sees a
//! [`BitMatrix`], so tests can feed renderers a hand-made matrix through a stub [`MatrixSource`].
use qrcode::{Color, QrCode};
use tracing::debug;

use crate::ecc::QrCodeEcc;
use crate::error::{QrTermError, Result};

/// Largest matrix side, in modules after border and scaling, a [`QrcodeSource`] will build.
pub const MAX_MATRIX_SIDE: u64 = 4096;

/// A rectangular grid of modules, `true` meaning dark.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct BitMatrix {
    rows: Vec<Vec<bool>>,
}

impl BitMatrix {
    /// Builds a matrix from rows of equal length. Zero rows is a valid, empty matrix.
    ///
    /// # Errors
    ///
    /// Returns [`QrTermError::RaggedMatrix`] for the first row whose length differs from the first.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, found)) = rows
                .iter()
                .map(Vec::len)
                .enumerate()
                .find(|&(_, len)| len != expected)
            {
                return Err(QrTermError::RaggedMatrix {
                    row,
                    expected,
                    found,
                });
            }
        }
        Ok(Self { rows })
    }

    /// Number of modules per row.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns the module at column `x`, row `y`. Out of range coordinates read as light.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }
}

/// Produces the module matrix for some data.
///
/// `box_size` repeats every module that many times in both directions and `border` adds that
/// many light modules around the symbol, before scaling.
pub trait MatrixSource {
    /// # Errors
    ///
    /// Returns [`QrTermError::Capacity`] if the data cannot be encoded at `level`, and
    /// [`QrTermError::TooLarge`] if `border` and `box_size` blow the matrix past
    /// [`MAX_MATRIX_SIDE`].
    fn make_matrix(
        &self,
        data: &str,
        level: QrCodeEcc,
        box_size: u32,
        border: u32,
    ) -> Result<BitMatrix>;
}

/// [`MatrixSource`] backed by the `qrcode` crate.
///
/// The smallest version that holds the data at the requested level is chosen. If none does,
/// the error is returned as is; the level is never lowered to make the data fit.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrcodeSource;

impl MatrixSource for QrcodeSource {
    fn make_matrix(
        &self,
        data: &str,
        level: QrCodeEcc,
        box_size: u32,
        border: u32,
    ) -> Result<BitMatrix> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), level.ec_level())?;
        let width = code.width();
        debug!(width, version = ?code.version(), %level, "encoded QR symbol");

        let box_size = box_size.max(1);
        let side = (width as u64 + 2 * u64::from(border)).saturating_mul(u64::from(box_size));
        if side > MAX_MATRIX_SIDE {
            return Err(QrTermError::TooLarge {
                side,
                max: MAX_MATRIX_SIDE,
            });
        }

        let modules: Vec<Vec<bool>> = code
            .to_colors()
            .chunks(width)
            .map(|row| row.iter().map(|&c| c == Color::Dark).collect())
            .collect();

        Ok(BitMatrix {
            rows: scale(&pad(&modules, border as usize), box_size as usize),
        })
    }
}

fn pad(modules: &[Vec<bool>], border: usize) -> Vec<Vec<bool>> {
    let width = modules.first().map_or(0, Vec::len) + 2 * border;
    let mut rows = Vec::with_capacity(modules.len() + 2 * border);
    rows.resize(border, vec![false; width]);
    for row in modules {
        let mut padded = Vec::with_capacity(width);
        padded.resize(border, false);
        padded.extend_from_slice(row);
        padded.resize(width, false);
        rows.push(padded);
    }
    rows.resize(rows.len() + border, vec![false; width]);
    rows
}

fn scale(modules: &[Vec<bool>], factor: usize) -> Vec<Vec<bool>> {
    if factor == 1 {
        return modules.to_vec();
    }
    modules
        .iter()
        .flat_map(|row| {
            let wide: Vec<bool> = row
                .iter()
                .flat_map(|&dark| std::iter::repeat(dark).take(factor))
                .collect();
            std::iter::repeat(wide).take(factor)
        })
        .collect()
}
