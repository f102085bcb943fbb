//! Error correction level policy.
//!
//! Short payloads can carry the redundancy of `High` without outgrowing the symbol, longer
//! payloads trade redundancy for capacity.
use core::fmt;

use qrcode::EcLevel;

/// Error correction level for a QR code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum QrCodeEcc {
    /// Tolerates ~7% erroneous codewords.
    Low,
    /// Tolerates ~15% erroneous codewords.
    Medium,
    /// Tolerates ~25% erroneous codewords.
    Quartile,
    /// Tolerates ~30% erroneous codewords.
    High,
}

impl QrCodeEcc {
    /// Picks the level for data of `len` characters.
    ///
    /// | length      | level    |
    /// |-------------|----------|
    /// | `< 50`      | High     |
    /// | `50..100`   | Quartile |
    /// | `100..200`  | Medium   |
    /// | `>= 200`    | Low      |
    pub const fn for_len(len: usize) -> Self {
        use QrCodeEcc::*;
        match len {
            0..=49 => High,
            50..=99 => Quartile,
            100..=199 => Medium,
            _ => Low,
        }
    }

    /// Picks the level for `data`, measured in characters rather than bytes.
    pub fn for_data(data: &str) -> Self {
        Self::for_len(data.chars().count())
    }

    pub(crate) fn ec_level(self) -> EcLevel {
        use QrCodeEcc::*;
        match self {
            Low => EcLevel::L,
            Medium => EcLevel::M,
            Quartile => EcLevel::Q,
            High => EcLevel::H,
        }
    }
}

impl fmt::Display for QrCodeEcc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QrCodeEcc::Low => "low",
            QrCodeEcc::Medium => "medium",
            QrCodeEcc::Quartile => "quartile",
            QrCodeEcc::High => "high",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0, QrCodeEcc::High; "empty")]
    #[test_case(49, QrCodeEcc::High; "last high")]
    #[test_case(50, QrCodeEcc::Quartile; "first quartile")]
    #[test_case(99, QrCodeEcc::Quartile; "last quartile")]
    #[test_case(100, QrCodeEcc::Medium; "first medium")]
    #[test_case(199, QrCodeEcc::Medium; "last medium")]
    #[test_case(200, QrCodeEcc::Low; "first low")]
    #[test_case(usize::MAX, QrCodeEcc::Low; "huge")]
    fn test_for_len_boundaries(len: usize, expected: QrCodeEcc) {
        assert_eq!(QrCodeEcc::for_len(len), expected);
    }

    #[test]
    fn test_for_data_counts_characters() {
        assert_eq!(QrCodeEcc::for_data("hi"), QrCodeEcc::High);
        assert_eq!(QrCodeEcc::for_data(&"a".repeat(75)), QrCodeEcc::Quartile);
        assert_eq!(QrCodeEcc::for_data(&"a".repeat(150)), QrCodeEcc::Medium);
        assert_eq!(QrCodeEcc::for_data(&"a".repeat(250)), QrCodeEcc::Low);
        // 40 characters, 120 bytes.
        assert_eq!(QrCodeEcc::for_data(&"界".repeat(40)), QrCodeEcc::High);
    }

    #[test]
    fn test_ordering_follows_redundancy() {
        assert!(QrCodeEcc::Low < QrCodeEcc::Medium);
        assert!(QrCodeEcc::Medium < QrCodeEcc::Quartile);
        assert!(QrCodeEcc::Quartile < QrCodeEcc::High);
    }
}
