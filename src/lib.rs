//! # qr-term
//!
//! Render QR codes as colored text in your terminal.
//!
//! `qr-term` takes a string (a URL, some text, or a WiFi network's credentials), encodes it as a
//! QR code and draws every module with block characters, optionally wrapped in ANSI color codes.
//! The symbol encoding itself is done by the [`qrcode`](https://docs.rs/qrcode) crate; this crate
//! decides the error correction level, renders the module matrix and builds `WIFI:` payloads.
//!
//! ## Features
//!
//! - Error correction chosen from the data length: short data gets `High`, long data `Low`.
//! - Terminal output with a normal or inverted palette, with or without color.
//! - `WIFI:` payload encoding and decoding for network join codes.
//! - PNG and SVG export of the same matrix.
//!
//! ## Example
//!
//! Render a URL for a dark terminal:
//!
//! ```rust
//! use qr_term::{QrGenerator, RenderOptions};
//!
//! let generator = QrGenerator::new(RenderOptions::default());
//! println!("{}", generator.generate("https://example.com").unwrap());
//! ```
//!
//! Render a WiFi join code:
//!
//! ```rust
//! use qr_term::{QrGenerator, RenderOptions, Security, WifiCredential};
//!
//! let wifi = WifiCredential::new("HomeNet", "hunter22", Security::Wpa, false).unwrap();
//! let payload = wifi.encode().unwrap();
//! assert_eq!(payload, "WIFI:T:WPA;S:HomeNet;P:hunter22;;");
//!
//! let text = QrGenerator::new(RenderOptions::new(1, 2, false, false))
//!     .generate(&payload)
//!     .unwrap();
//! assert!(!text.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`ecc`]: Error correction level policy.
//! - [`wifi`]: `WIFI:` payload codec.
//! - [`matrix`]: Module matrix and the encoder boundary.
//! - [`render`]: Terminal rendering.
//! - [`generator`]: Policy, encoder and renderer wired together.
//! - [`helper`]: PNG and SVG export.
//! - [`cli`]: The `qr-term` command line.
#![forbid(unsafe_code)]

pub mod cli;
pub mod ecc;
pub mod error;
pub mod generator;
pub mod helper;
pub mod matrix;
pub mod render;
pub mod wifi;

pub use ecc::QrCodeEcc;
pub use error::{QrTermError, Result};
pub use generator::QrGenerator;
pub use matrix::{BitMatrix, MatrixSource, QrcodeSource};
pub use render::{render, RenderOptions};
pub use wifi::{Security, WifiCredential};
