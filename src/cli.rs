//! Command line front end for the `qr-term` binary.
use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Args, Parser};
use tracing::{debug, info};

use crate::generator::QrGenerator;
use crate::helper;
use crate::render::RenderOptions;
use crate::wifi::WifiCredential;

/// Generate QR codes in your terminal
#[derive(Parser, Debug)]
#[command(name = "qr-term", version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Data to encode (URL, text, etc.). Read from stdin when omitted
    pub data: Option<String>,

    /// QR code size multiplier
    #[arg(short, long, default_value_t = 1)]
    pub size: i32,

    /// Invert colors for light backgrounds
    #[arg(short, long)]
    pub invert: bool,

    /// Border size in modules
    #[arg(short, long, default_value_t = 2)]
    pub border: i32,

    /// Save QR code to file (.png and .svg are written as images)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable colored output (also set by a non-empty NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    #[command(flatten)]
    pub wifi: WifiArgs,
}

#[derive(Args, Debug)]
#[command(next_help_heading = "WiFi QR code options")]
pub struct WifiArgs {
    /// Generate WiFi QR code
    #[arg(long = "wifi")]
    pub enabled: bool,

    /// WiFi SSID
    #[arg(long)]
    pub ssid: Option<String>,

    /// WiFi password
    #[arg(long)]
    pub password: Option<String>,

    /// WiFi security type
    #[arg(long, default_value = "WPA", value_parser = ["WPA", "WEP", "nopass"])]
    pub security: String,

    /// Hidden SSID
    #[arg(long)]
    pub hidden: bool,
}

/// Any non-empty `NO_COLOR` value disables color, see <https://no-color.org>.
fn no_color_env(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

impl Cli {
    /// Runs one invocation, writing the QR code or a confirmation line to `out`.
    ///
    /// `stdin` is only called when no positional data was given outside WiFi mode.
    ///
    /// # Errors
    ///
    /// Fails on a missing SSID in WiFi mode, missing data, invalid credentials, encoding
    /// failures and output errors. Nothing is written to `--output` unless generation succeeded.
    pub fn run<F, W>(&self, stdin: F, out: &mut W) -> anyhow::Result<()>
    where
        F: FnOnce() -> Option<String>,
        W: Write,
    {
        let data = self.payload(stdin)?;
        let options = RenderOptions::new(self.size, self.border, self.invert, self.use_color());
        debug!(?options, "generating QR code");
        let generator = QrGenerator::new(options);

        match &self.output {
            Some(path) if helper::is_image_path(path) => {
                let matrix = generator.generate_matrix(&data)?;
                helper::save_image(&matrix, path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                writeln!(out, "QR code saved to {}", path.display())?;
            }
            Some(path) => {
                let text = generator.generate(&data)?;
                fs::write(path, text)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!(path = %path.display(), "saved QR code text");
                writeln!(out, "QR code saved to {}", path.display())?;
            }
            None => {
                let text = generator.generate(&data)?;
                writeln!(out, "{text}")?;
            }
        }
        Ok(())
    }

    /// Color is on unless `--no-color` was given or `NO_COLOR` is set to a non-empty value.
    pub fn use_color(&self) -> bool {
        !self.no_color && !no_color_env(std::env::var_os("NO_COLOR").as_deref())
    }

    fn payload<F>(&self, stdin: F) -> anyhow::Result<String>
    where
        F: FnOnce() -> Option<String>,
    {
        if self.wifi.enabled {
            let ssid = self
                .wifi
                .ssid
                .as_deref()
                .filter(|ssid| !ssid.is_empty())
                .ok_or_else(|| anyhow!("--ssid is required for WiFi QR codes"))?;
            let credential = WifiCredential::from_parts(
                ssid,
                self.wifi.password.as_deref().unwrap_or_default(),
                &self.wifi.security,
                self.wifi.hidden,
            )?;
            return Ok(credential.encode()?);
        }

        self.data
            .clone()
            .filter(|data| !data.is_empty())
            .or_else(|| {
                stdin()
                    .map(|piped| piped.trim().to_string())
                    .filter(|piped| !piped.is_empty())
            })
            .ok_or_else(|| anyhow!("No data provided. Use positional argument or pipe data via stdin."))
    }
}
