//! `WIFI:` payload format.
//!
//! Phone cameras recognise a QR code holding `WIFI:T:<security>;S:<ssid>;P:<password>;;` and
//! offer to join the network. Fields are separated by `;` and the characters `\ ; , : "` inside
//! the SSID or password are escaped with a backslash.
use core::fmt;
use core::str::FromStr;

use crate::error::{QrTermError, Result};

const PREFIX: &str = "WIFI:";
const SPECIAL_CHARS: [char; 5] = ['\\', ';', ',', ':', '"'];
const UNKNOWN_SECURITY: &str = "security must be one of WPA, WEP, nopass";

/// Network authentication type.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Default)]
pub enum Security {
    #[default]
    Wpa,
    Wep,
    /// Open network, written as `nopass`.
    Open,
    /// A `T:` token found while decoding that is none of the above. Never encoded.
    Other(String),
}

impl Security {
    /// Maps a `T:` token to a variant, keeping unknown tokens as [`Security::Other`].
    pub fn from_token(token: &str) -> Self {
        token
            .parse()
            .unwrap_or_else(|_| Security::Other(token.to_string()))
    }

    /// The token written after `T:`.
    pub fn as_token(&self) -> &str {
        match self {
            Security::Wpa => "WPA",
            Security::Wep => "WEP",
            Security::Open => "nopass",
            Security::Other(token) => token,
        }
    }

    pub fn requires_password(&self) -> bool {
        !matches!(self, Security::Open)
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for Security {
    type Err = QrTermError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "WPA" => Ok(Security::Wpa),
            "WEP" => Ok(Security::Wep),
            "nopass" => Ok(Security::Open),
            _ => Err(QrTermError::Validation(UNKNOWN_SECURITY.to_string())),
        }
    }
}

/// Credentials for a single WiFi network.
///
/// Values built with [`WifiCredential::new`] are always valid. Values produced by
/// [`WifiCredential::decode`] are taken as found and may fail [`WifiCredential::encode`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WifiCredential {
    ssid: String,
    password: String,
    security: Security,
    hidden: bool,
}

impl WifiCredential {
    /// Creates a validated credential.
    ///
    /// # Errors
    ///
    /// Returns [`QrTermError::Validation`] if the SSID is empty, if `security` is
    /// [`Security::Other`], or if `security` is not [`Security::Open`] and the password is empty.
    pub fn new(
        ssid: impl Into<String>,
        password: impl Into<String>,
        security: Security,
        hidden: bool,
    ) -> Result<Self> {
        let credential = Self {
            ssid: ssid.into(),
            password: password.into(),
            security,
            hidden,
        };
        credential.validate()?;
        Ok(credential)
    }

    /// Like [`WifiCredential::new`], with the security type given as its token
    /// (`WPA`, `WEP` or `nopass`).
    ///
    /// # Errors
    ///
    /// Returns [`QrTermError::Validation`] for an unknown security token or an invalid credential.
    pub fn from_parts(ssid: &str, password: &str, security: &str, hidden: bool) -> Result<Self> {
        Self::new(ssid, password, security.parse()?, hidden)
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn security(&self) -> &Security {
        &self.security
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    fn validate(&self) -> Result<()> {
        if self.ssid.is_empty() {
            return Err(QrTermError::Validation("SSID cannot be empty".to_string()));
        }
        if matches!(self.security, Security::Other(_)) {
            return Err(QrTermError::Validation(UNKNOWN_SECURITY.to_string()));
        }
        if self.security.requires_password() && self.password.is_empty() {
            return Err(QrTermError::Validation(format!(
                "password required for {}",
                self.security
            )));
        }
        Ok(())
    }

    /// Builds the `WIFI:` payload.
    ///
    /// The password is left out for open networks and `H:true;` is only written for hidden ones.
    ///
    /// # Errors
    ///
    /// Returns [`QrTermError::Validation`] if the credential is invalid, which can only happen
    /// for values obtained from [`WifiCredential::decode`].
    pub fn encode(&self) -> Result<String> {
        self.validate()?;

        let mut payload = String::from(PREFIX);
        payload.push_str("T:");
        payload.push_str(self.security.as_token());
        payload.push_str(";S:");
        payload.push_str(&escape(&self.ssid));
        payload.push(';');
        if self.security.requires_password() {
            payload.push_str("P:");
            payload.push_str(&escape(&self.password));
            payload.push(';');
        }
        if self.hidden {
            payload.push_str("H:true;");
        }
        payload.push(';');
        Ok(payload)
    }

    /// Parses a `WIFI:` payload.
    ///
    /// Missing fields take their defaults: empty SSID and password, WPA security, not hidden.
    /// Unknown keys are ignored and a repeated key keeps its last value. The result is not
    /// validated.
    ///
    /// # Errors
    ///
    /// Returns [`QrTermError::Format`] if the payload does not start with `WIFI:`. An unknown
    /// `T` token is kept as [`Security::Other`] and only rejected by [`WifiCredential::encode`].
    pub fn decode(payload: &str) -> Result<Self> {
        let body = payload
            .strip_prefix(PREFIX)
            .ok_or_else(|| QrTermError::Format("invalid WiFi QR format".to_string()))?;

        let mut credential = Self {
            ssid: String::new(),
            password: String::new(),
            security: Security::Wpa,
            hidden: false,
        };

        for field in split_fields(body) {
            let Some((key, value)) = field.split_once(':') else {
                continue;
            };
            let value = unescape(value);
            match key {
                "S" => credential.ssid = value,
                "P" => credential.password = value,
                "T" => credential.security = Security::from_token(&value),
                "H" => credential.hidden = value.eq_ignore_ascii_case("true"),
                _ => {}
            }
        }

        Ok(credential)
    }
}

impl FromStr for WifiCredential {
    type Err = QrTermError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if SPECIAL_CHARS.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

// Only `\;` and `\\` are undone. `\,` `\:` and `\"` are kept as written.
fn unescape(value: &str) -> String {
    value.replace("\\;", ";").replace("\\\\", "\\")
}

/// Splits on every `;` that is not preceded by an odd run of backslashes, dropping empty fields.
///
/// An escaped `\;` stays inside its field so that a `;` in an SSID or password survives decoding.
fn split_fields(body: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in body.char_indices() {
        if c == '\\' {
            escaped = !escaped;
            continue;
        }
        if c == ';' && !escaped {
            fields.push(&body[start..i]);
            start = i + 1;
        }
        escaped = false;
    }
    fields.push(&body[start..]);
    fields.retain(|field| !field.is_empty());
    fields
}
