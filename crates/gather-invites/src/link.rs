//! Shareable invite links.
//!
//! An invite link carries a group's invite code and display name as query
//! parameters on a fixed join path. The same link text is what gets encoded
//! into the QR image.

use crate::error::{InviteError, Result};
use crate::group::Group;
use std::fmt;

/// Path component of every invite URL.
pub const JOIN_PATH: &str = "/join-group";

/// Query parameters carried by an invite link.
///
/// `name` is stored decoded; [`InviteParams::parse`] undoes the
/// percent-encoding applied by [`InviteLink::url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteParams {
    pub code: String,
    pub name: Option<String>,
}

impl InviteParams {
    /// Parse invite parameters from a full URL, a raw query string, or a
    /// bare invite code.
    ///
    /// ```
    /// use gather_invites::InviteParams;
    ///
    /// let p = InviteParams::parse("https://gather.example/join-group?code=ABCD1234&name=Book%20Club").unwrap();
    /// assert_eq!(p.code, "ABCD1234");
    /// assert_eq!(p.name.as_deref(), Some("Book Club"));
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let s = input.trim();
        if s.is_empty() {
            return Err(InviteError::InvalidLink {
                reason: "empty invite".to_string(),
            });
        }

        // Everything after '?' is the query; without one, the whole input is
        // either a query string or a bare code.
        let query = match s.split_once('?') {
            Some((_, q)) => q,
            None => s,
        };

        if !query.contains('=') {
            return Ok(Self {
                code: query.to_string(),
                name: None,
            });
        }

        let mut code = None;
        let mut name = None;
        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "code" => code = Some(value.to_string()),
                "name" => {
                    let decoded =
                        urlencoding::decode(value).map_err(|e| InviteError::InvalidLink {
                            reason: format!("Bad name encoding: {}", e),
                        })?;
                    name = Some(decoded.into_owned());
                }
                _ => {}
            }
        }

        let code = code
            .filter(|c| !c.is_empty())
            .ok_or_else(|| InviteError::InvalidLink {
                reason: "missing code parameter".to_string(),
            })?;

        Ok(Self {
            code,
            name: name.filter(|n| !n.is_empty()),
        })
    }
}

/// A shareable invite link for a group.
///
/// Derived from a [`Group`] on demand; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteLink {
    origin: String,
    code: String,
    name: String,
}

impl InviteLink {
    /// Build the link for a group against an application origin.
    pub fn for_group(origin: &str, group: &Group) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            code: group.invite_code.clone(),
            name: group.name.clone(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn group_name(&self) -> &str {
        &self.name
    }

    /// The full invite URL.
    ///
    /// The invite code is embedded raw (codes are short alphanumeric
    /// tokens and casing is significant); the group name is
    /// percent-encoded.
    pub fn url(&self) -> String {
        format!(
            "{}{}?code={}&name={}",
            self.origin,
            JOIN_PATH,
            self.code,
            urlencoding::encode(&self.name)
        )
    }
}

impl fmt::Display for InviteLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url())
    }
}

#[cfg(feature = "qr")]
impl InviteLink {
    /// Render the invite URL as a QR image.
    pub fn to_qr(&self) -> Result<image::DynamicImage> {
        let code = qrcode::QrCode::new(self.url().as_bytes())
            .map_err(|e| InviteError::Qr(format!("Failed to generate QR code: {}", e)))?;
        let image = code.render::<image::Luma<u8>>().build();
        Ok(image::DynamicImage::ImageLuma8(image))
    }

    /// Render the invite URL as PNG bytes.
    pub fn to_qr_png(&self) -> Result<Vec<u8>> {
        let img = self.to_qr()?;
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .map_err(|e| InviteError::Qr(format!("Failed to encode QR PNG: {}", e)))?;
        Ok(bytes)
    }

    /// Render the invite URL as a `data:image/png` URL for webview display.
    pub fn to_qr_data_url(&self) -> Result<String> {
        use base64::{engine::general_purpose::STANDARD, Engine as _};

        let bytes = self.to_qr_png()?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(&bytes)))
    }

    /// Save the QR image as a PNG file.
    pub fn save_qr_png(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.to_qr_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Suggested filename for an exported QR image.
    pub fn qr_filename(&self) -> String {
        format!("{}-invite-qr.png", sanitize_filename(&self.name))
    }
}

/// Replace characters that are unsafe in filenames.
#[cfg(feature = "qr")]
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    let cleaned = cleaned.trim().to_string();
    if cleaned.is_empty() {
        "group".to_string()
    } else {
        cleaned
    }
}
