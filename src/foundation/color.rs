use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{ClipError, ClipResult};

/// Straight-alpha RGBA8 color.
///
/// Scenes are consumed by an external rasterizer, so colors stay in the
/// straight-alpha form they arrive in (`#rrggbb` / `#rrggbbaa` hex strings on
/// the wire); nothing in this crate composites pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 = opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same RGB channels with a replaced alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Lower-case hex form, `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    pub fn to_hex_string(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Rgba8 {
    type Err = ClipError;

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (case-insensitive).
    fn from_str(s: &str) -> ClipResult<Self> {
        let hex = s.strip_prefix('#').ok_or_else(|| {
            ClipError::validation(format!("color '{s}' must start with '#'"))
        })?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ClipError::validation(format!(
                "color '{s}' has invalid hex digits"
            )));
        }

        let byte = |range: &str| -> ClipResult<u8> {
            u8::from_str_radix(range, 16)
                .map_err(|_| ClipError::validation(format!("color '{s}' has invalid hex digits")))
        };

        match hex.len() {
            3 => {
                // #rgb shorthand: each digit doubled.
                let n = |d: &str| -> ClipResult<u8> {
                    let v = byte(d)?;
                    Ok(v << 4 | v)
                };
                Ok(Self {
                    r: n(&hex[0..1])?,
                    g: n(&hex[1..2])?,
                    b: n(&hex[2..3])?,
                    a: 255,
                })
            }
            6 => Ok(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: 255,
            }),
            8 => Ok(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
                a: byte(&hex[6..8])?,
            }),
            _ => Err(ClipError::validation(format!(
                "color '{s}' must be #rgb, #rrggbb or #rrggbbaa"
            ))),
        }
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = ClipError;

    fn try_from(s: String) -> ClipResult<Self> {
        s.parse()
    }
}

impl From<Rgba8> for String {
    fn from(c: Rgba8) -> Self {
        c.to_hex_string()
    }
}
