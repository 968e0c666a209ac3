//! HSL theme color parsing and hex conversion.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Reasons an HSL theme string could not be turned into a color.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The string did not contain exactly three components.
    #[error("expected 3 HSL components in \"{input}\", found {found}")]
    TokenCount {
        /// Original input.
        input: String,
        /// Number of whitespace-separated tokens found.
        found: usize,
    },
    /// A component was not a number.
    #[error("HSL component \"{token}\" in \"{input}\" is not a number")]
    NotNumeric {
        /// Original input.
        input: String,
        /// Offending token, `%` already stripped.
        token: String,
    },
    /// A component parsed but lies outside its valid range.
    #[error("HSL {component} = {value} is outside [0, {max}]")]
    OutOfRange {
        /// `"hue"`, `"saturation"` or `"lightness"`.
        component: &'static str,
        /// Parsed value.
        value: f64,
        /// Inclusive upper bound.
        max: f64,
    },
}

/// A theme color: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue, 0-360.
    pub h: f64,
    /// Saturation, 0-100.
    pub s: f64,
    /// Lightness, 0-100.
    pub l: f64,
}

impl Hsl {
    /// Parses the CSS custom-property form `"<h> <s>% <l>%"`.
    ///
    /// Every `%` is removed before splitting on whitespace, so `"0 100 50"`
    /// is accepted as well.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorError`] if there are not exactly three numeric
    /// components or a component is out of range.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let stripped = input.replace('%', "");
        let tokens: Vec<&str> = stripped.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(ColorError::TokenCount {
                input: input.to_string(),
                found: tokens.len(),
            });
        }

        let mut values = [0.0_f64; 3];
        for (slot, token) in values.iter_mut().zip(&tokens) {
            *slot = match token.parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    return Err(ColorError::NotNumeric {
                        input: input.to_string(),
                        token: (*token).to_string(),
                    });
                }
            };
        }

        let [h, s, l] = values;
        check_range("hue", h, 360.0)?;
        check_range("saturation", s, 100.0)?;
        check_range("lightness", l, 100.0)?;
        Ok(Self { h, s, l })
    }

    /// Converts to a lowercase `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        let light = self.l / 100.0;
        let a = self.s * light.min(1.0 - light) / 100.0;
        let channel = |n: f64| -> u8 {
            let k = (n + self.h / 30.0).rem_euclid(12.0);
            let c = light - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
            (255.0 * c).round().clamp(0.0, 255.0) as u8
        };
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(0.0),
            channel(8.0),
            channel(4.0)
        )
    }
}

fn check_range(component: &'static str, value: f64, max: f64) -> Result<(), ColorError> {
    if (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(ColorError::OutOfRange {
            component,
            value,
            max,
        })
    }
}

impl FromStr for Hsl {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

/// Converts an HSL theme string straight to `#rrggbb`.
///
/// # Errors
///
/// Propagates the [`ColorError`] from [`Hsl::parse`].
pub fn hsl_string_to_hex(input: &str) -> Result<String, ColorError> {
    Ok(Hsl::parse(input)?.to_hex())
}

/// Returns `true` for a lowercase or uppercase `#rrggbb` literal.
pub fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
