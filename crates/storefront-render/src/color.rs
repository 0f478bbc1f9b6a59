//! Palette color conversion: HSL triples to terminal colors.
//!
//! Theme palettes store colors as bare HSL triples (`"262.1 83.3% 57.8%"`),
//! the form the style variables carry. Terminals want palette indices, so
//! each triple is converted to RGB and then to the nearest entry of the
//! 256-color palette.

use std::str::FromStr;

use console::Color;

/// A color in HSL space. `h` in degrees, `s` and `l` in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Converts to 8-bit RGB.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let (s, l) = (self.s, self.l);

        if s == 0.0 {
            let v = channel(l);
            return (v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            channel(hue_to_rgb(p, q, h)),
            channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }

    pub fn to_ansi256(&self) -> u8 {
        rgb_to_ansi256(self.to_rgb())
    }

    pub fn to_console_color(&self) -> Color {
        Color::Color256(self.to_ansi256())
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl FromStr for Hsl {
    type Err = String;

    /// Parses `"<hue> <saturation>% <lightness>%"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [h, sat, light] = parts.as_slice() else {
            return Err(format!("expected 'H S% L%', got '{}'", s));
        };

        let h: f64 = h
            .parse()
            .map_err(|_| format!("invalid hue '{}' in '{}'", h, s))?;
        let sat = percent(sat).ok_or_else(|| format!("invalid saturation '{}' in '{}'", sat, s))?;
        let light =
            percent(light).ok_or_else(|| format!("invalid lightness '{}' in '{}'", light, s))?;

        Ok(Hsl { h, s: sat, l: light })
    }
}

fn percent(s: &str) -> Option<f64> {
    let v: f64 = s.strip_suffix('%')?.parse().ok()?;
    (0.0..=100.0).contains(&v).then_some(v / 100.0)
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// ```rust
/// use storefront_render::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
