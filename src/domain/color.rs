use std::fmt::Write as _;

/// Converts a CSS `rgb(r,g,b)` string into a `#rrggbb` hex color.
///
/// The parse is permissive: the `rgb(` prefix is skipped by position, the
/// first `)` is dropped, and the first three comma-separated components are
/// parsed as base-10 integers with anything unparseable contributing 0.
/// Feeding it something that is not an `rgb(...)` string yields a corrupted
/// color rather than an error; `rgba(...)` in particular shifts every
/// component.
pub fn rgb_to_hex(rgb: &str) -> String {
    let body = rgb.get(4..).unwrap_or("").replacen(')', "", 1);
    let mut components = body.split(',');
    let mut hex = String::with_capacity(7);
    hex.push('#');
    for _ in 0..3 {
        let channel = components
            .next()
            .and_then(|component| component.trim().parse::<u8>().ok())
            .unwrap_or(0);
        let _ = write!(hex, "{channel:02x}");
    }
    hex
}

/// Normalizes a swatch color for storage: `rgb(...)` strings are converted
/// to hex, anything else passes through unchanged.
pub fn normalize_color(color: &str) -> String {
    if color.starts_with("rgb(") {
        rgb_to_hex(color)
    } else {
        color.to_string()
    }
}

/// Parses `#rrggbb` or `#rgb` (leading `#` optional) into an RGB triple.
/// Used to paint swatches in the terminal; invalid input yields `None`.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    match digits.len() {
        6 => {
            // len() counts bytes, so slice with get: a multi-byte char can
            // land a boundary mid-character.
            let r = u8::from_str_radix(digits.get(0..2)?, 16).ok()?;
            let g = u8::from_str_radix(digits.get(2..4)?, 16).ok()?;
            let b = u8::from_str_radix(digits.get(4..6)?, 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let mut channels = digits.chars().map(|c| c.to_digit(16));
            let r = channels.next()?? as u8;
            let g = channels.next()?? as u8;
            let b = channels.next()?? as u8;
            Some((r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}
