//! Utility functions for color conversion and text truncation.

use cssparser::{ParseError, Parser, ParserInput, Token};

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use intentstyle::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
///
/// // Pure green maps to ANSI 46
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
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

/// Parses a CSS color value into an RGB triplet.
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`/`rgba()` with
/// comma or space separated channels, and a small set of named colors.
/// Alpha is ignored. Returns `None` for anything else, including
/// `transparent`.
///
/// ```rust
/// use intentstyle::parse_css_color;
///
/// assert_eq!(parse_css_color("#0057FF"), Some((0, 87, 255)));
/// assert_eq!(parse_css_color("rgb(10, 20, 30)"), Some((10, 20, 30)));
/// assert_eq!(parse_css_color("teal"), Some((0, 128, 128)));
/// ```
pub fn parse_css_color(value: &str) -> Option<(u8, u8, u8)> {
    let mut input = ParserInput::new(value.trim());
    let mut parser = Parser::new(&mut input);
    let token = parser.next().ok()?.clone();
    match token {
        Token::Hash(ref hex) | Token::IDHash(ref hex) => parse_hex(hex),
        Token::Ident(ref name) => named_color(name),
        Token::Function(ref name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            parser.parse_nested_block(parse_rgb_channels).ok()
        }
        _ => None,
    }
}

fn parse_rgb_channels<'i>(p: &mut Parser<'i, '_>) -> Result<(u8, u8, u8), ParseError<'i, ()>> {
    let r = p.expect_number()?;
    let _ = p.try_parse(|p| p.expect_comma());
    let g = p.expect_number()?;
    let _ = p.try_parse(|p| p.expect_comma());
    let b = p.expect_number()?;
    // alpha, if any
    while p.next().is_ok() {}
    Ok((channel(r), channel(g), channel(b)))
}

fn channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digit = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
    let pair = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 | 4 => Some((digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
        6 | 8 => Some((pair(0)?, pair(2)?, pair(4)?)),
        _ => None,
    }
}

fn named_color(name: &str) -> Option<(u8, u8, u8)> {
    let rgb = match name.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "silver" => (192, 192, 192),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "teal" => (0, 128, 128),
        "navy" => (0, 0, 128),
        "maroon" => (128, 0, 0),
        "olive" => (128, 128, 0),
        "crimson" => (220, 20, 60),
        "tomato" => (255, 99, 71),
        _ => return None,
    };
    Some(rgb)
}

/// Truncates a string to fit within a maximum display width, adding ellipsis if needed.
///
/// Uses Unicode width calculations for proper handling of CJK and other wide characters.
/// If the string fits within `max_width`, it is returned unchanged. If truncation is
/// needed, characters are removed from the end and replaced with `…` (ellipsis).
///
/// # Example
///
/// ```rust
/// use intentstyle::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    // Reserve 1 column for the ellipsis
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
