//! Fill color parsing.
//!
//! Accepts the color strings image tools usually take: CSS named colors
//! (case-insensitive, spaces ignored), `#rgb`, `#rgba`, `#rrggbb`,
//! `#rrggbbaa`, `rgb(r, g, b)` with 0-255 integers or (decimal) percentages,
//! `rgba(r, g, b, a)`, `hsl(h, s%, l%)` and `hsv(h, s%, v%)` / `hsb(...)`.
//! Alpha is accepted but dropped since borders are drawn on an RGB canvas.

use thiserror::Error;

/// Error returned for strings that do not name a color.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown color specifier: '{0}'")]
pub struct ColorError(String);

/// Parse a color string into RGB components.
pub fn parse_color(input: &str) -> Result<[u8; 3], ColorError> {
    let unknown = || ColorError(input.to_string());
    let trimmed = input.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(unknown);
    }

    let normalized: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    if let Some((function, args)) = split_function(&normalized) {
        let args: Vec<&str> = args.split(',').collect();
        let rgb = match function {
            "rgb" => parse_rgb(&args),
            "rgba" => parse_rgba(&args),
            "hsl" => parse_hsl(&args),
            "hsv" | "hsb" => parse_hsv(&args),
            _ => None,
        };
        return rgb.ok_or_else(unknown);
    }

    NAMED_COLORS
        .binary_search_by(|(name, _)| name.cmp(&normalized.as_str()))
        .map(|idx| NAMED_COLORS[idx].1)
        .map_err(|_| unknown())
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 | 4 => Some([nibble(0)?, nibble(1)?, nibble(2)?]),
        6 | 8 => Some([byte(0)?, byte(2)?, byte(4)?]),
        _ => None,
    }
}

/// Split `name(args)` into its name and argument list.
fn split_function(value: &str) -> Option<(&str, &str)> {
    let (name, rest) = value.split_once('(')?;
    Some((name, rest.strip_suffix(')')?))
}

/// `rgb(r, g, b)`: all integers or all percentages.
fn parse_rgb(args: &[&str]) -> Option<[u8; 3]> {
    let &[r, g, b] = args else {
        return None;
    };
    if args.iter().all(|a| a.ends_with('%')) {
        let channel = |a: &str| percent(a).map(|p| unit_to_byte(p / 100.0));
        Some([channel(r)?, channel(g)?, channel(b)?])
    } else {
        Some([integer(r)?, integer(g)?, integer(b)?])
    }
}

fn parse_rgba(args: &[&str]) -> Option<[u8; 3]> {
    let &[r, g, b, a] = args else {
        return None;
    };
    integer(a)?;
    Some([integer(r)?, integer(g)?, integer(b)?])
}

fn parse_hsl(args: &[&str]) -> Option<[u8; 3]> {
    let &[h, s, l] = args else {
        return None;
    };
    let (h, s, l) = (decimal(h)? / 360.0, percent(s)? / 100.0, percent(l)? / 100.0);

    if s == 0.0 {
        return Some([unit_to_byte(l); 3]);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    let hue = |offset: f64| {
        let h = (h + offset).rem_euclid(1.0);
        let v = if h < 1.0 / 6.0 {
            m1 + (m2 - m1) * h * 6.0
        } else if h < 0.5 {
            m2
        } else if h < 2.0 / 3.0 {
            m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
        } else {
            m1
        };
        unit_to_byte(v)
    };
    Some([hue(1.0 / 3.0), hue(0.0), hue(-1.0 / 3.0)])
}

fn parse_hsv(args: &[&str]) -> Option<[u8; 3]> {
    let &[h, s, v] = args else {
        return None;
    };
    let (h, s, v) = (decimal(h)? / 360.0, percent(s)? / 100.0, percent(v)? / 100.0);

    if s == 0.0 {
        return Some([unit_to_byte(v); 3]);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let (p, q, t) = (v * (1.0 - s), v * (1.0 - s * f), v * (1.0 - s * (1.0 - f)));
    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Some([unit_to_byte(r), unit_to_byte(g), unit_to_byte(b)])
}

/// A 0-255 channel written as plain digits.
fn integer(value: &str) -> Option<u8> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Unsigned decimal such as `120` or `50.5`.
fn decimal(value: &str) -> Option<f64> {
    let starts_with_digit = value.bytes().next().is_some_and(|b| b.is_ascii_digit());
    let well_formed = value.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && value.bytes().filter(|&b| b == b'.').count() <= 1;
    if !(starts_with_digit && well_formed) {
        return None;
    }
    value.parse().ok()
}

/// Percentage in `0%..=100%`, returned as `0.0..=100.0`.
fn percent(value: &str) -> Option<f64> {
    decimal(value.strip_suffix('%')?).filter(|p| *p <= 100.0)
}

fn unit_to_byte(value: f64) -> u8 {
    (value * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// CSS color keywords, sorted by name for binary search.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("aliceblue", [240, 248, 255]),
    ("antiquewhite", [250, 235, 215]),
    ("aqua", [0, 255, 255]),
    ("aquamarine", [127, 255, 212]),
    ("azure", [240, 255, 255]),
    ("beige", [245, 245, 220]),
    ("bisque", [255, 228, 196]),
    ("black", [0, 0, 0]),
    ("blanchedalmond", [255, 235, 205]),
    ("blue", [0, 0, 255]),
    ("blueviolet", [138, 43, 226]),
    ("brown", [165, 42, 42]),
    ("burlywood", [222, 184, 135]),
    ("cadetblue", [95, 158, 160]),
    ("chartreuse", [127, 255, 0]),
    ("chocolate", [210, 105, 30]),
    ("coral", [255, 127, 80]),
    ("cornflowerblue", [100, 149, 237]),
    ("cornsilk", [255, 248, 220]),
    ("crimson", [220, 20, 60]),
    ("cyan", [0, 255, 255]),
    ("darkblue", [0, 0, 139]),
    ("darkcyan", [0, 139, 139]),
    ("darkgoldenrod", [184, 134, 11]),
    ("darkgray", [169, 169, 169]),
    ("darkgreen", [0, 100, 0]),
    ("darkgrey", [169, 169, 169]),
    ("darkkhaki", [189, 183, 107]),
    ("darkmagenta", [139, 0, 139]),
    ("darkolivegreen", [85, 107, 47]),
    ("darkorange", [255, 140, 0]),
    ("darkorchid", [153, 50, 204]),
    ("darkred", [139, 0, 0]),
    ("darksalmon", [233, 150, 122]),
    ("darkseagreen", [143, 188, 143]),
    ("darkslateblue", [72, 61, 139]),
    ("darkslategray", [47, 79, 79]),
    ("darkslategrey", [47, 79, 79]),
    ("darkturquoise", [0, 206, 209]),
    ("darkviolet", [148, 0, 211]),
    ("deeppink", [255, 20, 147]),
    ("deepskyblue", [0, 191, 255]),
    ("dimgray", [105, 105, 105]),
    ("dimgrey", [105, 105, 105]),
    ("dodgerblue", [30, 144, 255]),
    ("firebrick", [178, 34, 34]),
    ("floralwhite", [255, 250, 240]),
    ("forestgreen", [34, 139, 34]),
    ("fuchsia", [255, 0, 255]),
    ("gainsboro", [220, 220, 220]),
    ("ghostwhite", [248, 248, 255]),
    ("gold", [255, 215, 0]),
    ("goldenrod", [218, 165, 32]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("greenyellow", [173, 255, 47]),
    ("grey", [128, 128, 128]),
    ("honeydew", [240, 255, 240]),
    ("hotpink", [255, 105, 180]),
    ("indianred", [205, 92, 92]),
    ("indigo", [75, 0, 130]),
    ("ivory", [255, 255, 240]),
    ("khaki", [240, 230, 140]),
    ("lavender", [230, 230, 250]),
    ("lavenderblush", [255, 240, 245]),
    ("lawngreen", [124, 252, 0]),
    ("lemonchiffon", [255, 250, 205]),
    ("lightblue", [173, 216, 230]),
    ("lightcoral", [240, 128, 128]),
    ("lightcyan", [224, 255, 255]),
    ("lightgoldenrodyellow", [250, 250, 210]),
    ("lightgray", [211, 211, 211]),
    ("lightgreen", [144, 238, 144]),
    ("lightgrey", [211, 211, 211]),
    ("lightpink", [255, 182, 193]),
    ("lightsalmon", [255, 160, 122]),
    ("lightseagreen", [32, 178, 170]),
    ("lightskyblue", [135, 206, 250]),
    ("lightslategray", [119, 136, 153]),
    ("lightslategrey", [119, 136, 153]),
    ("lightsteelblue", [176, 196, 222]),
    ("lightyellow", [255, 255, 224]),
    ("lime", [0, 255, 0]),
    ("limegreen", [50, 205, 50]),
    ("linen", [250, 240, 230]),
    ("magenta", [255, 0, 255]),
    ("maroon", [128, 0, 0]),
    ("mediumaquamarine", [102, 205, 170]),
    ("mediumblue", [0, 0, 205]),
    ("mediumorchid", [186, 85, 211]),
    ("mediumpurple", [147, 112, 219]),
    ("mediumseagreen", [60, 179, 113]),
    ("mediumslateblue", [123, 104, 238]),
    ("mediumspringgreen", [0, 250, 154]),
    ("mediumturquoise", [72, 209, 204]),
    ("mediumvioletred", [199, 21, 133]),
    ("midnightblue", [25, 25, 112]),
    ("mintcream", [245, 255, 250]),
    ("mistyrose", [255, 228, 225]),
    ("moccasin", [255, 228, 181]),
    ("navajowhite", [255, 222, 173]),
    ("navy", [0, 0, 128]),
    ("oldlace", [253, 245, 230]),
    ("olive", [128, 128, 0]),
    ("olivedrab", [107, 142, 35]),
    ("orange", [255, 165, 0]),
    ("orangered", [255, 69, 0]),
    ("orchid", [218, 112, 214]),
    ("palegoldenrod", [238, 232, 170]),
    ("palegreen", [152, 251, 152]),
    ("paleturquoise", [175, 238, 238]),
    ("palevioletred", [219, 112, 147]),
    ("papayawhip", [255, 239, 213]),
    ("peachpuff", [255, 218, 185]),
    ("peru", [205, 133, 63]),
    ("pink", [255, 192, 203]),
    ("plum", [221, 160, 221]),
    ("powderblue", [176, 224, 230]),
    ("purple", [128, 0, 128]),
    ("rebeccapurple", [102, 51, 153]),
    ("red", [255, 0, 0]),
    ("rosybrown", [188, 143, 143]),
    ("royalblue", [65, 105, 225]),
    ("saddlebrown", [139, 69, 19]),
    ("salmon", [250, 128, 114]),
    ("sandybrown", [244, 164, 96]),
    ("seagreen", [46, 139, 87]),
    ("seashell", [255, 245, 238]),
    ("sienna", [160, 82, 45]),
    ("silver", [192, 192, 192]),
    ("skyblue", [135, 206, 235]),
    ("slateblue", [106, 90, 205]),
    ("slategray", [112, 128, 144]),
    ("slategrey", [112, 128, 144]),
    ("snow", [255, 250, 250]),
    ("springgreen", [0, 255, 127]),
    ("steelblue", [70, 130, 180]),
    ("tan", [210, 180, 140]),
    ("teal", [0, 128, 128]),
    ("thistle", [216, 191, 216]),
    ("tomato", [255, 99, 71]),
    ("turquoise", [64, 224, 208]),
    ("violet", [238, 130, 238]),
    ("wheat", [245, 222, 179]),
    ("white", [255, 255, 255]),
    ("whitesmoke", [245, 245, 245]),
    ("yellow", [255, 255, 0]),
    ("yellowgreen", [154, 205, 50]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_are_sorted() {
        assert!(NAMED_COLORS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_color("red"), Ok([255, 0, 0]));
        assert_eq!(parse_color("Black"), Ok([0, 0, 0]));
        assert_eq!(parse_color("Light Sea Green"), Ok([32, 178, 170]));
        assert_eq!(parse_color("  white "), Ok([255, 255, 255]));
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_color("#FF0000"), Ok([255, 0, 0]));
        assert_eq!(parse_color("#0f0"), Ok([0, 255, 0]));
        assert_eq!(parse_color("#12345680"), Ok([0x12, 0x34, 0x56]));
        assert_eq!(parse_color("#fff8"), Ok([255, 255, 255]));
    }

    #[test]
    fn test_rgb_function() {
        assert_eq!(parse_color("rgb(10, 20, 30)"), Ok([10, 20, 30]));
        assert_eq!(parse_color("RGB(100%, 0%, 50%)"), Ok([255, 0, 128]));
        assert_eq!(parse_color("rgb(50.5%, 0%, 0%)"), Ok([129, 0, 0]));
        assert!(parse_color("rgb(256, 0, 0)").is_err());
        assert!(parse_color("rgb(1, 2)").is_err());
        assert!(parse_color("rgb(10%, 20, 30)").is_err());
        assert!(parse_color("rgb(-1, 0, 0)").is_err());
    }

    #[test]
    fn test_rgba_function_drops_alpha() {
        assert_eq!(parse_color("rgba(255, 0, 0, 128)"), Ok([255, 0, 0]));
        assert_eq!(parse_color("rgba(1,2,3,0)"), Ok([1, 2, 3]));
        assert!(parse_color("rgba(1, 2, 3)").is_err());
        assert!(parse_color("rgba(1, 2, 3, 300)").is_err());
    }

    #[test]
    fn test_hsl_function() {
        assert_eq!(parse_color("hsl(120, 100%, 50%)"), Ok([0, 255, 0]));
        assert_eq!(parse_color("hsl(0, 100%, 50%)"), Ok([255, 0, 0]));
        assert_eq!(parse_color("hsl(240, 100%, 25%)"), Ok([0, 0, 128]));
        assert_eq!(parse_color("hsl(0, 0%, 50%)"), Ok([128, 128, 128]));
        assert_eq!(parse_color("hsl(360, 100%, 50%)"), Ok([255, 0, 0]));
        assert!(parse_color("hsl(120, 100, 50%)").is_err());
        assert!(parse_color("hsl(120, 150%, 50%)").is_err());
    }

    #[test]
    fn test_hsv_function() {
        assert_eq!(parse_color("hsv(0, 100%, 100%)"), Ok([255, 0, 0]));
        assert_eq!(parse_color("hsb(120, 100%, 100%)"), Ok([0, 255, 0]));
        assert_eq!(parse_color("HSV(240, 100%, 50%)"), Ok([0, 0, 128]));
        assert_eq!(parse_color("hsv(60, 0%, 100%)"), Ok([255, 255, 255]));
        assert!(parse_color("hsv(0, 100%)").is_err());
    }

    #[test]
    fn test_unknown_color() {
        let err = parse_color("blurple").unwrap_err();
        assert_eq!(err.to_string(), "unknown color specifier: 'blurple'");
        assert!(parse_color("#12").is_err());
        assert!(parse_color("#gg0000").is_err());
        assert!(parse_color("cmyk(0, 0, 0, 0)").is_err());
        assert!(parse_color("").is_err());
    }
}
