use super::Rgba;

pub const BLACK: Rgba = Rgba::from_rgb_u8(0, 0, 0);
pub const WHITE: Rgba = Rgba::from_rgb_u8(255, 255, 255);
pub const RED: Rgba = Rgba::from_rgb_u8(255, 0, 0);
pub const LIME: Rgba = Rgba::from_rgb_u8(0, 255, 0);
pub const GREEN: Rgba = Rgba::from_rgb_u8(0, 128, 0);
pub const BLUE: Rgba = Rgba::from_rgb_u8(0, 0, 255);
pub const CYAN: Rgba = Rgba::from_rgb_u8(0, 255, 255);
pub const MAGENTA: Rgba = Rgba::from_rgb_u8(255, 0, 255);
pub const YELLOW: Rgba = Rgba::from_rgb_u8(255, 255, 0);
pub const GRAY: Rgba = Rgba::from_rgb_u8(128, 128, 128);
pub const SILVER: Rgba = Rgba::from_rgb_u8(192, 192, 192);
pub const LIGHTGRAY: Rgba = Rgba::from_rgb_u8(211, 211, 211);
pub const DARKGRAY: Rgba = Rgba::from_rgb_u8(169, 169, 169);
pub const MAROON: Rgba = Rgba::from_rgb_u8(128, 0, 0);
pub const OLIVE: Rgba = Rgba::from_rgb_u8(128, 128, 0);
pub const NAVY: Rgba = Rgba::from_rgb_u8(0, 0, 128);
pub const PURPLE: Rgba = Rgba::from_rgb_u8(128, 0, 128);
pub const TEAL: Rgba = Rgba::from_rgb_u8(0, 128, 128);
pub const ORANGE: Rgba = Rgba::from_rgb_u8(255, 165, 0);
pub const BROWN: Rgba = Rgba::from_rgb_u8(165, 42, 42);
pub const PINK: Rgba = Rgba::from_rgb_u8(255, 192, 203);
pub const GOLD: Rgba = Rgba::from_rgb_u8(255, 215, 0);
pub const STEELBLUE: Rgba = Rgba::from_rgb_u8(70, 130, 180);
pub const SKYBLUE: Rgba = Rgba::from_rgb_u8(135, 206, 235);
pub const TOMATO: Rgba = Rgba::from_rgb_u8(255, 99, 71);
pub const CRIMSON: Rgba = Rgba::from_rgb_u8(220, 20, 60);
pub const INDIGO: Rgba = Rgba::from_rgb_u8(75, 0, 130);
pub const VIOLET: Rgba = Rgba::from_rgb_u8(238, 130, 238);

/// Sorted by name for binary search
const NAMES: &[(&str, Rgba)] = &[
    ("aqua", CYAN),
    ("black", BLACK),
    ("blue", BLUE),
    ("brown", BROWN),
    ("crimson", CRIMSON),
    ("cyan", CYAN),
    ("darkgray", DARKGRAY),
    ("darkgrey", DARKGRAY),
    ("fuchsia", MAGENTA),
    ("gold", GOLD),
    ("gray", GRAY),
    ("green", GREEN),
    ("grey", GRAY),
    ("indigo", INDIGO),
    ("lightgray", LIGHTGRAY),
    ("lightgrey", LIGHTGRAY),
    ("lime", LIME),
    ("magenta", MAGENTA),
    ("maroon", MAROON),
    ("navy", NAVY),
    ("olive", OLIVE),
    ("orange", ORANGE),
    ("pink", PINK),
    ("purple", PURPLE),
    ("red", RED),
    ("silver", SILVER),
    ("skyblue", SKYBLUE),
    ("steelblue", STEELBLUE),
    ("teal", TEAL),
    ("tomato", TOMATO),
    ("violet", VIOLET),
    ("white", WHITE),
    ("yellow", YELLOW),
];

/// Look up a lower-case color name
pub(super) fn lookup_name(name: &str) -> Option<Rgba> {
    NAMES
        .binary_search_by(|(n, _)| (*n).cmp(name))
        .ok()
        .map(|idx| NAMES[idx].1)
}

/// Look up a single letter color code (`b g r c m y k w`)
pub(super) fn lookup_code(code: char) -> Option<Rgba> {
    match code {
        'b' => Some(BLUE),
        'g' => Some(LIME),
        'r' => Some(RED),
        'c' => Some(CYAN),
        'm' => Some(MAGENTA),
        'y' => Some(YELLOW),
        'k' => Some(BLACK),
        'w' => Some(WHITE),
        _ => None,
    }
}
