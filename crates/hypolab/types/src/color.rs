//! ARC color codes.

/// Highest valid color code in task data.
pub const MAX_COLOR: u8 = 9;

/// Rendering-only sentinel for missing or padding cells. Never compared.
pub const MISSING: i8 = -1;

/// Name of a color code, including the missing sentinel.
pub fn color_name(code: i8) -> Option<&'static str> {
    match code {
        -1 => Some("Missing"),
        0 => Some("Black"),
        1 => Some("Blue"),
        2 => Some("Red"),
        3 => Some("Green"),
        4 => Some("Yellow"),
        5 => Some("Gray"),
        6 => Some("Pink"),
        7 => Some("Orange"),
        8 => Some("Cyan"),
        9 => Some("Maroon"),
        _ => None,
    }
}

/// Human-readable cell value, e.g. `Blue` or `Unknown(12)`.
pub fn describe_cell(value: u8) -> String {
    i8::try_from(value)
        .ok()
        .and_then(color_name)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Unknown({})", value))
}

/// Display palette as RGB triples. Unknown codes map to white.
pub fn palette_rgb(code: i8) -> (u8, u8, u8) {
    match code {
        -1 => (0x21, 0x21, 0x21),
        0 => (0x00, 0x00, 0x00),
        1 => (0x01, 0x73, 0xd9),
        2 => (0xff, 0x42, 0x36),
        3 => (0x2f, 0xcc, 0x41),
        4 => (0xff, 0xdc, 0x03),
        5 => (0xa9, 0xa9, 0xa9),
        6 => (0xef, 0x12, 0xbe),
        7 => (0xff, 0x84, 0x1b),
        8 => (0x7e, 0xdb, 0xff),
        9 => (0x86, 0x0b, 0x25),
        _ => (0xff, 0xff, 0xff),
    }
}
