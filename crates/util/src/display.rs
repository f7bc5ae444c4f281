//! Terminal rendering helpers for palettes and single colors.
//!
//! Swatches are drawn with 24-bit ANSI background escapes; the overlaid hex
//! code flips between black and white based on the swatch's luma so it stays
//! readable.

use huebox_types::{ColorEntry, HexColor};

use crate::naming::color_name;

const RESET: &str = "\x1b[0m";

/// A colored block with the hex code printed on top of it.
pub fn color_block(color: HexColor) -> String {
    let rgb = color.to_rgb();
    // 30 = black, 97 = bright white
    let foreground = if color.is_light() { "30" } else { "97" };
    format!(
        "\x1b[48;2;{};{};{}m\x1b[{}m {} {}",
        rgb.r, rgb.g, rgb.b, foreground, color, RESET
    )
}

/// One palette row: index, swatch, name, and a lock marker.
pub fn entry_line(index: usize, entry: &ColorEntry) -> String {
    let marker = if entry.locked { "locked" } else { "" };
    format!(
        "{:>2}  {}  {:<22} {}",
        index,
        color_block(entry.value),
        color_name(entry.value),
        marker
    )
}

/// Detail lines for a single color, used by `huebox info`.
pub fn info_lines(color: HexColor) -> Vec<String> {
    let rgb = color.to_rgb();
    let hsl = color.to_hsl();
    vec![
        format!("{}  {}", color_block(color), color_name(color)),
        format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
        format!("hsl({:.0}, {:.0}%, {:.0}%)", hsl.h, hsl.s, hsl.l),
        format!(
            "{} color, use {} text on top",
            if color.is_light() { "light" } else { "dark" },
            if color.is_light() { "dark" } else { "light" },
        ),
    ]
}
