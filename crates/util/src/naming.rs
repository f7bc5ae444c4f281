//! Nearest-match color naming.
//!
//! Looks a color up against a static table of named colors (the CSS extended
//! color keywords) by Euclidean distance in RGB space. The table is embedded
//! so naming works offline and never fails.

use huebox_types::{HexColor, Rgb};

/// Human-readable names for the CSS extended color keywords.
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("Alice Blue", Rgb { r: 240, g: 248, b: 255 }),
    ("Antique White", Rgb { r: 250, g: 235, b: 215 }),
    ("Aqua", Rgb { r: 0, g: 255, b: 255 }),
    ("Aquamarine", Rgb { r: 127, g: 255, b: 212 }),
    ("Azure", Rgb { r: 240, g: 255, b: 255 }),
    ("Beige", Rgb { r: 245, g: 245, b: 220 }),
    ("Bisque", Rgb { r: 255, g: 228, b: 196 }),
    ("Black", Rgb { r: 0, g: 0, b: 0 }),
    ("Blanched Almond", Rgb { r: 255, g: 235, b: 205 }),
    ("Blue", Rgb { r: 0, g: 0, b: 255 }),
    ("Blue Violet", Rgb { r: 138, g: 43, b: 226 }),
    ("Brown", Rgb { r: 165, g: 42, b: 42 }),
    ("Burlywood", Rgb { r: 222, g: 184, b: 135 }),
    ("Cadet Blue", Rgb { r: 95, g: 158, b: 160 }),
    ("Chartreuse", Rgb { r: 127, g: 255, b: 0 }),
    ("Chocolate", Rgb { r: 210, g: 105, b: 30 }),
    ("Coral", Rgb { r: 255, g: 127, b: 80 }),
    ("Cornflower Blue", Rgb { r: 100, g: 149, b: 237 }),
    ("Cornsilk", Rgb { r: 255, g: 248, b: 220 }),
    ("Crimson", Rgb { r: 220, g: 20, b: 60 }),
    ("Dark Blue", Rgb { r: 0, g: 0, b: 139 }),
    ("Dark Cyan", Rgb { r: 0, g: 139, b: 139 }),
    ("Dark Goldenrod", Rgb { r: 184, g: 134, b: 11 }),
    ("Dark Gray", Rgb { r: 169, g: 169, b: 169 }),
    ("Dark Green", Rgb { r: 0, g: 100, b: 0 }),
    ("Dark Khaki", Rgb { r: 189, g: 183, b: 107 }),
    ("Dark Magenta", Rgb { r: 139, g: 0, b: 139 }),
    ("Dark Olive Green", Rgb { r: 85, g: 107, b: 47 }),
    ("Dark Orange", Rgb { r: 255, g: 140, b: 0 }),
    ("Dark Orchid", Rgb { r: 153, g: 50, b: 204 }),
    ("Dark Red", Rgb { r: 139, g: 0, b: 0 }),
    ("Dark Salmon", Rgb { r: 233, g: 150, b: 122 }),
    ("Dark Sea Green", Rgb { r: 143, g: 188, b: 143 }),
    ("Dark Slate Blue", Rgb { r: 72, g: 61, b: 139 }),
    ("Dark Slate Gray", Rgb { r: 47, g: 79, b: 79 }),
    ("Dark Turquoise", Rgb { r: 0, g: 206, b: 209 }),
    ("Dark Violet", Rgb { r: 148, g: 0, b: 211 }),
    ("Deep Pink", Rgb { r: 255, g: 20, b: 147 }),
    ("Deep Sky Blue", Rgb { r: 0, g: 191, b: 255 }),
    ("Dim Gray", Rgb { r: 105, g: 105, b: 105 }),
    ("Dodger Blue", Rgb { r: 30, g: 144, b: 255 }),
    ("Firebrick", Rgb { r: 178, g: 34, b: 34 }),
    ("Floral White", Rgb { r: 255, g: 250, b: 240 }),
    ("Forest Green", Rgb { r: 34, g: 139, b: 34 }),
    ("Fuchsia", Rgb { r: 255, g: 0, b: 255 }),
    ("Gainsboro", Rgb { r: 220, g: 220, b: 220 }),
    ("Ghost White", Rgb { r: 248, g: 248, b: 255 }),
    ("Gold", Rgb { r: 255, g: 215, b: 0 }),
    ("Goldenrod", Rgb { r: 218, g: 165, b: 32 }),
    ("Gray", Rgb { r: 128, g: 128, b: 128 }),
    ("Green", Rgb { r: 0, g: 128, b: 0 }),
    ("Green Yellow", Rgb { r: 173, g: 255, b: 47 }),
    ("Honeydew", Rgb { r: 240, g: 255, b: 240 }),
    ("Hot Pink", Rgb { r: 255, g: 105, b: 180 }),
    ("Indian Red", Rgb { r: 205, g: 92, b: 92 }),
    ("Indigo", Rgb { r: 75, g: 0, b: 130 }),
    ("Ivory", Rgb { r: 255, g: 255, b: 240 }),
    ("Khaki", Rgb { r: 240, g: 230, b: 140 }),
    ("Lavender", Rgb { r: 230, g: 230, b: 250 }),
    ("Lavender Blush", Rgb { r: 255, g: 240, b: 245 }),
    ("Lawn Green", Rgb { r: 124, g: 252, b: 0 }),
    ("Lemon Chiffon", Rgb { r: 255, g: 250, b: 205 }),
    ("Light Blue", Rgb { r: 173, g: 216, b: 230 }),
    ("Light Coral", Rgb { r: 240, g: 128, b: 128 }),
    ("Light Cyan", Rgb { r: 224, g: 255, b: 255 }),
    ("Light Goldenrod Yellow", Rgb { r: 250, g: 250, b: 210 }),
    ("Light Gray", Rgb { r: 211, g: 211, b: 211 }),
    ("Light Green", Rgb { r: 144, g: 238, b: 144 }),
    ("Light Pink", Rgb { r: 255, g: 182, b: 193 }),
    ("Light Salmon", Rgb { r: 255, g: 160, b: 122 }),
    ("Light Sea Green", Rgb { r: 32, g: 178, b: 170 }),
    ("Light Sky Blue", Rgb { r: 135, g: 206, b: 250 }),
    ("Light Slate Gray", Rgb { r: 119, g: 136, b: 153 }),
    ("Light Steel Blue", Rgb { r: 176, g: 196, b: 222 }),
    ("Light Yellow", Rgb { r: 255, g: 255, b: 224 }),
    ("Lime", Rgb { r: 0, g: 255, b: 0 }),
    ("Lime Green", Rgb { r: 50, g: 205, b: 50 }),
    ("Linen", Rgb { r: 250, g: 240, b: 230 }),
    ("Maroon", Rgb { r: 128, g: 0, b: 0 }),
    ("Medium Aquamarine", Rgb { r: 102, g: 205, b: 170 }),
    ("Medium Blue", Rgb { r: 0, g: 0, b: 205 }),
    ("Medium Orchid", Rgb { r: 186, g: 85, b: 211 }),
    ("Medium Purple", Rgb { r: 147, g: 112, b: 219 }),
    ("Medium Sea Green", Rgb { r: 60, g: 179, b: 113 }),
    ("Medium Slate Blue", Rgb { r: 123, g: 104, b: 238 }),
    ("Medium Spring Green", Rgb { r: 0, g: 250, b: 154 }),
    ("Medium Turquoise", Rgb { r: 72, g: 209, b: 204 }),
    ("Medium Violet Red", Rgb { r: 199, g: 21, b: 133 }),
    ("Midnight Blue", Rgb { r: 25, g: 25, b: 112 }),
    ("Mint Cream", Rgb { r: 245, g: 255, b: 250 }),
    ("Misty Rose", Rgb { r: 255, g: 228, b: 225 }),
    ("Moccasin", Rgb { r: 255, g: 228, b: 181 }),
    ("Navajo White", Rgb { r: 255, g: 222, b: 173 }),
    ("Navy", Rgb { r: 0, g: 0, b: 128 }),
    ("Old Lace", Rgb { r: 253, g: 245, b: 230 }),
    ("Olive", Rgb { r: 128, g: 128, b: 0 }),
    ("Olive Drab", Rgb { r: 107, g: 142, b: 35 }),
    ("Orange", Rgb { r: 255, g: 165, b: 0 }),
    ("Orange Red", Rgb { r: 255, g: 69, b: 0 }),
    ("Orchid", Rgb { r: 218, g: 112, b: 214 }),
    ("Pale Goldenrod", Rgb { r: 238, g: 232, b: 170 }),
    ("Pale Green", Rgb { r: 152, g: 251, b: 152 }),
    ("Pale Turquoise", Rgb { r: 175, g: 238, b: 238 }),
    ("Pale Violet Red", Rgb { r: 219, g: 112, b: 147 }),
    ("Papaya Whip", Rgb { r: 255, g: 239, b: 213 }),
    ("Peach Puff", Rgb { r: 255, g: 218, b: 185 }),
    ("Peru", Rgb { r: 205, g: 133, b: 63 }),
    ("Pink", Rgb { r: 255, g: 192, b: 203 }),
    ("Plum", Rgb { r: 221, g: 160, b: 221 }),
    ("Powder Blue", Rgb { r: 176, g: 224, b: 230 }),
    ("Purple", Rgb { r: 128, g: 0, b: 128 }),
    ("Rebecca Purple", Rgb { r: 102, g: 51, b: 153 }),
    ("Red", Rgb { r: 255, g: 0, b: 0 }),
    ("Rosy Brown", Rgb { r: 188, g: 143, b: 143 }),
    ("Royal Blue", Rgb { r: 65, g: 105, b: 225 }),
    ("Saddle Brown", Rgb { r: 139, g: 69, b: 19 }),
    ("Salmon", Rgb { r: 250, g: 128, b: 114 }),
    ("Sandy Brown", Rgb { r: 244, g: 164, b: 96 }),
    ("Sea Green", Rgb { r: 46, g: 139, b: 87 }),
    ("Seashell", Rgb { r: 255, g: 245, b: 238 }),
    ("Sienna", Rgb { r: 160, g: 82, b: 45 }),
    ("Silver", Rgb { r: 192, g: 192, b: 192 }),
    ("Sky Blue", Rgb { r: 135, g: 206, b: 235 }),
    ("Slate Blue", Rgb { r: 106, g: 90, b: 205 }),
    ("Slate Gray", Rgb { r: 112, g: 128, b: 144 }),
    ("Snow", Rgb { r: 255, g: 250, b: 250 }),
    ("Spring Green", Rgb { r: 0, g: 255, b: 127 }),
    ("Steel Blue", Rgb { r: 70, g: 130, b: 180 }),
    ("Tan", Rgb { r: 210, g: 180, b: 140 }),
    ("Teal", Rgb { r: 0, g: 128, b: 128 }),
    ("Thistle", Rgb { r: 216, g: 191, b: 216 }),
    ("Tomato", Rgb { r: 255, g: 99, b: 71 }),
    ("Turquoise", Rgb { r: 64, g: 224, b: 208 }),
    ("Violet", Rgb { r: 238, g: 130, b: 238 }),
    ("Wheat", Rgb { r: 245, g: 222, b: 179 }),
    ("White", Rgb { r: 255, g: 255, b: 255 }),
    ("White Smoke", Rgb { r: 245, g: 245, b: 245 }),
    ("Yellow", Rgb { r: 255, g: 255, b: 0 }),
    ("Yellow Green", Rgb { r: 154, g: 205, b: 50 }),
];

fn distance_squared(a: Rgb, b: Rgb) -> u32 {
    let dr = i32::from(a.r) - i32::from(b.r);
    let dg = i32::from(a.g) - i32::from(b.g);
    let db = i32::from(a.b) - i32::from(b.b);
    (dr * dr + dg * dg + db * db) as u32
}

/// Returns the name of the closest named color.
///
/// Ties resolve to the entry listed first. The empty string is only
/// reachable if the table were empty, which it never is.
pub fn color_name(color: HexColor) -> &'static str {
    let rgb = color.to_rgb();
    NAMED_COLORS
        .iter()
        .min_by_key(|(_, named)| distance_squared(rgb, *named))
        .map(|(name, _)| *name)
        .unwrap_or("")
}
