// File: crates/dotplot-core/src/theme.rs
// Summary: Light/Dark theming for the plot chrome (background, grid, axes, tooltip).

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tooltip_fill: skia::Color::from_argb(230, 32, 32, 36),
            tooltip_text: skia::Color::from_argb(255, 250, 250, 252),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tooltip_fill: skia::Color::from_argb(230, 235, 235, 245),
            tooltip_text: skia::Color::from_argb(255, 18, 18, 20),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Parse `#rrggbb` or `#rgb` (leading `#` optional) into an opaque color.
pub fn parse_hex_color(s: &str) -> Option<skia::Color> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize, w: usize| u8::from_str_radix(&hex[i..i + w], 16).ok();
    match hex.len() {
        6 => Some(skia::Color::from_rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
        3 => {
            let (r, g, b) = (channel(0, 1)?, channel(1, 1)?, channel(2, 1)?);
            Some(skia::Color::from_rgb(r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}
