// File: crates/dotplot-core/src/settings.rs
// Summary: Per-instance style settings supplied by the host, with lenient JSON parsing.
// Notes:
// - Each field falls back to its default independently when missing or malformed.

use serde::Deserialize;
use serde_json::Value as Json;
use skia_safe as skia;

use crate::sort::SortPolicy;
use crate::theme::{self, parse_hex_color, Theme};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub dot_color_a: skia::Color,
    pub dot_color_b: skia::Color,
    pub positive_line_color: skia::Color,
    pub negative_line_color: skia::Color,
    pub sort: SortPolicy,
    pub show_grid: bool,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dot_color_a: skia::Color::from_rgb(0x1f, 0x77, 0xb4),
            dot_color_b: skia::Color::from_rgb(0xff, 0x7f, 0x0e),
            positive_line_color: skia::Color::from_rgb(0x2c, 0xa0, 0x2c),
            negative_line_color: skia::Color::from_rgb(0xd6, 0x27, 0x28),
            sort: SortPolicy::Original,
            show_grid: false,
            theme: Theme::light(),
        }
    }
}

// Raw host document. Values stay untyped so one bad field cannot reject the rest.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawSettings {
    dot_color_a: Option<Json>,
    dot_color_b: Option<Json>,
    positive_line_color: Option<Json>,
    negative_line_color: Option<Json>,
    sort: Option<Json>,
    show_grid: Option<Json>,
    theme: Option<Json>,
}

fn color_field(name: &str, raw: Option<&Json>, default: skia::Color) -> skia::Color {
    match raw {
        None | Some(Json::Null) => default,
        Some(Json::String(s)) => parse_hex_color(s).unwrap_or_else(|| {
            log::warn!("settings: {name} '{s}' is not a hex color; using default");
            default
        }),
        Some(other) => {
            log::warn!("settings: {name} has unexpected value {other}; using default");
            default
        }
    }
}

impl Settings {
    /// Parse the host's settings object. Never fails.
    pub fn from_json(text: &str) -> Self {
        match serde_json::from_str::<RawSettings>(text) {
            Ok(raw) => Self::from_raw(raw),
            Err(e) => {
                log::warn!("settings: unreadable document ({e}); using defaults");
                Self::default()
            }
        }
    }

    pub fn from_value(value: &Json) -> Self {
        match RawSettings::deserialize(value) {
            Ok(raw) => Self::from_raw(raw),
            Err(e) => {
                log::warn!("settings: unreadable object ({e}); using defaults");
                Self::default()
            }
        }
    }

    fn from_raw(raw: RawSettings) -> Self {
        let d = Self::default();
        let sort = match raw.sort.as_ref() {
            None | Some(Json::Null) => d.sort,
            Some(Json::String(s)) => s.parse().unwrap_or_else(|e| {
                log::warn!("settings: {e}; using {}", d.sort);
                d.sort
            }),
            Some(other) => {
                log::warn!("settings: sort has unexpected value {other}; using {}", d.sort);
                d.sort
            }
        };
        let show_grid = match raw.show_grid.as_ref() {
            None | Some(Json::Null) => d.show_grid,
            Some(Json::Bool(b)) => *b,
            Some(other) => {
                log::warn!("settings: showGrid has unexpected value {other}; using {}", d.show_grid);
                d.show_grid
            }
        };
        let theme = match raw.theme.as_ref() {
            Some(Json::String(name)) => theme::find(name).unwrap_or_else(|| {
                log::warn!("settings: unknown theme '{name}'; using {}", d.theme.name);
                d.theme
            }),
            _ => d.theme,
        };
        Self {
            dot_color_a: color_field("dotColorA", raw.dot_color_a.as_ref(), d.dot_color_a),
            dot_color_b: color_field("dotColorB", raw.dot_color_b.as_ref(), d.dot_color_b),
            positive_line_color: color_field(
                "positiveLineColor",
                raw.positive_line_color.as_ref(),
                d.positive_line_color,
            ),
            negative_line_color: color_field(
                "negativeLineColor",
                raw.negative_line_color.as_ref(),
                d.negative_line_color,
            ),
            sort,
            show_grid,
            theme,
        }
    }

    pub fn with_sort(mut self, sort: SortPolicy) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    /// Segment color for a given signed difference; zero counts as positive.
    pub fn line_color(&self, difference: f64) -> skia::Color {
        if difference >= 0.0 { self.positive_line_color } else { self.negative_line_color }
    }
}
