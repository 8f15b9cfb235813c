// File: crates/dotplot-core/src/lib.rs
// Summary: Core library entry point; exports the connected dot plot pipeline and its backends.

pub mod axis;
pub mod chart;
pub mod data;
pub mod error;
pub mod format;
pub mod geometry;
pub mod interaction;
pub mod labels;
pub mod raster;
pub mod scale;
pub mod scene;
pub mod settings;
pub mod sort;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use chart::{DotPlot, DrillDown, Frame};
pub use data::{Cell, CategoryIndex, Measure, MeasureLabels, Row, TabularResult};
pub use error::{Error, Result};
pub use format::{format_signed, format_value};
pub use interaction::{ClickTarget, InteractionLayer, PointerEvent, Tooltip};
pub use labels::{density_factor, skip_factor};
pub use scale::{LinearScale, ScalePair};
pub use scene::{RecordingScene, Scene, SceneOp};
pub use settings::Settings;
pub use sort::{sort_rows, SortPolicy};
pub use theme::Theme;
pub use types::{Insets, PointF, RectF, Size};
pub use view::{Transform, ViewportController};
