// File: crates/demo/src/main.rs
// Summary: Demo loads a category/measure/measure CSV and renders a connected dot plot PNG.

use anyhow::{Context, Result};
use clap::Parser;
use dotplot_core::{Cell, DotPlot, PointF, Settings, Size, SortPolicy, TabularResult, Transform};
use std::path::{Path, PathBuf};

const SORT_HELP: &str =
    "Sort policy: original, ascending, descending, difference-ascending, difference-descending";

#[derive(Parser, Debug)]
#[command(version, about = "Render a connected dot plot from a CSV")]
struct Args {
    /// CSV with a header row: category, first measure, second measure
    input: PathBuf,

    /// Output PNG path (defaults to target/out/dotplot_<stem>.png)
    #[arg(long = "out")]
    out: Option<PathBuf>,

    #[arg(long = "width", default_value_t = 800.0)]
    width: f32,

    #[arg(long = "height", default_value_t = 600.0)]
    height: f32,

    #[arg(long = "sort", help = SORT_HELP)]
    sort: Option<SortPolicy>,

    /// Draw grid lines at the axis ticks
    #[arg(long = "grid", action)]
    grid: bool,

    /// JSON settings file (dotColorA, sort, showGrid, ...)
    #[arg(long = "settings")]
    settings: Option<PathBuf>,

    /// Zoom factor applied about the plot centre before rendering
    #[arg(long = "zoom")]
    zoom: Option<f32>,

    #[arg(long = "pan-x", default_value_t = 0.0)]
    pan_x: f32,

    #[arg(long = "pan-y", default_value_t = 0.0)]
    pan_y: f32,

    /// Log pipeline activity at debug level
    #[arg(long = "verbose", action)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let mut settings = match &args.settings {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading settings '{}'", path.display()))?;
            Settings::from_json(&text)
        }
        None => Settings::default(),
    };
    if let Some(policy) = args.sort {
        settings = settings.with_sort(policy);
    }
    if args.grid {
        settings = settings.with_grid(true);
    }

    let table = load_table(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    log::info!("loaded {} rows from {}", table.rows.len(), args.input.display());

    let size = Size::new(args.width, args.height);
    let mut plot = DotPlot::from_table(&table, settings, size);

    if let Some(k) = args.zoom {
        let r = plot.layout().plot;
        plot.zoom_at(k, PointF::new((r.left + r.right) / 2.0, (r.top + r.bottom) / 2.0));
    }
    if args.pan_x != 0.0 || args.pan_y != 0.0 {
        plot.pan_by(args.pan_x, args.pan_y);
    }
    let t: Transform = plot.viewport().transform();
    log::debug!("view transform k={} x={} y={}", t.k, t.x, t.y);

    let out = args.out.clone().unwrap_or_else(|| default_out(&args.input));
    plot.render_to_png(&out)?;
    println!("Wrote {}", out.display());
    plot.teardown();
    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("{} {}", log_prefix(record.level(), record.target()), message))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

/// `[LEVEL target]` prefix for each log line.
fn log_prefix(level: log::Level, target: &str) -> String {
    format!("[{level} {target}]")
}

/// Produce output file name like target/out/dotplot_<stem>.png
fn default_out(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("dotplot_{stem}.png"))
}

/// Read the CSV into a tabular result. Numeric-looking cells become numbers,
/// empty cells become nulls, everything else stays text.
fn load_table(path: &Path) -> Result<TabularResult> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    log::debug!("headers: {:?}", headers);
    if headers.len() < 3 {
        log::warn!("expected 3 columns, found {}; missing measures read as 0", headers.len());
    }

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(rec.iter().map(parse_cell).collect());
    }
    Ok(TabularResult::new(headers, rows))
}

fn parse_cell(s: &str) -> Cell {
    if s.is_empty() {
        Cell::Null
    } else if let Ok(v) = s.parse::<f64>() {
        Cell::Number(v)
    } else {
        Cell::Text(s.to_string())
    }
}
