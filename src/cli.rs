use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use crate::chart::{boxplot, grouped_bar, timeline};
use crate::model::{ChartKind, ChartReport, RenderConfig, RenderReport};
use crate::{dataset, output, svg, text_summary};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "social-charts-cli",
    version,
    about = "Render social media engagement charts as SVG from CSV data"
)]
pub struct Cli {
    /// CSV with one row per post: Platform, Likes
    #[arg(long, default_value = "data/socialMedia.csv")]
    pub likes_csv: PathBuf,

    /// CSV with average likes per platform and post type: Platform, PostType, Likes
    #[arg(long, default_value = "data/socialMediaAvg.csv")]
    pub averages_csv: PathBuf,

    /// CSV with likes over time: Date, Likes
    #[arg(long, default_value = "data/socialMediaTime.csv")]
    pub timeline_csv: PathBuf,

    /// Directory the rendered charts are written to
    #[arg(long, default_value = "charts")]
    pub out_dir: PathBuf,

    /// Which chart to render
    #[arg(long, value_enum, default_value_t = ChartSelection::All)]
    pub chart: ChartSelection,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 600.0)]
    pub width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 400.0)]
    pub height: f64,

    /// Print the render report as JSON to stdout
    #[arg(long)]
    pub json: bool,

    /// Print per-group summary statistics as text to stdout
    #[arg(long)]
    pub text: bool,

    /// Export the render report as JSON
    #[arg(long)]
    pub export_json: Option<PathBuf>,

    /// Also rasterize each chart to PNG
    #[cfg(feature = "png")]
    #[arg(long)]
    pub png: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartSelection {
    All,
    Boxplot,
    GroupedBar,
    Timeline,
}

impl ChartSelection {
    fn kinds(self) -> Vec<ChartKind> {
        match self {
            ChartSelection::All => vec![
                ChartKind::Boxplot,
                ChartKind::GroupedBar,
                ChartKind::Timeline,
            ],
            ChartSelection::Boxplot => vec![ChartKind::Boxplot],
            ChartSelection::GroupedBar => vec![ChartKind::GroupedBar],
            ChartSelection::Timeline => vec![ChartKind::Timeline],
        }
    }
}

pub fn run(args: Cli) -> Result<()> {
    if args.json && args.text {
        bail!("--json and --text are mutually exclusive; pick one output mode");
    }

    let cfg = build_config(&args);
    let report = render_charts(&cfg, args.chart)?;
    handle_exports(&args, &report)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.text {
        for line in text_summary::build_text_summary(&report).lines {
            println!("{line}");
        }
    }

    Ok(())
}

/// Build a `RenderConfig` from CLI arguments.
pub fn build_config(args: &Cli) -> RenderConfig {
    RenderConfig {
        likes_csv: args.likes_csv.clone(),
        averages_csv: args.averages_csv.clone(),
        timeline_csv: args.timeline_csv.clone(),
        out_dir: args.out_dir.clone(),
        width: args.width,
        height: args.height,
        raster: raster_requested(args),
    }
}

#[cfg(feature = "png")]
fn raster_requested(args: &Cli) -> bool {
    args.png
}

#[cfg(not(feature = "png"))]
fn raster_requested(_args: &Cli) -> bool {
    false
}

fn render_charts(cfg: &RenderConfig, selection: ChartSelection) -> Result<RenderReport> {
    let mut charts = Vec::new();
    for kind in selection.kinds() {
        charts.push(render_chart(cfg, kind)?);
    }

    Ok(RenderReport {
        timestamp_utc: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| "now".into()),
        width: cfg.width,
        height: cfg.height,
        charts,
    })
}

fn render_chart(cfg: &RenderConfig, kind: ChartKind) -> Result<ChartReport> {
    let (source, rows, scene, groups) = match kind {
        ChartKind::Boxplot => {
            let rows = dataset::load_engagement(&cfg.likes_csv)?;
            let (scene, groups) = boxplot::build(&rows, cfg.width, cfg.height);
            (cfg.likes_csv.clone(), rows.len(), scene, groups)
        }
        ChartKind::GroupedBar => {
            let rows = dataset::load_averages(&cfg.averages_csv)?;
            let (scene, groups) = grouped_bar::build(&rows, cfg.width, cfg.height);
            (cfg.averages_csv.clone(), rows.len(), scene, groups)
        }
        ChartKind::Timeline => {
            let rows = dataset::load_timeline(&cfg.timeline_csv)?;
            let (scene, groups) = timeline::build(&rows, cfg.width, cfg.height);
            (cfg.timeline_csv.clone(), rows.len(), scene, groups)
        }
    };

    let document = svg::render(&scene);
    let svg_path = output::write_svg(&cfg.out_dir, kind.file_stem(), &document)?;
    info!(chart = %kind, path = %svg_path.display(), rows, "rendered chart");

    let png_path = write_raster(cfg, kind, &document)?;

    Ok(ChartReport {
        kind,
        source,
        rows,
        groups,
        svg_path,
        png_path,
    })
}

#[cfg(feature = "png")]
fn write_raster(cfg: &RenderConfig, kind: ChartKind, document: &str) -> Result<Option<PathBuf>> {
    if !cfg.raster {
        return Ok(None);
    }
    let bytes = crate::png::svg_to_png(document, cfg.width as u32, cfg.height as u32)?;
    let path = output::write_png(&cfg.out_dir, kind.file_stem(), &bytes)?;
    info!(chart = %kind, path = %path.display(), "rasterized chart");
    Ok(Some(path))
}

#[cfg(not(feature = "png"))]
fn write_raster(
    _cfg: &RenderConfig,
    _kind: ChartKind,
    _document: &str,
) -> Result<Option<PathBuf>> {
    Ok(None)
}

/// Handle report export for all output modes.
fn handle_exports(args: &Cli, report: &RenderReport) -> Result<()> {
    if let Some(path) = args.export_json.as_deref() {
        output::export_json(path, report)?;
        info!(path = %path.display(), "exported render report");
    }
    Ok(())
}
