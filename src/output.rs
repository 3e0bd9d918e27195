//! Output handling: chart files under the output directory and JSON report
//! export.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::RenderReport;

/// Write a rendered SVG document under `out_dir`, creating the directory if
/// needed. Returns the written path.
pub fn write_svg(out_dir: &Path, file_stem: &str, svg: &str) -> Result<PathBuf> {
    let path = prepare(out_dir, file_stem, "svg")?;
    fs::write(&path, svg).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Write rasterized PNG bytes next to the chart's SVG.
#[cfg(feature = "png")]
pub fn write_png(out_dir: &Path, file_stem: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = prepare(out_dir, file_stem, "png")?;
    fs::write(&path, bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Export the render report as pretty JSON.
pub fn export_json(path: &Path, report: &RenderReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize render report")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn prepare(out_dir: &Path, file_stem: &str, extension: &str) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;
    Ok(out_dir.join(format!("{file_stem}.{extension}")))
}
