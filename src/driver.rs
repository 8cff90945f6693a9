use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    encode::png::probe_imaging,
    foundation::error::{IconError, IconResult, MissingCapability},
    render::{backend::RenderSettings, pipeline::render_icon_with},
};

/// One icon to produce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconJob {
    /// Canvas side in pixels.
    pub size: u32,
    /// Output file name, relative to the output directory.
    pub filename: String,
}

impl IconJob {
    /// Build a job.
    pub fn new(size: u32, filename: impl Into<String>) -> Self {
        Self {
            size,
            filename: filename.into(),
        }
    }
}

/// Ordered list of icons the driver renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconSet {
    /// Jobs, rendered in this order.
    pub jobs: Vec<IconJob>,
}

impl IconSet {
    /// The extension toolbar icons: 16, 48 and 128 pixels.
    pub fn standard() -> Self {
        Self {
            jobs: vec![
                IconJob::new(16, "icon16.png"),
                IconJob::new(48, "icon48.png"),
                IconJob::new(128, "icon128.png"),
            ],
        }
    }
}

/// How a driver run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DriverOutcome {
    /// Every icon was written; paths in job order.
    Completed(Vec<PathBuf>),
    /// The imaging capability is missing; the remediation message was printed.
    MissingCapability(MissingCapability),
}

/// Final line printed after every icon was written.
pub const SUCCESS_LINE: &str = "All icons created successfully!";

/// Render every job of `set` into `out_dir`, reporting progress on `out`.
///
/// `probe` runs once before any rendering. When it fails, or when a render reports a missing
/// capability, the remaining jobs are skipped and the remediation message replaces the summary.
/// Every other error is returned.
pub fn run<W: Write>(
    set: &IconSet,
    out_dir: &Path,
    settings: &RenderSettings,
    probe: impl FnOnce() -> Result<(), MissingCapability>,
    out: &mut W,
) -> IconResult<DriverOutcome> {
    run_with(set, out_dir, probe, out, |job, path| {
        render_icon_with(job.size, path, settings).map(|_| ())
    })
}

/// Render [`IconSet::standard`] into the current directory, writing progress to stdout.
pub fn run_standard() -> IconResult<DriverOutcome> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(
        &IconSet::standard(),
        Path::new("."),
        &RenderSettings::default(),
        probe_imaging,
        &mut out,
    )
}

fn run_with<W: Write>(
    set: &IconSet,
    out_dir: &Path,
    probe: impl FnOnce() -> Result<(), MissingCapability>,
    out: &mut W,
    mut render: impl FnMut(&IconJob, &Path) -> IconResult<()>,
) -> IconResult<DriverOutcome> {
    if let Err(missing) = probe() {
        tracing::warn!(capability = missing.capability, "imaging capability probe failed");
        return report_missing(missing, out);
    }

    let mut written = Vec::with_capacity(set.jobs.len());
    for job in &set.jobs {
        let path = out_dir.join(&job.filename);
        match render(job, &path) {
            Ok(()) => {}
            Err(IconError::MissingCapability(missing)) => {
                tracing::warn!(file = %job.filename, "imaging capability lost mid-run");
                return report_missing(missing, out);
            }
            Err(e) => return Err(e),
        }
        writeln!(out, "Created {}", job.filename).context("write progress line")?;
        written.push(path);
    }

    writeln!(out, "{SUCCESS_LINE}").context("write summary line")?;
    Ok(DriverOutcome::Completed(written))
}

fn report_missing<W: Write>(
    missing: MissingCapability,
    out: &mut W,
) -> IconResult<DriverOutcome> {
    for line in missing.remediation_lines() {
        writeln!(out, "{line}").context("write remediation message")?;
    }
    Ok(DriverOutcome::MissingCapability(missing))
}

#[cfg(test)]
#[path = "../tests/unit/driver.rs"]
mod tests;
