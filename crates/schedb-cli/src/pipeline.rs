//! Conversion pipeline with explicit stages.
//!
//! 1. **Ingest**: read and parse the catalog document
//! 2. **Convert**: build the schedule tree from the catalog root
//! 3. **Output**: render and write the schedb document
//!
//! Nothing is written unless every earlier stage succeeded.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use schedb_ingest::{XmlElement, read_catalog};
use schedb_model::{ConvertOptions, Schedule};
use schedb_output::{WriteOptions, write_schedule};
use schedb_transform::{ScheduleSummary, build_schedule};

/// Inputs of a single conversion run.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub infile: PathBuf,
    pub outfile: PathBuf,
    pub convert: ConvertOptions,
    pub write: WriteOptions,
    /// Run every stage except the final write.
    pub dry_run: bool,
}

impl ConvertRequest {
    pub fn new(infile: impl Into<PathBuf>, outfile: impl Into<PathBuf>) -> Self {
        Self {
            infile: infile.into(),
            outfile: outfile.into(),
            convert: ConvertOptions::new(),
            write: WriteOptions::default(),
            dry_run: false,
        }
    }
}

/// Result of a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOutcome {
    pub infile: PathBuf,
    pub outfile: PathBuf,
    /// Value written to the `generated` attribute.
    pub generated: String,
    pub summary: ScheduleSummary,
    /// False for dry runs.
    pub written: bool,
}

/// Stage 1: read the catalog.
pub fn ingest(infile: &Path) -> Result<XmlElement> {
    let span = info_span!("ingest", path = %infile.display());
    let _guard = span.enter();
    let start = Instant::now();
    let root = read_catalog(infile)
        .with_context(|| format!("read catalog {}", infile.display()))?;
    info!(
        elements = root.element_count(),
        duration_ms = start.elapsed().as_millis(),
        "catalog loaded"
    );
    Ok(root)
}

/// Stage 2: build the schedule.
pub fn convert(root: &XmlElement, options: &ConvertOptions) -> Result<Schedule> {
    let span = info_span!("convert");
    let _guard = span.enter();
    build_schedule(root, options).context("convert catalog")
}

/// Stage 3: write the schedb document.
pub fn output(outfile: &Path, schedule: &Schedule, options: &WriteOptions) -> Result<()> {
    let span = info_span!("output", path = %outfile.display());
    let _guard = span.enter();
    write_schedule(outfile, schedule, options)
        .with_context(|| format!("write schedule {}", outfile.display()))
}

/// Run all stages for one request.
pub fn run(request: &ConvertRequest) -> Result<ConvertOutcome> {
    let root = ingest(&request.infile)?;
    let schedule = convert(&root, &request.convert)?;
    if request.dry_run {
        info!(path = %request.outfile.display(), "dry run, output not written");
    } else {
        output(&request.outfile, &schedule, &request.write)?;
    }
    Ok(ConvertOutcome {
        infile: request.infile.clone(),
        outfile: request.outfile.clone(),
        generated: schedule.generated.clone(),
        summary: ScheduleSummary::from_schedule(&schedule),
        written: !request.dry_run,
    })
}
