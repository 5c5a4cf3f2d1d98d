//! Conversion pipeline with explicit stages.
//!
//! 1. **Ranges**: resolve the source and target selections
//! 2. **Ingest**: read the CSV and resolve its column layout
//! 3. **Remap**: convert every R, G, B value
//! 4. **Output**: write the converted table (skipped for dry runs)
//!
//! The input path is checked before anything else so a missing file is
//! reported ahead of range problems. Nothing is written unless every stage
//! before output succeeded.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use rgbrange_ingest::{IngestError, load_sample_table};
use rgbrange_model::{ConvertedTable, Range, RangeChoice, SampleTable, TableLayout};
use rgbrange_output::{output_path_for, write_converted_csv};
use rgbrange_transform::{RangeMapping, remap_table};

/// Everything a conversion run needs, already collected from the user.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub source: RangeChoice,
    pub target: RangeChoice,
    /// Overrides the default `<stem>_Converted_<min>-<max>.csv` beside the input.
    pub output: Option<PathBuf>,
    pub dry_run: bool,
}

/// Outcome of a successful conversion.
#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output: PathBuf,
    /// False for dry runs.
    pub written: bool,
    pub layout: TableLayout,
    pub mapping: RangeMapping,
    pub table: ConvertedTable,
}

impl ConvertResult {
    pub fn rows(&self) -> usize {
        self.table.len()
    }
}

// ============================================================================
// Stage 1: Ranges
// ============================================================================

/// Resolve both range selections into a mapping.
pub fn resolve_mapping(source: &RangeChoice, target: &RangeChoice) -> Result<RangeMapping> {
    let source = source.resolve().context("source range")?;
    let target = target.resolve().context("target range")?;
    if target.min > target.max {
        warn!(
            target = %target,
            "target minimum exceeds maximum; every value clips to the maximum"
        );
    }
    Ok(RangeMapping::new(source, target))
}

// ============================================================================
// Stage 2: Ingest
// ============================================================================

fn ensure_input_exists(input: &Path) -> Result<()> {
    if !input.exists() {
        return Err(IngestError::FileNotFound {
            path: input.to_path_buf(),
        }
        .into());
    }
    Ok(())
}

/// Load and resolve the input table.
pub fn ingest(input: &Path) -> Result<SampleTable> {
    let table = load_sample_table(input)
        .with_context(|| format!("load sample table: {}", input.display()))?;
    if table.is_empty() {
        warn!(path = %input.display(), "input has no data rows");
    }
    info!(rows = table.len(), layout = %table.layout, "resolved input table");
    Ok(table)
}

// ============================================================================
// Stage 3-4: Remap and output
// ============================================================================

fn output_path(options: &ConvertOptions, target: Range) -> PathBuf {
    options
        .output
        .clone()
        .unwrap_or_else(|| output_path_for(&options.input, target))
}

/// Run a complete conversion.
pub fn run_convert(options: &ConvertOptions) -> Result<ConvertResult> {
    let span = info_span!("convert", input = %options.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    ensure_input_exists(&options.input)?;
    let mapping = resolve_mapping(&options.source, &options.target)?;
    info!(
        source = %mapping.source(),
        target = %mapping.target(),
        scale = mapping.scale(),
        "resolved ranges"
    );
    if mapping.is_identity() {
        info!("source and target ranges are identical; values are only rounded and clipped");
    }

    let samples = ingest(&options.input)?;
    let layout = samples.layout;
    let table = remap_table(samples, &mapping);

    let output = output_path(options, mapping.target());
    if options.dry_run {
        info!(path = %output.display(), "dry run; skipping write");
    } else {
        write_converted_csv(&output, &table)
            .with_context(|| format!("write output: {}", output.display()))?;
    }

    info!(
        rows = table.len(),
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );

    Ok(ConvertResult {
        input: options.input.clone(),
        output,
        written: !options.dry_run,
        layout,
        mapping,
        table,
    })
}
