use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use labsyn_core::{ScanOptions, ScannedTable, SynonymScanner};
use labsyn_ingest::read_records;
use labsyn_report::{DEFAULT_EXPORT_FILE_NAME, write_csv};

use crate::cli::{ListingArgs, ScanArgs, ShowArgs, SynonymRemoval};
use crate::types::ScanResult;

pub fn run_scan(args: &ScanArgs) -> Result<ScanResult> {
    let mut table = scan_listing(&args.listing)?;
    let removed = apply_removals(&mut table, &args.remove)?;

    let output = if args.dry_run {
        info!("dry run, export skipped");
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.listing.input));
        write_csv(&path, table.records())
            .with_context(|| format!("export {}", path.display()))?;
        Some(path)
    };

    Ok(ScanResult {
        input: args.listing.input.clone(),
        output,
        table,
        removed,
        view: args.listing.view,
    })
}

pub fn run_show(args: &ShowArgs) -> Result<ScanResult> {
    let table = scan_listing(&args.listing)?;
    Ok(ScanResult {
        input: args.listing.input.clone(),
        output: None,
        table,
        removed: 0,
        view: args.listing.view,
    })
}

fn scan_listing(listing: &ListingArgs) -> Result<ScannedTable> {
    let options = scan_options(listing)?;
    let span = info_span!("listing", input = %listing.input.display());
    let _guard = span.enter();

    let records = read_records(&listing.input)
        .with_context(|| format!("load {}", listing.input.display()))?;

    let start = Instant::now();
    let table = SynonymScanner::new(options).scan_table(records);
    info!(
        rows = table.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "scan finished"
    );
    Ok(table)
}

fn scan_options(listing: &ListingArgs) -> Result<ScanOptions> {
    if !(0.0..=1.0).contains(&listing.min_similarity) {
        bail!(
            "--min-similarity must be between 0 and 1, got {}",
            listing.min_similarity
        );
    }
    if listing.range_tolerance.is_nan() || listing.range_tolerance < 0.0 {
        bail!(
            "--range-tolerance must not be negative, got {}",
            listing.range_tolerance
        );
    }
    Ok(ScanOptions::default()
        .with_min_similarity(listing.min_similarity)
        .with_range_tolerance(listing.range_tolerance))
}

/// Applies `--remove` edits. Unknown ids are errors; names that are not
/// listed for the row are only warned about.
fn apply_removals(table: &mut ScannedTable, removals: &[SynonymRemoval]) -> Result<usize> {
    let mut removed = 0usize;
    for removal in removals {
        let changed = table
            .remove_synonym(removal.id, &removal.name)
            .with_context(|| format!("remove '{}' from row {}", removal.name, removal.id))?;
        if changed {
            removed += 1;
        } else {
            warn!(
                id = removal.id,
                name = %removal.name,
                "synonym not listed for row, nothing removed"
            );
        }
    }
    Ok(removed)
}

fn default_output_path(input: &Path) -> PathBuf {
    input
        .parent()
        .map(|dir| dir.join(DEFAULT_EXPORT_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE_NAME))
}
