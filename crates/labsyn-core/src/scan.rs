//! Pairwise synonym scan over a lab listing.
//!
//! Two records are synonym candidates when their names are highly similar
//! but not identical, and their reference ranges disagree. Agreeing ranges
//! suggest the rows are already the same test reported twice; disagreeing
//! ranges suggest the same test under a different name or unit.

use labsyn_model::{Interval, Record, SynonymFlag, fields};
use tracing::{debug, info_span, trace};

use crate::range::{DEFAULT_RANGE_TOLERANCE, intervals_within, parse_range};
use crate::similarity::name_similarity;
use crate::table::ScannedTable;

/// Lowest name similarity that still counts as a candidate.
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.90;

/// Thresholds used by [`SynonymScanner`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanOptions {
    /// Inclusive lower bound on name similarity. The upper bound is always
    /// exclusive 1.0.
    pub min_similarity: f64,
    /// Bounds closer than this are considered the same range.
    pub range_tolerance: f64,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            min_similarity: DEFAULT_MIN_SIMILARITY,
            range_tolerance: DEFAULT_RANGE_TOLERANCE,
        }
    }
}

impl ScanOptions {
    #[must_use]
    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = min_similarity;
        self
    }

    #[must_use]
    pub fn with_range_tolerance(mut self, range_tolerance: f64) -> Self {
        self.range_tolerance = range_tolerance;
        self
    }
}

/// Finds synonym candidates for every record in a listing.
#[derive(Debug, Clone, Default)]
pub struct SynonymScanner {
    options: ScanOptions,
}

impl SynonymScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Whether `other` is a synonym candidate for `record`.
    pub fn is_candidate(&self, record: &Record, other: &Record) -> bool {
        self.matches(
            record,
            parse_range(record.lab_range()),
            other,
            parse_range(other.lab_range()),
        )
    }

    fn matches(&self, record: &Record, range: Interval, other: &Record, other_range: Interval) -> bool {
        let similarity = name_similarity(record.labs(), other.labs());
        similarity >= self.options.min_similarity
            && similarity < 1.0
            && !intervals_within(range, other_range, self.options.range_tolerance)
    }

    /// Candidate names for the record at `index`, deduplicated in
    /// first-seen order. The record itself is never a candidate, whatever
    /// the thresholds.
    fn candidates(&self, index: usize, records: &[Record], ranges: &[Interval]) -> Vec<String> {
        let record = &records[index];
        let mut names: Vec<String> = Vec::new();
        for (other_index, (other, other_range)) in records.iter().zip(ranges).enumerate() {
            if other_index == index || !self.matches(record, ranges[index], other, *other_range) {
                continue;
            }
            let Some(name) = other.labs() else {
                continue;
            };
            if !names.iter().any(|existing| existing == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// Scans `records` and returns them annotated, in input order.
    ///
    /// Every output record starts with `possible_synonyms` and `synonyms`,
    /// followed by the input fields with `identifier` removed. `id` is set
    /// to the record's input position; an existing `id` field is overwritten
    /// where it stands, otherwise `id` is appended. An input field named
    /// `possible_synonyms` or `synonyms` keeps its own value in the leading
    /// slot, so re-scanning an exported listing preserves curated synonyms.
    pub fn scan(&self, records: Vec<Record>) -> Vec<Record> {
        let span = info_span!("scan", records = records.len());
        let _guard = span.enter();

        let ranges: Vec<Interval> = records
            .iter()
            .map(|record| parse_range(record.lab_range()))
            .collect();
        let candidates: Vec<Vec<String>> = (0..records.len())
            .map(|index| self.candidates(index, &records, &ranges))
            .collect();

        let mut flagged = 0usize;
        let annotated: Vec<Record> = records
            .into_iter()
            .zip(candidates)
            .enumerate()
            .map(|(index, (record, names))| {
                if !names.is_empty() {
                    flagged += 1;
                    trace!(
                        id = index,
                        labs = record.labs().unwrap_or_default(),
                        synonyms = %names.join(fields::SYNONYM_SEPARATOR),
                        "synonym candidates found"
                    );
                }
                annotate(record, index, &names)
            })
            .collect();

        debug!(flagged, total = annotated.len(), "synonym scan complete");
        annotated
    }

    /// Scans `records` into a [`ScannedTable`] ready for curation.
    pub fn scan_table(&self, records: Vec<Record>) -> ScannedTable {
        ScannedTable::new(self.scan(records))
    }
}

/// Scans with the default thresholds.
pub fn scan_records(records: Vec<Record>) -> Vec<Record> {
    SynonymScanner::default().scan(records)
}

fn annotate(mut record: Record, index: usize, names: &[String]) -> Record {
    record.remove(fields::IDENTIFIER);
    record.insert(fields::ID, index);

    let mut out = Record::with_capacity(record.len() + 2);
    out.insert(
        fields::POSSIBLE_SYNONYMS,
        SynonymFlag::from_found(!names.is_empty()),
    );
    out.insert(fields::SYNONYMS, names.join(fields::SYNONYM_SEPARATOR));
    for (key, value) in record {
        out.insert(key, value);
    }
    out
}
