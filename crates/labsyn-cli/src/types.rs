use std::path::PathBuf;

use labsyn_core::ScannedTable;

use crate::cli::ViewArg;

#[derive(Debug)]
pub struct ScanResult {
    pub input: PathBuf,
    /// Export path, `None` for dry runs and `show`.
    pub output: Option<PathBuf>,
    pub table: ScannedTable,
    /// Number of `--remove` edits that changed a row.
    pub removed: usize,
    pub view: ViewArg,
}
