use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Derives the actual output path from a user-supplied base name: the
/// extension is stripped, a second-precision local timestamp is appended and
/// the `.csv` suffix is re-added, e.g. `transactions.csv` becomes
/// `transactions_20240115_143022.csv`. Parent directories are preserved.
///
/// Each invocation thus writes a distinct file, except when two runs fall
/// within the same second; that collision is accepted.
#[must_use]
pub fn timestamped_path(base: &Path) -> PathBuf {
    timestamped_path_at(base, Local::now())
}

fn timestamped_path_at(base: &Path, now: DateTime<Local>) -> PathBuf {
    let stem = base
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("transactions");
    let file_name = format!("{stem}_{}.csv", now.format(TIMESTAMP_FORMAT));
    base.with_file_name(file_name)
}
