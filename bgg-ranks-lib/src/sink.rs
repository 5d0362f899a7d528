//! Dated JSON snapshots: `out/<name>/<name>-<YYYY-MM-DD>.json`.

use std::path::{Path, PathBuf};

use bgg_ranks_core::Ranking;
use chrono::NaiveDate;
use serde::Serialize;

use crate::error::SinkError;

/// Location of a collection's snapshot for `date`.
pub fn snapshot_path(out_dir: &Path, name: &str, date: NaiveDate) -> PathBuf {
    out_dir
        .join(name)
        .join(format!("{name}-{}.json", date.format("%Y-%m-%d")))
}

/// Today's date in local time.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Serialize a ranking as pretty JSON with four-space indentation.
pub fn to_json(ranking: &Ranking) -> Result<Vec<u8>, SinkError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    ranking.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write a snapshot, replacing any earlier one for the same day.
pub fn write_snapshot(
    out_dir: &Path,
    name: &str,
    ranking: &Ranking,
    date: NaiveDate,
) -> Result<PathBuf, SinkError> {
    let path = snapshot_path(out_dir, name, date);
    let io_err = |source| SinkError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let json = to_json(ranking)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, &json).map_err(io_err)?;
    std::fs::rename(&tmp, &path).map_err(io_err)?;

    Ok(path)
}
