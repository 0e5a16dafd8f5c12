//! Report directory persistence: write/read a [`RunReport`] to/from disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   run_report.json     canonical JSON of the report
//!   report_digest.txt   ASCII digest string ("sha256:...")
//! ```
//!
//! Reading is fail-closed: a missing file or a digest that does not match
//! the report bytes is an error.

use std::path::Path;

use sha2::{Digest, Sha256};

use crate::runner::RunReport;

/// Domain prefix for report digests.
pub const DOMAIN_RUN_REPORT: &[u8] = b"WAYPOINT::RUN_REPORT::V1\0";

const REPORT_FILENAME: &str = "run_report.json";
const DIGEST_FILENAME: &str = "report_digest.txt";

/// Error writing a report directory.
#[derive(Debug)]
pub enum ReportWriteError {
    /// I/O error during write.
    Io { detail: String },
    /// JSON serialization failed.
    Json { detail: String },
}

impl std::fmt::Display for ReportWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Json { detail } => write!(f, "JSON error: {detail}"),
        }
    }
}

impl std::error::Error for ReportWriteError {}

/// Error reading a report directory.
#[derive(Debug)]
pub enum ReportReadError {
    /// I/O error during read.
    Io { detail: String },
    /// A required file is missing.
    MissingFile { filename: String },
    /// `run_report.json` is not valid JSON.
    ParseError { detail: String },
    /// `report_digest.txt` doesn't match the recomputed digest.
    DigestMismatch { stored: String, recomputed: String },
}

impl std::fmt::Display for ReportReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::MissingFile { filename } => write!(f, "missing file: {filename}"),
            Self::ParseError { detail } => write!(f, "report parse error: {detail}"),
            Self::DigestMismatch { stored, recomputed } => {
                write!(
                    f,
                    "digest mismatch: stored={stored}, recomputed={recomputed}"
                )
            }
        }
    }
}

impl std::error::Error for ReportReadError {}

/// Digest of report bytes: `"sha256:<hex>"` under [`DOMAIN_RUN_REPORT`].
#[must_use]
pub fn report_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_RUN_REPORT);
    hasher.update(bytes);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

/// Write `report` into `dir` (created if needed). Returns the digest.
///
/// # Errors
///
/// Returns [`ReportWriteError`] on serialization or I/O failure.
pub fn write_report_dir(report: &RunReport, dir: &Path) -> Result<String, ReportWriteError> {
    let bytes = serde_json::to_vec(&report.to_json_value()).map_err(|e| ReportWriteError::Json {
        detail: e.to_string(),
    })?;
    let digest = report_digest(&bytes);

    std::fs::create_dir_all(dir).map_err(|e| ReportWriteError::Io {
        detail: format!("create {}: {e}", dir.display()),
    })?;
    std::fs::write(dir.join(REPORT_FILENAME), &bytes).map_err(|e| ReportWriteError::Io {
        detail: format!("write {REPORT_FILENAME}: {e}"),
    })?;
    std::fs::write(dir.join(DIGEST_FILENAME), digest.as_bytes()).map_err(|e| {
        ReportWriteError::Io {
            detail: format!("write {DIGEST_FILENAME}: {e}"),
        }
    })?;

    Ok(digest)
}

/// Read and verify a report directory, returning the report as JSON.
///
/// # Errors
///
/// Returns [`ReportReadError`] if a file is missing, unreadable, not JSON,
/// or if the stored digest does not match the report bytes.
pub fn read_report_dir(dir: &Path) -> Result<serde_json::Value, ReportReadError> {
    let bytes = read_required(dir, REPORT_FILENAME)?;
    let stored_bytes = read_required(dir, DIGEST_FILENAME)?;
    let stored = String::from_utf8_lossy(&stored_bytes).trim().to_string();

    let recomputed = report_digest(&bytes);
    if stored != recomputed {
        return Err(ReportReadError::DigestMismatch { stored, recomputed });
    }

    serde_json::from_slice(&bytes).map_err(|e| ReportReadError::ParseError {
        detail: e.to_string(),
    })
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportReadError> {
    let path = dir.join(filename);
    if !path.exists() {
        return Err(ReportReadError::MissingFile {
            filename: filename.to_string(),
        });
    }
    std::fs::read(&path).map_err(|e| ReportReadError::Io {
        detail: format!("read {filename}: {e}"),
    })
}
