//! Reference check: compare a freshly generated candidate list with the
//! tracked reference file and reconcile drift.

use crate::config;
use crate::constants::MEDIA_TYPES_FILE_NAME;
use crate::error::{MediaTypeError, SyncError};
use log::info;
use tracing::warn;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

/// How drift is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    /// Drift is an error (after updating, if `update` is set).
    pub strict: bool,
    /// Overwrite the reference with the candidate on drift.
    pub update: bool,
}

impl SyncOptions {
    /// Read-only comparison; drift is always an error.
    pub fn verify() -> Self {
        Self { strict: true, update: false }
    }

    /// Update on drift; strict unless `CI` is "true".
    pub fn from_env() -> Self {
        Self { strict: !config::running_in_ci(), update: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    UpToDate,
    /// Drift found and the reference was overwritten (lenient mode).
    Updated,
    /// Drift found, reference left alone (lenient, read-only).
    Drifted,
}

/// Byte-exact comparison of two files.
pub fn files_identical(a: &Path, b: &Path) -> std::io::Result<bool> {
    let (file_a, file_b) = (File::open(a)?, File::open(b)?);
    if file_a.metadata()?.len() != file_b.metadata()?.len() {
        return Ok(false);
    }

    let mut reader_a = BufReader::new(file_a);
    let mut reader_b = BufReader::new(file_b);
    let mut buf_a = [0u8; 8192];
    let mut buf_b = [0u8; 8192];
    loop {
        let n = reader_a.read(&mut buf_a)?;
        if n == 0 {
            // Lengths matched, so b must be exhausted too
            return Ok(reader_b.read(&mut buf_b[..1])? == 0);
        }
        reader_b.read_exact(&mut buf_b[..n])?;
        if buf_a[..n] != buf_b[..n] {
            return Ok(false);
        }
    }
}

/// Compares `candidate` against `reference` and applies `options` on drift.
pub fn reconcile(
    reference: &Path,
    candidate: &Path,
    options: SyncOptions,
) -> Result<SyncOutcome, SyncError> {
    if files_identical(reference, candidate)? {
        info!("{:?} is up to date", reference);
        return Ok(SyncOutcome::UpToDate);
    }

    if options.update {
        info!("{:?} is out of date. Updating the file.", reference);
        let bytes = fs::read(candidate)?;
        fs::write(reference, bytes)?;
    }

    if options.strict {
        return Err(SyncError::Stale { path: reference.to_path_buf(), updated: options.update });
    }

    if options.update {
        warn!("{:?} was out of date and has been updated.", reference);
        Ok(SyncOutcome::Updated)
    } else {
        warn!("{:?} is out of date.", reference);
        Ok(SyncOutcome::Drifted)
    }
}

/// Generates a candidate into a temporary directory with `generate` and
/// reconciles it against `reference`. The directory is removed on every path.
pub fn check_reference<F>(
    reference: &Path,
    generate: F,
    options: SyncOptions,
) -> Result<SyncOutcome, SyncError>
where
    F: FnOnce(&Path) -> Result<(), MediaTypeError>,
{
    let tmp_dir = tempfile::tempdir()?;
    let candidate = tmp_dir.path().join(MEDIA_TYPES_FILE_NAME);

    generate(&candidate)?;
    // tmp_dir is removed on drop
    reconcile(reference, &candidate, options)
}
