//! Dictionary scoring
//!
//! Streams a wordlist one line at a time and reports how close a candidate
//! gets to any entry.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::distance::distance;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Failed to open wordlist {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read wordlist: {0}")]
    Read(#[from] std::io::Error),
    #[error("Wordlist scan cancelled")]
    Cancelled,
}

/// Returns the smallest edit distance between `candidate` and any non-empty
/// line of `reader`.
///
/// `Ok(None)` means the stream held no scorable entry.
pub fn min_distance<R: BufRead>(
    candidate: &str,
    reader: R,
) -> Result<Option<usize>, DictionaryError> {
    min_distance_until(candidate, reader, || false)
}

/// Same as [`min_distance`], polling `should_stop` before every line.
pub fn min_distance_until<R, F>(
    candidate: &str,
    mut reader: R,
    should_stop: F,
) -> Result<Option<usize>, DictionaryError>
where
    R: BufRead,
    F: Fn() -> bool,
{
    let mut best: Option<usize> = None;
    let mut line = Vec::new();

    loop {
        if should_stop() {
            return Err(DictionaryError::Cancelled);
        }

        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        let entry = strip_line_ending(&line);
        if entry.is_empty() {
            continue;
        }

        let d = distance(&String::from_utf8_lossy(entry), candidate);
        if best.is_none_or(|b| d < b) {
            best = Some(d);
        }
        if d == 0 {
            break;
        }
    }

    Ok(best)
}

/// Opens the wordlist at `path` and scans it with [`min_distance`].
pub fn min_distance_from_path<P: AsRef<Path>>(
    candidate: &str,
    path: P,
) -> Result<Option<usize>, DictionaryError> {
    min_distance_from_path_until(candidate, path, || false)
}

pub(crate) fn min_distance_from_path_until<P, F>(
    candidate: &str,
    path: P,
    should_stop: F,
) -> Result<Option<usize>, DictionaryError>
where
    P: AsRef<Path>,
    F: Fn() -> bool,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist unavailable: {:?}: {}", path, source);
        DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let result = min_distance_until(candidate, BufReader::new(file), should_stop);

    #[cfg(feature = "tracing")]
    match &result {
        Ok(None) => tracing::warn!("Wordlist {:?} has no entries to score against", path),
        Err(DictionaryError::Read(e)) => {
            tracing::error!("Failed reading wordlist {:?}: {}", path, e)
        }
        _ => {}
    }

    result
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
