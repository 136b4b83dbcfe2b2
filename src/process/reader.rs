use crate::config::ParserBackend;
use crate::error::{Result, SmeltError};
use serde_json::Value;
use std::io::BufRead;
use std::path::Path;

/// Read every non-blank line of an NDJSON source as one document.
///
/// Stops at the first line that fails to parse. `path` only labels errors.
pub fn read_documents<R: BufRead>(
    reader: R,
    path: &Path,
    parser: ParserBackend,
) -> Result<Vec<Value>> {
    let mut documents = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| SmeltError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        documents.push(parse_line(&line, path, idx + 1, parser)?);
    }

    Ok(documents)
}

/// Parse a single line with the selected backend. `line_no` is 1-based.
///
/// Lines simd-json rejects (such as integers beyond `u64`) are retried with
/// serde_json, so both backends produce the same values and the same errors.
pub fn parse_line(line: &str, path: &Path, line_no: usize, parser: ParserBackend) -> Result<Value> {
    if parser == ParserBackend::Simd {
        // simd-json parses in place
        let mut bytes = line.as_bytes().to_vec();
        if let Ok(value) = simd_json::serde::from_slice::<Value>(&mut bytes) {
            return Ok(value);
        }
    }

    serde_json::from_str(line).map_err(|source| SmeltError::Parse {
        path: path.to_path_buf(),
        line: line_no,
        source,
    })
}
