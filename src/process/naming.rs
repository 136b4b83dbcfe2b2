use crate::error::{Result, SmeltError};
use std::path::{Path, PathBuf};

const INPUT_MARKER: &str = ".json";
const OUTPUT_MARKER: &str = "_processed.json";

/// Derive the output path for an input file.
///
/// The first `.json` in the file name becomes `_processed.json`; the parent
/// directory is kept. Names without `.json` are rejected so the input is never
/// overwritten.
pub fn output_path(input: &Path) -> Result<PathBuf> {
    let name = input
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| name.contains(INPUT_MARKER))
        .ok_or_else(|| SmeltError::OutputName {
            path: input.to_path_buf(),
        })?;

    Ok(input.with_file_name(name.replacen(INPUT_MARKER, OUTPUT_MARKER, 1)))
}
