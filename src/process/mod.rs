//! NDJSON file processing
//!
//! Reads line-delimited JSON exports, flattens every document and writes
//! the results as line-delimited JSON next to the input.

pub mod naming;
pub mod reader;
pub mod writer;

pub use naming::output_path;
pub use reader::{parse_line, read_documents};
pub use writer::DocumentWriter;

use crate::config::{ParserBackend, ProcessConfig};
use crate::error::{Result, SmeltError};
use crate::flatten::flatten_document;
use serde_json::Value;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Label used in errors for stream input
const STREAM_LABEL: &str = "<stdin>";

/// Outcome of processing one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub documents: usize,
}

impl fmt::Display for ProcessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created {} with {} objects",
            self.output.display(),
            self.documents
        )
    }
}

/// Flatten every document of an NDJSON file into its `_processed` sibling.
///
/// The whole input is parsed before the output is created, so a parse error
/// leaves no output behind.
pub fn process_file(input: &Path, config: &ProcessConfig) -> Result<ProcessReport> {
    let output = output_path(input)?;

    debug!(input = %input.display(), parser = ?config.parser, "reading documents");
    let file = File::open(input).map_err(|e| SmeltError::io(input, e))?;
    let documents: Vec<Value> = read_documents(BufReader::new(file), input, config.parser)?
        .into_iter()
        .map(flatten_document)
        .collect();

    debug!(output = %output.display(), "writing flattened documents");
    let file = File::create(&output).map_err(|e| SmeltError::io(&output, e))?;
    let mut writer = DocumentWriter::new(BufWriter::new(file), &output);
    for document in &documents {
        writer.write_document(document)?;
    }
    writer.flush()?;

    let report = ProcessReport {
        input: input.to_path_buf(),
        output,
        documents: writer.count(),
    };
    info!(
        input = %report.input.display(),
        output = %report.output.display(),
        documents = report.documents,
        "flattened file"
    );

    Ok(report)
}

/// Flatten an NDJSON stream document by document.
///
/// Returns the number of documents written.
pub fn flatten_stream<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    parser: ParserBackend,
) -> Result<usize> {
    let label = Path::new(STREAM_LABEL);
    let mut writer = DocumentWriter::new(writer, label);

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| SmeltError::io(label, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let document = parse_line(&line, label, idx + 1, parser)?;
        writer.write_document(&flatten_document(document))?;
    }
    writer.flush()?;

    Ok(writer.count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use std::io::Cursor;

    const RECEIPT: &str = r#"{"_id":{"$oid":"5ff1e1eb0a720f0523000575"},"createDate":{"$date":1609687531000},"cpg":{"$ref":"Cogs","$id":{"$oid":"601ac114be37ce2ead437550"}},"rewardsReceiptItemList":[{"barcode":"4011","meta":{"qty":1}}]}"#;
    const PLAIN: &str = r#"{"name":"Brand","active":true,"address":{"city":"X","zip":"0"}}"#;

    #[test]
    fn test_process_file_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("receipts.json");
        fs::write(&input, format!("{}\n{}\n", RECEIPT, PLAIN)).unwrap();

        let report = process_file(&input, &ProcessConfig::default()).unwrap();
        assert_eq!(report.documents, 2);
        assert_eq!(report.output, dir.path().join("receipts_processed.json"));
        assert_eq!(
            report.to_string(),
            format!("Created {} with 2 objects", report.output.display())
        );

        let content = fs::read_to_string(&report.output).unwrap();
        let lines: Vec<Value> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            json!({
                "_id": "5ff1e1eb0a720f0523000575",
                "createDate": 1609687531000u64,
                "cpg": "601ac114be37ce2ead437550",
                "rewardsReceiptItemList": [{"barcode": "4011", "meta.qty": 1}]
            })
        );
        assert_eq!(
            lines[1],
            json!({"name": "Brand", "active": true, "address.city": "X", "address.zip": "0"})
        );
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_process_file_with_simd_backend() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("brands.json");
        fs::write(&input, format!("\n{}\n\n{}\n", PLAIN, RECEIPT)).unwrap();

        let config = ProcessConfig::default().with_parser(ParserBackend::Simd);
        let report = process_file(&input, &config).unwrap();
        assert_eq!(report.documents, 2);

        let serde_report = {
            let other = dir.path().join("copy.json");
            fs::copy(&input, &other).unwrap();
            process_file(&other, &ProcessConfig::default()).unwrap()
        };
        assert_eq!(
            fs::read_to_string(&report.output).unwrap(),
            fs::read_to_string(&serde_report.output).unwrap()
        );
    }

    #[test]
    fn test_parse_error_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("users.json");
        fs::write(&input, format!("{}\n{{broken\n", PLAIN)).unwrap();

        let err = process_file(&input, &ProcessConfig::default()).unwrap_err();
        assert!(matches!(err, SmeltError::Parse { line: 2, .. }));
        assert!(!dir.path().join("users_processed.json").exists());
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = process_file(&dir.path().join("missing.json"), &ProcessConfig::default())
            .unwrap_err();
        assert!(matches!(err, SmeltError::Io { .. }));
    }

    #[test]
    fn test_empty_file_writes_empty_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.json");
        fs::write(&input, "\n\n").unwrap();

        let report = process_file(&input, &ProcessConfig::default()).unwrap();
        assert_eq!(report.documents, 0);
        assert_eq!(fs::read_to_string(&report.output).unwrap(), "");
    }

    #[test]
    fn test_flatten_stream() {
        let input = format!("{}\n\n{}\n", PLAIN, "{\"owner\":{\"$ref\":\"users\",\"$id\":\"u1\"}}");
        let mut output = Vec::new();

        let count = flatten_stream(Cursor::new(input), &mut output, ParserBackend::Serde).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"name":"Brand","active":true,"address.city":"X","address.zip":"0"}"#,
                r#"{"owner":"u1"}"#,
            ]
        );
    }
}
