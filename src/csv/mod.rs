//! CSV import/export adapter.
//!
//! The only file-touching surface in the crate: consumes the patient
//! import format into the registry and produces the treatment export
//! format from the log. Malformed external data aborts the whole
//! operation with the offending line in the error; rows registered before
//! the failure stay registered; there is no rollback.

use crate::error::{Result, TriageError};
use crate::registry::PatientRegistry;
use crate::treatment::TreatedCase;
use chrono::SecondsFormat;
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

/// Required header of the patient import format, compared
/// case-insensitively after trimming.
pub const PATIENT_HEADER: &str = "id,name,age,severity";

/// Header of the treatment export format.
pub const EXPORT_HEADER: &str = "id,name,age,severity,treatedAt";

/// Load patients from a CSV file into the registry.
///
/// Expected layout:
///
/// ```text
/// id,name,age,severity
/// P001,John Doe,32,4
/// P002,"Doe, Jane",44,2
/// ```
///
/// Blank lines are skipped. Each remaining row must split into exactly
/// four fields, none empty after trimming; fields may be double-quoted,
/// with `""` as a literal quote (the inverse of the export escaping).
/// `age` and `severity` must parse as integers. The first violation
/// aborts the import; rows already registered are kept.
///
/// Returns the number of patients registered.
pub fn load_patients(path: &Path, registry: &PatientRegistry) -> Result<usize> {
    let start = Instant::now();
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(TriageError::EmptyCsv(path.display().to_string())),
    };
    if !header.trim().eq_ignore_ascii_case(PATIENT_HEADER) {
        return Err(TriageError::InvalidHeader(header));
    }

    let mut loaded = 0usize;
    for line in lines {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields = split_row(line);
        if fields.len() != 4 {
            return Err(TriageError::MalformedRow(format!(
                "wrong number of fields: {line}"
            )));
        }

        let id = fields[0].trim();
        let name = fields[1].trim();
        let age_text = fields[2].trim();
        let severity_text = fields[3].trim();

        if id.is_empty() || name.is_empty() || age_text.is_empty() || severity_text.is_empty() {
            return Err(TriageError::MalformedRow(format!(
                "missing field: {line}"
            )));
        }

        let age: i32 = age_text
            .parse()
            .map_err(|_| TriageError::InvalidNumber(line.to_string()))?;
        let severity: i32 = severity_text
            .parse()
            .map_err(|_| TriageError::InvalidNumber(line.to_string()))?;

        registry.register(id, name, age, severity);
        loaded += 1;
    }

    info!(
        "Loaded {} patients from {} in {:?}",
        loaded,
        path.display(),
        start.elapsed()
    );
    Ok(loaded)
}

/// Export treated cases to a CSV file, oldest first.
///
/// Each row carries the patient's *current* state as read through the
/// shared handle at export time, not a snapshot from treatment time, plus
/// the treatment end timestamp in RFC 3339 UTC (millisecond precision,
/// `Z` suffix) so rows sort chronologically as text.
pub fn export_log(path: &Path, cases: &[TreatedCase]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{EXPORT_HEADER}")?;
    for case in cases {
        let patient = &case.patient;
        writeln!(
            writer,
            "{},{},{},{},{}",
            patient.id(),
            escape(&patient.name()),
            patient.age(),
            patient.severity(),
            case.end.to_rfc3339_opts(SecondsFormat::Millis, true)
        )?;
    }
    writer.flush()?;

    info!("Exported {} treated cases to {}", cases.len(), path.display());
    Ok(())
}

/// Minimal CSV escaping: wrap in double quotes, doubling internal quotes,
/// iff the field contains a comma or a quote.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split one CSV row on commas, honouring double-quoted fields with `""`
/// as an escaped quote.
fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_only_when_needed() {
        assert_eq!(escape("John Doe"), "John Doe");
        assert_eq!(escape("Doe, Jane"), "\"Doe, Jane\"");
        assert_eq!(escape("John \"Boss\" Doe"), "\"John \"\"Boss\"\" Doe\"");
    }

    #[test]
    fn test_split_row_plain() {
        assert_eq!(split_row("P1,Ann,30,5"), vec!["P1", "Ann", "30", "5"]);
    }

    #[test]
    fn test_split_row_quoted_comma() {
        assert_eq!(
            split_row("P1,\"Ann, B\",30,5"),
            vec!["P1", "Ann, B", "30", "5"]
        );
    }

    #[test]
    fn test_split_row_inverts_escape() {
        let original = "John \"Boss\", Doe";
        let row = format!("P1,{},30,5", escape(original));
        assert_eq!(split_row(&row)[1], original);
    }
}
