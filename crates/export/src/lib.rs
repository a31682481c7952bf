//! Export helpers for the saved calculation log.
//!
//! CSV columns mirror the wire field names so exported logs line up with what
//! an embedding web layer would serve from its list endpoint.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use launcher_store::Calculation;
use thiserror::Error;

/// Fixed CSV header for exported logs.
pub const CSV_HEADER: &str =
    "id,timestamp,angleSetting,targetType,targetX,targetY,targetDistance,contractionDistance";

/// Errors raised while exporting a log.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("filesystem error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Write the standard log header.
pub fn write_csv_header(writer: &mut dyn Write) -> io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)
}

/// Write one stored calculation as a CSV row matching the header ordering.
/// Fields the calculation's mode did not define stay empty.
pub fn write_csv_row(writer: &mut dyn Write, calculation: &Calculation) -> io::Result<()> {
    let record = &calculation.record;
    writeln!(
        writer,
        "{},{},{},{},{},{},{:.6},{:.1}",
        calculation.id,
        record.timestamp,
        record.angle_setting.map(|a| a.as_str()).unwrap_or(""),
        record.target_type.map(|t| t.as_str()).unwrap_or(""),
        optional_number(record.target_x),
        optional_number(record.target_y),
        record.target_distance,
        record.contraction_distance,
    )
}

/// Write the whole log as CSV, header first.
pub fn write_csv(writer: &mut dyn Write, calculations: &[Calculation]) -> io::Result<()> {
    write_csv_header(writer)?;
    for calculation in calculations {
        write_csv_row(writer, calculation)?;
    }
    writer.flush()
}

/// Write the whole log as pretty-printed JSON.
pub fn write_json<P: AsRef<Path>>(path: P, calculations: &[Calculation]) -> Result<(), ExportError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), calculations)?;
    Ok(())
}

/// Read a JSON log back into memory. Missing files read as an empty log so a
/// fresh log path needs no special casing.
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Vec<Calculation>, ExportError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = File::open(path)?;
    Ok(serde_json::from_reader(io::BufReader::new(file))?)
}

fn optional_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use launcher_contraction::AngleSetting;
    use launcher_store::{CalculationStore, NewCalculation};

    fn sample_store() -> CalculationStore {
        let store = CalculationStore::new();
        store.save(NewCalculation {
            angle_setting: None,
            target_type: None,
            target_distance: 4.5,
            target_x: None,
            target_y: None,
            contraction_distance: 14.9,
            launch_angle: Some(45.0),
            timestamp: 2.0,
        });
        store.save(NewCalculation {
            angle_setting: Some(AngleSetting::Acute),
            target_type: None,
            target_distance: 1.0,
            target_x: Some(0.0),
            target_y: Some(100.0),
            contraction_distance: 13.0,
            launch_angle: None,
            timestamp: 5.0,
        });
        store
    }

    #[test]
    fn csv_rows_follow_list_order_and_header() {
        let store = sample_store();
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &store.list()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        // Most recent first: the geometry record (timestamp 5) leads.
        assert_eq!(lines[1], "2,5,acute,,0,100,1.000000,13.0");
        assert_eq!(lines[2], "1,2,,,,,4.500000,14.9");
    }

    #[test]
    fn json_round_trips_through_a_temp_file() {
        let store = sample_store();
        let listed = store.list();

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("log.json");
        write_json(&path, &listed).unwrap();
        let read_back = read_json(&path).unwrap();

        assert_eq!(read_back, listed);
    }

    #[test]
    fn missing_json_log_reads_as_empty() {
        let calculations = read_json("does-not-exist/log.json").unwrap();
        assert!(calculations.is_empty());
    }
}
