use crate::domain::model::{OutputRow, Record, SourceTable, OUTPUT_COLUMNS};
use crate::utils::error::{EtlError, Result};

/// Parses an export into its header row and records.
///
/// Rows may be shorter or longer than the header: short rows lack the trailing
/// columns, extra cells without a header are dropped. Blank lines are skipped.
pub fn parse_csv(data: &[u8]) -> Result<SourceTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let fields = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect();
        records.push(Record::new(fields));
    }

    Ok(SourceTable { headers, records })
}

/// Serializes import rows. The header row is always written, even with no rows.
pub fn write_csv(rows: &[OutputRow]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        writer.write_record(row.values())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("Output is not valid UTF-8: {}", e),
    })
}
