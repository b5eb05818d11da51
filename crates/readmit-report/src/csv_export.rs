//! CSV export of the filtered subset.

use std::io::Write;

use readmit_ingest::CsvTable;
use readmit_model::Encounter;

use crate::error::{ReportError, Result};

/// Write the header and every source column of the filtered rows, in source
/// order. Returns the number of data rows written.
pub fn write_filtered_csv<W: Write>(
    writer: W,
    table: &CsvTable,
    subset: &[&Encounter],
) -> Result<usize> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(&table.headers)?;
    for encounter in subset {
        let row = table
            .row(encounter.row)
            .ok_or(ReportError::MissingRow { row: encounter.row })?;
        csv.write_record(row)?;
    }
    csv.flush()?;
    Ok(subset.len())
}
