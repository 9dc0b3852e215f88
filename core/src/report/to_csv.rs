//! report/to_csv.rs
//! Header row plus one row per winner.

use std::io::Write;

use crate::report::types::{ReportError, ReportRow};

pub fn write_csv<W: Write>(rows: &[ReportRow], writer: W) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
