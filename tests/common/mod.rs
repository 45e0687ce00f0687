use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 6] = ["type", "member_id", "member_name", "amount", "date", "recurring"];

/// Writes a payments CSV with the standard header and the given rows.
pub fn write_payments_csv(path: &Path, rows: &[[&str; 6]]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
