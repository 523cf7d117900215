use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes `rows` under the payments CSV header into a temp file.
pub fn payments_csv(rows: &[[&str; 5]]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    {
        let mut wtr = csv::WriterBuilder::new().from_writer(file.as_file_mut());
        wtr.write_record(["kind", "number", "pin", "amount", "change"])?;
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
    }
    file.flush()?;
    Ok(file)
}

pub fn card(number: &'static str, pin: &'static str) -> [&'static str; 5] {
    ["card", number, pin, "", ""]
}

pub fn cash(amount: &'static str, change: &'static str) -> [&'static str; 5] {
    ["cash", "", "", amount, change]
}
