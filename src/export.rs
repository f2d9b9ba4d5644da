//! CSV export of reference and observed letter frequencies.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::algos::frequency::FrequencyTable;

pub const CSV_HEADER: &str = "Letter,English_Frequency,Ciphertext_Frequency";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write frequency table: {0}")]
    Io(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, ExportError>;

/// Writes a header and one row per letter, A to Z.
///
/// Values use their shortest round-trip form, so whole numbers keep a
/// trailing `.0` (e.g. `5.0`).
pub fn write_frequency_csv<W: Write>(
    mut writer: W,
    reference: &FrequencyTable,
    observed: &FrequencyTable,
) -> Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for ((letter, english), (_, ciphertext)) in reference.iter().zip(observed.iter()) {
        writeln!(writer, "{letter},{english:?},{ciphertext:?}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the table into it.
pub fn save_frequency_csv(
    path: &Path,
    reference: &FrequencyTable,
    observed: &FrequencyTable,
) -> Result<()> {
    let file = File::create(path)?;
    write_frequency_csv(BufWriter::new(file), reference, observed)?;
    info!(path = %path.display(), "saved frequency table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algos::frequency::analyze_frequency;
    use crate::constants::ENGLISH_FREQUENCIES;

    #[test]
    fn writes_header_and_alphabetical_rows() {
        let observed = analyze_frequency("WKLV LV D VHFUHW PHVVDJH");
        let mut buf = Vec::new();
        write_frequency_csv(&mut buf, &ENGLISH_FREQUENCIES, &observed).unwrap();

        let csv = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 27);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "A,8.12,0.0");
        assert_eq!(lines[5], "E,12.02,5.0");
        assert_eq!(lines[22], "V,0.98,25.0");
        assert_eq!(lines[26], "Z,0.07,0.0");
    }

    #[test]
    fn saves_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freq.csv");
        save_frequency_csv(&path, &ENGLISH_FREQUENCIES, &FrequencyTable::zeroed()).unwrap();

        let csv = std::fs::read_to_string(&path).unwrap();
        assert!(csv.starts_with(CSV_HEADER));
        assert_eq!(csv.lines().count(), 27);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("freq.csv");
        let err = save_frequency_csv(&path, &ENGLISH_FREQUENCIES, &FrequencyTable::zeroed());
        assert!(matches!(err, Err(ExportError::Io(_))));
    }
}
