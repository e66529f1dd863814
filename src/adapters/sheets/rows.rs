//! Row assembly for the spreadsheet layout.
//!
//! One row per committed tooth. Column order: four metadata cells (running
//! number, record id, date, time), the patient fields minus the three
//! relocated ones, the tooth fields, the examination fields, then the
//! relocated patient trio at the far end. Every row of one record repeats
//! the patient and examination values; only the tooth cells differ.

use crate::domain::record::Record;
use crate::domain::schema::{
    catalog, EXAMINATION_FIELDS, PATIENT_FIELDS, TEETH_FIELDS,
};

/// Patient fields moved to the trailing columns of the sheet.
pub const RELOCATED_PATIENT_FIELDS: &[&str] = &["namaWali", "tanggalLahir", "lokasiPemeriksaan"];

/// Zero-based column where the tooth fields start: the metadata quartet
/// plus the non-relocated patient fields.
pub fn tooth_column_offset() -> usize {
    4 + PATIENT_FIELDS.len() - RELOCATED_PATIENT_FIELDS.len()
}

/// Builds the value rows for one record set.
///
/// `first_no` is the running number of the first row; consecutive rows
/// count up from it.
pub fn build_rows(
    patient: &Record,
    teeth: &[Record],
    examination: &Record,
    record_id: &str,
    date: &str,
    time: &str,
    first_no: u64,
) -> Vec<Vec<String>> {
    teeth
        .iter()
        .enumerate()
        .map(|(i, tooth)| {
            let mut row = vec![
                (first_no + i as u64).to_string(),
                record_id.to_string(),
                date.to_string(),
                time.to_string(),
            ];
            for field in PATIENT_FIELDS {
                if !RELOCATED_PATIENT_FIELDS.contains(&field.key) {
                    row.push(patient.get(field.key).unwrap_or_default().to_string());
                }
            }
            for field in TEETH_FIELDS {
                row.push(tooth.get(field.key).unwrap_or_default().to_string());
            }
            for field in EXAMINATION_FIELDS {
                row.push(examination.get(field.key).unwrap_or_default().to_string());
            }
            for key in RELOCATED_PATIENT_FIELDS {
                row.push(patient.get_or_placeholder(key).to_string());
            }
            row
        })
        .collect()
}

/// A single-cell formula overwrite, addressed within the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCell {
    /// A1-style cell reference without the sheet prefix, e.g. `N5`.
    pub cell: String,
    /// An `=IMAGE(...)` formula.
    pub formula: String,
}

/// Computes the illustration overwrites for the appended rows.
///
/// Tooth condition and caries location each get an embedded image when the
/// catalog carries one for the stored label; the caries sentinel resolves
/// to no image and is left as text.
pub fn image_cells(teeth: &[Record], start_row: u64) -> Vec<ImageCell> {
    let offset = tooth_column_offset();
    let mut cells = Vec::new();
    for (i, tooth) in teeth.iter().enumerate() {
        let row = start_row + i as u64;
        for (key, lookup) in [
            ("kondisiGigi", catalog::condition_illustration as fn(&str) -> Option<&'static str>),
            ("letakKaries", catalog::caries_illustration),
        ] {
            let Some(url) = tooth.get(key).and_then(lookup) else {
                continue;
            };
            let index = TEETH_FIELDS
                .iter()
                .position(|f| f.key == key)
                .unwrap_or_default();
            cells.push(ImageCell {
                cell: format!("{}{row}", column_letter(offset + index)),
                formula: format!("=IMAGE(\"{url}\")"),
            });
        }
    }
    cells
}

/// Converts a zero-based column index to its A1 letter form.
pub fn column_letter(index: usize) -> String {
    let mut index = index as i64;
    let mut letters = Vec::new();
    while index >= 0 {
        letters.push(b'A' + (index % 26) as u8);
        index = index / 26 - 1;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}
