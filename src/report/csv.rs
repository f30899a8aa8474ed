//! CSV rendering of the salary register.
//!
//! The export format is fixed: UTF-8 with a leading BOM so spreadsheet
//! tools pick up the Devanagari headers, `\n` record terminators with a
//! trailing newline, name and position always quoted, unset days shown
//! as `-`, and the attendance count printed with one decimal place.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{EngineError, EngineResult};

use super::ReportRow;

/// UTF-8 byte order mark prepended to every export.
const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Fixed header labels before the day columns.
const LEADING_HEADERS: [&str; 6] = [
    "क्रम",
    "कर्मचारी नाम",
    "पद",
    "मूल वेतन",
    "HRA",
    "अन्य भत्ता",
];

/// Fixed header labels after the day columns.
const TRAILING_HEADERS: [&str; 7] = [
    "उपस्थिति",
    "कुल वेतन",
    "ESI",
    "PF",
    "अन्य कटौती",
    "कुल कटौती",
    "नेट वेतन",
];

/// Returns the download filename for a period label.
pub fn csv_filename(month: &str) -> String {
    format!("Salary_Sheet_{}.csv", month)
}

/// Renders register rows as CSV bytes, BOM included.
///
/// The register pre-quotes its two free-text columns itself (doubling any
/// embedded quotes), so the writer is configured to never add quoting of
/// its own; every other column is numeric or a fixed symbol.
pub fn render_csv(rows: &[ReportRow], total_days: i64) -> EngineResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(BOM.to_vec());

    let mut headers: Vec<String> = LEADING_HEADERS.iter().map(|h| h.to_string()).collect();
    for day in 1..=total_days {
        headers.push(format!("दिन {}", day));
    }
    headers.extend(TRAILING_HEADERS.iter().map(|h| h.to_string()));
    writer.write_record(&headers).map_err(csv_error)?;

    for row in rows {
        let mut record: Vec<String> = vec![
            row.serial.to_string(),
            quoted(&row.name),
            quoted(&row.position),
            row.basic.to_string(),
            row.hra.to_string(),
            row.allowance.to_string(),
        ];
        record.extend(row.days.iter().cloned());
        record.push(format!("{:.1}", row.attendance_count));
        record.push(row.gross.to_string());
        record.push(row.esi.to_string());
        record.push(row.pf.to_string());
        record.push(row.other_deduction.to_string());
        record.push(row.total_deduction.to_string());
        record.push(row.net.to_string());
        writer.write_record(&record).map_err(csv_error)?;
    }

    writer.into_inner().map_err(|e| EngineError::Io {
        message: e.to_string(),
    })
}

/// Wraps a text column in quotes, doubling any embedded quotes.
fn quoted(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

fn csv_error(error: csv::Error) -> EngineError {
    EngineError::Io {
        message: error.to_string(),
    }
}
