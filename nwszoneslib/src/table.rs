//! Text-table rendering for zone records.
//!
//! This is a pure presentation layer: given the same input sequence
//! (including order), [`render_table`] always yields the same string. All
//! it does is sort, compute per-column widths, and join padded cells.

use crate::record::ZoneRecord;

/// Column headers, in display order.
const HEADERS: [&str; 3] = ["State", "Name", "Zone ID"];

/// Separator placed between columns.
const COLUMN_SEPARATOR: &str = " | ";

/// Returned for an empty record sequence.
pub const EMPTY_MESSAGE: &str = "No data to display.";

/// Display width of a cell, counted in characters to match the padding
/// applied by `format!`.
fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Left-justify a cell to the given width.
fn pad(s: &str, width: usize) -> String {
    format!("{s:<width$}")
}

fn cells(record: &ZoneRecord) -> [&str; 3] {
    [&record.state, &record.name, &record.zone_id]
}

/// Sort records by `(state, name)` ascending, lexically.
///
/// The sort is stable: records with equal keys keep their relative input
/// order. The zone ID never participates in the ordering.
pub fn sort_records(records: &mut [ZoneRecord]) {
    records.sort_by(|a, b| {
        (a.state.as_str(), a.name.as_str()).cmp(&(b.state.as_str(), b.name.as_str()))
    });
}

/// Render records as an aligned text table.
///
/// Produces a header line, a dashed separator, and one line per record,
/// sorted by state then name. Every cell is left-justified to its column's
/// width, which is the maximum of the header length and every cell length
/// in that column. An empty input yields [`EMPTY_MESSAGE`].
pub fn render_table(records: &[ZoneRecord]) -> String {
    if records.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut sorted: Vec<ZoneRecord> = records.to_vec();
    sort_records(&mut sorted);

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| display_width(h)).collect();
    for record in &sorted {
        for (i, cell) in cells(record).iter().enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    let header_line = HEADERS
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(header, *width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR);

    let separator_line = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR);

    let mut lines = vec![header_line, separator_line];
    for record in &sorted {
        let row = cells(record)
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR);
        lines.push(row);
    }

    lines.join("\n")
}
