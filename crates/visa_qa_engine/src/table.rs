use scraper::ElementRef;

use crate::dom::{select_all, strip_concat_text};
use crate::region::ContentRegion;

/// Separator between a header and its cell value.
pub const HEADER_SEPARATOR: &str = "：";
/// Separator between the cells of one transcribed row.
pub const COLUMN_SEPARATOR: &str = "｜";

/// One line per data row across every table of the region, in document order.
///
/// Cells are matched to headers by position; cells past the last header are
/// kept bare. `None` when the region holds no table or no row with text.
pub fn transcribe_tables(region: &ContentRegion<'_>) -> Option<Vec<String>> {
    let mut rows = Vec::new();
    for table in region.select("table") {
        let headers: Vec<String> = select_all(table, "th")
            .into_iter()
            .map(strip_concat_text)
            .collect();

        rows.extend(
            select_all(table, "tr")
                .into_iter()
                .filter_map(|row| transcribe_row(row, &headers)),
        );
    }

    (!rows.is_empty()).then_some(rows)
}

fn transcribe_row(row: ElementRef<'_>, headers: &[String]) -> Option<String> {
    let tokens: Vec<String> = select_all(row, "td")
        .into_iter()
        .enumerate()
        .filter_map(|(position, cell)| {
            let text = strip_concat_text(cell);
            if text.is_empty() {
                return None;
            }
            Some(match headers.get(position) {
                Some(header) => format!("{header}{HEADER_SEPARATOR}{text}"),
                None => text,
            })
        })
        .collect();

    (!tokens.is_empty()).then(|| tokens.join(COLUMN_SEPARATOR))
}
