use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Selector};

use crate::domain::models::RankedEntry;
use crate::errors;

/// Extract (glider, points) pairs from a competition results page.
///
/// Rows with at most 4 cells are page chrome; a real result row carries the
/// glider name inside a `<nobr>` in its 5th cell and the points in its 2nd.
/// A row contributes only when both are non-empty. A non-integer points
/// string is a hard error for the whole page. Output keeps document order,
/// without dedup or sorting.
pub fn parse_results(html: &str) -> Result<Vec<RankedEntry>> {
    let document = Html::parse_document(html);
    let row_selector = selector("tr");
    let cell_selector = selector("td");
    let name_selector = selector("nobr");

    let mut entries = Vec::new();
    for row in document.select(&row_selector) {
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        if cells.len() <= 4 {
            continue;
        }

        let points_text = text_of(cells[1]);
        let name = match row_glider_name(cells[4], &name_selector) {
            Some(name) => name,
            None => continue,
        };
        if name.is_empty() || points_text.is_empty() {
            continue;
        }

        let points = points_text
            .parse::<i64>()
            .with_context(|| errors::parse_context(&format!("points \"{}\"", points_text)))?;
        entries.push(RankedEntry::new(name, points));
    }

    Ok(entries)
}

fn row_glider_name(cell: ElementRef, name_tag: &Selector) -> Option<String> {
    cell.select(name_tag).next().map(text_of)
}

fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("Valid selector")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results_page(rows: &str) -> String {
        format!("<html><body><table>{}</table></body></html>", rows)
    }

    fn result_row(points: &str, name: &str) -> String {
        format!(
            "<tr><td>1</td><td>{}</td><td>FR</td><td>x</td><td><nobr>{}</nobr></td></tr>",
            points, name
        )
    }

    #[test]
    fn test_parses_rows_in_document_order() {
        let html = results_page(&format!(
            "{}{}",
            result_row("812", "Discus 2a"),
            result_row("640", "JS1 Revelation")
        ));

        let entries = parse_results(&html).unwrap();
        assert_eq!(
            entries,
            vec![
                RankedEntry::new("Discus 2a", 812),
                RankedEntry::new("JS1 Revelation", 640),
            ]
        );
    }

    #[test]
    fn test_short_rows_are_ignored() {
        let html = results_page("<tr><td>Header</td><td>812</td></tr>");
        assert!(parse_results(&html).unwrap().is_empty());
    }

    #[test]
    fn test_rows_without_name_or_points_are_ignored() {
        let no_nobr = "<tr><td>1</td><td>812</td><td></td><td></td><td>Discus</td></tr>";
        let empty_name = result_row("812", "  ");
        let empty_points = result_row(" ", "Discus 2a");
        let html = results_page(&format!("{}{}{}", no_nobr, empty_name, empty_points));

        assert!(parse_results(&html).unwrap().is_empty());
    }

    #[test]
    fn test_non_integer_points_is_an_error() {
        let html = results_page(&result_row("8#2", "Discus 2a"));
        assert!(parse_results(&html).is_err());
    }

    #[test]
    fn test_duplicate_rows_are_kept() {
        let row = result_row("812", "Discus 2a");
        let html = results_page(&format!("{}{}", row, row));

        assert_eq!(parse_results(&html).unwrap().len(), 2);
    }
}
