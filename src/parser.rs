//! Parser Module
//!
//! calamine-based workbook access: sheet listing, listing-sheet selection and
//! extraction of a sheet into a dense grid of display strings.

use calamine::{open_workbook_auto_from_rs, Data, Reader, Sheets};
use regex::Regex;
use std::io::{Read, Seek};
use std::sync::LazyLock;

use crate::api::SheetSelector;
use crate::error::XlsxToAvitoError;

/// Pattern for the ready-business listing sheet name.
static READY_BUSINESS_SHEET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)готовый\s+бизнес").expect("Hardcode regex pattern"));

/// Pattern for the trade-category listing sheet name.
static TRADE_SHEET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)торговля").expect("Hardcode regex pattern"));

/// Pick the listing sheet from the workbook's sheet names.
///
/// Defaults to the first sheet. Every name is then checked against the two
/// listing-sheet patterns in order; each match replaces the previous choice,
/// so the last matching name wins. Returns `None` only for an empty workbook.
pub(crate) fn auto_select_sheet(names: &[String]) -> Option<&str> {
    let mut selected = names.first()?.as_str();
    for name in names {
        if READY_BUSINESS_SHEET.is_match(name) || TRADE_SHEET.is_match(name) {
            selected = name;
        }
    }
    Some(selected)
}

/// Workbook parser
///
/// Thin wrapper over calamine's auto-detecting reader (XLSX, XLS, XLSB and
/// ODS all decode to the same grid shape).
pub(crate) struct WorkbookParser<R: Read + Seek + Clone> {
    workbook: Sheets<R>,
}

impl<R: Read + Seek + Clone> WorkbookParser<R> {
    /// Open a workbook from a reader.
    ///
    /// # Errors
    ///
    /// `XlsxToAvitoError::Parse` when calamine cannot decode the input.
    pub fn open(reader: R) -> Result<Self, XlsxToAvitoError> {
        let workbook = open_workbook_auto_from_rs(reader).map_err(XlsxToAvitoError::Parse)?;
        Ok(Self { workbook })
    }

    /// All sheet names, in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// Resolve the selector to a concrete sheet name.
    ///
    /// # Errors
    ///
    /// `XlsxToAvitoError::MissingSheet` when the workbook is empty, the index
    /// is out of range or the named sheet does not exist.
    pub fn select_sheet(&self, selector: &SheetSelector) -> Result<String, XlsxToAvitoError> {
        let names = self.sheet_names();

        match selector {
            SheetSelector::Auto => auto_select_sheet(&names)
                .map(str::to_string)
                .ok_or_else(|| {
                    XlsxToAvitoError::MissingSheet("workbook contains no sheets".to_string())
                }),

            SheetSelector::Index(index) => names.get(*index).cloned().ok_or_else(|| {
                XlsxToAvitoError::MissingSheet(format!(
                    "sheet index {} is out of range (total: {})",
                    index,
                    names.len()
                ))
            }),

            SheetSelector::Name(name) => {
                if names.iter().any(|n| n == name) {
                    Ok(name.clone())
                } else {
                    Err(XlsxToAvitoError::MissingSheet(name.clone()))
                }
            }
        }
    }

    /// Extract a sheet into a dense row-major grid of display strings.
    ///
    /// Row and column indices are absolute sheet coordinates: when the used
    /// range does not start at A1, the grid is padded with empty cells so
    /// that the fixed header/data row layout still lines up. Empty cells
    /// read as `""`.
    pub fn extract_grid(&mut self, sheet_name: &str) -> Result<Vec<Vec<String>>, XlsxToAvitoError> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(XlsxToAvitoError::Parse)?;

        let (Some(start), Some(end)) = (range.start(), range.end()) else {
            return Ok(Vec::new());
        };

        let height = end.0 as usize + 1;
        let width = end.1 as usize + 1;
        let mut grid = vec![vec![String::new(); width]; height];

        for (r, row) in range.rows().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                grid[start.0 as usize + r][start.1 as usize + c] = render_cell(cell);
            }
        }

        Ok(grid)
    }
}

/// Render a calamine cell to its feed display string.
///
/// Numbers use Rust's shortest float/integer formatting, dates render as ISO
/// (`YYYY-MM-DD`, with a time suffix when the time of day is non-zero) and
/// error cells render as their Excel error literal (e.g. `#DIV/0!`).
fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(dt) if dt.time() == chrono::NaiveTime::MIN => dt.format("%Y-%m-%d").to_string(),
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => dt.as_f64().to_string(),
        },
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
        #[allow(unreachable_patterns)]
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_auto_select_defaults_to_first_sheet() {
        let names = names(&["Sheet1", "Sheet2"]);
        assert_eq!(auto_select_sheet(&names), Some("Sheet1"));
    }

    #[test]
    fn test_auto_select_prefers_listing_sheet() {
        let names = names(&["Sheet1", "Готовый бизнес"]);
        assert_eq!(auto_select_sheet(&names), Some("Готовый бизнес"));
    }

    #[test]
    fn test_auto_select_matches_trade_sheet() {
        let names = names(&["Справочник", "Торговля", "Sheet3"]);
        assert_eq!(auto_select_sheet(&names), Some("Торговля"));
    }

    #[test]
    fn test_auto_select_last_match_wins() {
        let names = names(&["Готовый бизнес", "Торговля (архив)"]);
        assert_eq!(auto_select_sheet(&names), Some("Торговля (архив)"));
    }

    #[test]
    fn test_auto_select_is_case_insensitive() {
        let names = names(&["Sheet1", "ГОТОВЫЙ  БИЗНЕС 2024"]);
        assert_eq!(auto_select_sheet(&names), Some("ГОТОВЫЙ  БИЗНЕС 2024"));
    }

    #[test]
    fn test_auto_select_empty_workbook() {
        assert_eq!(auto_select_sheet(&[]), None);
    }

    #[test]
    fn test_render_cell_values() {
        assert_eq!(render_cell(&Data::Empty), "");
        assert_eq!(render_cell(&Data::String("кафе".to_string())), "кафе");
        assert_eq!(render_cell(&Data::Int(42)), "42");
        assert_eq!(render_cell(&Data::Float(500000.0)), "500000");
        assert_eq!(render_cell(&Data::Float(2.5)), "2.5");
        assert_eq!(render_cell(&Data::Bool(true)), "true");
    }
}
