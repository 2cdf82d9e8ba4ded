//! Public API Types
//!
//! Enumerations used on the public configuration surface.

/// Sheet selection mode
///
/// Controls which worksheet of the workbook is converted. Exactly one sheet
/// is converted per run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetSelector {
    /// Automatic selection (default)
    ///
    /// The first sheet of the workbook is used unless a later sheet name
    /// matches one of the listing-sheet patterns ("Готовый бизнес" or
    /// "Торговля", case-insensitive). When several names match, the last
    /// match wins.
    Auto,

    /// Select by index (0-based)
    ///
    /// Example: `SheetSelector::Index(0)` selects the first sheet.
    Index(usize),

    /// Select by sheet name
    ///
    /// Example: `SheetSelector::Name("Готовый бизнес".to_string())`
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Auto
    }
}
