//! Builder Module
//!
//! Fluent builder API for constructing a `Converter` instance.

use std::io::{Cursor, Read, Seek, Write};

use crate::api::SheetSelector;
use crate::columns::ColumnMap;
use crate::error::XlsxToAvitoError;
use crate::output;
use crate::parser::WorkbookParser;
use crate::schema::{HEADER_ROW, MIN_ROWS};

/// Internal conversion settings.
#[derive(Debug, Clone)]
pub(crate) struct ConversionConfig {
    /// Sheet selection mode
    pub sheet_selector: SheetSelector,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            sheet_selector: SheetSelector::Auto,
        }
    }
}

/// Fluent builder for `Converter`
///
/// Every setting has a default; only the settings you need have to be
/// overridden.
///
/// # Example
///
/// ```rust,no_run
/// use xlsx2avito::{ConverterBuilder, SheetSelector};
///
/// # fn main() -> Result<(), xlsx2avito::XlsxToAvitoError> {
/// let converter = ConverterBuilder::new()
///     .with_sheet_selector(SheetSelector::Index(0))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConverterBuilder {
    config: ConversionConfig,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    /// Create a builder with default settings (automatic sheet selection).
    pub fn new() -> Self {
        Self {
            config: ConversionConfig::default(),
        }
    }

    /// Choose which sheet of the workbook to convert.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use xlsx2avito::{ConverterBuilder, SheetSelector};
    ///
    /// // Listing-sheet heuristic (default)
    /// let builder = ConverterBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Auto);
    ///
    /// // Explicit sheet name
    /// let builder = ConverterBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Name("Торговля".to_string()));
    /// ```
    pub fn with_sheet_selector(mut self, selector: SheetSelector) -> Self {
        self.config.sheet_selector = selector;
        self
    }

    /// Validate the configuration and create the `Converter`.
    ///
    /// # Errors
    ///
    /// `XlsxToAvitoError::Config` when the configuration is invalid (an
    /// empty sheet name).
    pub fn build(self) -> Result<Converter, XlsxToAvitoError> {
        if let SheetSelector::Name(ref name) = self.config.sheet_selector {
            if name.is_empty() {
                return Err(XlsxToAvitoError::Config(
                    "Sheet name must not be empty".to_string(),
                ));
            }
        }

        Ok(Converter::new(self.config))
    }
}

/// Conversion façade
///
/// Main entry point: converts a listing spreadsheet into the Avito XML feed
/// according to the settings built with `ConverterBuilder`.
///
/// # Example
///
/// ```rust,no_run
/// use xlsx2avito::ConverterBuilder;
/// use std::fs::File;
///
/// # fn main() -> Result<(), xlsx2avito::XlsxToAvitoError> {
/// let converter = ConverterBuilder::new().build()?;
/// let input = File::open("listings.xlsx")?;
/// let mut output = Vec::new();
/// converter.convert(input, &mut output)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    pub(crate) fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Convert a spreadsheet into the Avito XML feed.
    ///
    /// The input is buffered fully in memory before parsing; the document is
    /// built in memory and written out in one piece. Either a complete feed
    /// is produced or a single terminal error is returned.
    ///
    /// # Arguments
    ///
    /// * `input` - spreadsheet reader (`Read + Seek`)
    /// * `output` - feed writer (`Write`); receives the UTF-8 XML bytes
    ///
    /// # Errors
    ///
    /// * `XlsxToAvitoError::Parse` - the spreadsheet could not be decoded
    /// * `XlsxToAvitoError::MissingSheet` - no usable sheet was found
    /// * `XlsxToAvitoError::InsufficientRows` - the sheet is shorter than the
    ///   fixed banner/header/reserved/data layout requires
    /// * `XlsxToAvitoError::Io` - writing the feed failed
    pub fn convert<R: Read + Seek, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<(), XlsxToAvitoError> {
        let feed = self.convert_to_string(input)?;
        output.write_all(feed.as_bytes())?;
        Ok(())
    }

    /// Convert a spreadsheet into the feed as a `String`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::fs::File;
    /// use xlsx2avito::ConverterBuilder;
    ///
    /// # fn main() -> Result<(), xlsx2avito::XlsxToAvitoError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// let input = File::open("listings.xlsx")?;
    /// let feed = converter.convert_to_string(input)?;
    /// println!("{}", feed);
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert_to_string<R: Read + Seek>(
        &self,
        mut input: R,
    ) -> Result<String, XlsxToAvitoError> {
        // Buffer the whole input up front; conversion runs exactly once over
        // the fully loaded workbook.
        let mut buffer = Vec::new();
        input.read_to_end(&mut buffer)?;

        let mut parser = WorkbookParser::open(Cursor::new(buffer))?;
        let sheet_name = parser.select_sheet(&self.config.sheet_selector)?;
        let grid = parser.extract_grid(&sheet_name)?;

        if grid.len() < MIN_ROWS {
            return Err(XlsxToAvitoError::InsufficientRows { found: grid.len() });
        }

        // Column binding happens once per conversion; all rows share it.
        let columns = ColumnMap::from_header(&grid[HEADER_ROW]);

        Ok(output::render_feed(&grid, &columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converter_builder_new() {
        let builder = ConverterBuilder::new();
        assert_eq!(builder.config.sheet_selector, SheetSelector::Auto);
    }

    #[test]
    fn test_with_sheet_selector() {
        let builder = ConverterBuilder::new().with_sheet_selector(SheetSelector::Index(2));
        assert!(matches!(
            builder.config.sheet_selector,
            SheetSelector::Index(2)
        ));

        let builder = ConverterBuilder::new()
            .with_sheet_selector(SheetSelector::Name("Торговля".to_string()));
        assert!(matches!(
            builder.config.sheet_selector,
            SheetSelector::Name(ref name) if name == "Торговля"
        ));
    }

    #[test]
    fn test_build_success() {
        assert!(ConverterBuilder::new().build().is_ok());
    }

    #[test]
    fn test_build_rejects_empty_sheet_name() {
        let result = ConverterBuilder::new()
            .with_sheet_selector(SheetSelector::Name(String::new()))
            .build();
        match result {
            Err(XlsxToAvitoError::Config(msg)) => {
                assert!(msg.contains("Sheet name"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_convert_to_string_with_invalid_input() {
        let converter = ConverterBuilder::new().build().unwrap();
        let invalid_input: Vec<u8> = vec![];
        let result = converter.convert_to_string(Cursor::new(invalid_input));
        assert!(result.is_err());
    }
}
