//! xlsx2avito - Excel to Avito.ru XML feed converter
//!
//! This crate converts ready-business listing spreadsheets (XLSX) into the
//! Avito.ru XML feed format (format version 3). It locates the listing sheet,
//! binds the known Cyrillic column titles to feed fields, and serializes each
//! data row into one `<Ad>` element.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use xlsx2avito::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a converter with default settings
//!     let converter = ConverterBuilder::new().build()?;
//!
//!     // Open input Excel file
//!     let input = File::open("listings.xlsx")?;
//!
//!     // Create output feed file
//!     let output = File::create("avito_feed.xml")?;
//!
//!     // Convert Excel to the Avito feed
//!     converter.convert(input, output)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! For in-memory conversion, use `Cursor`:
//!
//! ```rust,no_run
//! use std::io::Cursor;
//! use xlsx2avito::ConverterBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let converter = ConverterBuilder::new().build()?;
//! let excel_data: Vec<u8> = vec![]; // Your Excel file bytes
//! let mut feed_output = Vec::new();
//! converter.convert(Cursor::new(excel_data), &mut feed_output)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Sheet selection
//!
//! By default the converter picks the listing sheet automatically: the first
//! sheet is used unless a later sheet name matches the "Готовый бизнес" or
//! "Торговля" patterns, in which case the last matching sheet wins. This can
//! be overridden:
//!
//! ```rust,no_run
//! use xlsx2avito::{ConverterBuilder, SheetSelector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new()
//!         .with_sheet_selector(SheetSelector::Name("Готовый бизнес".to_string()))
//!         .build()?;
//!     # let _ = converter;
//!     Ok(())
//! }
//! ```
//!
//! # Convert to String
//!
//! ```rust,no_run
//! use std::fs::File;
//! use xlsx2avito::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new().build()?;
//!     let input = File::open("listings.xlsx")?;
//!
//!     // Convert to String instead of writing to a file
//!     let feed = converter.convert_to_string(input)?;
//!     println!("{}", feed);
//!
//!     Ok(())
//! }
//! ```

mod api;
mod builder;
mod columns;
mod error;
mod output;
mod parser;
mod schema;

pub use api::SheetSelector;
pub use builder::{Converter, ConverterBuilder};
pub use error::XlsxToAvitoError;
pub use schema::FEED_FILE_NAME;
