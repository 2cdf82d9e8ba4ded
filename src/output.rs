//! Feed Writer Module
//!
//! Serializes data rows into the Avito `<Ad>` element structure and wraps
//! them in the feed root. The whole document is built in memory as one
//! string; element order is fixed and rows are emitted in sheet order.

use std::borrow::Cow;

use crate::columns::ColumnMap;
use crate::schema::{
    Field, CATEGORY, DATA_START_ROW, DEFAULT_FEE, DEFAULT_ROYALTY, FORMAT_VERSION,
    PHOTO_DELIMITER, TARGET,
};

/// Escape the five XML special characters (`& < > " '`).
///
/// Applied to every emitted value except the CDATA description body. Used
/// for both element text and the `Image` url attribute.
fn escape_xml(value: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(value)
}

/// Build the complete feed document from the sheet grid.
///
/// Rows before `DATA_START_ROW` (category banner, column titles, reserved
/// service rows) are never emitted. Surviving records appear in row order.
pub(crate) fn render_feed(grid: &[Vec<String>], columns: &ColumnMap) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!(
        "<Ads formatVersion=\"{}\" target=\"{}\">\n",
        FORMAT_VERSION, TARGET
    ));

    for row in grid.iter().skip(DATA_START_ROW) {
        write_ad(&mut xml, row, columns);
    }

    xml.push_str("</Ads>\n");
    xml
}

/// Serialize one data row into an `<Ad>` element, or nothing.
///
/// A row is silently dropped when it is empty or its id cell is empty; an
/// unbound id column therefore drops every row. This is filtering, not an
/// error.
fn write_ad(xml: &mut String, row: &[String], columns: &ColumnMap) {
    let id = columns.value(row, Field::Id);
    if row.is_empty() || id.is_empty() {
        return;
    }

    xml.push_str("  <Ad>\n");

    push_element(xml, "Id", id);
    push_optional(xml, "AdId", columns.value(row, Field::AdId));
    push_optional(xml, "ManagerName", columns.value(row, Field::ManagerName));
    push_optional(xml, "ContactPhone", columns.value(row, Field::ContactPhone));
    push_optional(xml, "Address", columns.value(row, Field::Address));

    // Category is constant for the whole feed, whatever the source cell says.
    push_element(xml, "Category", CATEGORY);

    push_optional(xml, "BusinessType", columns.value(row, Field::BusinessType));
    push_optional(xml, "GoodsSubType", columns.value(row, Field::GoodsSubType));
    push_optional(
        xml,
        "FranchiseSubType",
        columns.value(row, Field::FranchiseSubType),
    );
    push_optional(xml, "Title", columns.value(row, Field::Title));

    write_description(xml, columns.value(row, Field::Description));

    push_optional(xml, "Price", columns.value(row, Field::Price));
    push_optional(
        xml,
        "ContactMethod",
        columns.value(row, Field::ContactMethod),
    );

    let fee = columns.value(row, Field::FranchiseFee);
    push_element(xml, "FranchiseFee", non_empty_or(fee, DEFAULT_FEE));

    let royalty = columns.value(row, Field::FranchiseRoyalty);
    push_element(xml, "FranchiseRoyalty", non_empty_or(royalty, DEFAULT_ROYALTY));

    push_optional(xml, "RoyaltyType", columns.value(row, Field::RoyaltyType));
    push_optional(xml, "FixedRoyalty", columns.value(row, Field::FixedRoyalty));
    push_optional(
        xml,
        "PercentRoyalty",
        columns.value(row, Field::PercentRoyalty),
    );
    push_optional(xml, "Payback", columns.value(row, Field::Payback));
    push_optional(xml, "Support", columns.value(row, Field::Support));
    push_optional(xml, "SupportType", columns.value(row, Field::SupportType));
    push_optional(
        xml,
        "TargetAudience",
        columns.value(row, Field::TargetAudience),
    );
    push_optional(xml, "ContactEmail", columns.value(row, Field::ContactEmail));
    push_optional(xml, "DateEnd", columns.value(row, Field::DateEnd));
    push_optional(xml, "VideoURL", columns.value(row, Field::VideoUrl));
    push_optional(xml, "CompanyName", columns.value(row, Field::CompanyName));

    write_images(xml, columns.value(row, Field::Photos));

    xml.push_str("  </Ad>\n");
}

/// Emit the always-present description element.
///
/// The body is trimmed and placed inside CDATA without entity escaping.
/// A leading `p>` (a recurring upstream data-entry defect where the opening
/// angle bracket is lost) is repaired by prepending `<`.
fn write_description(xml: &mut String, raw: &str) {
    let body = raw.trim();
    xml.push_str("    <Description><![CDATA[");
    if body.starts_with("p>") {
        xml.push('<');
    }
    xml.push_str(body);
    xml.push_str("]]></Description>\n");
}

/// Emit the `<Images>` container from the photos cell.
///
/// The cell is split on `|`; each piece is trimmed and empty pieces are
/// dropped. Nothing is emitted when no URLs remain.
fn write_images(xml: &mut String, photos_cell: &str) {
    if photos_cell.is_empty() {
        return;
    }

    let urls: Vec<&str> = photos_cell
        .split(PHOTO_DELIMITER)
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .collect();

    if urls.is_empty() {
        return;
    }

    xml.push_str("    <Images>\n");
    for url in urls {
        xml.push_str("      <Image url=\"");
        xml.push_str(&escape_xml(url));
        xml.push_str("\" />\n");
    }
    xml.push_str("    </Images>\n");
}

/// Emit one child element with escaped text content.
fn push_element(xml: &mut String, name: &str, value: &str) {
    xml.push_str("    <");
    xml.push_str(name);
    xml.push('>');
    xml.push_str(&escape_xml(value));
    xml.push_str("</");
    xml.push_str(name);
    xml.push_str(">\n");
}

/// Emit one child element only when the value is non-empty.
fn push_optional(xml: &mut String, name: &str, value: &str) {
    if !value.is_empty() {
        push_element(xml, name, value);
    }
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}
