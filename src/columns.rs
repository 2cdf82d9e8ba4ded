//! Column Binding Module
//!
//! Binds the semantic fields of the schema to column indices of the selected
//! sheet. The binding is built exactly once per conversion from the header
//! row; every data row is then read through the same map.

use std::collections::HashMap;

use crate::schema::Field;

/// Per-conversion binding of semantic fields to column indices.
///
/// A field whose title does not appear in the header row is absent: every
/// read for it yields the empty string, which downstream turns into the
/// field's skip/default behavior.
#[derive(Debug)]
pub(crate) struct ColumnMap {
    indices: [Option<usize>; Field::COUNT],
}

impl ColumnMap {
    /// Build the map from the header row (row index 1 of the sheet).
    ///
    /// Title matching is exact and case-sensitive. When the same title
    /// appears in several columns, the last occurrence wins.
    pub fn from_header(header: &[String]) -> Self {
        let mut by_title: HashMap<&str, usize> = HashMap::new();
        for (idx, title) in header.iter().enumerate() {
            by_title.insert(title.as_str(), idx);
        }

        let mut indices = [None; Field::COUNT];
        for field in Field::ALL {
            indices[field as usize] = by_title.get(field.title()).copied();
        }
        Self { indices }
    }

    /// Column index bound to `field`, if any.
    pub fn column(&self, field: Field) -> Option<usize> {
        self.indices[field as usize]
    }

    /// Read the cell of `field` from a data row.
    ///
    /// Absent fields and cells beyond the row's length read as `""`.
    pub fn value<'a>(&self, row: &'a [String], field: Field) -> &'a str {
        self.column(field)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(titles: &[&str]) -> Vec<String> {
        titles.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_binds_known_titles() {
        let header = header(&[
            "Уникальный идентификатор объявления",
            "Название объявления",
            "Цена",
        ]);
        let map = ColumnMap::from_header(&header);

        assert_eq!(map.column(Field::Id), Some(0));
        assert_eq!(map.column(Field::Title), Some(1));
        assert_eq!(map.column(Field::Price), Some(2));
        assert_eq!(map.column(Field::Photos), None);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let header = header(&["ЦЕНА", "цена"]);
        let map = ColumnMap::from_header(&header);
        assert_eq!(map.column(Field::Price), None);
    }

    #[test]
    fn test_duplicate_title_last_occurrence_wins() {
        let header = header(&["Цена", "Адрес", "Цена"]);
        let map = ColumnMap::from_header(&header);
        assert_eq!(map.column(Field::Price), Some(2));
        assert_eq!(map.column(Field::Address), Some(1));
    }

    #[test]
    fn test_value_reads_through_binding() {
        let header = header(&["Уникальный идентификатор объявления", "Цена"]);
        let map = ColumnMap::from_header(&header);
        let row = vec!["ad-1".to_string(), "500000".to_string()];

        assert_eq!(map.value(&row, Field::Id), "ad-1");
        assert_eq!(map.value(&row, Field::Price), "500000");
        // Absent field reads as empty
        assert_eq!(map.value(&row, Field::Address), "");
    }

    #[test]
    fn test_value_beyond_row_length_is_empty() {
        let header = header(&["Уникальный идентификатор объявления", "Цена"]);
        let map = ColumnMap::from_header(&header);
        let short_row = vec!["ad-1".to_string()];

        assert_eq!(map.value(&short_row, Field::Id), "ad-1");
        assert_eq!(map.value(&short_row, Field::Price), "");
    }

    #[test]
    fn test_empty_header_binds_nothing() {
        let map = ColumnMap::from_header(&[]);
        for field in Field::ALL {
            assert_eq!(map.column(field), None);
        }
    }
}
