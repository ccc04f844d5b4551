//! Stock query filter.
//!
//! The inventory view narrows its listing with a small `;`-delimited query
//! string (`warehouses=2;items=all;categories=all`). Parsing is pure and
//! never touches storage; values reach the query layer only as validated
//! integers, so no user-controlled text is ever spliced into SQL.

use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// Equality constraints narrowing a stock query.
///
/// `None` means "all" (wildcard). Active fields are ANDed together.
///
/// # Examples
///
/// ```rust
/// use engine::StockFilter;
///
/// let filter = StockFilter::parse("warehouses=2;items=all;categories=all").unwrap();
/// assert_eq!(filter.warehouse_id, Some(2));
/// assert_eq!(filter.item_type_id, None);
/// assert_eq!(filter, StockFilter::parse(&filter.to_query_string()).unwrap());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockFilter {
    pub warehouse_id: Option<i64>,
    pub item_type_id: Option<i64>,
    pub category_id: Option<i64>,
}

impl StockFilter {
    /// Parse a filter query string.
    ///
    /// Parts are `key=value` pairs separated by `;`. Empty parts are skipped,
    /// unknown keys are ignored, the value `all` (or an empty value) selects
    /// the wildcard. A non-empty part without `=` or a non-numeric selection
    /// fails with [`EngineError::MalformedFilter`].
    pub fn parse(filter: &str) -> ResultEngine<Self> {
        let mut parsed = Self::default();
        for part in filter.split(';') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (key, value) = part.split_once('=').ok_or_else(|| {
                EngineError::MalformedFilter(format!("missing '=' in \"{part}\""))
            })?;
            match key.trim() {
                "warehouses" => parsed.warehouse_id = parse_selection(value)?,
                "items" => parsed.item_type_id = parse_selection(value)?,
                "categories" => parsed.category_id = parse_selection(value)?,
                _ => {} // unknown keys are ignored
            }
        }
        Ok(parsed)
    }

    /// Render the filter back into its query-string form, `all` standing in
    /// for wildcards.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        format!(
            "warehouses={};items={};categories={}",
            render(self.warehouse_id),
            render(self.item_type_id),
            render(self.category_id)
        )
    }
}

fn parse_selection(value: &str) -> ResultEngine<Option<i64>> {
    let value = value.trim();
    if value.is_empty() || value == "all" {
        return Ok(None);
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::MalformedFilter(format!(
            "expected an id or \"all\", got \"{value}\""
        )));
    }
    value.parse().map(Some).map_err(|_| {
        EngineError::MalformedFilter(format!("expected an id or \"all\", got \"{value}\""))
    })
}

fn render(selection: Option<i64>) -> String {
    match selection {
        Some(id) => id.to_string(),
        None => "all".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_all_wildcards() {
        assert_eq!(StockFilter::parse("").unwrap(), StockFilter::default());
    }

    #[test]
    fn parses_mixed_selections() {
        let filter = StockFilter::parse("warehouses=2;items=all;categories=7").unwrap();
        assert_eq!(filter.warehouse_id, Some(2));
        assert_eq!(filter.item_type_id, None);
        assert_eq!(filter.category_id, Some(7));
    }

    #[test]
    fn trailing_separator_and_empty_values_are_fine() {
        let filter = StockFilter::parse("warehouses=3;items=;").unwrap();
        assert_eq!(filter.warehouse_id, Some(3));
        assert_eq!(filter.item_type_id, None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let filter = StockFilter::parse("warehouses=2;page=9").unwrap();
        assert_eq!(filter.warehouse_id, Some(2));
        assert_eq!(filter, StockFilter::parse("warehouses=2").unwrap());
    }

    #[test]
    fn part_without_equals_is_malformed() {
        assert!(matches!(
            StockFilter::parse("warehouses"),
            Err(EngineError::MalformedFilter(_))
        ));
    }

    #[test]
    fn non_numeric_selection_is_malformed() {
        assert!(matches!(
            StockFilter::parse("warehouses=2 OR 1=1"),
            Err(EngineError::MalformedFilter(_))
        ));
        assert!(matches!(
            StockFilter::parse("items=-4"),
            Err(EngineError::MalformedFilter(_))
        ));
    }

    #[test]
    fn query_string_round_trips() {
        for raw in [
            "warehouses=all;items=all;categories=all",
            "warehouses=2;items=all;categories=all",
            "warehouses=1;items=5;categories=3",
        ] {
            let filter = StockFilter::parse(raw).unwrap();
            assert_eq!(filter.to_query_string(), raw);
        }
    }
}
