//! Movement code protocol.
//!
//! A movement code is the compact `|`-delimited ASCII string produced by a
//! barcode scanner. It carries exactly seven positional fields:
//!
//! ```text
//! kind|item_type_id|from_warehouse_id|to_warehouse_id|quantity|specific_item_id|attributes
//! ```
//!
//! The trailing `attributes` field is optional and, when present, holds
//! `key:value` pairs separated by `;` with an optional trailing `;`.
//! Decoding is pure and all-or-nothing: either every field validates and a
//! complete [`MovementRecord`] is returned, or a typed error is.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// Number of positional fields in a movement code.
const FIELD_COUNT: usize = 7;

/// The kind of stock change a movement code requests.
///
/// Wire codes are `1`..`4`. All four are accepted by the decoder, but only
/// [`Inbound`] and [`Transfer`] have a defined ledger mutation; applying the
/// other two yields [`EngineError::UnsupportedKind`].
///
/// [`Inbound`]: MovementKind::Inbound
/// [`Transfer`]: MovementKind::Transfer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Inbound,
    Outbound,
    Transfer,
    Adjustment,
}

impl MovementKind {
    /// Returns the wire code of the kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Inbound => 1,
            Self::Outbound => 2,
            Self::Transfer => 3,
            Self::Adjustment => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
            Self::Transfer => "transfer",
            Self::Adjustment => "adjustment",
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i64> for MovementKind {
    type Error = EngineError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Inbound),
            2 => Ok(Self::Outbound),
            3 => Ok(Self::Transfer),
            4 => Ok(Self::Adjustment),
            other => Err(EngineError::InvalidKind(other.to_string())),
        }
    }
}

/// A fully decoded movement code.
///
/// All numeric fields are non-negative by construction: the wire format only
/// admits ASCII digits. `from_warehouse_id` is meaningful for outbound and
/// transfer movements, `specific_item_id` names the stock line a transfer
/// relocates (`0` for inbound, where a new line is created instead).
///
/// # Examples
///
/// ```rust
/// use engine::{MovementKind, MovementRecord};
///
/// let record = MovementRecord::decode("1|2|0|3|10|0|color:red;size:L;").unwrap();
/// assert_eq!(record.kind, MovementKind::Inbound);
/// assert_eq!(record.quantity, 10);
/// assert_eq!(record.attribute("color"), Some("red"));
/// assert_eq!(MovementRecord::decode(&record.encode()).unwrap(), record);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRecord {
    pub kind: MovementKind,
    pub item_type_id: i64,
    pub from_warehouse_id: i64,
    pub to_warehouse_id: i64,
    pub quantity: i64,
    pub specific_item_id: i64,
    /// Insertion-ordered `key -> value` pairs from the trailing segment.
    /// A duplicate key overwrites the earlier value in place.
    pub attributes: Vec<(String, String)>,
}

impl MovementRecord {
    /// Decode a raw movement code.
    ///
    /// The code must have at least six `|`-separated segments; the seventh
    /// (attributes) is padded with an empty string when absent. Segments past
    /// the seventh are ignored.
    pub fn decode(code: &str) -> ResultEngine<Self> {
        let mut segments: Vec<&str> = code.split('|').collect();
        if segments.len() < FIELD_COUNT - 1 {
            return Err(EngineError::MalformedCode(format!(
                "expected at least {} fields, got {}",
                FIELD_COUNT - 1,
                segments.len()
            )));
        }
        segments.resize(FIELD_COUNT, "");

        let kind = match numeric_field(segments[0], "movement_kind") {
            Ok(code) => MovementKind::try_from(code)?,
            Err(_) => return Err(EngineError::InvalidKind(segments[0].to_string())),
        };

        Ok(Self {
            kind,
            item_type_id: numeric_field(segments[1], "item_type_id")?,
            from_warehouse_id: numeric_field(segments[2], "from_warehouse_id")?,
            to_warehouse_id: numeric_field(segments[3], "to_warehouse_id")?,
            quantity: numeric_field(segments[4], "quantity")?,
            specific_item_id: numeric_field(segments[5], "specific_item_id")?,
            attributes: parse_attributes(segments[6])?,
        })
    }

    /// Render the record back into its wire form.
    ///
    /// The inverse of [`decode`]: numeric fields as decimal integers,
    /// attributes as `k:v;` pairs with a trailing `;`, empty attributes as an
    /// empty seventh segment. Round-trips exactly for every record `decode`
    /// produces (attribute keys and values must not contain the `|`, `;` or
    /// `:` delimiters).
    ///
    /// [`decode`]: MovementRecord::decode
    #[must_use]
    pub fn encode(&self) -> String {
        let mut rendered = String::new();
        for (key, value) in &self.attributes {
            rendered.push_str(key);
            rendered.push(':');
            rendered.push_str(value);
            rendered.push(';');
        }
        format!(
            "{}|{}|{}|{}|{}|{}|{}",
            self.kind.code(),
            self.item_type_id,
            self.from_warehouse_id,
            self.to_warehouse_id,
            self.quantity,
            self.specific_item_id,
            rendered
        )
    }

    /// Look up an attribute value by key.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn numeric_field(raw: &str, name: &'static str) -> ResultEngine<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::InvalidField(name));
    }
    raw.parse().map_err(|_| EngineError::InvalidField(name))
}

fn parse_attributes(raw: &str) -> ResultEngine<Vec<(String, String)>> {
    let mut attributes: Vec<(String, String)> = Vec::new();
    if raw.is_empty() {
        return Ok(attributes);
    }

    let trimmed = raw.strip_suffix(';').unwrap_or(raw);
    for part in trimmed.split(';') {
        let pieces: Vec<&str> = part.split(':').collect();
        if pieces.len() != 2 {
            return Err(EngineError::InvalidAttribute(part.to_string()));
        }
        let key = pieces[0].trim();
        let value = pieces[1].trim();
        match attributes.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => attributes.push((key.to_string(), value.to_string())),
        }
    }

    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_inbound_with_attributes() {
        let record = MovementRecord::decode("1|2|0|3|10|0|color:red;size:L;").unwrap();
        assert_eq!(record.kind, MovementKind::Inbound);
        assert_eq!(record.item_type_id, 2);
        assert_eq!(record.from_warehouse_id, 0);
        assert_eq!(record.to_warehouse_id, 3);
        assert_eq!(record.quantity, 10);
        assert_eq!(record.specific_item_id, 0);
        assert_eq!(
            record.attributes,
            vec![
                ("color".to_string(), "red".to_string()),
                ("size".to_string(), "L".to_string()),
            ]
        );
    }

    #[test]
    fn decode_without_attribute_segment() {
        let record = MovementRecord::decode("3|2|1|4|0|77").unwrap();
        assert_eq!(record.kind, MovementKind::Transfer);
        assert_eq!(record.specific_item_id, 77);
        assert!(record.attributes.is_empty());
    }

    #[test]
    fn decode_rejects_short_codes() {
        for code in ["", "1", "1|2|0|3|10"] {
            assert!(matches!(
                MovementRecord::decode(code),
                Err(EngineError::MalformedCode(_))
            ));
        }
    }

    #[test]
    fn decode_rejects_unknown_kind() {
        assert_eq!(
            MovementRecord::decode("5|1|1|1|1|1|"),
            Err(EngineError::InvalidKind("5".to_string()))
        );
        assert_eq!(
            MovementRecord::decode("in|1|1|1|1|1|"),
            Err(EngineError::InvalidKind("in".to_string()))
        );
    }

    #[test]
    fn decode_names_the_non_numeric_field() {
        assert_eq!(
            MovementRecord::decode("1|x|0|3|10|0|"),
            Err(EngineError::InvalidField("item_type_id"))
        );
        assert_eq!(
            MovementRecord::decode("1|2|0|3|-10|0|"),
            Err(EngineError::InvalidField("quantity"))
        );
        assert_eq!(
            MovementRecord::decode("1|2|0|3|10||"),
            Err(EngineError::InvalidField("specific_item_id"))
        );
    }

    #[test]
    fn decode_rejects_malformed_attributes() {
        assert_eq!(
            MovementRecord::decode("1|2|0|3|10|0|colorred;"),
            Err(EngineError::InvalidAttribute("colorred".to_string()))
        );
        assert_eq!(
            MovementRecord::decode("1|2|0|3|10|0|a:b:c;"),
            Err(EngineError::InvalidAttribute("a:b:c".to_string()))
        );
    }

    #[test]
    fn duplicate_attribute_keys_last_wins() {
        let record = MovementRecord::decode("1|2|0|3|10|0|color:red;color:blue;").unwrap();
        assert_eq!(record.attribute("color"), Some("blue"));
        assert_eq!(record.attributes.len(), 1);
    }

    #[test]
    fn attribute_keys_and_values_are_trimmed() {
        let record = MovementRecord::decode("1|2|0|3|10|0| color : red ;").unwrap();
        assert_eq!(record.attribute("color"), Some("red"));
    }

    #[test]
    fn extra_segments_are_ignored() {
        let record = MovementRecord::decode("1|2|0|3|10|0||junk").unwrap();
        assert!(record.attributes.is_empty());
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let records = [
            MovementRecord {
                kind: MovementKind::Inbound,
                item_type_id: 2,
                from_warehouse_id: 0,
                to_warehouse_id: 3,
                quantity: 10,
                specific_item_id: 0,
                attributes: vec![
                    ("color".to_string(), "red".to_string()),
                    ("size".to_string(), "L".to_string()),
                ],
            },
            MovementRecord {
                kind: MovementKind::Transfer,
                item_type_id: 2,
                from_warehouse_id: 1,
                to_warehouse_id: 4,
                quantity: 0,
                specific_item_id: 77,
                attributes: Vec::new(),
            },
            MovementRecord {
                kind: MovementKind::Adjustment,
                item_type_id: 9,
                from_warehouse_id: 5,
                to_warehouse_id: 5,
                quantity: 1,
                specific_item_id: 12,
                attributes: vec![("batch".to_string(), "A7".to_string())],
            },
        ];

        for record in records {
            assert_eq!(MovementRecord::decode(&record.encode()).unwrap(), record);
        }
    }

    #[test]
    fn encode_renders_the_expected_wire_form() {
        let record = MovementRecord::decode("1|2|0|3|10|0|color:red;").unwrap();
        assert_eq!(record.encode(), "1|2|0|3|10|0|color:red;");

        let record = MovementRecord::decode("3|2|1|4|0|77").unwrap();
        assert_eq!(record.encode(), "3|2|1|4|0|77|");
    }
}
