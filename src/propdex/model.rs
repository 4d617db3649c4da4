use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::borrow::Cow;

/// Field names of the bundled property dataset.
pub mod fields {
    pub const NAME: &str = "Property Name";
    pub const COST: &str = "Property Cost";
    pub const FUSION: &str = "Property Fusion";
    pub const DESCRIPTION: &str = "Property Description";
    pub const ITEMS: &str = "Property Items";
    pub const GRADE: &str = "Property Grade";

    pub const BOMB: &str = "Bomb";
    pub const HEAL: &str = "Heal";
    pub const BUFF: &str = "Buff";
    pub const WEAPON: &str = "Weapon";
    pub const ARMOR: &str = "Armor";
    pub const ACCESSORY: &str = "Accessory";

    /// Capability tags, in the order cards display their badges.
    pub const FLAGS: [&str; 6] = [BOMB, HEAL, BUFF, WEAPON, ARMOR, ACCESSORY];
}

/// A sub-item linked from a property (display name plus reference link).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedItem {
    pub name: String,
    pub link: String,
}

impl LinkedItem {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Bool(bool),
    Links(Vec<LinkedItem>),
    Null,
}

impl FieldValue {
    /// The string form every filter compares against.
    ///
    /// Null coerces to the empty string, the same default a missing field gets.
    pub fn coerce_to_string(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s.as_str()),
            FieldValue::Integer(n) => Cow::Owned(n.to_string()),
            FieldValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            FieldValue::Links(items) => Cow::Owned(
                items
                    .iter()
                    .map(|item| item.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            FieldValue::Null => Cow::Borrowed(""),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_links(&self) -> Option<&[LinkedItem]> {
        match self {
            FieldValue::Links(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Links(items) => items.is_empty(),
            FieldValue::Null => true,
            FieldValue::Integer(_) | FieldValue::Bool(_) => false,
        }
    }
}

/// One item entity from the dataset.
///
/// Fields keep the order they had in the source document, which is what the
/// field list (and therefore the table columns) is derived from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new(fields: Vec<(String, FieldValue)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Coerced string value of `field`; missing fields read as `""`.
    pub fn text(&self, field: &str) -> Cow<'_, str> {
        self.get(field)
            .map(FieldValue::coerce_to_string)
            .unwrap_or(Cow::Borrowed(""))
    }

    pub fn flag(&self, field: &str) -> bool {
        self.get(field)
            .and_then(FieldValue::as_bool)
            .unwrap_or(false)
    }

    pub fn name(&self) -> Cow<'_, str> {
        self.text(fields::NAME)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new(vec![
            (fields::NAME.into(), FieldValue::Text("Sword Fan".into())),
            (fields::COST.into(), FieldValue::Integer(12)),
            (fields::FUSION.into(), FieldValue::Null),
            (
                fields::ITEMS.into(),
                FieldValue::Links(vec![
                    LinkedItem::new("Iron Ore", "https://example.test/iron"),
                    LinkedItem::new("Fan Blade", ""),
                ]),
            ),
            (fields::WEAPON.into(), FieldValue::Bool(true)),
        ])
    }

    #[test]
    fn coerces_each_value_kind() {
        let record = sample();
        assert_eq!(record.text(fields::NAME), "Sword Fan");
        assert_eq!(record.text(fields::COST), "12");
        assert_eq!(record.text(fields::FUSION), "");
        assert_eq!(record.text(fields::ITEMS), "Iron Ore, Fan Blade");
        assert_eq!(record.text(fields::WEAPON), "true");
    }

    #[test]
    fn missing_field_reads_as_empty_string() {
        let record = sample();
        assert_eq!(record.text("Nope"), "");
        assert!(!record.flag("Nope"));
        assert!(record.get("Nope").is_none());
    }

    #[test]
    fn field_names_keep_source_order() {
        let names: Vec<_> = sample().field_names().map(str::to_string).collect();
        assert_eq!(
            names,
            vec![
                fields::NAME,
                fields::COST,
                fields::FUSION,
                fields::ITEMS,
                fields::WEAPON
            ]
        );
    }

    #[test]
    fn serializes_as_ordered_object() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.starts_with("{\"Property Name\":\"Sword Fan\",\"Property Cost\":12"));
        assert!(json.contains("\"Property Fusion\":null"));
        assert!(json.contains("{\"name\":\"Iron Ore\",\"link\":\"https://example.test/iron\"}"));
    }
}
