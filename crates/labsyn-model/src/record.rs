use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::fields;
use crate::value::FieldValue;

/// One row of a lab listing.
///
/// Fields keep the order they were inserted in; that order becomes the
/// column order when records are exported. Inserting an existing key
/// replaces the value in place without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the value of `key` if it is a text cell.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    /// Sets `key` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Option<FieldValue> {
        let key = key.into();
        let value = value.into();
        if let Some((_, slot)) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(slot, value));
        }
        self.fields.push((key, value));
        None
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        let index = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(index).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The lab test name, if present as text.
    pub fn labs(&self) -> Option<&str> {
        self.text(fields::LABS)
    }

    pub fn lab_range(&self) -> Option<&FieldValue> {
        self.get(fields::LAB_RANGE)
    }

    /// The scan-assigned position, if this record has been scanned.
    pub fn id(&self) -> Option<usize> {
        let value = self.get(fields::ID)?.as_number()?;
        if value >= 0.0 && value.fract() == 0.0 {
            Some(value as usize)
        } else {
            None
        }
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl IntoIterator for Record {
    type Item = (String, FieldValue);
    type IntoIter = std::vec::IntoIter<(String, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
