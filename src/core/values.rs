//! Value and error mappings owned by a form.

use super::field::Field;
use super::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from field to its current value.
///
/// Hosts build one of these for defaults and for bulk updates. A
/// [`FormEngine`](crate::engine::FormEngine) only hands out shared
/// references to its own copy, so the engine stays the single writer.
///
/// # Example
///
/// ```rust
/// use formstate::core::{FieldValue, FieldValues};
///
/// let defaults = FieldValues::new()
///     .with("nome".to_string(), "")
///     .with("valor".to_string(), 0);
///
/// assert_eq!(defaults.len(), 2);
/// assert_eq!(defaults.get(&"valor".to_string()), Some(&FieldValue::Number(0.0)));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct FieldValues<F: Field> {
    values: HashMap<F, FieldValue>,
}

impl<F: Field> Default for FieldValues<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field> FieldValues<F> {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Add a field, consuming and returning the mapping.
    pub fn with(mut self, field: F, value: impl Into<FieldValue>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    /// Set a field, returning the previous value.
    pub fn insert(&mut self, field: F, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.values.insert(field, value.into())
    }

    pub fn get(&self, field: &F) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn contains(&self, field: &F) -> bool {
        self.values.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &F> {
        self.values.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&F, &FieldValue)> {
        self.values.iter()
    }

    /// Encode as a JSON object keyed by wire name.
    ///
    /// Fields holding [`FieldValue::Undefined`] are left out.
    pub fn to_json(&self) -> serde_json::Value {
        let object = self
            .values
            .iter()
            .filter(|(_, value)| !matches!(value, FieldValue::Undefined))
            .map(|(field, value)| (field.name().to_string(), value.to_json()))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(object)
    }

    /// Take the given fields out of a fetched JSON record.
    ///
    /// Every listed field is present in the result; fields the record lacks
    /// become [`FieldValue::Undefined`]. Record keys not listed are ignored.
    /// A record that is not a JSON object yields all fields `Undefined`.
    pub fn pick<'a, I>(record: &serde_json::Value, fields: I) -> Self
    where
        F: 'a,
        I: IntoIterator<Item = &'a F>,
    {
        fields
            .into_iter()
            .map(|field| {
                let value = record
                    .get(field.name())
                    .cloned()
                    .map(FieldValue::from)
                    .unwrap_or(FieldValue::Undefined);
                (field.clone(), value)
            })
            .collect()
    }
}

impl<F: Field> FromIterator<(F, FieldValue)> for FieldValues<F> {
    fn from_iter<T: IntoIterator<Item = (F, FieldValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Mapping from field to the message produced by its failing rule.
///
/// A field with no entry has no error. Produced only by validation runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct FieldErrors<F: Field> {
    errors: HashMap<F, String>,
}

impl<F: Field> Default for FieldErrors<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field> FieldErrors<F> {
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    pub fn get(&self, field: &F) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &F) -> bool {
        self.errors.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &F> {
        self.errors.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&F, &str)> {
        self.errors.iter().map(|(f, m)| (f, m.as_str()))
    }
}

impl<F: Field> FromIterator<(F, String)> for FieldErrors<F> {
    fn from_iter<T: IntoIterator<Item = (F, String)>>(iter: T) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn with_builds_mapping() {
        let values = FieldValues::new().with(key("nome"), "").with(key("valor"), 0);

        assert_eq!(values.len(), 2);
        assert_eq!(values.get(&key("nome")), Some(&FieldValue::from("")));
        assert!(values.get(&key("cozinha")).is_none());
    }

    #[test]
    fn to_json_uses_wire_names_and_skips_undefined() {
        let values = FieldValues::new()
            .with(key("nome"), "Feijoada")
            .with(key("valor"), 10)
            .with(key("imagem"), FieldValue::Undefined);

        assert_eq!(values.to_json(), json!({ "nome": "Feijoada", "valor": 10 }));
    }

    #[test]
    fn pick_keeps_listed_fields_only() {
        let record = json!({ "id": 3, "nome": "Moqueca", "valor": 42.5 });
        let fields = [key("nome"), key("valor"), key("cozinha")];

        let picked = FieldValues::pick(&record, &fields);

        assert_eq!(picked.len(), 3);
        assert_eq!(picked.get(&key("nome")), Some(&FieldValue::from("Moqueca")));
        assert_eq!(picked.get(&key("valor")), Some(&FieldValue::Number(42.5)));
        assert_eq!(picked.get(&key("cozinha")), Some(&FieldValue::Undefined));
        assert!(!picked.contains(&key("id")));
    }

    #[test]
    fn pick_from_non_object_is_all_undefined() {
        let fields = [key("nome")];
        let picked = FieldValues::pick(&json!([1, 2]), &fields);

        assert_eq!(picked.get(&key("nome")), Some(&FieldValue::Undefined));
    }

    #[test]
    fn errors_collect_from_pairs() {
        let errors: FieldErrors<String> = [(key("nome"), "required".to_string())]
            .into_iter()
            .collect();

        assert_eq!(errors.get(&key("nome")), Some("required"));
        assert!(!errors.contains(&key("valor")));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn values_serialize_correctly() {
        let values = FieldValues::new().with(key("nome"), "X").with(key("valor"), 10);

        let json = serde_json::to_string(&values).unwrap();
        let deserialized: FieldValues<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(values, deserialized);
    }
}
