//! Partial style records.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::model::{StyleProperty, StyleValue};
use crate::error::{DsError, DsResult};

/// A partial style: only the properties a state overrides.
///
/// Every entry is checked against its property's kind on insertion, so an
/// override map can always be overlaid onto a `StyleRecord`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleOverrides(BTreeMap<StyleProperty, StyleValue>);

impl StyleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous one for the same property.
    pub fn insert(&mut self, property: StyleProperty, value: StyleValue) -> DsResult<()> {
        value.check(property)?;
        self.0.insert(property, value);
        Ok(())
    }

    /// Builder form of `insert`.
    pub fn with(mut self, property: StyleProperty, value: StyleValue) -> DsResult<Self> {
        self.insert(property, value)?;
        Ok(self)
    }

    pub fn get(&self, property: StyleProperty) -> Option<&StyleValue> {
        self.0.get(&property)
    }

    pub fn contains(&self, property: StyleProperty) -> bool {
        self.0.contains_key(&property)
    }

    pub fn remove(&mut self, property: StyleProperty) -> Option<StyleValue> {
        self.0.remove(&property)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &StyleValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    pub fn properties(&self) -> impl Iterator<Item = StyleProperty> + '_ {
        self.0.keys().copied()
    }

    /// Parse a JSON object such as `{"backgroundColor": "#112233"}`.
    ///
    /// Unknown property names fail with `UnknownProperty`; values of the
    /// wrong shape fail with `InvalidValue`.
    pub fn from_json(value: &serde_json::Value) -> DsResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| DsError::validation("style overrides must be a JSON object"))?;

        let mut overrides = Self::new();
        for (key, raw) in object {
            let property = StyleProperty::parse(key)?;
            overrides.insert(property, StyleValue::from_json(property, raw)?)?;
        }
        Ok(overrides)
    }
}

impl<'de> Deserialize<'de> for StyleOverrides {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Self::from_json(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::model::Spacing;

    #[test]
    fn test_insert_checks_kind() {
        let mut overrides = StyleOverrides::new();
        assert!(overrides
            .insert(StyleProperty::Glow, StyleValue::text("yes"))
            .is_err());
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        let value = serde_json::json!({"backgroundColor": "#000", "zIndex": "10"});
        let err = StyleOverrides::from_json(&value).unwrap_err();
        assert!(matches!(err, DsError::UnknownProperty(ref k) if k == "zIndex"));
    }

    #[test]
    fn test_serde_round_trip_keeps_camel_case() {
        let overrides = StyleOverrides::new()
            .with(StyleProperty::BackgroundColor, StyleValue::text("#112233"))
            .unwrap()
            .with(StyleProperty::Padding, StyleValue::Spacing(Spacing::new("4px", "2px")))
            .unwrap();

        let json = serde_json::to_value(&overrides).unwrap();
        assert_eq!(json["backgroundColor"], "#112233");
        assert_eq!(json["padding"]["x"], "4px");

        let back: StyleOverrides = serde_json::from_value(json).unwrap();
        assert_eq!(back, overrides);
    }
}
