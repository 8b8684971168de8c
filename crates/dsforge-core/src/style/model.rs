//! Style model types.
//!
//! A style is a flat record of a closed set of visual properties. The full
//! record (`StyleRecord`) lives on variants; partial records
//! (`StyleOverrides`, see `overrides.rs`) live on states.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DsError, DsResult};

/// A named visual property of the style schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleProperty {
    BackgroundColor,
    TextColor,
    BorderColor,
    BorderWidth,
    BorderStyle,
    BorderRadius,
    Padding,
    Margin,
    Width,
    Height,
    FontSize,
    FontWeight,
    TextAlign,
    BoxShadow,
    Opacity,
    Transform,
    Transition,
    Cursor,
    Glassmorphism,
    Neumorphism,
    Gradient,
    Glow,
}

/// The value shape a property accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Text,
    Number,
    Flag,
    Spacing,
    Align,
}

impl PropertyKind {
    /// Human readable description, used in error messages.
    pub fn expected(&self) -> &'static str {
        match self {
            Self::Text => "a string",
            Self::Number => "a number",
            Self::Flag => "a boolean",
            Self::Spacing => "a spacing {x, y} or a 'y x' shorthand",
            Self::Align => "one of left, center, right, justify",
        }
    }
}

impl StyleProperty {
    /// Every property of the schema, in display order.
    pub const ALL: [StyleProperty; 22] = [
        Self::BackgroundColor,
        Self::TextColor,
        Self::BorderColor,
        Self::BorderWidth,
        Self::BorderStyle,
        Self::BorderRadius,
        Self::Padding,
        Self::Margin,
        Self::Width,
        Self::Height,
        Self::FontSize,
        Self::FontWeight,
        Self::TextAlign,
        Self::BoxShadow,
        Self::Opacity,
        Self::Transform,
        Self::Transition,
        Self::Cursor,
        Self::Glassmorphism,
        Self::Neumorphism,
        Self::Gradient,
        Self::Glow,
    ];

    /// Wire name (camelCase).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BackgroundColor => "backgroundColor",
            Self::TextColor => "textColor",
            Self::BorderColor => "borderColor",
            Self::BorderWidth => "borderWidth",
            Self::BorderStyle => "borderStyle",
            Self::BorderRadius => "borderRadius",
            Self::Padding => "padding",
            Self::Margin => "margin",
            Self::Width => "width",
            Self::Height => "height",
            Self::FontSize => "fontSize",
            Self::FontWeight => "fontWeight",
            Self::TextAlign => "textAlign",
            Self::BoxShadow => "boxShadow",
            Self::Opacity => "opacity",
            Self::Transform => "transform",
            Self::Transition => "transition",
            Self::Cursor => "cursor",
            Self::Glassmorphism => "glassmorphism",
            Self::Neumorphism => "neumorphism",
            Self::Gradient => "gradient",
            Self::Glow => "glow",
        }
    }

    /// Parse a property name.
    ///
    /// Accepts the camelCase wire name as well as CSS-like kebab-case and
    /// snake_case spellings (`background-color`, `background_color`).
    pub fn from_str(s: &str) -> Option<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().to_lowercase() == wanted)
    }

    /// Parse a property name, failing with `UnknownProperty`.
    pub fn parse(s: &str) -> DsResult<Self> {
        Self::from_str(s).ok_or_else(|| DsError::UnknownProperty(s.to_string()))
    }

    /// The value shape this property accepts.
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Padding | Self::Margin => PropertyKind::Spacing,
            Self::FontWeight | Self::Opacity => PropertyKind::Number,
            Self::TextAlign => PropertyKind::Align,
            Self::Glassmorphism | Self::Neumorphism | Self::Gradient | Self::Glow => {
                PropertyKind::Flag
            }
            _ => PropertyKind::Text,
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "justify" => Some(Self::Justify),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

/// Two-axis spacing (padding or margin).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    pub x: String,
    pub y: String,
}

impl Spacing {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn uniform(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            x: value.clone(),
            y: value,
        }
    }

    /// Parse the CSS shorthand: `"8px"` or `"8px 16px"` (vertical first).
    pub fn from_shorthand(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [all] => Some(Self::uniform(*all)),
            [y, x] => Some(Self::new(*x, *y)),
            _ => None,
        }
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.x == self.y {
            write!(f, "{}", self.x)
        } else {
            write!(f, "{} {}", self.y, self.x)
        }
    }
}

/// A single property value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Spacing(Spacing),
    Align(TextAlign),
}

impl StyleValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Text(_) => PropertyKind::Text,
            Self::Number(_) => PropertyKind::Number,
            Self::Flag(_) => PropertyKind::Flag,
            Self::Spacing(_) => PropertyKind::Spacing,
            Self::Align(_) => PropertyKind::Align,
        }
    }

    /// Check that this value fits the given property. Numbers must be
    /// finite.
    pub fn check(&self, property: StyleProperty) -> DsResult<()> {
        match self {
            Self::Number(n) if !n.is_finite() => Err(invalid(property)),
            _ if self.kind() == property.kind() => Ok(()),
            _ => Err(invalid(property)),
        }
    }

    /// Convert a JSON value into a typed value for `property`.
    pub fn from_json(property: StyleProperty, value: &serde_json::Value) -> DsResult<Self> {
        use serde_json::Value;

        let parsed = match (property.kind(), value) {
            (PropertyKind::Text, Value::String(s)) => Some(Self::Text(s.clone())),
            (PropertyKind::Number, Value::Number(n)) => finite(n.as_f64()),
            (PropertyKind::Flag, Value::Bool(b)) => Some(Self::Flag(*b)),
            (PropertyKind::Spacing, Value::String(s)) => {
                Spacing::from_shorthand(s).map(Self::Spacing)
            }
            (PropertyKind::Spacing, Value::Object(_)) => {
                serde_json::from_value::<Spacing>(value.clone())
                    .ok()
                    .map(Self::Spacing)
            }
            (PropertyKind::Align, Value::String(s)) => TextAlign::from_str(s).map(Self::Align),
            _ => None,
        };
        parsed.ok_or_else(|| invalid(property))
    }

    /// Parse a plain command-line literal into a typed value for `property`.
    pub fn parse_literal(property: StyleProperty, raw: &str) -> DsResult<Self> {
        let parsed = match property.kind() {
            PropertyKind::Text => Some(Self::Text(raw.to_string())),
            PropertyKind::Number => finite(raw.trim().parse::<f64>().ok()),
            PropertyKind::Flag => match raw.trim().to_lowercase().as_str() {
                "true" | "on" | "yes" => Some(Self::Flag(true)),
                "false" | "off" | "no" => Some(Self::Flag(false)),
                _ => None,
            },
            PropertyKind::Spacing => Spacing::from_shorthand(raw).map(Self::Spacing),
            PropertyKind::Align => TextAlign::from_str(raw).map(Self::Align),
        };
        parsed.ok_or_else(|| invalid(property))
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
            Self::Flag(b) => write!(f, "{}", b),
            Self::Spacing(s) => write!(f, "{}", s),
            Self::Align(a) => f.write_str(a.as_str()),
        }
    }
}

fn finite(n: Option<f64>) -> Option<StyleValue> {
    n.filter(|n| n.is_finite()).map(StyleValue::Number)
}

fn invalid(property: StyleProperty) -> DsError {
    DsError::InvalidValue {
        property: property.as_str().to_string(),
        expected: property.kind().expected(),
    }
}

/// A full style record: every property carries a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    pub background_color: String,
    pub text_color: String,
    pub border_color: String,
    pub border_width: String,
    pub border_style: String,
    pub border_radius: String,
    pub padding: Spacing,
    pub margin: Spacing,
    pub width: String,
    pub height: String,
    pub font_size: String,
    pub font_weight: f64,
    pub text_align: TextAlign,
    pub box_shadow: String,
    pub opacity: f64,
    pub transform: String,
    pub transition: String,
    pub cursor: String,
    #[serde(default)]
    pub glassmorphism: bool,
    #[serde(default)]
    pub neumorphism: bool,
    #[serde(default)]
    pub gradient: bool,
    #[serde(default)]
    pub glow: bool,
}

impl Default for StyleRecord {
    /// The global default style, also the fallback when nothing is selected.
    fn default() -> Self {
        Self {
            background_color: "#3b82f6".to_string(),
            text_color: "#ffffff".to_string(),
            border_color: "transparent".to_string(),
            border_width: "0px".to_string(),
            border_style: "solid".to_string(),
            border_radius: "8px".to_string(),
            padding: Spacing::new("16px", "8px"),
            margin: Spacing::uniform("0px"),
            width: "auto".to_string(),
            height: "auto".to_string(),
            font_size: "14px".to_string(),
            font_weight: 500.0,
            text_align: TextAlign::Center,
            box_shadow: "none".to_string(),
            opacity: 1.0,
            transform: "none".to_string(),
            transition: "all 0.2s ease".to_string(),
            cursor: "pointer".to_string(),
            glassmorphism: false,
            neumorphism: false,
            gradient: false,
            glow: false,
        }
    }
}

impl StyleRecord {
    /// Read a property as a typed value.
    pub fn get(&self, property: StyleProperty) -> StyleValue {
        use StyleProperty as P;

        match property {
            P::BackgroundColor => StyleValue::text(&self.background_color),
            P::TextColor => StyleValue::text(&self.text_color),
            P::BorderColor => StyleValue::text(&self.border_color),
            P::BorderWidth => StyleValue::text(&self.border_width),
            P::BorderStyle => StyleValue::text(&self.border_style),
            P::BorderRadius => StyleValue::text(&self.border_radius),
            P::Padding => StyleValue::Spacing(self.padding.clone()),
            P::Margin => StyleValue::Spacing(self.margin.clone()),
            P::Width => StyleValue::text(&self.width),
            P::Height => StyleValue::text(&self.height),
            P::FontSize => StyleValue::text(&self.font_size),
            P::FontWeight => StyleValue::Number(self.font_weight),
            P::TextAlign => StyleValue::Align(self.text_align),
            P::BoxShadow => StyleValue::text(&self.box_shadow),
            P::Opacity => StyleValue::Number(self.opacity),
            P::Transform => StyleValue::text(&self.transform),
            P::Transition => StyleValue::text(&self.transition),
            P::Cursor => StyleValue::text(&self.cursor),
            P::Glassmorphism => StyleValue::Flag(self.glassmorphism),
            P::Neumorphism => StyleValue::Flag(self.neumorphism),
            P::Gradient => StyleValue::Flag(self.gradient),
            P::Glow => StyleValue::Flag(self.glow),
        }
    }

    /// Write a property. Fails with `InvalidValue` if the value kind does not
    /// match the property; the record is untouched in that case.
    pub fn set(&mut self, property: StyleProperty, value: StyleValue) -> DsResult<()> {
        use StyleProperty as P;

        value.check(property)?;

        match (property, value) {
            (P::BackgroundColor, StyleValue::Text(v)) => self.background_color = v,
            (P::TextColor, StyleValue::Text(v)) => self.text_color = v,
            (P::BorderColor, StyleValue::Text(v)) => self.border_color = v,
            (P::BorderWidth, StyleValue::Text(v)) => self.border_width = v,
            (P::BorderStyle, StyleValue::Text(v)) => self.border_style = v,
            (P::BorderRadius, StyleValue::Text(v)) => self.border_radius = v,
            (P::Padding, StyleValue::Spacing(v)) => self.padding = v,
            (P::Margin, StyleValue::Spacing(v)) => self.margin = v,
            (P::Width, StyleValue::Text(v)) => self.width = v,
            (P::Height, StyleValue::Text(v)) => self.height = v,
            (P::FontSize, StyleValue::Text(v)) => self.font_size = v,
            (P::FontWeight, StyleValue::Number(v)) => self.font_weight = v,
            (P::TextAlign, StyleValue::Align(v)) => self.text_align = v,
            (P::BoxShadow, StyleValue::Text(v)) => self.box_shadow = v,
            (P::Opacity, StyleValue::Number(v)) => self.opacity = v,
            (P::Transform, StyleValue::Text(v)) => self.transform = v,
            (P::Transition, StyleValue::Text(v)) => self.transition = v,
            (P::Cursor, StyleValue::Text(v)) => self.cursor = v,
            (P::Glassmorphism, StyleValue::Flag(v)) => self.glassmorphism = v,
            (P::Neumorphism, StyleValue::Flag(v)) => self.neumorphism = v,
            (P::Gradient, StyleValue::Flag(v)) => self.gradient = v,
            (P::Glow, StyleValue::Flag(v)) => self.glow = v,
            (property, _) => return Err(invalid(property)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_names_round_trip() {
        for property in StyleProperty::ALL {
            assert_eq!(StyleProperty::from_str(property.as_str()), Some(property));
        }
    }

    #[test]
    fn test_property_name_spellings() {
        assert_eq!(
            StyleProperty::from_str("background-color"),
            Some(StyleProperty::BackgroundColor)
        );
        assert_eq!(
            StyleProperty::from_str("border_radius"),
            Some(StyleProperty::BorderRadius)
        );
        assert_eq!(StyleProperty::from_str("zIndex"), None);
    }

    #[test]
    fn test_set_rejects_wrong_kind() {
        let mut record = StyleRecord::default();
        let err = record
            .set(StyleProperty::Opacity, StyleValue::text("half"))
            .unwrap_err();
        assert!(matches!(err, DsError::InvalidValue { .. }));
        assert_eq!(record, StyleRecord::default());
    }

    #[test]
    fn test_get_after_set() {
        let mut record = StyleRecord::default();
        record
            .set(StyleProperty::Padding, StyleValue::Spacing(Spacing::new("24px", "12px")))
            .unwrap();
        assert_eq!(
            record.get(StyleProperty::Padding),
            StyleValue::Spacing(Spacing::new("24px", "12px"))
        );
    }

    #[test]
    fn test_spacing_shorthand() {
        assert_eq!(Spacing::from_shorthand("8px"), Some(Spacing::uniform("8px")));
        assert_eq!(
            Spacing::from_shorthand("8px 16px"),
            Some(Spacing::new("16px", "8px"))
        );
        assert_eq!(Spacing::from_shorthand(""), None);
        assert_eq!(Spacing::new("16px", "8px").to_string(), "8px 16px");
    }

    #[test]
    fn test_parse_literal() {
        assert_eq!(
            StyleValue::parse_literal(StyleProperty::Glow, "on").unwrap(),
            StyleValue::Flag(true)
        );
        assert_eq!(
            StyleValue::parse_literal(StyleProperty::FontWeight, "700").unwrap(),
            StyleValue::Number(700.0)
        );
        assert!(StyleValue::parse_literal(StyleProperty::TextAlign, "middle").is_err());
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        for raw in ["NaN", "nan", "inf", "-inf", "infinity"] {
            let err = StyleValue::parse_literal(StyleProperty::Opacity, raw).unwrap_err();
            assert!(matches!(err, DsError::InvalidValue { .. }), "{} was accepted", raw);
        }

        let mut record = StyleRecord::default();
        assert!(record.set(StyleProperty::FontWeight, StyleValue::Number(f64::NAN)).is_err());
        assert!(record.set(StyleProperty::Opacity, StyleValue::Number(f64::INFINITY)).is_err());
        assert_eq!(record, StyleRecord::default());

        assert!(StyleValue::Number(f64::NEG_INFINITY).check(StyleProperty::Opacity).is_err());
        assert!(StyleValue::Number(0.5).check(StyleProperty::Opacity).is_ok());
    }

    #[test]
    fn test_from_json_rejects_null_and_non_finite() {
        assert_eq!(
            StyleValue::from_json(StyleProperty::Opacity, &serde_json::json!(0.25)).unwrap(),
            StyleValue::Number(0.25)
        );
        assert!(StyleValue::from_json(StyleProperty::Opacity, &serde_json::json!(null)).is_err());
        assert!(StyleValue::from_json(StyleProperty::Opacity, &serde_json::json!("NaN")).is_err());
        // serde_json cannot hold NaN; a non-finite float becomes null.
        let nan = serde_json::to_value(f64::NAN).unwrap();
        assert!(StyleValue::from_json(StyleProperty::FontWeight, &nan).is_err());
    }

    #[test]
    fn test_from_json_spacing_object() {
        let value = serde_json::json!({"x": "4px", "y": "2px"});
        assert_eq!(
            StyleValue::from_json(StyleProperty::Margin, &value).unwrap(),
            StyleValue::Spacing(Spacing::new("4px", "2px"))
        );
    }
}
