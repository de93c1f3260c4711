//! # Field Values
//!
//! A [`FieldValue`] is the tagged value stored under one field identifier.
//! Every field holds one of four kinds of value, or nothing at all.
//!
//! ## Emptiness
//!
//! Validation asks one question of a value before any constraint runs:
//! is it empty? The answer depends on the kind.
//!
//! | Value                         | Empty? |
//! |-------------------------------|--------|
//! | `Absent`                      | yes    |
//! | `Text` that trims to `""`     | yes    |
//! | `List` with no items          | yes    |
//! | `Number` that is not finite   | yes    |
//! | `Boolean(false)`              | **no** |
//!
//! `false` is a valid answer to a yes/no question, so a boolean field is
//! only missing when it is `Absent`.
//!
//! ## Serialization
//!
//! Values serialize untagged: a JSON string, number, boolean, array of
//! strings, or `null` for `Absent`.

use serde::{Deserialize, Serialize};

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text, or the selected option of a single-choice field.
    Text,
    /// A number entered by the user.
    Number,
    /// A yes/no answer.
    Boolean,
    /// The selected options of a multi-choice field.
    List,
}

impl FieldKind {
    /// The value a field of this kind is reset to when it is cleared.
    ///
    /// Text resets to `""` and lists to `[]`. Numbers and booleans have no
    /// neutral value and reset to [`FieldValue::Absent`].
    pub fn empty_value(self) -> FieldValue {
        match self {
            Self::Text => FieldValue::Text(String::new()),
            Self::List => FieldValue::List(Vec::new()),
            Self::Number | Self::Boolean => FieldValue::Absent,
        }
    }

    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::List => "list",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged field value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No value has been given.
    #[default]
    Absent,
    /// A yes/no answer.
    Boolean(bool),
    /// A numeric answer.
    Number(f64),
    /// Free text or a single selected option.
    Text(String),
    /// Selected options of a multi-choice field.
    List(Vec<String>),
}

impl FieldValue {
    /// Build a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Build a list value from any iterator of strings.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a number value. Non-finite input becomes `Absent`.
    pub fn number(n: f64) -> Self {
        if n.is_finite() {
            Self::Number(n)
        } else {
            Self::Absent
        }
    }

    /// Parse raw numeric input as typed into a number widget.
    ///
    /// Blank or unparseable input yields `Absent` so that an unfinished
    /// entry reads as "not answered" rather than as zero.
    pub fn parse_number(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(n) => Self::number(n),
            Err(_) => Self::Absent,
        }
    }

    /// The kind of this value, or `None` for `Absent`.
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            Self::Absent => None,
            Self::Boolean(_) => Some(FieldKind::Boolean),
            Self::Number(_) => Some(FieldKind::Number),
            Self::Text(_) => Some(FieldKind::Text),
            Self::List(_) => Some(FieldKind::List),
        }
    }

    /// Replace a non-finite number with `Absent`. Other values pass through.
    pub fn normalized(self) -> Self {
        match self {
            Self::Number(n) => Self::number(n),
            other => other,
        }
    }

    /// Whether this value counts as "not answered". See the module docs.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Boolean(_) => false,
            Self::Number(n) => !n.is_finite(),
            Self::Text(s) => s.trim().is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }

    /// The negation of [`FieldValue::is_empty`].
    pub fn is_filled(&self) -> bool {
        !self.is_empty()
    }

    /// Whether the value is present at all, even if blank.
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// The boolean answer, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The number, if this is a finite number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// The text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The list items, or an empty slice if this is not a list.
    pub fn as_list(&self) -> &[String] {
        match self {
            Self::List(items) => items.as_slice(),
            _ => &[],
        }
    }

    /// Whether this is a list containing `item`.
    pub fn includes(&self, item: &str) -> bool {
        self.as_list().iter().any(|i| i == item)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => f.write_str("(absent)"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}
