//! # Field Rules and Rule Sets
//!
//! A [`FieldRule`] is the declarative description of one field: its kind,
//! when it is required, the message shown when it is missing, the value
//! constraints checked once it is filled, and which dependent fields must
//! be cleared when its answer makes them irrelevant.
//!
//! A [`RuleSet`] is the static table of rules for one block. It is built
//! once and never mutated.
//!
//! ## Rule Classes
//!
//! | Class         | Required when                              |
//! |---------------|--------------------------------------------|
//! | `Required`    | always                                     |
//! | `Conditional` | a condition on other fields holds          |
//! | `Optional`    | the field is filled (constraints only)     |
//! | `Tracked`     | never; the rule exists for kind and clears |
//!
//! "Other, please specify" fields are `Conditional` rules whose condition is
//! the governing selector holding the `Other` token.

use std::collections::HashMap;

use scw_core::{FieldKind, FieldValue, FormRecord};

use crate::condition::{Condition, ValueTest};
use crate::constraint::Constraint;

/// How a rule decides whether its field is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleClass {
    /// Always required.
    Required,
    /// Required when a condition holds.
    Conditional,
    /// Never required; constraints apply once filled.
    Optional,
    /// Never required; no constraints.
    Tracked,
}

impl RuleClass {
    /// Whether fields of this class count toward mandatory progress.
    pub fn is_mandatory(self) -> bool {
        matches!(self, Self::Required | Self::Conditional)
    }

    /// Returns the class name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Conditional => "conditional",
            Self::Optional => "optional",
            Self::Tracked => "tracked",
        }
    }
}

impl std::fmt::Display for RuleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields that stay relevant only while the governing value passes a test.
#[derive(Debug, Clone, PartialEq)]
pub struct Dependents {
    /// The dependents are kept while the new value matches this test.
    pub relevant_when: ValueTest,
    /// Dependent field identifiers, reset when the test fails.
    pub fields: Vec<&'static str>,
}

/// The rule for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    /// Namespaced field identifier.
    pub field: &'static str,
    /// The kind of value the field holds.
    pub kind: FieldKind,
    /// How the rule is classified for progress and listings.
    pub class: RuleClass,
    /// The field must be non-empty while this condition holds.
    pub required_if: Condition,
    /// Message reported when the field is required but empty.
    pub required_message: &'static str,
    /// Checks run in order once the field is relevant and filled.
    pub constraints: Vec<Constraint>,
    /// Dependent groups cleared when a new value makes them irrelevant.
    pub clears: Vec<Dependents>,
}

impl FieldRule {
    fn base(field: &'static str, kind: FieldKind, class: RuleClass) -> Self {
        Self {
            field,
            kind,
            class,
            required_if: Condition::Never,
            required_message: "",
            constraints: Vec::new(),
            clears: Vec::new(),
        }
    }

    /// A field that must always be answered.
    pub fn required(field: &'static str, kind: FieldKind, message: &'static str) -> Self {
        Self {
            required_if: Condition::Always,
            required_message: message,
            ..Self::base(field, kind, RuleClass::Required)
        }
    }

    /// A field that must be answered while `when` holds.
    pub fn conditional(
        field: &'static str,
        kind: FieldKind,
        when: Condition,
        message: &'static str,
    ) -> Self {
        Self {
            required_if: when,
            required_message: message,
            ..Self::base(field, kind, RuleClass::Conditional)
        }
    }

    /// A free-text "please specify" field for the `Other` option of a
    /// single-choice selector.
    pub fn other_for(
        field: &'static str,
        selector: &'static str,
        token: &'static str,
        message: &'static str,
    ) -> Self {
        Self::conditional(
            field,
            FieldKind::Text,
            Condition::equals(selector, token),
            message,
        )
    }

    /// A free-text "please specify" field for the `Other` option of a
    /// multi-choice selector.
    pub fn other_in(
        field: &'static str,
        selector: &'static str,
        token: &'static str,
        message: &'static str,
    ) -> Self {
        Self::conditional(
            field,
            FieldKind::Text,
            Condition::includes(selector, token),
            message,
        )
    }

    /// A field that may be left blank but must satisfy its constraints
    /// once given.
    pub fn optional(field: &'static str, kind: FieldKind) -> Self {
        Self {
            required_if: Condition::filled(field),
            ..Self::base(field, kind, RuleClass::Optional)
        }
    }

    /// A field the engine only tracks for its kind and dependents.
    pub fn tracked(field: &'static str, kind: FieldKind) -> Self {
        Self::base(field, kind, RuleClass::Tracked)
    }

    /// Restrict an optional field's constraints to when `when` holds.
    pub fn only_when(mut self, when: Condition) -> Self {
        self.required_if = self.required_if.and(when);
        self
    }

    /// Append a constraint. Constraints run in insertion order.
    pub fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Reset `fields` whenever the new value does not pass `relevant_when`.
    pub fn clears_unless(mut self, relevant_when: ValueTest, fields: &[&'static str]) -> Self {
        self.clears.push(Dependents {
            relevant_when,
            fields: fields.to_vec(),
        });
        self
    }

    /// Whether the field is currently required.
    pub fn is_required(&self, record: &FormRecord) -> bool {
        self.required_if.holds(record)
    }

    /// Evaluate this rule against the record.
    ///
    /// Returns the message for the field, or `None` if it is valid or not
    /// relevant. A value of the wrong kind reads as missing.
    pub fn evaluate(&self, record: &FormRecord) -> Option<&'static str> {
        if !self.is_required(record) {
            return None;
        }
        let value = record.get(self.field);
        if value.is_empty() || value.kind() != Some(self.kind) {
            return Some(self.required_message);
        }
        self.constraints
            .iter()
            .find_map(|constraint| constraint.check(value, record))
    }

    /// Convert raw widget input into a value of this rule's kind.
    ///
    /// Numbers go through [`FieldValue::parse_number`]. Booleans accept
    /// `true`/`yes` and `false`/`no`. Lists accept a JSON array or a comma
    /// separated string. Blank input yields the kind's empty value.
    pub fn coerce(&self, raw: &str) -> FieldValue {
        coerce_as(self.kind, raw)
    }
}

fn coerce_as(kind: FieldKind, raw: &str) -> FieldValue {
    let trimmed = raw.trim();
    match kind {
        FieldKind::Text => FieldValue::text(raw),
        FieldKind::Number => FieldValue::parse_number(trimmed),
        FieldKind::Boolean => match trimmed.to_ascii_lowercase().as_str() {
            "true" | "yes" => FieldValue::Boolean(true),
            "false" | "no" => FieldValue::Boolean(false),
            _ => FieldValue::Absent,
        },
        FieldKind::List => {
            if trimmed.is_empty() {
                return kind.empty_value();
            }
            match serde_json::from_str::<Vec<String>>(trimmed) {
                Ok(items) => FieldValue::List(items),
                Err(_) => FieldValue::list(
                    trimmed
                        .split(',')
                        .map(str::trim)
                        .filter(|item| !item.is_empty()),
                ),
            }
        }
    }
}

/// The immutable table of rules for one block.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: &'static str,
    rules: Vec<FieldRule>,
    index: HashMap<&'static str, usize>,
}

impl RuleSet {
    /// Build a rule set. If two rules name the same field, the first wins.
    pub fn new(name: &'static str, rules: Vec<FieldRule>) -> Self {
        let mut index = HashMap::with_capacity(rules.len());
        for (i, rule) in rules.iter().enumerate() {
            if index.contains_key(rule.field) {
                tracing::warn!(rule_set = name, field = rule.field, "duplicate field rule ignored");
                continue;
            }
            index.insert(rule.field, i);
        }
        Self { name, rules, index }
    }

    /// The rule set's name, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The rule for `field`, if the block declares one.
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.index.get(field).map(|&i| &self.rules[i])
    }

    /// All rules, in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules
            .iter()
            .enumerate()
            .filter(|(i, rule)| self.index.get(rule.field) == Some(i))
            .map(|(_, rule)| rule)
    }

    /// Number of distinct fields.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the rule set declares no fields.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The declared empty value for `field`, or `Absent` if undeclared.
    pub fn empty_value_of(&self, field: &str) -> FieldValue {
        self.rule(field)
            .map_or(FieldValue::Absent, |rule| rule.kind.empty_value())
    }

    /// Convert raw input for `field` using its declared kind. Undeclared
    /// fields are taken as text.
    pub fn coerce_input(&self, field: &str, raw: &str) -> FieldValue {
        match self.rule(field) {
            Some(rule) => rule.coerce(raw),
            None => coerce_as(FieldKind::Text, raw),
        }
    }
}
