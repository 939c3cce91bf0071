//! Field value types
//!
//! This module defines:
//! - FieldValue: the value of a single form field
//! - ValueMap: current value per field identifier
//!
//! ## Value Model
//!
//! Exactly three shapes, matching the field kinds:
//! - `Text` for every scalar input (text, textarea, number, date, dropdown,
//!   file, priority, category)
//! - `Flag` for checkboxes
//! - `Many` for multi-choice selections (multiselect, cc_users)
//!
//! On the wire a value is a bare JSON string, bool, or string array; the
//! serde representation is untagged.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::field::FieldType;

/// Current value per field identifier
///
/// Initialized from field defaults when the form loads, mutated on every
/// edit, and pruned when fields become hidden by conditional logic.
pub type ValueMap = HashMap<String, FieldValue>;

/// The value of a single form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean flag (checkbox)
    Flag(bool),
    /// Scalar value (every single-valued field kind)
    Text(String),
    /// Multi-choice selection
    Many(Vec<String>),
}

impl FieldValue {
    /// The empty value appropriate for a field kind
    ///
    /// Empty string for scalars, `false` for checkboxes, empty list for
    /// multi-choice fields.
    pub fn empty_for(field_type: FieldType) -> Self {
        if field_type.is_multi() {
            FieldValue::Many(Vec::new())
        } else if field_type.is_flag() {
            FieldValue::Flag(false)
        } else {
            FieldValue::Text(String::new())
        }
    }

    /// Get the shape name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Flag(_) => "Flag",
            FieldValue::Text(_) => "Text",
            FieldValue::Many(_) => "Many",
        }
    }

    /// True for an empty string or an empty selection
    ///
    /// A `Flag` is never considered empty; `false` is a real answer.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Flag(_) => false,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Many(vs) => vs.is_empty(),
        }
    }

    /// Whether this value satisfies a trigger set
    ///
    /// - `Text`: exact membership in the trigger set
    /// - `Flag`: membership of `"true"` / `"false"` in the trigger set
    /// - `Many`: at least one selected value is in the trigger set
    pub fn matches_any(&self, triggers: &[String]) -> bool {
        match self {
            FieldValue::Text(s) => triggers.iter().any(|t| t == s),
            FieldValue::Flag(b) => {
                let s = if *b { "true" } else { "false" };
                triggers.iter().any(|t| t == s)
            }
            FieldValue::Many(vs) => vs.iter().any(|v| triggers.iter().any(|t| t == v)),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(vs: Vec<String>) -> Self {
        FieldValue::Many(vs)
    }
}
