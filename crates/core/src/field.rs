//! Form field schema types
//!
//! This module defines:
//! - FieldType: the fixed set of supported field kinds
//! - ValidationRules: per-field input constraints
//! - FieldDefinition: one entry of the dynamic form schema
//!
//! Field definitions arrive as part of the configuration blob and use
//! camelCase keys on the wire. Conditional logic is encoded flat: a field may
//! name a controlling field plus the trigger values of that controller that
//! make it visible. Multi-level chains are allowed.

use crate::value::FieldValue;
use serde::{Deserialize, Serialize};

/// The supported field kinds
///
/// Wire names match the production schema (`text`, `textarea`, `cc_users`,
/// ...). The set is closed: configuration with an unknown type tag fails to
/// parse rather than rendering as a broken widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Single-line text input
    Text,
    /// Multi-line text input
    Textarea,
    /// Numeric input
    Number,
    /// Date picker
    Date,
    /// Single-choice dropdown
    Dropdown,
    /// Multi-choice select
    Multiselect,
    /// Boolean checkbox
    Checkbox,
    /// File attachment
    File,
    /// Multi-select over user accounts (CC list)
    CcUsers,
    /// Ticket priority badge row
    Priority,
    /// Ticket category dropdown
    Category,
}

impl FieldType {
    /// Wire name of this field type
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Dropdown => "dropdown",
            FieldType::Multiselect => "multiselect",
            FieldType::Checkbox => "checkbox",
            FieldType::File => "file",
            FieldType::CcUsers => "cc_users",
            FieldType::Priority => "priority",
            FieldType::Category => "category",
        }
    }

    /// True for field kinds whose value is a list of selections
    pub fn is_multi(&self) -> bool {
        matches!(self, FieldType::Multiselect | FieldType::CcUsers)
    }

    /// True for field kinds whose value is a boolean flag
    pub fn is_flag(&self) -> bool {
        matches!(self, FieldType::Checkbox)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input constraints attached to a field definition
///
/// Enforced by the renderer, carried here so the configuration blob
/// round-trips intact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    /// Minimum text length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,

    /// Maximum text length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    /// Minimum numeric value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Maximum numeric value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// One entry of the dynamic form schema
///
/// The visibility machinery reads only `id`, `order`, `controlling_field_id`,
/// `trigger_values` and `hidden`; the remaining fields are presentation data
/// carried for the renderer.
///
/// # Invariant
///
/// `controlling_field_id`, when present, should reference another field in
/// the same schema. The evaluator tolerates violations (see
/// `SchemaIssue::UnknownController`) but well-formed configuration keeps the
/// reference valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Unique field identifier
    pub id: String,

    /// Field kind
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Human-readable label
    #[serde(default)]
    pub label: String,

    /// Display order; not necessarily contiguous
    #[serde(default)]
    pub order: i32,

    /// Initial value applied when the form loads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<FieldValue>,

    /// Identifier of the field whose value controls this field's visibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controlling_field_id: Option<String>,

    /// Controller values that make this field visible
    ///
    /// Absent means the field is visible whenever its controller is visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_values: Option<Vec<String>>,

    /// Whether the renderer requires a value before submission
    #[serde(default)]
    pub required: bool,

    /// Schema-level disable switch; a hidden field is never rendered
    #[serde(default)]
    pub hidden: bool,

    /// Placeholder text for empty inputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Helper text shown beneath the input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,

    /// Choices for dropdown, multi-select, priority and category fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    /// Input constraints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
}

impl FieldDefinition {
    /// Create a new field definition with defaults
    pub fn new(id: impl Into<String>, field_type: FieldType) -> Self {
        FieldDefinition {
            id: id.into(),
            field_type,
            label: String::new(),
            order: 0,
            default_value: None,
            controlling_field_id: None,
            trigger_values: None,
            required: false,
            hidden: false,
            placeholder: None,
            help_text: None,
            options: None,
            validation: None,
        }
    }

    /// Builder: set label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Builder: set display order
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Builder: set default value
    pub fn with_default(mut self, value: FieldValue) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Builder: set controlling field
    pub fn with_controller(mut self, controller: impl Into<String>) -> Self {
        self.controlling_field_id = Some(controller.into());
        self
    }

    /// Builder: set trigger values
    pub fn with_trigger_values(mut self, values: Vec<String>) -> Self {
        self.trigger_values = Some(values);
        self
    }

    /// Builder: mark required
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Builder: mark hidden (schema-disabled)
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Builder: set options
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = Some(options);
        self
    }

    /// Builder: set validation rules
    pub fn with_validation(mut self, validation: ValidationRules) -> Self {
        self.validation = Some(validation);
        self
    }

    /// True if this field declares a controlling field
    pub fn is_dependent(&self) -> bool {
        self.controlling_field_id.is_some()
    }
}
