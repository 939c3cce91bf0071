//! Controller-side form state
//!
//! [`FormState`] owns what the surrounding controller holds between edits:
//! the schema-ordered field list and the current value map. Every edit goes
//! through [`FormState::set_value`], which applies the cascade rules and
//! prunes values of fields that dropped out of view.
//!
//! Schema issues found at load time are logged here, once, at `warn`; the
//! evaluation machinery itself stays silent.

use crate::forest::DependencyForest;
use intake_core::{FieldDefinition, FieldValue, FormConfiguration, SchemaIssue, ValueMap};
use tracing::warn;

/// Initial value map for a freshly loaded field list
///
/// A field with a non-empty declared default gets that default; multi-choice
/// defaults that are not lists are coerced to the empty list. Every other
/// field starts at its type-appropriate empty value.
pub fn initial_values(fields: &[FieldDefinition]) -> ValueMap {
    let mut values = ValueMap::new();
    for field in fields {
        let value = match &field.default_value {
            Some(default) if !default.is_empty() => {
                if field.field_type.is_multi() && !matches!(default, FieldValue::Many(_)) {
                    FieldValue::Many(Vec::new())
                } else {
                    default.clone()
                }
            }
            _ => FieldValue::empty_for(field.field_type),
        };
        values.insert(field.id.clone(), value);
    }
    values
}

/// The live state of one form instance
///
/// Holds the field list sorted by display order and the current values.
/// Both queries and edits are synchronous and allocation-light; debouncing
/// rapid successive edits is the caller's concern.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<FieldDefinition>,
    values: ValueMap,
    issues: Vec<SchemaIssue>,
}

impl FormState {
    /// Create form state from a field list
    ///
    /// Sorts the fields by display order, initializes values from defaults
    /// and records (and logs) any schema defects.
    pub fn new(mut fields: Vec<FieldDefinition>) -> Self {
        fields.sort_by_key(|f| f.order);
        let values = initial_values(&fields);
        let issues = DependencyForest::build(&fields).issues().to_vec();
        for issue in &issues {
            warn!(target: "intake::form", %issue, "form schema issue");
        }
        FormState {
            fields,
            values,
            issues,
        }
    }

    /// Create form state from a parsed configuration blob
    pub fn from_config(config: FormConfiguration) -> Self {
        Self::new(config.fields)
    }

    /// The schema-ordered field list
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// The current value map
    pub fn values(&self) -> &ValueMap {
        &self.values
    }

    /// Current value of one field
    pub fn value(&self, id: &str) -> Option<&FieldValue> {
        self.values.get(id)
    }

    /// Schema defects recorded at load time
    pub fn issues(&self) -> &[SchemaIssue] {
        &self.issues
    }

    /// The ordered, filtered list of fields to render right now
    pub fn visible_fields(&self) -> Vec<&FieldDefinition> {
        DependencyForest::build(&self.fields).visible_fields(&self.values)
    }

    /// Apply one edit and prune values of fields that dropped out of view
    ///
    /// Returns the identifiers whose values were removed, sorted for
    /// deterministic consumption. The edit is applied first so dependents
    /// are evaluated against the tentative map, exactly as the renderer
    /// will see it.
    pub fn set_value(&mut self, id: impl Into<String>, value: FieldValue) -> Vec<String> {
        let id = id.into();
        self.values.insert(id.clone(), value);

        let forest = DependencyForest::build(&self.fields);
        let mut hidden: Vec<String> = forest
            .fields_to_hide(&self.values, &id)
            .into_iter()
            .collect();
        hidden.sort();

        let mut cleared = Vec::new();
        for field_id in hidden {
            if self.values.remove(&field_id).is_some() {
                cleared.push(field_id);
            }
        }
        cleared
    }
}
