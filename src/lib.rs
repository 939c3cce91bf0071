//! Intake - dynamic form engine for ticket-submission portals
//!
//! Intake powers the data-driven part of a ticket form: which fields are
//! shown, in what order, which values get cleared when a controlling field
//! changes, and which knowledge-base articles deserve a suggestion slot
//! next to the form.
//!
//! # Quick Start
//!
//! ```
//! use intake::{FieldDefinition, FieldType, FieldValue, FormState};
//!
//! // Build form state from the configured schema
//! let mut form = FormState::new(vec![
//!     FieldDefinition::new("issue", FieldType::Dropdown).with_order(1),
//!     FieldDefinition::new("device", FieldType::Text)
//!         .with_order(2)
//!         .with_controller("issue")
//!         .with_trigger_values(vec!["hardware".into()]),
//! ]);
//!
//! // Edits cascade: dependents reveal and hide as controllers change
//! form.set_value("issue", FieldValue::from("hardware"));
//! assert_eq!(form.visible_fields().len(), 2);
//! ```
//!
//! # Architecture
//!
//! Two independent, pure components composed by the surrounding form
//! controller: the conditional-visibility engine ([`FormState`],
//! [`DependencyForest`]) and the suggestion ranker ([`rank()`]). The HTTP
//! layer, session handling and rendering live outside this workspace.

pub use intake_core::*;
pub use intake_form::*;
pub use intake_suggest::*;
