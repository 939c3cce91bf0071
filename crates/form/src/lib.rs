//! Conditional-visibility engine for dynamic intake forms
//!
//! This crate provides:
//! - DependencyForest: adjacency view over the flat field schema
//! - visible_fields / visible_fields_in_order: the ordered render list
//! - fields_to_hide: cascade invalidation after a field edit
//! - FormState: controller-side value lifecycle (defaults, edits, pruning)
//!
//! The evaluation core is pure and synchronous: it never mutates its inputs,
//! performs no I/O, and runs in time proportional to field count times tree
//! depth. Malformed schemas (unknown controller references, duplicate ids,
//! dependency cycles) degrade gracefully and surface as [`SchemaIssue`]
//! diagnostics instead of errors.
//!
//! # Usage
//!
//! ```
//! use intake_core::{FieldDefinition, FieldType, FieldValue};
//! use intake_form::FormState;
//!
//! let mut form = FormState::new(vec![
//!     FieldDefinition::new("issue", FieldType::Dropdown).with_order(1),
//!     FieldDefinition::new("device", FieldType::Text)
//!         .with_order(2)
//!         .with_controller("issue")
//!         .with_trigger_values(vec!["hardware".into()]),
//! ]);
//!
//! form.set_value("issue", FieldValue::from("hardware"));
//! assert_eq!(form.visible_fields().len(), 2);
//!
//! let cleared = form.set_value("issue", FieldValue::from("access"));
//! assert_eq!(cleared, vec!["device".to_string()]);
//! ```

#![warn(clippy::all)]

pub mod forest;
pub mod state;
pub mod visibility;

pub use forest::DependencyForest;
pub use state::{initial_values, FormState};
pub use visibility::{fields_to_hide, visible_fields_in_order};

pub use intake_core::SchemaIssue;
