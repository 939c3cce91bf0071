//! Core types for the intake form engine
//!
//! This crate defines the foundational types used throughout the system:
//! - FieldDefinition: A single entry in the dynamic form schema
//! - FieldType: Discriminates between the supported field kinds
//! - FieldValue: Unified value enum for all field kinds
//! - ValueMap: Current value per field identifier
//! - Article / ScoredArticle: Knowledge-base records and ranked results
//! - FormConfiguration: The schema blob as delivered by the config service
//! - Error / SchemaIssue: Fatal and non-fatal failure reporting

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod article;
pub mod config;
pub mod error;
pub mod field;
pub mod value;

// Re-export commonly used types
pub use article::{Article, ScoredArticle};
pub use config::FormConfiguration;
pub use error::{Error, Result, SchemaIssue};
pub use field::{FieldDefinition, FieldType, ValidationRules};
pub use value::{FieldValue, ValueMap};
