//! Visibility evaluation and cascade invalidation
//!
//! Two queries over a [`DependencyForest`]:
//! - [`DependencyForest::visible_fields`]: the ordered, filtered render list
//! - [`DependencyForest::fields_to_hide`]: the identifiers whose values must
//!   be cleared after a field edit
//!
//! Both are pure; the caller owns the value map and applies the clear-set
//! itself. The free functions at the bottom bundle forest construction for
//! one-shot use.

use crate::forest::DependencyForest;
use intake_core::{FieldDefinition, ValueMap};
use std::collections::HashSet;

impl<'a> DependencyForest<'a> {
    /// The ordered, filtered list of fields to render
    ///
    /// Depth-first pre-order: roots in display order, each immediately
    /// followed by its visible descendants, so a dependent field always
    /// appears directly beneath the field that reveals it. Fields whose
    /// trigger condition fails are omitted together with their entire
    /// subtree. Fields carrying the schema `hidden` flag are skipped in the
    /// output but still evaluated as controllers for their descendants.
    pub fn visible_fields(&self, values: &ValueMap) -> Vec<&'a FieldDefinition> {
        let mut out = Vec::new();
        for &root in self.roots() {
            self.emit_visible(root, values, &mut out);
        }
        out
    }

    fn emit_visible(&self, idx: usize, values: &ValueMap, out: &mut Vec<&'a FieldDefinition>) {
        let field = self.field_at(idx);
        if !field.hidden {
            out.push(field);
        }
        for &child in self.children_of(idx) {
            if self.trigger_matches(child, values) {
                self.emit_visible(child, values, out);
            }
        }
    }

    /// Whether a field is currently visible by the trigger rules
    ///
    /// Walks the ancestor chain: every link's trigger condition must hold.
    /// Fields cut off by a cycle are never visible; unknown identifiers are
    /// not visible either. The schema `hidden` flag is a render concern and
    /// deliberately not consulted here.
    pub fn is_visible(&self, id: &str, values: &ValueMap) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        if self.is_unreachable(idx) {
            return false;
        }
        let mut cur = idx;
        loop {
            if !self.trigger_matches(cur, values) {
                return false;
            }
            match self.parent_of(cur) {
                Some(p) => cur = p,
                None => return true,
            }
        }
    }

    /// Identifiers whose values must be cleared after an edit
    ///
    /// Walks the descendants of the changed field against the tentative
    /// value map. A descendant that fails its trigger condition lands in
    /// the set together with its entire subtree: once an ancestor is hidden
    /// the subtree's own trigger values no longer matter. The changed field
    /// itself is never included, and an unknown identifier yields the empty
    /// set. State is never mutated here; the caller deletes the entries.
    pub fn fields_to_hide(&self, values: &ValueMap, changed_field_id: &str) -> HashSet<String> {
        let mut hidden = HashSet::new();
        let Some(start) = self.position(changed_field_id) else {
            return hidden;
        };
        let mut seen = vec![false; self.field_count()];
        seen[start] = true;
        let start_visible = self.is_visible(changed_field_id, values);
        self.collect_hidden(start, start_visible, values, &mut seen, &mut hidden);
        hidden
    }

    fn collect_hidden(
        &self,
        idx: usize,
        ancestors_visible: bool,
        values: &ValueMap,
        seen: &mut [bool],
        out: &mut HashSet<String>,
    ) {
        for &child in self.children_of(idx) {
            if seen[child] {
                continue;
            }
            seen[child] = true;
            let visible = ancestors_visible && self.trigger_matches(child, values);
            if !visible {
                out.insert(self.field_at(child).id.clone());
            }
            self.collect_hidden(child, visible, values, seen, out);
        }
    }
}

/// One-shot form of [`DependencyForest::visible_fields`]
///
/// Builds the forest and evaluates in a single call; callers that issue
/// several queries against the same field list should build the forest once
/// instead.
pub fn visible_fields_in_order<'a>(
    fields: &'a [FieldDefinition],
    values: &ValueMap,
) -> Vec<&'a FieldDefinition> {
    DependencyForest::build(fields).visible_fields(values)
}

/// One-shot form of [`DependencyForest::fields_to_hide`]
pub fn fields_to_hide(
    fields: &[FieldDefinition],
    values: &ValueMap,
    changed_field_id: &str,
) -> HashSet<String> {
    DependencyForest::build(fields).fields_to_hide(values, changed_field_id)
}
