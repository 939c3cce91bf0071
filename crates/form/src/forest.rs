//! Dependency forest construction
//!
//! The controlling-field relation arrives as flat records with parent
//! references. This module builds the explicit adjacency structure once per
//! evaluation so traversals stay linear in the field count:
//! - id -> position index
//! - children lists and root list, each sorted by declared display order
//! - reachability from the roots, which doubles as cycle detection
//!
//! Schema defects (unknown controllers, duplicate ids, cycles) are recorded
//! as [`SchemaIssue`]s rather than errors; a bad reference must never take
//! down rendering.

use intake_core::{FieldDefinition, SchemaIssue, ValueMap};
use rustc_hash::FxHashMap;

/// Adjacency view over a flat field list
///
/// Borrows the field slice it was built from; build one per evaluation pass
/// and query it for visibility and cascade computations.
///
/// # Cycle policy
///
/// A field whose ancestor chain never reaches a root is on or downstream of
/// a controlling-field cycle. Such fields are permanently invisible, the
/// fields on the cycle itself are reported via [`issues`](Self::issues), and
/// no traversal ever loops.
pub struct DependencyForest<'a> {
    fields: &'a [FieldDefinition],
    index: FxHashMap<&'a str, usize>,
    parent: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
    unreachable: Vec<bool>,
    issues: Vec<SchemaIssue>,
}

impl<'a> DependencyForest<'a> {
    /// Build the forest for a field list
    ///
    /// Tolerates malformed schemas: duplicate ids keep their first
    /// occurrence, unknown controller references degrade to roots, and
    /// cycles are cut off from the forest. Every defect is recorded.
    pub fn build(fields: &'a [FieldDefinition]) -> Self {
        let n = fields.len();
        let mut issues = Vec::new();

        let mut index = FxHashMap::default();
        let mut duplicate = vec![false; n];
        for (i, field) in fields.iter().enumerate() {
            if index.contains_key(field.id.as_str()) {
                issues.push(SchemaIssue::DuplicateId {
                    field: field.id.clone(),
                });
                duplicate[i] = true;
            } else {
                index.insert(field.id.as_str(), i);
            }
        }

        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut roots = Vec::new();
        for (i, field) in fields.iter().enumerate() {
            if duplicate[i] {
                continue;
            }
            match &field.controlling_field_id {
                None => roots.push(i),
                Some(controller) => match index.get(controller.as_str()) {
                    Some(&p) if p != i => {
                        parent[i] = Some(p);
                        children[p].push(i);
                    }
                    Some(_) => {
                        // field controls itself: a one-field cycle
                        parent[i] = Some(i);
                    }
                    None => {
                        issues.push(SchemaIssue::UnknownController {
                            field: field.id.clone(),
                            controller: controller.clone(),
                        });
                        roots.push(i);
                    }
                },
            }
        }

        // Stable sort keeps declaration order for equal display orders.
        roots.sort_by_key(|&i| fields[i].order);
        for list in &mut children {
            list.sort_by_key(|&i| fields[i].order);
        }

        let unreachable = mark_unreachable(n, &roots, &children, &duplicate);
        report_cycles(fields, &parent, &unreachable, &mut issues);

        DependencyForest {
            fields,
            index,
            parent,
            children,
            roots,
            unreachable,
            issues,
        }
    }

    /// Schema defects found while building
    ///
    /// Intended for logging and configuration-error reporting by the caller.
    pub fn issues(&self) -> &[SchemaIssue] {
        &self.issues
    }

    /// The field list this forest was built from
    pub fn fields(&self) -> &'a [FieldDefinition] {
        self.fields
    }

    /// Whether a field sits on or downstream of a controlling-field cycle
    pub fn is_cut_off(&self, id: &str) -> bool {
        self.index.get(id).is_some_and(|&i| self.unreachable[i])
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn parent_of(&self, idx: usize) -> Option<usize> {
        self.parent[idx]
    }

    pub(crate) fn children_of(&self, idx: usize) -> &[usize] {
        &self.children[idx]
    }

    pub(crate) fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub(crate) fn field_at(&self, idx: usize) -> &'a FieldDefinition {
        &self.fields[idx]
    }

    pub(crate) fn is_unreachable(&self, idx: usize) -> bool {
        self.unreachable[idx]
    }

    pub(crate) fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Whether a dependent field's trigger condition holds under `values`
    ///
    /// True for fields without a controller, and for fields whose controller
    /// is not in the schema (they degrade to roots). A declared controller
    /// with no trigger set matches unconditionally; a controller with no
    /// current value matches nothing.
    pub(crate) fn trigger_matches(&self, idx: usize, values: &ValueMap) -> bool {
        let field = &self.fields[idx];
        let Some(controller) = &field.controlling_field_id else {
            return true;
        };
        if !self.index.contains_key(controller.as_str()) {
            return true;
        }
        let Some(triggers) = &field.trigger_values else {
            return true;
        };
        values
            .get(controller.as_str())
            .is_some_and(|value| value.matches_any(triggers))
    }
}

/// Mark every field that no root can reach
///
/// Non-root fields have exactly one parent edge, so a field left unmarked by
/// the downward walk has an ancestor chain that never terminates: it is on
/// or downstream of a cycle. Duplicate entries are unreachable by fiat.
fn mark_unreachable(
    n: usize,
    roots: &[usize],
    children: &[Vec<usize>],
    duplicate: &[bool],
) -> Vec<bool> {
    let mut reached = vec![false; n];
    let mut stack: Vec<usize> = roots.to_vec();
    while let Some(idx) = stack.pop() {
        if reached[idx] {
            continue;
        }
        reached[idx] = true;
        stack.extend_from_slice(&children[idx]);
    }
    (0..n).map(|i| !reached[i] || duplicate[i]).collect()
}

/// Report each field that sits on a cycle proper
///
/// Walks parent pointers from every unreachable field; the first node
/// revisited within one walk closes the cycle. Fields merely downstream of a
/// cycle are invisible but not reported.
fn report_cycles(
    fields: &[FieldDefinition],
    parent: &[Option<usize>],
    unreachable: &[bool],
    issues: &mut Vec<SchemaIssue>,
) {
    const UNVISITED: u8 = 0;
    const IN_WALK: u8 = 1;
    const DONE: u8 = 2;

    let mut state = vec![UNVISITED; fields.len()];
    for start in 0..fields.len() {
        if !unreachable[start] || state[start] != UNVISITED {
            continue;
        }
        let mut walk: Vec<usize> = Vec::new();
        let mut cur = start;
        loop {
            if state[cur] == IN_WALK {
                let entry = walk.iter().position(|&i| i == cur).unwrap_or(0);
                for &member in &walk[entry..] {
                    issues.push(SchemaIssue::CycleDetected {
                        field: fields[member].id.clone(),
                    });
                }
                break;
            }
            if state[cur] == DONE {
                break;
            }
            state[cur] = IN_WALK;
            walk.push(cur);
            match parent[cur] {
                Some(p) => cur = p,
                None => break,
            }
        }
        for &i in &walk {
            state[i] = DONE;
        }
    }
}
