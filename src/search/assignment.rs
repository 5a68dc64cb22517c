//! Partial assignments with scoped extension.

use crate::Variable;
use chrono::NaiveDateTime;
use std::ops::{Deref, DerefMut};

/// Ordered `(variable, value)` pairs chosen so far.
///
/// # Invariants
///
/// - No variable appears twice
/// - `len() <= variable_count()`
/// - Entries are only added through [`extend`](Self::extend), whose guard
///   removes the entry again when it goes out of scope
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    entries: Vec<(Variable, NaiveDateTime)>,
    /// Value by variable index, for constant-time lookup.
    values: Vec<Option<NaiveDateTime>>,
}

impl Assignment {
    /// Empty assignment over `n` variables.
    pub fn new(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
            values: vec![None; n],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn variable_count(&self) -> usize {
        self.values.len()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.len() == self.values.len()
    }

    /// Value assigned to `variable`, if any.
    pub fn value_of(&self, variable: Variable) -> Option<NaiveDateTime> {
        self.values.get(variable).copied().flatten()
    }

    pub fn is_assigned(&self, variable: Variable) -> bool {
        self.value_of(variable).is_some()
    }

    /// Entries in the order they were chosen.
    pub fn entries(&self) -> &[(Variable, NaiveDateTime)] {
        &self.entries
    }

    /// Lowest-index variable without a value.
    pub fn next_unassigned(&self) -> Option<Variable> {
        self.values.iter().position(Option::is_none)
    }

    /// Values indexed by variable, once every variable is assigned.
    pub fn to_values(&self) -> Option<Vec<NaiveDateTime>> {
        self.values.iter().copied().collect()
    }

    /// Assigns `value` to `variable` for as long as the returned guard lives.
    ///
    /// # Panics
    ///
    /// Panics if `variable` is out of range or already assigned.
    pub fn extend(&mut self, variable: Variable, value: NaiveDateTime) -> Tentative<'_> {
        let slot = &mut self.values[variable];
        assert!(slot.is_none(), "meeting {variable} is already assigned");
        *slot = Some(value);
        self.entries.push((variable, value));
        Tentative { assignment: self }
    }

    fn undo_last(&mut self) {
        if let Some((variable, _)) = self.entries.pop() {
            self.values[variable] = None;
        }
    }
}

/// Guard for one tentative extension of an [`Assignment`].
///
/// Dereferences to the extended assignment; dropping it undoes the extension
/// on every exit path.
#[derive(Debug)]
pub struct Tentative<'a> {
    assignment: &'a mut Assignment,
}

impl Deref for Tentative<'_> {
    type Target = Assignment;

    fn deref(&self) -> &Assignment {
        self.assignment
    }
}

impl DerefMut for Tentative<'_> {
    fn deref_mut(&mut self) -> &mut Assignment {
        self.assignment
    }
}

impl Drop for Tentative<'_> {
    fn drop(&mut self) {
        self.assignment.undo_last();
    }
}
