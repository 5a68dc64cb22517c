//! Candidate time sets for meeting variables.
//!
//! Every variable owns its own [`Domain`]; [`Domains`] is indexed by variable
//! and never shares a backing collection between two indices.

mod builder;

pub use builder::{build_domains, expand_dates};

use crate::Variable;
use chrono::NaiveDateTime;
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::ops::{Index, IndexMut};

/// Ordered set of candidate times for one meeting.
///
/// Iteration is chronological, which is the value order the search uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Domain {
    values: BTreeSet<NaiveDateTime>,
}

impl Domain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: &NaiveDateTime) -> bool {
        self.values.contains(value)
    }

    pub fn insert(&mut self, value: NaiveDateTime) -> bool {
        self.values.insert(value)
    }

    pub fn remove(&mut self, value: &NaiveDateTime) -> bool {
        self.values.remove(value)
    }

    /// Keeps only the values accepted by `keep`; returns how many were removed.
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&NaiveDateTime) -> bool,
    {
        let before = self.values.len();
        self.values.retain(keep);
        before - self.values.len()
    }

    pub fn first(&self) -> Option<NaiveDateTime> {
        self.values.first().copied()
    }

    /// Values in ascending chronological order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.values.iter().copied()
    }
}

impl FromIterator<NaiveDateTime> for Domain {
    fn from_iter<I: IntoIterator<Item = NaiveDateTime>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Domain {
    type Item = &'a NaiveDateTime;
    type IntoIter = btree_set::Iter<'a, NaiveDateTime>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// One owned [`Domain`] per variable, indexed by variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Domains {
    domains: Vec<Domain>,
}

impl Domains {
    /// Gives each of `n` variables its own copy of `pool`.
    pub fn replicate(n: usize, pool: &Domain) -> Self {
        Self {
            domains: (0..n).map(|_| pool.clone()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn get(&self, variable: Variable) -> Option<&Domain> {
        self.domains.get(variable)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Variable, &Domain)> {
        self.domains.iter().enumerate()
    }

    /// Sum of all domain sizes.
    pub fn total_size(&self) -> usize {
        self.domains.iter().map(Domain::len).sum()
    }

    /// Per-variable sizes, in variable order.
    pub fn sizes(&self) -> Vec<usize> {
        self.domains.iter().map(Domain::len).collect()
    }

    /// True if any variable has no candidate left.
    pub fn has_empty(&self) -> bool {
        self.domains.iter().any(Domain::is_empty)
    }
}

impl From<Vec<Domain>> for Domains {
    fn from(domains: Vec<Domain>) -> Self {
        Self { domains }
    }
}

impl Index<Variable> for Domains {
    type Output = Domain;

    fn index(&self, variable: Variable) -> &Domain {
        &self.domains[variable]
    }
}

impl IndexMut<Variable> for Domains {
    fn index_mut(&mut self, variable: Variable) -> &mut Domain {
        &mut self.domains[variable]
    }
}
