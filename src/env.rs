//! Variable assignments.
//!
//! An [`Env`] maps variable names to truth values. It is built once and then
//! only read: the evaluator never changes it. An environment *covers* an
//! expression when it binds every variable name reachable in that expression.

use std::collections::{BTreeMap, BTreeSet};

use crate::expr::Expr;

/// An immutable mapping from variable name to truth value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Env {
    bindings: BTreeMap<String, bool>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this environment with `name` bound to `value`.
    pub fn with(mut self, name: impl Into<String>, value: bool) -> Self {
        self.bindings.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.bindings.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.bindings.iter().map(|(name, &value)| (name.as_str(), value))
    }

    /// Checks whether every variable reachable in `expr` is bound.
    pub fn covers(&self, expr: &Expr) -> bool {
        expr.vars().into_iter().all(|name| self.contains(name))
    }

    /// Variables reachable in `expr` that this environment does not bind.
    pub fn unbound<'e>(&self, expr: &'e Expr) -> BTreeSet<&'e str> {
        expr.vars().into_iter().filter(|name| !self.contains(name)).collect()
    }

    /// Enumerates every environment binding exactly `names`.
    ///
    /// Environments come in truth-table order: all-false first, with the first
    /// name as the most significant bit. Duplicate names are bound once.
    ///
    /// # Panics
    ///
    /// Panics if there are 64 or more distinct names.
    pub fn assignments<I, S>(names: I) -> Assignments
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = BTreeSet::new();
        let names: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| seen.insert(name.clone()))
            .collect();
        assert!(names.len() < 64, "Cannot enumerate assignments over {} variables", names.len());
        let total = 1u64 << names.len();
        Assignments { names, next: 0, total }
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for Env {
    fn from_iter<T: IntoIterator<Item = (K, bool)>>(iter: T) -> Self {
        Self {
            bindings: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, bool); N]> for Env {
    fn from(bindings: [(K, bool); N]) -> Self {
        bindings.into_iter().collect()
    }
}

/// Iterator over all assignments of a fixed set of names.
///
/// Created by [`Env::assignments`].
#[derive(Debug, Clone)]
pub struct Assignments {
    names: Vec<String>,
    next: u64,
    total: u64,
}

impl Iterator for Assignments {
    type Item = Env;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let row = self.next;
        self.next += 1;
        let n = self.names.len();
        Some(
            self.names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), (row >> (n - 1 - i)) & 1 == 1))
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.total - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}
