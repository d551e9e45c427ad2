//! Immutable-update in-memory repository.
//!
//! Screens keep their records in a `Repository` instead of a shared mutable
//! array: every mutation returns a new repository value and leaves the old
//! one intact, so callers can swap the whole value into reactive state and
//! tests can hold before/after snapshots. Nothing survives a page reload.

#[cfg(test)]
#[path = "repo_test.rs"]
mod repo_test;

use thiserror::Error;

/// Error from the predicate-driven mutations.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RepoError {
    /// The predicate selected no record.
    #[error("no record matched")]
    NoMatch,
}

/// An ordered, in-memory record collection with immutable updates.
#[derive(Clone, Debug, PartialEq)]
pub struct Repository<T> {
    items: Vec<T>,
}

impl<T> Default for Repository<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Clone> Repository<T> {
    /// A repository seeded from a mock array.
    #[must_use]
    pub fn seeded(items: Vec<T>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First record matching `pred`.
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| pred(item))
    }

    /// A new repository with `item` appended.
    #[must_use]
    pub fn insert(&self, item: T) -> Self {
        let mut items = self.items.clone();
        items.push(item);
        Self { items }
    }

    /// A new repository without the records matching `pred`.
    ///
    /// # Errors
    ///
    /// [`RepoError::NoMatch`] if nothing matched, so callers surface a
    /// failed deletion instead of silently succeeding.
    pub fn remove_where(&self, pred: impl Fn(&T) -> bool) -> Result<Self, RepoError> {
        if !self.items.iter().any(|item| pred(item)) {
            return Err(RepoError::NoMatch);
        }
        let items = self.items.iter().filter(|item| !pred(item)).cloned().collect();
        Ok(Self { items })
    }

    /// A new repository with `apply` run on every record matching `pred`.
    ///
    /// # Errors
    ///
    /// [`RepoError::NoMatch`] if nothing matched.
    pub fn update_where(
        &self,
        pred: impl Fn(&T) -> bool,
        apply: impl Fn(&mut T),
    ) -> Result<Self, RepoError> {
        if !self.items.iter().any(|item| pred(item)) {
            return Err(RepoError::NoMatch);
        }
        let items = self
            .items
            .iter()
            .cloned()
            .map(|mut item| {
                if pred(&item) {
                    apply(&mut item);
                }
                item
            })
            .collect();
        Ok(Self { items })
    }
}
