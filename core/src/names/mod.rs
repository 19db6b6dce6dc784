//! Session-scoped name lists backing the Recents and Favorites screens.

use crate::types::FileName;
use std::num::NonZeroUsize;

/// Files opened during the session, first-seen order.
pub type RecentsList = NameList;

/// Files the user marked, in marking order.
pub type FavoritesList = NameList;

/// An ordered, duplicate-free list of file names.
///
/// Equality is exact and case-sensitive. With a limit set, adding a new name
/// to a full list evicts the oldest entry first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    names: Vec<FileName>,
    limit: Option<NonZeroUsize>,
}

impl NameList {
    pub fn new() -> Self {
        Self::default()
    }

    /// `0` means unlimited.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            names: Vec::new(),
            limit: NonZeroUsize::new(limit),
        }
    }

    /// Appends `name` unless it is already present. Returns whether it was added.
    pub fn add(&mut self, name: FileName) -> bool {
        if self.contains(&name) {
            return false;
        }

        if let Some(limit) = self.limit
            && self.names.len() >= limit.get()
        {
            let overflow = self.names.len() + 1 - limit.get();
            self.names.drain(..overflow);
        }

        self.names.push(name);
        true
    }

    /// Removes `name`. Returns whether it was present.
    pub fn remove(&mut self, name: &FileName) -> bool {
        let Some(position) = self.names.iter().position(|existing| existing == name) else {
            return false;
        };
        self.names.remove(position);
        true
    }

    /// Adds `name` if absent, removes it otherwise.
    /// Returns whether `name` is in the list afterwards.
    pub fn toggle(&mut self, name: FileName) -> bool {
        if self.remove(&name) {
            false
        } else {
            self.add(name)
        }
    }

    pub fn contains(&self, name: &FileName) -> bool {
        self.names.contains(name)
    }

    pub fn all(&self) -> &[FileName] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
