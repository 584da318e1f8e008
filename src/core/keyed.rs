use std::{collections::HashSet, fmt};

use color_eyre::eyre::{ensure, eyre, Report};
use serde::{Deserialize, Serialize};

/// Stable identifier of a child inside a [`Keyed`] sequence
///
/// Identifiers are allocated in increasing order and never reused, so a
/// message addressed to a removed child can never reach a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChildId(u64);

impl ChildId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered sequence of child states addressed by [`ChildId`]
///
/// Deserialized values are validated: ids must be unique and the next id is
/// raised past every stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RawKeyed<S>",
    bound(deserialize = "S: Deserialize<'de>")
)]
pub struct Keyed<S> {
    next_id: u64,
    entries: Vec<(ChildId, S)>,
}

/// Unchecked wire form of [`Keyed`]
#[derive(Deserialize)]
struct RawKeyed<S> {
    next_id: u64,
    entries: Vec<(ChildId, S)>,
}

impl<S> TryFrom<RawKeyed<S>> for Keyed<S> {
    type Error = Report;

    fn try_from(raw: RawKeyed<S>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(raw.entries.len());
        for (id, _) in &raw.entries {
            ensure!(seen.insert(*id), "duplicate child id {id}");
        }

        let next_id = match seen.iter().max() {
            Some(max) => {
                let after_max = max
                    .0
                    .checked_add(1)
                    .ok_or_else(|| eyre!("child id {max} leaves no room for new ids"))?;
                if raw.next_id < after_max {
                    tracing::warn!(
                        next_id = raw.next_id,
                        after_max,
                        "raising next child id past stored ids"
                    );
                }
                raw.next_id.max(after_max)
            }
            None => raw.next_id,
        };

        Ok(Self {
            next_id,
            entries: raw.entries,
        })
    }
}

impl<S> Default for Keyed<S> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<S> Keyed<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child and return its freshly allocated id
    pub fn push(&mut self, state: S) -> ChildId {
        let id = ChildId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, state));
        id
    }

    /// Remove a child, returning its state if it was present
    pub fn remove(&mut self, id: ChildId) -> Option<S> {
        let position = self.position(id)?;
        Some(self.entries.remove(position).1)
    }

    pub fn get(&self, id: ChildId) -> Option<&S> {
        self.entries
            .iter()
            .find_map(|(entry_id, state)| (*entry_id == id).then_some(state))
    }

    pub fn get_mut(&mut self, id: ChildId) -> Option<&mut S> {
        self.entries
            .iter_mut()
            .find_map(|(entry_id, state)| (*entry_id == id).then_some(state))
    }

    pub fn position(&self, id: ChildId) -> Option<usize> {
        self.entries.iter().position(|(entry_id, _)| *entry_id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChildId, &S)> {
        self.entries.iter().map(|(id, state)| (*id, state))
    }

    pub fn ids(&self) -> impl Iterator<Item = ChildId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn last_id(&self) -> Option<ChildId> {
        self.entries.last().map(|(id, _)| *id)
    }
}

impl<S> FromIterator<S> for Keyed<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut keyed = Self::new();
        for state in iter {
            keyed.push(state);
        }
        keyed
    }
}
