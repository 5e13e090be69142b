//! Mineral → endmember associations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The endmember(s) a mineral resolves to.
///
/// A phase with no solid solution carries a single bare endmember and its
/// pixelmap file is named `{variable}_{endmember}`. A solid-solution phase
/// carries an ordered list of endmembers, each with a bracketed file name
/// `{variable}_[{endmember}]`.
///
/// The serde representation mirrors the JSON shape users write: a bare
/// string for a single endmember, an array for a solid solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EndmemberGroup {
    Single(String),
    SolidSolution(Vec<String>),
}

impl EndmemberGroup {
    /// Candidate pixelmap file names for a variable, in declared order.
    pub fn file_names(&self, variable: &str) -> Vec<String> {
        match self {
            EndmemberGroup::Single(endmember) => {
                vec![format!("{}_{}", variable, endmember)]
            }
            EndmemberGroup::SolidSolution(endmembers) => endmembers
                .iter()
                .map(|endmember| format!("{}_[{}]", variable, endmember))
                .collect(),
        }
    }

    /// Convenience constructor for a solid solution.
    pub fn solid_solution<S: Into<String>>(endmembers: impl IntoIterator<Item = S>) -> Self {
        EndmemberGroup::SolidSolution(endmembers.into_iter().map(Into::into).collect())
    }

    /// Convenience constructor for a phase with no solid solution.
    pub fn single(endmember: impl Into<String>) -> Self {
        EndmemberGroup::Single(endmember.into())
    }
}

/// Mapping from mineral name to its endmember group.
///
/// Immutable once handed to a [`crate::PixelMap`]; consulted per query by
/// mineral name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndmemberMap {
    minerals: HashMap<String, EndmemberGroup>,
}

impl EndmemberMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mineral: impl Into<String>, group: EndmemberGroup) {
        self.minerals.insert(mineral.into(), group);
    }

    pub fn get(&self, mineral: &str) -> Option<&EndmemberGroup> {
        self.minerals.get(mineral)
    }

    pub fn contains(&self, mineral: &str) -> bool {
        self.minerals.contains_key(mineral)
    }

    pub fn len(&self) -> usize {
        self.minerals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minerals.is_empty()
    }

    /// Parse a map from its JSON representation.
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}

impl<S: Into<String>> FromIterator<(S, EndmemberGroup)> for EndmemberMap {
    fn from_iter<I: IntoIterator<Item = (S, EndmemberGroup)>>(iter: I) -> Self {
        Self {
            minerals: iter
                .into_iter()
                .map(|(name, group)| (name.into(), group))
                .collect(),
        }
    }
}
