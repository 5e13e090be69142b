//! Named endmember presets.
//!
//! Presets pair a thermodynamic database name with the mineral → endmember
//! mapping its Domino output uses. The registry is an explicit immutable
//! value rather than process-wide state, so tests and callers can substitute
//! their own.

use crate::endmembers::{EndmemberGroup, EndmemberMap};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable registry of named endmember presets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndmemberRegistry {
    presets: HashMap<String, EndmemberMap>,
}

impl EndmemberRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry of the bundled presets, keyed by database name.
    pub fn builtin() -> Self {
        let mut presets = HashMap::new();

        let jun92d: EndmemberMap = [
            ("biotite", EndmemberGroup::solid_solution(["Ann", "Phl"])),
            (
                "white mica",
                EndmemberGroup::solid_solution(["Ms", "Pg", "MgC", "FeC"]),
            ),
            ("margarite", EndmemberGroup::single("Mrg")),
            (
                "garnet",
                EndmemberGroup::solid_solution(["Gr", "Py", "Alm", "spf"]),
            ),
            (
                "chlorite",
                EndmemberGroup::solid_solution(["Ame", "Pen", "FeAm", "FeP"]),
            ),
        ]
        .into_iter()
        .collect();
        presets.insert("jun92d".to_string(), jun92d);

        let td_ds62: EndmemberMap = [
            (
                "garnet",
                EndmemberGroup::solid_solution(["py", "alm", "gr", "kho"]),
            ),
            (
                "epidote",
                EndmemberGroup::solid_solution(["cz", "ep", "fep"]),
            ),
            (
                "calcic amphibole",
                EndmemberGroup::solid_solution([
                    "tr", "tsm", "pargm", "glm", "cumm", "grnm", "a", "b", "mrb", "kprg", "tts",
                ]),
            ),
            (
                "clinopyroxene",
                EndmemberGroup::solid_solution([
                    "jd", "di", "hed", "acmm1", "om", "cfm", "jac",
                ]),
            ),
        ]
        .into_iter()
        .collect();
        presets.insert("td-ds62-mb50-v07".to_string(), td_ds62);

        let td_d6ax: EndmemberMap = [(
            "biotite",
            EndmemberGroup::solid_solution([
                "phl", "ann1", "obi", "east", "tbi", "fbi", "mnbi1",
            ]),
        )]
        .into_iter()
        .collect();
        presets.insert("td-d6ax_NCKFMASHTO_JRE".to_string(), td_d6ax);

        Self { presets }
    }

    /// Parse a registry from its JSON representation:
    /// `{ "preset": { "mineral": "em" | ["em", ...], ... }, ... }`.
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Load a registry from a JSON file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    /// Look up a preset by name.
    pub fn get(&self, name: &str) -> Option<&EndmemberMap> {
        self.presets.get(name)
    }

    /// Add or replace a preset.
    pub fn insert(&mut self, name: impl Into<String>, map: EndmemberMap) {
        self.presets.insert(name.into(), map);
    }

    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }
}
