//! Location area models
//!
//! The paginated `location-area` listing and a single area's encounter table.

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// One page of the `location-area` listing.
///
/// `next` and `previous` are absolute URLs and are `null` at either end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of areas across all pages
    #[serde(default)]
    pub count: u32,
    /// URL of the following page
    pub next: Option<String>,
    /// URL of the preceding page
    pub previous: Option<String>,
    /// Areas on this page
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

impl LocationAreaPage {
    /// Names of the areas on this page, in API order.
    pub fn names(&self) -> Vec<String> {
        self.results.iter().map(|area| area.name.clone()).collect()
    }
}

/// A single location area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

impl LocationArea {
    /// Names of the Pokemon that can be encountered here.
    pub fn pokemon_names(&self) -> Vec<String> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.clone())
            .collect()
    }
}

/// A Pokemon that appears in an area, with per-version details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
    #[serde(default)]
    pub version_details: Vec<EncounterVersionDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterVersionDetail {
    #[serde(default)]
    pub max_chance: u32,
    pub version: NamedResource,
    #[serde(default)]
    pub encounter_details: Vec<EncounterDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterDetail {
    #[serde(default)]
    pub chance: u32,
    /// Loosely typed upstream; kept as raw JSON values.
    #[serde(default)]
    pub condition_values: Vec<serde_json::Value>,
    #[serde(default)]
    pub min_level: u32,
    #[serde(default)]
    pub max_level: u32,
    pub method: NamedResource,
}
