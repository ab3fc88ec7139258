//! Browsing session state
//!
//! Tracks where the user is in the location-area listing and which Pokemon
//! they have caught. Lives only as long as the REPL.

use std::collections::BTreeMap;

use crate::error::CommandError;
use crate::models::{LocationAreaPage, Pokemon};

/// Per-user state shared by the REPL commands.
#[derive(Debug, Default)]
pub struct Session {
    /// URL of the page after the current one
    next: Option<String>,
    /// URL of the page before the current one
    previous: Option<String>,
    /// Whether any page has been loaded yet
    loaded: bool,
    /// Area names on the current page
    areas: Vec<String>,
    /// Caught Pokemon by name
    pokedex: BTreeMap<String, Pokemon>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // == Pagination ==
    /// URL that `map` should load: the first page before anything has been
    /// shown, then whatever `next` the API returned.
    pub fn next_page_url(
        &self,
        first_page: impl FnOnce() -> String,
    ) -> Result<String, CommandError> {
        if !self.loaded {
            return Ok(first_page());
        }
        self.next.clone().ok_or(CommandError::LastPage)
    }

    /// URL that `mapb` should load.
    pub fn previous_page_url(&self) -> Result<String, CommandError> {
        self.previous.clone().ok_or(CommandError::FirstPage)
    }

    /// Makes `page` the current page.
    pub fn apply_page(&mut self, page: &LocationAreaPage) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
        self.areas = page.names();
        self.loaded = true;
    }

    /// Area names on the current page.
    pub fn areas(&self) -> &[String] {
        &self.areas
    }

    // == Pokedex ==
    /// Records a caught Pokemon, replacing any earlier catch of the same name.
    pub fn catch(&mut self, pokemon: Pokemon) {
        self.pokedex.insert(pokemon.name.clone(), pokemon);
    }

    /// Returns a caught Pokemon.
    pub fn caught(&self, name: &str) -> Option<&Pokemon> {
        self.pokedex.get(name)
    }

    /// Names of every caught Pokemon, sorted.
    pub fn caught_names(&self) -> Vec<&str> {
        self.pokedex.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NamedResource;

    fn page(next: Option<&str>, previous: Option<&str>, names: &[&str]) -> LocationAreaPage {
        LocationAreaPage {
            count: 100,
            next: next.map(str::to_string),
            previous: previous.map(str::to_string),
            results: names
                .iter()
                .map(|name| NamedResource {
                    name: name.to_string(),
                    url: String::new(),
                })
                .collect(),
        }
    }

    fn pokemon(name: &str) -> Pokemon {
        Pokemon {
            id: 1,
            name: name.to_string(),
            base_experience: Some(64),
            height: 7,
            weight: 69,
            stats: Vec::new(),
            types: Vec::new(),
        }
    }

    #[test]
    fn test_fresh_session_starts_at_first_page() {
        let session = Session::new();

        assert_eq!(session.next_page_url(|| "first".to_string()).unwrap(), "first");
        assert!(matches!(session.previous_page_url(), Err(CommandError::FirstPage)));
        assert!(session.areas().is_empty());
    }

    #[test]
    fn test_apply_page_moves_cursor() {
        let mut session = Session::new();
        session.apply_page(&page(Some("p3"), Some("p1"), &["a", "b"]));

        assert_eq!(session.next_page_url(|| "first".to_string()).unwrap(), "p3");
        assert_eq!(session.previous_page_url().unwrap(), "p1");
        assert_eq!(session.areas(), ["a", "b"]);
    }

    #[test]
    fn test_last_page() {
        let mut session = Session::new();
        session.apply_page(&page(None, Some("p1"), &["z"]));

        assert!(matches!(
            session.next_page_url(|| "first".to_string()),
            Err(CommandError::LastPage)
        ));
    }

    #[test]
    fn test_pokedex() {
        let mut session = Session::new();
        session.catch(pokemon("squirtle"));
        session.catch(pokemon("bulbasaur"));
        session.catch(pokemon("squirtle"));

        assert_eq!(session.caught_names(), vec!["bulbasaur", "squirtle"]);
        assert!(session.caught("bulbasaur").is_some());
        assert!(session.caught("mew").is_none());
    }
}
