//! Fixtures for the three favoritable item tables.
//!
//! People, planets and starships share one shape (`id`, `name`, `comment_text`),
//! so each fixture takes the name and derives a comment from it.

use entity::{people, planet, starship};

/// Creates a people entity model without touching the database.
pub fn people(id: i32, name: &str) -> people::Model {
    people::Model {
        id,
        name: name.to_string(),
        comment_text: format!("{} comment", name),
    }
}

/// Creates a planet entity model without touching the database.
pub fn planet(id: i32, name: &str) -> planet::Model {
    planet::Model {
        id,
        name: name.to_string(),
        comment_text: format!("{} comment", name),
    }
}

/// Creates a starship entity model without touching the database.
pub fn starship(id: i32, name: &str) -> starship::Model {
    starship::Model {
        id,
        name: name.to_string(),
        comment_text: format!("{} comment", name),
    }
}
