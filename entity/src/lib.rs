pub mod prelude;

pub mod favorite_people;
pub mod favorite_planet;
pub mod favorite_starship;
pub mod people;
pub mod planet;
pub mod starship;
pub mod user;
