pub mod colour_for;
pub mod escape_colour_map;
pub mod factory;
pub mod kinds;
pub mod map;
pub mod maps;
