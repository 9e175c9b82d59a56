pub mod aurora;
pub mod fire;
pub mod hsl;
pub mod monochrome;
pub mod nebula;
pub mod ocean;
pub mod psychedelic;
pub mod rainbow;
pub mod twilight;
