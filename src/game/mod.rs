//! Core game module containing shared components, resources, events, constants
//! and the grid model.

mod components;
mod constants;
mod events;
mod grid;
mod palette;
mod resources;

pub use components::*;
pub use constants::*;
pub use events::*;
pub use grid::*;
pub use palette::*;
pub use resources::*;
