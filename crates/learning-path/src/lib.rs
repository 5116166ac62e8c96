mod config;
mod connections;
mod layout;
mod map;
mod progression;
mod zoom;

pub use config::*;
pub use connections::*;
pub use layout::*;
pub use map::*;
pub use progression::*;
pub use zoom::*;

pub use path_data::{Course, Module, ModuleId, ModuleKind};
pub use path_layout::{Position, TieredLayout};
