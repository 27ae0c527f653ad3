pub mod components;
pub mod renderer;

pub use components::*;
pub use renderer::*;
