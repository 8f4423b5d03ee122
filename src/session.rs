mod display;
mod focus;
mod viewer;
mod zoom;

#[cfg(test)]
mod tests;

pub use display::{DisplayParameters, InteractionMode, ViewportSize};
pub use focus::FocusState;
pub use viewer::{LoadedVolume, ViewerSession};
pub use zoom::{ZoomLimits, ZoomState};
