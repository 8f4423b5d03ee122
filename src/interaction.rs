mod controller;
mod events;

#[cfg(test)]
mod tests;

pub use controller::{ControllerSettings, InteractionController};
pub use events::{KeyCommand, Redraw, ScreenPoint, ViewEvent, ViewEventKind};
