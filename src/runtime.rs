mod context;
mod error;
mod io_service;
mod render_service;


pub use context::AppContext;
pub use error::{AppError, Result};
pub use io_service::IoService;
pub use render_service::RenderService;
