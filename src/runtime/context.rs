use crate::cine::CinePlayer;
use crate::config::ViewerConfig;
use crate::interaction::InteractionController;
use crate::session::ViewerSession;

use super::{IoService, RenderService};

#[derive(Debug, Clone, Default)]
pub struct AppContext {
    config: ViewerConfig,
    io_service: IoService,
    render_service: RenderService,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: ViewerConfig) -> Self {
        Self {
            io_service: IoService::new(config.load_options()),
            render_service: RenderService::new(config.render_options()),
            config,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn io_service(&self) -> &IoService {
        &self.io_service
    }

    pub fn render_service(&self) -> &RenderService {
        &self.render_service
    }

    pub fn new_session(&self) -> ViewerSession {
        ViewerSession::new(self.config.zoom_limits())
    }

    pub fn new_controller(&self) -> InteractionController {
        InteractionController::new(self.config.controller_settings())
    }

    pub fn new_cine_player(&self) -> CinePlayer {
        CinePlayer::new(self.config.cine_interval())
    }
}
