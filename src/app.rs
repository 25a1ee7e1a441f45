use std::sync::Arc;

use iced::{Element, Task, Theme};

use crate::adapters::{HarvardArtMuseumsProvider, HttpImageLoader};
use crate::core::models::UserSettings;
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::global_constants;
use crate::presentation::app_theme;

pub struct MuseumApp {
    orchestrator: AppOrchestrator,
}

impl MuseumApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {:#}, using defaults", e);
            UserSettings::default()
        });

        let client = reqwest::Client::new();
        let query_results_provider = Arc::new(HarvardArtMuseumsProvider::new(
            client.clone(),
            settings.api_base_url.clone(),
            settings.api_key.clone(),
        ));
        let image_loader = Arc::new(HttpImageLoader::new(client));

        let orchestrator = AppOrchestrator::build(query_results_provider, image_loader, settings);

        (Self { orchestrator }, Task::none())
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }

    pub fn window_title(&self) -> String {
        global_constants::APPLICATION_TITLE.to_string()
    }

    pub fn resolve_theme(&self) -> Theme {
        app_theme::get_theme(&self.orchestrator.settings().theme_mode)
    }
}
