use std::sync::Arc;

use iced::{Element, Task, Theme};

use crate::adapters::RekognitionEmotionAnalyzer;
use crate::core::models::{AnalyzerCredentials, UserSettings};
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};

pub struct EmotionApp {
    orchestrator: AppOrchestrator,
}

impl EmotionApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });

        // Credentials are read once here; bad or missing values only show up
        // later as a failed analysis call.
        let credentials = AnalyzerCredentials::load();
        let analyzer = Arc::new(RekognitionEmotionAnalyzer::new(credentials));

        let orchestrator = AppOrchestrator::build(analyzer, settings);

        (Self { orchestrator }, Task::none())
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }

    pub fn current_theme(&self) -> Theme {
        self.orchestrator.current_theme()
    }
}
