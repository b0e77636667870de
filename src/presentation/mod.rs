pub mod app_theme;
mod results_panel;

pub use results_panel::ResultsPanel;
