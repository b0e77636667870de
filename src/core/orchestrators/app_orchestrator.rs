use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::{button, column, container, image, pick_list, row, scrollable, text, Space};
use iced::{Alignment, Color, Element, Length, Task, Theme};

use crate::core::interfaces::adapters::FaceEmotionAnalyzer;
use crate::core::models::{
    AnalyzerCredentials, FaceAnalysis, ThemeMode, UploadedImage, UserSettings,
};
use crate::global_constants;
use crate::presentation::{app_theme, ResultsPanel};

/// Which pane the single window currently shows.
pub enum ActivePane {
    Upload,
    Settings,
}

pub struct AppOrchestrator {
    analyzer: Arc<dyn FaceEmotionAnalyzer>,
    pane: ActivePane,
    status: String,
    settings: UserSettings,
    temp_settings: Option<UserSettings>,
    current_image: Option<UploadedImage>,
    results: Option<ResultsPanel>,
}

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    PickImage,
    ImagePicked(Option<PathBuf>),
    ImageLoaded(Result<UploadedImage, String>),
    AnalysisComplete(Result<Vec<FaceAnalysis>, String>),
    OpenSettings,
    UpdateTheme(ThemeMode),
    SaveSettings,
    CancelSettings,
}

impl AppOrchestrator {
    pub fn build(analyzer: Arc<dyn FaceEmotionAnalyzer>, settings: UserSettings) -> Self {
        Self {
            analyzer,
            pane: ActivePane::Upload,
            status: global_constants::STATUS_READY.to_string(),
            settings,
            temp_settings: None,
            current_image: None,
            results: None,
        }
    }

    pub fn current_theme(&self) -> Theme {
        app_theme::get_theme(&self.settings.theme_mode)
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            OrchestratorMessage::PickImage => self.handle_pick_image(),
            OrchestratorMessage::ImagePicked(maybe_path) => self.handle_image_picked(maybe_path),
            OrchestratorMessage::ImageLoaded(result) => self.handle_image_loaded(result),
            OrchestratorMessage::AnalysisComplete(result) => {
                self.handle_analysis_complete(result);
                Task::none()
            }
            OrchestratorMessage::OpenSettings => {
                log::info!("[ORCHESTRATOR] Opening settings pane");
                self.temp_settings = Some(self.settings.clone());
                self.pane = ActivePane::Settings;
                Task::none()
            }
            OrchestratorMessage::UpdateTheme(theme) => {
                if let Some(ref mut temp) = self.temp_settings {
                    temp.theme_mode = theme;
                }
                Task::none()
            }
            OrchestratorMessage::SaveSettings => self.handle_save_settings(),
            OrchestratorMessage::CancelSettings => {
                self.temp_settings = None;
                self.pane = ActivePane::Upload;
                Task::none()
            }
        }
    }

    fn handle_pick_image(&mut self) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Opening image picker");
        self.status = global_constants::STATUS_PICKING.to_string();

        Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .set_title("Choose an image")
                    .add_filter(
                        global_constants::UPLOAD_FILTER_LABEL,
                        global_constants::UPLOAD_FILE_EXTENSIONS,
                    )
                    .pick_file()
                    .await
                    .map(|handle| handle.path().to_path_buf())
            },
            OrchestratorMessage::ImagePicked,
        )
    }

    fn handle_image_picked(&mut self, maybe_path: Option<PathBuf>) -> Task<OrchestratorMessage> {
        let Some(path) = maybe_path else {
            log::info!("[ORCHESTRATOR] Image selection cancelled");
            self.status = global_constants::STATUS_READY.to_string();
            return Task::none();
        };

        log::info!("[ORCHESTRATOR] Image selected: {:?}", path);
        self.status = global_constants::STATUS_LOADING.to_string();

        Task::perform(
            async move {
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_else(|| "image".to_string());

                match tokio::fs::read(&path).await {
                    Ok(bytes) => Ok(UploadedImage::build_from_bytes(file_name, bytes)),
                    Err(e) => Err(format!("failed to read {}: {}", path.display(), e)),
                }
            },
            OrchestratorMessage::ImageLoaded,
        )
    }

    fn handle_image_loaded(
        &mut self,
        result: Result<UploadedImage, String>,
    ) -> Task<OrchestratorMessage> {
        let uploaded = match result {
            Ok(uploaded) => uploaded,
            Err(error) => {
                log::error!("[ORCHESTRATOR] Image load failed: {}", error);
                self.status = format!("Could not load image: {}", error);
                return Task::none();
            }
        };

        log::info!(
            "[ORCHESTRATOR] Image loaded ({} bytes), dispatching analysis",
            uploaded.bytes.len()
        );
        self.status = global_constants::STATUS_ANALYZING.to_string();
        self.results = None;

        let analyzer = Arc::clone(&self.analyzer);
        let image_bytes = uploaded.bytes.clone();
        self.current_image = Some(uploaded);

        Task::perform(
            async move {
                analyzer
                    .analyze_faces(&image_bytes)
                    .await
                    .map_err(|e| e.to_string())
            },
            OrchestratorMessage::AnalysisComplete,
        )
    }

    // Fail-open boundary: a failed remote call is logged once and collapses
    // into the empty result set, which renders the same as zero faces.
    fn handle_analysis_complete(&mut self, result: Result<Vec<FaceAnalysis>, String>) {
        let faces = match result {
            Ok(faces) => {
                log::info!(
                    "[ORCHESTRATOR] Analysis complete: {} face(s) found",
                    faces.len()
                );
                faces
            }
            Err(error) => {
                log::error!("[ORCHESTRATOR] Face analysis failed: {}", error);
                Vec::new()
            }
        };

        self.status = if faces.is_empty() {
            global_constants::NO_FACES_MESSAGE.to_string()
        } else {
            format!("Analyzed {} face(s)", faces.len())
        };
        self.results = Some(ResultsPanel::build_with_faces(faces));
    }

    fn handle_save_settings(&mut self) -> Task<OrchestratorMessage> {
        if let Some(temp) = self.temp_settings.take() {
            self.settings = temp;
            if let Err(e) = self.settings.save() {
                log::error!("[ORCHESTRATOR] Failed to save settings: {}", e);
                self.status = format!("Failed to save settings: {}", e);
            } else {
                log::info!("[ORCHESTRATOR] Settings saved successfully");
            }
        }

        self.pane = ActivePane::Upload;
        Task::none()
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        match self.pane {
            ActivePane::Upload => self.render_upload_pane(),
            ActivePane::Settings => self.render_settings_pane(),
        }
    }

    fn render_upload_pane(&self) -> Element<'_, OrchestratorMessage> {
        let logo_icon = text("😊").size(56);
        let title = text(global_constants::APPLICATION_TITLE).size(34);
        let subtitle = text("See the emotions in any photo")
            .size(15)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(Color::from_rgba(0.6, 0.6, 0.6, 1.0)),
            });

        let header_section = column![logo_icon, title, subtitle]
            .spacing(8)
            .align_x(Alignment::Center);

        let upload_btn = button(
            row![text("🖼").size(20), text("Choose an image...").size(16)]
                .spacing(10)
                .align_y(Alignment::Center),
        )
        .padding([14, 40])
        .style(|theme, status| app_theme::primary_button_style(theme, status))
        .on_press(OrchestratorMessage::PickImage);

        let settings_btn = button(text("⚙ Settings").size(13))
            .padding([8, 20])
            .style(|theme, status| app_theme::secondary_button_style(theme, status))
            .on_press(OrchestratorMessage::OpenSettings);

        let action_section = column![upload_btn, self.render_status_indicator(), settings_btn]
            .spacing(14)
            .align_x(Alignment::Center);

        let mut content = column![
            header_section,
            Space::new().height(Length::Fixed(20.0)),
            action_section,
        ]
        .spacing(8)
        .padding(32)
        .width(Length::Fill)
        .align_x(Alignment::Center);

        if let Some(uploaded) = &self.current_image {
            let preview = image::viewer(uploaded.preview_handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(260.0));
            let file_label = text(&uploaded.file_name).size(12).style(
                |_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(Color::from_rgba(0.5, 0.5, 0.5, 1.0)),
                },
            );
            content = content
                .push(Space::new().height(Length::Fixed(12.0)))
                .push(preview)
                .push(file_label);
        }

        if let Some(results) = &self.results {
            content = content
                .push(Space::new().height(Length::Fixed(12.0)))
                .push(results.render_ui());
        }

        container(scrollable(content).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn render_status_indicator(&self) -> Element<'_, OrchestratorMessage> {
        let (status_color, status_icon) = match self.status.as_str() {
            s if s.contains("Ready") || s.contains("Analyzed") => {
                (Color::from_rgb(0.2, 0.8, 0.4), "●")
            }
            s if s.contains("Loading") || s.contains("Analyzing") || s.contains("Waiting") => {
                (Color::from_rgb(1.0, 0.8, 0.2), "○")
            }
            s if s.contains("failed") || s.contains("Could not") => {
                (Color::from_rgb(1.0, 0.3, 0.3), "●")
            }
            _ => (Color::from_rgba(0.5, 0.5, 0.5, 1.0), "●"),
        };

        let status_text = row![
            text(status_icon)
                .size(12)
                .style(move |_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(status_color),
                }),
            text(&self.status)
                .size(13)
                .style(|_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(Color::from_rgba(0.6, 0.6, 0.6, 1.0)),
                }),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        container(status_text).into()
    }

    fn render_settings_pane(&self) -> Element<'_, OrchestratorMessage> {
        let temp = self.temp_settings.as_ref().unwrap_or(&self.settings);

        let header_icon = text("⚙").size(44);
        let title = text("Settings").size(26);
        let header_section = column![header_icon, title]
            .spacing(8)
            .align_x(Alignment::Center);

        let theme_row = row![
            text("Theme").size(14).width(Length::FillPortion(2)),
            container(
                pick_list(
                    vec![ThemeMode::Dark, ThemeMode::Light],
                    Some(temp.theme_mode.clone()),
                    OrchestratorMessage::UpdateTheme,
                )
                .padding(10)
            )
            .width(Length::FillPortion(3)),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        let credentials_hint = match AnalyzerCredentials::get_credentials_file_path() {
            Ok(path) => format!("Analysis credentials are read from {}", path.display()),
            Err(_) => "Analysis credentials file location unavailable".to_string(),
        };
        let credentials_note =
            text(credentials_hint)
                .size(11)
                .style(|_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(Color::from_rgba(0.6, 0.6, 0.6, 1.0)),
                });

        let save_btn = button(text("Save Changes").size(14))
            .padding([12, 32])
            .style(|theme, status| app_theme::primary_button_style(theme, status))
            .on_press(OrchestratorMessage::SaveSettings);

        let cancel_btn = button(text("Cancel").size(14))
            .padding([12, 32])
            .style(|theme, status| app_theme::secondary_button_style(theme, status))
            .on_press(OrchestratorMessage::CancelSettings);

        let buttons = row![save_btn, cancel_btn]
            .spacing(12)
            .align_y(Alignment::Center);

        let content = column![
            header_section,
            Space::new().height(Length::Fixed(24.0)),
            theme_row,
            Space::new().height(Length::Fixed(8.0)),
            credentials_note,
            Space::new().height(Length::Fixed(24.0)),
            buttons,
        ]
        .spacing(4)
        .padding(32)
        .width(Length::Fill)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
