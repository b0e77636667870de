use iced::widget::{column, container, text};
use iced::{Background, Color, Element, Length};

use crate::core::models::FaceAnalysis;
use crate::global_constants;

/// Read-only view over one analysis round. Faces render in the order the
/// analyzer returned them; an empty set renders the fixed no-results message.
pub struct ResultsPanel {
    faces: Vec<FaceAnalysis>,
}

impl ResultsPanel {
    pub fn build_with_faces(faces: Vec<FaceAnalysis>) -> Self {
        log::info!("[RESULTS] Creating panel with {} face(s)", faces.len());
        Self { faces }
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn faces(&self) -> &[FaceAnalysis] {
        &self.faces
    }

    pub fn face_heading(index: usize) -> String {
        format!("Face {}", index + 1)
    }

    pub fn render_ui<Message: 'static>(&self) -> Element<'_, Message> {
        if self.faces.is_empty() {
            return container(text(global_constants::NO_FACES_MESSAGE).size(16))
                .width(Length::Fill)
                .padding(16)
                .into();
        }

        let mut faces_column = column![].spacing(12).width(Length::Fill);

        for (index, face) in self.faces.iter().enumerate() {
            faces_column = faces_column.push(Self::render_face_card(index, face));
        }

        container(faces_column).width(Length::Fill).into()
    }

    fn render_face_card<Message: 'static>(
        index: usize,
        face: &FaceAnalysis,
    ) -> Element<'_, Message> {
        let heading = text(Self::face_heading(index)).size(18);

        let confidence_line = text(format!("Confidence: {}", face.confidence))
            .size(14)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(Color::from_rgba(0.6, 0.6, 0.6, 1.0)),
            });

        let mut emotion_lines = column![].spacing(2);
        for emotion in &face.emotions {
            emotion_lines = emotion_lines
                .push(text(format!("{}: {}", emotion.label, emotion.confidence)).size(13));
        }

        let card = column![heading, confidence_line, emotion_lines].spacing(6);

        container(card)
            .padding([12, 16])
            .width(Length::Fill)
            .style(|_theme| iced::widget::container::Style {
                background: Some(Background::Color(Color::from_rgba(0.2, 0.2, 0.2, 0.3))),
                border: iced::Border {
                    color: Color::from_rgba(0.4, 0.4, 0.4, 0.3),
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..Default::default()
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::EmotionScore;

    fn sample_two_faces() -> Vec<FaceAnalysis> {
        vec![
            FaceAnalysis::new(
                99.1,
                vec![
                    EmotionScore::new("HAPPY", 98.0),
                    EmotionScore::new("CALM", 2.0),
                ],
            ),
            FaceAnalysis::new(87.3, vec![EmotionScore::new("SAD", 75.0)]),
        ]
    }

    #[test]
    fn test_build_with_faces_keeps_one_entry_per_face() {
        let panel = ResultsPanel::build_with_faces(sample_two_faces());

        assert_eq!(panel.face_count(), 2);
        assert!(!panel.is_empty());
    }

    #[test]
    fn test_faces_render_in_analyzer_order_with_values_untouched() {
        let panel = ResultsPanel::build_with_faces(sample_two_faces());
        let faces = panel.faces();

        assert_eq!(faces[0].confidence, 99.1);
        assert_eq!(faces[0].emotions[0], EmotionScore::new("HAPPY", 98.0));
        assert_eq!(faces[0].emotions[1], EmotionScore::new("CALM", 2.0));
        assert_eq!(faces[1].confidence, 87.3);
        assert_eq!(faces[1].emotions, vec![EmotionScore::new("SAD", 75.0)]);
    }

    #[test]
    fn test_face_headings_are_one_based() {
        assert_eq!(ResultsPanel::face_heading(0), "Face 1");
        assert_eq!(ResultsPanel::face_heading(1), "Face 2");
    }

    #[test]
    fn test_empty_panel_reports_no_faces() {
        let panel = ResultsPanel::build_with_faces(vec![]);

        assert_eq!(panel.face_count(), 0);
        assert!(panel.is_empty());
    }
}
