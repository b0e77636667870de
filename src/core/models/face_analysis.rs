/// One emotion label with the confidence the provider assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionScore {
    pub label: String,
    pub confidence: f32,
}

impl EmotionScore {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// A single detected face: the detection confidence plus its emotion list,
/// in exactly the order the provider returned them.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceAnalysis {
    pub confidence: f32,
    pub emotions: Vec<EmotionScore>,
}

impl FaceAnalysis {
    pub fn new(confidence: f32, emotions: Vec<EmotionScore>) -> Self {
        Self {
            confidence,
            emotions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotion_score_new_creates_score_with_correct_properties() {
        let score = EmotionScore::new("HAPPY", 98.0);

        assert_eq!(score.label, "HAPPY");
        assert_eq!(score.confidence, 98.0);
    }

    #[test]
    fn test_face_analysis_preserves_emotion_order() {
        let face = FaceAnalysis::new(
            99.1,
            vec![
                EmotionScore::new("HAPPY", 98.0),
                EmotionScore::new("CALM", 2.0),
            ],
        );

        assert_eq!(face.confidence, 99.1);
        assert_eq!(face.emotions[0].label, "HAPPY");
        assert_eq!(face.emotions[1].label, "CALM");
    }

    #[test]
    fn test_face_analysis_can_have_empty_emotion_list() {
        let face = FaceAnalysis::new(87.3, vec![]);

        assert_eq!(face.emotions.len(), 0);
        assert_eq!(face.confidence, 87.3);
    }

    #[test]
    fn test_identical_faces_compare_equal() {
        let build = || FaceAnalysis::new(87.3, vec![EmotionScore::new("SAD", 75.0)]);

        assert_eq!(build(), build());
    }
}
