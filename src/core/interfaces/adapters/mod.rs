mod face_emotion_analyzer;

pub use face_emotion_analyzer::FaceEmotionAnalyzer;
