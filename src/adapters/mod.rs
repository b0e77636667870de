mod aws_signature;
mod rekognition_emotion_analyzer;

pub use rekognition_emotion_analyzer::RekognitionEmotionAnalyzer;
