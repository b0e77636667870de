mod analyzer_credentials;
mod face_analysis;
mod uploaded_image;
mod user_settings;

pub use analyzer_credentials::AnalyzerCredentials;
pub use face_analysis::{EmotionScore, FaceAnalysis};
pub use uploaded_image::UploadedImage;
pub use user_settings::{ThemeMode, UserSettings};
