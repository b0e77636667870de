#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "Emotion Lens - Desktop";
pub const APPLICATION_TITLE: &str = "Emotion Lens";

pub const CONFIG_DIR_NAME: &str = "emotion-lens";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const CREDENTIALS_FILE_NAME: &str = "credentials.json";

pub const UPLOAD_FILTER_LABEL: &str = "Images";
pub const UPLOAD_FILE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

pub const NO_FACES_MESSAGE: &str = "No faces detected.";

pub const STATUS_READY: &str = "Ready - choose an image to analyze";
pub const STATUS_PICKING: &str = "Waiting for image selection...";
pub const STATUS_LOADING: &str = "Loading image...";
pub const STATUS_ANALYZING: &str = "Analyzing faces...";

pub const DEFAULT_ANALYZER_REGION: &str = "us-east-1";

pub const REKOGNITION_SERVICE_NAME: &str = "rekognition";
pub const REKOGNITION_TARGET_DETECT_FACES: &str = "RekognitionService.DetectFaces";
pub const REKOGNITION_CONTENT_TYPE: &str = "application/x-amz-json-1.1";
pub const REKOGNITION_ATTRIBUTE_ALL: &str = "ALL";
