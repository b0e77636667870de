use anyhow::Result;
use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;

use super::aws_signature::{self, SigningInput};
use crate::core::interfaces::adapters::FaceEmotionAnalyzer;
use crate::core::models::{AnalyzerCredentials, EmotionScore, FaceAnalysis};
use crate::global_constants;

/// Analyzer backed by the Amazon Rekognition `DetectFaces` operation. One
/// signed POST per uploaded image, full attribute detail requested, and the
/// returned face records copied into the domain model unchanged.
pub struct RekognitionEmotionAnalyzer {
    credentials: AnalyzerCredentials,
    http_client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct DetectFacesResponse {
    #[serde(rename = "FaceDetails", default)]
    face_details: Vec<FaceDetailRecord>,
}

#[derive(Debug, Deserialize)]
struct FaceDetailRecord {
    #[serde(rename = "Confidence", default)]
    confidence: f32,
    #[serde(rename = "Emotions", default)]
    emotions: Vec<EmotionRecord>,
}

#[derive(Debug, Deserialize)]
struct EmotionRecord {
    #[serde(rename = "Type", default)]
    label: String,
    #[serde(rename = "Confidence", default)]
    confidence: f32,
}

impl RekognitionEmotionAnalyzer {
    pub fn new(credentials: AnalyzerCredentials) -> Self {
        log::info!(
            "[REKOGNITION] Initialized analyzer for region '{}'",
            credentials.region
        );

        Self {
            credentials,
            http_client: reqwest::Client::new(),
        }
    }

    fn endpoint_host(&self) -> String {
        format!(
            "{}.{}.amazonaws.com",
            global_constants::REKOGNITION_SERVICE_NAME,
            self.credentials.region
        )
    }

    fn build_request_body(image_bytes: &[u8]) -> String {
        let encoded_image = base64::engine::general_purpose::STANDARD.encode(image_bytes);

        serde_json::json!({
            "Image": { "Bytes": encoded_image },
            "Attributes": [global_constants::REKOGNITION_ATTRIBUTE_ALL],
        })
        .to_string()
    }

    fn parse_face_details(payload: &str) -> Result<Vec<FaceAnalysis>> {
        let response: DetectFacesResponse = serde_json::from_str(payload)?;

        let faces = response
            .face_details
            .into_iter()
            .map(|record| {
                let emotions = record
                    .emotions
                    .into_iter()
                    .map(|emotion| EmotionScore::new(emotion.label, emotion.confidence))
                    .collect();
                FaceAnalysis::new(record.confidence, emotions)
            })
            .collect();

        Ok(faces)
    }

    async fn call_detect_faces(&self, body: String) -> Result<String> {
        let host = self.endpoint_host();
        let url = format!("https://{}/", host);

        let signed_headers = aws_signature::sign_request(&SigningInput {
            access_key_id: &self.credentials.access_key_id,
            secret_access_key: &self.credentials.secret_access_key,
            region: &self.credentials.region,
            service: global_constants::REKOGNITION_SERVICE_NAME,
            host: &host,
            amz_target: global_constants::REKOGNITION_TARGET_DETECT_FACES,
            content_type: global_constants::REKOGNITION_CONTENT_TYPE,
            payload: body.as_bytes(),
            timestamp: chrono::Utc::now(),
        })?;

        log::debug!("[REKOGNITION] Sending DetectFaces request to {}", host);

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", global_constants::REKOGNITION_CONTENT_TYPE)
            .header(
                "X-Amz-Target",
                global_constants::REKOGNITION_TARGET_DETECT_FACES,
            )
            .header("X-Amz-Date", &signed_headers.amz_date)
            .header("Authorization", &signed_headers.authorization)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            anyhow::bail!("DetectFaces returned {}: {}", status, response_text);
        }

        Ok(response_text)
    }
}

#[async_trait]
impl FaceEmotionAnalyzer for RekognitionEmotionAnalyzer {
    async fn analyze_faces(&self, image_bytes: &[u8]) -> Result<Vec<FaceAnalysis>> {
        log::info!(
            "[REKOGNITION] Analyzing image ({} bytes)",
            image_bytes.len()
        );

        let body = Self::build_request_body(image_bytes);
        let payload = self.call_detect_faces(body).await?;
        let faces = Self::parse_face_details(&payload)?;

        log::info!(
            "[REKOGNITION] Analysis returned {} face record(s)",
            faces.len()
        );
        Ok(faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed DetectFaces reply: the fields we map plus a few of the extra
    // attributes the ALL detail level returns.
    const TWO_FACE_RESPONSE: &str = r#"{
        "FaceDetails": [
            {
                "Confidence": 99.1,
                "AgeRange": { "Low": 20, "High": 30 },
                "Smile": { "Value": true, "Confidence": 97.2 },
                "Emotions": [
                    { "Type": "HAPPY", "Confidence": 98.0 },
                    { "Type": "CALM", "Confidence": 2.0 }
                ]
            },
            {
                "Confidence": 87.3,
                "Emotions": [
                    { "Type": "SAD", "Confidence": 75.0 }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_face_details_maps_every_record_in_order() {
        let faces = RekognitionEmotionAnalyzer::parse_face_details(TWO_FACE_RESPONSE).unwrap();

        assert_eq!(faces.len(), 2);
        assert_eq!(faces[0].confidence, 99.1);
        assert_eq!(faces[1].confidence, 87.3);
    }

    #[test]
    fn test_parse_face_details_preserves_emotion_order_and_values() {
        let faces = RekognitionEmotionAnalyzer::parse_face_details(TWO_FACE_RESPONSE).unwrap();

        let first_face_emotions = &faces[0].emotions;
        assert_eq!(first_face_emotions.len(), 2);
        assert_eq!(first_face_emotions[0], EmotionScore::new("HAPPY", 98.0));
        assert_eq!(first_face_emotions[1], EmotionScore::new("CALM", 2.0));

        assert_eq!(faces[1].emotions, vec![EmotionScore::new("SAD", 75.0)]);
    }

    #[test]
    fn test_parse_face_details_with_no_face_details_yields_empty_set() {
        let faces = RekognitionEmotionAnalyzer::parse_face_details("{}").unwrap();

        assert!(faces.is_empty());
    }

    #[test]
    fn test_parse_face_details_rejects_malformed_payload() {
        let result = RekognitionEmotionAnalyzer::parse_face_details("not json at all");

        assert!(result.is_err());
    }

    #[test]
    fn test_build_request_body_carries_base64_image_and_full_detail() {
        let body = RekognitionEmotionAnalyzer::build_request_body(b"fake image bytes");

        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        let encoded = base64::engine::general_purpose::STANDARD.encode(b"fake image bytes");

        assert_eq!(parsed["Image"]["Bytes"], serde_json::json!(encoded));
        assert_eq!(parsed["Attributes"], serde_json::json!(["ALL"]));
    }

    #[test]
    fn test_endpoint_host_is_derived_from_configured_region() {
        let analyzer = RekognitionEmotionAnalyzer::new(AnalyzerCredentials {
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: "secret".to_string(),
            region: "eu-central-1".to_string(),
        });

        assert_eq!(
            analyzer.endpoint_host(),
            "rekognition.eu-central-1.amazonaws.com"
        );
    }
}
