use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::FaceAnalysis;

/// Capability boundary for the remote facial-analysis provider. Returns one
/// entry per detected face, in the order the provider reported them.
#[async_trait]
pub trait FaceEmotionAnalyzer: Send + Sync {
    async fn analyze_faces(&self, image_bytes: &[u8]) -> Result<Vec<FaceAnalysis>>;
}
