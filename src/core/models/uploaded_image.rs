use iced::widget::image;

/// The image blob picked by the user for one analysis round. Bytes are kept
/// as read from disk; the handle exists only for the preview pane.
#[derive(Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub preview_handle: image::Handle,
}

impl std::fmt::Debug for UploadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedImage")
            .field("file_name", &self.file_name)
            .field("byte_count", &self.bytes.len())
            .finish()
    }
}

impl UploadedImage {
    pub fn build_from_bytes(file_name: String, bytes: Vec<u8>) -> Self {
        log::debug!(
            "[UPLOADED_IMAGE] building image '{}', {} bytes",
            file_name,
            bytes.len()
        );

        Self {
            file_name,
            preview_handle: image::Handle::from_bytes(bytes.clone()),
            bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_bytes_keeps_raw_bytes_untouched() {
        let bytes = vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a];

        let uploaded = UploadedImage::build_from_bytes("photo.png".to_string(), bytes.clone());

        assert_eq!(uploaded.bytes, bytes);
        assert_eq!(uploaded.file_name, "photo.png");
    }

    #[test]
    fn test_debug_output_omits_image_bytes() {
        let uploaded = UploadedImage::build_from_bytes("face.jpg".to_string(), vec![1, 2, 3]);

        let printed = format!("{:?}", uploaded);

        assert!(printed.contains("face.jpg"));
        assert!(printed.contains("byte_count"));
        assert!(!printed.contains("[1, 2, 3]"));
    }
}
