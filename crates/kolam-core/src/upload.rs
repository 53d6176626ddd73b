//! Image selection for upload.
//!
//! The only validation applied before submission is that the MIME type
//! starts with `image/`.

use std::path::Path;

use base64::Engine;
use bytes::Bytes;
use image::ImageFormat;

use crate::error::{KolamError, KolamResult};

const FALLBACK_MIME: &str = "application/octet-stream";

/// An image chosen by the user, held in memory until it is uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KolamImage {
    pub file_name: String,
    pub mime_type: String,
    pub data: Bytes,
}

impl KolamImage {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Build from raw bytes, detecting the MIME type from the file name and
    /// then from the content.
    pub fn from_bytes(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let data = data.into();
        let mime_type = detect_mime(&file_name, &data);
        Self {
            file_name,
            mime_type,
            data,
        }
    }

    /// Read a file from disk.
    pub fn from_path(path: &Path) -> KolamResult<Self> {
        let data = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("kolam")
            .to_string();
        Ok(Self::from_bytes(file_name, data))
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Size in megabytes, formatted with two decimals.
    pub fn size_mb(&self) -> String {
        format!("{:.2} MB", self.data.len() as f64 / 1024.0 / 1024.0)
    }

    /// `data:` URI for inline previews.
    pub fn data_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.data);
        format!("data:{};base64,{}", self.mime_type, encoded)
    }
}

/// Guess a MIME type: extension first, magic bytes second.
pub fn detect_mime(file_name: &str, data: &[u8]) -> String {
    if let Ok(format) = ImageFormat::from_path(file_name) {
        return format.to_mime_type().to_string();
    }
    match image::guess_format(data) {
        Ok(format) => format.to_mime_type().to_string(),
        Err(_) => FALLBACK_MIME.to_string(),
    }
}

/// Pending-upload state behind the upload view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadSelection {
    selected: Option<KolamImage>,
    drag_active: bool,
}

impl UploadSelection {
    /// Accept `image` as the pending upload. A non-image leaves the current
    /// selection untouched.
    pub fn select(&mut self, image: KolamImage) -> KolamResult<()> {
        self.drag_active = false;
        if !image.is_image() {
            tracing::debug!(file = %image.file_name, mime = %image.mime_type, "rejected non-image selection");
            return Err(KolamError::InvalidFileType(image.file_name));
        }
        self.selected = Some(image);
        Ok(())
    }

    pub fn selected(&self) -> Option<&KolamImage> {
        self.selected.as_ref()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }
}
