/// Photo intake: validation and data-URL encoding
///
/// A chosen file is only accepted when its declared media type (taken from
/// the file extension) is PNG or JPEG. Accepted files are read off the UI
/// thread and turned into a `data:` URL that can be shipped to the
/// classification service as-is.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::ImageFormat;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// A file handed back by the picker, not yet validated
#[derive(Debug, Clone, PartialEq)]
pub struct ChosenFile {
    pub path: PathBuf,
}

impl ChosenFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Filename only (e.g., "banana.jpg")
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

/// Allow-listed media types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Png,
    Jpeg,
}

impl MediaType {
    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Png => "image/png",
            MediaType::Jpeg => "image/jpeg",
        }
    }
}

/// The photo currently held by the session
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedPhoto {
    /// Full `data:<mime>;base64,...` encoding of the file
    pub data_url: String,
    pub file_name: String,
    pub media_type: MediaType,
    /// Size of the original file in bytes
    pub byte_len: usize,
}

#[derive(Error, Debug, Clone)]
pub enum IntakeError {
    #[error("{file_name} is not a PNG or JPEG image (declared: {declared})")]
    UnsupportedType { file_name: String, declared: String },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },
}

impl IntakeError {
    /// Text shown to the user in the blocking alert
    pub fn alert_message(&self) -> String {
        match self {
            IntakeError::UnsupportedType { .. } => "Please upload a PNG or JPEG image.".to_string(),
            IntakeError::Read { source, .. } => {
                format!("Could not read the selected photo: {}", source)
            }
        }
    }
}

/// Media type declared by the file's extension, if it is one we accept
pub fn declared_media_type(path: &Path) -> Option<MediaType> {
    match ImageFormat::from_path(path).ok()? {
        ImageFormat::Png => Some(MediaType::Png),
        ImageFormat::Jpeg => Some(MediaType::Jpeg),
        _ => None,
    }
}

/// Check a chosen file against the PNG/JPEG allow-list
pub fn validate(file: &ChosenFile) -> Result<MediaType, IntakeError> {
    declared_media_type(&file.path).ok_or_else(|| IntakeError::UnsupportedType {
        file_name: file.file_name(),
        declared: file
            .path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_else(|| "none".to_string()),
    })
}

pub fn to_data_url(media_type: MediaType, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type.mime(), STANDARD.encode(bytes))
}

/// Decode the payload of a base64 data-URL back into raw bytes
///
/// Returns `None` for anything that isn't a base64 `data:` URL.
pub fn decode_data_url(data_url: &str) -> Option<Vec<u8>> {
    let rest = data_url.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    if !meta.ends_with(";base64") {
        return None;
    }
    STANDARD.decode(payload).ok()
}

/// Read a validated file and encode it as the session's photo
pub async fn encode_photo(file: ChosenFile, media_type: MediaType) -> Result<SelectedPhoto, IntakeError> {
    let bytes = tokio::fs::read(&file.path)
        .await
        .map_err(|source| IntakeError::Read {
            path: file.path.clone(),
            source: Arc::new(source),
        })?;

    let data_url = to_data_url(media_type, &bytes);
    debug!("data-URL is {} chars", data_url.len());
    info!("📷 Encoded {} ({} bytes, {})", file.file_name(), bytes.len(), media_type.mime());

    Ok(SelectedPhoto {
        data_url,
        file_name: file.file_name(),
        media_type,
        byte_len: bytes.len(),
    })
}
