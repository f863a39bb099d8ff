use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::services::error::{ServiceError, ServiceResult};

pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// An uploaded file as received from the form: client filename and body.
#[derive(Debug, Clone, Copy)]
pub struct UploadedImage<'a> {
    pub file_name: &'a str,
    pub bytes: &'a [u8],
}

/// Local directory holding uploaded images. Stored names are unique, so
/// nothing is ever overwritten.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir).await
    }

    /// Validates the client's extension and writes the bytes under
    /// `<prefix><uuid>_<sanitized name>`. Names that sanitize away entirely
    /// are stored as `image.<ext>`. Returns the stored filename.
    pub async fn save_image(
        &self,
        prefix: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> ServiceResult<String> {
        let Some(ext) = image_extension(original_name) else {
            return Err(ServiceError::InvalidFileType(original_name.to_string()));
        };
        let mut safe_name = sanitize_file_name(original_name);
        if !is_allowed_image(&safe_name) {
            safe_name = format!("image.{}", ext);
        }

        let filename = format!("{}{}_{}", prefix, Uuid::new_v4().simple(), safe_name);
        fs::write(self.dir.join(&filename), bytes).await?;
        debug!("stored upload {} ({} bytes)", filename, bytes.len());
        Ok(filename)
    }

    /// Best-effort cleanup after a failed insert.
    pub async fn remove(&self, filename: &str) {
        if let Err(e) = fs::remove_file(self.dir.join(filename)).await {
            warn!("Could not remove orphaned upload {}: {}", filename, e);
        }
    }
}

pub fn is_allowed_image(file_name: &str) -> bool {
    image_extension(file_name).is_some()
}

/// Lower-cased extension when it is on the allow-list.
pub fn image_extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    ALLOWED_IMAGE_EXTENSIONS
        .contains(&ext.as_str())
        .then_some(ext)
}

/// Reduces a client-supplied filename to a safe basename: directory parts are
/// dropped, whitespace becomes `_`, and only `[A-Za-z0-9._-]` survives.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(|c| c == '/' || c == '\\').next().unwrap_or("");
    let joined = base.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}
