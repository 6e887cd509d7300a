//! Letterhead logo asset
//!
//! The logo is decoded once and cached in the handle. Share one handle
//! (through `Arc`) between generations to load it once per process.

use crate::{CocError, Result};
use pdf_core::ImageXObject;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone)]
enum LogoSource {
    None,
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// Lazily decoded letterhead image
#[derive(Debug)]
pub struct LogoAsset {
    source: LogoSource,
    decoded: OnceLock<Arc<ImageXObject>>,
}

impl LogoAsset {
    /// No logo: pages get a text-only letterhead and no watermark
    pub fn none() -> Self {
        Self::with_source(LogoSource::None)
    }

    /// Logo read from a PNG or JPEG file on first use
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::with_source(LogoSource::Path(path.into()))
    }

    /// Logo decoded from in-memory PNG or JPEG bytes on first use
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::with_source(LogoSource::Bytes(bytes.into()))
    }

    fn with_source(source: LogoSource) -> Self {
        Self {
            source,
            decoded: OnceLock::new(),
        }
    }

    /// Whether a source was configured
    pub fn is_configured(&self) -> bool {
        !matches!(self.source, LogoSource::None)
    }

    /// Whether the image has been decoded and cached
    pub fn is_loaded(&self) -> bool {
        self.decoded.get().is_some()
    }

    /// The decoded image, loading it on first call
    ///
    /// A load failure is logged and reported as `None`. Failures are not
    /// cached, so a later call tries again.
    pub fn image(&self) -> Option<Arc<ImageXObject>> {
        if let Some(image) = self.decoded.get() {
            return Some(Arc::clone(image));
        }

        match self.load() {
            Ok(Some(image)) => Some(Arc::clone(self.decoded.get_or_init(|| Arc::new(image)))),
            Ok(None) => None,
            Err(e) => {
                log::warn!("Logo unavailable, using text-only letterhead: {e}");
                None
            }
        }
    }

    /// Read and decode the configured source
    pub fn load(&self) -> Result<Option<ImageXObject>> {
        let image = match &self.source {
            LogoSource::None => return Ok(None),
            LogoSource::Path(path) => {
                let data = std::fs::read(path).map_err(|e| {
                    CocError::Logo(format!("Failed to read logo {}: {}", path.display(), e))
                })?;
                ImageXObject::from_bytes(&data)
            }
            LogoSource::Bytes(data) => ImageXObject::from_bytes(data),
        };

        let image = image.map_err(|e| CocError::Logo(e.to_string()))?;
        log::debug!("Decoded logo {}x{}", image.width, image.height);
        Ok(Some(image))
    }
}

impl Default for LogoAsset {
    fn default() -> Self {
        Self::none()
    }
}
