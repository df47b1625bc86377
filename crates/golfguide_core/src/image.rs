//! Image reference resolution boundary.
//!
//! # Responsibility
//! - Map a relative image path onto a displayable handle under a fixed base URI.
//! - Keep URI handling out of the model types.
//!
//! # Invariants
//! - Resolution is synchronous and side-effect free.
//! - A path that is already an absolute URI is used as-is.

use std::error::Error;
use std::fmt::{Display, Formatter};
use url::Url;

/// Base location of packaged application assets.
pub const DEFAULT_IMAGE_BASE_URI: &str = "ms-appx:///";

/// Resolved, displayable image reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    uri: String,
}

impl ImageHandle {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl Display for ImageHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}

/// Errors from image path resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Path is blank after trim.
    EmptyPath,
    /// Base URI cannot be parsed or cannot act as a base.
    InvalidBase { base: String, reason: String },
    /// Path cannot be joined onto the base.
    InvalidPath { path: String, reason: String },
}

impl Display for ImageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "image path must not be blank"),
            Self::InvalidBase { base, reason } => {
                write!(f, "invalid image base uri `{base}`: {reason}")
            }
            Self::InvalidPath { path, reason } => {
                write!(f, "invalid image path `{path}`: {reason}")
            }
        }
    }
}

impl Error for ImageError {}

/// Capability that turns an unresolved image path into a handle.
pub trait ImageResolver {
    fn resolve(&self, path: &str) -> Result<ImageHandle, ImageError>;
}

/// Resolver joining relative paths onto a fixed base URI.
#[derive(Debug, Clone)]
pub struct BaseUriResolver {
    base: Url,
}

impl BaseUriResolver {
    /// Creates a resolver for `base`.
    ///
    /// # Errors
    /// - `InvalidBase` when `base` is not an absolute URI usable as a base.
    pub fn new(base: &str) -> Result<Self, ImageError> {
        let parsed = Url::parse(base.trim()).map_err(|err| ImageError::InvalidBase {
            base: base.to_string(),
            reason: err.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ImageError::InvalidBase {
                base: base.to_string(),
                reason: "uri cannot be a base".to_string(),
            });
        }
        Ok(Self { base: parsed })
    }

    /// Resolver rooted at the application package (`ms-appx:///`).
    pub fn app_package() -> Result<Self, ImageError> {
        Self::new(DEFAULT_IMAGE_BASE_URI)
    }

    pub fn base(&self) -> &str {
        self.base.as_str()
    }
}

impl ImageResolver for BaseUriResolver {
    fn resolve(&self, path: &str) -> Result<ImageHandle, ImageError> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(ImageError::EmptyPath);
        }
        let joined = self
            .base
            .join(trimmed)
            .map_err(|err| ImageError::InvalidPath {
                path: trimmed.to_string(),
                reason: err.to_string(),
            })?;
        Ok(ImageHandle::new(joined.as_str()))
    }
}
