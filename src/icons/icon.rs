use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

use super::bitmap::Bitmap;
use crate::{IconError, Result};

/// Stable, externally assigned icon identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IconId(String);

impl IconId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IconId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for IconId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Bitmap plus scale plus identity.
///
/// Cloning is cheap; clones share the bitmap. Two icons are the same icon
/// when their ids match ([`Icon::same_identity`]), whatever their pixels.
#[derive(Debug, Clone)]
pub struct Icon {
    id: IconId,
    bitmap: Arc<Bitmap>,
    scale: f32,
}

impl Icon {
    pub fn new(id: impl Into<IconId>, bitmap: Bitmap, scale: f32) -> Result<Self> {
        Ok(Self {
            id: id.into(),
            bitmap: Arc::new(bitmap),
            scale: validate_scale(scale)?,
        })
    }

    /// Rebuild an icon with a fixed id at scale 1.0
    pub fn recreate(id: impl Into<IconId>, bitmap: Bitmap) -> Self {
        Self {
            id: id.into(),
            bitmap: Arc::new(bitmap),
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Result<Self> {
        self.scale = validate_scale(scale)?;
        Ok(self)
    }

    pub fn id(&self) -> &IconId {
        &self.id
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    /// Byte payload handed to the native renderer
    pub fn to_bytes(&self) -> &[u8] {
        self.bitmap.to_bytes()
    }

    pub fn same_identity(&self, other: &Icon) -> bool {
        self.id == other.id
    }
}

fn validate_scale(scale: f32) -> Result<f32> {
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(IconError::InvalidScale(scale))
    }
}
