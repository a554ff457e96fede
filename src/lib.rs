//! # maplet-icons
//!
//! Icon catalog for point annotations on an interactive map.
//!
//! Icons are deduplicated by id and uploaded to the native renderer once per
//! id. Re-registering an id with different pixels is an error, since the
//! uploaded texture would silently go stale. The catalog also keeps a running
//! average icon size for gesture code and resolves default icons and top
//! offsets for markers.

pub mod annotations;
pub mod core;
pub mod icons;
pub mod native;
pub mod prelude;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{config::IconManagerOptions, geo::LatLng};

pub use icons::{Bitmap, DefaultIconFactory, Icon, IconId, IconRegistry, SizeEstimator};

pub use annotations::{AnnotationId, IconManager, Marker, MarkerView};

pub use native::{NativeBridgeAdapter, RecordingBridge};

pub use traits::{IconFactory, MarkerLookup, NativeBridge};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, IconError>;

/// Errors raised by the icon catalog
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("Icon {id} changed its bitmap after it was registered")]
    IconContentChanged { id: IconId },

    #[error("Native bridge error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("Invalid bitmap: {0}")]
    InvalidBitmap(String),

    #[error("Invalid icon scale: {0}")]
    InvalidScale(f32),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Failure reported by a [`NativeBridge`] implementation. Never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BridgeError {
    #[error("native renderer unavailable")]
    Unavailable,

    #[error("{call} failed: {reason}")]
    Call { call: String, reason: String },
}

impl BridgeError {
    pub fn call(call: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Call {
            call: call.into(),
            reason: reason.into(),
        }
    }
}

/// Error type alias for convenience
pub type Error = IconError;
