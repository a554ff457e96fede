//! Prelude module for common maplet-icons types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use maplet_icons::prelude::*;`

pub use crate::core::{config::IconManagerOptions, geo::LatLng};

pub use crate::icons::{
    Bitmap, DefaultIconFactory, Icon, IconId, IconRegistry, SizeEstimator,
};

pub use crate::annotations::{AnnotationId, IconManager, Marker, MarkerView};

pub use crate::native::{BridgeCall, NativeBridgeAdapter, RecordingBridge};

pub use crate::traits::{IconFactory, MarkerLookup, NativeBridge};

pub use crate::{BridgeError, Error as IconError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet, FxHasher};
