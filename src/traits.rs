//! Collaborator trait abstractions
//!
//! The icon catalog talks to three things it does not own: the native
//! renderer, whoever builds default icons, and the map session that knows
//! which markers are attached.

use crate::{
    annotations::marker::{AnnotationId, Marker},
    icons::icon::Icon,
    prelude::HashMap,
    BridgeError, Result,
};

/// Foreign boundary to the renderer that owns the icon texture atlas
///
/// Calls are synchronous and run on the render thread. An `Err` means the
/// renderer state can no longer be trusted; callers never retry.
pub trait NativeBridge {
    /// Upload an icon: id, bitmap dimensions, scale and premultiplied RGBA8 bytes
    fn add_annotation_icon(
        &mut self,
        id: &str,
        width: u32,
        height: u32,
        scale: f32,
        bytes: &[u8],
    ) -> std::result::Result<(), BridgeError>;

    /// Vertical offset of the icon's symbol, in native (density independent) pixels.
    /// Expensive.
    fn top_offset_pixels_for_annotation_symbol(
        &mut self,
        id: &str,
    ) -> std::result::Result<f64, BridgeError>;

    /// Device pixel ratio of the surface
    fn pixel_ratio(&self) -> f32;
}

/// Source of default icons
pub trait IconFactory {
    /// Icon for markers created without one. Must return the same identity on
    /// every call so the catalog uploads it once.
    fn default_marker(&mut self) -> Result<Icon>;
}

/// Map-session lookup of attached markers by id
pub trait MarkerLookup {
    fn marker(&self, id: AnnotationId) -> Option<&Marker>;
}

impl MarkerLookup for HashMap<AnnotationId, Marker> {
    fn marker(&self, id: AnnotationId) -> Option<&Marker> {
        self.get(&id)
    }
}

impl<B: NativeBridge + ?Sized> NativeBridge for Box<B> {
    fn add_annotation_icon(
        &mut self,
        id: &str,
        width: u32,
        height: u32,
        scale: f32,
        bytes: &[u8],
    ) -> std::result::Result<(), BridgeError> {
        (**self).add_annotation_icon(id, width, height, scale, bytes)
    }

    fn top_offset_pixels_for_annotation_symbol(
        &mut self,
        id: &str,
    ) -> std::result::Result<f64, BridgeError> {
        (**self).top_offset_pixels_for_annotation_symbol(id)
    }

    fn pixel_ratio(&self) -> f32 {
        (**self).pixel_ratio()
    }
}
