use crate::{
    core::{constants::UNATTACHED_ID, geo::LatLng},
    icons::icon::Icon,
};

/// Id a map session assigns to an attached annotation; [`UNATTACHED_ID`] before that
pub type AnnotationId = i64;

/// Point annotation drawn by the renderer's symbol layer
#[derive(Debug, Clone)]
pub struct Marker {
    id: AnnotationId,
    position: LatLng,
    title: Option<String>,
    icon: Option<Icon>,
    top_offset_pixels: i32,
}

impl Marker {
    pub fn new(position: LatLng) -> Self {
        Self {
            id: UNATTACHED_ID,
            position,
            title: None,
            icon: None,
            top_offset_pixels: 0,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn id(&self) -> AnnotationId {
        self.id
    }

    /// Called by the map session when the marker is added
    pub fn set_id(&mut self, id: AnnotationId) {
        self.id = id;
    }

    pub fn is_attached(&self) -> bool {
        self.id != UNATTACHED_ID
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn set_position(&mut self, position: LatLng) {
        self.position = position;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn set_icon(&mut self, icon: Icon) {
        self.icon = Some(icon);
    }

    pub fn top_offset_pixels(&self) -> i32 {
        self.top_offset_pixels
    }

    pub fn set_top_offset_pixels(&mut self, pixels: i32) {
        self.top_offset_pixels = pixels;
    }
}

/// Annotation drawn as a platform view; always carries its own icon
#[derive(Debug, Clone)]
pub struct MarkerView {
    id: AnnotationId,
    position: LatLng,
    icon: Icon,
    top_offset_pixels: i32,
}

impl MarkerView {
    pub fn new(position: LatLng, icon: Icon) -> Self {
        Self {
            id: UNATTACHED_ID,
            position,
            icon,
            top_offset_pixels: 0,
        }
    }

    pub fn id(&self) -> AnnotationId {
        self.id
    }

    pub fn set_id(&mut self, id: AnnotationId) {
        self.id = id;
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    pub fn set_icon(&mut self, icon: Icon) {
        self.icon = icon;
    }

    pub fn top_offset_pixels(&self) -> i32 {
        self.top_offset_pixels
    }

    pub fn set_top_offset_pixels(&mut self, pixels: i32) {
        self.top_offset_pixels = pixels;
    }
}
