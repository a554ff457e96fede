use once_cell::sync::Lazy;

use super::{
    bitmap::Bitmap,
    icon::{Icon, IconId},
};
use crate::{
    core::constants::{
        BYTES_PER_PIXEL, DEFAULT_MARKER_ICON_ID, GHOST_ICON_ID, GHOST_ICON_SIZE, ICON_ID_PREFIX,
        MARKER_ICON_COLOR, MARKER_ICON_SIZE,
    },
    traits::IconFactory,
    IconError, Result,
};

/// Built-in pin: a disc on top of a wedge that narrows to the bottom-center pixel.
static DEFAULT_MARKER_BITMAP: Lazy<Bitmap> = Lazy::new(|| {
    let (width, height) = MARKER_ICON_SIZE;
    let radius = width as f32 / 2.0;
    let mut pixels = vec![0u8; width as usize * height as usize * BYTES_PER_PIXEL];

    for y in 0..height {
        for x in 0..width {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let dx = px - radius;
            let dy = py - radius;
            let in_head = dx * dx + dy * dy <= radius * radius;
            // wedge half-width shrinks linearly from `radius` at the disc centre to 0 at the tip
            let in_tail = py >= radius
                && dx.abs() <= radius * (height as f32 - py) / (height as f32 - radius);
            if in_head || in_tail {
                let offset = (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL;
                pixels[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&MARKER_ICON_COLOR);
            }
        }
    }

    Bitmap::from_rgba8(width, height, pixels).expect("marker pin buffer matches its dimensions")
});

/// Transparent icon used by marker views to trace their marker
pub fn ghost_icon() -> Result<Icon> {
    let (width, height) = GHOST_ICON_SIZE;
    Ok(Icon::recreate(GHOST_ICON_ID, Bitmap::transparent(width, height)?))
}

/// Hands out icons with sequential ids at a fixed scale
#[derive(Debug)]
pub struct DefaultIconFactory {
    scale: f32,
    next_id: u64,
    default_marker: Option<Icon>,
}

impl DefaultIconFactory {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            next_id: 0,
            default_marker: None,
        }
    }

    /// Factory for a display with the given density scale
    pub fn with_scale(scale: f32) -> Result<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(IconError::InvalidScale(scale));
        }
        Ok(Self {
            scale,
            ..Self::new()
        })
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn icon_from_bitmap(&mut self, bitmap: Bitmap) -> Result<Icon> {
        let id = self.next_icon_id();
        Icon::new(id, bitmap, self.scale)
    }

    /// Decode an encoded asset into a fresh icon
    pub fn icon_from_bytes(&mut self, data: &[u8]) -> Result<Icon> {
        let bitmap = Bitmap::decode(data)?;
        self.icon_from_bitmap(bitmap)
    }

    fn next_icon_id(&mut self) -> IconId {
        let id = IconId::new(format!("{}{}", ICON_ID_PREFIX, self.next_id));
        self.next_id += 1;
        id
    }
}

impl Default for DefaultIconFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl IconFactory for DefaultIconFactory {
    fn default_marker(&mut self) -> Result<Icon> {
        if let Some(icon) = &self.default_marker {
            return Ok(icon.clone());
        }
        let icon = Icon::new(
            DEFAULT_MARKER_ICON_ID,
            DEFAULT_MARKER_BITMAP.clone(),
            self.scale,
        )?;
        self.default_marker = Some(icon.clone());
        Ok(icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut factory = DefaultIconFactory::new();
        let a = factory.icon_from_bitmap(Bitmap::transparent(1, 1).unwrap()).unwrap();
        let b = factory.icon_from_bitmap(Bitmap::transparent(1, 1).unwrap()).unwrap();
        assert_eq!(a.id().as_str(), "icon_0");
        assert_eq!(b.id().as_str(), "icon_1");
    }

    #[test]
    fn test_default_marker_keeps_identity() {
        let mut factory = DefaultIconFactory::with_scale(2.0).unwrap();
        let first = factory.default_marker().unwrap();
        let second = factory.default_marker().unwrap();

        assert!(first.same_identity(&second));
        assert_eq!(first.bitmap().dimensions(), MARKER_ICON_SIZE);
        assert_eq!(first.scale(), 2.0);
    }

    #[test]
    fn test_default_marker_pin_shape() {
        let mut factory = DefaultIconFactory::new();
        let pin = factory.default_marker().unwrap();
        let (w, h) = MARKER_ICON_SIZE;

        assert_eq!(pin.bitmap().pixel(w / 2, w / 2), Some(MARKER_ICON_COLOR));
        assert_eq!(pin.bitmap().pixel(0, h - 1), Some([0, 0, 0, 0]));
        assert_eq!(pin.bitmap().pixel(w - 1, h - 1), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_invalid_scale_rejected() {
        assert!(matches!(
            DefaultIconFactory::with_scale(0.0),
            Err(IconError::InvalidScale(_))
        ));
    }

    #[test]
    fn test_ghost_icon_is_transparent() {
        let ghost = ghost_icon().unwrap();
        assert_eq!(ghost.id().as_str(), GHOST_ICON_ID);
        assert!(ghost.to_bytes().iter().all(|&b| b == 0));
    }
}
