use crate::{icons::icon::Icon, traits::NativeBridge, Result};

/// Projects icons into the renderer's symbol system
#[derive(Debug)]
pub struct NativeBridgeAdapter<B> {
    bridge: B,
    pixel_ratio_override: Option<f32>,
}

impl<B: NativeBridge> NativeBridgeAdapter<B> {
    pub fn new(bridge: B) -> Self {
        Self {
            bridge,
            pixel_ratio_override: None,
        }
    }

    pub fn with_pixel_ratio_override(mut self, ratio: Option<f32>) -> Self {
        self.pixel_ratio_override = ratio;
        self
    }

    /// Upload `icon` to the renderer's atlas
    pub fn register(&mut self, icon: &Icon) -> Result<()> {
        let bitmap = icon.bitmap();
        log::debug!(
            "uploading icon {} ({}x{} @{}x, {} bytes)",
            icon.id(),
            bitmap.width(),
            bitmap.height(),
            icon.scale(),
            bitmap.byte_count()
        );
        self.bridge.add_annotation_icon(
            icon.id().as_str(),
            bitmap.width(),
            bitmap.height(),
            icon.scale(),
            icon.to_bytes(),
        )?;
        Ok(())
    }

    /// Top offset of `icon` in device pixels, truncated
    pub fn top_offset_pixels(&mut self, icon: &Icon) -> Result<i32> {
        let offset = self
            .bridge
            .top_offset_pixels_for_annotation_symbol(icon.id().as_str())?;
        Ok((offset * self.pixel_ratio() as f64) as i32)
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio_override
            .unwrap_or_else(|| self.bridge.pixel_ratio())
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }

    pub fn into_inner(self) -> B {
        self.bridge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        icons::bitmap::Bitmap,
        native::recording::{BridgeCall, RecordingBridge},
        BridgeError, IconError,
    };

    fn icon() -> Icon {
        Icon::new("pin", Bitmap::from_rgba8(2, 1, (0..8).collect()).unwrap(), 1.5).unwrap()
    }

    #[test]
    fn test_register_passes_id_dimensions_scale_and_bytes() {
        let mut adapter = NativeBridgeAdapter::new(RecordingBridge::new());
        adapter.register(&icon()).unwrap();

        assert_eq!(
            adapter.bridge().calls(),
            &[BridgeCall::AddAnnotationIcon {
                id: "pin".to_string(),
                width: 2,
                height: 1,
                scale: 1.5,
                bytes: (0..8).collect(),
            }]
        );
    }

    #[test]
    fn test_top_offset_scaled_by_pixel_ratio_and_truncated() {
        let bridge = RecordingBridge::with_pixel_ratio(3.0).with_top_offset("pin", -10.4);
        let mut adapter = NativeBridgeAdapter::new(bridge);
        // -31.2 truncates toward zero
        assert_eq!(adapter.top_offset_pixels(&icon()).unwrap(), -31);
        assert_eq!(adapter.bridge().top_offset_queries(), 1);
    }

    #[test]
    fn test_pixel_ratio_override_wins() {
        let bridge = RecordingBridge::with_pixel_ratio(3.0).with_top_offset("pin", 10.0);
        let mut adapter = NativeBridgeAdapter::new(bridge).with_pixel_ratio_override(Some(1.0));
        assert_eq!(adapter.top_offset_pixels(&icon()).unwrap(), 10);
    }

    #[test]
    fn test_bridge_failure_propagates() {
        let mut bridge = RecordingBridge::new();
        bridge.fail_with(BridgeError::Unavailable);
        let mut adapter = NativeBridgeAdapter::new(bridge);

        assert!(matches!(
            adapter.register(&icon()),
            Err(IconError::Bridge(BridgeError::Unavailable))
        ));
    }
}
