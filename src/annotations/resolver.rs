use crate::{
    core::{config::IconManagerOptions, constants::GHOST_ICON_SAMPLE},
    icons::{
        estimator::SizeEstimator,
        factory::{ghost_icon, DefaultIconFactory},
        icon::{Icon, IconId},
        registry::IconRegistry,
    },
    native::adapter::NativeBridgeAdapter,
    traits::{IconFactory, MarkerLookup, NativeBridge},
    Result,
};

use super::marker::{Marker, MarkerView};

/// Icons added to one map session.
///
/// Deduplicates icons by id, uploads each one to the renderer once, keeps the
/// average icon size used to size touch targets, and hands markers their
/// default icon and top offset. Each map session owns its own manager; it is
/// not synchronized and must stay on the render thread.
#[derive(Debug)]
pub struct IconManager<B, F = DefaultIconFactory> {
    registry: IconRegistry,
    estimator: SizeEstimator,
    native: NativeBridgeAdapter<B>,
    factory: F,
    options: IconManagerOptions,
}

impl<B: NativeBridge, F: IconFactory> IconManager<B, F> {
    pub fn new(bridge: B, factory: F) -> Result<Self> {
        Self::with_options(bridge, factory, IconManagerOptions::default())
    }

    pub fn with_options(bridge: B, factory: F, options: IconManagerOptions) -> Result<Self> {
        let native =
            NativeBridgeAdapter::new(bridge).with_pixel_ratio_override(options.pixel_ratio_override);
        let mut manager = Self {
            registry: IconRegistry::new(),
            estimator: SizeEstimator::new(),
            native,
            factory,
            options,
        };

        if manager.options.seed_ghost_icon {
            // marker views trace their marker through this invisible icon
            manager.insert(ghost_icon()?, GHOST_ICON_SAMPLE, true)?;
        }
        Ok(manager)
    }

    /// Register `icon` directly, sampling its real size
    pub fn add_icon(&mut self, icon: Icon) -> Result<()> {
        let sample = (icon.width(), icon.height());
        self.insert(icon, sample, true)
    }

    /// Resolve and register the icon of `marker`, giving it the default icon
    /// when it has none
    pub fn load_icon_for_marker(&mut self, marker: &mut Marker) -> Result<Icon> {
        let (icon, sample) = self.resolve_marker_icon(marker)?;
        self.insert(icon.clone(), sample, true)?;
        Ok(icon)
    }

    pub fn load_icon_for_marker_view(&mut self, view: &MarkerView) -> Result<()> {
        let icon = view.icon();
        let sample = (icon.width(), icon.height());
        let upload = self.options.upload_marker_view_icons;
        self.insert(icon.clone(), sample, upload)
    }

    /// Make sure the marker's icon is registered and its top offset is current.
    ///
    /// The offset query is skipped when the copy of this marker attached to
    /// `map` already shows the same icon.
    pub fn ensure_icon_loaded<M>(&mut self, marker: &mut Marker, map: &M) -> Result<()>
    where
        M: MarkerLookup + ?Sized,
    {
        let previous = if marker.is_attached() {
            map.marker(marker.id())
                .and_then(|attached| attached.icon())
                .map(|icon| icon.id().clone())
        } else {
            None
        };
        self.ensure_icon_loaded_since(marker, previous.as_ref())
    }

    /// Like [`IconManager::ensure_icon_loaded`], comparing against the icon id
    /// the marker showed last (`None` when unattached or iconless)
    pub fn ensure_icon_loaded_since(
        &mut self,
        marker: &mut Marker,
        previous_icon: Option<&IconId>,
    ) -> Result<()> {
        let (icon, sample) = self.resolve_marker_icon(marker)?;
        self.insert(icon.clone(), sample, true)?;

        if previous_icon != Some(icon.id()) {
            let offset = self.native.top_offset_pixels(&icon)?;
            marker.set_top_offset_pixels(offset);
        }
        Ok(())
    }

    /// Top offset of `icon` in device pixels. Queries the renderer every time.
    pub fn top_offset_pixels_for_icon(&mut self, icon: &Icon) -> Result<i32> {
        self.native.top_offset_pixels(icon)
    }

    /// Upload every registered icon again, in registration order.
    ///
    /// For a recreated render surface; the catalog and averages are untouched.
    pub fn reload_icons(&mut self) -> Result<()> {
        log::info!("reloading {} annotation icons", self.registry.len());
        for icon in self.registry.iter() {
            self.native.register(icon)?;
        }
        Ok(())
    }

    pub fn average_icon_width(&self) -> i32 {
        self.estimator.average_width()
    }

    pub fn average_icon_height(&self) -> i32 {
        self.estimator.average_height()
    }

    pub fn icons(&self) -> &[Icon] {
        self.registry.all()
    }

    pub fn icon_count(&self) -> usize {
        self.registry.len()
    }

    pub fn contains(&self, icon: &Icon) -> bool {
        self.registry.contains(icon)
    }

    pub fn options(&self) -> &IconManagerOptions {
        &self.options
    }

    pub fn bridge(&self) -> &B {
        self.native.bridge()
    }

    pub fn bridge_mut(&mut self) -> &mut B {
        self.native.bridge_mut()
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    fn resolve_marker_icon(&mut self, marker: &mut Marker) -> Result<(Icon, (u32, u32))> {
        if let Some(icon) = marker.icon() {
            return Ok((icon.clone(), (icon.width(), icon.height())));
        }

        let icon = self.factory.default_marker()?;
        // No anchor model yet: sampling half the height approximates a
        // bottom-center anchor for the touch target.
        let sample = (icon.width(), icon.height() / 2);
        marker.set_icon(icon.clone());
        Ok((icon, sample))
    }

    /// First sighting of an id samples its size and optionally uploads it;
    /// repeats only run the content check.
    fn insert(&mut self, icon: Icon, (width, height): (u32, u32), upload: bool) -> Result<()> {
        if !self.registry.add(icon.clone())? {
            return Ok(());
        }
        log::debug!("registered icon {} (#{})", icon.id(), self.registry.len());
        self.estimator.update(width, height);
        if upload {
            self.native.register(&icon)?;
        }
        Ok(())
    }
}
