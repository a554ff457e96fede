use maplet_icons::prelude::*;

/// Drives the icon catalog against the recording bridge, without any renderer
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    println!("Maplet icons headless example");
    println!("=============================");

    let bridge = RecordingBridge::with_pixel_ratio(2.0).with_top_offset("icon_default_marker", -20.5);
    let mut factory = DefaultIconFactory::with_scale(2.0)?;
    let harbour = factory.icon_from_bitmap(Bitmap::from_rgba8(16, 16, vec![0x80; 16 * 16 * 4])?)?;

    let mut manager = IconManager::with_options(bridge, factory, IconManagerOptions::headless())?;
    let mut map: HashMap<AnnotationId, Marker> = HashMap::default();

    let places = [
        ("New York", LatLng::new(40.7128, -74.0060), None),
        ("London", LatLng::new(51.5074, -0.1278), Some(harbour.clone())),
        ("Tokyo", LatLng::new(35.6762, 139.6503), None),
    ];

    for (id, (name, position, icon)) in places.into_iter().enumerate() {
        let mut marker = Marker::new(position).with_title(name);
        if let Some(icon) = icon {
            marker.set_icon(icon);
        }
        manager.ensure_icon_loaded(&mut marker, &map)?;
        marker.set_id(id as AnnotationId);
        println!(
            "   {} -> icon {} (top offset {}px)",
            name,
            marker.icon().map(|i| i.id().as_str()).unwrap_or("-"),
            marker.top_offset_pixels()
        );
        map.insert(marker.id(), marker);
    }

    let view = MarkerView::new(LatLng::new(48.8566, 2.3522), harbour);
    manager.load_icon_for_marker_view(&view)?;

    println!(
        "\n{} icons registered, average size {}x{}",
        manager.icon_count(),
        manager.average_icon_width(),
        manager.average_icon_height()
    );

    // pretend the GL context was lost
    manager.bridge_mut().clear();
    manager.reload_icons()?;
    println!("reload uploaded: {:?}", manager.bridge().registered_ids());

    Ok(())
}
