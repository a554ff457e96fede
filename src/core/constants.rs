//! Core constants for the icon catalog.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Reserved id of the transparent icon that marker views use to trace their
/// underlying marker.
pub const GHOST_ICON_ID: &str = "icon_marker_view_ghost";

/// Ghost icon bitmap size in pixels.
pub const GHOST_ICON_SIZE: (u32, u32) = (1, 1);

/// Size sample the ghost contributes to the running average. It is invisible,
/// so it never widens a touch target.
pub const GHOST_ICON_SAMPLE: (u32, u32) = (0, 0);

/// Prefix for ids handed out by [`crate::icons::factory::DefaultIconFactory`].
pub const ICON_ID_PREFIX: &str = "icon_";

/// Id of the built-in default marker.
pub const DEFAULT_MARKER_ICON_ID: &str = "icon_default_marker";

/// Marker icon default size (regular PNG).
pub const MARKER_ICON_SIZE: (u32, u32) = (25, 41);

/// Fill colour of the built-in marker pin (RGBA).
pub const MARKER_ICON_COLOR: [u8; 4] = [0x2a, 0x81, 0xcb, 0xff];

/// Attachment id of a marker that has not been added to a map yet.
pub const UNATTACHED_ID: i64 = -1;

/// Bytes per pixel of the RGBA8 payload handed to the renderer.
pub const BYTES_PER_PIXEL: usize = 4;
