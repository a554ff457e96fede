//! Bridge between the icon catalog and the native renderer.

pub mod adapter;
pub mod recording;

pub use adapter::NativeBridgeAdapter;
pub use recording::{BridgeCall, RecordingBridge};
