//! Icon values and the catalog that deduplicates them.

pub mod bitmap;
pub mod estimator;
pub mod factory;
pub mod icon;
pub mod registry;

pub use bitmap::Bitmap;
pub use estimator::SizeEstimator;
pub use factory::{ghost_icon, DefaultIconFactory};
pub use icon::{Icon, IconId};
pub use registry::{validate_unchanged, IconRegistry};
