//! Point annotations and the icon manager that resolves their icons.

pub mod marker;
pub mod resolver;

pub use marker::{AnnotationId, Marker, MarkerView};
pub use resolver::IconManager;
