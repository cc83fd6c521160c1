pub mod detector;
pub mod types;

pub use detector::{angular_separation, AspectDetector, EclipticBody};
pub use types::{Aspect, AspectKind, AspectSettings, OrbSettings, ASPECT_KINDS};
