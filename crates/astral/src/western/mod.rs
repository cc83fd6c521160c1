pub mod rulers;
pub mod zodiac;

pub use rulers::{sign_ruler, sign_ruler_from_longitude};
pub use zodiac::{normalize_degrees, resolve, Sign, SIGN_ORDER};
