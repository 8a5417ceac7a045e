//! Dataset models and `db.json` persistence

pub mod lenient;
pub mod models;
pub mod store;

pub use lenient::LenientVec;
pub use models::*;
pub use store::*;
