pub mod error;
pub mod types;

pub use error::ServiceError;
pub use types::{coerce_f64, coerce_u32, format_code, now_rfc3339};
