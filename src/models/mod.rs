pub mod endpoint;
pub mod error;

pub use endpoint::Endpoint;
pub use error::ApiError;
