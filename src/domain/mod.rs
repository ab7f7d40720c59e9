pub mod errors;
pub mod format;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod services;

pub use errors::*;
pub use format::*;
pub use models::*;
pub use normalize::*;
pub use services::*;
