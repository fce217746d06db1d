mod config;
mod error;
mod session;
pub use config::*;
pub use error::*;
pub use session::*;
