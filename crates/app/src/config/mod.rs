//! Application configuration
//!
//! Settings are read from CLI flags with environment fallbacks. A `.env` file
//! in the working directory is loaded first when present.

pub mod observability;
pub mod stylist;

pub use observability::{LogFormat, LoggingConfig};
pub use stylist::StylistConfig;

/// Load a `.env` file into the process environment, ignoring a missing file.
pub fn load_dotenv() {
    _ = dotenvy::dotenv();
}
