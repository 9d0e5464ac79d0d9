//! Store configuration loading.
//!
//! Store settings come from the setup wizard as a YAML file and are
//! validated into a [`StoreConfig`] before use.
//!
//! # Example
//!
//! ```no_run
//! use shift_datetime::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Today at {}: {}", config.store().name(), config.store().today_date_key());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, STORE_FILE_NAME};
pub use types::{StoreConfig, StoreFile};
