//! Configuration and seeding for the salary engine.
//!
//! Server settings come from environment variables; the optional YAML
//! seed file supplies the sample records inserted on first start against
//! an empty store.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::AppConfig;
//!
//! let config = AppConfig::from_env().unwrap();
//! println!("binding on {}", config.bind_addr);
//! ```

mod loader;
mod types;

pub use loader::{SeedDesignation, SeedEmployee, SeedFile, seed_if_empty};
pub use types::{AppConfig, BIND_VAR, SCHEMA_VAR, SEED_VAR};
