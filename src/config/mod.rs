//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → BuilderConfig (validated, immutable)
//!     → chain_id + FeeSettings handed to TxBuilder
//!     → NetworkConfig handed to NodeClient
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a network switch means loading a
//!   new config and creating a new builder session
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::BuilderConfig;
pub use schema::FeeModel;
pub use schema::FeeSettings;
pub use schema::NetworkConfig;
