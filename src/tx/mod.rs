//! Transaction construction subsystem.
//!
//! # Data Flow
//! ```text
//! caller intent (recipient, amount, gas budget, payload)
//!     → units.rs (ether/gwei → wei normalization)
//!     → builder.rs (fee-model branch, field assembly)
//!     → UnsignedTransaction (legacy or dynamic-fee record)
//!     → signing collaborator (outside this crate)
//! ```
//!
//! # Design Decisions
//! - Exactly one fee representation per record, chosen at construction
//! - Builders take nonce and gas limit as arguments; sequencing and
//!   estimation live with the caller
//! - Recipient decoding is the only fallible step in assembly

pub mod builder;
pub mod hash;
pub mod types;

pub use builder::TxBuilder;
pub use hash::raw_tx_hash;
pub use types::{ChainId, DecodeError, UnsignedTransaction};
