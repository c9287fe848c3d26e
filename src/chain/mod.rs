//! Node probing subsystem.
//!
//! # Data Flow
//! ```text
//! NetworkConfig (rpc_url, timeout)
//!     → client.rs (provider with bounded reads)
//!     → detect.rs (base-fee heuristic)
//!     → FeeModel resolved and cached by the caller for the session
//! ```
//!
//! # Design Decisions
//! - One read-only network call per probe; no retries or failover
//! - Probe failure degrades to the legacy fee model, never aborts

pub mod client;
pub mod detect;

pub use client::{BlockHeader, BlockSource, ClientError, NodeClient};
pub use detect::detect_dynamic_fee_support;
