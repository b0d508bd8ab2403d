//! Neovim integration layer for the Plume editor shell.
//!
//! This crate bridges editor lifecycle notifications to shell subscribers:
//! - `NvimApi` - the async seam to the embedded editor process
//! - `AutoCommands` - typed channels for the known autocommand events
//! - `NvimSession` - channel-backed `NvimApi` over a pluggable transport
//!
//! The concrete RPC transport to the editor is out of scope and stays
//! behind the `NvimTransport` trait.

pub mod api;
pub mod autocmd;
pub mod context;
pub mod session;

pub use api::NvimApi;
pub use autocmd::AutoCommands;
pub use context::EventContext;
pub use session::{NvimSession, NvimTransport};

// Re-export plume_core types for convenience
pub use plume_core::{Event, NvimError, Subscription};
