//! TetriX (workspace facade crate).
//!
//! Re-exports the workspace crates as `tetrix::{core,input,term,types}` and
//! holds the pieces the binary wires together: environment configuration, the
//! persistence store and the session driver.

pub mod config;
pub mod session;
pub mod store;

pub use tetrix_core as core;
pub use tetrix_input as input;
pub use tetrix_term as term;
pub use tetrix_types as types;

pub use config::AppConfig;
pub use session::{CommandSender, PumpReport, Session};
pub use store::{Store, StoreData};
