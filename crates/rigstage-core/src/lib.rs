//! Rigstage Core - Foundation types for the animation timeline engine
//!
//! This crate provides the fundamental types used throughout Rigstage:
//! - Time representation (Time, TickRate, TimeSpan)
//! - The shared error taxonomy (RigstageError, Result)

pub mod error;
pub mod time;

pub use error::{Result, RigstageError};
pub use time::{TickRate, Time, TimeSpan};
