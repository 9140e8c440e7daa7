//! Integration test crate for Rigstage.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on multiple rigstage crates to verify they work together.

#[cfg(test)]
mod helpers;

#[cfg(test)]
mod timeline;

#[cfg(test)]
mod playback;

#[cfg(test)]
mod persistence;
