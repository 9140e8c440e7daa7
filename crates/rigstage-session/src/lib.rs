//! Rigstage Session - the editor glued together
//!
//! Owns the timeline, playback, clipboard, and persistence, and exposes
//! them through a command registry. Background work (autosave, the
//! playback tick loop) runs on tokio tasks owned by handle types that
//! abort their task on drop.

pub mod autosave;
pub mod commands;
pub mod driver;
pub mod session;
pub mod storage;

pub use autosave::{AutosaveTask, AUTOSAVE_INTERVAL};
pub use commands::{Command, CommandContext, CommandRegistry, Modifiers, Shortcut};
pub use driver::PlaybackDriver;
pub use session::{await_system, init_tracing, now_millis, Session, IDLE_ANIMATION};
pub use storage::{
    FileSlotStore, MemorySlotStore, ProjectStorage, SlotStore, SLOT_AUTOSAVE, SLOT_PROJECTS,
    SLOT_SEQUENCES,
};
