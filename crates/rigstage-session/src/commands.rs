//! Command registry and keyboard shortcut map.
//!
//! Every user-facing action is a `Command` with an ID, display name,
//! shortcut, and context-dependent availability. The session dispatches
//! on IDs; the registry is the single source for which key does what.

use std::collections::HashMap;

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub command: bool, // ⌘ on macOS
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
        command: false,
    };
    pub const CMD: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
        command: true,
    };
}

/// A keyboard shortcut (modifier + key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub modifiers: Modifiers,
    pub key: String,
}

impl Shortcut {
    pub fn new(modifiers: Modifiers, key: impl Into<String>) -> Self {
        Self {
            modifiers,
            key: key.into(),
        }
    }

    /// Format for display: "⌘S", "Space", etc.
    pub fn display(&self) -> String {
        let mut s = String::new();
        if self.modifiers.ctrl {
            s.push('⌃');
        }
        if self.modifiers.alt {
            s.push('⌥');
        }
        if self.modifiers.shift {
            s.push('⇧');
        }
        if self.modifiers.command {
            s.push('⌘');
        }
        s.push_str(&self.key);
        s
    }
}

/// Contexts in which a command may be available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandContext {
    /// Always available.
    Global,
    /// Only when a clip is selected.
    ClipSelected,
    /// Only during playback.
    Playing,
}

/// A registered command.
#[derive(Debug, Clone)]
pub struct Command {
    /// Unique command ID (e.g., "edit.copy").
    pub id: &'static str,
    /// Display name (e.g., "Copy Clip").
    pub name: &'static str,
    /// Category for grouping in menus.
    pub category: &'static str,
    /// Keyboard shortcut (if any).
    pub shortcut: Option<Shortcut>,
    /// Contexts in which this command is available.
    pub contexts: &'static [CommandContext],
}

/// Central registry of all commands.
pub struct CommandRegistry {
    commands: Vec<Command>,
    by_id: HashMap<&'static str, usize>,
    by_shortcut: HashMap<Shortcut, usize>,
}

impl CommandRegistry {
    /// Create a new registry with all built-in commands.
    pub fn new() -> Self {
        let mut reg = Self {
            commands: Vec::new(),
            by_id: HashMap::new(),
            by_shortcut: HashMap::new(),
        };
        reg.register_builtins();
        reg
    }

    /// Register a command.
    pub fn register(&mut self, cmd: Command) {
        let idx = self.commands.len();
        self.by_id.insert(cmd.id, idx);
        if let Some(ref shortcut) = cmd.shortcut {
            self.by_shortcut.insert(shortcut.clone(), idx);
        }
        self.commands.push(cmd);
    }

    /// Look up a command by ID.
    pub fn get(&self, id: &str) -> Option<&Command> {
        self.by_id.get(id).map(|&i| &self.commands[i])
    }

    /// Look up a command by shortcut.
    pub fn get_by_shortcut(&self, shortcut: &Shortcut) -> Option<&Command> {
        self.by_shortcut.get(shortcut).map(|&i| &self.commands[i])
    }

    /// All registered commands.
    pub fn all(&self) -> &[Command] {
        &self.commands
    }

    /// Commands available under the given active contexts.
    pub fn available(&self, contexts: &[CommandContext]) -> Vec<&Command> {
        self.commands
            .iter()
            .filter(|cmd| is_available(cmd, contexts))
            .collect()
    }

    fn register_builtins(&mut self) {
        use CommandContext::*;

        self.register(Command {
            id: "file.save",
            name: "Save Project",
            category: "File",
            shortcut: Some(Shortcut::new(Modifiers::CMD, "S")),
            contexts: &[Global],
        });

        self.register(Command {
            id: "edit.copy",
            name: "Copy Clip",
            category: "Edit",
            shortcut: Some(Shortcut::new(Modifiers::CMD, "C")),
            contexts: &[ClipSelected],
        });
        self.register(Command {
            id: "edit.paste",
            name: "Paste Clip",
            category: "Edit",
            shortcut: Some(Shortcut::new(Modifiers::CMD, "V")),
            contexts: &[Global],
        });
        self.register(Command {
            id: "edit.duplicate",
            name: "Duplicate Clip",
            category: "Edit",
            shortcut: Some(Shortcut::new(Modifiers::CMD, "D")),
            contexts: &[ClipSelected],
        });
        self.register(Command {
            id: "edit.delete",
            name: "Delete Clip",
            category: "Edit",
            shortcut: Some(Shortcut::new(Modifiers::NONE, "Delete")),
            contexts: &[ClipSelected],
        });

        self.register(Command {
            id: "transport.play_pause",
            name: "Play/Pause",
            category: "Transport",
            shortcut: Some(Shortcut::new(Modifiers::NONE, "Space")),
            contexts: &[Global],
        });
        self.register(Command {
            id: "transport.stop",
            name: "Stop",
            category: "Transport",
            shortcut: Some(Shortcut::new(Modifiers::NONE, "Escape")),
            contexts: &[Playing],
        });
        self.register(Command {
            id: "transport.prev_frame",
            name: "Previous Frame",
            category: "Transport",
            shortcut: Some(Shortcut::new(Modifiers::NONE, "Left")),
            contexts: &[Global],
        });
        self.register(Command {
            id: "transport.next_frame",
            name: "Next Frame",
            category: "Transport",
            shortcut: Some(Shortcut::new(Modifiers::NONE, "Right")),
            contexts: &[Global],
        });
        self.register(Command {
            id: "transport.goto_start",
            name: "Go to Start",
            category: "Transport",
            shortcut: Some(Shortcut::new(Modifiers::NONE, "Home")),
            contexts: &[Global],
        });
        self.register(Command {
            id: "transport.goto_end",
            name: "Go to End",
            category: "Transport",
            shortcut: Some(Shortcut::new(Modifiers::NONE, "End")),
            contexts: &[Global],
        });

        self.register(Command {
            id: "timeline.split",
            name: "Split at Playhead",
            category: "Timeline",
            shortcut: Some(Shortcut::new(Modifiers::NONE, "X")),
            contexts: &[ClipSelected],
        });
        self.register(Command {
            id: "timeline.clear",
            name: "Clear Timeline",
            category: "Timeline",
            shortcut: None,
            contexts: &[Global],
        });
        self.register(Command {
            id: "timeline.zoom_in",
            name: "Zoom In",
            category: "Timeline",
            shortcut: Some(Shortcut::new(Modifiers::CMD, "=")),
            contexts: &[Global],
        });
        self.register(Command {
            id: "timeline.zoom_out",
            name: "Zoom Out",
            category: "Timeline",
            shortcut: Some(Shortcut::new(Modifiers::CMD, "-")),
            contexts: &[Global],
        });
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a command is available in the given contexts.
fn is_available(cmd: &Command, active_contexts: &[CommandContext]) -> bool {
    if cmd.contexts.contains(&CommandContext::Global) {
        return true;
    }
    cmd.contexts.iter().any(|c| active_contexts.contains(c))
}
