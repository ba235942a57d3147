//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the submit shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
///
/// Ctrl is accepted on every platform as well.
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the status bar
/// - macOS: "Cmd+Enter"
/// - Linux/Windows: "Ctrl+Enter"
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+Enter";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+Enter";

/// Fallback for terminals that do not report modified Enter
pub const SUBMIT_FALLBACK_SHORTCUT: &str = "Ctrl+S";
