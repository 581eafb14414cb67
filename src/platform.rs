//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for generate/copy shortcuts
/// - macOS: SUPER (Cmd key), Ctrl is accepted as well
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Generate shortcut display for help text
#[cfg(target_os = "macos")]
pub const GENERATE_SHORTCUT: &str = "Cmd+G";

#[cfg(not(target_os = "macos"))]
pub const GENERATE_SHORTCUT: &str = "Ctrl+G";

/// Copy shortcut display for help text
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "Ctrl+Y";

/// True when `modifiers` hold the shortcut modifier (Ctrl always works)
pub fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(SHORTCUT_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}
