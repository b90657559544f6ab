//! Key bindings shown in the front end's help overlay.

/// One line of the help overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    pub key: &'static str,
    pub action: &'static str,
}

pub const HELP: &[HelpEntry] = &[
    HelpEntry { key: "Arrow keys", action: "Move selection" },
    HelpEntry { key: "a", action: "Add card" },
    HelpEntry { key: "d", action: "Delete card" },
    HelpEntry { key: "e", action: "Edit card" },
    HelpEntry { key: "m", action: "Move card right" },
    HelpEntry { key: "b", action: "Move card left" },
    HelpEntry { key: "c", action: "Add column" },
    HelpEntry { key: "[", action: "Move column left" },
    HelpEntry { key: "]", action: "Move column right" },
    HelpEntry { key: "s", action: "Save board" },
    HelpEntry { key: "o", action: "Open board" },
    HelpEntry { key: "z", action: "Undo" },
    HelpEntry { key: "x", action: "Redo" },
    HelpEntry { key: "p", action: "Change card priority" },
    HelpEntry { key: "h", action: "Show this help menu" },
    HelpEntry { key: "q", action: "Quit" },
];

/// Help overlay lines, formatted as `  key: action`
pub fn help_lines() -> Vec<String> {
    let mut lines = vec!["Keybinds:".to_string()];
    lines.extend(
        HELP.iter()
            .map(|entry| format!("  {}: {}", entry.key, entry.action)),
    );
    lines
}
