//! Pure action determination for estimator keyboard handling.
//!
//! `determine_action` maps a key plus a small context to an [`Action`];
//! [`super::app::EstimatorApp::dispatch`] performs the mutation. Keeping the
//! mapping pure lets it be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User intents in the estimator view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,

    /// Move focus to the previous control.
    FocusPrevious,

    /// Move focus to the next control.
    FocusNext,

    /// Step the focused control up (slider), forward (zone) or flip (toggle).
    Increase,

    /// Step the focused control down (slider), back (zone) or flip (toggle).
    Decrease,

    /// Flip the prototype toggle when focused; cycle the zone forward.
    Activate,

    /// Restore every input to its starting value.
    Reset,

    /// Show or hide the key reference.
    ToggleHelp,
}

/// Context needed to decide which keys are live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionContext {
    /// Whether the help overlay is covering the view.
    pub help_visible: bool,
}

/// Pure function: determine which action a key triggers.
///
/// While help is visible only quitting and closing help are live, so a
/// stray key cannot change an input the user cannot see.
pub fn determine_action(key: KeyEvent, ctx: ActionContext) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    if ctx.help_visible {
        return match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter => Some(Action::ToggleHelp),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => Some(Action::FocusPrevious),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => Some(Action::FocusNext),

        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => Some(Action::Increase),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => Some(Action::Decrease),

        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Activate),

        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('?') => Some(Action::ToggleHelp),

        _ => None,
    }
}

/// Key reference shown in the help overlay, in display order.
pub const KEY_HELP: &[(&str, &str)] = &[
    ("↑/↓  k/j  Tab", "Move focus"),
    ("←/→  h/l  -/+", "Adjust focused control"),
    ("Space  Enter", "Toggle prototype / next zone"),
    ("r", "Reset all inputs"),
    ("?", "Show or hide this help"),
    ("q  Esc  Ctrl+C", "Quit"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_vim_keys_agree() {
        let ctx = ActionContext::default();
        assert_eq!(determine_action(key(KeyCode::Up), ctx), Some(Action::FocusPrevious));
        assert_eq!(
            determine_action(key(KeyCode::Char('k')), ctx),
            Some(Action::FocusPrevious)
        );
        assert_eq!(determine_action(key(KeyCode::Right), ctx), Some(Action::Increase));
        assert_eq!(determine_action(key(KeyCode::Char('h')), ctx), Some(Action::Decrease));
    }

    #[test]
    fn ctrl_c_quits_even_with_help_open() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctx = ActionContext { help_visible: true };
        assert_eq!(determine_action(ctrl_c, ctx), Some(Action::Quit));
    }

    #[test]
    fn help_overlay_blocks_input_changes() {
        let ctx = ActionContext { help_visible: true };
        assert_eq!(determine_action(key(KeyCode::Right), ctx), None);
        assert_eq!(determine_action(key(KeyCode::Char('r')), ctx), None);
        assert_eq!(determine_action(key(KeyCode::Esc), ctx), Some(Action::ToggleHelp));
    }

    #[test]
    fn plain_c_does_nothing() {
        assert_eq!(
            determine_action(key(KeyCode::Char('c')), ActionContext::default()),
            None
        );
    }

    proptest! {
        #[test]
        fn help_overlay_never_yields_input_changes(c in any::<char>()) {
            let ctx = ActionContext { help_visible: true };
            let action = determine_action(key(KeyCode::Char(c)), ctx);
            prop_assert!(matches!(action, None | Some(Action::Quit) | Some(Action::ToggleHelp)));
        }
    }
}
