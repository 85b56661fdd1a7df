//! Keyboard shortcuts

use crate::view::View;

/// Action requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CloseModal,
    PrevImage,
    NextImage,
    BackToHome,
    SwitchTab(View),
    /// Toggle "reveal all" (only honoured on the story view)
    ToggleRevealAll,
}

/// Where the key press happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyContext {
    /// Focus is in an `<input>` or `<textarea>`
    pub typing: bool,
    /// View currently active
    pub active_view: Option<View>,
}

impl KeyContext {
    /// Build from the focused element's tag name (`INPUT`, `TEXTAREA`, ...).
    pub fn from_tag(tag: &str, active_view: Option<View>) -> Self {
        let typing = tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea");
        Self {
            typing,
            active_view,
        }
    }
}

/// Map a `KeyboardEvent.key` value to a command.
///
/// Modal keys work everywhere; navigation keys are ignored while typing.
pub fn command_for(key: &str, ctx: KeyContext) -> Option<Command> {
    match key {
        "Escape" => return Some(Command::CloseModal),
        "ArrowLeft" => return Some(Command::PrevImage),
        "ArrowRight" => return Some(Command::NextImage),
        _ => {}
    }

    if ctx.typing {
        return None;
    }

    match key {
        "Home" => Some(Command::BackToHome),
        "1" => Some(Command::SwitchTab(View::Story)),
        "2" => Some(Command::SwitchTab(View::Profiles)),
        "3" => Some(Command::SwitchTab(View::Gallery)),
        "4" => Some(Command::SwitchTab(View::Messages)),
        "r" | "R" if ctx.active_view == Some(View::Story) => Some(Command::ToggleRevealAll),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle() -> KeyContext {
        KeyContext::default()
    }

    #[test]
    fn test_modal_keys_work_while_typing() {
        let typing = KeyContext::from_tag("TEXTAREA", None);
        assert!(typing.typing);
        assert_eq!(command_for("Escape", typing), Some(Command::CloseModal));
        assert_eq!(command_for("ArrowLeft", typing), Some(Command::PrevImage));
        assert_eq!(command_for("ArrowRight", typing), Some(Command::NextImage));
    }

    #[test]
    fn test_navigation_keys_ignored_while_typing() {
        let typing = KeyContext::from_tag("INPUT", Some(View::Story));
        assert_eq!(command_for("1", typing), None);
        assert_eq!(command_for("Home", typing), None);
        assert_eq!(command_for("r", typing), None);
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        assert_eq!(command_for("1", idle()), Some(Command::SwitchTab(View::Story)));
        assert_eq!(command_for("2", idle()), Some(Command::SwitchTab(View::Profiles)));
        assert_eq!(command_for("3", idle()), Some(Command::SwitchTab(View::Gallery)));
        assert_eq!(command_for("4", idle()), Some(Command::SwitchTab(View::Messages)));
        assert_eq!(command_for("5", idle()), None);
        assert_eq!(command_for("Home", idle()), Some(Command::BackToHome));
    }

    #[test]
    fn test_reveal_only_on_story() {
        let story = KeyContext::from_tag("BODY", Some(View::Story));
        assert_eq!(command_for("r", story), Some(Command::ToggleRevealAll));
        assert_eq!(command_for("R", story), Some(Command::ToggleRevealAll));

        let gallery = KeyContext::from_tag("BODY", Some(View::Gallery));
        assert_eq!(command_for("r", gallery), None);
    }
}
