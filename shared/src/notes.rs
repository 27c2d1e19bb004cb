//! Show/hide state for content-note boxes.

pub const TARGET_ATTRIBUTE: &str = "data-target";
pub const HIDDEN_ATTRIBUTE: &str = "hidden";

pub const SHOW_LABEL: &str = "Show content notes";
pub const HIDE_LABEL: &str = "Hide content notes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesVisibility {
    Shown,
    Hidden,
}

impl NotesVisibility {
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden {
            Self::Hidden
        } else {
            Self::Shown
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Shown => Self::Hidden,
            Self::Hidden => Self::Shown,
        }
    }

    pub fn is_hidden(self) -> bool {
        self == Self::Hidden
    }

    /// Button text offering the opposite action.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Shown => HIDE_LABEL,
            Self::Hidden => SHOW_LABEL,
        }
    }
}

/// A notes box the toggle can flip.
pub trait NotesTarget {
    fn is_hidden(&self) -> bool;

    fn set_hidden(&mut self, hidden: bool);
}

/// Flip `target` and return the label the button should show afterwards.
pub fn toggle_notes<T: NotesTarget>(target: &mut T) -> &'static str {
    let next = NotesVisibility::from_hidden(target.is_hidden()).toggled();
    target.set_hidden(next.is_hidden());
    next.button_label()
}
