//! Deferred loader state machine for the third-party comment widget.
//!
//! The widget starts collapsed behind a trigger button and activates at most
//! once per page load: either the reader clicks the button, or the page was
//! opened with the comments fragment in the URL (a deep link straight to the
//! discussion). Activation is irreversible until the next page load.
//!
//! All browser side effects are described as [`Action`] values for the
//! [`crate::dom`] layer to execute. That keeps the whole state machine free
//! of `web-sys` types, so every transition is tested natively.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use crate::consts::COMMENTS_ANCHOR;

/// Lifecycle of the comment widget within one page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    /// Embed not loaded; trigger button visible and armed (or about to be).
    #[default]
    Collapsed,
    /// Embed requested. Terminal; there is no way back to `Collapsed`.
    Activated,
}

/// Side effects for the browser layer to carry out, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Invoke the external comment service's entry point (inject the embed).
    /// Emitted at most once per page load.
    MountComments,
    /// Remove the trigger button from the page.
    HideTrigger,
    /// Bring the comments section into the viewport.
    ScrollToComments,
    /// Attach the one-shot click listener to the trigger button.
    ArmTrigger,
    /// Replace the trigger button's label text.
    SetTriggerLabel(String),
}

/// Controller for the deferred comment widget. One instance per page load.
///
/// Event methods are synchronous and run on the browser's single event
/// thread, so the `state` check-and-set inside one call is the only guard
/// needed for the at-most-once mount. A multi-threaded host would have to
/// wrap the controller in a mutex to keep that guarantee.
#[derive(Debug, Default)]
pub struct CommentWidget {
    state: WidgetState,
    loaded: bool,
}

impl CommentWidget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// Label for the trigger button given the number of existing comments.
    ///
    /// Counts are unsigned, so a negative count is unrepresentable here;
    /// there is no upper bound and large counts format through the plural
    /// branch like any other.
    #[must_use]
    pub fn label_for_count(count: u64) -> String {
        match count {
            0 => "Make a comment".to_owned(),
            1 => "Show 1 comment".to_owned(),
            n => format!("Show {n} comments"),
        }
    }

    /// Page-load event. Must be delivered before any other event, and the
    /// fragment is read exactly once; later in-page fragment changes are
    /// not observed.
    ///
    /// A fragment naming the comments anchor activates immediately and asks
    /// for a scroll to the section. Anything else (including the empty
    /// fragment) arms the trigger button instead. Repeat calls are ignored.
    pub fn on_load(&mut self, fragment: &str) -> Vec<Action> {
        if self.loaded {
            return Vec::new();
        }
        self.loaded = true;

        if fragment == COMMENTS_ANCHOR {
            let mut actions = self.activate();
            actions.push(Action::ScrollToComments);
            actions
        } else {
            vec![Action::ArmTrigger]
        }
    }

    /// Click on the trigger button. A no-op once activated, so a click that
    /// races the deep-link path cannot mount twice.
    pub fn on_trigger_click(&mut self) -> Vec<Action> {
        self.activate()
    }

    /// The comment count for this page became known. Relabels the trigger
    /// button; once activated the button is gone and the count is of no use.
    pub fn on_count(&mut self, count: u64) -> Vec<Action> {
        match self.state {
            WidgetState::Collapsed => {
                vec![Action::SetTriggerLabel(Self::label_for_count(count))]
            }
            WidgetState::Activated => Vec::new(),
        }
    }

    /// The sole transition, `Collapsed -> Activated`. The latch flips before
    /// the actions are returned, so whichever path gets here second sees
    /// `Activated` and emits nothing.
    fn activate(&mut self) -> Vec<Action> {
        match self.state {
            WidgetState::Activated => Vec::new(),
            WidgetState::Collapsed => {
                self.state = WidgetState::Activated;
                vec![Action::MountComments, Action::HideTrigger]
            }
        }
    }
}
