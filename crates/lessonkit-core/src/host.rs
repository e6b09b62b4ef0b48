//! Capabilities a page exposes to its widgets.

/// Effects a widget may trigger on its hosting page.
///
/// All calls are fire-and-forget: nothing is returned and an implementation
/// must swallow its own failures (e.g. the browser refusing audio playback)
/// so a widget's state transition is never interrupted.
pub trait WidgetHost {
    /// Play the neutral sound cue for a completed action.
    fn play_action_sound(&self);

    /// Play the success sound cue.
    fn play_correct_sound(&self);

    /// Trigger the celebration effect.
    fn celebrate(&self);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::WidgetHost;
    use std::cell::Cell;

    /// Host double that counts every callback it receives.
    #[derive(Debug, Default)]
    pub struct RecordingHost {
        pub action_sounds: Cell<usize>,
        pub correct_sounds: Cell<usize>,
        pub celebrations: Cell<usize>,
    }

    impl RecordingHost {
        pub fn new() -> Self {
            Self::default()
        }

        /// Total number of callbacks received.
        pub fn total(&self) -> usize {
            self.action_sounds.get() + self.correct_sounds.get() + self.celebrations.get()
        }
    }

    impl WidgetHost for RecordingHost {
        fn play_action_sound(&self) {
            self.action_sounds.set(self.action_sounds.get() + 1);
        }

        fn play_correct_sound(&self) {
            self.correct_sounds.set(self.correct_sounds.get() + 1);
        }

        fn celebrate(&self) {
            self.celebrations.set(self.celebrations.get() + 1);
        }
    }
}
