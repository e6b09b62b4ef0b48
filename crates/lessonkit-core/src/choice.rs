//! Single-select multiple-choice question.
//!
//! The widget behaves as an accessible radio group: exactly one button is a
//! tab stop at a time (roving tabindex) and arrow keys move that tab stop
//! between enabled buttons. A wrong answer permanently disables the chosen
//! button; the right answer disables everything and ends the question.

use std::rc::Rc;

use crate::host::WidgetHost;

/// Direction of a focus search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

/// Keys the widget responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKey {
    /// Space or Enter: choose the focused button.
    Activate,
    /// ArrowDown or ArrowRight.
    Next,
    /// ArrowUp or ArrowLeft.
    Previous,
    /// Home.
    First,
    /// End.
    Last,
}

impl ChoiceKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Enter" => Some(Self::Activate),
            "ArrowDown" | "ArrowRight" => Some(Self::Next),
            "ArrowUp" | "ArrowLeft" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

/// One answer button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Choice {
    correct: bool,
    selected: bool,
    disabled: bool,
}

impl Choice {
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Question lifecycle. `Answered` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChoicePhase {
    #[default]
    Unanswered,
    Answered,
}

/// Visibility of the two feedback regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Feedback {
    pub correct_visible: bool,
    pub incorrect_visible: bool,
}

/// Result of choosing a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// Already answered, or the button is unknown or disabled.
    Ignored,
    /// The right answer: the question is over.
    Correct,
    /// A wrong answer. `focus` is where keyboard focus moved, if anywhere.
    Incorrect { focus: Option<usize> },
}

/// Result of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a key the widget handles, or the question is answered.
    Ignored,
    /// An activation key chose the focused button.
    Chose(ChoiceOutcome),
    /// A navigation key moved focus (or found nowhere to go).
    Moved(Option<usize>),
}

impl KeyOutcome {
    /// Whether the platform's default scrolling/activation should be suppressed.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Multiple-choice state for one question.
pub struct ChoiceWidget {
    choices: Vec<Choice>,
    phase: ChoicePhase,
    /// Current position and the single tab stop.
    focus: usize,
    feedback: Feedback,
    host: Rc<dyn WidgetHost>,
}

impl ChoiceWidget {
    /// Build a widget from each button's correctness, in document order.
    /// The first button starts as the tab stop and both feedback regions
    /// start hidden.
    pub fn new<I>(correct: I, host: Rc<dyn WidgetHost>) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let choices = correct
            .into_iter()
            .map(|correct| Choice {
                correct,
                ..Choice::default()
            })
            .collect();
        Self {
            choices,
            phase: ChoicePhase::Unanswered,
            focus: 0,
            feedback: Feedback::default(),
            host,
        }
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn phase(&self) -> ChoicePhase {
        self.phase
    }

    pub fn is_answered(&self) -> bool {
        self.phase == ChoicePhase::Answered
    }

    /// Index of the button that currently holds the tab stop.
    pub fn focus_index(&self) -> usize {
        self.focus
    }

    /// `tabindex` value for a button: `0` for the tab stop, `-1` otherwise.
    pub fn tab_index(&self, index: usize) -> i32 {
        if index == self.focus { 0 } else { -1 }
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Search circularly from `from` (exclusive) for an enabled button,
    /// visiting every button at most once.
    pub fn next_enabled_index(&self, from: usize, step: Step) -> Option<usize> {
        let count = self.choices.len();
        let mut index = from % count.max(1);
        for _ in 0..count {
            index = match step {
                Step::Forward => (index + 1) % count,
                Step::Backward => (index + count - 1) % count,
            };
            if !self.choices[index].disabled {
                return Some(index);
            }
        }
        None
    }

    /// First enabled button in document order.
    pub fn first_enabled_index(&self) -> Option<usize> {
        let last = self.choices.len().checked_sub(1)?;
        self.next_enabled_index(last, Step::Forward)
    }

    /// Last enabled button in document order.
    pub fn last_enabled_index(&self) -> Option<usize> {
        self.next_enabled_index(0, Step::Backward)
    }

    /// Choose the button at `index`.
    pub fn handle_choice(&mut self, index: usize) -> ChoiceOutcome {
        if self.is_answered() {
            return ChoiceOutcome::Ignored;
        }
        let Some(choice) = self.choices.get(index) else {
            return ChoiceOutcome::Ignored;
        };
        if choice.disabled {
            return ChoiceOutcome::Ignored;
        }
        let correct = choice.correct;

        for (i, choice) in self.choices.iter_mut().enumerate() {
            choice.selected = i == index;
        }
        self.focus = index;

        if correct {
            self.phase = ChoicePhase::Answered;
            self.feedback = Feedback {
                correct_visible: true,
                incorrect_visible: false,
            };
            for choice in &mut self.choices {
                choice.disabled = true;
            }
            log::debug!("Choice {} is correct, question answered", index);
            self.host.play_correct_sound();
            self.host.celebrate();
            ChoiceOutcome::Correct
        } else {
            self.choices[index].disabled = true;
            self.feedback.incorrect_visible = true;
            let focus = self.next_enabled_index(index, Step::Forward);
            if let Some(next) = focus {
                self.focus = next;
            }
            log::debug!("Choice {} is incorrect, focus moves to {:?}", index, focus);
            ChoiceOutcome::Incorrect { focus }
        }
    }

    /// Handle a key pressed while the button at `index` has focus.
    pub fn handle_key(&mut self, key: ChoiceKey, index: usize) -> KeyOutcome {
        if self.is_answered() {
            return KeyOutcome::Ignored;
        }
        let target = match key {
            ChoiceKey::Activate => return KeyOutcome::Chose(self.handle_choice(index)),
            ChoiceKey::Next => self.next_enabled_index(index, Step::Forward),
            ChoiceKey::Previous => self.next_enabled_index(index, Step::Backward),
            ChoiceKey::First => self.first_enabled_index(),
            ChoiceKey::Last => self.last_enabled_index(),
        };
        if let Some(target) = target {
            self.focus = target;
        }
        KeyOutcome::Moved(target)
    }

    /// Handle a raw `KeyboardEvent.key` value.
    pub fn handle_keydown(&mut self, key: &str, index: usize) -> KeyOutcome {
        match ChoiceKey::from_key(key) {
            Some(key) => self.handle_key(key, index),
            None => KeyOutcome::Ignored,
        }
    }
}
