//! Selectors, classes and attributes shared with the page markup.

/// Reorder widget markup.
pub mod reorder {
    /// Selector for the container the widget is registered on.
    pub const WIDGET: &str = ".widget-arrange-code";
    /// Element whose children are the reorderable blocks.
    pub const CODE_CONTAINER: &str = ".code-container";
    /// A reorderable block.
    pub const BLOCK_CONTAINER: &str = ".block-container";
    /// Expected-order key on each block.
    pub const ORDER_ATTR: &str = "data-index";

    pub const CLASS_DRAGGED: &str = "dragged";
    /// Hovered block precedes the drag origin.
    pub const CLASS_DRAGOVER_BEFORE: &str = "dragover-up";
    /// Hovered block follows the drag origin.
    pub const CLASS_DRAGOVER_AFTER: &str = "dragover-down";
    /// Set on the code container once the order validates.
    pub const CLASS_CORRECT: &str = "correct";
}

/// Multiple-choice widget markup.
pub mod choice {
    /// Selector for the container the widget is registered on.
    pub const WIDGET: &str = ".widget-multiple-choice";
    /// Group wrapping the buttons; gets the radiogroup role.
    pub const CHOICES: &str = ".choices";
    pub const CHOICE_BUTTON: &str = ".button-choice";
    pub const FEEDBACK_CORRECT: &str = ".feedback[data-type=\"correct\"]";
    pub const FEEDBACK_INCORRECT: &str = ".feedback[data-type=\"incorrect\"]";
    /// `"true"` on the right answer.
    pub const CORRECT_ATTR: &str = "data-correct";
}

/// Page-level markup.
pub mod page {
    pub const CANVAS: &str = "canvas";
    pub const CONTINUE_BUTTON: &str = ".button-continue";
    pub const SECTION: &str = "section";
    pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
    /// Inline style of the confetti canvas.
    pub const CANVAS_STYLE: &[(&str, &str)] = &[
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("pointer-events", "none"),
        ("z-index", "99"),
    ];
}

/// Shared sound files, all under [`sounds::PREFIX`].
pub mod sounds {
    pub const PREFIX: &str = "shared";
    pub const CORRECT: &str = "correct.mp3";
    pub const ACTION: &str = "action.mp3";
    pub const INCORRECT: &str = "incorrect.wav";
}

/// Whether a boolean attribute value reads as true.
pub fn is_true(value: Option<&str>) -> bool {
    value == Some("true")
}

/// `"true"`/`"false"` for an ARIA state attribute.
pub fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_true() {
        assert!(is_true(Some("true")));
        assert!(!is_true(Some("false")));
        assert!(!is_true(Some("TRUE")));
        assert!(!is_true(Some("")));
        assert!(!is_true(None));
    }

    #[test]
    fn test_aria_bool() {
        assert_eq!(aria_bool(true), "true");
        assert_eq!(aria_bool(false), "false");
    }

    #[test]
    fn test_feedback_selectors_are_distinct() {
        assert_ne!(choice::FEEDBACK_CORRECT, choice::FEEDBACK_INCORRECT);
        assert!(choice::FEEDBACK_CORRECT.starts_with(".feedback["));
    }
}
