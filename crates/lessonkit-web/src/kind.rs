//! The widget kinds a page can register.

use std::fmt;
use std::str::FromStr;

use crate::error::WebError;
use crate::markup;

/// Widget implementations known to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Drag-to-reorder code blocks.
    ArrangeCode,
    /// Single-select multiple-choice question.
    MultipleChoice,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 2] = [WidgetKind::ArrangeCode, WidgetKind::MultipleChoice];

    /// Name used in logs and accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::ArrangeCode => "arrange-code",
            Self::MultipleChoice => "multiple-choice",
        }
    }

    /// Container selector used when a page registers the defaults.
    pub fn default_selector(self) -> &'static str {
        match self {
            Self::ArrangeCode => markup::reorder::WIDGET,
            Self::MultipleChoice => markup::choice::WIDGET,
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WidgetKind {
    type Err = WebError;

    /// Accepts the kebab-case name or the page script class name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arrange-code" | "ArrangeCodeWidget" => Ok(Self::ArrangeCode),
            "multiple-choice" | "MultipleChoiceWidget" => Ok(Self::MultipleChoice),
            other => Err(WebError::UnknownWidget(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for kind in WidgetKind::ALL {
            assert_eq!(kind.name().parse::<WidgetKind>().unwrap(), kind);
        }
        assert_eq!(
            "ArrangeCodeWidget".parse::<WidgetKind>().unwrap(),
            WidgetKind::ArrangeCode
        );
        assert_eq!(
            "MultipleChoiceWidget".parse::<WidgetKind>().unwrap(),
            WidgetKind::MultipleChoice
        );
    }

    #[test]
    fn test_parse_unknown() {
        let result = "slider".parse::<WidgetKind>();
        assert!(matches!(result, Err(WebError::UnknownWidget(name)) if name == "slider"));
    }

    #[test]
    fn test_default_selectors() {
        assert_eq!(WidgetKind::ArrangeCode.default_selector(), ".widget-arrange-code");
        assert_eq!(
            WidgetKind::MultipleChoice.default_selector(),
            ".widget-multiple-choice"
        );
    }
}
