//! DOM binding for the multiple-choice widget.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use lessonkit_core::{ChoiceOutcome, ChoiceWidget, KeyOutcome, Widget, WidgetHost};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent};

use crate::dom;
use crate::error::WebResult;
use crate::kind::WidgetKind;
use crate::markup::{self, choice as selectors};

struct ChoiceView {
    buttons: Vec<HtmlElement>,
    feedback_correct: Option<HtmlElement>,
    feedback_incorrect: Option<HtmlElement>,
    state: RefCell<ChoiceWidget>,
}

impl ChoiceView {
    /// Mirror selection, disabled state, tab stop and feedback onto the DOM.
    fn render(&self) {
        let state = self.state.borrow();
        for (index, (button, choice)) in self.buttons.iter().zip(state.choices()).enumerate() {
            dom::set_attr(button, "tabindex", &state.tab_index(index).to_string());
            dom::set_attr(button, "aria-checked", markup::aria_bool(choice.is_selected()));
            if choice.is_disabled() {
                dom::disable(button);
                dom::set_attr(button, "aria-disabled", "true");
            }
        }

        let feedback = state.feedback();
        if let Some(region) = &self.feedback_correct {
            dom::set_display(region, if feedback.correct_visible { "block" } else { "none" });
        }
        if let Some(region) = &self.feedback_incorrect {
            dom::set_display(region, if feedback.incorrect_visible { "block" } else { "none" });
        }
    }

    fn focus(&self, index: usize) {
        if let Some(button) = self.buttons.get(index) {
            let _ = button.focus();
        }
    }

    fn on_click(&self, index: usize) {
        let outcome = self.state.borrow_mut().handle_choice(index);
        self.apply(outcome);
    }

    fn on_keydown(&self, index: usize, event: &Event) {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let outcome = self.state.borrow_mut().handle_keydown(&event.key(), index);
        if outcome.prevents_default() {
            event.prevent_default();
        }
        match outcome {
            KeyOutcome::Ignored => {}
            KeyOutcome::Chose(choice) => self.apply(choice),
            KeyOutcome::Moved(target) => {
                self.render();
                if let Some(target) = target {
                    self.focus(target);
                }
            }
        }
    }

    fn apply(&self, outcome: ChoiceOutcome) {
        match outcome {
            ChoiceOutcome::Ignored => {}
            ChoiceOutcome::Correct => self.render(),
            ChoiceOutcome::Incorrect { focus } => {
                self.render();
                if let Some(index) = focus {
                    self.focus(index);
                }
            }
        }
    }
}

/// Multiple-choice question bound to a page container.
pub struct MultipleChoiceWidget {
    _listeners: Vec<EventListener>,
}

impl MultipleChoiceWidget {
    /// Bind to `container`. Missing buttons or feedback regions are tolerated.
    pub fn new(container: &Element, host: Rc<dyn WidgetHost>) -> WebResult<Self> {
        if let Some(group) = dom::query(container, selectors::CHOICES) {
            if !group.has_attribute("role") {
                dom::set_attr(&group, "role", "radiogroup");
            }
        }
        let buttons: Vec<HtmlElement> = dom::query_all(container, selectors::CHOICE_BUTTON)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        let correct: Vec<bool> = buttons
            .iter()
            .map(|b| markup::is_true(b.get_attribute(selectors::CORRECT_ATTR).as_deref()))
            .collect();

        let view = Rc::new(ChoiceView {
            feedback_correct: dom::query_html(container, selectors::FEEDBACK_CORRECT),
            feedback_incorrect: dom::query_html(container, selectors::FEEDBACK_INCORRECT),
            state: RefCell::new(ChoiceWidget::new(correct, host)),
            buttons,
        });
        view.render();

        let mut listeners = Vec::with_capacity(view.buttons.len() * 2);
        for (index, button) in view.buttons.iter().enumerate() {
            let click_view = Rc::clone(&view);
            listeners.push(EventListener::new(button, "click", move |_| {
                click_view.on_click(index);
            }));
            let key_view = Rc::clone(&view);
            listeners.push(EventListener::new_with_options(
                button,
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event| key_view.on_keydown(index, event),
            ));
        }
        if view.buttons.is_empty() {
            log::warn!("Multiple-choice widget has no {} elements", selectors::CHOICE_BUTTON);
        } else {
            log::debug!("Bound multiple-choice widget with {} buttons", view.buttons.len());
        }

        Ok(Self {
            _listeners: listeners,
        })
    }
}

impl Widget for MultipleChoiceWidget {
    fn name(&self) -> &'static str {
        WidgetKind::MultipleChoice.name()
    }
}
