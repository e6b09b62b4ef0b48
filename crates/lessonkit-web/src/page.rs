//! The widget page: shared effects, widget registration and section reveal.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use lessonkit_core::{PageConfig, Widget, WidgetHost, WidgetRegistry};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::audio::SoundBank;
use crate::choice::MultipleChoiceWidget;
use crate::confetti::ConfettiCanvas;
use crate::dom;
use crate::error::WebResult;
use crate::kind::WidgetKind;
use crate::markup::page as markup;
use crate::reorder::ArrangeCodeWidget;

/// Effects every widget on the page shares.
pub struct PageEffects {
    sounds: SoundBank,
    confetti: Rc<ConfettiCanvas>,
}

impl PageEffects {
    pub fn play_incorrect_sound(&self) {
        self.sounds.incorrect.play();
    }
}

impl WidgetHost for PageEffects {
    fn play_action_sound(&self) {
        self.sounds.action.play();
    }

    fn play_correct_sound(&self) {
        self.sounds.correct.play();
    }

    fn celebrate(&self) {
        self.confetti.burst();
    }
}

/// A page hosting one or more widgets.
pub struct WidgetPage {
    title: String,
    container: HtmlElement,
    effects: Rc<PageEffects>,
    registry: Rc<RefCell<WidgetRegistry>>,
    _listeners: Vec<EventListener>,
}

impl WidgetPage {
    /// Set up effects, the resize listener and continue buttons under
    /// `container` (usually the body).
    pub fn new(title: impl Into<String>, container: HtmlElement, config: &PageConfig) -> WebResult<Self> {
        let window = dom::window()?;
        let document = dom::document()?;

        let hostname = window.location().hostname().unwrap_or_default();
        let environment = config.environment(&hostname);
        let effects = Rc::new(PageEffects {
            sounds: SoundBank::load(config, environment),
            confetti: ConfettiCanvas::attach(&document, &container, config.confetti_particles)?,
        });

        let registry = Rc::new(RefCell::new(WidgetRegistry::new()));
        let mut listeners = Vec::new();

        let resize_registry = Rc::clone(&registry);
        listeners.push(EventListener::new(&window, "resize", move |_| {
            resize_registry.borrow_mut().dispatch_resize();
        }));

        for button in dom::query_all(&container, markup::CONTINUE_BUTTON) {
            let target = button.clone();
            listeners.push(EventListener::new(&button, "click", move |_| {
                reveal_next_section(&target);
            }));
        }

        let title = title.into();
        log::info!("Mounted page {:?} ({:?})", title, environment);
        Ok(Self {
            title,
            container,
            effects,
            registry,
            _listeners: listeners,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Shared effects, as handed to widgets.
    pub fn effects(&self) -> &Rc<PageEffects> {
        &self.effects
    }

    /// Build a widget of `kind` on every container matching `selector`.
    ///
    /// A container the widget cannot bind to is logged and skipped. Returns
    /// the number of widgets registered by this call.
    pub fn register_widget(&self, selector: &str, kind: WidgetKind) -> usize {
        let mut registered = 0;
        for container in dom::query_all(&self.container, selector) {
            match self.build(kind, &container) {
                Ok(widget) => {
                    self.registry.borrow_mut().register(widget);
                    registered += 1;
                }
                Err(e) => log::error!("Failed to initialize {} widget: {}", selector, e),
            }
        }
        registered
    }

    /// Register every kind on its default selector.
    pub fn register_defaults(&self) -> usize {
        WidgetKind::ALL
            .into_iter()
            .map(|kind| self.register_widget(kind.default_selector(), kind))
            .sum()
    }

    /// Number of widgets on the page.
    pub fn widget_count(&self) -> usize {
        self.registry.borrow().len()
    }

    fn build(&self, kind: WidgetKind, container: &Element) -> WebResult<Box<dyn Widget>> {
        let host: Rc<dyn WidgetHost> = self.effects.clone();
        Ok(match kind {
            WidgetKind::ArrangeCode => Box::new(ArrangeCodeWidget::new(container, host)?),
            WidgetKind::MultipleChoice => Box::new(MultipleChoiceWidget::new(container, host)?),
        })
    }
}

/// Show the section after the one holding `button` and remove the button.
fn reveal_next_section(button: &Element) {
    let Some(section) = button.closest(markup::SECTION).ok().flatten() else {
        return;
    };
    let Some(next) = section.next_element_sibling() else {
        return;
    };
    if let Some(next) = next.dyn_ref::<HtmlElement>() {
        dom::set_display(next, "flex");
    }
    button.remove();

    if !prefers_reduced_motion() {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        next.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn prefers_reduced_motion() -> bool {
    dom::window()
        .ok()
        .and_then(|w| w.match_media(markup::REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}
