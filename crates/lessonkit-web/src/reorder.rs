//! DOM binding for the drag-to-reorder widget.
//!
//! Each block gets the six HTML drag-and-drop listeners. Every event is fed to
//! the core [`ReorderWidget`]; its state is then mirrored back onto the
//! block classes and the code container.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use lessonkit_core::{BlockId, DropOutcome, ReorderWidget, Widget, WidgetHost};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, Event};

use crate::dom;
use crate::error::{WebError, WebResult};
use crate::kind::WidgetKind;
use crate::markup::reorder as markup;

/// Elements and state shared by the listeners.
struct ReorderView {
    code_container: Element,
    /// Block elements indexed by [`BlockId`].
    blocks: Vec<Element>,
    state: RefCell<ReorderWidget>,
}

impl ReorderView {
    /// Mirror block flags and the correct mark onto the DOM.
    fn render(&self) {
        let state = self.state.borrow();
        for block in state.blocks() {
            let Some(element) = self.blocks.get(block.id().index()) else {
                continue;
            };
            let flags = block.flags();
            dom::set_class(element, markup::CLASS_DRAGGED, flags.dragged);
            dom::set_class(element, markup::CLASS_DRAGOVER_BEFORE, flags.dragover_before);
            dom::set_class(element, markup::CLASS_DRAGOVER_AFTER, flags.dragover_after);
        }
        dom::set_class(&self.code_container, markup::CLASS_CORRECT, state.is_correct());
    }

    /// Re-append every block in current order; appending an attached node moves it.
    fn apply_order(&self) {
        let state = self.state.borrow();
        for id in state.order() {
            if let Some(element) = self.blocks.get(id.index()) {
                let _ = self.code_container.append_child(element);
            }
        }
    }

    fn on_drag_start(&self, id: BlockId, _event: &Event) {
        self.state.borrow_mut().drag_start(id);
        self.render();
    }

    fn on_drag_over(&self, _id: BlockId, event: &Event) {
        event.prevent_default();
        let effect = self.state.borrow().drag_over();
        if let Some(transfer) = event
            .dyn_ref::<DragEvent>()
            .and_then(DragEvent::data_transfer)
        {
            transfer.set_drop_effect(effect.as_str());
        }
    }

    fn on_drag_enter(&self, id: BlockId, _event: &Event) {
        self.state.borrow_mut().drag_enter(id);
        self.render();
    }

    fn on_drag_leave(&self, id: BlockId, _event: &Event) {
        self.state.borrow_mut().drag_leave(id);
        self.render();
    }

    fn on_drop(&self, id: BlockId, event: &Event) {
        event.prevent_default();
        let outcome = self.state.borrow_mut().drop(id);
        if let DropOutcome::Moved { .. } = outcome {
            self.apply_order();
        }
        self.render();
    }

    fn on_drag_end(&self, _id: BlockId, _event: &Event) {
        self.state.borrow_mut().drag_end();
        self.render();
    }
}

type Handler = fn(&ReorderView, BlockId, &Event);

/// Drag-to-reorder widget bound to a page container.
///
/// The listeners own the shared view; dropping the widget unbinds it.
pub struct ArrangeCodeWidget {
    _listeners: Vec<EventListener>,
}

impl ArrangeCodeWidget {
    /// Bind to `container`, which must hold a code container.
    pub fn new(container: &Element, host: Rc<dyn WidgetHost>) -> WebResult<Self> {
        let code_container = dom::query(container, markup::CODE_CONTAINER)
            .ok_or_else(|| WebError::missing(markup::CODE_CONTAINER))?;
        let blocks = dom::query_all(container, markup::BLOCK_CONTAINER);
        let keys: Vec<_> = blocks
            .iter()
            .map(|block| block.get_attribute(markup::ORDER_ATTR))
            .collect();

        let view = Rc::new(ReorderView {
            code_container,
            blocks,
            state: RefCell::new(ReorderWidget::new(keys, host)),
        });

        const HANDLERS: [(&str, Handler); 6] = [
            ("dragstart", ReorderView::on_drag_start),
            ("dragover", ReorderView::on_drag_over),
            ("dragenter", ReorderView::on_drag_enter),
            ("dragleave", ReorderView::on_drag_leave),
            ("drop", ReorderView::on_drop),
            ("dragend", ReorderView::on_drag_end),
        ];

        let mut listeners = Vec::with_capacity(view.blocks.len() * HANDLERS.len());
        for (index, element) in view.blocks.iter().enumerate() {
            let id = BlockId::new(index);
            for (event_type, handler) in HANDLERS {
                let view = Rc::clone(&view);
                listeners.push(EventListener::new_with_options(
                    element,
                    event_type,
                    EventListenerOptions::enable_prevent_default(),
                    move |event| handler(&view, id, event),
                ));
            }
        }
        log::debug!("Bound reorder widget with {} blocks", view.blocks.len());

        Ok(Self {
            _listeners: listeners,
        })
    }
}

impl Widget for ArrangeCodeWidget {
    fn name(&self) -> &'static str {
        WidgetKind::ArrangeCode.name()
    }
}
