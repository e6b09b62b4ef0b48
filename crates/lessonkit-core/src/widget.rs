//! Widget capability trait and the page-level registry of widget handles.

use std::fmt;
use uuid::Uuid;

/// Unique identifier for a registered widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(Uuid);

impl WidgetId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything a page can host.
///
/// A widget is built from its container and the page's [`WidgetHost`]
/// capabilities; after that the page only ever talks to it through this
/// trait.
///
/// [`WidgetHost`]: crate::WidgetHost
pub trait Widget {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Called when the window is resized.
    fn on_resize(&mut self) {}
}

/// Owns every widget registered on a page, in registration order.
#[derive(Default)]
pub struct WidgetRegistry {
    widgets: Vec<(WidgetId, Box<dyn Widget>)>,
}

impl WidgetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a widget, returning its identifier.
    pub fn register(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let id = WidgetId::new();
        log::debug!("Registered {} widget {}", widget.name(), id);
        self.widgets.push((id, widget));
        id
    }

    /// Number of registered widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Check if no widget is registered.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Iterate over identifiers and names in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (WidgetId, &'static str)> + '_ {
        self.widgets.iter().map(|(id, widget)| (*id, widget.name()))
    }

    /// Notify every widget of a window resize.
    pub fn dispatch_resize(&mut self) {
        for (_, widget) in &mut self.widgets {
            widget.on_resize();
        }
    }
}
