//! WebAssembly entry point and the page handle exported to page scripts.

use lessonkit_core::{PageConfig, WidgetHost};
use wasm_bindgen::prelude::*;

use crate::dom;
use crate::error::{WebError, WebResult};
use crate::kind::WidgetKind;
use crate::page::WidgetPage;

/// Module start: route panics to the console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// A lesson page, constructed from a page script:
///
/// ```js
/// const page = new LessonPage("Loops", { course: "python", project: "loops" });
/// page.registerDefaults();
/// ```
#[wasm_bindgen]
pub struct LessonPage {
    page: WidgetPage,
}

#[wasm_bindgen]
impl LessonPage {
    #[wasm_bindgen(constructor)]
    pub fn new(title: String, config: JsValue) -> Result<LessonPage, JsValue> {
        Ok(Self::mount(title, config)?)
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.page.title().to_string()
    }

    /// Bind `kind` widgets to every element matching `selector`. Returns how
    /// many were bound.
    #[wasm_bindgen(js_name = registerWidget)]
    pub fn register_widget(&self, selector: &str, kind: &str) -> Result<usize, JsValue> {
        let kind: WidgetKind = kind.parse()?;
        Ok(self.page.register_widget(selector, kind))
    }

    /// Bind every widget kind on its default selector.
    #[wasm_bindgen(js_name = registerDefaults)]
    pub fn register_defaults(&self) -> usize {
        self.page.register_defaults()
    }

    #[wasm_bindgen(js_name = widgetCount)]
    pub fn widget_count(&self) -> usize {
        self.page.widget_count()
    }

    #[wasm_bindgen(js_name = playActionSound)]
    pub fn play_action_sound(&self) {
        self.page.effects().play_action_sound();
    }

    #[wasm_bindgen(js_name = playCorrectSound)]
    pub fn play_correct_sound(&self) {
        self.page.effects().play_correct_sound();
    }

    #[wasm_bindgen(js_name = playIncorrectSound)]
    pub fn play_incorrect_sound(&self) {
        self.page.effects().play_incorrect_sound();
    }

    pub fn celebrate(&self) {
        self.page.effects().celebrate();
    }
}

impl LessonPage {
    fn mount(title: String, config: JsValue) -> WebResult<Self> {
        let config: PageConfig = serde_wasm_bindgen::from_value(config)?;
        config.validate()?;

        // A second page on the same module keeps the first logger.
        if console_log::init_with_level(config.level()?).is_err() {
            log::debug!("Logger already initialized");
        }

        let body = dom::document()?.body().ok_or_else(|| WebError::missing("body"))?;
        let page = WidgetPage::new(title, body, &config)?;
        Ok(Self { page })
    }
}
