//! lessonkit Web Shell
//!
//! Binds the core widgets to page markup in the browser: drag-and-drop and
//! keyboard listeners, sound cues, the confetti canvas and section reveal.

pub mod error;
pub mod kind;
pub mod markup;

pub use error::{WebError, WebResult};
pub use kind::WidgetKind;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod choice;
#[cfg(target_arch = "wasm32")]
mod confetti;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
mod reorder;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use choice::MultipleChoiceWidget;
#[cfg(target_arch = "wasm32")]
pub use page::{PageEffects, WidgetPage};
#[cfg(target_arch = "wasm32")]
pub use reorder::ArrangeCodeWidget;
#[cfg(target_arch = "wasm32")]
pub use web::LessonPage;
