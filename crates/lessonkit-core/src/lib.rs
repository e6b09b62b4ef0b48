//! lessonkit Core Library
//!
//! Platform-agnostic state and logic for interactive learning widgets:
//! drag-to-reorder code blocks, accessible multiple-choice questions, and the
//! shared page effects they trigger.

pub mod assets;
pub mod choice;
pub mod config;
pub mod confetti;
pub mod host;
pub mod reorder;
pub mod widget;

pub use assets::{asset_path, Environment};
pub use choice::{Choice, ChoiceKey, ChoiceOutcome, ChoicePhase, ChoiceWidget, Feedback, KeyOutcome, Step};
pub use config::{ConfigError, ConfigResult, PageConfig};
pub use confetti::{Confetti, Particle, DEFAULT_PARTICLES};
pub use host::WidgetHost;
pub use reorder::{check_order, Block, BlockFlags, BlockId, DropEffect, DropOutcome, OrderKey, ReorderWidget};
pub use widget::{Widget, WidgetId, WidgetRegistry};
