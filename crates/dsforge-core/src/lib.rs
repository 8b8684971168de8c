//! DSForge Core Library
//!
//! Headless core of the DSForge design-system editor: the component tree,
//! layered style resolution, the style mutation engine, variant/state
//! commands, undo history, export planning and session persistence.

pub mod component;
pub mod config;
pub mod edit;
pub mod error;
pub mod export;
pub mod history;
pub mod persist;
pub mod selection;
pub mod session;
pub mod store;
pub mod style;
pub mod variation;

pub use component::{
    ComponentCategory, ComponentState, ComponentType, ComponentVariant, DesignSystemComponent,
};
pub use config::DsConfig;
pub use edit::EditOutcome;
pub use error::{DsError, DsResult};
pub use selection::Selection;
pub use session::Session;
pub use store::Store;
pub use style::{StyleOverrides, StyleProperty, StyleRecord, StyleValue};
