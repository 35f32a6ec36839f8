mod calendar;
mod event;
mod event_id;
mod registry;
mod store;

pub mod event_builder;
pub mod layout;
pub mod navigator;

pub use calendar::*;
pub use event::*;
pub use event_id::*;
pub use registry::*;
pub use store::*;

/// Locale used for every user facing date format.
pub const LOCALE: chrono::Locale = chrono::Locale::en_US;
