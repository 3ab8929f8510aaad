pub mod controller;
pub mod dispatch;
pub mod errors;
pub mod models;
pub mod settings;
pub mod status;
pub mod ui;
pub mod validate;

pub use controller::{EndpointDescriptor, EndpointKind, Popup};
pub use dispatch::Dispatcher;
pub use settings::{SettingsStore, resolve_settings_path};
pub use status::{StatusClass, StatusLine, StatusSnapshot};
