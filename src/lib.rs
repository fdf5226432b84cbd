//! Selection History Library.
//! Temporäre, benannte Selektions-Snapshots als Library für Tests und Hosts.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, Captured, ListDelta, Notification,
    RegistryController, SelectionAction, VisibleList,
};
pub use core::{
    derive_nickname, Element, InMemoryScene, ReapplyMode, RegistryError, SceneHost,
    SelectionRegistry, SelectionSink, SelectionSource, Snapshot,
};
pub use shared::HistoryOptions;
