//! Domain-Kern: Elemente, Snapshots, Registry und Host-Schnittstellen.

mod element;
mod error;
pub mod host;
pub mod nickname;
pub mod scene;
pub mod selection_registry;

pub use element::{Element, Snapshot};
pub use error::RegistryError;
pub use host::{ReapplyMode, SceneHost, SelectionSink, SelectionSource};
pub use nickname::{derive_nickname, DEFAULT_RANGE_SEPARATOR};
pub use scene::InMemoryScene;
pub use selection_registry::SelectionRegistry;
