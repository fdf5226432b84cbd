//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die `app` und `ui` gemeinsam lesen.

pub mod options;

pub use options::HistoryOptions;
