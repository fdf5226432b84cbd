//! Zentrale Konfiguration für das Selection-History-Fenster.
//!
//! `HistoryOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{ReapplyMode, DEFAULT_RANGE_SEPARATOR};
use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Standard-Fensterbreite in Punkten.
pub const WINDOW_WIDTH: f32 = 300.0;
/// Standard-Fensterhöhe in Punkten.
pub const WINDOW_HEIGHT: f32 = 350.0;
/// Sichtbare Zeilen der Nickname-Liste.
pub const LIST_ROWS: usize = 8;

// ── Buttons ─────────────────────────────────────────────────────────

/// Hintergrundfarbe des Select-Buttons (RGB: Blaugrau).
pub const SELECT_BUTTON_COLOR: [f32; 3] = [0.38, 0.60, 0.72];
/// Hintergrundfarbe des Add-Selection-Buttons (RGB: Grün).
pub const ADD_BUTTON_COLOR: [f32; 3] = [0.46, 0.81, 0.41];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `selection_history.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryOptions {
    /// Fensterbreite in Punkten
    pub window_width: f32,
    /// Fensterhöhe in Punkten
    pub window_height: f32,
    /// Sichtbare Zeilen der Nickname-Liste
    pub list_rows: usize,
    /// Vorausgewählter Reapply-Modus beim Öffnen des Fensters
    pub default_mode: ReapplyMode,
    /// Trenner zwischen erstem und letztem Element im abgeleiteten Nickname
    pub range_separator: String,
    /// Farbe des Select-Buttons (RGB)
    pub select_button_color: [f32; 3],
    /// Farbe des Add-Selection-Buttons (RGB)
    pub add_button_color: [f32; 3],
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            list_rows: LIST_ROWS,
            default_mode: ReapplyMode::Replace,
            range_separator: DEFAULT_RANGE_SEPARATOR.to_string(),
            select_button_color: SELECT_BUTTON_COLOR,
            add_button_color: ADD_BUTTON_COLOR,
        }
    }
}

impl HistoryOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("selection_history"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("selection_history.toml")
    }

    /// Höhe der Nickname-Liste in Punkten (Zeilen × Zeilenhöhe).
    pub fn list_height(&self, row_height: f32) -> f32 {
        self.list_rows.max(1) as f32 * row_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_window() {
        let opts = HistoryOptions::default();
        assert_eq!(opts.window_width, 300.0);
        assert_eq!(opts.list_rows, 8);
        assert_eq!(opts.default_mode, ReapplyMode::Replace);
        assert_eq!(opts.range_separator, " : ");
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let opts: HistoryOptions =
            toml::from_str("list_rows = 12\ndefault_mode = \"Add\"\n").expect("TOML gültig");
        assert_eq!(opts.list_rows, 12);
        assert_eq!(opts.default_mode, ReapplyMode::Add);
        assert_eq!(opts.window_height, WINDOW_HEIGHT);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("selection_history_does_not_exist.toml");
        assert_eq!(HistoryOptions::load_from_file(&path), HistoryOptions::default());
    }

    #[test]
    fn save_then_load_keeps_values() {
        let path = std::env::temp_dir().join(format!(
            "selection_history_options_{}.toml",
            std::process::id()
        ));
        let opts = HistoryOptions {
            list_rows: 4,
            default_mode: ReapplyMode::Remove,
            ..HistoryOptions::default()
        };

        opts.save_to_file(&path).expect("Speichern sollte klappen");
        let loaded = HistoryOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn list_height_never_collapses() {
        let opts = HistoryOptions {
            list_rows: 0,
            ..HistoryOptions::default()
        };
        assert_eq!(opts.list_height(18.0), 18.0);
    }
}
