//! Zentrale Konfiguration der Pfad-Session.
//!
//! `SessionOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::TrackingFeatures;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ── Marker ──────────────────────────────────────────────────────────

/// Radius der Wegpunkt-Marker in Metern.
pub const WAYPOINT_MARKER_RADIUS: f32 = 0.05;
/// Kappenradius der Verbindungssegmente in Metern.
pub const SEGMENT_CAP_RADIUS: f32 = 0.05;
/// Marker weiter als diese Distanz (Meter) von der Kamera werden ausgeblendet.
pub const MARKER_VISIBILITY_DISTANCE: f32 = 3.0;

// ── Beschriftung ────────────────────────────────────────────────────

/// Beschriftung des ersten Wegpunkts.
pub const ORIGIN_LABEL: &str = "Start";
/// Beschriftung des Ziel-Markers.
pub const DESTINATION_LABEL: &str = "Destination";

// ── Snapshots ───────────────────────────────────────────────────────

/// Anzeigedauer der Aufnahme-Bestätigung in Sekunden.
pub const SNAPSHOT_CONFIRMATION_SECS: f64 = 2.0;

/// Alle zur Laufzeit änderbaren Session-Optionen.
/// Wird als `ar_path_recorder.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionOptions {
    // ── Marker ──────────────────────────────────────────────────
    /// Radius der Wegpunkt-Marker
    pub waypoint_marker_radius: f32,
    /// Kappenradius der Segmente
    pub segment_cap_radius: f32,
    /// Sichtweite der Marker ab Kamera
    pub marker_visibility_distance: f32,

    // ── Beschriftung ────────────────────────────────────────────
    /// Beschriftung des ersten Wegpunkts
    pub origin_label: String,
    /// Beschriftung des Ziel-Markers
    pub destination_label: String,

    // ── Snapshots ───────────────────────────────────────────────
    /// Anzeigedauer der Aufnahme-Bestätigung
    pub snapshot_confirmation_secs: f64,

    // ── Tracking ────────────────────────────────────────────────
    /// Nach Unterbrechung relokalisieren statt neu zu starten
    #[serde(default = "default_attempt_relocalization")]
    pub attempt_relocalization: bool,
    /// Features der Standard-Tracking-Konfiguration
    #[serde(default)]
    pub tracking: TrackingFeatures,

    // ── Archiv ──────────────────────────────────────────────────
    /// Verzeichnis für gespeicherte Pfade (optional)
    #[serde(default)]
    pub archive_dir: Option<PathBuf>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            waypoint_marker_radius: WAYPOINT_MARKER_RADIUS,
            segment_cap_radius: SEGMENT_CAP_RADIUS,
            marker_visibility_distance: MARKER_VISIBILITY_DISTANCE,

            origin_label: ORIGIN_LABEL.to_string(),
            destination_label: DESTINATION_LABEL.to_string(),

            snapshot_confirmation_secs: SNAPSHOT_CONFIRMATION_SECS,

            attempt_relocalization: true,
            tracking: TrackingFeatures::default(),

            archive_dir: None,
        }
    }
}

/// Serde-Default für `attempt_relocalization` (Abwärtskompatibilität).
fn default_attempt_relocalization() -> bool {
    true
}

impl SessionOptions {
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
            .unwrap_or_else(|_| std::path::PathBuf::from("ar_path_recorder"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("ar_path_recorder.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_keeps_values() {
        let mut options = SessionOptions::default();
        options.origin_label = "Exit T4".to_string();
        options.marker_visibility_distance = 5.0;

        let text = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: SessionOptions = toml::from_str(&text).expect("parsebar");
        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let text = r#"
            waypoint_marker_radius = 0.1
            segment_cap_radius = 0.05
            marker_visibility_distance = 3.0
            origin_label = "Start"
            destination_label = "Ziel"
            snapshot_confirmation_secs = 2.0
        "#;
        let parsed: SessionOptions = toml::from_str(text).expect("parsebar");
        assert!(parsed.attempt_relocalization);
        assert_eq!(parsed.tracking, TrackingFeatures::default());
        assert!(parsed.archive_dir.is_none());
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("ar_path_recorder_missing_options.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(SessionOptions::load_from_file(&path), SessionOptions::default());
    }
}
