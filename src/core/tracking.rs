//! Eingangsdaten des Tracking-Collaborators: Qualität, Mapping-Status,
//! Frames, Konfiguration und Raycast-Vertrag.

use super::{Anchor, PersistedMap};
use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Grund für eingeschränktes Tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitedReason {
    /// Session startet noch
    Initializing,
    /// Gerät wird zu schnell bewegt
    ExcessiveMotion,
    /// Zu wenig erkennbare Oberflächenstruktur
    InsufficientFeatures,
    /// Relokalisierung gegen eine bekannte Karte läuft
    Relocalizing,
}

/// Tracking-Qualität der Kamera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackingQuality {
    /// Kein Tracking möglich
    NotAvailable,
    /// Eingeschränktes Tracking
    Limited(LimitedReason),
    /// Normales Tracking
    Normal,
}

impl TrackingQuality {
    /// Gibt `true` zurück, wenn das Tracking normal läuft.
    pub fn is_normal(self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Nutzerhinweis des Collaborators für den aktuellen Zustand.
    pub fn feedback(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::NotAvailable => "Tracking unavailable.",
            Self::Limited(LimitedReason::Initializing) => {
                "Move the device around to detect horizontal and vertical surfaces."
            }
            Self::Limited(LimitedReason::ExcessiveMotion) => "Move the device more slowly.",
            Self::Limited(LimitedReason::InsufficientFeatures) => {
                "Point the device at an area with visible surface detail, or improve lighting conditions."
            }
            Self::Limited(LimitedReason::Relocalizing) => {
                "Resuming session: move to where you were when the session was interrupted."
            }
        }
    }
}

impl fmt::Display for TrackingQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAvailable => f.write_str("Not available"),
            Self::Normal => f.write_str("Normal"),
            Self::Limited(LimitedReason::Initializing) => f.write_str("Initializing"),
            Self::Limited(LimitedReason::ExcessiveMotion) => f.write_str("Excessive motion"),
            Self::Limited(LimitedReason::InsufficientFeatures) => {
                f.write_str("Insufficient features")
            }
            Self::Limited(LimitedReason::Relocalizing) => f.write_str("Relocalizing"),
        }
    }
}

/// Selbsteinschätzung des Collaborators, wie gut die Umgebung kartiert ist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingStatus {
    /// Keine Karte verfügbar
    NotAvailable,
    /// Karte unvollständig
    Limited,
    /// Karte wird um neue Bereiche erweitert
    Extending,
    /// Umgebung ausreichend kartiert
    Mapped,
}

impl MappingStatus {
    /// Reicht der Status für eine wiederverwendbare World-Map?
    pub fn is_sufficient(self) -> bool {
        matches!(self, Self::Extending | Self::Mapped)
    }
}

impl fmt::Display for MappingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotAvailable => "Not available",
            Self::Limited => "Limited",
            Self::Extending => "Extending",
            Self::Mapped => "Mapped",
        })
    }
}

/// Zusammengesetzter Tracking-Status eines Frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackingStatus {
    /// Tracking-Qualität
    pub quality: TrackingQuality,
    /// Mapping-Status
    pub mapping: MappingStatus,
}

impl TrackingStatus {
    /// Erstellt einen Status aus Qualität und Mapping.
    pub fn new(quality: TrackingQuality, mapping: MappingStatus) -> Self {
        Self { quality, mapping }
    }
}

impl fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mapping: {}\nTracking: {}", self.mapping, self.quality)
    }
}

/// Ein Kamera-Frame, wie ihn der Collaborator meldet.
#[derive(Debug, Clone)]
pub struct TrackingFrame {
    /// Zeitstempel in Sekunden
    pub timestamp: f64,
    /// Tracking- und Mapping-Status
    pub status: TrackingStatus,
    /// Kameraposition in Weltkoordinaten
    pub camera_position: Vec3,
    /// Aktuell verfolgte Anker
    pub anchors: Vec<Anchor>,
}

/// Fehler, den der Tracking-Collaborator meldet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{description}")]
pub struct TrackingError {
    /// Lokalisierte Fehlerbeschreibung
    pub description: String,
    /// Optionale Ursache
    pub failure_reason: Option<String>,
    /// Optionaler Lösungsvorschlag
    pub recovery_suggestion: Option<String>,
}

impl TrackingError {
    /// Erstellt einen Fehler nur mit Beschreibung.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            failure_reason: None,
            recovery_suggestion: None,
        }
    }

    /// Alarmtext: Beschreibung, Ursache und Vorschlag zeilenweise.
    pub fn alert_message(&self) -> String {
        std::iter::once(self.description.as_str())
            .chain(self.failure_reason.as_deref())
            .chain(self.recovery_suggestion.as_deref())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Feature-Schalter der Standard-Tracking-Konfiguration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingFeatures {
    /// Horizontale Ebenen erkennen
    pub horizontal_planes: bool,
    /// Vertikale Ebenen erkennen
    pub vertical_planes: bool,
    /// Automatische Umgebungstexturen
    pub environment_texturing: bool,
    /// Mesh-Rekonstruktion mit Klassifikation
    pub scene_reconstruction: bool,
    /// Personen-Verdeckung, falls das Gerät sie unterstützt
    pub person_segmentation: bool,
}

impl Default for TrackingFeatures {
    fn default() -> Self {
        Self {
            horizontal_planes: true,
            vertical_planes: true,
            environment_texturing: true,
            scene_reconstruction: true,
            person_segmentation: true,
        }
    }
}

/// Konfiguration für `TrackingSession::run`.
#[derive(Debug, Clone)]
pub struct TrackingConfiguration {
    /// Aktivierte Features
    pub features: TrackingFeatures,
    /// Karte, gegen die relokalisiert werden soll
    pub initial_map: Option<PersistedMap>,
}

impl TrackingConfiguration {
    /// Standardkonfiguration ohne Startkarte.
    pub fn new(features: TrackingFeatures) -> Self {
        Self {
            features,
            initial_map: None,
        }
    }

    /// Konfiguration mit Karte als Relokalisierungs-Seed.
    pub fn with_initial_map(features: TrackingFeatures, map: PersistedMap) -> Self {
        Self {
            features,
            initial_map: Some(map),
        }
    }
}

/// Optionen beim (Neu-)Start der Tracking-Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Tracking-Zustand verwerfen
    pub reset_tracking: bool,
    /// Alle vorhandenen Anker entfernen
    pub remove_existing_anchors: bool,
}

impl RunOptions {
    /// Kompletter Neustart: Tracking und Anker zurücksetzen.
    pub const RESET: Self = Self {
        reset_tracking: true,
        remove_existing_anchors: true,
    };
}

/// Zielgeometrie einer Raycast-Anfrage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaycastTarget {
    /// Erkannte Ebenen, unendlich fortgesetzt
    ExistingPlaneInfinite,
    /// Geschätzte Ebenen
    EstimatedPlane,
}

/// Ausrichtung der Zielfläche
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaycastAlignment {
    /// Nur horizontale Flächen
    Horizontal,
    /// Nur vertikale Flächen
    Vertical,
    /// Beliebige Ausrichtung
    Any,
}

/// Raycast-Anfrage ausgehend von einem Bildschirmpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastQuery {
    /// Bildschirmpunkt in View-Koordinaten
    pub screen_point: Vec2,
    /// Zielgeometrie
    pub target: RaycastTarget,
    /// Ausrichtung
    pub alignment: RaycastAlignment,
}

impl RaycastQuery {
    /// Anfrage gegen erkannte horizontale Ebenen (Boden).
    pub fn horizontal_plane(screen_point: Vec2) -> Self {
        Self {
            screen_point,
            target: RaycastTarget::ExistingPlaneInfinite,
            alignment: RaycastAlignment::Horizontal,
        }
    }
}

/// Ein Raycast-Treffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// Welt-Transformation des Treffers
    pub world_transform: Mat4,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sufficient_mapping_is_extending_or_mapped() {
        assert!(MappingStatus::Extending.is_sufficient());
        assert!(MappingStatus::Mapped.is_sufficient());
        assert!(!MappingStatus::Limited.is_sufficient());
        assert!(!MappingStatus::NotAvailable.is_sufficient());
    }

    #[test]
    fn normal_tracking_has_no_feedback() {
        assert!(TrackingQuality::Normal.feedback().is_empty());
        assert!(!TrackingQuality::NotAvailable.feedback().is_empty());
    }

    #[test]
    fn status_diagnostics_lists_mapping_then_tracking() {
        let status = TrackingStatus::new(
            TrackingQuality::Limited(LimitedReason::ExcessiveMotion),
            MappingStatus::Extending,
        );
        assert_eq!(
            status.to_string(),
            "Mapping: Extending\nTracking: Excessive motion"
        );
    }

    #[test]
    fn alert_message_skips_missing_parts() {
        let mut error = TrackingError::new("Camera unavailable");
        assert_eq!(error.alert_message(), "Camera unavailable");

        error.recovery_suggestion = Some("Restart the app".to_string());
        assert_eq!(error.alert_message(), "Camera unavailable\nRestart the app");
    }
}
