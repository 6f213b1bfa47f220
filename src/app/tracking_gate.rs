//! Tracking-Gate: reine Abbildung des Tracking-Zustands auf Meldung und
//! Freigaben der Oberfläche.

use crate::core::{LimitedReason, TrackingQuality, TrackingStatus};
use crate::shared::GateDecision;

/// Meldung während Pfaddaten geladen werden
pub const MSG_DOWNLOADING: &str = "Downloading data";
/// Meldung im Folge-Modus mit sichtbaren Wegpunkten
pub const MSG_FOLLOW_MARKERS: &str = "Follow the markers to the destination";
/// Meldung im Aufzeichnungs-Modus mit sichtbaren Wegpunkten
pub const MSG_TAP_SAVE: &str = "Tap Save to save the current path";
/// Meldung im Aufzeichnungs-Modus ohne Wegpunkte
pub const MSG_TAP_TO_PLACE: &str = "Tap on the screen to place a marker";
/// Meldung solange die Umgebung noch kartiert wird
pub const MSG_MOVE_AROUND: &str = "Move around to map the environment";
/// Meldung während der Relokalisierung
pub const MSG_RELOCALIZE: &str = "Move your device to the location shown in the image";

/// Eingaben einer Gate-Auswertung für genau einen Frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateInput {
    /// Tracking- und Mapping-Status des Frames
    pub status: TrackingStatus,
    /// Frame enthält mindestens einen Wegpunkt-Anker
    pub has_waypoints: bool,
    /// Frame enthält den zuletzt platzierten Anker
    pub has_placed_anchor: bool,
    /// Aufzeichnungs-Modus
    pub is_authoring: bool,
    /// Geladene Karte dient als Relokalisierungs-Referenz (bis zum Reset)
    pub is_relocalizing: bool,
    /// Frühere Kartendaten vorhanden
    pub has_prior_map: bool,
    /// Pfaddaten werden noch geladen
    pub is_downloading: bool,
    /// Start-Snapshot vorhanden
    pub has_start_snapshot: bool,
    /// Ziel-Snapshot vorhanden
    pub has_destination_snapshot: bool,
}

/// Wertet das Gate aus. Gleiche Eingaben liefern immer die gleiche Entscheidung.
pub fn evaluate(input: &GateInput) -> GateDecision {
    let (message, snapshot_thumbnail_visible) = message_for(input);
    let save_enabled = input.status.mapping.is_sufficient()
        && input.has_placed_anchor
        && input.has_start_snapshot
        && input.has_destination_snapshot;

    GateDecision {
        message,
        save_enabled,
        snapshot_thumbnail_visible,
    }
}

fn message_for(input: &GateInput) -> (&'static str, bool) {
    if input.is_downloading && !input.is_authoring {
        return (MSG_DOWNLOADING, false);
    }

    let quality = input.status.quality;
    match quality {
        TrackingQuality::Normal if input.status.mapping.is_sufficient() => {
            let message = match (input.has_waypoints, input.is_authoring) {
                (true, false) => MSG_FOLLOW_MARKERS,
                (true, true) => MSG_TAP_SAVE,
                (false, true) => MSG_TAP_TO_PLACE,
                (false, false) => MSG_MOVE_AROUND,
            };
            (message, false)
        }
        TrackingQuality::Normal if !input.has_prior_map || !input.is_relocalizing => {
            (MSG_MOVE_AROUND, false)
        }
        TrackingQuality::Limited(LimitedReason::Relocalizing) if input.is_relocalizing => {
            (MSG_RELOCALIZE, true)
        }
        _ => (quality.feedback(), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MappingStatus;

    fn input(quality: TrackingQuality, mapping: MappingStatus) -> GateInput {
        GateInput {
            status: TrackingStatus::new(quality, mapping),
            has_waypoints: false,
            has_placed_anchor: false,
            is_authoring: true,
            is_relocalizing: false,
            has_prior_map: false,
            is_downloading: false,
            has_start_snapshot: false,
            has_destination_snapshot: false,
        }
    }

    #[test]
    fn test_mapped_authoring_with_waypoints_prompts_save() {
        let mut gate = input(TrackingQuality::Normal, MappingStatus::Mapped);
        gate.has_waypoints = true;

        assert_eq!(evaluate(&gate).message, MSG_TAP_SAVE);
    }

    #[test]
    fn test_extending_without_waypoints_prompts_tap() {
        let gate = input(TrackingQuality::Normal, MappingStatus::Extending);

        let decision = evaluate(&gate);

        assert_eq!(decision.message, MSG_TAP_TO_PLACE);
        assert!(!decision.snapshot_thumbnail_visible);
    }

    #[test]
    fn test_following_messages() {
        let mut gate = input(TrackingQuality::Normal, MappingStatus::Mapped);
        gate.is_authoring = false;
        assert_eq!(evaluate(&gate).message, MSG_MOVE_AROUND);

        gate.has_waypoints = true;
        assert_eq!(evaluate(&gate).message, MSG_FOLLOW_MARKERS);
    }

    #[test]
    fn test_downloading_wins_only_when_following() {
        let mut gate = input(TrackingQuality::Normal, MappingStatus::Mapped);
        gate.is_downloading = true;
        gate.is_authoring = false;
        assert_eq!(evaluate(&gate).message, MSG_DOWNLOADING);

        gate.is_authoring = true;
        assert_eq!(evaluate(&gate).message, MSG_TAP_TO_PLACE);
    }

    #[test]
    fn test_normal_with_limited_mapping() {
        let mut gate = input(TrackingQuality::Normal, MappingStatus::Limited);
        assert_eq!(evaluate(&gate).message, MSG_MOVE_AROUND);

        // Relokalisierung mit Karte: kein Hinweis aus den Normal-Zweigen
        gate.is_authoring = false;
        gate.is_relocalizing = true;
        gate.has_prior_map = true;
        assert_eq!(evaluate(&gate).message, "");
        assert!(!evaluate(&gate).info_visible());
    }

    #[test]
    fn test_relocalizing_shows_thumbnail() {
        let mut gate = input(
            TrackingQuality::Limited(LimitedReason::Relocalizing),
            MappingStatus::Limited,
        );
        gate.is_authoring = false;
        gate.is_relocalizing = true;
        gate.has_prior_map = true;

        let decision = evaluate(&gate);

        assert_eq!(decision.message, MSG_RELOCALIZE);
        assert!(decision.snapshot_thumbnail_visible);
    }

    #[test]
    fn test_limited_falls_back_to_feedback() {
        let gate = input(
            TrackingQuality::Limited(LimitedReason::ExcessiveMotion),
            MappingStatus::Limited,
        );

        assert_eq!(
            evaluate(&gate).message,
            TrackingQuality::Limited(LimitedReason::ExcessiveMotion).feedback()
        );
    }

    #[test]
    fn test_save_requires_both_snapshots_and_anchor() {
        let mut gate = input(TrackingQuality::Normal, MappingStatus::Mapped);
        gate.has_waypoints = true;
        gate.has_placed_anchor = true;
        gate.has_start_snapshot = true;
        assert!(!evaluate(&gate).save_enabled);

        gate.has_destination_snapshot = true;
        assert!(evaluate(&gate).save_enabled);

        gate.status.mapping = MappingStatus::Limited;
        assert!(!evaluate(&gate).save_enabled);
    }

    #[test]
    fn test_evaluate_is_pure() {
        let mut gate = input(
            TrackingQuality::Limited(LimitedReason::InsufficientFeatures),
            MappingStatus::Extending,
        );
        gate.has_start_snapshot = true;

        assert_eq!(evaluate(&gate), evaluate(&gate));
    }
}
