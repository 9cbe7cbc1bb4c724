//! Tests for the domain models.

use super::*;

fn sample_flow() -> FlowDefinition {
    FlowDefinition {
        id: FlowId::new("interior"),
        title: "Interior".to_string(),
        before: vec![
            "Salpicadero".to_string(),
            "Asientos delanteros".to_string(),
            "Asientos traseros".to_string(),
        ],
        cleaning: vec!["Aspirado".to_string()],
    }
}

mod phase {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_canonical_names_case_insensitively() {
        assert_eq!(Phase::from_str("BEFORE").unwrap(), Phase::Before);
        assert_eq!(Phase::from_str("cleaning").unwrap(), Phase::Cleaning);
        assert_eq!(Phase::from_str("After").unwrap(), Phase::After);
        assert!(Phase::from_str("during").is_err());
    }

    #[test]
    fn round_trips_through_as_str() {
        for phase in [Phase::Before, Phase::Cleaning, Phase::After] {
            assert_eq!(Phase::from_str(phase.as_str()).unwrap(), phase);
        }
    }

    #[test]
    fn display_uses_localized_heading() {
        assert_eq!(Phase::Before.to_string(), "ANTES");
        assert_eq!(Phase::Cleaning.to_string(), "LIMPIEZA");
        assert_eq!(Phase::After.to_string(), "DESPUÉS");
    }

    #[test]
    fn serializes_to_uppercase_wire_form() {
        let json = serde_json::to_string(&Phase::After).unwrap();
        assert_eq!(json, "\"AFTER\"");
        let back: Phase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Phase::After);
    }
}

mod flow {
    use super::*;

    #[test]
    fn flow_id_is_transparent_in_json() {
        let id = FlowId::new("exterior_detailed");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"exterior_detailed\"");
    }

    #[test]
    fn after_labels_mirror_before() {
        let flow = sample_flow();
        assert_eq!(flow.labels(Phase::After), flow.labels(Phase::Before));
        assert_eq!(flow.labels(Phase::Cleaning), ["Aspirado"]);
    }

    #[test]
    fn step_count_doubles_before_and_adds_cleaning() {
        let flow = sample_flow();
        // 3 before + 1 cleaning + 3 after
        assert_eq!(flow.step_count(), 7);
    }

    #[test]
    fn flow_without_before_labels_contributes_no_steps() {
        let flow = FlowDefinition {
            id: FlowId::new("empty"),
            title: "Empty".to_string(),
            before: vec![],
            cleaning: vec!["Algo".to_string()],
        };
        assert_eq!(flow.step_count(), 0);
    }

    #[test]
    fn definition_parses_without_cleaning_field() {
        let json = r#"{"id":"exterior","title":"Exterior","before":["Frontal"]}"#;
        let flow: FlowDefinition = serde_json::from_str(json).unwrap();
        assert!(flow.cleaning.is_empty());
        assert_eq!(flow.step_count(), 2);
    }
}

mod slot {
    use super::*;

    fn photo() -> PhotoData {
        PhotoData {
            bytes: vec![0xFF, 0xD8, 0xFF],
            width_px: 1280,
            height_px: 960,
        }
    }

    #[test]
    fn aspect_ratio_is_width_over_height() {
        assert!((photo().aspect_ratio() - 4.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn default_slot_is_empty() {
        let slot = Slot::default();
        assert!(slot.is_empty());
        assert!(slot.captured().is_none());
    }

    #[test]
    fn filled_slot_exposes_its_capture() {
        let slot = Slot::Filled(CapturedPhoto {
            label: "Capó".to_string(),
            photo: photo(),
        });
        assert!(!slot.is_empty());
        assert_eq!(slot.captured().unwrap().label, "Capó");
    }

    #[test]
    fn photo_debug_does_not_dump_bytes() {
        let rendered = format!("{:?}", photo());
        assert!(rendered.contains("bytes: 3"));
        assert!(!rendered.contains("255"));
    }
}

mod vehicle {
    use super::*;

    #[test]
    fn blank_fields_normalize_to_none() {
        let info = VehicleInfo::new(Some("   ".to_string()), Some(String::new()));
        assert!(info.is_empty());
        assert_eq!(info, VehicleInfo::default());
    }

    #[test]
    fn provided_fields_are_kept() {
        let info = VehicleInfo::new(Some("1234 ABC".to_string()), None);
        assert!(!info.is_empty());
        assert_eq!(info.plate.as_deref(), Some("1234 ABC"));
        assert!(info.model.is_none());
    }
}

mod step {
    use super::*;

    #[test]
    fn key_exposes_the_addressing_triple() {
        let step = CaptureStep {
            flow: FlowId::new("interior"),
            phase: Phase::After,
            step_index: 2,
            label: "Asientos traseros".to_string(),
        };
        let (flow, phase, index) = step.key();
        assert_eq!(flow.as_str(), "interior");
        assert_eq!(phase, Phase::After);
        assert_eq!(index, 2);
    }
}
