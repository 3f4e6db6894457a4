use commodity_forecast::encoder::{CategoryEncoder, LabelEncoder};
use commodity_forecast::error::PredictError;
use pretty_assertions::assert_eq;

fn encoder() -> CategoryEncoder {
    CategoryEncoder::from_vocabularies(
        vec![
            "Aceh".to_string(),
            "Bali".to_string(),
            "Jawa Barat".to_string(),
        ],
        vec!["Beras".to_string(), "Cabai Merah".to_string()],
    )
}

#[test]
fn test_known_vocabularies_are_exposed() {
    let enc = encoder();
    assert_eq!(enc.known_provinces().len(), 3);
    assert_eq!(enc.known_commodities().len(), 2);
    assert_eq!(enc.known_provinces()[2], "Jawa Barat");
}

#[test]
fn test_encode_yields_training_time_ids() {
    let enc = encoder();
    assert_eq!(enc.encode_province("Aceh").unwrap(), 0);
    assert_eq!(enc.encode_province("Jawa Barat").unwrap(), 2);
    assert_eq!(enc.encode_commodity("Cabai Merah").unwrap(), 1);
}

#[test]
fn test_unknown_label_never_defaults() {
    let enc = encoder();
    let err = enc.encode_province("Atlantis").unwrap_err();
    assert!(matches!(
        err,
        PredictError::UnknownCategory {
            kind: "province",
            ..
        }
    ));
}

#[test]
fn test_whitespace_is_not_silently_trimmed() {
    // The encoder is a pure lookup; normalization policy lives in the
    // resolver's two-step retry, not here.
    let enc = encoder();
    assert!(enc.encode_province(" Aceh ").is_err());
}

#[test]
fn test_encode_decode_round_trip() {
    let enc = encoder();
    for label in ["Aceh", "Bali", "Jawa Barat"] {
        let id = enc.encode_province(label).unwrap();
        assert_eq!(enc.decode_province(id), Some(label));
    }
    for label in ["Beras", "Cabai Merah"] {
        let id = enc.encode_commodity(label).unwrap();
        assert_eq!(enc.decode_commodity(id), Some(label));
    }
}

#[test]
fn test_decode_out_of_range() {
    let enc = LabelEncoder::from_classes("province", vec!["Aceh".to_string()]);
    assert_eq!(enc.decode(7), None);
}

#[test]
fn test_untrimmed_vocabulary_entries_stay_reachable() {
    // The trained vocabulary itself may hold untrimmed entries; exact
    // lookups against them must keep working.
    let enc = LabelEncoder::from_classes("province", vec![" Papua ".to_string()]);
    assert_eq!(enc.encode(" Papua ").unwrap(), 0);
    assert!(enc.encode("Papua").is_err());
}
