use super::*;

#[test]
fn test_parse_round_trips_all_models() {
    for model in ModelId::ALL {
        assert_eq!(ModelId::parse(model.as_str()), Some(model));
    }
}

#[test]
fn test_parse_rejects_unknown() {
    assert_eq!(ModelId::parse("gemini-9.9-ultra"), None);
    assert_eq!(ModelId::parse(""), None);
}

#[test]
fn test_default_model() {
    assert_eq!(ModelId::default(), ModelId::Gemini20Flash);
    assert_eq!(ModelId::default().as_str(), "gemini-2.0-flash");
}

#[test]
fn test_display_matches_wire_identifier() {
    assert_eq!(ModelId::Gemini25Pro.to_string(), "gemini-2.5-pro");
}

#[test]
fn test_categories() {
    assert_eq!(ModelId::Gemini25Pro.category(), ModelCategory::Pro);
    assert_eq!(ModelId::Gemini15Flash.category(), ModelCategory::Flash);
    assert_eq!(ModelId::Gemini20Flash.category(), ModelCategory::Flash);
    assert_eq!(ModelId::Gemini25Flash.category(), ModelCategory::Flash);
}

#[test]
fn test_category_labels() {
    assert_eq!(ModelCategory::Flash.as_str(), "Flash Models");
    assert_eq!(ModelCategory::Pro.as_str(), "Pro Models");
}

#[test]
fn test_display_names() {
    assert_eq!(ModelId::Gemini20Flash.display_name(), "Gemini 2.0 Flash");
}

#[test]
fn test_descriptions_are_distinct() {
    let mut seen = std::collections::HashSet::new();
    for model in ModelId::ALL {
        assert!(seen.insert(model.description()));
    }
}

#[test]
fn test_serde_as_wire_string() {
    let json = serde_json::to_string(&ModelId::Gemini25Flash).unwrap();
    assert_eq!(json, "\"gemini-2.5-flash\"");

    let parsed: ModelId = serde_json::from_str("\"gemini-1.5-flash\"").unwrap();
    assert_eq!(parsed, ModelId::Gemini15Flash);
}

#[test]
fn test_serde_rejects_unknown() {
    let result: Result<ModelId, _> = serde_json::from_str("\"gpt-4\"");
    assert!(result.is_err());
}

#[test]
fn test_from_str_for_cli() {
    let model: ModelId = "gemini-2.5-pro".parse().unwrap();
    assert_eq!(model, ModelId::Gemini25Pro);
    assert!("nope".parse::<ModelId>().is_err());
}
