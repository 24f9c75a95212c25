use super::*;

#[test]
fn test_request_envelope_shape() {
    let request = GenerateContentRequest::from_prompt("Explain this.");
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "contents": [
                { "parts": [ { "text": "Explain this." } ] }
            ]
        })
    );
}

#[test]
fn test_request_skips_role_when_absent() {
    let request = GenerateContentRequest::from_prompt("x");
    let json = serde_json::to_value(&request).unwrap();
    assert!(json["contents"][0].get("role").is_none());
}

#[test]
fn test_response_deserialization() {
    let json = serde_json::json!({
        "candidates": [
            {
                "content": {
                    "role": "model",
                    "parts": [ { "text": "Plain words." } ]
                },
                "finishReason": "STOP"
            }
        ]
    });

    let response: GenerateContentResponse = serde_json::from_value(json).unwrap();
    assert_eq!(response.first_text(), Some("Plain words."));
    assert_eq!(
        response.candidates[0].finish_reason.as_deref(),
        Some("STOP")
    );
}

#[test]
fn test_first_text_no_candidates() {
    let response: GenerateContentResponse =
        serde_json::from_value(serde_json::json!({ "candidates": [] })).unwrap();
    assert_eq!(response.first_text(), None);
}

#[test]
fn test_first_text_missing_candidates_field() {
    let response: GenerateContentResponse =
        serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(response.first_text(), None);
}

#[test]
fn test_first_text_empty_text_is_none() {
    let json = serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": "" } ] } }
        ]
    });
    let response: GenerateContentResponse = serde_json::from_value(json).unwrap();
    assert_eq!(response.first_text(), None);
}

#[test]
fn test_first_text_non_text_part_is_none() {
    // Non-text parts deserialize with an empty text field.
    let json = serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "functionCall": { "name": "f", "args": {} } } ] } }
        ]
    });
    let response: GenerateContentResponse = serde_json::from_value(json).unwrap();
    assert_eq!(response.first_text(), None);
}

#[test]
fn test_first_text_uses_first_candidate_only() {
    let json = serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": "first" } ] } },
            { "content": { "parts": [ { "text": "second" } ] } }
        ]
    });
    let response: GenerateContentResponse = serde_json::from_value(json).unwrap();
    assert_eq!(response.first_text(), Some("first"));
}

#[test]
fn test_error_envelope_deserialization() {
    let json = serde_json::json!({
        "error": {
            "code": 429,
            "message": "Quota exceeded for quota metric",
            "status": "RESOURCE_EXHAUSTED"
        }
    });

    let envelope: ApiErrorEnvelope = serde_json::from_value(json).unwrap();
    assert_eq!(envelope.error.code, Some(429));
    assert!(envelope.error.message.contains("Quota exceeded"));
    assert_eq!(envelope.error.status.as_deref(), Some("RESOURCE_EXHAUSTED"));
}

#[test]
fn test_error_envelope_message_only() {
    let json = serde_json::json!({ "error": { "message": "boom" } });
    let envelope: ApiErrorEnvelope = serde_json::from_value(json).unwrap();
    assert_eq!(envelope.error.message, "boom");
    assert_eq!(envelope.error.code, None);
}
