use super::*;

#[test]
fn first_record_unwraps_list_payload() {
    let value = serde_json::json!([{ "id": 4, "id_hd": 77 }, { "id": 5, "id_hd": 77 }]);
    let record = first_record(77, value).expect("record");
    assert_eq!(record.id, 4);
}

#[test]
fn first_record_accepts_object_payload() {
    let record = first_record(77, serde_json::json!({ "id": 6 })).expect("record");
    assert_eq!(record.id, 6);
}

#[test]
fn first_record_rejects_empty_list() {
    let err = first_record(77, serde_json::json!([])).expect_err("empty");
    assert_eq!(err.to_string(), "invalid response body: no record for id_hd=77");
}

#[test]
fn first_record_rejects_wrong_shape() {
    let err = first_record(77, serde_json::json!("nope")).expect_err("shape");
    assert!(matches!(err, ApiError::Decode(_)));
}
