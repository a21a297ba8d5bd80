use super::*;

#[test]
fn from_status_decodes_backend_envelope() {
    let err = ApiError::from_status(
        422,
        r#"{"code":"validation_error","message":"Datos inválidos.","detail":"La calidad ya fue iniciada."}"#,
    );
    let ApiError::Status { status, body: Some(body) } = &err else {
        panic!("expected decoded status error, got {err:?}");
    };
    assert_eq!(*status, 422);
    assert_eq!(body.code, "validation_error");
    assert_eq!(err.user_message(), "Datos inválidos. (La calidad ya fue iniciada.)");
}

#[test]
fn from_status_keeps_unparseable_body_as_none() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert!(matches!(err, ApiError::Status { status: 502, body: None }));
    assert_eq!(err.user_message(), "request failed with status 502");
}

#[test]
fn user_message_skips_empty_detail() {
    let err = ApiError::from_status(404, r#"{"code":"not_found","message":"No existe.","detail":""}"#);
    assert_eq!(err.user_message(), "No existe.");
}

#[test]
fn busy_message_names_record() {
    assert_eq!(ApiError::Busy { id: 12 }.user_message(), "review 12 already has a request in flight");
}

#[test]
fn serde_errors_become_decode_errors() {
    let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, ApiError::Decode(_)));
}
