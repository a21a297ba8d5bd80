use super::*;

use axum::extract::Path;
use axum::http::{HeaderMap as AxumHeaders, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

// =============================================================
// In-process backend
// =============================================================

async fn me(headers: AxumHeaders) -> (StatusCode, Json<Value>) {
    let cookie = headers.get("cookie").and_then(|v| v.to_str().ok()).unwrap_or_default();
    if cookie.contains("sessionid=abc") {
        (StatusCode::OK, Json(json!({ "status": "ok", "message": "Usuario autenticado" })))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "code": "unauthorized", "message": "Sesión no válida" })),
        )
    }
}

async fn list() -> Json<Value> {
    Json(json!([
        { "id": 1, "status": "Pendiente", "no_placas": "ABC123", "kilometraje": 45210 },
        { "id": 2, "status": "INICIADA", "fecha_hora_ini_oper": "2025-03-04T09:15:00" }
    ]))
}

async fn by_hd(Path(id_hd): Path<i64>) -> Json<Value> {
    if id_hd == 77 {
        Json(json!([{ "id": 5, "id_hd": 77, "vehiculo": "Mazda 3" }]))
    } else {
        Json(json!([]))
    }
}

async fn previous(Path(id_hd): Path<i64>) -> Json<Value> {
    Json(json!({ "id": 90, "id_hd": id_hd, "status": "Lavado" }))
}

async fn item(Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "code": "not_found",
            "message": "El recurso solicitado no existe.",
            "detail": format!("id={id}")
        })),
    )
}

async fn comments(Path(id_chip): Path<i64>) -> Json<Value> {
    Json(json!([{
        "id_chip": id_chip,
        "fecha": "2025-03-04T10:00:00",
        "status": "Comentario",
        "cve_usuario": "admin",
        "id_linea": 1,
        "comentario": "Falta lavado"
    }]))
}

async fn create_comment(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "id_chip": body["id_chip"],
        "fecha": "2025-03-04T10:05:00",
        "status": body["status"],
        "cve_usuario": body["cve_usuario"],
        "id_linea": 2,
        "comentario": body["comentario"]
    }))
}

async fn start(Path(id): Path<i64>, Json(body): Json<Value>) -> Json<Value> {
    let status = if body["usuario"] == "admin" { "INICIADA" } else { "PENDIENTE" };
    Json(json!({ "id": id, "status": status }))
}

/// Only an explicit approval is reported as finished.
async fn finalize(Path(id): Path<i64>, Json(body): Json<Value>) -> Json<Value> {
    let status = if body["status_os"] == "Aprobado" { "TERMINADO" } else { "INICIADA" };
    Json(json!({ "id": id, "status": status, "status_os": body["status_os"] }))
}

fn backend() -> Router {
    Router::new()
        .route("/auth/me/", get(me))
        .route("/calidad/", get(list))
        .route("/calidad/vehiculo/{id_hd}/", get(by_hd))
        .route("/calidad/vehiculo-previo/{id_hd}/", get(previous))
        .route("/calidad/item/{id}/", get(item))
        .route("/calidad/comentarios/{id_chip}/", get(comments))
        .route("/calidad/comentarios/", post(create_comment))
        .route("/calidad/{id}/iniciar/", post(start))
        .route("/calidad/{id}/finalizar/", post(finalize))
}

async fn serve() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, backend()).await.unwrap();
    });
    format!("http://{addr}/")
}

async fn api(cookie: Option<&str>) -> ReqwestQualityApi {
    ReqwestQualityApi::new(serve().await, cookie).unwrap()
}

// =============================================================
// Setup
// =============================================================

#[test]
fn invalid_cookie_is_rejected() {
    let err = ReqwestQualityApi::new("http://localhost", Some("sessionid=abc\n")).unwrap_err();
    assert!(matches!(err, ClientSetupError::InvalidCookie(_)));
}

// =============================================================
// Reads
// =============================================================

#[tokio::test]
async fn current_user_sends_session_cookie() {
    let session = api(Some("sessionid=abc")).await.current_user().await.unwrap();
    assert!(session.is_ok());
}

#[tokio::test]
async fn current_user_without_cookie_decodes_error_envelope() {
    let err = api(None).await.current_user().await.unwrap_err();
    match err {
        ApiError::Status { status, body: Some(body) } => {
            assert_eq!(status, 401);
            assert_eq!(body.message, "Sesión no válida");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn list_decodes_records() {
    let items = api(None).await.list().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].no_placas.as_deref(), Some("ABC123"));
    assert_eq!(items[0].kilometraje, Some(45_210));
    assert!(items[1].fecha_hora_ini_oper.is_some());
}

#[tokio::test]
async fn get_by_hd_unwraps_first_record() {
    let api = api(None).await;
    let record = api.get_by_hd(77).await.unwrap();
    assert_eq!(record.id, 5);

    let err = api.get_by_hd(78).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn previous_decodes_snapshot() {
    let record = api(None).await.previous(77).await.unwrap();
    assert_eq!(record.id, 90);
    assert_eq!(record.id_hd, Some(77));
    assert_eq!(record.status.as_deref(), Some("Lavado"));
}

#[tokio::test]
async fn missing_item_carries_backend_detail() {
    let err = api(None).await.get(9).await.unwrap_err();
    assert_eq!(err.user_message(), "El recurso solicitado no existe. (id=9)");
}

// =============================================================
// Writes
// =============================================================

#[tokio::test]
async fn create_comment_posts_body() {
    let api = api(None).await;
    let created = api
        .create_comment(&NewComment::operator(30, "admin", "Revisar frenos"))
        .await
        .unwrap();
    assert_eq!(created.id_chip, 30);
    assert_eq!(created.status, "Comentario");
    assert_eq!(created.comentario, "Revisar frenos");

    let thread = api.comments(30).await.unwrap();
    assert_eq!(thread[0].comentario, "Falta lavado");
}

#[tokio::test]
async fn start_reports_backend_status() {
    let api = api(None).await;
    let admin = ReviewRequest { usuario: "admin".into(), status_os: None };
    let other = ReviewRequest { usuario: "otro".into(), status_os: None };
    assert!(api.start(1, &admin).await.unwrap());
    assert!(!api.start(1, &other).await.unwrap());
}

#[tokio::test]
async fn finalize_sends_outcome() {
    let api = api(None).await;
    let approve = ReviewRequest { usuario: "admin".into(), status_os: Some("Aprobado".into()) };
    let plain = ReviewRequest { usuario: "admin".into(), status_os: None };
    assert!(api.finalize(2, &approve).await.unwrap());
    assert!(!api.finalize(2, &plain).await.unwrap());
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let api = ReqwestQualityApi::new("http://127.0.0.1:1", None).unwrap();
    assert!(matches!(api.list().await, Err(ApiError::Transport(_))));
}
