//! Backend route table.
//!
//! Both transports (browser and CLI) build URLs through these helpers so the
//! path shapes, trailing slashes included, live in exactly one place.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

const BASE: &str = "/calidad";

#[must_use]
pub fn auth_me() -> String {
    "/auth/me/".to_owned()
}

#[must_use]
pub fn list() -> String {
    format!("{BASE}/")
}

#[must_use]
pub fn by_hd(id_hd: i64) -> String {
    format!("{BASE}/vehiculo/{id_hd}/")
}

#[must_use]
pub fn item(id: i64) -> String {
    format!("{BASE}/item/{id}/")
}

#[must_use]
pub fn previous(id_hd: i64) -> String {
    format!("{BASE}/vehiculo-previo/{id_hd}/")
}

#[must_use]
pub fn comments(id_chip: i64) -> String {
    format!("{BASE}/comentarios/{id_chip}/")
}

#[must_use]
pub fn create_comment() -> String {
    format!("{BASE}/comentarios/")
}

#[must_use]
pub fn start(id: i64) -> String {
    format!("{BASE}/{id}/iniciar/")
}

#[must_use]
pub fn finalize(id: i64) -> String {
    format!("{BASE}/{id}/finalizar/")
}

/// Join a route path onto the configured base URL.
///
/// An empty base keeps the path relative (same-origin requests).
#[must_use]
pub fn join(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}
