use super::*;
use quality::ActionLayout;

#[test]
fn resolve_without_values_uses_defaults() {
    assert_eq!(resolve(&[]), ClientConfig::default());
}

#[test]
fn resolve_reads_baked_values() {
    let config = resolve(&[
        ("CALIDAD_API_URL", Some("https://calidad.example.com")),
        ("CALIDAD_OPERATOR", Some("jlopez")),
        ("CALIDAD_CARD_ACTIONS", Some("finalize")),
        ("CALIDAD_DEFAULT_LOCALE", None),
    ]);
    assert_eq!(config.api_url, "https://calidad.example.com");
    assert_eq!(config.operator, "jlopez");
    assert_eq!(config.action_layout, ActionLayout::Finalize);
    assert_eq!(config.locale, "es-CO");
}

#[test]
fn resolve_invalid_layout_keeps_other_values() {
    let config = resolve(&[
        ("CALIDAD_API_URL", Some("https://calidad.example.com")),
        ("CALIDAD_CARD_ACTIONS", Some("single")),
    ]);
    assert_eq!(config.api_url, "https://calidad.example.com");
    assert_eq!(config.action_layout, ActionLayout::ApproveReject);
}
