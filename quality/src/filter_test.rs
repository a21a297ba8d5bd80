use super::*;

fn rec(id: i64, status: &str, outcome: Option<&str>, plates: Option<&str>, order: Option<&str>) -> QualityRecord {
    QualityRecord {
        id,
        status: Some(status.to_owned()),
        status_os: outcome.map(str::to_owned),
        no_placas: plates.map(str::to_owned),
        no_orden: order.map(str::to_owned),
        ..QualityRecord::default()
    }
}

fn sample() -> Vec<QualityRecord> {
    vec![
        rec(1, "Pendiente", None, Some("ABC-123"), Some("OR-100")),
        rec(2, "INICIADA", None, Some("XYZ-987"), Some("OR-200")),
        rec(3, "TERMINADO", Some("Aprobado"), Some("abc-555"), Some("OR-300")),
        rec(4, "Terminado", Some("Rechazado"), None, Some("OR-101")),
    ]
}

fn ids(records: &[QualityRecord]) -> Vec<i64> {
    records.iter().map(|r| r.id).collect()
}

// =============================================================
// Predicates
// =============================================================

#[test]
fn empty_filter_keeps_everything_in_order() {
    assert_eq!(ids(&QualityFilter::default().apply(&sample())), vec![1, 2, 3, 4]);
}

#[test]
fn initial_filter_selects_pending() {
    assert_eq!(ids(&QualityFilter::initial().apply(&sample())), vec![1]);
}

#[test]
fn status_match_is_case_insensitive_equality() {
    let filter = QualityFilter { status: "Iniciada".to_owned(), ..QualityFilter::default() };
    assert_eq!(ids(&filter.apply(&sample())), vec![2]);

    let filter = QualityFilter { status: "Termin".to_owned(), ..QualityFilter::default() };
    assert!(filter.apply(&sample()).is_empty());
}

#[test]
fn sub_status_narrows_finished_records() {
    let filter = QualityFilter {
        status: "Terminado".to_owned(),
        sub_status: "Rechazado".to_owned(),
        ..QualityFilter::default()
    };
    assert_eq!(ids(&filter.apply(&sample())), vec![4]);
}

#[test]
fn plates_match_is_case_insensitive_substring() {
    let filter = QualityFilter { plates: "abc".to_owned(), ..QualityFilter::default() };
    assert_eq!(ids(&filter.apply(&sample())), vec![1, 3]);
}

#[test]
fn missing_field_only_matches_inactive_predicate() {
    let filter = QualityFilter { plates: "a".to_owned(), ..QualityFilter::default() };
    assert!(!filter.matches(&sample()[3]));
}

#[test]
fn order_and_plates_combine() {
    let filter = QualityFilter { plates: "ABC".to_owned(), order: "or-1".to_owned(), ..QualityFilter::default() };
    assert_eq!(ids(&filter.apply(&sample())), vec![1]);
}

#[test]
fn apply_is_deterministic() {
    let filter = QualityFilter { order: "OR-".to_owned(), ..QualityFilter::default() };
    let records = sample();
    assert_eq!(filter.apply(&records), filter.apply(&records));
}

// =============================================================
// Status transitions
// =============================================================

#[test]
fn leaving_terminado_clears_sub_status() {
    let mut filter = QualityFilter::initial();
    filter.set_status("Terminado");
    assert!(filter.sub_status_enabled());
    filter.sub_status = "Aprobado".to_owned();

    filter.set_status("Terminado");
    assert_eq!(filter.sub_status, "Aprobado");

    filter.set_status("");
    assert!(!filter.sub_status_enabled());
    assert!(filter.sub_status.is_empty());
}
