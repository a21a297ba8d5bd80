//! Card for one quality record.
//!
//! DESIGN
//! ======
//! The card is a pure projection of the record: which buttons appear is
//! decided by `quality::CardActions`, and every label below is computed by a
//! plain function so fallbacks can be tested without rendering.

#[cfg(test)]
#[path = "quality_card_test.rs"]
mod quality_card_test;

use leptos::prelude::*;
use quality::format::{self, MISSING};
use quality::stage::{self, OUTCOME_APPROVED};
use quality::{ActionLayout, CardActions, QualityRecord, QualityState, ReviewAction};

/// Color and vehicle name, each with its own fallback.
fn headline(record: &QualityRecord) -> String {
    format!(
        "{} {}",
        record.color.as_deref().unwrap_or("Sin color"),
        record.vehiculo.as_deref().unwrap_or("Vehículo sin nombre"),
    )
}

fn or_missing(value: Option<&str>) -> String {
    value.unwrap_or(MISSING).to_owned()
}

fn mileage(record: &QualityRecord, locale: &str) -> String {
    record
        .kilometraje
        .map_or_else(|| MISSING.to_owned(), |km| format!("{} km", format::number(km, locale)))
}

fn status_label(record: &QualityRecord) -> String {
    record.status.as_deref().unwrap_or("Sin estado").to_owned()
}

fn outcome_class(outcome: &str) -> &'static str {
    if outcome == OUTCOME_APPROVED {
        "quality-card__outcome quality-card__outcome--approved"
    } else {
        "quality-card__outcome quality-card__outcome--rejected"
    }
}

fn action_label(action: ReviewAction) -> &'static str {
    match action {
        ReviewAction::Start => "Iniciar",
        ReviewAction::Approve => "Aprobar",
        ReviewAction::Reject => "Rechazar",
        ReviewAction::Finalize => "Finalizar",
    }
}

fn action_class(action: ReviewAction) -> &'static str {
    match action {
        ReviewAction::Start => "btn quality-card__action quality-card__action--start",
        ReviewAction::Approve => "btn quality-card__action quality-card__action--approve",
        ReviewAction::Reject => "btn quality-card__action quality-card__action--reject",
        ReviewAction::Finalize => "btn quality-card__action quality-card__action--finalize",
    }
}

#[component]
pub fn QualityCard(
    record: QualityRecord,
    layout: ActionLayout,
    #[prop(into)] locale: String,
    on_action: Callback<(ReviewAction, i64)>,
    on_comments: Callback<Option<i64>>,
) -> impl IntoView {
    let state = expect_context::<RwSignal<QualityState>>();
    let id = record.id;
    let chip = record.id_chip;
    let reviewing = move || state.with(|s| s.is_reviewing(id));

    let actions = CardActions::for_record(&record, layout)
        .actions
        .into_iter()
        .map(|action| {
            view! {
                <button
                    class=action_class(action)
                    disabled=reviewing
                    on:click=move |_| on_action.run((action, id))
                >
                    {action_label(action)}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let finish = record
        .fecha_hora_fin_oper
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .map(|f| format::time_of_day(Some(f)));
    let outcome = stage::displayed_outcome(&record).map(str::to_owned);

    view! {
        <li class="quality-card">
            <div class="quality-card__headline">{headline(&record)}</div>
            <div class="quality-card__row">
                <span class="quality-card__label">"Orden:"</span>
                " "
                {or_missing(record.no_orden.as_deref())}
                " — "
                <span class="quality-card__label">"Placas:"</span>
                " "
                {or_missing(record.no_placas.as_deref())}
            </div>
            <div class="quality-card__row">
                <span class="quality-card__label">"Asesor:"</span>
                " "
                {or_missing(record.asesor.as_deref())}
            </div>
            <div class="quality-card__row">
                <span class="quality-card__label">"Técnico:"</span>
                " "
                {or_missing(record.tecnico.as_deref())}
            </div>
            <div class="quality-card__row">
                <span class="quality-card__label">"Kilometraje:"</span>
                " "
                {mileage(&record, &locale)}
            </div>
            <div class="quality-card__row">
                <span class="quality-card__label">"Hora Inicio:"</span>
                " "
                {format::time_of_day(record.fecha_hora_ini_oper.as_deref())}
            </div>
            {finish.map(|time| {
                view! {
                    <div class="quality-card__row">
                        <span class="quality-card__label">"Hora Fin:"</span>
                        " "
                        {time}
                    </div>
                }
            })}
            <div class="quality-card__row quality-card__status">
                <span class="quality-card__label">"Estado:"</span>
                " "
                <span class="quality-card__status-value">{status_label(&record)}</span>
            </div>
            {outcome.map(|outcome| {
                view! {
                    <div class="quality-card__row">
                        <span class="quality-card__label">"Resultado:"</span>
                        " "
                        <span class=outcome_class(&outcome)>{outcome.clone()}</span>
                    </div>
                }
            })}
            <div class="quality-card__actions">
                {actions}
                <button
                    class="btn quality-card__action quality-card__action--comments"
                    on:click=move |_| on_comments.run(chip)
                >
                    "Comentarios"
                </button>
            </div>
        </li>
    }
}
