//! Quality review page: filters, result list, review flow, and comments.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It loads the full list on mount and filters it
//! locally. Every review action goes confirm -> store action -> alert ->
//! list re-fetch, whatever the outcome, so the cards always reflect the
//! backend after an attempt.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use quality::filter::{STATUS_OPTIONS, SUB_STATUS_OPTIONS};
use quality::{ApiError, ClientConfig, NewComment, QualityApi, QualityFilter, QualityState, QualityStore, ReviewAction, StateCell};

use crate::components::alert_dialog::{AlertDialog, ConfirmDialog};
use crate::components::modal::Modal;
use crate::components::nav_bar::NavBar;
use crate::components::quality_comments::QualityComments;
use crate::components::quality_list::QualityList;
use crate::state::quality::AppStore;
use crate::state::ui::UiState;
use crate::util::alert::{self, Alert, PendingReview};
use crate::util::task;

/// Run a confirmed review action, then re-fetch the list.
async fn confirm_review<A: QualityApi, C: StateCell>(
    store: &QualityStore<A, C>,
    pending: PendingReview,
    operator: &str,
) -> Alert {
    let result = store.perform(pending.action, pending.id, operator).await;
    let feedback = alert::review_feedback(pending.action, &result);
    if let Err(error) = store.load().await {
        tracing::warn!(%error, "list reload after review failed");
    }
    feedback
}

/// Save a comment on `chip`; the store re-fetches that chip's thread.
async fn save_comment<A: QualityApi, C: StateCell>(
    store: &QualityStore<A, C>,
    chip: i64,
    text: &str,
    operator: &str,
) -> Result<(), ApiError> {
    store.create_comment(&NewComment::operator(chip, operator, text)).await
}

fn load_failed(error: &ApiError) -> Alert {
    Alert::error(format!("No se pudieron cargar los vehículos. {}", error.user_message()))
}

fn spawn_load(store: AppStore, ui: RwSignal<UiState>) {
    task::spawn(async move {
        if let Err(error) = store.load().await {
            ui.update(|u| u.alert = Some(load_failed(&error)));
        }
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<RwSignal<QualityState>>();
    let store = expect_context::<AppStore>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<ClientConfig>();

    let layout = config.action_layout;
    let locale = config.locale.clone();
    let operator = StoredValue::new(config.operator.clone());
    let store = StoredValue::new(store);

    let filter = RwSignal::new(QualityFilter::initial());
    let filtered = Memo::new(move |_| state.with(|s| filter.with(|f| f.apply(&s.items))));

    // Reads nothing reactive, so this runs once after hydration.
    Effect::new(move |_| spawn_load(store.get_value(), ui));

    let on_action = Callback::new(move |(action, id): (ReviewAction, i64)| {
        ui.update(|u| u.confirm = Some(PendingReview { action, id }));
    });

    let on_confirm = Callback::new(move |pending: PendingReview| {
        let store = store.get_value();
        let operator = operator.get_value();
        task::spawn(async move {
            let feedback = confirm_review(&store, pending, &operator).await;
            ui.update(|u| u.alert = Some(feedback));
        });
    });

    let on_comments = Callback::new(move |chip: Option<i64>| {
        let Some(chip) = ui.try_update(|u| u.open_comments(chip)).flatten() else {
            return;
        };
        let store = store.get_value();
        task::spawn(async move {
            if let Err(error) = store.load_comments(chip).await {
                ui.update(|u| u.alert = Some(load_failed(&error)));
            }
        });
    });

    let on_comment_submit = Callback::new(move |()| {
        let Some((chip, text)) = ui.with_untracked(UiState::comment_submission) else {
            return;
        };
        let store = store.get_value();
        let operator = operator.get_value();
        task::spawn(async move {
            match save_comment(&store, chip, &text, &operator).await {
                Ok(()) => ui.update(UiState::finish_comment),
                Err(error) => ui.update(|u| u.alert = Some(alert::comment_failed(&error))),
            }
        });
    });

    let on_close_comments = Callback::new(move |()| ui.update(UiState::close_comments));
    let comments_open = Signal::derive(move || ui.with(|u| u.comments_open));
    let comments_locale = locale.clone();

    view! {
        <NavBar/>
        <div class="home-page">
            <h1 class="home-page__title">"Vehículos en Calidad"</h1>

            <div class="home-page__filters">
                <select
                    class="home-page__filter"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.set_status(&value));
                    }
                >
                    {STATUS_OPTIONS
                        .iter()
                        .map(|(value, label)| {
                            let value = *value;
                            view! {
                                <option value=value selected=move || filter.with(|f| f.status == value)>
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                <Show when=move || filter.with(QualityFilter::sub_status_enabled)>
                    <select
                        class="home-page__filter"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            filter.update(|f| f.sub_status = value);
                        }
                    >
                        {SUB_STATUS_OPTIONS
                            .iter()
                            .map(|(value, label)| {
                                let value = *value;
                                view! {
                                    <option value=value selected=move || filter.with(|f| f.sub_status == value)>
                                        {*label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </Show>

                <input
                    class="home-page__filter"
                    type="text"
                    placeholder="Filtrar por placas..."
                    prop:value=move || filter.with(|f| f.plates.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.plates = value);
                    }
                />
                <input
                    class="home-page__filter"
                    type="text"
                    placeholder="Filtrar por orden..."
                    prop:value=move || filter.with(|f| f.order.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.order = value);
                    }
                />
            </div>

            <div class="home-page__count">
                "Resultados: "
                <span class="home-page__count-value">{move || filtered.with(Vec::len)}</span>
            </div>

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <p class="home-page__loading">"Cargando..."</p> }
            >
                <QualityList
                    items=filtered
                    layout=layout
                    locale=locale.clone()
                    on_action=on_action
                    on_comments=on_comments
                />
            </Show>

            <Modal open=comments_open title="Comentarios" on_close=on_close_comments>
                <QualityComments locale=comments_locale.clone() on_submit=on_comment_submit/>
            </Modal>

            <ConfirmDialog on_confirm=on_confirm/>
            <AlertDialog/>
        </div>
    }
}
