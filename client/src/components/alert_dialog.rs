//! Alert and yes/no confirmation dialogs driven by `UiState`.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::alert::PendingReview;

/// Shows `UiState::alert` until dismissed.
#[component]
pub fn AlertDialog() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let dismiss = move |_| ui.update(|u| u.alert = None);

    view! {
        {move || {
            ui.get().alert.map(|alert| {
                view! {
                    <div class="dialog__backdrop">
                        <div class=format!("dialog alert {}", alert.level.class_name()) role="alertdialog">
                            <h2 class="dialog__title">{alert.title()}</h2>
                            <p class="dialog__message">{alert.message}</p>
                            <div class="dialog__actions">
                                <button class="btn btn--primary" on:click=dismiss>"OK"</button>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}

/// Asks yes/no for `UiState::confirm`. "Sí" hands the pending review to
/// `on_confirm`; either answer clears it.
#[component]
pub fn ConfirmDialog(on_confirm: Callback<PendingReview>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let on_yes = move |_| {
        let pending = ui.get_untracked().confirm;
        ui.update(|u| u.confirm = None);
        if let Some(pending) = pending {
            on_confirm.run(pending);
        }
    };
    let on_no = move |_| ui.update(|u| u.confirm = None);

    view! {
        {move || {
            ui.get().confirm.map(|pending| {
                view! {
                    <div class="dialog__backdrop">
                        <div class="dialog confirm" role="dialog">
                            <h2 class="dialog__title">"Confirmación"</h2>
                            <p class="dialog__message">{pending.prompt()}</p>
                            <div class="dialog__actions">
                                <button class="btn btn--primary" on:click=on_yes>"Sí"</button>
                                <button class="btn" on:click=on_no>"No"</button>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
