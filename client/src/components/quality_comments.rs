//! Comment thread for one chip plus the new-comment form.

#[cfg(test)]
#[path = "quality_comments_test.rs"]
mod quality_comments_test;

use leptos::prelude::*;
use quality::format;
use quality::{Comment, QualityState};

use crate::state::ui::UiState;

/// Header line above a comment body: local date-time and author.
fn byline(comment: &Comment, locale: &str) -> String {
    format!("{} — {}", format::datetime(&comment.fecha, locale), comment.cve_usuario)
}

#[component]
pub fn QualityComments(#[prop(into)] locale: String, on_submit: Callback<()>) -> impl IntoView {
    let state = expect_context::<RwSignal<QualityState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let locale = StoredValue::new(locale);

    view! {
        <div class="quality-comments">
            <div class="quality-comments__list">
                <Show
                    when=move || state.with(|s| !s.comments.is_empty())
                    fallback=|| view! { <p class="quality-comments__empty">"No hay comentarios para este vehículo."</p> }
                >
                    {move || {
                        state
                            .get()
                            .comments
                            .into_iter()
                            .map(|comment| {
                                let line = locale.with_value(|l| byline(&comment, l));
                                let key = comment.key();
                                view! {
                                    <div class="quality-comments__item" data-key=key>
                                        <div class="quality-comments__byline">{line}</div>
                                        <div class="quality-comments__text">{comment.comentario}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </Show>
            </div>
            <textarea
                class="quality-comments__input"
                placeholder="Escribe un comentario..."
                rows="3"
                prop:value=move || ui.get().comment_draft
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ui.update(|u| u.comment_draft = value);
                }
            ></textarea>
            <button class="btn btn--primary quality-comments__submit" on:click=move |_| on_submit.run(())>
                "Guardar comentario"
            </button>
        </div>
    }
}
