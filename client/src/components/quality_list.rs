//! List of quality cards with the empty-state message.

use leptos::prelude::*;
use quality::{ActionLayout, QualityRecord, ReviewAction};

use super::quality_card::QualityCard;

#[component]
pub fn QualityList(
    #[prop(into)] items: Signal<Vec<QualityRecord>>,
    layout: ActionLayout,
    #[prop(into)] locale: String,
    on_action: Callback<(ReviewAction, i64)>,
    on_comments: Callback<Option<i64>>,
) -> impl IntoView {
    let locale = StoredValue::new(locale);

    view! {
        <Show
            when=move || items.with(|i| !i.is_empty())
            fallback=|| view! { <p class="quality-list__empty">"No hay resultados con los filtros aplicados."</p> }
        >
            <ul class="quality-list">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|record| {
                            view! {
                                <QualityCard
                                    record=record
                                    layout=layout
                                    locale=locale.get_value()
                                    on_action=on_action
                                    on_comments=on_comments
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </Show>
    }
}
