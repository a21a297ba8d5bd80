//! Generic modal shell with a title and a close button.

use leptos::prelude::*;

/// Renders `children` inside a backdrop while `open` is true.
///
/// Escape and the "Cerrar" button both run `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(optional, into)] title: Option<String>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = StoredValue::new(title);
    let children = StoredValue::new(children);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal__backdrop">
                <div class="modal" tabindex="0" on:keydown=on_keydown>
                    {title.get_value().map(|t| view! { <h2 class="modal__title">{t}</h2> })}
                    {children.with_value(|c| c())}
                    <div class="modal__footer">
                        <button class="btn modal__close" on:click=move |_| on_close.run(())>
                            "Cerrar"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
