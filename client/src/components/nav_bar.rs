//! Top navigation bar.

use leptos::prelude::*;

use crate::util::navigation;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <button class="btn nav-bar__back" on:click=move |_| navigation::go_back()>
                "← Back"
            </button>
            <h1 class="nav-bar__title">"Módulo Calidad HYP"</h1>
        </nav>
    }
}
