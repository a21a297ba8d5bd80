//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::quality::provide_quality_store;
use crate::state::ui::UiState;
use crate::util::build_env;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, the quality store, and UI state to every child.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = build_env::client_config();
    let store = provide_quality_store(&config);
    provide_context(config);
    provide_context(RwSignal::new(UiState::default()));

    crate::util::task::spawn(async move {
        if let Err(error) = store.check_session().await {
            tracing::warn!(%error, "session check failed");
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/calidad-hyp.css"/>
        <Title text="Calidad HYP"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
