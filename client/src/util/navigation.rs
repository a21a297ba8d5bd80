//! Browser history navigation.

/// Step back one entry in the session history. No-op outside the browser.
pub fn go_back() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(history) = window.history() {
            if let Err(error) = history.back() {
                tracing::warn!(?error, "history.back failed");
            }
        }
    }
}
