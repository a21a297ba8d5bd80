//! Fire-and-forget async work from event handlers.
//!
//! In the browser the future runs on the JS event loop. During server
//! rendering there is no user interaction to answer, so the future is dropped
//! without being polled.

use std::future::Future;

pub fn spawn(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(task);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(task);
    }
}
