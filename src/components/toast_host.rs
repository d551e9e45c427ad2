//! Renders the toast queue and owns its auto-dismiss timers.
//!
//! Every new toast schedules a fixed 5-second dismissal. The timers are
//! scoped to this component: an `on_cleanup` guard flips the alive flag so
//! a timer that outlives the host never touches stale state. Manual
//! dismissal removes the toast immediately; the late timer for it then
//! hits the queue's id-keyed no-op path.

use leptos::prelude::*;

use crate::state::toasts::ToastStore;

/// Toast stack overlay; mounted once from `App`.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<ToastStore>();

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use records::toast::AUTO_DISMISS_MS;
        use uuid::Uuid;

        let alive = Arc::new(AtomicBool::new(true));
        {
            let alive = Arc::clone(&alive);
            on_cleanup(move || alive.store(false, Ordering::Relaxed));
        }

        // Schedule a dismissal for each toast the previous run had not seen.
        Effect::new(move |seen: Option<Vec<Uuid>>| {
            let seen = seen.unwrap_or_default();
            let ids: Vec<Uuid> = toasts.toasts().iter().map(|t| t.id).collect();
            for &id in &ids {
                if seen.contains(&id) {
                    continue;
                }
                let alive = Arc::clone(&alive);
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
                    if alive.load(Ordering::Relaxed) {
                        toasts.dismiss(id);
                    }
                });
            }
            ids
        });
    }

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .toasts()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = format!("toast toast--{}", toast.kind.as_str());
                        view! {
                            <div class=class>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.dismiss(id)
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
