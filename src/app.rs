use std::time::Duration;

use chrono::Utc;
use dioxus::prelude::*;
use kolam_core::{AnalysisSession, Notice};
use tokio::sync::broadcast::error::RecvError;

use crate::components::ToastStack;
use crate::context::{prune_expired, use_controller, NOTICE_TTL};
use crate::pages::{Analysis, Index};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Hero, upload form and feature overview
/// - `/analysis` - Processing indicator, results and generated gallery
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Index {},
    #[route("/analysis")]
    Analysis {},
}

/// Root application component.
///
/// Provides global styles, the session and notice signals, and routing.
#[component]
pub fn App() -> Element {
    let controller = use_controller();

    let mut session: Signal<AnalysisSession> = use_signal(|| controller.session());
    let mut notices: Signal<Vec<Notice>> = use_signal(Vec::new);
    use_context_provider(|| session);
    use_context_provider(|| notices);

    // Mirror controller state into signals
    let watch_controller = controller.clone();
    use_future(move || {
        let controller = watch_controller.clone();
        async move {
            let mut rx = controller.subscribe();
            while rx.changed().await.is_ok() {
                let snapshot = rx.borrow_and_update().clone();
                session.set(snapshot);
            }
        }
    });

    let notice_controller = controller.clone();
    use_future(move || {
        let controller = notice_controller.clone();
        async move {
            let mut rx = controller.notices();
            loop {
                match rx.recv().await {
                    Ok(notice) => notices.write().push(notice),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!("Dropped {} notices", skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    });

    // Expire toasts
    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let mut current = notices.peek().clone();
            if prune_expired(&mut current, Utc::now(), NOTICE_TTL) {
                notices.set(current);
            }
        }
    });

    // Leaving the app stops any in-flight poll
    let drop_controller = controller.clone();
    use_drop(move || drop_controller.reset());

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        ToastStack {}
    }
}
