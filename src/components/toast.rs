//! Transient notification toast.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Show a toast and schedule its auto-dismissal.
///
/// A later `show_toast` supersedes the pending dismissal: the earlier
/// timer still fires but its sequence number is stale, so the newer toast
/// keeps its full display time.
pub fn show_toast(toast: RwSignal<ToastState>, message: impl Into<String>, kind: ToastKind) {
    let seq = toast
        .try_update(|t| t.show(message.into(), kind))
        .unwrap_or_default();

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::state::toast::TOAST_DISMISS_MS;

        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DISMISS_MS)).await;
        toast.update(|t| t.dismiss(seq));
    });
    #[cfg(not(feature = "csr"))]
    let _ = seq;
}

/// Toast element fixed at the page corner; visibility is class-driven.
#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    let container_class = move || {
        if toast.get().visible {
            "toast show"
        } else {
            "toast"
        }
    };

    let icon_class = move || match toast.get().kind {
        ToastKind::Success => "toast__icon toast__icon--success fa-solid fa-circle-check",
        ToastKind::Error => "toast__icon toast__icon--error fa-solid fa-circle-exclamation",
    };

    view! {
        <div class=container_class role="status">
            <i class=icon_class></i>
            <span class="toast__message">{move || toast.get().message}</span>
        </div>
    }
}
