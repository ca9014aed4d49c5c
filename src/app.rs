//! Root application component and shared context wiring.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::navbar::Navbar;
use crate::components::toast::Toast;
use crate::pages::home::HomePage;
use crate::state::contact::ContactState;
use crate::state::nav::NavState;
use crate::state::toast::ToastState;
use crate::util;

/// Root component.
///
/// Resolves and applies the persisted theme before the view renders, then
/// provides the per-page state signals as contexts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let initial = util::theme::initial_theme();
    util::theme::apply(initial);

    let theme = RwSignal::new(initial);
    let nav = RwSignal::new(NavState::default());
    let contact = RwSignal::new(ContactState::default());
    let toast = RwSignal::new(ToastState::default());

    provide_context(theme);
    provide_context(nav);
    provide_context(contact);
    provide_context(toast);

    view! {
        <Title text="Portfolio"/>

        <Navbar/>
        <main>
            <HomePage/>
        </main>
        <Toast/>
    }
}
