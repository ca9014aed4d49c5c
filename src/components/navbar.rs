//! Site navigation bar with theme toggle and mobile hamburger menu.

use leptos::prelude::*;

use crate::state::nav::NavState;
use crate::state::theme::Theme;
use crate::util;

/// Fixed top navigation.
///
/// The hamburger only toggles the menu at mobile widths; the theme button
/// flips and persists the color scheme.
#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let nav = expect_context::<RwSignal<NavState>>();

    let on_theme_toggle = move |_| {
        let next = util::theme::toggle(theme.get_untracked());
        theme.set(next);
    };

    let on_hamburger = move |_| {
        let width = util::viewport::width();
        nav.update(|n| n.toggle(width));
    };

    // Following an in-page link should also collapse the mobile menu.
    let on_link = move |_| nav.update(NavState::close);

    view! {
        <header class="nav">
            <a href="#home" class="nav__brand">"Portfolio"</a>

            <ul class=move || nav.get().links_class()>
                <li><a href="#home" on:click=on_link>"Home"</a></li>
                <li><a href="#about" on:click=on_link>"About"</a></li>
                <li><a href="#projects" on:click=on_link>"Projects"</a></li>
                <li><a href="#contact" on:click=on_link>"Contact"</a></li>
            </ul>

            <button class="nav__theme-toggle" aria-label="Toggle color theme" on:click=on_theme_toggle>
                <i class=move || theme.get().icon_class()></i>
            </button>

            <button class="nav__hamburger" aria-label="Toggle navigation" on:click=on_hamburger>
                <i class=move || nav.get().icon_class()></i>
            </button>
        </header>
    }
}
