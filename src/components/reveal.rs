//! Scroll-triggered reveal animation wrapper.
//!
//! Wraps its children in a `.reveal` element and adds the `active` class
//! once the element is at least 15% visible. The class is never removed,
//! so each section animates in exactly once.

use leptos::prelude::*;

/// Fraction of the element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Wrapper that reveals its content when scrolled into view.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(el) = node.get() {
            observe(&el);
        }
    });

    view! {
        <div class="reveal" node_ref=node>
            {children()}
        </div>
    }
}

#[cfg(feature = "csr")]
fn observe(el: &web_sys::Element) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("active");
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    if let Ok(observer) =
        web_sys::IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
    {
        observer.observe(el);
    }

    // The observer and its callback live for the rest of the page.
    on_intersect.forget();
}
