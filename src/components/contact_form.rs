//! Contact form with asynchronous submission and toast feedback.

use leptos::prelude::*;

use crate::components::toast::show_toast;
use crate::net::contact::{FALLBACK_ENDPOINT, send_message};
use crate::state::contact::{ContactPayload, ContactState};
use crate::state::toast::{ToastKind, ToastState};

const SUCCESS_MESSAGE: &str = "Thanks for getting in touch!";

/// Contact form posting JSON to a form-relay endpoint.
///
/// The submit button is disabled and relabeled for the duration of the
/// request; whatever the outcome, the form returns to an interactive idle
/// state and the result is reported via a toast. Successful submissions
/// clear the fields.
#[component]
pub fn ContactForm(
    /// Relay endpoint to POST to. Defaults to the placeholder Formspree URL.
    #[prop(into, default = FALLBACK_ENDPOINT.to_owned())]
    endpoint: String,
) -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let endpoint = StoredValue::new(endpoint);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Synchronous guard: a second submit while one is in flight is
        // rejected before any network work starts.
        if !contact.try_update(ContactState::begin).unwrap_or(false) {
            return;
        }

        let payload = ContactPayload::from_fields(
            &name.get_untracked(),
            &email.get_untracked(),
            &message.get_untracked(),
        );
        let endpoint = endpoint.get_value();

        leptos::task::spawn_local(async move {
            match send_message(&endpoint, &payload).await {
                Ok(()) => {
                    show_toast(toast, SUCCESS_MESSAGE, ToastKind::Success);
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }
                Err(err) => {
                    show_toast(toast, err.message().to_owned(), ToastKind::Error);
                }
            }
            contact.update(ContactState::finish);
        });
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <input
                type="text"
                name="name"
                placeholder="Your name"
                prop:value=name
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                type="email"
                name="email"
                placeholder="Your email"
                prop:value=email
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <textarea
                name="message"
                placeholder="Your message"
                prop:value=message
                on:input=move |ev| message.set(event_target_value(&ev))
            ></textarea>
            <button
                type="submit"
                class="contact-form__submit"
                disabled=move || contact.get().is_sending()
            >
                {move || contact.get().submit_label()}
            </button>
        </form>
    }
}
