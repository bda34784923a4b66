use leptos::{ev::SubmitEvent, prelude::*};
use leptos_meta::Title;

use super::state::use_config;
use crate::{
    contact::{self, Field, Validation},
    models::ContactForm,
};

const INPUT_CLASS: &str = "w-full p-2 rounded-md bg-brightBlack/30 border border-muted/30 focus:border-cyan outline-none";

#[component]
pub(super) fn FieldError(validation: Signal<Option<Validation>>, field: Field) -> impl IntoView {
    move || {
        validation
            .get()
            .and_then(|v| v.error(field).map(str::to_string))
            .map(|e| view! { <p class="text-red text-xs mt-1">{e}</p> })
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let config = use_config();
    let form = RwSignal::new(ContactForm::default());
    // only populated after the first submit attempt
    let validation = RwSignal::new(None::<Validation>);
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let result = contact::validate(&current);
        let valid = result.is_valid;
        validation.set(Some(result));
        if !valid {
            return;
        }
        let link = contact::mailto_link(&current, &config.contact_email, &config.owner_name);
        log::debug!("Opening mail client for {}", current.email);
        if let Err(e) = window().location().set_href(&link) {
            log::error!("Failed to open mail client: {e:?}");
        }
        set_submitted.set(true);
        set_timeout(
            move || {
                form.set(ContactForm::default());
                validation.set(None);
                set_submitted.set(false);
            },
            config.success_window,
        );
    };

    view! {
        <Title text="Contact" />
        <div class="w-full max-w-2xl mx-auto">
            <h1 class="font-bold text-3xl text-center my-8">"Get In Touch"</h1>
            <Show when=move || submitted.get()>
                <div class="p-3 mb-4 rounded-md bg-green/10 text-green text-sm text-center">
                    "Your email client should open with the message ready to send."
                </div>
            </Show>
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label class="block text-sm mb-1" for="name">"Name"</label>
                    <input
                        id="name"
                        type="text"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <FieldError validation=validation.into() field=Field::Name />
                </div>
                <div>
                    <label class="block text-sm mb-1" for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <FieldError validation=validation.into() field=Field::Email />
                </div>
                <div>
                    <label class="block text-sm mb-1" for="message">"Message"</label>
                    <textarea
                        id="message"
                        rows="6"
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                    <FieldError validation=validation.into() field=Field::Message />
                </div>
                <button
                    type="submit"
                    class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-2 rounded-md font-medium border border-cyan/30 disabled:opacity-50"
                    disabled=move || submitted.get()
                >
                    "Send Message"
                </button>
            </form>
        </div>
    }
}
