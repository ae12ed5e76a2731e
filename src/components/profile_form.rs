//! Profile Form Component
//!
//! Edits username, full name and website. Saving is left to the caller.

use leptos::prelude::*;
use recipe_core::domain::{Profile, ProfileUpdate};
use wasm_bindgen::JsCast;

fn input_value(ev: &web_sys::Event) -> Option<String> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
}

#[component]
pub fn ProfileForm(
    profile: Profile,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] on_save: Callback<ProfileUpdate>,
) -> impl IntoView {
    let form = RwSignal::new(ProfileUpdate::from(&profile));
    let (validation_error, set_validation_error) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let update = form.get();
        match update.validate() {
            Ok(()) => {
                set_validation_error.set(None);
                on_save.run(update);
            }
            Err(e) => set_validation_error.set(Some(e.to_string())),
        }
    };

    view! {
        <form class="profile-form" on:submit=on_submit>
            <label>
                "Username"
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.username.clone())
                    on:input=move |ev| {
                        if let Some(v) = input_value(&ev) { form.update(|f| f.username = v); }
                    }
                />
            </label>
            <label>
                "Full name"
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.full_name.clone())
                    on:input=move |ev| {
                        if let Some(v) = input_value(&ev) { form.update(|f| f.full_name = v); }
                    }
                />
            </label>
            <label>
                "Website"
                <input
                    type="url"
                    prop:value=move || form.with(|f| f.website.clone())
                    on:input=move |ev| {
                        if let Some(v) = input_value(&ev) { form.update(|f| f.website = v); }
                    }
                />
            </label>

            {move || validation_error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <button type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}
