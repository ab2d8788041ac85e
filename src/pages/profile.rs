//! Profile form page: validated fields, avatar upload, saved-data summary.

use leptos::prelude::*;

use crate::components::{profile_card::ProfileCard, save_feedback::SaveFeedback};
use crate::config::app_config;
use crate::state::profile::{ProfileField, ProfileState};
use crate::util::store::gateway;

/// Profile form. The save button stays disabled until every field passes
/// validation; submitting clears the form and shows the saved profile.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let state = RwSignal::new(ProfileState::load(&gateway()));
    let rules = &app_config().profile_rules;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let gateway = gateway();
        state.update(|s| {
            if let Err(e) = s.submit(&gateway, rules) {
                log::warn!("profile: submit failed: {e}");
            }
        });
    };

    let on_image = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if !crate::util::file_reader::is_image_type(&file.type_()) {
                log::warn!("profile: ignoring non-image upload '{}'", file.name());
                return;
            }
            crate::util::file_reader::read_as_data_url(&file, move |uri| {
                state.update(|s| {
                    if let Err(e) = s.set_image(uri) {
                        log::warn!("profile: {e}");
                    }
                });
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let status = Signal::derive(move || state.with(|s| s.status.clone()));
    let can_submit = move || state.with(|s| s.is_valid(rules));
    let preview = move || {
        state.with(|s| s.image.clone()).map(|src| {
            view! {
                <img class="profile-form__avatar" src=src alt="Selected profile picture"/>
                <button type="button" class="btn" on:click=move |_| state.update(ProfileState::clear_image)>
                    "Remove image"
                </button>
            }
        })
    };
    let saved = move || state.with(|s| s.saved.clone()).map(|profile| view! { <ProfileCard profile=profile/> });

    view! {
        <div class="profile-page">
            <form class="profile-form" on:submit=on_submit novalidate=true>
                <ProfileInput state=state field=ProfileField::Name label="Name"/>
                <ProfileInput state=state field=ProfileField::Email label="Email"/>
                <ProfileInput state=state field=ProfileField::Phone label="Phone"/>
                <ProfileInput state=state field=ProfileField::Address label="Address" multiline=true/>

                <div class="profile-form__image">
                    <input type="file" accept="image/*" on:change=on_image/>
                    {preview}
                </div>

                <button type="submit" class="btn btn--primary" disabled=move || !can_submit()>
                    "Save Profile"
                </button>
                <SaveFeedback status=status saved_message="Profile saved."/>
            </form>

            {saved}
        </div>
    }
}

/// One labelled form field with its validation message.
#[component]
fn ProfileInput(
    state: RwSignal<ProfileState>,
    field: ProfileField,
    label: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || state.with(|s| s.draft.field(field).to_owned());
    let error = move || state.with(|s| s.errors.get(field).map(str::to_owned));
    let rules = &app_config().profile_rules;
    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.edit(field, value, rules));
    };

    let control = if multiline {
        view! {
            <textarea
                rows="4"
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <label class="profile-form__field">
            <span class="profile-form__label">{label}</span>
            {control}
            <span class="profile-form__error">{error}</span>
        </label>
    }
}
