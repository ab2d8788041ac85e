//! Read-only summary of a saved profile.

use leptos::prelude::*;
use storage::UserProfile;

#[component]
pub fn ProfileCard(profile: UserProfile) -> impl IntoView {
    let UserProfile { name, email, phone, address, image, .. } = profile;
    let avatar = (!image.is_empty()).then(|| view! { <img class="profile-card__avatar" src=image alt="Profile picture"/> });

    view! {
        <section class="profile-card">
            <h3>"Saved User Data"</h3>
            {avatar}
            <p><strong>"Name: "</strong>{name}</p>
            <p><strong>"Email: "</strong>{email}</p>
            <p><strong>"Phone: "</strong>{phone}</p>
            <p><strong>"Address: "</strong>{address}</p>
        </section>
    }
}
