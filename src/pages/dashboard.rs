//! Dashboard page: saved-profile card and a small "User Trends" bar chart.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use storage::{UserProfile, keys};

use crate::components::profile_card::ProfileCard;
use crate::util::store::gateway;

/// One bar of the trends chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrendBar {
    pub label: &'static str,
    pub value: u32,
    /// Height relative to the tallest bar, `0..=100`.
    pub height_percent: u8,
}

/// Chart bars for the stored data. Storage holds a single profile, so the
/// only series is the user count.
pub fn user_trends(profile: Option<&UserProfile>) -> Vec<TrendBar> {
    scale(&[("Users", u32::from(profile.is_some()))])
}

fn scale(series: &[(&'static str, u32)]) -> Vec<TrendBar> {
    let max = series.iter().map(|(_, v)| *v).max().unwrap_or(0);
    series
        .iter()
        .map(|&(label, value)| {
            let height = if max == 0 { 0 } else { u64::from(value) * 100 / u64::from(max) };
            TrendBar { label, value, height_percent: u8::try_from(height).unwrap_or(100) }
        })
        .collect()
}

/// Shows the last saved profile, read fresh from storage on each visit.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let Some(profile) = gateway().load::<UserProfile>(keys::USER_DATA) else {
        return view! { <p class="dashboard-page__empty">"No data available"</p> }.into_any();
    };
    let bars = user_trends(Some(&profile))
        .into_iter()
        .map(|bar| {
            view! {
                <div class="trend-chart__column">
                    <div class="trend-chart__bar" style:height=format!("{}%", bar.height_percent) title=bar.value.to_string()></div>
                    <span class="trend-chart__label">{bar.label}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dashboard-page">
            <h2>"Dashboard"</h2>
            <ProfileCard profile=profile/>
            <section class="trend-chart">
                <h3>"User Trends"</h3>
                <div class="trend-chart__bars">{bars}</div>
            </section>
        </div>
    }
    .into_any()
}
