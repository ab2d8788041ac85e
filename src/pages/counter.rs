//! Counter page with a background bar that rises with the count.

use leptos::prelude::*;
use storage::{StorageError, StorageGateway};

use crate::components::save_feedback::SaveFeedback;
use crate::state::counter::CounterState;
use crate::state::status::SaveStatus;
use crate::util::store::{AppStore, gateway};

type CounterOp = fn(&mut CounterState, &StorageGateway<AppStore>) -> Result<(), StorageError>;

/// Counter page: increment, decrement, reset. Each click is persisted.
#[component]
pub fn CounterPage() -> impl IntoView {
    let counter = RwSignal::new(CounterState::load(&gateway()));
    let status = RwSignal::new(SaveStatus::Idle);

    let run = move |op: CounterOp| {
        let gateway = gateway();
        let mut result = Ok(());
        counter.update(|c| result = op(c, &gateway));
        // Only failures are worth a message here; a success clears it.
        status.set(match result {
            Ok(()) => SaveStatus::Idle,
            Err(e) => SaveStatus::Failed(e.to_string()),
        });
    };

    view! {
        <div class="counter-page">
            <div
                class="counter-page__fill"
                style:height=move || format!("{}%", counter.get().fill_percent())
            ></div>
            <div class="counter-page__value">{move || counter.get().count}</div>
            <div class="counter-page__actions">
                <button class="btn btn--primary" on:click=move |_| run(CounterState::increment)>
                    "Increment"
                </button>
                <button class="btn btn--primary" on:click=move |_| run(CounterState::decrement)>
                    "Decrement"
                </button>
                <button class="btn btn--primary" on:click=move |_| run(CounterState::reset)>
                    "Reset"
                </button>
            </div>
            <SaveFeedback status=status saved_message=""/>
        </div>
    }
}
