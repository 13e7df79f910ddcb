use leptos::prelude::*;

use crate::components::job_card::JobCard;
use crate::components::require_session::RequireSession;
use crate::pages::use_param;

/// Single workflow job, polled while it runs.
#[component]
pub fn JobPage() -> impl IntoView {
    let id = use_param::<i64>("id");
    view! {
        <RequireSession>
            <p class="page__back"><a href="/workflows">"← All jobs"</a></p>
            {move || id.get().map(|job_id| view! { <JobCard job_id=job_id/> })}
        </RequireSession>
    }
}
