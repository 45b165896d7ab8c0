use leptos::*;
use localstate::use_session_storage;

use crate::vars::DRAFT_KEY;

// survives a reload of the tab, but not closing it
#[component]
pub fn DraftNote() -> impl IntoView {
    let (draft, set_draft) = use_session_storage(DRAFT_KEY, String::new());

    view! {
        <section>
            <h2 class="text-xl">"Draft"</h2>
            <textarea
                class="w-full border"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
        </section>
    }
}
