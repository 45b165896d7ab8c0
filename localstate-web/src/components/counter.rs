use leptos::*;
use localstate::{use_local_storage_with_options, LocalStateOptions};

use crate::vars::{COUNTER_KEY, LOCALSTORAGE_PREFIX};

#[component]
pub fn Counter() -> impl IntoView {
    let options = LocalStateOptions::new().with_prefix(LOCALSTORAGE_PREFIX);
    let (count, set_count) =
        use_local_storage_with_options(COUNTER_KEY, 0i64, options);

    view! {
        <section>
            <h2 class="text-xl">"Counter"</h2>
            <div class="flex items-center space-x-2">
                <button on:click=move |_| set_count.update(|n| n - 1)>"-1"</button>
                <span class="font-mono">{move || count.get()}</span>
                <button on:click=move |_| set_count.update(|n| n + 1)>"+1"</button>
                <button on:click=move |_| set_count.set(0)>"Reset"</button>
            </div>
        </section>
    }
}
