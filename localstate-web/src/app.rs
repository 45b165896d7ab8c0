use leptos::*;
use leptos_meta::*;

use crate::components::{Counter, DraftNote, PreferencesForm};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="localstate"/>
        <div class="my-0 mx-auto px-8 max-w-7xl text-left">
            <nav class="py-2 px-4 text-lg font-medium h-12 bg-customBlue flex items-center">
                <div class="text-2xl font-mono font-light text-white tracking-widest">localstate</div>
            </nav>
            <main class="py-4 space-y-6">
                <Counter/>
                <PreferencesForm/>
                <DraftNote/>
            </main>
        </div>
    }
}
