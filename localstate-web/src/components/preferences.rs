use leptos::*;
use localstate::{use_local_storage_with_options, LocalStateOptions};
use serde::{Deserialize, Serialize};

use crate::vars::{LOCALSTORAGE_PREFIX, PREFERENCES_KEY};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub show_sidebar: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            show_sidebar: true,
        }
    }
}

#[component]
pub fn PreferencesForm() -> impl IntoView {
    let options = LocalStateOptions::new().with_prefix(LOCALSTORAGE_PREFIX);
    let (preferences, set_preferences) = use_local_storage_with_options(
        PREFERENCES_KEY,
        Preferences::default(),
        options,
    );

    let theme = move || preferences.with(|p| p.theme.as_str());
    let show_sidebar = move || preferences.with(|p| p.show_sidebar);

    view! {
        <section>
            <h2 class="text-xl">"Preferences"</h2>
            <div class="flex items-center space-x-2">
                <span>"Theme: " {theme}</span>
                <button on:click=move |_| {
                    set_preferences.update(|p| Preferences {
                        theme: p.theme.toggled(),
                        ..p.clone()
                    })
                }>"Toggle theme"</button>
            </div>
            <label class="flex items-center space-x-2">
                <input
                    type="checkbox"
                    prop:checked=show_sidebar
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        set_preferences.update(|p| Preferences {
                            show_sidebar: checked,
                            ..p.clone()
                        })
                    }
                />
                <span>"Show sidebar"</span>
            </label>
        </section>
    }
}
