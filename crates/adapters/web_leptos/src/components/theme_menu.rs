//! Light/dark theme picker bound to the persisted preference.

use leptos::prelude::*;
use themeswitch_domain::theme::{IconGlyph, Theme};

use crate::THEME_CHANGE_EVENT;

fn stored_icon() -> IconGlyph {
    match crate::controller().and_then(|ctrl| ctrl.current_appearance()) {
        Ok(appearance) => appearance.icon,
        Err(err) => {
            tracing::warn!(error = %err, "failed to read theme preference");
            IconGlyph::SunMoon
        }
    }
}

/// A pair of buttons that store an explicit light or dark preference.
///
/// The icon follows the stored preference, including changes made through
/// `setTheme` by other controls on the page.
#[component]
pub fn ThemeMenu() -> impl IntoView {
    let (icon, set_icon) = signal(stored_icon());

    let listener = window_event_listener_untyped(THEME_CHANGE_EVENT, move |_| {
        set_icon.set(stored_icon());
    });
    on_cleanup(move || listener.remove());

    let choose = move |theme: Theme| {
        match crate::store_preference(theme.as_str()) {
            Ok(appearance) => set_icon.set(appearance.icon),
            Err(err) => tracing::warn!(error = %err, %theme, "failed to store theme preference"),
        }
    };

    view! {
        <div class="theme-menu">
            <i class=move || icon.get().css_class()></i>
            <button class="theme-menu__option" on:click=move |_| choose(Theme::Light) title="Light theme">
                "\u{2600}"
            </button>
            <button class="theme-menu__option" on:click=move |_| choose(Theme::Dark) title="Dark theme">
                "\u{263E}"
            </button>
        </div>
    }
}
