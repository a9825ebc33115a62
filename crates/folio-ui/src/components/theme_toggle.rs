//! Theme controls.

use crate::app::{use_hydrated_theme, use_theme};
use crate::components::icons::{IconMoon, IconSun};
use crate::core::responsive::{self, Size};
use crate::core::scales::MotionSpeed;
use crate::core::theme::Theme;
use yew::prelude::*;

/// Sun/moon toggle for the navbar.
///
/// Until the persisted theme has been read this renders an inert button of
/// the same size, so the icon never flips from the default on load.
#[function_component(ThemeToggle)]
pub(crate) fn theme_toggle() -> Html {
    let (theme, hydrated) = use_hydrated_theme();
    let motion = format!("ghost w-9 px-0 transition-colors {}", MotionSpeed::Fast.duration_class());
    let class = responsive::components::button(Size::Sm, Some(motion.as_str()));

    if !hydrated {
        return html! {
            <button class={class} disabled=true aria-label="Toggle theme">
                <span class={responsive::components::icon(Size::Sm, None)} />
            </button>
        };
    }

    let onclick = {
        let toggle = theme.toggle_theme.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };
    let next = theme.resolved_theme.toggled();
    let label = format!("Switch to {}", next.label());
    let icon = match theme.resolved_theme {
        Theme::Light => html! { <IconMoon size={Size::Sm} /> },
        Theme::Dark => html! { <IconSun size={Size::Sm} /> },
    };

    html! {
        <button class={class} onclick={onclick} aria-label={label.clone()} title={label}>
            {icon}
        </button>
    }
}

/// Explicit light/dark choice for the footer.
#[function_component(ThemeChoice)]
pub(crate) fn theme_choice() -> Html {
    let theme = use_theme();
    let options = Theme::ALL.into_iter().map(|option| {
        let onclick = {
            let set_theme = theme.set_theme.clone();
            Callback::from(move |_: MouseEvent| set_theme.emit(option))
        };
        let active = theme.theme == option;
        html! {
            <button
                class={classes!(
                    responsive::components::button(Size::Sm, None),
                    active.then_some("bg-primary text-primary-foreground"),
                )}
                aria-pressed={active.to_string()}
                onclick={onclick}
            >
                {option.label()}
            </button>
        }
    });

    html! {
        <div class="inline-flex gap-1" role="group" aria-label="Theme">
            {for options}
        </div>
    }
}
