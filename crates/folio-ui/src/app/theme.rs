//! Theme provider and hooks.
//!
//! # Design
//! - The provider owns one [`ThemeState`] through a reducer; nothing global.
//! - Storage is consulted in a mount effect so the first render always shows
//!   the configured default.
//! - Document-root markers are re-applied whenever the theme changes.

use crate::app::preferences::{BrowserStorage, DocumentRoot, log_theme_error};
use crate::core::theme::{
    HydrateOutcome, Theme, ThemeConfig, ThemeError, ThemePhase, ThemeResult, ThemeState,
    apply_to_surface,
};
use gloo::console;
use std::rc::Rc;
use yew::prelude::*;

/// Theme context exposed to descendants of [`ThemeProvider`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ThemeHandle {
    pub(crate) theme: Theme,
    pub(crate) resolved_theme: Theme,
    pub(crate) phase: ThemePhase,
    pub(crate) set_theme: Callback<Theme>,
    pub(crate) toggle_theme: Callback<()>,
}

impl ThemeHandle {
    pub(crate) const fn is_hydrated(&self) -> bool {
        matches!(self.phase, ThemePhase::Hydrated)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ThemeAction {
    Hydrate,
    Set(Theme),
    Toggle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ThemeStore {
    state: ThemeState,
}

impl Reducible for ThemeStore {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state.clone();
        match action {
            ThemeAction::Hydrate => log_hydrate(&state.hydrate(&BrowserStorage), &state),
            ThemeAction::Set(theme) => {
                if let Err(err) = state.set_theme(theme, &BrowserStorage) {
                    log_theme_error("set_theme", &err);
                }
            }
            ThemeAction::Toggle => {
                if let Err(err) = state.toggle(&BrowserStorage) {
                    log_theme_error("toggle_theme", &err);
                }
            }
        }
        Rc::new(Self { state })
    }
}

fn log_hydrate(outcome: &HydrateOutcome, state: &ThemeState) {
    match outcome {
        HydrateOutcome::Restored(_) | HydrateOutcome::Missing => {}
        HydrateOutcome::Ignored(raw) => {
            console::warn!("ignoring persisted theme", state.storage_key(), raw);
        }
        HydrateOutcome::Unavailable(err) => log_theme_error("hydrate", err),
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeProviderProps {
    #[prop_or_default]
    pub config: ThemeConfig,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub(crate) fn theme_provider(props: &ThemeProviderProps) -> Html {
    let store = {
        let config = props.config.clone();
        use_reducer(move || ThemeStore {
            state: ThemeState::new(&config),
        })
    };

    {
        let dispatcher = store.dispatcher();
        use_effect_with_deps(
            move |_| {
                dispatcher.dispatch(ThemeAction::Hydrate);
                || ()
            },
            (),
        );
    }

    {
        let theme = store.state.theme();
        use_effect_with_deps(
            move |theme| {
                let applied =
                    DocumentRoot::current().and_then(|root| apply_to_surface(&root, *theme));
                if let Err(err) = applied {
                    log_theme_error("apply_theme", &err);
                }
                || ()
            },
            theme,
        );
    }

    let set_theme = {
        let dispatcher = store.dispatcher();
        use_callback(move |theme: Theme, _| dispatcher.dispatch(ThemeAction::Set(theme)), ())
    };
    let toggle_theme = {
        let dispatcher = store.dispatcher();
        use_callback(move |(): (), _| dispatcher.dispatch(ThemeAction::Toggle), ())
    };

    let handle = ThemeHandle {
        theme: store.state.theme(),
        resolved_theme: store.state.resolved_theme(),
        phase: store.state.phase(),
        set_theme,
        toggle_theme,
    };

    html! {
        <ContextProvider<ThemeHandle> context={handle}>
            {for props.children.iter()}
        </ContextProvider<ThemeHandle>>
    }
}

/// Theme handle, or [`ThemeError::OutsideProvider`] when no provider is mounted above.
#[hook]
pub(crate) fn use_try_theme() -> ThemeResult<ThemeHandle> {
    use_context::<ThemeHandle>().ok_or(ThemeError::OutsideProvider)
}

/// Theme handle for components that require a provider.
///
/// # Panics
///
/// Panics when rendered outside [`ThemeProvider`].
#[hook]
pub(crate) fn use_theme() -> ThemeHandle {
    match use_try_theme() {
        Ok(handle) => handle,
        Err(err) => panic!("{err}"),
    }
}

/// Theme handle paired with whether storage has been consulted yet.
///
/// Controls whose label depends on the persisted theme render a neutral
/// placeholder until the flag is set.
#[hook]
pub(crate) fn use_hydrated_theme() -> (ThemeHandle, bool) {
    let handle = use_theme();
    let hydrated = handle.is_hydrated();
    (handle, hydrated)
}
