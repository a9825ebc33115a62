//! Application root: content loading, theme provider, router, and shell.

use crate::components::shell::SiteShell;
use crate::core::breakpoints::Breakpoint;
use crate::core::responsive::{layout, typography};
use crate::core::theme::{Theme, ThemeConfig};
use crate::features::{about, contact, home, projects};
use folio_content::Content;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::window;
pub(crate) use routes::Route;
use std::rc::Rc;
pub(crate) use theme::{use_hydrated_theme, use_theme};
use yew::prelude::*;
use yew_router::prelude::*;

mod preferences;
mod routes;
mod theme;

use theme::ThemeProvider;

/// Width assumed when the viewport cannot be measured.
const FALLBACK_WIDTH: u16 = 1280;

#[function_component(PortfolioApp)]
pub(crate) fn portfolio_app() -> Html {
    let content = use_memo(
        |_| {
            Content::load().map(Rc::new).inspect_err(|err| {
                console::error!("content fixture could not be parsed", err.fixture());
            })
        },
        (),
    );
    let config = ThemeConfig {
        default_theme: Theme::Dark,
        ..ThemeConfig::default()
    };

    let body = match &*content {
        Ok(content) => html! {
            <ContextProvider<Rc<Content>> context={Rc::clone(content)}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<Rc<Content>>>
        },
        Err(_) => html! {
            <main class={layout::container(Some("py-24 text-center"))}>
                <h1 class={typography::h2(None)}>{"Something went wrong"}</h1>
                <p class={typography::body(Some("mt-4"))}>{"The site content could not be loaded."}</p>
            </main>
        },
    };

    html! {
        <ThemeProvider config={config}>
            {body}
        </ThemeProvider>
    }
}

fn switch(route: Route) -> Html {
    let page = match route {
        Route::Home => html! { <home::view::HomePage /> },
        Route::About => html! { <about::view::AboutPage /> },
        Route::Projects => html! { <projects::view::ProjectsPage /> },
        Route::Contact => html! { <contact::view::ContactPage /> },
        Route::NotFound => html! { <NotFound /> },
    };
    html! {
        <SiteShell active={route}>
            {page}
        </SiteShell>
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <section class={layout::section(Some("text-center"))}>
            <div class={layout::container(None)}>
                <h1 class={typography::h1(None)}>{"404"}</h1>
                <p class={typography::body_large(Some("mt-4 text-muted-foreground"))}>
                    {"The page you are looking for does not exist."}
                </p>
                <Link<Route> to={Route::Home} classes={classes!("mt-8", "inline-block", "underline")}>
                    {"Back to home"}
                </Link<Route>>
            </div>
        </section>
    }
}

/// Site content provided by [`PortfolioApp`].
#[hook]
pub(crate) fn use_content() -> Option<Rc<Content>> {
    use_context::<Rc<Content>>()
}

/// Breakpoint for the current viewport, updated on resize.
#[hook]
pub(crate) fn use_breakpoint() -> Breakpoint {
    let breakpoint = use_state_eq(current_breakpoint);
    {
        let breakpoint = breakpoint.clone();
        use_effect_with_deps(
            move |_| {
                let listener = EventListener::new(&window(), "resize", move |_event| {
                    breakpoint.set(current_breakpoint());
                });
                move || drop(listener)
            },
            (),
        );
    }
    *breakpoint
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn current_breakpoint() -> Breakpoint {
    let width = window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map_or(FALLBACK_WIDTH, |w| w.clamp(0.0, f64::from(u16::MAX)) as u16);
    Breakpoint::for_width(width)
}

/// Mount the app into `#root`, or the body when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<PortfolioApp>::with_root(root).render();
    } else {
        yew::Renderer::<PortfolioApp>::new().render();
    }
}
