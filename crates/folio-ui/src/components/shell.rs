use crate::app::{Route, use_breakpoint, use_content};
use crate::components::icons::{IconGithub, IconLinkedin, IconMail, IconMenu, IconX};
use crate::components::theme_toggle::{ThemeChoice, ThemeToggle};
use crate::core::breakpoints::Breakpoint;
use crate::core::responsive::{Size, flex, layout, merge, typography, visibility};
use folio_content::site::{NavItem, SiteConfig};
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub active: Route,
}

#[function_component(SiteShell)]
pub(crate) fn site_shell(props: &ShellProps) -> Html {
    let Some(content) = use_content() else {
        return html! { <main>{for props.children.iter()}</main> };
    };

    html! {
        <div id="top" class="min-h-screen flex flex-col bg-background text-foreground">
            <Navbar site={content.site.clone()} active={props.active} />
            <main class="flex-1">
                {for props.children.iter()}
            </main>
            <Footer site={content.site.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavbarProps {
    site: SiteConfig,
    active: Route,
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let breakpoint = use_breakpoint();
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |breakpoint| {
                if *breakpoint >= Breakpoint::Md {
                    menu_open.set(false);
                }
                || ()
            },
            breakpoint,
        );
    }
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = |extra: &'static str| {
        props
            .site
            .nav
            .iter()
            .map(|item| nav_link(item, props.active, extra))
            .collect::<Html>()
    };

    html! {
        <header class="sticky top-0 z-50 border-b bg-background/80 backdrop-blur">
            <nav class={layout::container(Some(merge([flex::Direction::Row.classes(), flex::Align::Between.classes(), "h-16"]).as_str()))}>
                <Link<Route> to={Route::Home} classes={classes!(typography::h4(Some("font-bold")))}>
                    {props.site.name.clone()}
                </Link<Route>>
                <div class={visibility::show_from(Breakpoint::Md)}>
                    <div class="flex items-center gap-6">
                        {links("")}
                        <ThemeToggle />
                    </div>
                </div>
                <div class={visibility::hide_from(Breakpoint::Md)}>
                    <div class="flex items-center gap-2">
                        <ThemeToggle />
                        <button
                            class="p-2"
                            aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                            aria-expanded={(*menu_open).to_string()}
                            onclick={toggle_menu}
                        >
                            {if *menu_open {
                                html! { <IconX size={Size::Md} /> }
                            } else {
                                html! { <IconMenu size={Size::Md} /> }
                            }}
                        </button>
                    </div>
                </div>
            </nav>
            {if *menu_open {
                html! {
                    <div class={classes!(visibility::hide_from(Breakpoint::Md), "border-t")} onclick={close_menu}>
                        <div class={layout::container(Some("flex flex-col gap-4 py-4"))}>
                            {links("block")}
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </header>
    }
}

fn nav_link(item: &NavItem, active: Route, extra: &'static str) -> Html {
    let Some(route) = Route::from_href(&item.href) else {
        return html! {
            <a href={item.href.clone()} class={typography::body(Some(extra))}>{item.label.clone()}</a>
        };
    };
    let classes = classes!(
        typography::body(Some(extra)),
        "transition-colors hover:text-primary",
        (route == active).then_some("text-primary font-medium"),
    );
    html! {
        <Link<Route> to={route} classes={classes}>{item.label.clone()}</Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    site: SiteConfig,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    let social = &props.site.social;
    html! {
        <footer class="border-t">
            <div class={layout::container(Some(merge([flex::Direction::ColumnToRow.classes(), flex::Align::Between.classes(), "gap-6 py-8"]).as_str()))}>
                <p class={typography::caption(None)}>
                    {format!("© {} · {}", props.site.name, props.site.title)}
                </p>
                <div class="flex items-center gap-4">
                    <a href={social.github.clone()} target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                        <IconGithub size={Size::Sm} />
                    </a>
                    <a href={social.linkedin.clone()} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                        <IconLinkedin size={Size::Sm} />
                    </a>
                    <a href={social.mailto()} aria-label="Email">
                        <IconMail size={Size::Sm} />
                    </a>
                </div>
                <ThemeChoice />
                <a href="#top" class={classes!(visibility::show_only(Breakpoint::Xs), typography::caption(Some("underline")))}>
                    {"Back to top"}
                </a>
            </div>
        </footer>
    }
}
