//! Inline SVG icon set.

use crate::core::responsive::{self, Size};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub size: Size,
    #[prop_or(false)]
    pub filled: bool,
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let mut classes = classes!(responsive::components::icon(props.size, None));
    classes.extend(props.class.clone());
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    let fill = if props.filled { "currentColor" } else { "none" };
    html! {
        <svg
            class={classes}
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

#[function_component(IconSun)]
pub(crate) fn icon_sun(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <circle cx="12" cy="12" r="4" />
            <path d="M12 2v2m0 16v2M4.93 4.93l1.41 1.41m11.32 11.32l1.41 1.41M2 12h2m16 0h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" />
        </> },
    )
}

#[function_component(IconMoon)]
pub(crate) fn icon_moon(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M20.985 12.486a9 9 0 1 1-9.473-9.472c.405-.022.617.46.402.803a6 6 0 0 0 8.268 8.268c.344-.215.825-.004.803.401" /> },
    )
}

#[function_component(IconMenu)]
pub(crate) fn icon_menu(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M4 5h16M4 12h16M4 19h16" /> })
}

#[function_component(IconX)]
pub(crate) fn icon_x(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M18 6L6 18M6 6l12 12" /> })
}

#[function_component(IconArrowRight)]
pub(crate) fn icon_arrow_right(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M5 12h14m-7-7l7 7l-7 7" /> })
}

#[function_component(IconExternalLink)]
pub(crate) fn icon_external_link(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M15 3h6v6m-11 5L21 3m-3 10v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" /> },
    )
}

#[function_component(IconGithub)]
pub(crate) fn icon_github(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5c.08-1.25-.27-2.48-1-3.5c.28-1.15.28-2.35 0-3.5c0 0-1 0-3 1.5c-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5c-.39.49-.68 1.05-.85 1.65S8.93 17.38 9 18v4M9 18c-4.51 2-5-2-7-2" /> },
    )
}

#[function_component(IconLinkedin)]
pub(crate) fn icon_linkedin(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6M2 9h4v12H2z" />
            <circle cx="4" cy="4" r="2" />
        </> },
    )
}

#[function_component(IconMail)]
pub(crate) fn icon_mail(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <rect width="20" height="16" x="2" y="4" rx="2" />
            <path d="m22 7l-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        </> },
    )
}

#[function_component(IconMapPin)]
pub(crate) fn icon_map_pin(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0" />
            <circle cx="12" cy="10" r="3" />
        </> },
    )
}

#[function_component(IconStar)]
pub(crate) fn icon_star(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M11.525 2.295a.53.53 0 0 1 .95 0l2.31 4.679a2.12 2.12 0 0 0 1.595 1.16l5.166.756a.53.53 0 0 1 .294.904l-3.736 3.638a2.12 2.12 0 0 0-.611 1.878l.882 5.14a.53.53 0 0 1-.771.56l-4.618-2.428a2.12 2.12 0 0 0-1.973 0L6.396 21.01a.53.53 0 0 1-.77-.56l.881-5.139a2.12 2.12 0 0 0-.611-1.879L2.16 9.795a.53.53 0 0 1 .294-.906l5.165-.755a2.12 2.12 0 0 0 1.597-1.16z" /> },
    )
}

#[function_component(IconCheckCircle)]
pub(crate) fn icon_check_circle(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <circle cx="12" cy="12" r="10" />
            <path d="m9 12l2 2l4-4" />
        </> },
    )
}
