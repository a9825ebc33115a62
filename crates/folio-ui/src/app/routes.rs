//! Routing definitions for the portfolio.
use yew_router::prelude::*;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route for a navigation href from site content.
    pub(crate) fn from_href(href: &str) -> Option<Self> {
        Self::recognize(href).filter(|route| *route != Self::NotFound)
    }
}
