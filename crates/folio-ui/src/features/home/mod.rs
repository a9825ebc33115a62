//! Landing page.

pub(crate) mod view;
