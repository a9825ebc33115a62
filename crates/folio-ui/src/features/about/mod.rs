//! Profile, skills, and experience page.

pub(crate) mod view;
