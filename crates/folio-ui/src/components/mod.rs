pub(crate) mod cards;
pub(crate) mod icons;
pub(crate) mod shell;
pub(crate) mod theme_toggle;
