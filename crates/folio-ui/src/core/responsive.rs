//! Breakpoint-aware class composition.
//!
//! # Design
//! - [`compose`] is the only primitive: it prefixes each scale entry with its
//!   breakpoint selector and joins the results in table order.
//! - Helpers bind one scale table plus concern-specific static classes and
//!   append caller classes verbatim. Conflicting utilities are left for the
//!   CSS cascade to resolve; nothing is de-duplicated.
//! - Everything here is pure and cheap enough to call on every render.

use crate::core::breakpoints::Breakpoint;
use crate::core::scales::{self, ScaleTable};

/// Expand a scale table into a single class string.
///
/// Each entry becomes `prefix + fragment` and entries are joined by one space
/// in table order. An empty table yields an empty string. Fragments are opaque:
/// only the start of a multi-class fragment receives the prefix.
#[must_use]
pub fn compose(table: ScaleTable<'_>) -> String {
    let mut out = String::new();
    for (breakpoint, fragment) in table.entries() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(breakpoint.prefix());
        out.push_str(fragment);
    }
    out
}

/// Concatenate class strings with single spaces, skipping empty parts.
#[must_use]
pub fn merge<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn with_custom(base: &[&str], custom: Option<&str>) -> String {
    merge(base.iter().copied().chain(custom))
}

/// Discrete size key for buttons, avatars, and icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Size {
    /// Compact.
    Sm,
    /// Default.
    #[default]
    Md,
    /// Prominent.
    Lg,
}

/// Heading and text helpers.
pub mod typography {
    use super::{compose, scales, with_custom};

    const HEADING_STRONG: &str = "font-bold leading-tight tracking-tight";
    const HEADING_SOFT: &str = "font-semibold leading-snug";

    /// Page title classes.
    #[must_use]
    pub fn h1(custom: Option<&str>) -> String {
        with_custom(&[compose(scales::typography::H1).as_str(), HEADING_STRONG], custom)
    }

    /// Section title classes.
    #[must_use]
    pub fn h2(custom: Option<&str>) -> String {
        with_custom(&[compose(scales::typography::H2).as_str(), HEADING_STRONG], custom)
    }

    /// Card title classes.
    #[must_use]
    pub fn h3(custom: Option<&str>) -> String {
        with_custom(&[compose(scales::typography::H3).as_str(), HEADING_SOFT], custom)
    }

    /// Minor heading classes.
    #[must_use]
    pub fn h4(custom: Option<&str>) -> String {
        with_custom(&[compose(scales::typography::H4).as_str(), HEADING_SOFT], custom)
    }

    /// Body copy classes.
    #[must_use]
    pub fn body(custom: Option<&str>) -> String {
        with_custom(&[compose(scales::typography::BODY).as_str(), "leading-relaxed"], custom)
    }

    /// Lead paragraph classes.
    #[must_use]
    pub fn body_large(custom: Option<&str>) -> String {
        with_custom(
            &[compose(scales::typography::BODY_LARGE).as_str(), "leading-relaxed"],
            custom,
        )
    }

    /// Caption classes.
    #[must_use]
    pub fn caption(custom: Option<&str>) -> String {
        with_custom(&[compose(scales::typography::CAPTION).as_str(), "leading-normal"], custom)
    }
}

/// Section, container, and grid helpers.
pub mod layout {
    use super::{compose, scales, with_custom};

    /// Grid presets.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum GridKind {
        /// Project cards.
        Projects,
        /// Skill tags, with tighter gaps.
        Skills,
        /// Headline stats.
        Stats,
        /// Bento tiles.
        Bento,
    }

    /// Section padding classes.
    #[must_use]
    pub fn section(custom: Option<&str>) -> String {
        with_custom(&[compose(scales::spacing::SECTION).as_str()], custom)
    }

    /// Centered content container classes.
    #[must_use]
    pub fn container(custom: Option<&str>) -> String {
        with_custom(
            &["mx-auto w-full", compose(scales::spacing::CONTAINER).as_str()],
            custom,
        )
    }

    /// Grid classes for the given preset.
    #[must_use]
    pub fn grid(kind: GridKind, custom: Option<&str>) -> String {
        let (columns, gap) = match kind {
            GridKind::Projects => (scales::grid::PROJECTS, scales::spacing::GAP),
            GridKind::Skills => (scales::grid::SKILLS, scales::grid::SKILLS_GAP),
            GridKind::Stats => (scales::grid::STATS, scales::spacing::GAP),
            GridKind::Bento => (scales::grid::BENTO, scales::spacing::GAP),
        };
        with_custom(&["grid", compose(columns).as_str(), compose(gap).as_str()], custom)
    }
}

/// Card, button, avatar, and icon helpers.
pub mod components {
    use super::{Size, compose, scales, with_custom};
    use crate::core::scales::ScaleTable;

    const BUTTON_BASE: &str =
        "inline-flex items-center justify-center rounded-md font-medium transition-colors";
    const BUTTON_FOCUS: &str = "focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring";
    const BUTTON_DISABLED: &str = "disabled:pointer-events-none disabled:opacity-50";

    const fn pick(
        size: Size,
        sm: ScaleTable<'static>,
        md: ScaleTable<'static>,
        lg: ScaleTable<'static>,
    ) -> ScaleTable<'static> {
        match size {
            Size::Sm => sm,
            Size::Md => md,
            Size::Lg => lg,
        }
    }

    /// Card surface classes.
    #[must_use]
    pub fn card(custom: Option<&str>) -> String {
        with_custom(
            &[
                compose(scales::components::CARD).as_str(),
                "rounded-lg border bg-card text-card-foreground shadow-sm",
            ],
            custom,
        )
    }

    /// Button classes for the given size.
    #[must_use]
    pub fn button(size: Size, custom: Option<&str>) -> String {
        let table = pick(
            size,
            scales::components::button::SM,
            scales::components::button::MD,
            scales::components::button::LG,
        );
        with_custom(
            &[BUTTON_BASE, BUTTON_FOCUS, BUTTON_DISABLED, compose(table).as_str()],
            custom,
        )
    }

    /// Avatar classes for the given size.
    #[must_use]
    pub fn avatar(size: Size, custom: Option<&str>) -> String {
        let table = pick(
            size,
            scales::components::avatar::SM,
            scales::components::avatar::MD,
            scales::components::avatar::LG,
        );
        with_custom(&["rounded-full object-cover", compose(table).as_str()], custom)
    }

    /// Icon classes for the given size.
    #[must_use]
    pub fn icon(size: Size, custom: Option<&str>) -> String {
        let table = pick(
            size,
            scales::components::icon::SM,
            scales::components::icon::MD,
            scales::components::icon::LG,
        );
        with_custom(&[compose(table).as_str()], custom)
    }
}

/// Show/hide helpers relative to a breakpoint.
pub mod visibility {
    use super::Breakpoint;

    /// Hidden below the breakpoint, visible from it up.
    #[must_use]
    pub fn show_from(breakpoint: Breakpoint) -> String {
        match breakpoint {
            Breakpoint::Xs => "block".to_string(),
            other => format!("hidden {}block", other.prefix()),
        }
    }

    /// Visible below the breakpoint, hidden from it up.
    #[must_use]
    pub fn hide_from(breakpoint: Breakpoint) -> String {
        match breakpoint {
            Breakpoint::Xs => "hidden".to_string(),
            other => format!("block {}hidden", other.prefix()),
        }
    }

    /// Visible only within the breakpoint's own range.
    #[must_use]
    pub fn show_only(breakpoint: Breakpoint) -> String {
        let shown = show_from(breakpoint);
        match breakpoint.next() {
            Some(next) => format!("{shown} {}hidden", next.prefix()),
            None => shown,
        }
    }
}

/// Static flexbox class sets.
pub mod flex {
    /// Main-axis direction presets.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Direction {
        /// Always stacked.
        Column,
        /// Stacked on phones, a row from `sm` up.
        ColumnToRow,
        /// Always a row.
        Row,
        /// A row on phones, stacked from `sm` up.
        RowToColumn,
    }

    impl Direction {
        /// Class string for the preset.
        #[must_use]
        pub const fn classes(self) -> &'static str {
            match self {
                Self::Column => "flex flex-col",
                Self::ColumnToRow => "flex flex-col sm:flex-row",
                Self::Row => "flex flex-row",
                Self::RowToColumn => "flex flex-row sm:flex-col",
            }
        }
    }

    /// Cross- and main-axis alignment presets.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Align {
        /// Centered on both axes.
        Center,
        /// Packed to the start.
        Start,
        /// Packed to the end.
        End,
        /// Centered, space between.
        Between,
        /// Centered, space around.
        Around,
    }

    impl Align {
        /// Class string for the preset.
        #[must_use]
        pub const fn classes(self) -> &'static str {
            match self {
                Self::Center => "items-center justify-center",
                Self::Start => "items-start justify-start",
                Self::End => "items-end justify-end",
                Self::Between => "items-center justify-between",
                Self::Around => "items-center justify-around",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::layout::GridKind;
    use super::*;
    use crate::core::breakpoints::Breakpoint::{Lg, Md, Xs};

    #[test]
    fn compose_prefixes_non_base_breakpoints() {
        let classes = compose(ScaleTable::new(&[(Xs, "text-sm"), (Md, "text-lg"), (Lg, "text-xl")]));
        assert_eq!(classes, "text-sm md:text-lg lg:text-xl");
    }

    #[test]
    fn compose_of_empty_table_is_empty() {
        assert_eq!(compose(ScaleTable::new(&[])), "");
    }

    #[test]
    fn single_entry_carries_prefix_only_above_base() {
        for bp in Breakpoint::ALL {
            let out = compose(ScaleTable::new(&[(bp, "frag")]));
            if bp == Xs {
                assert_eq!(out, "frag");
            } else {
                assert_eq!(out, format!("{}:frag", bp.name()));
            }
        }
    }

    #[test]
    fn compose_is_the_join_of_single_entry_compositions() {
        let entries = [(Lg, "c"), (Xs, "a b"), (Breakpoint::Xxl, "d")];
        let whole = compose(ScaleTable::new(&entries));
        let pieces: Vec<String> = entries
            .iter()
            .map(|entry| compose(ScaleTable::new(std::slice::from_ref(entry))))
            .collect();
        assert_eq!(whole, pieces.join(" "));
        assert_eq!(whole, "lg:c a b 2xl:d");
    }

    #[test]
    fn compose_is_deterministic() {
        let table = scales::typography::H1;
        assert_eq!(compose(table), compose(table));
    }

    #[test]
    fn merge_keeps_conflicts_and_drops_empties() {
        assert_eq!(merge(["p-4", "", "p-8"]), "p-4 p-8");
        assert_eq!(merge([]), "");
    }

    #[test]
    fn heading_helpers_append_weight_then_custom() {
        assert_eq!(
            typography::h1(None),
            "text-3xl sm:text-4xl md:text-5xl lg:text-6xl xl:text-7xl 2xl:text-8xl font-bold leading-tight tracking-tight"
        );
        assert_eq!(
            typography::caption(Some("text-muted")),
            "text-xs sm:text-sm md:text-base leading-normal text-muted"
        );
        assert!(typography::h3(None).ends_with("font-semibold leading-snug"));
    }

    #[test]
    fn layout_helpers_order_static_before_scales() {
        assert_eq!(
            layout::container(None),
            "mx-auto w-full max-w-full px-4 sm:max-w-screen-sm px-6 md:max-w-screen-md px-8 lg:max-w-screen-lg px-12 xl:max-w-screen-xl px-16 2xl:max-w-screen-2xl px-20"
        );
        assert_eq!(
            layout::grid(GridKind::Skills, Some("mt-4")),
            "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 xl:grid-cols-8 gap-2 sm:gap-3 md:gap-4 mt-4"
        );
        assert!(layout::grid(GridKind::Stats, None).ends_with("lg:gap-12 xl:gap-16"));
    }

    #[test]
    fn custom_classes_are_appended_not_merged() {
        let classes = components::card(Some("p-0"));
        assert!(classes.starts_with("p-4 sm:p-6"));
        assert!(classes.ends_with("shadow-sm p-0"));
    }

    #[test]
    fn sized_helpers_select_their_table() {
        assert_eq!(components::icon(Size::Sm, None), "w-4 h-4 md:w-5 h-5");
        assert_eq!(components::icon(Size::default(), None), "w-5 h-5 md:w-6 h-6");
        assert_eq!(
            components::avatar(Size::Lg, None),
            "rounded-full object-cover w-20 h-20 sm:w-24 h-24 md:w-32 h-32 lg:w-40 h-40"
        );
        assert!(components::button(Size::Lg, None).ends_with("md:px-10 py-5 text-xl"));
    }

    #[test]
    fn visibility_helpers() {
        assert_eq!(visibility::show_from(Md), "hidden md:block");
        assert_eq!(visibility::hide_from(Lg), "block lg:hidden");
        assert_eq!(visibility::show_only(Md), "hidden md:block lg:hidden");
        assert_eq!(visibility::show_only(Breakpoint::Xxl), "hidden 2xl:block");
        assert_eq!(visibility::show_from(Xs), "block");
        assert_eq!(visibility::show_only(Xs), "block sm:hidden");
        assert_eq!(visibility::hide_from(Xs), "hidden");
    }

    #[test]
    fn flex_presets() {
        assert_eq!(flex::Direction::ColumnToRow.classes(), "flex flex-col sm:flex-row");
        assert_eq!(flex::Align::Between.classes(), "items-center justify-between");
    }
}
