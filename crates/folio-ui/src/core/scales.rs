//! Per-concern style scales keyed by breakpoint.
//!
//! # Design
//! - Each table holds mutually exclusive alternatives for one concern; the CSS
//!   cascade picks the widest active entry.
//! - Tables are partial: a missing breakpoint means "no override from here up".
//! - Entry order is emission order, so tables are written narrowest first.

use crate::core::breakpoints::Breakpoint::{self, Lg, Md, Sm, Xl, Xs, Xxl};

/// Ordered, partial mapping from breakpoint to a class fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleTable<'a> {
    entries: &'a [(Breakpoint, &'a str)],
}

impl<'a> ScaleTable<'a> {
    /// Wrap a slice of `(breakpoint, fragment)` pairs in insertion order.
    #[must_use]
    pub const fn new(entries: &'a [(Breakpoint, &'a str)]) -> Self {
        Self { entries }
    }

    /// Entries in insertion order.
    pub fn entries(self) -> impl Iterator<Item = (Breakpoint, &'a str)> + 'a {
        self.entries.iter().copied()
    }

    /// Fragment registered for the breakpoint, if any.
    #[must_use]
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&'a str> {
        self.entries()
            .find(|(bp, _)| *bp == breakpoint)
            .map(|(_, fragment)| fragment)
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when no breakpoint appears twice.
    #[must_use]
    pub fn has_unique_keys(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(idx, (bp, _))| self.entries[..idx].iter().all(|(seen, _)| seen != bp))
    }
}

/// Heading and body text sizes.
pub mod typography {
    use super::{Lg, Md, ScaleTable, Sm, Xl, Xs, Xxl};

    /// Page title.
    pub const H1: ScaleTable<'static> = ScaleTable::new(&[
        (Xs, "text-3xl"),
        (Sm, "text-4xl"),
        (Md, "text-5xl"),
        (Lg, "text-6xl"),
        (Xl, "text-7xl"),
        (Xxl, "text-8xl"),
    ]);
    /// Section title.
    pub const H2: ScaleTable<'static> = ScaleTable::new(&[
        (Xs, "text-2xl"),
        (Sm, "text-3xl"),
        (Md, "text-4xl"),
        (Lg, "text-5xl"),
        (Xl, "text-6xl"),
        (Xxl, "text-7xl"),
    ]);
    /// Card title.
    pub const H3: ScaleTable<'static> = ScaleTable::new(&[
        (Xs, "text-xl"),
        (Sm, "text-2xl"),
        (Md, "text-3xl"),
        (Lg, "text-4xl"),
        (Xl, "text-5xl"),
    ]);
    /// Minor heading.
    pub const H4: ScaleTable<'static> = ScaleTable::new(&[
        (Xs, "text-lg"),
        (Sm, "text-xl"),
        (Md, "text-2xl"),
        (Lg, "text-3xl"),
    ]);
    /// Body copy.
    pub const BODY: ScaleTable<'static> = ScaleTable::new(&[
        (Xs, "text-sm"),
        (Sm, "text-base"),
        (Md, "text-lg"),
        (Lg, "text-xl"),
    ]);
    /// Lead paragraph.
    pub const BODY_LARGE: ScaleTable<'static> = ScaleTable::new(&[
        (Xs, "text-base"),
        (Sm, "text-lg"),
        (Md, "text-xl"),
        (Lg, "text-2xl"),
    ]);
    /// Captions and metadata.
    pub const CAPTION: ScaleTable<'static> =
        ScaleTable::new(&[(Xs, "text-xs"), (Sm, "text-sm"), (Md, "text-base")]);
}

/// Padding, container widths, and gaps.
pub mod spacing {
    use super::{Lg, Md, ScaleTable, Sm, Xl, Xs, Xxl};

    /// Vertical and horizontal section padding.
    pub const SECTION: ScaleTable<'static> = ScaleTable::new(&[
        (Xs, "py-12 px-4"),
        (Sm, "py-16 px-6"),
        (Md, "py-20 px-8"),
        (Lg, "py-24 px-12"),
        (Xl, "py-32 px-16"),
    ]);
    /// Content container width and gutter.
    pub const CONTAINER: ScaleTable<'static> = ScaleTable::new(&[
        (Xs, "max-w-full px-4"),
        (Sm, "max-w-screen-sm px-6"),
        (Md, "max-w-screen-md px-8"),
        (Lg, "max-w-screen-lg px-12"),
        (Xl, "max-w-screen-xl px-16"),
        (Xxl, "max-w-screen-2xl px-20"),
    ]);
    /// Grid and flex gaps.
    pub const GAP: ScaleTable<'static> = ScaleTable::new(&[
        (Xs, "gap-4"),
        (Sm, "gap-6"),
        (Md, "gap-8"),
        (Lg, "gap-12"),
        (Xl, "gap-16"),
    ]);
}

/// Grid column counts.
pub mod grid {
    use super::{Lg, Md, ScaleTable, Sm, Xl, Xs};

    /// Project cards.
    pub const PROJECTS: ScaleTable<'static> = ScaleTable::new(&[
        (Xs, "grid-cols-1"),
        (Sm, "grid-cols-1"),
        (Md, "grid-cols-2"),
        (Lg, "grid-cols-3"),
        (Xl, "grid-cols-3"),
    ]);
    /// Skill tags.
    pub const SKILLS: ScaleTable<'static> = ScaleTable::new(&[
        (Xs, "grid-cols-2"),
        (Sm, "grid-cols-3"),
        (Md, "grid-cols-4"),
        (Lg, "grid-cols-6"),
        (Xl, "grid-cols-8"),
    ]);
    /// Tighter gaps used by the skills grid instead of the shared gap scale.
    pub const SKILLS_GAP: ScaleTable<'static> =
        ScaleTable::new(&[(Xs, "gap-2"), (Sm, "gap-3"), (Md, "gap-4")]);
    /// Headline stats.
    pub const STATS: ScaleTable<'static> = ScaleTable::new(&[
        (Xs, "grid-cols-2"),
        (Sm, "grid-cols-2"),
        (Md, "grid-cols-4"),
        (Lg, "grid-cols-4"),
    ]);
    /// Bento feature tiles.
    pub const BENTO: ScaleTable<'static> = ScaleTable::new(&[
        (Xs, "grid-cols-1"),
        (Sm, "grid-cols-1"),
        (Md, "grid-cols-2"),
        (Lg, "grid-cols-3"),
        (Xl, "grid-cols-4"),
    ]);
}

/// Component sizing.
pub mod components {
    use super::{Lg, Md, ScaleTable, Sm, Xs};

    /// Card padding.
    pub const CARD: ScaleTable<'static> =
        ScaleTable::new(&[(Xs, "p-4"), (Sm, "p-6"), (Md, "p-8"), (Lg, "p-10")]);
    /// Full button scale, from compact to hero-sized.
    pub const BUTTON: ScaleTable<'static> = ScaleTable::new(&[
        (Xs, "px-4 py-2 text-sm"),
        (Sm, "px-6 py-3 text-base"),
        (Md, "px-8 py-4 text-lg"),
        (Lg, "px-10 py-5 text-xl"),
    ]);
    /// Full avatar scale.
    pub const AVATAR: ScaleTable<'static> = ScaleTable::new(&[
        (Xs, "w-16 h-16"),
        (Sm, "w-20 h-20"),
        (Md, "w-24 h-24"),
        (Lg, "w-32 h-32"),
    ]);
    /// Full icon scale.
    pub const ICON: ScaleTable<'static> = ScaleTable::new(&[
        (Xs, "w-4 h-4"),
        (Sm, "w-5 h-5"),
        (Md, "w-6 h-6"),
        (Lg, "w-8 h-8"),
    ]);

    /// Button tables selected by `Size`.
    pub mod button {
        use super::{Md, ScaleTable, Sm, Xs};

        /// Small button.
        pub const SM: ScaleTable<'static> =
            ScaleTable::new(&[(Xs, "px-3 py-2 text-sm"), (Md, "px-4 py-2 text-base")]);
        /// Default button.
        pub const MD: ScaleTable<'static> = ScaleTable::new(&[
            (Xs, "px-4 py-2 text-sm"),
            (Sm, "px-6 py-3 text-base"),
            (Md, "px-8 py-4 text-lg"),
        ]);
        /// Large button.
        pub const LG: ScaleTable<'static> = ScaleTable::new(&[
            (Xs, "px-6 py-3 text-base"),
            (Sm, "px-8 py-4 text-lg"),
            (Md, "px-10 py-5 text-xl"),
        ]);
    }

    /// Avatar tables selected by `Size`.
    pub mod avatar {
        use super::{Lg, Md, ScaleTable, Sm, Xs};

        /// Small avatar.
        pub const SM: ScaleTable<'static> =
            ScaleTable::new(&[(Xs, "w-12 h-12"), (Md, "w-16 h-16")]);
        /// Default avatar.
        pub const MD: ScaleTable<'static> = ScaleTable::new(&[
            (Xs, "w-16 h-16"),
            (Sm, "w-20 h-20"),
            (Md, "w-24 h-24"),
        ]);
        /// Large avatar.
        pub const LG: ScaleTable<'static> = ScaleTable::new(&[
            (Xs, "w-20 h-20"),
            (Sm, "w-24 h-24"),
            (Md, "w-32 h-32"),
            (Lg, "w-40 h-40"),
        ]);
    }

    /// Icon tables selected by `Size`.
    pub mod icon {
        use super::{Md, ScaleTable, Xs};

        /// Small icon.
        pub const SM: ScaleTable<'static> = ScaleTable::new(&[(Xs, "w-4 h-4"), (Md, "w-5 h-5")]);
        /// Default icon.
        pub const MD: ScaleTable<'static> = ScaleTable::new(&[(Xs, "w-5 h-5"), (Md, "w-6 h-6")]);
        /// Large icon.
        pub const LG: ScaleTable<'static> = ScaleTable::new(&[(Xs, "w-6 h-6"), (Md, "w-8 h-8")]);
    }
}

/// Interaction speed tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MotionSpeed {
    /// 150ms.
    Fast,
    /// 300ms.
    #[default]
    Normal,
    /// 500ms.
    Slow,
    /// 750ms.
    Slower,
}

impl MotionSpeed {
    /// Duration in milliseconds.
    #[must_use]
    pub const fn millis(self) -> u32 {
        match self {
            Self::Fast => 150,
            Self::Normal => 300,
            Self::Slow => 500,
            Self::Slower => 750,
        }
    }

    /// Tailwind `duration-*` utility for the speed.
    #[must_use]
    pub const fn duration_class(self) -> &'static str {
        match self {
            Self::Fast => "duration-150",
            Self::Normal => "duration-300",
            Self::Slow => "duration-500",
            Self::Slower => "duration-[750ms]",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TABLES: [ScaleTable<'static>; 28] = [
        typography::H1,
        typography::H2,
        typography::H3,
        typography::H4,
        typography::BODY,
        typography::BODY_LARGE,
        typography::CAPTION,
        spacing::SECTION,
        spacing::CONTAINER,
        spacing::GAP,
        grid::PROJECTS,
        grid::SKILLS,
        grid::SKILLS_GAP,
        grid::STATS,
        grid::BENTO,
        components::CARD,
        components::BUTTON,
        components::AVATAR,
        components::ICON,
        components::button::SM,
        components::button::MD,
        components::button::LG,
        components::avatar::SM,
        components::avatar::MD,
        components::avatar::LG,
        components::icon::SM,
        components::icon::MD,
        components::icon::LG,
    ];

    #[test]
    fn static_tables_are_well_formed() {
        for table in ALL_TABLES {
            assert!(!table.is_empty());
            assert!(table.has_unique_keys(), "duplicate key in {table:?}");
            assert!(table.get(Breakpoint::Xs).is_some(), "{table:?} lacks a base entry");
        }
    }

    #[test]
    fn static_tables_are_written_narrowest_first() {
        for table in ALL_TABLES {
            let keys: Vec<_> = table.entries().map(|(bp, _)| bp).collect();
            let mut sorted = keys.clone();
            sorted.sort_unstable();
            assert_eq!(keys, sorted);
        }
    }

    #[test]
    fn duplicate_keys_are_detected() {
        let table = ScaleTable::new(&[(Breakpoint::Md, "a"), (Breakpoint::Md, "b")]);
        assert!(!table.has_unique_keys());
        assert_eq!(table.get(Breakpoint::Md), Some("a"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn motion_speeds_map_to_millis() {
        assert_eq!(MotionSpeed::default().millis(), 300);
        assert_eq!(MotionSpeed::Slower.millis(), 750);
        assert_eq!(MotionSpeed::Fast.duration_class(), "duration-150");
    }
}
