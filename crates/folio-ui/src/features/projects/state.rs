//! Project catalogue filter.

use folio_content::projects::{self, Project, ProjectCategory};

/// Category filter applied to the project grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    /// Every project.
    #[default]
    All,
    /// Projects in one category.
    Category(ProjectCategory),
}

impl ProjectFilter {
    /// Filter options in display order, `All` first.
    #[must_use]
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(ProjectCategory::all().into_iter().map(Self::Category))
            .collect()
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Category(category) => category.label(),
        }
    }

    /// Projects passing the filter, in catalogue order.
    #[must_use]
    pub fn apply(self, catalogue: &[Project]) -> Vec<&Project> {
        match self {
            Self::All => catalogue.iter().collect(),
            Self::Category(category) => projects::by_category(catalogue, category),
        }
    }

    /// Number of projects passing the filter.
    #[must_use]
    pub fn count(self, catalogue: &[Project]) -> usize {
        self.apply(catalogue).len()
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectFilter;
    use folio_content::{Content, ContentResult, ProjectCategory};

    #[test]
    fn all_comes_first() {
        let options = ProjectFilter::options();
        assert_eq!(options[0], ProjectFilter::All);
        assert_eq!(options.len(), ProjectCategory::all().len() + 1);
    }

    #[test]
    fn all_keeps_catalogue_order() -> ContentResult<()> {
        let content = Content::load()?;
        let ids: Vec<_> = ProjectFilter::All
            .apply(&content.projects)
            .into_iter()
            .map(|project| project.id.as_str())
            .collect();
        let expected: Vec<_> = content.projects.iter().map(|project| project.id.as_str()).collect();
        assert_eq!(ids, expected);
        Ok(())
    }

    #[test]
    fn category_filter_partitions_catalogue() -> ContentResult<()> {
        let content = Content::load()?;
        let total: usize = ProjectCategory::all()
            .into_iter()
            .map(|category| ProjectFilter::Category(category).count(&content.projects))
            .sum();
        assert_eq!(total, content.projects.len());
        for project in ProjectFilter::Category(ProjectCategory::Web).apply(&content.projects) {
            assert_eq!(project.category, ProjectCategory::Web);
        }
        Ok(())
    }
}
