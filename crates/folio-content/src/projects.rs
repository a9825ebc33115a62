//! Project catalogue models and queries.

use serde::{Deserialize, Serialize};

use crate::images;

/// Portfolio project entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable slug, also the image catalogue key.
    pub id: String,
    /// Display title.
    pub title: String,
    /// One-paragraph summary for cards.
    pub description: String,
    /// Extended description for detail views.
    #[serde(default)]
    pub long_description: Option<String>,
    /// Technologies used, in display order.
    pub tech_stack: Vec<String>,
    /// Source repository URL.
    #[serde(default)]
    pub github_url: Option<String>,
    /// Live deployment URL.
    #[serde(default)]
    pub live_url: Option<String>,
    /// Whether the project appears on the home page.
    pub featured: bool,
    /// Project category used by the projects filter.
    pub category: ProjectCategory,
    /// Year the project started.
    pub year: u16,
    /// Delivery status.
    pub status: ProjectStatus,
}

impl Project {
    /// Cover image for the card, falling back to the shared placeholder.
    #[must_use]
    pub fn image_url(&self) -> &'static str {
        images::project_image(&self.id)
    }
}

/// Project categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    /// Websites and web applications.
    Web,
    /// Mobile applications.
    Mobile,
    /// Desktop or native programs.
    Desktop,
    /// Backend services and APIs.
    Api,
    /// Educational platforms.
    Education,
}

impl ProjectCategory {
    /// Every category in filter order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Web,
            Self::Mobile,
            Self::Desktop,
            Self::Api,
            Self::Education,
        ]
    }

    /// Identifier used in fixtures and query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Api => "api",
            Self::Education => "education",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::Mobile => "Mobile",
            Self::Desktop => "Desktop",
            Self::Api => "API",
            Self::Education => "Education",
        }
    }
}

/// Delivery status of a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Shipped.
    Completed,
    /// Under active development.
    InProgress,
    /// Not started yet.
    Planned,
}

impl ProjectStatus {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Planned => "Planned",
        }
    }
}

/// Projects flagged for the home page, in catalogue order.
#[must_use]
pub fn featured(projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|project| project.featured).collect()
}

/// Look up a project by its slug.
#[must_use]
pub fn by_id<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    projects.iter().find(|project| project.id == id)
}

/// Projects in the given category, in catalogue order.
#[must_use]
pub fn by_category(projects: &[Project], category: ProjectCategory) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| project.category == category)
        .collect()
}

/// Projects with the given status, in catalogue order.
#[must_use]
pub fn by_status(projects: &[Project], status: ProjectStatus) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| project.status == status)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Content, ContentResult};

    fn catalogue() -> ContentResult<Vec<Project>> {
        Ok(Content::load()?.projects)
    }

    #[test]
    fn featured_keeps_catalogue_order() -> ContentResult<()> {
        let projects = catalogue()?;
        let ids: Vec<_> = featured(&projects).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            ["cs-academy", "portfolio-website", "learning-management-system"]
        );
        Ok(())
    }

    #[test]
    fn lookups_by_id_category_and_status() -> ContentResult<()> {
        let projects = catalogue()?;
        assert_eq!(
            by_id(&projects, "cpp-algorithms").map(|p| p.category),
            Some(ProjectCategory::Desktop)
        );
        assert!(by_id(&projects, "missing").is_none());
        assert_eq!(by_category(&projects, ProjectCategory::Web).len(), 3);
        assert!(by_category(&projects, ProjectCategory::Mobile).is_empty());
        assert_eq!(by_status(&projects, ProjectStatus::Planned).len(), 1);
        Ok(())
    }

    #[test]
    fn optional_links_default_to_none() -> ContentResult<()> {
        let projects = catalogue()?;
        let lms = by_id(&projects, "learning-management-system").expect("fixture present");
        assert!(lms.github_url.is_none());
        assert!(lms.live_url.is_none());
        Ok(())
    }

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        let status: ProjectStatus =
            serde_json::from_str("\"in-progress\"").expect("valid status");
        assert_eq!(status, ProjectStatus::InProgress);
        assert_eq!(status.label(), "In Progress");
    }

    #[test]
    fn image_url_falls_back_to_placeholder() -> ContentResult<()> {
        let mut project = catalogue()?.remove(0);
        assert!(project.image_url().contains("photo-1522202176988"));
        project.id = "unknown".to_string();
        assert_eq!(project.image_url(), images::PROJECT_PLACEHOLDER);
        Ok(())
    }
}
