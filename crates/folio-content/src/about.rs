//! About page copy.

use serde::{Deserialize, Serialize};

/// Everything rendered on the about page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AboutData {
    /// Profile header.
    pub profile: Profile,
    /// Biography paragraphs in order.
    pub bio: Vec<String>,
    /// Skill tags.
    pub skills: Vec<String>,
    /// Education summary.
    pub education: Education,
    /// Current position.
    pub current_role: CurrentRole,
    /// Work history, newest first.
    pub experience: Vec<Experience>,
}

/// Profile header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Role line.
    pub role: String,
    /// Experience tagline.
    pub experience: String,
    /// Alt text for the portrait.
    pub image_alt: String,
}

/// Education summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Education {
    /// Degree name.
    pub degree: String,
    /// Field of study.
    pub field: String,
    /// Institution.
    pub university: String,
    /// Enrolment status.
    pub status: String,
    /// Year range.
    pub period: String,
}

/// Current position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentRole {
    /// Job title.
    pub title: String,
    /// Employer.
    pub company: String,
    /// Short description.
    pub description: String,
    /// Start month.
    pub start_date: String,
}

/// Work history entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Experience {
    /// Position title.
    pub title: String,
    /// Employer or programme.
    pub company: String,
    /// Date range.
    pub period: String,
    /// Summary of the work.
    pub description: String,
    /// Accent colour name for the timeline marker.
    pub color: String,
}

#[cfg(test)]
mod tests {
    use crate::{Content, ContentResult};

    #[test]
    fn about_copy_is_populated() -> ContentResult<()> {
        let about = Content::load()?.about;
        assert_eq!(about.bio.len(), 3);
        assert_eq!(about.skills.len(), 12);
        assert_eq!(about.current_role.company, about.experience[0].company);
        assert!(!about.profile.image_alt.is_empty());
        Ok(())
    }
}
