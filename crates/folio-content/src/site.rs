//! Global site configuration.

use serde::{Deserialize, Serialize};

/// Site-wide metadata, navigation, and hero copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    /// Owner display name.
    pub name: String,
    /// Document title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Canonical site URL.
    pub url: String,
    /// Search keywords.
    pub keywords: Vec<String>,
    /// Primary navigation entries in display order.
    pub nav: Vec<NavItem>,
    /// Social profile links.
    pub social: SocialLinks,
    /// Contact summary shown in the footer and contact sidebar.
    pub contact: ContactSummary,
    /// Home page hero copy.
    pub hero: Hero,
}

/// Single navigation entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavItem {
    /// Route path.
    pub href: String,
    /// Visible label.
    pub label: String,
}

/// Social profile links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLinks {
    /// GitHub profile URL.
    pub github: String,
    /// `LinkedIn` profile URL.
    pub linkedin: String,
    /// Twitter profile URL.
    pub twitter: String,
    /// Contact email address (without `mailto:`).
    pub email: String,
}

impl SocialLinks {
    /// `mailto:` link for the contact address.
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Contact summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactSummary {
    /// Email address.
    pub email: String,
    /// Phone number for display.
    pub phone: String,
    /// City and country.
    pub location: String,
    /// Timezone label.
    pub timezone: String,
    /// Typical response time.
    pub response_time: String,
}

/// Hero section copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    /// Headline name.
    pub name: String,
    /// Role line under the name.
    pub title: String,
    /// Supporting sentence.
    pub subtitle: String,
    /// Call-to-action labels.
    pub cta: HeroCta,
}

/// Hero call-to-action labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeroCta {
    /// Label for the primary action (projects).
    pub primary: String,
    /// Label for the secondary action (contact).
    pub secondary: String,
}

#[cfg(test)]
mod tests {
    use crate::{Content, ContentResult};

    #[test]
    fn nav_starts_at_home() -> ContentResult<()> {
        let site = Content::load()?.site;
        assert_eq!(site.nav[0].href, "/");
        assert_eq!(site.nav[0].label, "Home");
        Ok(())
    }

    #[test]
    fn mailto_prefixes_address() -> ContentResult<()> {
        let site = Content::load()?.site;
        assert_eq!(site.social.mailto(), "mailto:hello@muhammadsaad.dev");
        Ok(())
    }
}
