//! Contact page details.

use serde::{Deserialize, Serialize};

/// Shape of `contact.json`.
#[derive(Debug, Deserialize)]
pub(crate) struct ContactFixture {
    pub(crate) details: ContactData,
    pub(crate) methods: Vec<ContactMethod>,
    pub(crate) faqs: Vec<Faq>,
}

/// Personal details, availability, and working hours.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactData {
    /// Direct contact details.
    pub personal: Personal,
    /// Current availability.
    pub availability: Availability,
    /// Intro paragraph on the contact page.
    pub contact_note: String,
    /// Name of the preferred [`ContactMethod`].
    pub preferred_method: String,
    /// Social links including a `mailto:` address.
    pub social_links: SocialLinks,
    /// Working hours.
    pub working_hours: WorkingHours,
}

/// Direct contact details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Personal {
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Location.
    pub location: Location,
}

/// Location block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
    /// Timezone label.
    pub timezone: String,
}

impl Location {
    /// `"City, Country"` display form.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

/// Availability block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// Short status line.
    pub status: String,
    /// Kinds of work the owner is open to.
    pub open_to: Vec<String>,
    /// Typical response time.
    pub response_time: String,
}

/// Social links on the contact page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLinks {
    /// GitHub profile URL.
    pub github: String,
    /// `LinkedIn` profile URL.
    pub linkedin: String,
    /// Twitter profile URL.
    pub twitter: String,
    /// `mailto:` link.
    pub email: String,
}

/// Working hours block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkingHours {
    /// Timezone label.
    pub timezone: String,
    /// Weekly schedule.
    pub schedule: String,
    /// Caveat line.
    pub note: String,
}

/// Single way of getting in touch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMethod {
    /// Channel name, e.g. `"Email"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Handle or address.
    pub value: String,
    /// Icon identifier.
    pub icon: String,
    /// Whether this is the preferred channel.
    pub preferred: bool,
    /// When to use this channel.
    pub description: String,
}

/// Frequently asked question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Faq {
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use crate::{Content, ContentResult};

    #[test]
    fn location_display_joins_city_and_country() -> ContentResult<()> {
        let contact = Content::load()?.contact;
        assert_eq!(contact.personal.location.display(), "Karachi, Pakistan");
        assert!(contact.social_links.email.starts_with("mailto:"));
        Ok(())
    }
}
