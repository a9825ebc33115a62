//! Testimonials, headline stats, and service offerings.

use serde::{Deserialize, Serialize};

use crate::images;

/// Shape of `testimonials.json`.
#[derive(Debug, Deserialize)]
pub(crate) struct TestimonialsFixture {
    pub(crate) testimonials: Vec<Testimonial>,
    pub(crate) stats: Vec<Stat>,
    pub(crate) services: Vec<Service>,
}

/// Recommendation from a colleague or mentor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    /// Fixture identifier.
    pub id: u32,
    /// Author name.
    pub name: String,
    /// Author role line.
    pub role: String,
    /// Author organisation.
    pub company: String,
    /// Quote body.
    pub content: String,
    /// Star rating out of five.
    pub rating: u8,
    /// Collaboration context.
    pub project_type: String,
}

impl Testimonial {
    /// Highest rating a testimonial can carry.
    pub const MAX_RATING: u8 = 5;

    /// Avatar URL for the author.
    #[must_use]
    pub fn avatar_url(&self) -> String {
        images::testimonial_avatar(&self.name)
    }

    /// Rating clamped to [`Self::MAX_RATING`], for star rendering.
    #[must_use]
    pub fn stars(&self) -> u8 {
        self.rating.min(Self::MAX_RATING)
    }
}

/// Headline number on the home page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stat {
    /// Display value, e.g. `"6+"`.
    pub number: String,
    /// Caption under the value.
    pub label: String,
    /// Emoji glyph.
    pub icon: String,
}

/// Service offering card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Service {
    /// Card heading.
    pub title: String,
    /// Card body.
    pub description: String,
    /// Emoji glyph.
    pub icon: String,
    /// Technology tags.
    pub technologies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonial(rating: u8) -> Testimonial {
        Testimonial {
            id: 9,
            name: "Sarah Khan".to_string(),
            role: "Student".to_string(),
            company: "Uni".to_string(),
            content: "Great".to_string(),
            rating,
            project_type: "Peer".to_string(),
        }
    }

    #[test]
    fn stars_are_clamped() {
        assert_eq!(testimonial(3).stars(), 3);
        assert_eq!(testimonial(9).stars(), Testimonial::MAX_RATING);
    }

    #[test]
    fn avatar_uses_catalogue_entry() {
        assert!(testimonial(5).avatar_url().contains("background=ec4899"));
    }
}
