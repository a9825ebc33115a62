#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Static content for the Folio portfolio site.
//!
//! Site configuration, projects, testimonials, and the about/contact copy are
//! maintained as JSON fixtures under `data/` and compiled into the binary. The
//! UI reads these models as-is; nothing here reshapes the fixtures beyond
//! deserialization and a handful of lookups.

pub mod about;
pub mod contact;
pub mod error;
pub mod images;
pub mod projects;
pub mod site;
pub mod testimonials;

use serde::de::DeserializeOwned;

pub use about::AboutData;
pub use contact::{ContactData, ContactMethod, Faq};
pub use error::{ContentError, ContentResult};
pub use projects::{Project, ProjectCategory, ProjectStatus};
pub use site::SiteConfig;
pub use testimonials::{Service, Stat, Testimonial};

const SITE_JSON: &str = include_str!("../data/site.json");
const PROJECTS_JSON: &str = include_str!("../data/projects.json");
const TESTIMONIALS_JSON: &str = include_str!("../data/testimonials.json");
const ABOUT_JSON: &str = include_str!("../data/about.json");
const CONTACT_JSON: &str = include_str!("../data/contact.json");

/// Every content fixture the site renders, parsed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    /// Global site metadata, navigation, and hero copy.
    pub site: SiteConfig,
    /// Project catalogue in display order.
    pub projects: Vec<Project>,
    /// Testimonials in display order.
    pub testimonials: Vec<Testimonial>,
    /// Headline numbers shown on the home page.
    pub stats: Vec<Stat>,
    /// Service offerings shown on the home page.
    pub services: Vec<Service>,
    /// About page copy.
    pub about: AboutData,
    /// Contact page details.
    pub contact: ContactData,
    /// Ways to get in touch, preferred first in the fixture.
    pub contact_methods: Vec<ContactMethod>,
    /// Frequently asked questions for the contact page.
    pub faqs: Vec<Faq>,
}

impl Content {
    /// Parse every embedded fixture.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Parse`] naming the first fixture that does not
    /// match its model.
    pub fn load() -> ContentResult<Self> {
        let site = parse::<SiteConfig>("site.json", SITE_JSON)?;
        let projects = parse::<Vec<Project>>("projects.json", PROJECTS_JSON)?;
        let testimonials =
            parse::<testimonials::TestimonialsFixture>("testimonials.json", TESTIMONIALS_JSON)?;
        let about = parse::<AboutData>("about.json", ABOUT_JSON)?;
        let contact = parse::<contact::ContactFixture>("contact.json", CONTACT_JSON)?;

        Ok(Self {
            site,
            projects,
            testimonials: testimonials.testimonials,
            stats: testimonials.stats,
            services: testimonials.services,
            about,
            contact: contact.details,
            contact_methods: contact.methods,
            faqs: contact.faqs,
        })
    }
}

pub(crate) fn parse<T: DeserializeOwned>(fixture: &'static str, raw: &str) -> ContentResult<T> {
    serde_json::from_str(raw).map_err(|source| ContentError::Parse { fixture, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_fixtures_parse() -> ContentResult<()> {
        let content = Content::load()?;
        assert_eq!(content.site.nav.len(), 4);
        assert_eq!(content.projects.len(), 6);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.stats.len(), 4);
        assert_eq!(content.services.len(), 4);
        assert_eq!(content.about.experience.len(), 3);
        assert_eq!(content.contact_methods.len(), 4);
        assert_eq!(content.faqs.len(), 4);
        Ok(())
    }

    #[test]
    fn parse_errors_name_the_fixture() {
        let err = parse::<SiteConfig>("site.json", "{ \"name\": 1 }")
            .expect_err("malformed fixture should fail");
        assert!(matches!(err, ContentError::Parse { fixture: "site.json", .. }));
    }

    #[test]
    fn exactly_one_contact_method_is_preferred() -> ContentResult<()> {
        let content = Content::load()?;
        let preferred: Vec<_> = content
            .contact_methods
            .iter()
            .filter(|method| method.preferred)
            .collect();
        assert_eq!(preferred.len(), 1);
        assert_eq!(preferred[0].kind, content.contact.preferred_method);
        Ok(())
    }
}
