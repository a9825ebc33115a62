//! Remote image catalogue.
//!
//! Project covers and avatars are hosted externally; this module only maps
//! content identifiers to URLs and supplies fallbacks.

const PROJECT_IMAGES: &[(&str, &str)] = &[
    (
        "cs-academy",
        "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=800&h=600&fit=crop&auto=format&q=80",
    ),
    (
        "portfolio-website",
        "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=600&fit=crop&auto=format&q=80",
    ),
    (
        "task-manager-react",
        "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=800&h=600&fit=crop&auto=format&q=80",
    ),
    (
        "network-calculator",
        "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=800&h=600&fit=crop&auto=format&q=80",
    ),
    (
        "cpp-algorithms",
        "https://images.unsplash.com/photo-1516259762381-22954d7d3ad2?w=800&h=600&fit=crop&auto=format&q=80",
    ),
    (
        "learning-management-system",
        "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?w=800&h=600&fit=crop&auto=format&q=80",
    ),
];

const TESTIMONIAL_AVATARS: &[(&str, &str)] = &[
    (
        "ahmed-hassan",
        "https://ui-avatars.com/api/?name=Ahmed+Hassan&size=200&background=3b82f6&color=ffffff&rounded=true&font-size=0.6",
    ),
    (
        "fatima-ali",
        "https://ui-avatars.com/api/?name=Fatima+Ali&size=200&background=8b5cf6&color=ffffff&rounded=true&font-size=0.6",
    ),
    (
        "sarah-khan",
        "https://ui-avatars.com/api/?name=Sarah+Khan&size=200&background=ec4899&color=ffffff&rounded=true&font-size=0.6",
    ),
];

const TECHNOLOGY_ICONS: &[(&str, &str)] = &[
    (
        "react",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg",
    ),
    (
        "nextjs",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nextjs/nextjs-original.svg",
    ),
    (
        "typescript",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/typescript/typescript-original.svg",
    ),
    (
        "javascript",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/javascript/javascript-original.svg",
    ),
    (
        "nodejs",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg",
    ),
    (
        "mongodb",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mongodb/mongodb-original.svg",
    ),
    (
        "tailwindcss",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/tailwindcss/tailwindcss-plain.svg",
    ),
    (
        "rust",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/rust/rust-original.svg",
    ),
    (
        "css3",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/css3/css3-original.svg",
    ),
    (
        "html5",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/html5/html5-original.svg",
    ),
    (
        "c++",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/cplusplus/cplusplus-original.svg",
    ),
    (
        "git",
        "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/git/git-original.svg",
    ),
];

/// Cover used for projects without a catalogue entry.
pub const PROJECT_PLACEHOLDER: &str = "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=800&h=600&fit=crop&auto=format&q=80";

/// Profile portrait for the about page.
pub const PROFILE_IMAGE: &str = "https://ui-avatars.com/api/?name=Muhammad+Saad&size=400&background=gradient&color=ffffff&rounded=true&font-size=0.4";

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, url)| *url)
}

/// Cover image for a project slug.
#[must_use]
pub fn project_image(project_id: &str) -> &'static str {
    lookup(PROJECT_IMAGES, project_id).unwrap_or(PROJECT_PLACEHOLDER)
}

/// Avatar for a testimonial author.
///
/// Names are keyed by lower-casing and joining whitespace runs with `-`.
/// Unknown authors get a generated initials avatar.
#[must_use]
pub fn testimonial_avatar(name: &str) -> String {
    let key = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    lookup(TESTIMONIAL_AVATARS, &key).map_or_else(
        || {
            format!(
                "https://ui-avatars.com/api/?name={}&size=200&background=6b7280&color=ffffff&rounded=true&font-size=0.6",
                urlencoding::encode(name)
            )
        },
        str::to_string,
    )
}

/// Devicon URL for a technology label, when one is known.
///
/// Labels are keyed by lower-casing, dropping whitespace, and removing the
/// first `.` (so `"Next.js"` maps to `nextjs`).
#[must_use]
pub fn technology_icon(tech: &str) -> Option<&'static str> {
    let mut key: String = tech
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    if let Some(dot) = key.find('.') {
        key.remove(dot);
    }
    lookup(TECHNOLOGY_ICONS, &key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_avatar_is_resolved_by_slugged_name() {
        assert!(testimonial_avatar("Ahmed  Hassan").contains("background=3b82f6"));
    }

    #[test]
    fn unknown_avatar_is_generated_and_encoded() {
        let url = testimonial_avatar("Dr. Fatima Ali");
        assert!(url.starts_with("https://ui-avatars.com/api/?name=Dr.%20Fatima%20Ali&"));
        assert!(url.contains("background=6b7280"));
    }

    #[test]
    fn technology_icons_normalise_labels() {
        assert!(technology_icon("Next.js").is_some_and(|url| url.contains("nextjs")));
        assert!(technology_icon("Tailwind CSS").is_some_and(|url| url.contains("tailwindcss")));
        assert!(technology_icon("Node.js").is_some());
        assert_eq!(technology_icon("Kubernetes"), None);
    }

    #[test]
    fn project_image_fallback() {
        assert_eq!(project_image("nope"), PROJECT_PLACEHOLDER);
        assert_ne!(project_image("cs-academy"), PROJECT_PLACEHOLDER);
    }
}
