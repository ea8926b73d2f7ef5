//! Shared page chrome: title, navigation and footer links.

use autoparts_core::Section;

/// A navigation link in the header or footer.
#[derive(Clone)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl NavLink {
    fn new(section: Section, active: Section) -> Self {
        Self {
            href: section.path(),
            label: section.label(),
            active: section == active,
        }
    }
}

/// Data every full page passes to `base.html`.
#[derive(Clone)]
pub struct Layout {
    /// Page title (without the site name).
    pub title: String,
    /// The section being shown.
    pub active: Section,
    /// Header navigation, one link per section.
    pub nav: Vec<NavLink>,
    /// Footer "for buyers" links.
    pub buyer_links: Vec<NavLink>,
}

impl Layout {
    /// Layout for `active`, titled with the section label.
    #[must_use]
    pub fn for_section(active: Section) -> Self {
        Self::titled(active, active.label())
    }

    /// Layout for `active` with a custom title.
    #[must_use]
    pub fn titled(active: Section, title: &str) -> Self {
        Self {
            title: title.to_string(),
            active,
            nav: Section::ALL
                .into_iter()
                .map(|section| NavLink::new(section, active))
                .collect(),
            buyer_links: [Section::Delivery, Section::Payment, Section::Warranty]
                .into_iter()
                .map(|section| NavLink::new(section, active))
                .collect(),
        }
    }
}
