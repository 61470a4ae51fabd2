//! Page sections and the header's mobile menu.

/// A scroll target on the page. Each maps to exactly one element id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Problem statement cards
    Problem,
    /// Solution pitch and "How It Works"
    Solution,
    /// Interactive detection demo
    Demo,
    /// Feature grid
    Features,
    /// Contact call-to-action
    Contact,
}

impl Section {
    /// Every section, in page order.
    pub const ALL: [Section; 5] = [
        Section::Problem,
        Section::Solution,
        Section::Demo,
        Section::Features,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Problem => "problem",
            Section::Solution => "solution",
            Section::Demo => "demo",
            Section::Features => "features",
            Section::Contact => "contact",
        }
    }

    /// Inverse of [`Section::anchor`]. Accepts a leading `#`.
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let id = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|s| s.anchor() == id)
    }
}

/// A header navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Where the link scrolls to
    pub section: Section,
    /// Visible label
    pub label: &'static str,
}

/// Header links, shared by the desktop bar and the mobile drawer.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { section: Section::Problem, label: "The Problem" },
    NavLink { section: Section::Solution, label: "Solution" },
    NavLink { section: Section::Demo, label: "Live Demo" },
    NavLink { section: Section::Contact, label: "Contact Us" },
];

/// Collapsed/expanded state of the mobile navigation drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Whether the drawer is showing.
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the drawer. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        tracing::debug!(open = self.open, "mobile menu toggled");
        self.open
    }

    /// A link was chosen: close the drawer and hand back the scroll target.
    pub fn select(&mut self, section: Section) -> Section {
        self.open = false;
        tracing::debug!(anchor = section.anchor(), "navigate");
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn anchors_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(Section::from_anchor("#demo"), Some(Section::Demo));
        assert_eq!(Section::from_anchor("pricing"), None);
    }

    #[test]
    fn nav_links_cover_fixed_targets() {
        let anchors: Vec<_> = NAV_LINKS.iter().map(|l| l.section.anchor()).collect();
        assert_eq!(anchors, vec!["problem", "solution", "demo", "contact"]);
    }

    #[test]
    fn toggle_flips_once_per_activation() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(!menu.toggle());
        assert!(!menu.is_open());
    }

    #[test]
    fn select_closes_menu() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert_eq!(menu.select(Section::Contact), Section::Contact);
        assert!(!menu.is_open());

        // already closed stays closed
        menu.select(Section::Problem);
        assert!(!menu.is_open());
    }
}
