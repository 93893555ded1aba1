//! # Page Composition
//!
//! The ordered list of sections on the green landing page and the copy for
//! the lazily loaded ones.
//!
//! The intro (hero) and home sections are rendered inline. About, solutions,
//! products, contact and footer are loaded on demand; until then the page
//! shows a pulsing placeholder of the recorded height.

use crate::GreanError;
use serde::Serialize;
use std::str::FromStr;

/// Placeholder class for a lazily loaded content section.
pub const SECTION_PLACEHOLDER_CLASS: &str = "min-h-[300px] bg-slate-900/40 animate-pulse rounded-lg my-8";

/// Placeholder class for the lazily loaded footer.
pub const FOOTER_PLACEHOLDER_CLASS: &str = "h-24 bg-slate-900/40 animate-pulse rounded-lg my-8";

/// Sections in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Intro,
    Home,
    About,
    Solutions,
    Products,
    Contact,
    Footer,
}

impl Section {
    /// Every section, top to bottom.
    pub const ALL: [Section; 7] = [
        Section::Intro,
        Section::Home,
        Section::About,
        Section::Solutions,
        Section::Products,
        Section::Contact,
        Section::Footer,
    ];

    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::Home => "home",
            Section::About => "about",
            Section::Solutions => "solutions",
            Section::Products => "products",
            Section::Contact => "contact",
            Section::Footer => "footer",
        }
    }

    /// DOM id of the section element.
    #[must_use]
    pub fn anchor(&self) -> String {
        format!("green-{}", self.slug())
    }

    /// Check if the section is fetched after the first paint.
    #[must_use]
    pub fn is_lazy(&self) -> bool {
        !matches!(self, Section::Intro | Section::Home)
    }

    /// Placeholder shown while a lazy section loads.
    #[must_use]
    pub fn placeholder_class(&self) -> Option<&'static str> {
        match self {
            Section::Intro | Section::Home => None,
            Section::Footer => Some(FOOTER_PLACEHOLDER_CLASS),
            _ => Some(SECTION_PLACEHOLDER_CLASS),
        }
    }

    /// Lazy sections that can be fetched individually.
    pub fn lazy() -> impl Iterator<Item = Section> {
        Section::ALL.into_iter().filter(Section::is_lazy)
    }
}

impl FromStr for Section {
    type Err = GreanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| GreanError::UnknownSection(s.to_string()))
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

// =============================================================================
// SECTION COPY
// =============================================================================

/// One card inside a content section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionItem {
    pub title: &'static str,
    pub body: &'static str,
}

/// Heading, lead paragraph and cards for a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionContent {
    pub section: Section,
    pub heading: &'static str,
    pub lead: &'static str,
    pub items: Vec<SectionItem>,
    /// Join the previous section without a visual seam.
    pub seamless: bool,
}

impl SectionContent {
    /// The copy for `section`.
    #[must_use]
    pub fn for_section(section: Section) -> Self {
        match section {
            Section::Intro => Self::new(section, "GREAN WORLD", "", Vec::new()),
            Section::Home => Self::new(
                section,
                "Clean power for every home and business",
                "Solar generation, storage and efficient appliances designed for Ethiopian conditions.",
                vec![
                    item("Solar", "Grid-tied and off-grid photovoltaic systems."),
                    item("Storage", "Battery banks that keep the lights on after sunset."),
                    item("Efficiency", "Appliances that do more with every kilowatt-hour."),
                ],
            ),
            Section::About => SectionContent {
                seamless: true,
                ..Self::new(
                    section,
                    "About GREAN WORLD",
                    "We build, install and maintain renewable energy systems across Ethiopia.",
                    vec![
                        item("Mission", "Accelerate the transition to sustainable energy."),
                        item("Reach", "Residential, commercial and community installations."),
                        item("Service", "Local engineers for design, installation and support."),
                    ],
                )
            },
            Section::Solutions => Self::new(
                section,
                "Solutions",
                "From a single rooftop to a village micro-grid.",
                vec![
                    item("Residential solar", "Rooftop kits sized to household demand."),
                    item("Commercial energy", "Hybrid systems that cut diesel and grid costs."),
                    item("Solar water pumping", "Irrigation and water supply without fuel."),
                    item("Mini-grids", "Community power for off-grid settlements."),
                ],
            ),
            Section::Products => Self::new(
                section,
                "Products",
                "Certified components with local warranty support.",
                vec![
                    item("Solar panels", "Monocrystalline modules for high yield."),
                    item("Inverters", "Hybrid inverters with remote monitoring."),
                    item("Lithium batteries", "Long-life storage with integrated BMS."),
                    item("Solar lighting", "Street and home lighting with built-in storage."),
                ],
            ),
            Section::Contact => Self::new(
                section,
                "Contact us",
                "Talk to an engineer about your site.",
                vec![
                    item("Phone", "(+251) 913 330000"),
                    item("Office", "Addis Ababa, Ethiopia"),
                ],
            ),
            Section::Footer => Self::new(
                section,
                "GREAN WORLD",
                "Empowering Ethiopia's energy transition with sustainable solutions.",
                Vec::new(),
            ),
        }
    }

    fn new(
        section: Section,
        heading: &'static str,
        lead: &'static str,
        items: Vec<SectionItem>,
    ) -> Self {
        Self {
            section,
            heading,
            lead,
            items,
            seamless: false,
        }
    }
}

fn item(title: &'static str, body: &'static str) -> SectionItem {
    SectionItem { title, body }
}
