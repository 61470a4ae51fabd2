//! Static marketing copy.
//!
//! Everything the presentational sections render lives here as `'static`
//! data so the components stay thin and the copy can be checked in tests.

/// Product name shown in the header.
pub const BRAND: &str = "Marine AI";

/// Default address for the contact call-to-action.
pub const CONTACT_EMAIL: &str = "contact@marineai.com";

/// Footer line.
pub const COPYRIGHT: &str = "© 2025 Marine Surveillance AI. All rights reserved.";

/// One card in the problem or feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    /// Emoji glyph shown above the title
    pub emoji: &'static str,
    /// Card heading
    pub title: &'static str,
    /// One-sentence body
    pub description: &'static str,
}

/// One numbered step of the "How It Works" list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Bold lead-in, e.g. "Analyze Data"
    pub label: &'static str,
    /// Rest of the sentence
    pub text: &'static str,
}

/// Heading plus subheading used by most sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionCopy {
    /// Section heading
    pub title: &'static str,
    /// Line under the heading
    pub subtitle: &'static str,
}

/// Hero banner headline and pitch.
pub const HERO: SectionCopy = SectionCopy {
    title: "Instant Eyes on the Entire Ocean",
    subtitle: "Our AI-powered platform analyzes satellite data in real-time to detect illegal fishing, \
               oil spills, and reef degradation, enabling authorities to protect our most vital resource.",
};

/// Label of the hero call-to-action.
pub const HERO_CTA: &str = "See a Live Demo";

/// Problem section heading.
pub const PROBLEM: SectionCopy = SectionCopy {
    title: "Our Oceans Are in Crisis",
    subtitle: "Current monitoring methods are too slow and expensive to be effective.",
};

/// Problem statement cards.
pub const PROBLEMS: [Highlight; 3] = [
    Highlight {
        emoji: "🐟",
        title: "Illegal Fishing",
        description: "Depletes vital fish stocks, threatening food security and local economies worth billions annually.",
    },
    Highlight {
        emoji: "🛢️",
        title: "Environmental Disasters",
        description: "Oil spills and coral reef degradation cause irreversible damage, often going unnoticed for critical periods.",
    },
    Highlight {
        emoji: "✈️",
        title: "Ineffective Patrols",
        description: "Traditional sea and air patrols are slow, costly, and can only cover a tiny fraction of our vast oceans.",
    },
];

/// Solution section heading and pitch.
pub const SOLUTION: SectionCopy = SectionCopy {
    title: "Real-Time AI Surveillance",
    subtitle: "We have developed an AI platform that acts as a 24/7 watchdog for our oceans. \
               Our system analyzes satellite imagery (both Optical and Radar) in real-time to \
               automatically detect anomalies and instantly send alerts with precise location data to authorities.",
};

/// "How It Works" steps, in order.
pub const SOLUTION_STEPS: [Step; 3] = [
    Step {
        label: "Analyze Data:",
        text: "Our AI continuously ingests live feeds from satellite providers.",
    },
    Step {
        label: "Detect Threats:",
        text: "It identifies illegal vessels, oil slicks, and changes in reef health with high accuracy.",
    },
    Step {
        label: "Alert Authorities:",
        text: "A verified alert with coordinates and evidence is sent directly to the response team in minutes.",
    },
];

/// Live demo heading.
pub const DEMO: SectionCopy = SectionCopy {
    title: "Live Demo: AI Agent in Action",
    subtitle: "Select a threat to simulate its detection by our AI agent.",
};

/// Feature grid heading.
pub const FEATURES_COPY: SectionCopy = SectionCopy {
    title: "Key Features & Technology",
    subtitle: "Powered by cutting-edge technology for unparalleled performance.",
};

/// Feature grid cards.
pub const FEATURES: [Highlight; 4] = [
    Highlight {
        emoji: "🛰️",
        title: "Multi-Source Data",
        description: "Integrates both Optical and Synthetic Aperture Radar (SAR) data for all-weather, day-and-night monitoring.",
    },
    Highlight {
        emoji: "🧠",
        title: "Proprietary AI Models",
        description: "Our models are trained on vast, diverse datasets, leading to industry-leading accuracy and fewer false positives.",
    },
    Highlight {
        emoji: "⚡",
        title: "Instant Alerts",
        description: "From detection to alert in minutes, providing actionable intelligence when it matters most.",
    },
    Highlight {
        emoji: "📈",
        title: "Scalable & Global",
        description: "Our cloud-based architecture allows for monitoring of any marine area on Earth, from small reserves to entire oceans.",
    },
];

/// Contact call-to-action heading and pitch.
pub const CONTACT: SectionCopy = SectionCopy {
    title: "Join Us in Protecting Our Oceans",
    subtitle: "We are seeking strategic partners, clients, and investors to accelerate our mission. \
               Contact us to learn more or request a personalized demo.",
};

/// `mailto:` link for the contact button.
pub fn mailto_href(address: &str) -> String {
    format!("mailto:{}", address.trim())
}
