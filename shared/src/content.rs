//! Literal copy for the static sections of the page.

pub const LOGO: &str = "ECE";
pub const DEPARTMENT_NAME: &str = "Electronics and Computer Engineering";

pub const NAV_ITEMS: [&str; 5] = ["ABOUT", "ACADEMICS", "RESEARCH", "FACULTY", "CONTACT"];
pub const LOGIN_LABEL: &str = "LOGIN";

pub const ABOUT_TITLE: &str = "About Us";
pub const ABOUT_IMAGE: &str = "/about-illustration.svg";
pub const ABOUT_IMAGE_ALT: &str = "About Us Illustration";
pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "We are a passionate team of innovators dedicated to pushing the boundaries of Electronics & Computer Engineering. Our goal is to create impactful solutions that bridge technology and real-world challenges.",
    "With a strong focus on innovation, research, and collaboration, we strive to equip students and professionals with the skills they need to excel in the tech-driven world.",
];
pub const ABOUT_BUTTON: &str = "Know More";

pub const WELCOME_TITLE: &str = "Welcome to Electronics and Computer Engineering";
pub const WELCOME_TEXT: &str = "In the ever-evolving landscape of technology, the discipline of Electronics and Computer Engineering (ECE) stands as one of the pillars of innovation, shaping the evolving world as we know it.";

pub const ACHIEVEMENTS_TITLE: &str = "Achievements";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureTile {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const FEATURES: [FeatureTile; 3] = [
    FeatureTile {
        icon: "🎓",
        title: "Academic Excellence",
        text: "Comprehensive curriculum designed to meet industry demands.",
    },
    FeatureTile {
        icon: "🔬",
        title: "Research Focus",
        text: "Cutting-edge research in AI, ML, and Embedded Systems.",
    },
    FeatureTile {
        icon: "🌐",
        title: "Industry Connect",
        text: "Strong industry partnerships ensuring real-world exposure.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTile {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [StatTile; 3] = [
    StatTile { value: "60+", label: "Students per Batch" },
    StatTile { value: "100%", label: "Placement Rate" },
    StatTile { value: "20+", label: "Research Papers" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    LinkedIn,
    Twitter,
    Facebook,
    Instagram,
}

impl SocialKind {
    pub fn label(&self) -> &'static str {
        match self {
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::Twitter => "Twitter",
            SocialKind::Facebook => "Facebook",
            SocialKind::Instagram => "Instagram",
        }
    }
}

pub const SOCIAL_LINKS: [SocialKind; 4] = [
    SocialKind::LinkedIn,
    SocialKind::Twitter,
    SocialKind::Facebook,
    SocialKind::Instagram,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Location,
    Email,
    Phone,
    Map,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub lines: &'static [&'static str],
    /// Rendered as a link when set.
    pub href: Option<&'static str>,
}

pub const CONTACT_TITLE: &str = "Contact Information";

pub const CONTACTS: [ContactItem; 4] = [
    ContactItem {
        kind: ContactKind::Location,
        lines: &[
            "A3 4th Floor, PICT, Survey No. 27, Near Trimurti Chowk,",
            "Bharati Vidyapeeth Campus, Dhankawadi,",
            "Pune, Maharashtra 411043",
        ],
        href: None,
    },
    ContactItem {
        kind: ContactKind::Email,
        lines: &["registrar@pict.edu"],
        href: None,
    },
    ContactItem {
        kind: ContactKind::Phone,
        lines: &["+91 20 2437 1101"],
        href: None,
    },
    ContactItem {
        kind: ContactKind::Map,
        lines: &["View on Google Maps"],
        href: Some("#"),
    },
];

pub const FOOTER_MARK: &str = "Ed";
pub const FOOTER_TAGLINE: &str = "Excellence in Engineering Education Since 1983";
pub const QUICK_LINKS_TITLE: &str = "Quick Links";
pub const QUICK_LINKS: [[&str; 4]; 2] = [
    ["About PICT", "Admissions", "Academics", "Research"],
    ["Facilities", "Event Spaces", "Privacy Policy", "Careers"],
];
pub const COPYRIGHT: &str = "© 2025 Pune Institute of Computer Technology. All Rights Reserved.";
pub const FOOTER_LINKS: [&str; 3] = ["Terms of Use", "Privacy Policy", "Sitemap"];

/// Every nav, social and footer link points here; none of them go anywhere yet.
pub const PLACEHOLDER_HREF: &str = "#";
