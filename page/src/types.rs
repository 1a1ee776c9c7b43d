//! Page content types.
//!
//! These types define everything the landing page displays. They're designed to be:
//!
//! - **Serializable** - loadable from TOML or JSON content files via serde
//! - **Clone-friendly** - the render pass copies them into the [`crate::tree::PageTree`]
//! - **Default-able** - [`PageContent::default`] is the shipped EduEase page
//!
//! # Example
//!
//! ```rust
//! use eduease_page::types::{FeatureDescriptor, IconRef, PageContent};
//!
//! let mut content = PageContent::default();
//! content.features.items[0] = FeatureDescriptor {
//!     icon: IconRef::Robot,
//!     title: "Auto Grading".into(),
//!     description: "Quizzes graded the moment they are submitted.".into(),
//! };
//! assert!(content.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

/// Symbolic reference to a glyph.
///
/// Opaque to page logic; the icon font resolves it to a drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconRef {
    /// Teacher at a board (lesson plans)
    ChalkboardTeacher,
    /// Clipboard with lines (summaries)
    ClipboardList,
    /// Graduate student (analysis)
    UserGraduate,
    /// Group of people (collaboration)
    Users,
    /// Calendar with a tick (scheduling)
    CalendarCheck,
    /// Robot head (tutoring)
    Robot,
    /// Facebook logo
    Facebook,
    /// Twitter logo
    Twitter,
    /// Instagram logo
    Instagram,
    /// LinkedIn logo
    Linkedin,
    /// Map pin (postal address)
    MapMarker,
    /// Phone handset
    Phone,
    /// Envelope (email)
    Envelope,
}

impl IconRef {
    /// Phosphor icon-font name for this glyph.
    pub fn font_name(self) -> &'static str {
        match self {
            IconRef::ChalkboardTeacher => "chalkboard-teacher",
            IconRef::ClipboardList => "clipboard-text",
            IconRef::UserGraduate => "student",
            IconRef::Users => "users-three",
            IconRef::CalendarCheck => "calendar-check",
            IconRef::Robot => "robot",
            IconRef::Facebook => "facebook-logo",
            IconRef::Twitter => "twitter-logo",
            IconRef::Instagram => "instagram-logo",
            IconRef::Linkedin => "linkedin-logo",
            IconRef::MapMarker => "map-pin",
            IconRef::Phone => "phone",
            IconRef::Envelope => "envelope",
        }
    }
}

/// One tile in the feature grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    /// Glyph shown above the title
    pub icon: IconRef,
    /// Short display title (non-empty)
    pub title: String,
    /// Longer display text (non-empty)
    pub description: String,
}

impl FeatureDescriptor {
    fn new(icon: IconRef, title: &str, description: &str) -> Self {
        Self {
            icon,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Navigation bar content.
///
/// The first item is always the active one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavContent {
    /// Item labels in display order
    pub items: Vec<String>,
    /// Label of the login control
    pub login_label: String,
}

/// Looping illustration embedded in the hero block.
///
/// `src` points at an animation data asset that is handed to the player untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationRef {
    /// Path or URL of the animation data
    pub src: String,
    /// Width in CSS pixels
    pub width: u32,
    /// Height in CSS pixels
    pub height: u32,
    /// Restart playback when it ends
    #[serde(default = "default_true")]
    pub looping: bool,
}

fn default_true() -> bool {
    true
}

/// Hero block content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    /// First line of the headline
    pub heading: String,
    /// Highlighted tail of the headline, on its own line
    pub heading_accent: String,
    pub subheading: String,
    pub paragraph: String,
    /// Label of the primary call-to-action
    pub cta_label: String,
    pub animation: AnimationRef,
}

/// A static image reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

/// "Why choose us" panel content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhyContent {
    pub image: ImageRef,
    pub heading: String,
    pub paragraph: String,
    /// Benefit statements in display order
    pub benefits: Vec<String>,
    /// Label of the secondary call-to-action
    pub cta_label: String,
}

/// A plain hyperlink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    #[serde(default = "default_href")]
    pub href: String,
}

fn default_href() -> String {
    "#".into()
}

impl Link {
    /// A link that points nowhere yet (`#`).
    pub fn placeholder(label: &str) -> Self {
        Self {
            label: label.into(),
            href: default_href(),
        }
    }
}

/// An icon-only link to a social profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: IconRef,
    /// Accessible name (`aria-label`)
    pub label: String,
    #[serde(default = "default_href")]
    pub href: String,
}

/// A titled column of links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkColumn {
    pub heading: String,
    pub links: Vec<Link>,
}

/// One line of contact information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetail {
    pub icon: IconRef,
    pub text: String,
}

/// Footer content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    /// Short description under the brand name
    pub blurb: String,
    pub socials: Vec<SocialLink>,
    pub columns: Vec<LinkColumn>,
    pub contact_heading: String,
    pub contact: Vec<ContactDetail>,
    pub legal_links: Vec<Link>,
    /// Name printed in the copyright line
    pub copyright_holder: String,
}

/// Feature section content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturesContent {
    pub heading: String,
    /// Tiles in declaration order
    pub items: Vec<FeatureDescriptor>,
}

/// Everything the landing page displays.
///
/// Loaded once (built-in default or a content file) and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// Brand label shown in the navbar and footer
    pub brand: String,
    pub nav: NavContent,
    pub hero: HeroContent,
    pub features: FeaturesContent,
    pub why: WhyContent,
    /// Optional footer; the page renders without one
    #[serde(default)]
    pub footer: Option<FooterContent>,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            brand: "EduEase".into(),
            nav: NavContent {
                items: ["Home", "Features", "AboutUs", "Contact"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                login_label: "Login".into(),
            },
            hero: HeroContent {
                heading: "Simplifying Education for".into(),
                heading_accent: "All".into(),
                subheading: "Your Smart Assignment & Quiz Platform".into(),
                paragraph: "EduEase makes learning interactive and grading effortless. \
                    Teachers can create quizzes, students can submit instantly, \
                    and AI handles the evaluation with personalized feedback."
                    .into(),
                cta_label: "Get Started".into(),
                animation: AnimationRef {
                    src: "assets/student.json".into(),
                    width: 450,
                    height: 550,
                    looping: true,
                },
            },
            features: FeaturesContent {
                heading: "Our Features".into(),
                items: default_features(),
            },
            why: WhyContent {
                image: ImageRef {
                    src: "https://images.pexels.com/photos/4491461/pexels-photo-4491461.jpeg"
                        .into(),
                    alt: "Teacher explaining".into(),
                },
                heading: "Why Choose Us".into(),
                paragraph: "Our platform is designed by educators for educators, combining \
                    cutting-edge technology with pedagogical expertise to transform \
                    the learning experience."
                    .into(),
                benefits: [
                    "AI-powered personalized learning paths",
                    "Real-time performance analytics",
                    "Intuitive interface for all age groups",
                    "Secure and privacy-focused",
                    "Continuous platform improvements",
                    "24/7 dedicated support",
                ]
                .into_iter()
                .map(String::from)
                .collect(),
                cta_label: "Learn More".into(),
            },
            footer: Some(default_footer()),
        }
    }
}

/// The six shipped feature tiles.
pub fn default_features() -> Vec<FeatureDescriptor> {
    vec![
        FeatureDescriptor::new(
            IconRef::ChalkboardTeacher,
            "Lesson Plan Generation",
            "Create structured, AI-generated lesson plans tailored to your teaching goals.",
        ),
        FeatureDescriptor::new(
            IconRef::ClipboardList,
            "Lesson Summaries",
            "Automatically generate concise summaries for quick student revision.",
        ),
        FeatureDescriptor::new(
            IconRef::UserGraduate,
            "Personalised Analysis",
            "Track each student's performance with in-depth, AI-powered analytics.",
        ),
        FeatureDescriptor::new(
            IconRef::Users,
            "Collaborative Learning",
            "Encourage peer-to-peer engagement with group activities and shared resources.",
        ),
        FeatureDescriptor::new(
            IconRef::CalendarCheck,
            "Smart Scheduling",
            "Organize classes, assignments, and deadlines with AI-powered reminders.",
        ),
        FeatureDescriptor::new(
            IconRef::Robot,
            "AI Tutoring",
            "Offer students instant, AI-driven assistance for homework and queries.",
        ),
    ]
}

fn default_footer() -> FooterContent {
    let social = |icon, label: &str| SocialLink {
        icon,
        label: label.into(),
        href: default_href(),
    };
    let column = |heading: &str, labels: &[&str]| LinkColumn {
        heading: heading.into(),
        links: labels.iter().map(|label| Link::placeholder(label)).collect(),
    };

    FooterContent {
        blurb: "Transforming education through innovative technology solutions that make \
            learning accessible, engaging, and effective for everyone."
            .into(),
        socials: vec![
            social(IconRef::Facebook, "Facebook"),
            social(IconRef::Twitter, "Twitter"),
            social(IconRef::Instagram, "Instagram"),
            social(IconRef::Linkedin, "LinkedIn"),
        ],
        columns: vec![
            column(
                "Quick Links",
                &["Home", "Features", "Pricing", "About Us", "Contact"],
            ),
            column(
                "Resources",
                &["Blog", "Help Center", "Tutorials", "Webinars", "API Docs"],
            ),
        ],
        contact_heading: "Contact Us".into(),
        contact: vec![
            ContactDetail {
                icon: IconRef::MapMarker,
                text: "123 Education St, Tech City".into(),
            },
            ContactDetail {
                icon: IconRef::Phone,
                text: "+1 (555) 123-4567".into(),
            },
            ContactDetail {
                icon: IconRef::Envelope,
                text: "info@eduease.com".into(),
            },
        ],
        legal_links: vec![
            Link::placeholder("Privacy Policy"),
            Link::placeholder("Terms of Service"),
            Link::placeholder("Cookie Policy"),
        ],
        copyright_holder: "EduEase".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_refs_use_kebab_case() {
        let json = serde_json::to_string(&IconRef::ChalkboardTeacher).expect("serialize");
        assert_eq!(json, "\"chalkboard-teacher\"");

        let icon: IconRef = serde_json::from_str("\"map-marker\"").expect("deserialize");
        assert_eq!(icon, IconRef::MapMarker);
    }

    #[test]
    fn default_features_keep_declaration_order() {
        let titles: Vec<_> = default_features().into_iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            [
                "Lesson Plan Generation",
                "Lesson Summaries",
                "Personalised Analysis",
                "Collaborative Learning",
                "Smart Scheduling",
                "AI Tutoring",
            ]
        );
    }

    #[test]
    fn links_default_to_placeholder_href() {
        let link: Link = serde_json::from_str(r#"{"label":"Blog"}"#).expect("deserialize");
        assert_eq!(link, Link::placeholder("Blog"));
    }

    #[test]
    fn animation_loops_unless_disabled() {
        let anim: AnimationRef =
            toml::from_str("src = \"a.json\"\nwidth = 10\nheight = 20").expect("parse");
        assert!(anim.looping);
    }
}
