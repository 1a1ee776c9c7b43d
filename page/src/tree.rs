//! The render contract: what a landing page render produces.
//!
//! [`render`] turns [`PageContent`] plus the current year into a [`PageTree`].
//! The tree is plain data, so its structure can be asserted without a DOM and
//! the Leptos components only have to lay it out.
//!
//! ```rust
//! use eduease_page::{render, FixedYear, PageContent, SectionKind};
//!
//! let tree = render(&PageContent::default(), &FixedYear(2030));
//! assert_eq!(tree.navbar.items.len(), 4);
//! assert_eq!(tree.sections().first(), Some(&SectionKind::Navbar));
//! ```

use serde::Serialize;

use crate::clock::YearProvider;
use crate::navigation::Control;
use crate::types::{
    AnimationRef, ContactDetail, FeatureDescriptor, ImageRef, Link, LinkColumn, PageContent,
    SocialLink,
};

/// Top-level blocks of the page, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Navbar,
    Hero,
    Features,
    WhyChooseUs,
    Footer,
}

/// A navbar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: String,
    pub active: bool,
}

/// A button bound to a [`Control`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ControlButton {
    pub control: Control,
    pub label: String,
}

/// Navigation bar: brand, four items (first active) and the login action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavBar {
    pub brand: String,
    pub items: Vec<NavItem>,
    pub login: ControlButton,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeroBlock {
    pub heading: String,
    pub heading_accent: String,
    pub subheading: String,
    pub paragraph: String,
    pub cta: ControlButton,
    pub animation: AnimationRef,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureSection {
    pub heading: String,
    pub tiles: Vec<FeatureDescriptor>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WhySection {
    pub image: ImageRef,
    pub heading: String,
    pub paragraph: String,
    pub benefits: Vec<String>,
    pub cta: ControlButton,
}

/// Copyright line, stamped with the render-time year.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Copyright {
    pub year: i32,
    pub holder: String,
}

impl Copyright {
    /// Display text, e.g. `© 2026 EduEase. All rights reserved.`
    pub fn text(&self) -> String {
        format!("© {} {}. All rights reserved.", self.year, self.holder)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterBlock {
    pub brand: String,
    pub blurb: String,
    pub socials: Vec<SocialLink>,
    pub columns: Vec<LinkColumn>,
    pub contact_heading: String,
    pub contact: Vec<ContactDetail>,
    pub legal_links: Vec<Link>,
    pub copyright: Copyright,
}

/// Result of one render pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageTree {
    pub navbar: NavBar,
    pub hero: HeroBlock,
    pub features: FeatureSection,
    pub why_choose_us: WhySection,
    pub footer: Option<FooterBlock>,
}

impl PageTree {
    /// Blocks present in this tree, in display order.
    pub fn sections(&self) -> Vec<SectionKind> {
        let mut sections = vec![
            SectionKind::Navbar,
            SectionKind::Hero,
            SectionKind::Features,
            SectionKind::WhyChooseUs,
        ];
        if self.footer.is_some() {
            sections.push(SectionKind::Footer);
        }
        sections
    }

    /// Every button on the page, in display order.
    pub fn controls(&self) -> Vec<&ControlButton> {
        vec![&self.navbar.login, &self.hero.cta, &self.why_choose_us.cta]
    }
}

/// Render the page.
///
/// Pure apart from asking `clock` for the year: the same content and year
/// always give an equal tree.
///
/// Expects content that passes [`PageContent::validate`] (six features, four
/// nav items); loaders validate, code that builds `PageContent` by hand must too.
pub fn render(content: &PageContent, clock: &dyn YearProvider) -> PageTree {
    debug_assert!(
        content.validate().is_ok(),
        "render called with invalid content: {:?}",
        content.validate().err()
    );

    let navbar = NavBar {
        brand: content.brand.clone(),
        items: content
            .nav
            .items
            .iter()
            .enumerate()
            .map(|(idx, label)| NavItem {
                label: label.clone(),
                active: idx == 0,
            })
            .collect(),
        login: ControlButton {
            control: Control::Login,
            label: content.nav.login_label.clone(),
        },
    };

    let hero = HeroBlock {
        heading: content.hero.heading.clone(),
        heading_accent: content.hero.heading_accent.clone(),
        subheading: content.hero.subheading.clone(),
        paragraph: content.hero.paragraph.clone(),
        cta: ControlButton {
            control: Control::GetStarted,
            label: content.hero.cta_label.clone(),
        },
        animation: content.hero.animation.clone(),
    };

    let features = FeatureSection {
        heading: content.features.heading.clone(),
        tiles: content.features.items.clone(),
    };

    let why_choose_us = WhySection {
        image: content.why.image.clone(),
        heading: content.why.heading.clone(),
        paragraph: content.why.paragraph.clone(),
        benefits: content.why.benefits.clone(),
        cta: ControlButton {
            control: Control::LearnMore,
            label: content.why.cta_label.clone(),
        },
    };

    let footer = content.footer.as_ref().map(|footer| FooterBlock {
        brand: content.brand.clone(),
        blurb: footer.blurb.clone(),
        socials: footer.socials.clone(),
        columns: footer.columns.clone(),
        contact_heading: footer.contact_heading.clone(),
        contact: footer.contact.clone(),
        legal_links: footer.legal_links.clone(),
        copyright: Copyright {
            year: clock.current_year(),
            holder: footer.copyright_holder.clone(),
        },
    });

    tracing::trace!(
        "Rendered page tree: {} nav items, {} features, footer={}",
        navbar.items.len(),
        features.tiles.len(),
        footer.is_some()
    );

    PageTree {
        navbar,
        hero,
        features,
        why_choose_us,
        footer,
    }
}

/// Render the built-in EduEase content.
pub fn render_default(clock: &dyn YearProvider) -> PageTree {
    render(&PageContent::default(), clock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedYear;
    use crate::navigation::{LOGIN_TARGET, RecordingNavigator};
    use pretty_assertions::assert_eq;

    #[test]
    fn navbar_has_four_items_first_active() {
        let tree = render_default(&FixedYear(2026));
        let labels: Vec<_> = tree.navbar.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["Home", "Features", "AboutUs", "Contact"]);

        let active: Vec<_> = tree.navbar.items.iter().map(|i| i.active).collect();
        assert_eq!(active, [true, false, false, false]);
        assert_eq!(tree.navbar.brand, "EduEase");
        assert_eq!(tree.navbar.login.control, Control::Login);
    }

    #[test]
    fn feature_tiles_match_descriptors() {
        let content = PageContent::default();
        let tree = render(&content, &FixedYear(2026));

        assert_eq!(tree.features.tiles.len(), 6);
        assert_eq!(tree.features.tiles, content.features.items);
        assert_eq!(tree.features.tiles[0].title, "Lesson Plan Generation");
        assert!(
            tree.features.tiles[0]
                .description
                .starts_with("Create structured, AI-generated lesson plans")
        );
    }

    #[test]
    fn copyright_uses_injected_year() {
        for year in [1999, 2026, 2100] {
            let tree = render_default(&FixedYear(year));
            let copyright = tree.footer.expect("default has footer").copyright;
            assert_eq!(copyright.year, year);
            assert_eq!(
                copyright.text(),
                format!("© {} EduEase. All rights reserved.", year)
            );
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let content = PageContent::default();
        let clock = FixedYear(2026);
        assert_eq!(render(&content, &clock), render(&content, &clock));
    }

    #[test]
    fn sections_follow_page_order() {
        let tree = render_default(&FixedYear(2026));
        assert_eq!(
            tree.sections(),
            [
                SectionKind::Navbar,
                SectionKind::Hero,
                SectionKind::Features,
                SectionKind::WhyChooseUs,
                SectionKind::Footer,
            ]
        );
    }

    #[test]
    fn footer_is_optional() {
        let mut content = PageContent::default();
        content.footer = None;
        let tree = render(&content, &FixedYear(2026));

        assert!(tree.footer.is_none());
        assert_eq!(tree.sections().last(), Some(&SectionKind::WhyChooseUs));
    }

    #[test]
    fn only_login_control_navigates() {
        let tree = render_default(&FixedYear(2026));
        let navigator = RecordingNavigator::new();

        for button in tree.controls() {
            button.control.activate(&navigator);
        }

        assert_eq!(navigator.visited(), vec![LOGIN_TARGET.to_string()]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "render called with invalid content")]
    fn rejects_unvalidated_feature_count() {
        let mut content = PageContent::default();
        content.features.items.pop();
        render(&content, &FixedYear(2026));
    }

    #[test]
    fn hero_embeds_looping_animation() {
        let tree = render_default(&FixedYear(2026));
        assert_eq!(tree.hero.cta.label, "Get Started");
        assert!(tree.hero.animation.looping);
        assert_eq!(tree.hero.animation.src, "assets/student.json");
        assert_eq!(tree.why_choose_us.cta.label, "Learn More");
        assert_eq!(tree.why_choose_us.benefits.len(), 6);
    }
}
