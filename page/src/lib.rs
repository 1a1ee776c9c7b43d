//! # eduease-page
//!
//! The EduEase landing page: navigation bar, hero with an animated
//! illustration, a six-tile feature grid, a "why choose us" panel and a footer.
//!
//! The page is split into a plain-data render contract and the Leptos
//! components that lay it out:
//!
//! - [`types`] - page content ([`PageContent`], [`FeatureDescriptor`]), loadable from TOML/JSON
//! - [`tree`] - [`render`]: content + current year → [`PageTree`]
//! - [`navigation`] - controls and the login redirect ([`on_login_click`])
//! - [`clock`] - injected year source for the copyright line
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Quick Start
//!
//! ```rust
//! use eduease_page::{render_page, FixedYear, PageContent};
//!
//! let html = render_page(&PageContent::default(), &FixedYear(2026));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Lesson Plan Generation"));
//! ```
//!
//! ## Features
//!
//! - `ssr` (default) - static HTML via Leptos 0.8's `RenderHtml::to_html`
//! - `cli` (default) - the `eduease-render` binary
//! - `csr` - browser mounting, used by the `landing/` crate
//!
//! Only the login button does anything when clicked: it hands
//! [`LOGIN_TARGET`] to the injected [`Navigator`].

#![warn(rustdoc::missing_crate_level_docs)]

pub mod clock;
pub mod components;
pub mod config;
pub mod navigation;
pub mod styles;
pub mod tree;
pub mod types;

pub use clock::{FixedYear, SystemClock, YearProvider};
pub use config::{ContentError, FEATURE_COUNT, NAV_ITEM_COUNT};
pub use navigation::{
    Control, LOGIN_TARGET, Navigator, RecordingNavigator, SharedNavigator, on_login_click,
};
pub use tree::{PageTree, SectionKind, render, render_default};
pub use types::{FeatureDescriptor, IconRef, PageContent};

#[cfg(feature = "ssr")]
use std::sync::Arc;

#[cfg(feature = "ssr")]
use components::LandingDocument;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the landing page as a complete HTML document.
///
/// Click handlers are not part of static HTML, so the document is rendered
/// with a [`RecordingNavigator`] that never leaves the page.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
#[cfg(feature = "ssr")]
pub fn render_page(content: &PageContent, clock: &dyn YearProvider) -> String {
    render_tree(render(content, clock))
}

/// Render an already computed [`PageTree`] as a complete HTML document.
#[cfg(feature = "ssr")]
pub fn render_tree(tree: PageTree) -> String {
    let navigator: SharedNavigator = Arc::new(RecordingNavigator::new());
    let doc = view! { <LandingDocument tree=tree navigator=navigator /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in rendered page"))
    }

    #[test]
    fn renders_default_page() {
        let html = render_page(&PageContent::default(), &FixedYear(2026));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("EduEase"));
        assert!(html.contains("Our Features"));
        assert!(html.contains("lottie-player"));
        assert!(html.contains("assets/student.json"));
    }

    #[test]
    fn renders_sections_in_order() {
        let html = render_page(&PageContent::default(), &FixedYear(2026));

        let navbar = position(&html, "class=\"navbar\"");
        let hero = position(&html, "class=\"hero-content\"");
        let features = position(&html, "class=\"features-section\"");
        let why = position(&html, "class=\"why-choose-us\"");
        let footer = position(&html, "class=\"footer\"");

        assert!(navbar < hero);
        assert!(hero < features);
        assert!(features < why);
        assert!(why < footer);
    }

    #[test]
    fn renders_six_feature_cards_in_order() {
        let content = PageContent::default();
        let html = render_page(&content, &FixedYear(2026));

        assert_eq!(html.matches("class=\"feature-card\"").count(), 6);

        let mut last = 0;
        for feature in &content.features.items {
            let at = position(&html, &feature.title);
            assert!(at > last, "{} rendered out of order", feature.title);
            last = at;
        }
    }

    #[test]
    fn marks_first_nav_item_active() {
        let html = render_page(&PageContent::default(), &FixedYear(2026));

        assert_eq!(html.matches("<li class=\"active\"").count(), 1);
        let active = position(&html, "<li class=\"active\"");
        let end = active + position(&html[active..], "</li>");
        assert!(html[active..end].contains("Home"));

        // Inactive items carry no class attribute at all.
        assert!(!html.contains("class=\"\""));
        for label in ["Features", "AboutUs", "Contact"] {
            assert!(html.contains(&format!("<li>{label}</li>")), "bare <li> for {label}");
        }
    }

    #[test]
    fn renders_copyright_year() {
        let html = render_page(&PageContent::default(), &FixedYear(2042));
        assert!(html.contains("© 2042 EduEase. All rights reserved."));
    }

    #[test]
    fn omits_footer_when_absent() {
        let mut content = PageContent::default();
        content.footer = None;
        let html = render_page(&content, &FixedYear(2026));

        assert!(!html.contains("class=\"footer\""));
        assert!(!html.contains("All rights reserved"));
    }

    #[test]
    fn renders_controls_as_buttons() {
        let html = render_page(&PageContent::default(), &FixedYear(2026));

        assert!(html.contains("class=\"login-btn\""));
        assert!(html.contains("class=\"get-started\""));
        assert!(html.contains("class=\"learn-more-btn\""));
        assert!(html.contains("ph ph-chalkboard-teacher"));
    }
}
