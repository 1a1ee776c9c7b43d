//! Leptos UI components for the landing page.
//!
//! Each component takes its slice of a rendered [`crate::tree::PageTree`].
//! The same components mount in the browser (`csr`) and render to static
//! HTML (`ssr`).
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument (static export only)
//! └── LandingPage
//!     ├── Navigation
//!     │   └── ActionButton (Login)
//!     ├── Hero
//!     │   ├── ActionButton (Get Started)
//!     │   └── Animation
//!     ├── Features
//!     │   └── FeatureCard × 6
//!     ├── WhyChooseUs
//!     │   └── ActionButton (Learn More)
//!     └── Footer (optional)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use leptos::prelude::*;
//! use eduease_page::{components::LandingPage, render_default, RecordingNavigator, SystemClock};
//!
//! let tree = render_default(&SystemClock);
//! view! { <LandingPage tree=tree navigator=Arc::new(RecordingNavigator::new()) /> }
//! ```

mod button;
mod document;
mod features;
mod footer;
mod hero;
mod icons;
mod landing;
mod nav;
mod why;

pub use button::ActionButton;
pub use document::LandingDocument;
pub use features::{FeatureCard, Features};
pub use footer::Footer;
pub use hero::{ANIMATION_PLAYER_JS, Animation, Hero};
pub use icons::{ICON_FONT_CSS, Icon};
pub use landing::LandingPage;
pub use nav::Navigation;
pub use why::WhyChooseUs;
