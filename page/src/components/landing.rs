//! The whole page body.

use leptos::prelude::*;

use super::{Features, Footer, Hero, Navigation, WhyChooseUs};
use crate::navigation::SharedNavigator;
use crate::tree::PageTree;

/// Lays out a rendered [`PageTree`]: navbar, hero, features, why-choose-us, footer.
///
/// `navigator` receives the login redirect; pass a recording navigator to
/// render without a browser.
#[component]
pub fn LandingPage(tree: PageTree, navigator: SharedNavigator) -> impl IntoView {
    view! {
        <div class="hero-container">
            <Navigation navbar=tree.navbar navigator=navigator.clone() />
            <Hero hero=tree.hero navigator=navigator.clone() />
            <Features features=tree.features />
            <WhyChooseUs why=tree.why_choose_us navigator=navigator />
            {tree.footer.map(|footer| view! { <Footer footer=footer /> })}
        </div>
    }
}
