// EduEase Landing Page: Leptos 0.8 CSR entry point

mod browser;

use std::sync::Arc;

use browser::{BrowserClock, WindowNavigator};
use eduease_page::components::LandingPage;
use eduease_page::styles::LANDING_CSS;
use eduease_page::{PageContent, SharedNavigator, render};
use leptos::prelude::*;

/// Content shipped with the bundle; edit this file to change page copy.
const CONTENT: &str = include_str!("../content/landing.toml");

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let content = browser::load_content(CONTENT);
    let tree = render(&content, &BrowserClock);
    let navigator: SharedNavigator = Arc::new(WindowNavigator);

    view! {
        <style>{LANDING_CSS}</style>
        <LandingPage tree=tree navigator=navigator />
    }
}
