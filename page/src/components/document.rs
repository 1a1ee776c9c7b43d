//! Root document component - the complete HTML page for static export.

use leptos::prelude::*;

use super::{ANIMATION_PLAYER_JS, ICON_FONT_CSS, LandingPage};
use crate::navigation::SharedNavigator;
use crate::styles::LANDING_CSS;
use crate::tree::PageTree;

/// The complete HTML document around [`LandingPage`].
#[component]
pub fn LandingDocument(tree: PageTree, navigator: SharedNavigator) -> impl IntoView {
    let title = format!("{} | {}", tree.navbar.brand, tree.hero.subheading);

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <link rel="stylesheet" href=ICON_FONT_CSS />
                <script src=ANIMATION_PLAYER_JS></script>
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <LandingPage tree=tree navigator=navigator />
            </body>
        </html>
    }
}
