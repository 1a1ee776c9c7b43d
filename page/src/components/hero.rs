use leptos::prelude::*;

use super::ActionButton;
use crate::navigation::SharedNavigator;
use crate::tree::HeroBlock;
use crate::types::AnimationRef;

/// Script that registers the `<lottie-player>` element.
pub const ANIMATION_PLAYER_JS: &str =
    "https://unpkg.com/@lottiefiles/lottie-player@2.0.8/dist/lottie-player.js";

#[component]
pub fn Hero(hero: HeroBlock, navigator: SharedNavigator) -> impl IntoView {
    view! {
        <div class="hero-content">
            <div class="hero-text">
                <h1>
                    {hero.heading}
                    <br />
                    <span>{hero.heading_accent}</span>
                </h1>
                <h3>{hero.subheading}</h3>
                <p>{hero.paragraph}</p>
                <ActionButton button=hero.cta navigator=navigator />
            </div>

            <div class="hero-image">
                <Animation animation=hero.animation />
            </div>
        </div>
    }
}

/// Embedded vector animation.
///
/// Playback is owned by the `lottie-player` element; the page only hands it the
/// data source and size.
#[component]
pub fn Animation(animation: AnimationRef) -> impl IntoView {
    let style = format!(
        "width: {}px; height: {}px;",
        animation.width, animation.height
    );
    // Boolean attributes on the custom element: presence means on.
    let looping = animation.looping.then_some("");

    view! {
        <lottie-player
            class="hero-animation"
            src=animation.src
            background="transparent"
            speed="1"
            style=style
            loop=looping
            autoplay=""
        ></lottie-player>
    }
}
