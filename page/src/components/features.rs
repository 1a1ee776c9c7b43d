use leptos::prelude::*;

use super::Icon;
use crate::tree::FeatureSection;
use crate::types::FeatureDescriptor;

#[component]
pub fn Features(features: FeatureSection) -> impl IntoView {
    view! {
        <section id="features" class="features-section">
            <h2 class="features-title">{features.heading}</h2>
            <div class="features-grid">
                {features.tiles.into_iter().map(|feature| {
                    view! { <FeatureCard feature=feature /> }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn FeatureCard(feature: FeatureDescriptor) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon">
                <Icon icon=feature.icon />
            </div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}
