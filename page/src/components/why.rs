use leptos::prelude::*;

use super::ActionButton;
use crate::navigation::SharedNavigator;
use crate::tree::WhySection;

/// "Why choose us" panel: image on one side, pitch and benefit list on the other.
#[component]
pub fn WhyChooseUs(why: WhySection, navigator: SharedNavigator) -> impl IntoView {
    view! {
        <section id="about" class="why-choose-us">
            <div class="why-container">
                <div class="why-image">
                    <img src=why.image.src alt=why.image.alt />
                </div>
                <div class="why-text">
                    <h2>{why.heading}</h2>
                    <p>{why.paragraph}</p>
                    <ul>
                        {why.benefits.into_iter().map(|benefit| {
                            view! {
                                <li>
                                    <span class="why-check">"✔"</span>
                                    " "
                                    {benefit}
                                </li>
                            }
                        }).collect::<Vec<_>>()}
                    </ul>
                    <ActionButton button=why.cta navigator=navigator />
                </div>
            </div>
        </section>
    }
}
