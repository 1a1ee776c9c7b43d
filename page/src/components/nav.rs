use leptos::prelude::*;

use super::ActionButton;
use crate::navigation::SharedNavigator;
use crate::tree::NavBar;

#[component]
pub fn Navigation(navbar: NavBar, navigator: SharedNavigator) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="logo">{navbar.brand}</div>
            <ul class="nav-links">
                {navbar.items.into_iter().map(|item| {
                    view! { <li class=item.active.then_some("active")>{item.label}</li> }
                }).collect::<Vec<_>>()}
            </ul>
            <ActionButton button=navbar.login navigator=navigator />
        </nav>
    }
}
