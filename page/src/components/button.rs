//! Control buttons.

use leptos::prelude::*;

use crate::navigation::SharedNavigator;
use crate::tree::ControlButton;

/// A button wired to its [`crate::Control`] behavior.
///
/// Inert controls still get a click listener; activating them is a no-op.
#[component]
pub fn ActionButton(button: ControlButton, navigator: SharedNavigator) -> impl IntoView {
    let control = button.control;

    view! {
        <button
            type="button"
            class=control.css_class()
            on:click=move |_| control.activate(&*navigator)
        >
            {button.label}
        </button>
    }
}
