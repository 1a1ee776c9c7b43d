//! Icon font glyphs.
//!
//! Glyphs come from the [Phosphor](https://phosphoricons.com/) web font; this
//! module only emits the class names the font stylesheet expects.

use leptos::prelude::*;

use crate::types::IconRef;

/// Stylesheet that provides the `ph` glyph classes.
pub const ICON_FONT_CSS: &str = "https://unpkg.com/@phosphor-icons/web@2.1.1/src/regular/style.css";

/// Renders a glyph from the icon font.
///
/// # Props
///
/// * `icon` - which glyph to show
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon icon=IconRef::Robot class="feature-glyph" /> }
/// ```
#[component]
pub fn Icon(
    /// Symbolic glyph reference
    icon: IconRef,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! { <i class=icon_class(icon, class) aria-hidden="true"></i> }
}

fn icon_class(icon: IconRef, extra: &str) -> String {
    if extra.is_empty() {
        format!("ph ph-{}", icon.font_name())
    } else {
        format!("ph ph-{} {}", icon.font_name(), extra)
    }
}
