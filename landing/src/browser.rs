// Browser-backed capabilities for the page: navigation, calendar year, content.

use eduease_page::{Navigator, PageContent, YearProvider};

/// Navigates by assigning `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(url) {
            web_sys::console::error_2(&"navigation failed:".into(), &err);
        }
    }
}

/// Year from the browser's local clock (`new Date().getFullYear()`).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl YearProvider for BrowserClock {
    fn current_year(&self) -> i32 {
        js_sys::Date::new_0().get_full_year() as i32
    }
}

/// Parse bundled content, falling back to the built-in page on error.
pub fn load_content(source: &str) -> PageContent {
    match PageContent::from_toml_str(source) {
        Ok(content) => content,
        Err(e) => {
            let message = format!("[eduease] falling back to built-in content: {}", e);
            web_sys::console::warn_1(&message.into());
            PageContent::default()
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_clock_reports_a_plausible_year() {
        let year = BrowserClock.current_year();
        assert!(year >= 2025);
    }

    #[wasm_bindgen_test]
    fn broken_content_falls_back() {
        let content = load_content("brand = [");
        assert_eq!(content, PageContent::default());
    }
}
