//! CSS for the landing page.
//!
//! Inlined into the static export by [`crate::components::LandingDocument`];
//! the browser build mounts it in a `<style>` element next to the page.
//!
//! # Customization
//!
//! ```rust
//! use eduease_page::styles::LANDING_CSS;
//!
//! let my_css = ".hero-text h1 span { color: teal; }";
//! let combined = format!("{}\n{}", LANDING_CSS, my_css);
//! ```

/// Complete CSS for the page - warm orange palette on a peach background.
pub const LANDING_CSS: &str = r#"
:root {
    --peach: #ffe3c7;
    --orange: #f57c00;
    --orange-dark: #e76f00;
    --ink: #1d1d1f;
    --muted: #5f5f66;
    --card: #ffffff;
    --footer-bg: #1f1b16;
    --footer-text: #d9d2c9;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: "Poppins", "Segoe UI", sans-serif;
    color: var(--ink);
    background: var(--peach);
}

.hero-container { min-height: 100vh; }

/* Navbar */
.navbar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 20px 60px;
}
.logo { font-size: 28px; font-weight: 700; color: var(--orange); }
.nav-links { display: flex; gap: 32px; list-style: none; margin: 0; padding: 0; }
.nav-links li { cursor: pointer; font-weight: 500; color: var(--muted); }
.nav-links li.active { color: var(--orange); border-bottom: 2px solid var(--orange); }

button {
    cursor: pointer;
    border: none;
    border-radius: 8px;
    font-weight: 600;
    background: var(--orange);
    color: #fff;
    transition: background 0.2s ease;
}
button:hover { background: var(--orange-dark); }
.login-btn { padding: 10px 28px; }
.get-started { padding: 14px 36px; font-size: 16px; margin-top: 12px; }
.learn-more-btn { padding: 12px 32px; margin-top: 16px; }

/* Hero */
.hero-content {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 40px;
    padding: 40px 60px 80px;
}
.hero-text { max-width: 560px; }
.hero-text h1 { font-size: 52px; line-height: 1.15; margin: 0 0 12px; }
.hero-text h1 span { color: var(--orange); }
.hero-text h3 { font-size: 22px; color: var(--muted); margin: 0 0 16px; }
.hero-text p { font-size: 17px; line-height: 1.6; }

/* Features */
.features-section { padding: 80px 60px; background: #fff6ec; }
.features-title { text-align: center; font-size: 36px; margin: 0 0 48px; }
.features-grid {
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 28px;
}
.feature-card {
    background: var(--card);
    border-radius: 16px;
    padding: 32px 28px;
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.06);
    transition: transform 0.2s ease;
}
.feature-card:hover { transform: translateY(-6px); }
.feature-icon { font-size: 40px; color: var(--orange); margin-bottom: 16px; }
.feature-card h3 { margin: 0 0 10px; }
.feature-card p { margin: 0; color: var(--muted); line-height: 1.5; }

/* Why choose us */
.why-choose-us { padding: 80px 60px; }
.why-container { display: flex; align-items: center; gap: 56px; }
.why-image img { width: 100%; max-width: 520px; border-radius: 20px; }
.why-text h2 { font-size: 36px; margin: 0 0 16px; }
.why-text ul { list-style: none; padding: 0; }
.why-text li { margin: 10px 0; font-size: 17px; }
.why-check { color: var(--orange); font-weight: 700; }

/* Footer */
.footer { background: var(--footer-bg); color: var(--footer-text); padding: 60px 60px 24px; }
.footer-container {
    display: grid;
    grid-template-columns: 2fr 1fr 1fr 1.5fr;
    gap: 40px;
}
.footer-column h3 { color: #fff; margin-top: 0; }
.footer-column ul { list-style: none; padding: 0; margin: 0; }
.footer-column li { margin: 8px 0; }
.footer a { color: var(--footer-text); text-decoration: none; }
.footer a:hover { color: var(--orange); }
.social-icons { display: flex; gap: 14px; font-size: 22px; }
.contact-icon { color: var(--orange); }
.footer-bottom {
    display: flex;
    justify-content: space-between;
    align-items: center;
    border-top: 1px solid rgba(255, 255, 255, 0.12);
    margin-top: 40px;
    padding-top: 20px;
    font-size: 14px;
}
.legal-links { display: flex; gap: 20px; }

@media (max-width: 900px) {
    .navbar, .hero-content, .why-container, .footer-bottom { flex-direction: column; }
    .features-grid { grid-template-columns: 1fr; }
    .footer-container { grid-template-columns: 1fr 1fr; }
}
"#;
