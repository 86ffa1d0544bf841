//! HTML shell, stylesheet and icons for the storefront
//!
//! All markup is rendered on the server. The page loads no scripts; the
//! only client behavior is the inline image fallback hook on each card.

/// CSS styles
pub const STYLE_CSS: &str = r#"
:root {
    --bg-from: #581c87;
    --bg-via: #1e3a8a;
    --bg-to: #312e81;
    --glass: rgba(255, 255, 255, 0.1);
    --glass-border: rgba(255, 255, 255, 0.2);
    --text: #ffffff;
    --text-soft: rgba(255, 255, 255, 0.8);
    --text-dim: rgba(255, 255, 255, 0.7);
    --price: #fde047;
    --pre-owned: #f97316;
    --first-hand: #22c55e;
    --first-hand-hover: #16a34a;
    --call: #3b82f6;
    --call-hover: #2563eb;
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    color: var(--text);
    line-height: 1.5;
}

.page {
    min-height: 100vh;
    background: linear-gradient(to bottom right, var(--bg-from), var(--bg-via), var(--bg-to));
}

.container {
    max-width: 1280px;
    margin: 0 auto;
    padding: 3rem 1rem;
}

/* Header */
.site-header {
    text-align: center;
    padding-top: 2rem;
    padding-bottom: 2rem;
}

.site-title {
    font-size: 3rem;
    font-weight: 700;
    margin-bottom: 1rem;
}

.site-title span {
    background: linear-gradient(to right, #facc15, #ec4899, #9333ea);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.tagline {
    font-size: 1.25rem;
    color: rgba(255, 255, 255, 0.9);
    margin-bottom: 1.5rem;
}

.header-facts {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: center;
    gap: 1rem;
    color: var(--text-soft);
}

.fact {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.icon-sm {
    width: 1.25rem;
    height: 1.25rem;
}

.cta {
    margin-top: 1rem;
    font-size: 1.125rem;
    font-weight: 600;
    color: var(--price);
}

/* Sections */
.section-heading {
    text-align: center;
    margin-bottom: 3rem;
}

.section-heading h2 {
    font-size: 2.25rem;
    font-weight: 700;
    margin-bottom: 1rem;
}

.divider {
    width: 6rem;
    height: 0.25rem;
    margin: 0 auto;
    border-radius: 9999px;
}

.divider-pre-owned {
    background: linear-gradient(to right, #fb923c, #ef4444);
}

.divider-first-hand {
    background: linear-gradient(to right, #4ade80, #3b82f6);
}

.grid {
    display: grid;
    grid-template-columns: repeat(1, minmax(0, 1fr));
    gap: 2rem;
}

@media (min-width: 640px) {
    .grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .site-title { font-size: 3.75rem; }
}

@media (min-width: 1024px) {
    .grid { grid-template-columns: repeat(4, minmax(0, 1fr)); }
}

/* Product card */
.card {
    background: var(--glass);
    backdrop-filter: blur(12px);
    border: 1px solid var(--glass-border);
    border-radius: 1rem;
    padding: 1.5rem;
    transition: transform 0.3s, box-shadow 0.3s;
}

.card:hover {
    transform: scale(1.05);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.card-media {
    position: relative;
    margin-bottom: 1rem;
}

.card-image {
    display: block;
    width: 100%;
    height: 12rem;
    object-fit: contain;
    margin: 0 auto;
    transition: transform 0.3s;
}

.card:hover .card-image {
    transform: scale(1.1);
}

.card-placeholder {
    width: 100%;
    height: 12rem;
    border-radius: 0.5rem;
    background: linear-gradient(to bottom right, #f3f4f6, #e5e7eb);
    display: flex;
    align-items: center;
    justify-content: center;
}

.placeholder-inner {
    color: #6b7280;
    text-align: center;
}

.placeholder-icon {
    display: block;
    width: 3rem;
    height: 3rem;
    margin: 0 auto 0.5rem;
}

.placeholder-label {
    font-size: 0.875rem;
}

.badge {
    position: absolute;
    top: 0.5rem;
    right: 0.5rem;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 600;
    color: var(--text);
}

.badge-pre-owned {
    background: var(--pre-owned);
}

.badge-first-hand {
    background: var(--first-hand);
}

.card-body {
    text-align: center;
}

.card-model {
    font-size: 1.25rem;
    font-weight: 700;
    margin-bottom: 0.25rem;
}

.card-storage {
    color: var(--text-soft);
    margin-bottom: 0.75rem;
}

.card-price {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--price);
}

/* Footer */
.site-footer {
    text-align: center;
}

.footer-panel {
    background: var(--glass);
    backdrop-filter: blur(12px);
    border: 1px solid var(--glass-border);
    border-radius: 1rem;
    padding: 2rem;
}

.footer-panel h3 {
    font-size: 1.5rem;
    font-weight: 700;
    margin-bottom: 1rem;
}

.footer-text {
    color: rgba(255, 255, 255, 0.9);
    margin-bottom: 1.5rem;
}

.footer-actions {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: center;
    gap: 1rem;
}

.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 2rem;
    border-radius: 9999px;
    font-weight: 600;
    color: var(--text);
    text-decoration: none;
    transition: background-color 0.2s;
}

.btn-whatsapp { background: var(--first-hand); }
.btn-whatsapp:hover { background: var(--first-hand-hover); }
.btn-call { background: var(--call); }
.btn-call:hover { background: var(--call-hover); }

.footer-legal {
    margin-top: 2rem;
    padding-top: 1.5rem;
    border-top: 1px solid var(--glass-border);
    color: var(--text-dim);
}

.footer-legal p + p {
    margin-top: 0.5rem;
}

/* Floating WhatsApp button */
.whatsapp-float {
    position: fixed;
    bottom: 1.5rem;
    right: 1.5rem;
    z-index: 50;
    padding: 1rem;
    border-radius: 9999px;
    background: var(--first-hand);
    color: var(--text);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
    transition: background-color 0.3s, box-shadow 0.3s;
}

.whatsapp-float:hover {
    background: var(--first-hand-hover);
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3);
}

.whatsapp-float svg {
    display: block;
    width: 2rem;
    height: 2rem;
    transition: transform 0.3s;
}

.whatsapp-float:hover svg {
    transform: scale(1.1);
}
"#;

/// Generic photo icon used by the image placeholder
pub const PHOTO_ICON: &str = r#"<svg class="placeholder-icon" fill="currentColor" viewBox="0 0 20 20" aria-hidden="true"><path fill-rule="evenodd" d="M4 3a2 2 0 00-2 2v10a2 2 0 002 2h12a2 2 0 002-2V5a2 2 0 00-2-2H4zm12 12H4l4-8 3 6 2-4 3 6z" clip-rule="evenodd"/></svg>"#;

pub const PIN_ICON: &str = r#"<svg class="icon-sm" fill="currentColor" viewBox="0 0 20 20" aria-hidden="true"><path fill-rule="evenodd" d="M5.05 4.05a7 7 0 119.9 9.9L10 18.9l-4.95-4.95a7 7 0 010-9.9zM10 11a2 2 0 100-4 2 2 0 000 4z" clip-rule="evenodd"/></svg>"#;

pub const PHONE_ICON: &str = r#"<svg class="icon-sm" fill="currentColor" viewBox="0 0 20 20" aria-hidden="true"><path d="M2 3a1 1 0 011-1h2.153a1 1 0 01.986.836l.74 4.435a1 1 0 01-.54 1.06l-1.548.773a11.037 11.037 0 006.105 6.105l.774-1.548a1 1 0 011.059-.54l4.435.74a1 1 0 01.836.986V17a1 1 0 01-1 1h-2C7.82 18 2 12.18 2 5V3z"/></svg>"#;

pub const WHATSAPP_ICON: &str = r#"<svg class="icon-sm" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true"><path d="M12.031 6.172c-3.181 0-5.767 2.586-5.768 5.766-.001 1.298.38 2.27 1.019 3.287l-.582 2.128 2.182-.573c.978.58 1.911.928 3.145.929 3.178 0 5.767-2.587 5.768-5.766.001-3.187-2.575-5.77-5.764-5.771zm3.392 8.244c-.144.405-.837.774-1.17.824-.299.045-.677.063-1.092-.069-.252-.08-.575-.187-.988-.365-1.739-.751-2.874-2.502-2.961-2.617-.087-.116-.708-.94-.708-1.793s.448-1.273.607-1.446c.159-.173.346-.217.462-.217l.332.006c.106.005.249-.04.39.298.144.347.491 1.2.534 1.287.043.087.072.188.014.304-.058.116-.087.188-.173.289l-.26.304c-.087.086-.177.18-.076.354.101.174.449.741.964 1.201.662.591 1.221.774 1.394.86s.274.072.376-.043c.101-.116.433-.506.549-.68.116-.173.231-.145.39-.087s1.011.477 1.184.564.289.130.332.202c.045.072.045.419-.1.824z"/></svg>"#;

/// Simple HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap rendered body markup in the document shell
pub fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>{}</title>
    <link rel=\"stylesheet\" href=\"/static/style.css\">
</head>
<body>
{}
</body>
</html>",
        html_escape(title),
        body
    )
}
