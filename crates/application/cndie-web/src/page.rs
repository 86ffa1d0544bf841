//! Storefront page composition
//!
//! Header, the two catalog sections in fixed order, footer, then the
//! floating WhatsApp button.

use cndie_core::{Catalog, LOCATION, PHONE_DISPLAY, TEL_URL, WHATSAPP_URL};

use crate::card::ProductCard;
use crate::templates::{self, PHONE_ICON, PIN_ICON, WHATSAPP_ICON};

pub const SITE_TITLE: &str = "Cndie's iPhone Collection";

/// One catalog rendered as a heading plus a grid of cards
#[derive(Debug, Clone)]
pub struct CatalogSection {
    catalog: Catalog,
    cards: Vec<ProductCard<'static>>,
}

impl CatalogSection {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cards: catalog.products().iter().map(ProductCard::new).collect(),
        }
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    pub fn cards(&self) -> &[ProductCard<'static>] {
        &self.cards
    }

    pub fn render(&self) -> String {
        let cards: String = self.cards.iter().map(ProductCard::render).collect();
        format!(
            "<section class=\"container catalog\" id=\"{slug}\">
    <div class=\"section-heading\">
        <h2>{title}</h2>
        <div class=\"divider divider-{slug}\"></div>
    </div>
    <div class=\"grid\">
{cards}
    </div>
</section>",
            slug = self.catalog.slug(),
            title = self.catalog.title(),
            cards = cards,
        )
    }
}

/// The whole storefront. Building one mounts a fresh set of cards.
#[derive(Debug, Clone)]
pub struct StorefrontPage {
    sections: Vec<CatalogSection>,
}

impl StorefrontPage {
    pub fn new() -> Self {
        Self {
            sections: Catalog::ALL.into_iter().map(CatalogSection::new).collect(),
        }
    }

    pub fn sections(&self) -> &[CatalogSection] {
        &self.sections
    }

    pub fn card_mut(&mut self, id: &str) -> Option<&mut ProductCard<'static>> {
        self.sections
            .iter_mut()
            .flat_map(|section| section.cards.iter_mut())
            .find(|card| card.product().id == id)
    }

    pub fn render(&self) -> String {
        let sections: String = self.sections.iter().map(CatalogSection::render).collect();
        let body = format!(
            "<div class=\"page\">\n{}\n{}\n{}\n{}\n</div>",
            header_html(),
            sections,
            footer_html(),
            whatsapp_button_html()
        );
        templates::document(SITE_TITLE, &body)
    }
}

impl Default for StorefrontPage {
    fn default() -> Self {
        Self::new()
    }
}

fn header_html() -> String {
    format!(
        "<header class=\"container site-header\">
    <h1 class=\"site-title\"><span>{title}</span></h1>
    <p class=\"tagline\">Premium iPhones in Richards Bay</p>
    <div class=\"header-facts\">
        <div class=\"fact\">{pin}<span>{location}</span></div>
        <div class=\"fact\">{phone_icon}<span>{phone}</span></div>
    </div>
    <p class=\"cta\">Contact us via WhatsApp, SMS, or Call to place your order</p>
</header>",
        title = SITE_TITLE,
        pin = PIN_ICON,
        location = LOCATION,
        phone_icon = PHONE_ICON,
        phone = PHONE_DISPLAY,
    )
}

fn footer_html() -> String {
    format!(
        "<footer class=\"container site-footer\">
    <div class=\"footer-panel\">
        <h3>Ready to Order?</h3>
        <p class=\"footer-text\">Contact us now to secure your iPhone. All orders are processed through our contact number.</p>
        <div class=\"footer-actions\">
            <a class=\"btn btn-whatsapp\" href=\"{whatsapp}\" target=\"_blank\" rel=\"noopener noreferrer\">{whatsapp_icon}WhatsApp Us</a>
            <a class=\"btn btn-call\" href=\"{tel}\">{phone_icon}Call Us</a>
        </div>
        <div class=\"footer-legal\">
            <p>© 2024 {title}. All rights reserved.</p>
            <p>Contact: {phone} | {location}</p>
        </div>
    </div>
</footer>",
        whatsapp = WHATSAPP_URL,
        whatsapp_icon = WHATSAPP_ICON,
        tel = TEL_URL,
        phone_icon = PHONE_ICON,
        title = SITE_TITLE,
        phone = PHONE_DISPLAY,
        location = LOCATION,
    )
}

fn whatsapp_button_html() -> String {
    format!(
        "<a class=\"whatsapp-float\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"Contact us on WhatsApp\">{}</a>",
        WHATSAPP_URL, WHATSAPP_ICON
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{visible_markup, IMAGE_ONERROR};

    fn between<'h>(html: &'h str, start: &str, end: &str) -> &'h str {
        let from = html.find(start).expect("start marker");
        let to = html[from..].find(end).expect("end marker") + from;
        &html[from..to]
    }

    fn card_models(section: &CatalogSection) -> Vec<&'static str> {
        section.cards().iter().map(|c| c.product().model).collect()
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let page = StorefrontPage::new();
        let catalogs: Vec<_> = page.sections().iter().map(|s| s.catalog()).collect();
        assert_eq!(catalogs, [Catalog::PreOwned, Catalog::FirstHand]);
    }

    #[test]
    fn test_cards_follow_catalog_order() {
        let page = StorefrontPage::new();

        let pre = card_models(&page.sections()[0]);
        assert_eq!(pre.len(), 4);
        assert_eq!(pre.first(), Some(&"iPhone 7"));
        assert_eq!(pre.last(), Some(&"iPhone 11"));

        let first = card_models(&page.sections()[1]);
        assert_eq!(first.len(), 4);
        assert_eq!(first.first(), Some(&"iPhone 13 Pro Max"));
        assert_eq!(first.last(), Some(&"iPhone 15"));
    }

    #[test]
    fn test_rendered_card_order() {
        let html = StorefrontPage::new().render();
        let positions: Vec<usize> = Catalog::ALL
            .iter()
            .flat_map(|c| c.products())
            .map(|p| {
                html.find(&format!("data-product-id=\"{}\"", p.id))
                    .expect("card rendered")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(html.matches("<article class=\"card\"").count(), 8);
    }

    #[test]
    fn test_no_placeholder_before_any_failure() {
        let html = StorefrontPage::new().render();
        let visible = visible_markup(&html);
        assert!(!visible.contains("card-placeholder"));
        assert_eq!(visible.matches("<img class=\"card-image\"").count(), 8);

        // Every image carries its own local fallback
        assert_eq!(html.matches(&format!("onerror=\"{}\"", IMAGE_ONERROR)).count(), 8);
        assert_eq!(html.matches("<template class=\"card-fallback\">").count(), 8);
    }

    #[test]
    fn test_failure_affects_only_that_card() {
        let mut page = StorefrontPage::new();
        page.card_mut("iphonex").expect("mounted").mark_image_failed();

        let html = visible_markup(&page.render());
        assert_eq!(html.matches("class=\"card-placeholder\"").count(), 1);
        assert!(html.contains("data-placeholder-for=\"iphonex\""));
        assert_eq!(html.matches("<img class=\"card-image\"").count(), 7);

        let card = between(&html, "data-product-id=\"iphonex\"", "</article>");
        assert!(card.contains("<span class=\"placeholder-label\">iPhone X</span>"));
        assert!(!card.contains("<img"));

        let neighbour = between(&html, "data-product-id=\"iphone11\"", "</article>");
        assert!(neighbour.contains("<img class=\"card-image\""));
        assert!(!neighbour.contains("card-placeholder"));
    }

    #[test]
    fn test_card_mut_unknown_id() {
        let mut page = StorefrontPage::new();
        assert!(page.card_mut("nokia3310").is_none());
    }

    #[test]
    fn test_new_page_remounts_cards() {
        let mut page = StorefrontPage::new();
        page.card_mut("iphone14").expect("mounted").mark_image_failed();

        let fresh = StorefrontPage::new();
        assert!(fresh
            .sections()
            .iter()
            .flat_map(|s| s.cards())
            .all(|c| !c.image_load_failed()));
    }

    #[test]
    fn test_header_content() {
        let html = StorefrontPage::new().render();
        let header = between(&html, "<header", "</header>");
        assert!(header.contains("Cndie's iPhone Collection"));
        assert!(header.contains("Premium iPhones in Richards Bay"));
        assert!(header.contains("Richards Bay, South Africa"));
        assert!(header.contains("078 134 7169"));
        assert!(header.contains("Contact us via WhatsApp, SMS, or Call to place your order"));
    }

    #[test]
    fn test_contact_links() {
        let html = StorefrontPage::new().render();
        let whatsapp = format!("href=\"{}\"", WHATSAPP_URL);
        let tel = format!("href=\"{}\"", TEL_URL);

        let footer = between(&html, "<footer", "</footer>");
        assert_eq!(footer.matches(&whatsapp).count(), 1);
        assert_eq!(footer.matches(&tel).count(), 1);

        // Footer plus the floating button
        assert_eq!(html.matches(&whatsapp).count(), 2);
        assert_eq!(html.matches(&tel).count(), 1);

        let float = between(&html, "<a class=\"whatsapp-float\"", "</a>");
        assert!(float.contains(&whatsapp));
        assert!(float.contains("target=\"_blank\""));
        assert_eq!(html.matches("class=\"whatsapp-float\"").count(), 1);
    }

    #[test]
    fn test_footer_copyright_glyph() {
        let html = StorefrontPage::new().render();
        assert!(html.contains("© 2024 Cndie's iPhone Collection. All rights reserved."));
        assert!(!html.contains("Â©"));
    }

    #[test]
    fn test_dividers_per_section() {
        let html = StorefrontPage::new().render();
        assert!(html.contains("<h2>Pre-Owned iPhones</h2>"));
        assert!(html.contains("<h2>First Hand iPhones</h2>"));
        assert!(html.contains("divider divider-pre-owned"));
        assert!(html.contains("divider divider-first-hand"));
    }
}
