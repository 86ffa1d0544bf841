//! Product card rendering
//!
//! A card owns a single flag: whether its image failed to load. The flag
//! starts false and can only be set. In the browser the placeholder ships
//! with the card inside an inert `<template>`; the `<img>` `onerror` hook
//! swaps it in place of the image without any further request.

use cndie_core::{format_price, Product};

use crate::templates::{html_escape, PHOTO_ICON};

/// Inline error hook on card images. Clears itself first and replaces the
/// image with the following `<template>`, so a card only ever swaps once.
pub const IMAGE_ONERROR: &str =
    "this.onerror=null;this.replaceWith(this.nextElementSibling.content.cloneNode(true))";

/// A mounted product card
#[derive(Debug, Clone)]
pub struct ProductCard<'a> {
    product: &'a Product,
    image_load_failed: bool,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            image_load_failed: false,
        }
    }

    pub fn product(&self) -> &'a Product {
        self.product
    }

    pub fn image_load_failed(&self) -> bool {
        self.image_load_failed
    }

    /// Record that the image failed to load. There is no way back.
    pub fn mark_image_failed(&mut self) {
        self.image_load_failed = true;
    }

    /// The image area: the image itself, or the placeholder once it failed
    pub fn render_media(&self) -> String {
        if self.image_load_failed {
            self.placeholder_html()
        } else {
            format!(
                "{}<template class=\"card-fallback\">{}</template>",
                self.image_html(),
                self.placeholder_html()
            )
        }
    }

    fn image_html(&self) -> String {
        format!(
            "<img class=\"card-image\" src=\"{}\" alt=\"{}\" onerror=\"{}\">",
            html_escape(self.product.image),
            html_escape(self.product.model),
            IMAGE_ONERROR
        )
    }

    fn placeholder_html(&self) -> String {
        format!(
            "<div class=\"card-placeholder\" data-placeholder-for=\"{}\"><div class=\"placeholder-inner\">{}<span class=\"placeholder-label\">{}</span></div></div>",
            html_escape(self.product.id),
            PHOTO_ICON,
            html_escape(self.product.model)
        )
    }

    /// Full card markup
    pub fn render(&self) -> String {
        let condition = self.product.condition;
        format!(
            "<article class=\"card\" data-product-id=\"{id}\">
    <div class=\"card-media\">
        {media}
        <span class=\"badge {badge_class}\">{badge}</span>
    </div>
    <div class=\"card-body\">
        <h3 class=\"card-model\">{model}</h3>
        <p class=\"card-storage\">{storage}</p>
        <p class=\"card-price\">{price}</p>
    </div>
</article>",
            id = html_escape(self.product.id),
            media = self.render_media(),
            badge_class = condition.badge_class(),
            badge = condition,
            model = html_escape(self.product.model),
            storage = html_escape(self.product.storage),
            price = html_escape(&format_price(self.product.price)),
        )
    }
}

/// Markup with every inert `<template>` removed, i.e. what the browser shows
#[cfg(test)]
pub(crate) fn visible_markup(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find("<template") {
        out.push_str(&rest[..start]);
        rest = match rest[start..].find("</template>") {
            Some(end) => &rest[start + end + "</template>".len()..],
            None => "",
        };
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cndie_core::{Condition, FIRST_HAND, PRE_OWNED};

    #[test]
    fn test_initial_state_shows_image() {
        let card = ProductCard::new(&PRE_OWNED[0]);
        assert!(!card.image_load_failed());

        let html = card.render();
        assert!(html.contains("<img class=\"card-image\""));
        assert!(html.contains(PRE_OWNED[0].image.replace('&', "&amp;").as_str()));
        assert!(!visible_markup(&html).contains("card-placeholder"));
    }

    #[test]
    fn test_placeholder_ships_with_card() {
        let html = ProductCard::new(&PRE_OWNED[3]).render_media();
        let img_end = html.find('>').unwrap();
        assert!(html[img_end + 1..].starts_with(
            "<template class=\"card-fallback\"><div class=\"card-placeholder\" data-placeholder-for=\"iphone11\""
        ));
        assert!(html.ends_with(
            "<span class=\"placeholder-label\">iPhone 11</span></div></div></template>"
        ));
    }

    #[test]
    fn test_onerror_swaps_without_network() {
        let html = ProductCard::new(&FIRST_HAND[1]).render_media();
        assert!(html.contains(&format!("onerror=\"{}\"", IMAGE_ONERROR)));

        assert!(IMAGE_ONERROR.starts_with("this.onerror=null;"));
        assert!(IMAGE_ONERROR.contains("this.nextElementSibling.content"));
        for remote in ["htmx", "fetch", "XMLHttpRequest", "http"] {
            assert!(!IMAGE_ONERROR.contains(remote), "onerror uses {}", remote);
        }
    }

    #[test]
    fn test_failure_swaps_to_placeholder() {
        let mut card = ProductCard::new(&FIRST_HAND[2]);
        card.mark_image_failed();
        assert!(card.image_load_failed());

        let html = card.render();
        assert!(!html.contains("<img"));
        assert!(!html.contains("<template"));
        assert!(html.contains("data-placeholder-for=\"iphone15promax\""));
        assert!(html.contains("<span class=\"placeholder-label\">iPhone 15 Pro Max</span>"));
    }

    #[test]
    fn test_failure_is_one_way() {
        let mut card = ProductCard::new(&PRE_OWNED[1]);
        card.mark_image_failed();
        card.mark_image_failed();
        assert!(card.image_load_failed());
        assert!(card.render_media().contains("card-placeholder"));
    }

    #[test]
    fn test_remount_resets_flag() {
        let mut first = ProductCard::new(&PRE_OWNED[2]);
        first.mark_image_failed();

        let second = ProductCard::new(first.product());
        assert!(!second.image_load_failed());
    }

    #[test]
    fn test_badge_by_condition() {
        let pre = ProductCard::new(&PRE_OWNED[0]).render();
        assert!(pre.contains("<span class=\"badge badge-pre-owned\">Pre-Owned</span>"));

        let first = ProductCard::new(&FIRST_HAND[0]).render();
        assert!(first.contains("<span class=\"badge badge-first-hand\">First Hand</span>"));
    }

    #[test]
    fn test_text_fields() {
        let html = ProductCard::new(&FIRST_HAND[0]).render();
        assert!(html.contains("<h3 class=\"card-model\">iPhone 13 Pro Max</h3>"));
        assert!(html.contains("<p class=\"card-storage\">128GB</p>"));
        assert!(html.contains("<p class=\"card-price\">R15,000</p>"));
    }

    #[test]
    fn test_malformed_data_renders_as_is() {
        let odd = Product {
            id: "odd",
            model: "Phone <Beta>",
            storage: "1TB",
            price: -3100.0,
            condition: Condition::PreOwned,
            image: "not a url",
        };
        let html = ProductCard::new(&odd).render();
        assert!(html.contains("R-3,100"));
        assert!(html.contains("src=\"not a url\""));
        assert!(html.contains("Phone &lt;Beta&gt;"));
    }
}
