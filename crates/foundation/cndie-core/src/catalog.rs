//! The two fixed product catalogs
//!
//! Display order is slice order. Nothing here sorts, filters, or validates;
//! a product's catalog is decided by which slice it is written into.

use serde::Serialize;

/// Stock condition. Drives catalog membership and badge styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Condition {
    #[serde(rename = "Pre-Owned")]
    PreOwned,
    #[serde(rename = "First Hand")]
    FirstHand,
}

impl Condition {
    /// Label shown on the badge
    pub fn label(self) -> &'static str {
        match self {
            Condition::PreOwned => "Pre-Owned",
            Condition::FirstHand => "First Hand",
        }
    }

    /// CSS class for the badge
    pub fn badge_class(self) -> &'static str {
        match self {
            Condition::PreOwned => "badge-pre-owned",
            Condition::FirstHand => "badge-first-hand",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A phone listed in the store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub model: &'static str,
    pub storage: &'static str,
    pub price: f64,
    pub condition: Condition,
    pub image: &'static str,
}

pub static PRE_OWNED: &[Product] = &[
    Product {
        id: "iphone7",
        model: "iPhone 7",
        storage: "32GB",
        price: 3100.0,
        condition: Condition::PreOwned,
        image: "https://store.storeimages.cdn-apple.com/4982/as-images.apple.com/is/iphone7-black-select-2016?wid=470&hei=556&fmt=png-alpha&.v=1472430177971",
    },
    Product {
        id: "iphone8plus",
        model: "iPhone 8 Plus",
        storage: "64GB",
        price: 3800.0,
        condition: Condition::PreOwned,
        image: "https://store.storeimages.cdn-apple.com/4982/as-images.apple.com/is/iphone8-plus-gold-select-2018?wid=470&hei=556&fmt=png-alpha&.v=1550795396391",
    },
    Product {
        id: "iphonex",
        model: "iPhone X",
        storage: "64GB",
        price: 4750.0,
        condition: Condition::PreOwned,
        image: "https://store.storeimages.cdn-apple.com/4982/as-images.apple.com/is/iphone-x-silver-select-2017?wid=470&hei=556&fmt=png-alpha&.v=1515616783714",
    },
    Product {
        id: "iphone11",
        model: "iPhone 11",
        storage: "64GB",
        price: 5200.0,
        condition: Condition::PreOwned,
        image: "https://store.storeimages.cdn-apple.com/4982/as-images.apple.com/is/iphone11-purple-select-2019?wid=470&hei=556&fmt=png-alpha&.v=1566956361132",
    },
];

pub static FIRST_HAND: &[Product] = &[
    Product {
        id: "iphone13promax",
        model: "iPhone 13 Pro Max",
        storage: "128GB",
        price: 15000.0,
        condition: Condition::FirstHand,
        image: "https://store.storeimages.cdn-apple.com/4982/as-images.apple.com/is/iphone-13-pro-max-gold-select?wid=470&hei=556&fmt=png-alpha&.v=1631652954000",
    },
    Product {
        id: "iphone14",
        model: "iPhone 14",
        storage: "128GB",
        price: 13200.0,
        condition: Condition::FirstHand,
        image: "https://store.storeimages.cdn-apple.com/4982/as-images.apple.com/is/iphone14-blue-select-2022?wid=470&hei=556&fmt=png-alpha&.v=1661027886946",
    },
    Product {
        id: "iphone15promax",
        model: "iPhone 15 Pro Max",
        storage: "256GB",
        price: 24500.0,
        condition: Condition::FirstHand,
        image: "https://store.storeimages.cdn-apple.com/4982/as-images.apple.com/is/iphone-15-pro-max-naturaltitanium-select?wid=470&hei=556&fmt=png-alpha&.v=1693010033617",
    },
    Product {
        id: "iphone15",
        model: "iPhone 15",
        storage: "128GB",
        price: 16800.0,
        condition: Condition::FirstHand,
        image: "https://store.storeimages.cdn-apple.com/4982/as-images.apple.com/is/iphone-15-pink-select-202309?wid=470&hei=556&fmt=png-alpha&.v=1693660486326",
    },
];

/// One of the two page sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    PreOwned,
    FirstHand,
}

impl Catalog {
    /// Sections in page order
    pub const ALL: [Catalog; 2] = [Catalog::PreOwned, Catalog::FirstHand];

    pub fn products(self) -> &'static [Product] {
        match self {
            Catalog::PreOwned => PRE_OWNED,
            Catalog::FirstHand => FIRST_HAND,
        }
    }

    /// Section heading
    pub fn title(self) -> &'static str {
        match self {
            Catalog::PreOwned => "Pre-Owned iPhones",
            Catalog::FirstHand => "First Hand iPhones",
        }
    }

    /// Stable identifier used in markup and JSON
    pub fn slug(self) -> &'static str {
        match self {
            Catalog::PreOwned => "pre-owned",
            Catalog::FirstHand => "first-hand",
        }
    }

    pub fn condition(self) -> Condition {
        match self {
            Catalog::PreOwned => Condition::PreOwned,
            Catalog::FirstHand => Condition::FirstHand,
        }
    }
}

/// Every product, Pre-Owned first
pub fn all_products() -> impl Iterator<Item = &'static Product> {
    PRE_OWNED.iter().chain(FIRST_HAND.iter())
}

/// Look up a product by id across both catalogs
pub fn find_product(id: &str) -> Option<&'static Product> {
    all_products().find(|p| p.id == id)
}
