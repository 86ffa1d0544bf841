//! # Cndie Core
//!
//! Static storefront data for Cndie's iPhone Collection.
//!
//! ## Layout
//!
//! - **catalog**: the two fixed product catalogs, in display order
//! - **price**: Rand price formatting with thousands grouping
//! - **contact**: outbound WhatsApp and dialer links
//!
//! Everything here is immutable and defined at build time. Rendering lives
//! in `cndie-web`.

pub mod catalog;
pub mod contact;
pub mod price;

pub use catalog::{all_products, find_product, Catalog, Condition, Product, FIRST_HAND, PRE_OWNED};
pub use contact::{LOCATION, PHONE_DISPLAY, TEL_URL, WHATSAPP_URL};
pub use price::{format_price, CURRENCY_PREFIX};
