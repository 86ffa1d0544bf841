//! Contact details shown in the header and footer

/// WhatsApp deep link, opened in a new browsing context
pub const WHATSAPP_URL: &str = "https://wa.me/27781347169";

/// Dialer link
pub const TEL_URL: &str = "tel:0781347169";

/// Phone number as printed on the page
pub const PHONE_DISPLAY: &str = "078 134 7169";

pub const LOCATION: &str = "Richards Bay, South Africa";
