//! Route table for the storefront, shown at startup

/// Method, path and purpose of every route the router serves
pub const ROUTES: &[(&str, &str, &str)] = &[
    ("GET", "/", "Storefront page"),
    ("GET", "/api/health", "Health check"),
    ("GET", "/api/catalog", "Both catalogs as JSON"),
    ("GET", "/static/style.css", "CSS stylesheet"),
];

/// Startup banner: where the shop is served, what it lists, and its routes
pub fn startup_banner(addr: &str) -> String {
    let mut out = format!(
        "\n  Cndie's iPhone Collection\n  {} phones in stock, serving http://{}\n\n",
        cndie_core::all_products().count(),
        addr
    );
    for (method, path, desc) in ROUTES {
        out.push_str(&format!("    {} http://{}{}  ({})\n", method, addr, path, desc));
    }
    out
}

/// Print the startup banner to stdout
pub fn print_routes(addr: &str) {
    println!("{}", startup_banner(addr));
}
