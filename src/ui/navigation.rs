//! Symbol navigation: the single route parameter of the detail page.

/// Extracts the symbol from a route such as `#/crypto/BTC`, `/crypto/BTC/` or `BTC`.
///
/// The symbol is the last non-empty path segment, trimmed. Case is preserved,
/// lookup is case-sensitive.
pub fn symbol_from_route(route: &str) -> Option<String> {
    route
        .trim()
        .trim_start_matches('#')
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(String::from)
}

/// Route of the detail page for `symbol`.
pub fn route_for(symbol: &str) -> String {
    format!("/crypto/{}", symbol)
}

/// Reads the symbol from the page's URL hash.
#[cfg(target_arch = "wasm32")]
pub fn symbol_from_location() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    symbol_from_route(&hash)
}

/// Points the URL hash at `symbol` so the page can be bookmarked.
#[cfg(target_arch = "wasm32")]
pub fn set_location_symbol(symbol: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(&route_for(symbol)) {
            log::warn!("Could not update URL hash: {:?}", e);
        }
    }
}
