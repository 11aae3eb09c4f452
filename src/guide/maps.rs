/// Base URL for Google Maps search links
pub const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Build a Google Maps search link for a place in a city.
///
/// The query is `"<place>, <city>"`, percent-encoded. An empty city still
/// keeps the separator, which is how the city overview link is built.
pub fn maps_link(place: &str, city: &str) -> String {
    let query = format!("{}, {}", place, city);
    format!("{}{}", MAPS_SEARCH_BASE, urlencoding::encode(&query))
}
