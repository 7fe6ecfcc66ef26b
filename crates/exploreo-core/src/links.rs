//! Map deep links and imagery URLs.
//!
//! Everything here only builds strings for an external collaborator (the
//! platform map app or an image loader); nothing is fetched.

use url::Url;

/// Fixed size of the static map shown next to an itinerary stop.
pub const ITINERARY_THUMBNAIL_SIZE: (u32, u32) = (400, 180);

const STATIC_MAP_STYLE: &str = "osm-bright";
const STATIC_MAP_ZOOM: &str = "14";
const MARKER_STYLE: &str = "type:material;color:#FFD700;size:large";
const STREET_VIEW_FOV: &str = "80";
const STREET_VIEW_PITCH: &str = "0";

/// `geo:<lat>,<lon>?q=<label>` for handing a location to a map app.
pub fn geo_uri(latitude: f64, longitude: f64, label: &str) -> String {
    format!(
        "geo:{latitude},{longitude}?q={}",
        urlencoding::encode(label)
    )
}

/// Turn-by-turn navigation link to a location.
pub fn navigation_uri(latitude: f64, longitude: f64, label: &str) -> String {
    format!(
        "google.navigation:q={latitude},{longitude}({})",
        urlencoding::encode(label)
    )
}

/// Static map image centred on one gold marker.
pub fn static_map_url(
    endpoint: &Url,
    api_key: &str,
    latitude: f64,
    longitude: f64,
    (width, height): (u32, u32),
) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("style", STATIC_MAP_STYLE)
        .append_pair("width", &width.to_string())
        .append_pair("height", &height.to_string())
        .append_pair(
            "marker",
            &format!("lonlat:{longitude},{latitude};{MARKER_STYLE}"),
        )
        .append_pair("zoom", STATIC_MAP_ZOOM)
        .append_pair("apiKey", api_key);
    url
}

/// Street-level photo of a location.
pub fn street_view_url(
    endpoint: &Url,
    api_key: &str,
    latitude: f64,
    longitude: f64,
    (width, height): (u32, u32),
) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("size", &format!("{width}x{height}"))
        .append_pair("location", &format!("{latitude},{longitude}"))
        .append_pair("fov", STREET_VIEW_FOV)
        .append_pair("pitch", STREET_VIEW_PITCH)
        .append_pair("key", api_key);
    url
}
