use serde::Serialize;

/// Collapse well-known aliases ("Greater London", "NYC") onto the
/// canonical city name used for grouping. Unknown names pass through
/// trimmed; blank input yields `None`.
pub fn normalize_city_name(city: Option<&str>) -> Option<String> {
    let trimmed = city?.trim();
    if trimmed.is_empty() {
        return None;
    }
    let canonical = match trimmed.to_lowercase().as_str() {
        "greater london" | "city of london" | "london (greater)" => "London",
        "nyc" | "new york city" | "new york, ny" => "New York",
        "sf" | "san fran" => "San Francisco",
        _ => return Some(trimmed.to_string()),
    };
    Some(canonical.to_string())
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ExternalMapLink {
    pub label: String,
    pub url: String,
}

/// External map deep links for a venue: Google, Apple and OpenStreetMap
/// from the coordinates, plus a What3Names link when the venue carries a
/// locator. The locator is normalised to lowercase dot-separated words.
pub fn build_external_map_links(
    latitude: f64,
    longitude: f64,
    what3names: Option<&str>,
) -> Vec<ExternalMapLink> {
    let mut links = vec![
        ExternalMapLink {
            label: "Google Maps".to_string(),
            url: format!("https://maps.google.com/?q={}%2C{}", latitude, longitude),
        },
        ExternalMapLink {
            label: "Apple Maps".to_string(),
            url: format!("https://maps.apple.com/?q={}%2C{}", latitude, longitude),
        },
        ExternalMapLink {
            label: "OpenStreetMap".to_string(),
            url: format!(
                "https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map=16/{lat}/{lng}",
                lat = latitude,
                lng = longitude
            ),
        },
    ];

    if let Some(normalized) = normalize_what3names(what3names) {
        links.push(ExternalMapLink {
            label: "What3Names".to_string(),
            url: format!("https://what3words.com/{}", normalized),
        });
    }

    links
}

fn normalize_what3names(value: Option<&str>) -> Option<String> {
    let words = value?.trim();
    if words.is_empty() {
        return None;
    }
    let normalized: String = words
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(".")
        .trim_matches('.')
        .to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}
