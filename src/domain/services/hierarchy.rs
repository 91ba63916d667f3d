use std::collections::BTreeMap;

use crate::domain::models::views::{CityGroup, CountryGroup, EventSummary, LocationHierarchy, VenueGroup};

/// Group a flat event list into a Country → City → Venue tree for browsing.
///
/// Grouping is always keyed by the full `(country, city, venue)` tuple, so
/// two venues sharing a name in different cities stay distinct. `BTreeMap`
/// ordering gives deterministic, locale-independent code-point sorting at
/// every level, and events within a venue sort by their ISO start string
/// (fixed-width UTC timestamps, so string order is chronological order).
///
/// City and country coordinates are the arithmetic mean of their children's
/// coordinates. Good enough at city scale; a country whose venues span
/// hundreds of km gets a rough midpoint, not a geodesic centroid.
pub fn build_location_hierarchy(events: &[EventSummary]) -> LocationHierarchy {
    let mut country_map: BTreeMap<&str, BTreeMap<&str, BTreeMap<&str, Vec<&EventSummary>>>> =
        BTreeMap::new();

    for event in events {
        country_map
            .entry(&event.location.country)
            .or_default()
            .entry(&event.location.city)
            .or_default()
            .entry(&event.location.name)
            .or_default()
            .push(event);
    }

    let mut countries = Vec::with_capacity(country_map.len());

    for (country, city_map) in country_map {
        let mut cities = Vec::with_capacity(city_map.len());

        for (city, venue_map) in city_map {
            let mut venues = Vec::with_capacity(venue_map.len());

            for (venue, venue_events) in venue_map {
                let mut venue_events: Vec<EventSummary> =
                    venue_events.into_iter().cloned().collect();
                venue_events.sort_by(|a, b| a.date_time.cmp(&b.date_time));

                // All events at one venue share coordinates by construction
                // upstream, so the first event's location is authoritative.
                let latitude = venue_events[0].location.latitude;
                let longitude = venue_events[0].location.longitude;
                let event_count = venue_events.len();

                venues.push(VenueGroup {
                    venue: venue.to_string(),
                    latitude,
                    longitude,
                    events: venue_events,
                    event_count,
                });
            }

            let latitude = mean(venues.iter().map(|v| v.latitude));
            let longitude = mean(venues.iter().map(|v| v.longitude));
            let event_count = venues.iter().map(|v| v.event_count).sum();

            cities.push(CityGroup {
                city: city.to_string(),
                latitude,
                longitude,
                venues,
                event_count,
            });
        }

        let latitude = mean(cities.iter().map(|c| c.latitude));
        let longitude = mean(cities.iter().map(|c| c.longitude));
        let event_count = cities.iter().map(|c| c.event_count).sum();

        countries.push(CountryGroup {
            country: country.to_string(),
            latitude,
            longitude,
            cities,
            event_count,
        });
    }

    countries
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
