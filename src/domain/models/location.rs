use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub what3names: Option<String>,
    pub how_to_find: Option<String>,
    pub created_by: String,
}

impl Location {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        city: String,
        country: String,
        latitude: f64,
        longitude: f64,
        what3names: Option<String>,
        how_to_find: Option<String>,
        created_by: String,
    ) -> Self {
        Self {
            id: format!("loc-{}", Uuid::new_v4()),
            name,
            city,
            country,
            latitude,
            longitude,
            what3names,
            how_to_find,
            created_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_locations_get_prefixed_ids() {
        let location = Location::new(
            "Victoria Park".to_string(),
            "London".to_string(),
            "UK".to_string(),
            51.536,
            -0.042,
            Some("filled.count.soap".to_string()),
            None,
            "u1".to_string(),
        );
        assert!(location.id.starts_with("loc-"));
        assert_eq!(location.city, "London");
    }
}
