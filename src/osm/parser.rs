use crate::api::OverpassResponse;
use crate::api::overpass::Element;
use crate::domain::NormalizedPoi;
use crate::osm::tags::{self, format_address};
use std::collections::HashMap;

/// Parse an Overpass response into at most `limit` POIs.
///
/// Elements are truncated in response order before normalization.
pub fn parse_pois(response: OverpassResponse, limit: usize) -> Vec<NormalizedPoi> {
    response
        .elements
        .into_iter()
        .take(limit)
        .map(normalize_element)
        .collect()
}

/// Map one element's tags onto the fixed POI schema.
///
/// Never fails: untagged elements get the default for every field.
pub fn normalize_element(element: Element) -> NormalizedPoi {
    let tags = element.tags.unwrap_or_default();
    normalize_tags(element.id, (element.lat, element.lon), &tags)
}

fn normalize_tags(id: i64, coordinates: (f64, f64), tags: &HashMap<String, String>) -> NormalizedPoi {
    NormalizedPoi {
        id,
        name: tags::NAME.resolve(tags),
        category: tags::CATEGORY.resolve(tags),
        coordinates,
        description: tags::DESCRIPTION.resolve(tags),
        address: format_address(tags),
        phone: tags::PHONE.resolve(tags),
        website: tags::WEBSITE.resolve(tags),
        opening_hours: tags::OPENING_HOURS.resolve(tags),
        cuisine: tags::CUISINE.resolve(tags),
        rating: tags::RATING.resolve(tags),
        wikipedia: tags::WIKIPEDIA.resolve(tags),
        email: tags::EMAIL.resolve(tags),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(id: i64, pairs: &[(&str, &str)]) -> Element {
        Element {
            id,
            lat: 21.0 + id as f64 * 0.001,
            lon: 105.8,
            tags: Some(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        }
    }

    #[test]
    fn test_untagged_element() {
        let poi = normalize_element(Element {
            id: 42,
            lat: 16.0544,
            lon: 108.2022,
            tags: None,
        });

        assert_eq!(poi.id, 42);
        assert_eq!(poi.name, "Unnamed location");
        assert_eq!(poi.category, "Point of Interest");
        assert_eq!(poi.coordinates, (16.0544, 108.2022));
        for field in [
            &poi.description,
            &poi.address,
            &poi.phone,
            &poi.website,
            &poi.opening_hours,
            &poi.cuisine,
            &poi.rating,
            &poi.wikipedia,
            &poi.email,
        ] {
            assert_eq!(field, "");
        }
    }

    #[test]
    fn test_empty_tag_map_matches_missing_tags() {
        let with_empty = normalize_element(element(1, &[]));
        let mut without = element(1, &[]);
        without.tags = None;
        assert_eq!(with_empty, normalize_element(without));
    }

    #[test]
    fn test_fully_tagged_element_uses_first_candidates() {
        let poi = normalize_element(element(
            7,
            &[
                ("name", "Nhà hát Lớn"),
                ("name:en", "Hanoi Opera House"),
                ("name:vi", "Nhà hát Lớn Hà Nội"),
                ("tourism", "attraction"),
                ("amenity", "theatre"),
                ("historic", "building"),
                ("leisure", "park"),
                ("description", "French colonial opera house"),
                ("description:en", "Opera house"),
                ("note", "check schedule"),
                ("addr:housenumber", "1"),
                ("addr:street", "Tràng Tiền"),
                ("addr:district", "Hoàn Kiếm"),
                ("addr:city", "Hà Nội"),
                ("addr:province", "Hà Nội"),
                ("address", "1 Trang Tien"),
                ("phone", "+84 24 3933 0113"),
                ("contact:phone", "+84 000"),
                ("website", "https://hanoioperahouse.org.vn"),
                ("contact:website", "https://example.org"),
                ("email", "info@hanoioperahouse.org.vn"),
                ("contact:email", "other@example.org"),
                ("opening_hours", "Mo-Su 08:00-17:00"),
                ("cuisine", "vietnamese"),
                ("stars", "5"),
                ("wikipedia", "en:Hanoi Opera House"),
            ],
        ));

        assert_eq!(poi.name, "Nhà hát Lớn");
        assert_eq!(poi.category, "attraction");
        assert_eq!(poi.description, "French colonial opera house");
        assert_eq!(poi.address, "1, Tràng Tiền, Hoàn Kiếm, Hà Nội, Hà Nội");
        assert_eq!(poi.phone, "+84 24 3933 0113");
        assert_eq!(poi.website, "https://hanoioperahouse.org.vn");
        assert_eq!(poi.email, "info@hanoioperahouse.org.vn");
        assert_eq!(poi.opening_hours, "Mo-Su 08:00-17:00");
        assert_eq!(poi.cuisine, "vietnamese");
        assert_eq!(poi.rating, "5");
        assert_eq!(poi.wikipedia, "en:Hanoi Opera House");
    }

    #[test]
    fn test_secondary_candidates() {
        let poi = normalize_element(element(
            3,
            &[
                ("name:en", "Cafe Giang"),
                ("amenity", "cafe"),
                ("note", "egg coffee"),
                ("contact:phone", "+84 98 989 2298"),
                ("contact:website", "https://cafegiang.vn"),
                ("contact:email", "hello@cafegiang.vn"),
            ],
        ));

        assert_eq!(poi.name, "Cafe Giang");
        assert_eq!(poi.category, "cafe");
        assert_eq!(poi.description, "egg coffee");
        assert_eq!(poi.phone, "+84 98 989 2298");
        assert_eq!(poi.website, "https://cafegiang.vn");
        assert_eq!(poi.email, "hello@cafegiang.vn");
    }

    #[test]
    fn test_parse_pois_truncates_in_order() {
        let response = OverpassResponse {
            elements: (1..=12)
                .map(|id| {
                    let name = format!("poi {id}");
                    element(id, &[("name", name.as_str())])
                })
                .collect(),
        };

        let pois = parse_pois(response, 5);
        let ids: Vec<i64> = pois.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(pois[4].name, "poi 5");
    }

    #[test]
    fn test_parse_pois_empty() {
        let pois = parse_pois(OverpassResponse { elements: vec![] }, 5);
        assert!(pois.is_empty());
    }
}
