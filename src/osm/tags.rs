use std::collections::HashMap;

/// Ordered tag keys for one output field, with a value used when none match
#[derive(Debug, Clone, Copy)]
pub struct TagFallback {
    pub keys: &'static [&'static str],
    pub default: &'static str,
}

impl TagFallback {
    const fn new(keys: &'static [&'static str]) -> Self {
        Self { keys, default: "" }
    }

    const fn or(keys: &'static [&'static str], default: &'static str) -> Self {
        Self { keys, default }
    }

    /// First non-empty candidate value, or the default
    pub fn resolve(&self, tags: &HashMap<String, String>) -> String {
        first_present(tags, self.keys)
            .unwrap_or(self.default)
            .to_string()
    }
}

pub const NAME: TagFallback = TagFallback::or(&["name", "name:en", "name:vi"], "Unnamed location");
pub const CATEGORY: TagFallback = TagFallback::or(
    &["tourism", "amenity", "historic", "leisure"],
    "Point of Interest",
);
pub const DESCRIPTION: TagFallback = TagFallback::new(&["description", "description:en", "note"]);
pub const PHONE: TagFallback = TagFallback::new(&["phone", "contact:phone"]);
pub const WEBSITE: TagFallback = TagFallback::new(&["website", "contact:website"]);
pub const EMAIL: TagFallback = TagFallback::new(&["email", "contact:email"]);
pub const OPENING_HOURS: TagFallback = TagFallback::new(&["opening_hours"]);
pub const CUISINE: TagFallback = TagFallback::new(&["cuisine"]);
pub const RATING: TagFallback = TagFallback::new(&["stars"]);
pub const WIKIPEDIA: TagFallback = TagFallback::new(&["wikipedia"]);

/// Address components, most specific first
const ADDRESS_PARTS: [&str; 5] = [
    "addr:housenumber",
    "addr:street",
    "addr:district",
    "addr:city",
    "addr:province",
];

const FREEFORM_ADDRESS: &str = "address";

/// Value of the first key that is present and non-empty.
///
/// An empty tag value counts as absent.
pub fn first_present<'a>(tags: &'a HashMap<String, String>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| tags.get(*key))
        .map(String::as_str)
        .find(|value| !value.is_empty())
}

/// Join the `addr:*` components that are present with ", ".
///
/// Falls back to a free-form `address` tag, then to an empty string.
pub fn format_address(tags: &HashMap<String, String>) -> String {
    let parts: Vec<&str> = ADDRESS_PARTS
        .iter()
        .filter_map(|key| tags.get(*key))
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .collect();

    if parts.is_empty() {
        first_present(tags, &[FREEFORM_ADDRESS])
            .unwrap_or_default()
            .to_string()
    } else {
        parts.join(", ")
    }
}
