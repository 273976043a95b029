//! Exposure report — what a language model is allowed to know about the home.
//!
//! The report groups exposed entities into one bucket per split-out domain
//! (scripts and calendars by default) plus a catch-all bucket stored under
//! [`CATCH_ALL_KEY`]. Each entity is described by an [`ExposedEntityInfo`]
//! whose attributes have been passed through the allow-list and normalized.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::entity::{AttributeValue, EntityState};
use crate::error::{AssistError, ValidationError};
use crate::id::EntityId;

/// Attribute names that are ever copied into the report.
pub const ALLOWED_ATTRIBUTES: [&str; 13] = [
    "temperature",
    "current_temperature",
    "temperature_unit",
    "brightness",
    "humidity",
    "unit_of_measurement",
    "device_class",
    "current_position",
    "percentage",
    "volume_level",
    "media_title",
    "media_artist",
    "media_album_name",
];

/// Key of the catch-all bucket. No real entity domain uses it.
pub const CATCH_ALL_KEY: &str = "entities";

/// Domains split out of the catch-all bucket unless configured otherwise.
pub const DEFAULT_SPLIT_DOMAINS: [&str; 2] = ["script", "calendar"];

const BRIGHTNESS: &str = "brightness";

/// Whether `name` is on the attribute allow-list.
#[must_use]
pub fn is_allowed_attribute(name: &str) -> bool {
    ALLOWED_ATTRIBUTES.contains(&name)
}

/// Rescale a 0–255 brightness to a 0–100 percentage.
///
/// Rounds half to even. Returns `None` for non-finite input.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn brightness_percent(raw: f64) -> Option<i64> {
    let scaled = (raw / 255.0 * 100.0).round_ties_even();
    scaled.is_finite().then_some(scaled as i64)
}

/// Normalize one allow-listed attribute value for the report.
///
/// Numeric brightness is rescaled to a percentage, integers and
/// labeled/decimal values become their canonical string, everything else is
/// copied unchanged.
#[must_use]
pub fn normalize_attribute(name: &str, value: &AttributeValue) -> AttributeValue {
    if name == BRIGHTNESS {
        if let Some(percent) = value.as_f64().and_then(brightness_percent) {
            return AttributeValue::Int(percent);
        }
    }
    value
        .canonical_string()
        .map_or_else(|| value.clone(), AttributeValue::String)
}

/// Keep only allow-listed attributes, normalized, in their original order.
#[must_use]
pub fn filter_attributes(
    attributes: &IndexMap<String, AttributeValue>,
) -> IndexMap<String, AttributeValue> {
    attributes
        .iter()
        .filter(|(name, _)| is_allowed_attribute(name))
        .map(|(name, value)| (name.clone(), normalize_attribute(name, value)))
        .collect()
}

/// Description of one exposed entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposedEntityInfo {
    /// Display name followed by aliases, comma-joined.
    pub names: String,
    pub domain: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Area name followed by area aliases, comma-joined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub areas: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<IndexMap<String, AttributeValue>>,
}

impl ExposedEntityInfo {
    /// Describe `state` with the given aliases and resolved area names.
    ///
    /// `areas` is set only when `area_names` is non-empty and `attributes`
    /// only when at least one attribute survives the allow-list.
    #[must_use]
    pub fn describe<'a>(
        state: &EntityState,
        aliases: &[String],
        area_names: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let display_name = state.display_name();
        let names = std::iter::once(display_name.as_str())
            .chain(aliases.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(", ");

        let area_names: Vec<&str> = area_names.into_iter().collect();
        let areas = (!area_names.is_empty()).then(|| area_names.join(", "));

        let attributes = filter_attributes(&state.attributes);
        let attributes = (!attributes.is_empty()).then_some(attributes);

        Self {
            names,
            domain: state.domain().to_string(),
            state: state.state.clone(),
            description: None,
            areas,
            attributes,
        }
    }
}

/// Which domains get their own bucket in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposureOptions {
    split_domains: Vec<String>,
}

impl ExposureOptions {
    /// Build options splitting out the given domains.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ReservedDomain`] when a domain equals
    /// [`CATCH_ALL_KEY`].
    pub fn new<I, S>(split_domains: I) -> Result<Self, AssistError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut domains: Vec<String> = Vec::new();
        for domain in split_domains {
            let domain = domain.into();
            if domain == CATCH_ALL_KEY {
                return Err(ValidationError::ReservedDomain(domain).into());
            }
            if !domains.contains(&domain) {
                domains.push(domain);
            }
        }
        Ok(Self {
            split_domains: domains,
        })
    }

    #[must_use]
    pub fn split_domains(&self) -> &[String] {
        &self.split_domains
    }
}

impl Default for ExposureOptions {
    fn default() -> Self {
        Self {
            split_domains: DEFAULT_SPLIT_DOMAINS.iter().map(ToString::to_string).collect(),
        }
    }
}

type Bucket = IndexMap<EntityId, ExposedEntityInfo>;

/// The document handed to the prompt builder.
///
/// Serializes as `{"<domain>": {...}, ..., "entities": {...}}` with the
/// split-out buckets first, in configured order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExposureReport {
    #[serde(flatten)]
    domains: IndexMap<String, Bucket>,
    entities: Bucket,
}

impl ExposureReport {
    /// An empty report with one bucket per split-out domain.
    #[must_use]
    pub fn new(options: &ExposureOptions) -> Self {
        Self {
            domains: options
                .split_domains()
                .iter()
                .map(|domain| (domain.clone(), Bucket::new()))
                .collect(),
            entities: Bucket::new(),
        }
    }

    /// Route `info` into its domain bucket, or the catch-all.
    pub fn insert(&mut self, entity_id: EntityId, info: ExposedEntityInfo) {
        match self.domains.get_mut(info.domain.as_str()) {
            Some(bucket) => bucket.insert(entity_id, info),
            None => self.entities.insert(entity_id, info),
        };
    }

    /// The bucket of a split-out domain.
    #[must_use]
    pub fn domain(&self, domain: &str) -> Option<&IndexMap<EntityId, ExposedEntityInfo>> {
        self.domains.get(domain)
    }

    /// The catch-all bucket.
    #[must_use]
    pub fn entities(&self) -> &IndexMap<EntityId, ExposedEntityInfo> {
        &self.entities
    }

    /// Find an entity in whichever bucket holds it.
    #[must_use]
    pub fn get(&self, entity_id: &str) -> Option<&ExposedEntityInfo> {
        self.domains
            .values()
            .find_map(|bucket| bucket.get(entity_id))
            .or_else(|| self.entities.get(entity_id))
    }

    #[must_use]
    pub fn contains(&self, entity_id: &str) -> bool {
        self.get(entity_id).is_some()
    }

    /// Number of exposed entities across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.domains.values().map(IndexMap::len).sum::<usize>() + self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_AREAS: [&str; 0] = [];

    fn light(brightness: AttributeValue) -> EntityState {
        EntityState::builder()
            .entity_id("light.one")
            .name("Light 1")
            .state("on")
            .attribute("brightness", brightness)
            .build()
            .unwrap()
    }

    #[test]
    fn should_scale_brightness_bounds() {
        assert_eq!(brightness_percent(255.0), Some(100));
        assert_eq!(brightness_percent(0.0), Some(0));
    }

    #[test]
    fn should_round_brightness_to_nearest() {
        assert_eq!(brightness_percent(128.0), Some(50));
        assert_eq!(brightness_percent(129.0), Some(51));
        assert_eq!(brightness_percent(127.5), Some(50));
    }

    #[test]
    fn should_round_brightness_ties_to_even() {
        // 6.375 -> 2.5, 11.475 -> 4.5, 16.575 -> 6.5, 19.125 -> 7.5, 26.775 -> 10.5
        assert_eq!(brightness_percent(6.375), Some(2));
        assert_eq!(brightness_percent(11.475), Some(4));
        assert_eq!(brightness_percent(16.575), Some(6));
        assert_eq!(brightness_percent(19.125), Some(8));
        assert_eq!(brightness_percent(26.775), Some(10));
    }

    #[test]
    fn should_reject_non_finite_brightness() {
        assert_eq!(brightness_percent(f64::NAN), None);
        assert_eq!(brightness_percent(f64::INFINITY), None);
    }

    #[test]
    fn should_rescale_numeric_brightness_to_int() {
        assert_eq!(
            normalize_attribute("brightness", &AttributeValue::Int(255)),
            AttributeValue::Int(100)
        );
        assert_eq!(
            normalize_attribute("brightness", &AttributeValue::Float(127.5)),
            AttributeValue::Int(50)
        );
        assert_eq!(
            normalize_attribute("brightness", &AttributeValue::Float(6.375)),
            AttributeValue::Int(2)
        );
    }

    #[test]
    fn should_pass_through_non_numeric_brightness() {
        let value = AttributeValue::String("bright".to_string());
        assert_eq!(normalize_attribute("brightness", &value), value);
    }

    #[test]
    fn should_pass_through_non_finite_brightness() {
        let value = AttributeValue::Float(f64::INFINITY);
        assert_eq!(normalize_attribute("brightness", &value), value);
    }

    #[test]
    fn should_stringify_decimal_brightness_instead_of_scaling() {
        let value = AttributeValue::Decimal("128".to_string());
        assert_eq!(
            normalize_attribute("brightness", &value),
            AttributeValue::String("128".to_string())
        );
    }

    #[test]
    fn should_stringify_int_labeled_and_decimal_values() {
        assert_eq!(
            normalize_attribute("current_position", &AttributeValue::Int(40)),
            AttributeValue::String("40".to_string())
        );
        assert_eq!(
            normalize_attribute(
                "temperature_unit",
                &AttributeValue::Labeled("°C".to_string())
            ),
            AttributeValue::String("°C".to_string())
        );
        assert_eq!(
            normalize_attribute("temperature", &AttributeValue::Decimal("21.50".to_string())),
            AttributeValue::String("21.50".to_string())
        );
    }

    #[test]
    fn should_copy_floats_bools_and_strings_unchanged() {
        for value in [
            AttributeValue::Float(0.35),
            AttributeValue::Bool(true),
            AttributeValue::String("Abbey Road".to_string()),
        ] {
            assert_eq!(normalize_attribute("volume_level", &value), value);
        }
    }

    #[test]
    fn should_drop_attributes_outside_allow_list() {
        let state = EntityState::builder()
            .entity_id("media_player.den")
            .attribute("friendly_name", AttributeValue::String("Den".to_string()))
            .attribute("media_title", AttributeValue::String("Song".to_string()))
            .attribute("entity_picture", AttributeValue::String("/x.png".to_string()))
            .build()
            .unwrap();

        let filtered = filter_attributes(&state.attributes);
        let keys: Vec<&str> = filtered.keys().map(String::as_str).collect();
        assert_eq!(keys, ["media_title"]);
    }

    #[test]
    fn should_join_display_name_and_aliases() {
        let info = ExposedEntityInfo::describe(
            &light(AttributeValue::Int(0)),
            &["Lamp A".to_string(), "Bedroom Lamp".to_string()],
            NO_AREAS,
        );
        assert_eq!(info.names, "Light 1, Lamp A, Bedroom Lamp");
    }

    #[test]
    fn should_omit_areas_and_description_when_absent() {
        let info = ExposedEntityInfo::describe(&light(AttributeValue::Int(0)), &[], NO_AREAS);
        assert_eq!(info.names, "Light 1");
        assert!(info.areas.is_none());
        assert!(info.description.is_none());
    }

    #[test]
    fn should_omit_attributes_when_none_survive() {
        let state = EntityState::builder()
            .entity_id("switch.fan")
            .state("off")
            .attribute("icon", AttributeValue::String("mdi:fan".to_string()))
            .build()
            .unwrap();

        let info = ExposedEntityInfo::describe(&state, &[], NO_AREAS);
        assert!(info.attributes.is_none());

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"names": "fan", "domain": "switch", "state": "off"})
        );
    }

    #[test]
    fn should_join_area_names() {
        let info = ExposedEntityInfo::describe(
            &light(AttributeValue::Int(255)),
            &[],
            ["Bedroom", "Master"],
        );
        assert_eq!(info.areas.as_deref(), Some("Bedroom, Master"));
        assert_eq!(
            info.attributes.unwrap().get("brightness"),
            Some(&AttributeValue::Int(100))
        );
    }

    #[test]
    fn should_reject_reserved_split_domain() {
        let result = ExposureOptions::new(["script", CATCH_ALL_KEY]);
        assert!(matches!(
            result,
            Err(AssistError::Validation(ValidationError::ReservedDomain(_)))
        ));
    }

    #[test]
    fn should_default_to_script_and_calendar() {
        let options = ExposureOptions::default();
        assert_eq!(options.split_domains(), ["script", "calendar"]);
    }

    #[test]
    fn should_dedupe_split_domains() {
        let options = ExposureOptions::new(["script", "script", "todo"]).unwrap();
        assert_eq!(options.split_domains(), ["script", "todo"]);
    }

    #[test]
    fn should_route_into_split_bucket_or_catch_all() {
        let mut report = ExposureReport::new(&ExposureOptions::default());
        let script = EntityState::builder()
            .entity_id("script.bedtime")
            .state("off")
            .build()
            .unwrap();
        let lamp = light(AttributeValue::Int(10));

        report.insert(
            script.entity_id.clone(),
            ExposedEntityInfo::describe(&script, &[], NO_AREAS),
        );
        report.insert(
            lamp.entity_id.clone(),
            ExposedEntityInfo::describe(&lamp, &[], NO_AREAS),
        );

        assert!(report.domain("script").unwrap().contains_key("script.bedtime"));
        assert!(report.entities().contains_key("light.one"));
        assert!(report.domain("calendar").unwrap().is_empty());
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn should_serialize_split_buckets_before_catch_all() {
        let report = ExposureReport::new(&ExposureOptions::default());
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"script":{},"calendar":{},"entities":{}}"#);
    }
}
