//! Response model of the geocoding endpoint.
//!
//! # Design
//! Each nested JSON object gets its own named type so pieces can be built and
//! asserted on independently. All structs use `#[serde(default)]`: a missing
//! field decodes to the zero value of its type rather than failing, and
//! unknown fields are ignored. Every field also goes through `null_default`,
//! so an explicit `null` decodes to the same zero value as a missing field.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` as `T::default()`.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A decoded response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Response {
    #[serde(deserialize_with = "null_default")]
    pub documentation: String,
    #[serde(deserialize_with = "null_default")]
    pub licenses: Vec<License>,
    #[serde(deserialize_with = "null_default")]
    pub rate: Rate,
    #[serde(deserialize_with = "null_default")]
    pub results: Vec<GeocodeResult>,
    #[serde(deserialize_with = "null_default")]
    pub status: Status,
    #[serde(deserialize_with = "null_default")]
    pub stay_informed: StayInformed,
    #[serde(deserialize_with = "null_default")]
    pub thanks: String,
    #[serde(deserialize_with = "null_default")]
    pub timestamp: Timestamp,
    #[serde(deserialize_with = "null_default")]
    pub total_results: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
}

/// Rate-limit counters. Only present for free-trial keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rate {
    #[serde(deserialize_with = "null_default")]
    pub limit: i64,
    #[serde(deserialize_with = "null_default")]
    pub remaining: i64,
    /// Unix timestamp at which `remaining` resets.
    #[serde(deserialize_with = "null_default")]
    pub reset: i64,
}

/// Application-level status embedded in every body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    #[serde(deserialize_with = "null_default")]
    pub code: i64,
    #[serde(deserialize_with = "null_default")]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StayInformed {
    #[serde(deserialize_with = "null_default")]
    pub blog: String,
    #[serde(deserialize_with = "null_default")]
    pub mastodon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timestamp {
    #[serde(deserialize_with = "null_default")]
    pub created_http: String,
    #[serde(deserialize_with = "null_default")]
    pub created_unix: i64,
}

/// One candidate match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodeResult {
    #[serde(deserialize_with = "null_default")]
    pub annotations: Annotations,
    #[serde(deserialize_with = "null_default")]
    pub bounds: Bounds,
    #[serde(deserialize_with = "null_default")]
    pub components: Components,
    /// 0 (unknown) to 10 (most precise), derived from the bounding box size.
    #[serde(deserialize_with = "null_default")]
    pub confidence: i32,
    #[serde(deserialize_with = "null_default")]
    pub formatted: String,
    #[serde(deserialize_with = "null_default")]
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    #[serde(deserialize_with = "null_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_default")]
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    #[serde(deserialize_with = "null_default")]
    pub northeast: Geometry,
    #[serde(deserialize_with = "null_default")]
    pub southwest: Geometry,
}

/// Structured address parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Components {
    #[serde(rename = "ISO_3166-1_alpha-2", deserialize_with = "null_default")]
    pub iso_3166_1_alpha_2: String,
    #[serde(rename = "ISO_3166-1_alpha-3", deserialize_with = "null_default")]
    pub iso_3166_1_alpha_3: String,
    #[serde(rename = "ISO_3166-2", deserialize_with = "null_default")]
    pub iso_3166_2: Vec<String>,
    #[serde(rename = "_category", deserialize_with = "null_default")]
    pub category: String,
    #[serde(rename = "_type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub city: String,
    #[serde(deserialize_with = "null_default")]
    pub city_district: String,
    #[serde(deserialize_with = "null_default")]
    pub continent: String,
    #[serde(deserialize_with = "null_default")]
    pub country: String,
    #[serde(deserialize_with = "null_default")]
    pub country_code: String,
    #[serde(deserialize_with = "null_default")]
    pub county: String,
    #[serde(deserialize_with = "null_default")]
    pub house_number: String,
    #[serde(deserialize_with = "null_default")]
    pub municipality: String,
    #[serde(deserialize_with = "null_default")]
    pub neighbourhood: String,
    #[serde(deserialize_with = "null_default")]
    pub office: String,
    #[serde(deserialize_with = "null_default")]
    pub pedestrian: String,
    #[serde(deserialize_with = "null_default")]
    pub political_union: String,
    #[serde(deserialize_with = "null_default")]
    pub postcode: String,
    #[serde(deserialize_with = "null_default")]
    pub region: String,
    #[serde(deserialize_with = "null_default")]
    pub road: String,
    #[serde(deserialize_with = "null_default")]
    pub state: String,
    #[serde(deserialize_with = "null_default")]
    pub state_code: String,
    #[serde(deserialize_with = "null_default")]
    pub suburb: String,
    #[serde(deserialize_with = "null_default")]
    pub town: String,
    #[serde(deserialize_with = "null_default")]
    pub village: String,
}

/// Extra information about a result. Absent when `no_annotations` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    #[serde(rename = "DMS", deserialize_with = "null_default")]
    pub dms: Dms,
    #[serde(rename = "MGRS", deserialize_with = "null_default")]
    pub mgrs: String,
    #[serde(rename = "Maidenhead", deserialize_with = "null_default")]
    pub maidenhead: String,
    #[serde(rename = "Mercator", deserialize_with = "null_default")]
    pub mercator: Mercator,
    #[serde(rename = "NUTS", deserialize_with = "null_default")]
    pub nuts: Nuts,
    #[serde(rename = "OSM", deserialize_with = "null_default")]
    pub osm: Osm,
    #[serde(rename = "UN_M49", deserialize_with = "null_default")]
    pub un_m49: UnM49,
    #[serde(deserialize_with = "null_default")]
    pub callingcode: i32,
    #[serde(deserialize_with = "null_default")]
    pub currency: Currency,
    #[serde(deserialize_with = "null_default")]
    pub flag: String,
    #[serde(deserialize_with = "null_default")]
    pub geohash: String,
    /// Bearing to the Kaaba in degrees.
    #[serde(deserialize_with = "null_default")]
    pub qibla: f64,
    #[serde(deserialize_with = "null_default")]
    pub roadinfo: RoadInfo,
    #[serde(deserialize_with = "null_default")]
    pub sun: Sun,
    #[serde(deserialize_with = "null_default")]
    pub timezone: Timezone,
    #[serde(deserialize_with = "null_default")]
    pub what3words: What3Words,
    #[serde(deserialize_with = "null_default")]
    pub wikidata: String,
}

/// Degrees, minutes and seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dms {
    #[serde(deserialize_with = "null_default")]
    pub lat: String,
    #[serde(deserialize_with = "null_default")]
    pub lng: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mercator {
    #[serde(deserialize_with = "null_default")]
    pub x: f64,
    #[serde(deserialize_with = "null_default")]
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nuts {
    #[serde(rename = "NUTS0", deserialize_with = "null_default")]
    pub nuts0: NutsCode,
    #[serde(rename = "NUTS1", deserialize_with = "null_default")]
    pub nuts1: NutsCode,
    #[serde(rename = "NUTS2", deserialize_with = "null_default")]
    pub nuts2: NutsCode,
    #[serde(rename = "NUTS3", deserialize_with = "null_default")]
    pub nuts3: NutsCode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutsCode {
    #[serde(deserialize_with = "null_default")]
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Osm {
    #[serde(deserialize_with = "null_default")]
    pub edit_url: String,
    #[serde(deserialize_with = "null_default")]
    pub note_url: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
}

/// UN M49 region codes, keyed by region name (`WORLD`, `EUROPE`, `DE`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnM49 {
    #[serde(deserialize_with = "null_default")]
    pub regions: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_default")]
    pub statistical_groupings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    #[serde(deserialize_with = "null_default")]
    pub alternate_symbols: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub decimal_mark: String,
    #[serde(deserialize_with = "null_default")]
    pub html_entity: String,
    #[serde(deserialize_with = "null_default")]
    pub iso_code: String,
    #[serde(deserialize_with = "null_default")]
    pub iso_numeric: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub smallest_denomination: i64,
    #[serde(deserialize_with = "null_default")]
    pub subunit: String,
    #[serde(deserialize_with = "null_default")]
    pub subunit_to_unit: i64,
    #[serde(deserialize_with = "null_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_default")]
    pub symbol_first: i32,
    #[serde(deserialize_with = "null_default")]
    pub thousands_separator: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadInfo {
    #[serde(deserialize_with = "null_default")]
    pub drive_on: String,
    #[serde(deserialize_with = "null_default")]
    pub road: String,
    #[serde(deserialize_with = "null_default")]
    pub speed_in: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sun {
    #[serde(deserialize_with = "null_default")]
    pub rise: SunTimes,
    #[serde(deserialize_with = "null_default")]
    pub set: SunTimes,
}

/// Unix timestamps for each twilight definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunTimes {
    #[serde(deserialize_with = "null_default")]
    pub apparent: i64,
    #[serde(deserialize_with = "null_default")]
    pub astronomical: i64,
    #[serde(deserialize_with = "null_default")]
    pub civil: i64,
    #[serde(deserialize_with = "null_default")]
    pub nautical: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timezone {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub now_in_dst: i32,
    #[serde(deserialize_with = "null_default")]
    pub offset_sec: i32,
    #[serde(deserialize_with = "null_default")]
    pub offset_string: String,
    #[serde(deserialize_with = "null_default")]
    pub short_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct What3Words {
    #[serde(deserialize_with = "null_default")]
    pub words: String,
}
