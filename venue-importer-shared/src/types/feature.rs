//! GeoJSON feature types for the school source dataset.
//!
//! Only the fields the importer reads are modeled. Every property is optional
//! and read leniently: a missing field, a `null`, or a value of the wrong JSON
//! type all become `None`, so a bad record is rejected on its own rather than
//! failing the parse of the whole collection.

use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};

/// The feature collection returned by the source endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Create a collection from the given features.
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Number of features in the collection.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the collection holds no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// A single school record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Feature {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub properties: FeatureProperties,
    #[serde(default, deserialize_with = "lenient")]
    pub geometry: Option<Geometry>,
}

/// Properties of a school record, named as the source publishes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FeatureProperties {
    /// Numeric school identifier.
    #[serde(rename = "SCH_ID", default, deserialize_with = "school_id")]
    pub school_id: Option<i64>,
    /// Display name.
    #[serde(rename = "SCH_LABEL", default, deserialize_with = "lenient")]
    pub label: Option<String>,
    /// Free-text street address, e.g. "10 Main Street".
    #[serde(rename = "ADDRESS", default, deserialize_with = "lenient")]
    pub address: Option<String>,
    /// Postal code, kept verbatim (leading zeros matter).
    #[serde(rename = "ZIPCODE", default, deserialize_with = "lenient")]
    pub zipcode: Option<String>,
}

/// Point geometry. Coordinates are `[longitude, latitude]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Geometry {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub coordinates: Vec<f64>,
}

/// A value of type `T`, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(#[allow(dead_code)] IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Lenient::Valid(value) => Some(value),
            Lenient::Invalid(_) => None,
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Lenient::<T>::deserialize(deserializer).map(Lenient::into_option)
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    lenient(deserializer).map(Option::unwrap_or_default)
}

/// The shapes a school id is published in.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSchoolId {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawSchoolId {
    /// The id as an integer. Floats must be whole, text must be a decimal integer.
    fn into_integer(self) -> Option<i64> {
        match self {
            RawSchoolId::Integer(id) => Some(id),
            RawSchoolId::Float(id)
                if id.is_finite()
                    && id.fract() == 0.0
                    && id >= i64::MIN as f64
                    && id < i64::MAX as f64 =>
            {
                Some(id as i64)
            }
            RawSchoolId::Float(_) => None,
            RawSchoolId::Text(id) => id.trim().parse().ok(),
        }
    }
}

fn school_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient::<D, RawSchoolId>(deserializer).map(|id| id.and_then(RawSchoolId::into_integer))
}

impl Feature {
    /// Build a point feature.
    pub fn point(
        school_id: i64,
        label: impl Into<String>,
        address: impl Into<String>,
        zipcode: impl Into<String>,
        lon: f64,
        lat: f64,
    ) -> Self {
        Self {
            properties: FeatureProperties {
                school_id: Some(school_id),
                label: Some(label.into()),
                address: Some(address.into()),
                zipcode: Some(zipcode.into()),
            },
            geometry: Some(Geometry {
                coordinates: vec![lon, lat],
            }),
        }
    }

    /// The `(longitude, latitude)` pair, if the geometry carries one.
    pub fn lon_lat(&self) -> Option<(f64, f64)> {
        match self.geometry.as_ref()?.coordinates.as_slice() {
            [lon, lat, ..] => Some((*lon, *lat)),
            _ => None,
        }
    }
}
