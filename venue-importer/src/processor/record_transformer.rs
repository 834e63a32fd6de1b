//! Record transformer implementation.
//!
//! Extracts the id, name, coordinates, address parts and postcode of a school
//! feature into a `ParameterSet`.

use lazy_static::lazy_static;
use regex::Regex;

use venue_importer_shared::{FailureReason, Feature, ParameterSet};

lazy_static! {
    // house number, one space, street; ASCII digits only
    static ref ADDRESS_PATTERN: Regex = Regex::new(r"^([0-9]+) (.+)$").unwrap();
}

/// Split an address into `(house_number, street)`.
///
/// The whole address must match. `street` is the full matched address
/// (e.g. `"10 Main Street"` gives `("10", "10 Main Street")`); downstream
/// venue documents are keyed on that form.
pub fn parse_address(address: &str) -> Option<(String, String)> {
    let captures = ADDRESS_PATTERN.captures(address)?;
    let house_number = captures.get(1)?.as_str().to_string();
    let street = captures.get(0)?.as_str().to_string();
    Some((house_number, street))
}

/// The feature's identifier as a plain decimal string.
pub fn record_id(feature: &Feature) -> Option<String> {
    feature.properties.school_id.map(|id| id.to_string())
}

/// Transformer from school features to parameter sets.
///
/// The transformer is responsible for:
/// - Rejecting features whose address is not "number street"
/// - Rejecting features missing a required field, including a blank name
/// - Rendering ids and coordinates as strings
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordTransformer;

impl RecordTransformer {
    /// Create a new record transformer.
    pub fn new() -> Self {
        Self
    }

    /// Transform a feature, dropping it if it cannot be synthesized.
    pub fn transform(&self, feature: &Feature) -> Option<ParameterSet> {
        self.try_transform(feature).ok()
    }

    /// Transform a feature, naming the reason when it cannot be synthesized.
    pub fn try_transform(&self, feature: &Feature) -> Result<ParameterSet, FailureReason> {
        let properties = &feature.properties;

        let id = record_id(feature).ok_or_else(|| FailureReason::missing_field("SCH_ID"))?;

        let address = properties
            .address
            .as_deref()
            .ok_or_else(|| FailureReason::missing_field("ADDRESS"))?;
        let (house_number, street) =
            parse_address(address).ok_or_else(|| FailureReason::address_unparseable(address))?;

        // the document service refuses a blank name
        let name = properties
            .label
            .clone()
            .filter(|label| !label.trim().is_empty())
            .ok_or_else(|| FailureReason::missing_field("SCH_LABEL"))?;
        let postcode = properties
            .zipcode
            .clone()
            .ok_or_else(|| FailureReason::missing_field("ZIPCODE"))?;
        let (lon, lat) = feature
            .lon_lat()
            .ok_or_else(|| FailureReason::missing_field("geometry.coordinates"))?;

        Ok(ParameterSet {
            id,
            name,
            lat: lat.to_string(),
            lon: lon.to_string(),
            house_number,
            street,
            postcode,
        })
    }
}
