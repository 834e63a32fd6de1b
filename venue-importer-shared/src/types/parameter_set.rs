//! Parameters sent to the document service for one record.

use serde::{Deserialize, Serialize};

/// The flat parameter set the document service synthesizes a venue from.
///
/// All seven values are always populated. `pairs` yields them in the order the
/// document service documents them: `id, name, lat, lon, house_number,
/// street, postcode`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParameterSet {
    pub id: String,
    pub name: String,
    pub lat: String,
    pub lon: String,
    pub house_number: String,
    pub street: String,
    pub postcode: String,
}

impl ParameterSet {
    /// Parameter names in serialization order.
    pub const KEYS: [&'static str; 7] = [
        "id",
        "name",
        "lat",
        "lon",
        "house_number",
        "street",
        "postcode",
    ];

    /// Name/value pairs in serialization order.
    pub fn pairs(&self) -> [(&'static str, &str); 7] {
        [
            ("id", self.id.as_str()),
            ("name", self.name.as_str()),
            ("lat", self.lat.as_str()),
            ("lon", self.lon.as_str()),
            ("house_number", self.house_number.as_str()),
            ("street", self.street.as_str()),
            ("postcode", self.postcode.as_str()),
        ]
    }
}
