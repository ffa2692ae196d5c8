use serde::{Deserialize, Serialize};

/// Descriptor of a single airport on a flightroute
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirportRecord {
    pub country_iso_name: String,
    pub country_name: String,
    pub elevation: i32,
    pub iata_code: String,
    pub icao_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub municipality: String,
    pub name: String,
}

/// Flightroute details as returned to callers and stored in the cache
///
/// Empty strings and absent midpoint values are left out when serialized. Deserializing
/// restores them to their defaults so a cached record reads back identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct FlightrouteRecord {
    pub callsign: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub origin_airport_country_iso_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub origin_airport_country_name: String,
    pub origin_airport_elevation: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub origin_airport_iata_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub origin_airport_icao_code: String,
    pub origin_airport_latitude: f64,
    pub origin_airport_longitude: f64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub origin_airport_municipality: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub origin_airport_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub midpoint_airport_country_iso_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midpoint_airport_country_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midpoint_airport_elevation: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midpoint_airport_iata_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midpoint_airport_icao_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midpoint_airport_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midpoint_airport_longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midpoint_airport_municipality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midpoint_airport_name: Option<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub destination_airport_country_iso_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub destination_airport_country_name: String,
    pub destination_airport_elevation: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub destination_airport_iata_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub destination_airport_icao_code: String,
    pub destination_airport_latitude: f64,
    pub destination_airport_longitude: f64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub destination_airport_municipality: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub destination_airport_name: String,
}

impl FlightrouteRecord {
    /// Assemble a record from its airports
    pub fn new(
        callsign: String,
        origin: AirportRecord,
        midpoint: Option<AirportRecord>,
        destination: AirportRecord,
    ) -> Self {
        let mut record = Self {
            callsign,

            origin_airport_country_iso_name: origin.country_iso_name,
            origin_airport_country_name: origin.country_name,
            origin_airport_elevation: origin.elevation,
            origin_airport_iata_code: origin.iata_code,
            origin_airport_icao_code: origin.icao_code,
            origin_airport_latitude: origin.latitude,
            origin_airport_longitude: origin.longitude,
            origin_airport_municipality: origin.municipality,
            origin_airport_name: origin.name,

            destination_airport_country_iso_name: destination.country_iso_name,
            destination_airport_country_name: destination.country_name,
            destination_airport_elevation: destination.elevation,
            destination_airport_iata_code: destination.iata_code,
            destination_airport_icao_code: destination.icao_code,
            destination_airport_latitude: destination.latitude,
            destination_airport_longitude: destination.longitude,
            destination_airport_municipality: destination.municipality,
            destination_airport_name: destination.name,

            ..Default::default()
        };

        if let Some(midpoint) = midpoint {
            record.midpoint_airport_country_iso_name = Some(midpoint.country_iso_name);
            record.midpoint_airport_country_name = Some(midpoint.country_name);
            record.midpoint_airport_elevation = Some(midpoint.elevation);
            record.midpoint_airport_iata_code = Some(midpoint.iata_code);
            record.midpoint_airport_icao_code = Some(midpoint.icao_code);
            record.midpoint_airport_latitude = Some(midpoint.latitude);
            record.midpoint_airport_longitude = Some(midpoint.longitude);
            record.midpoint_airport_municipality = Some(midpoint.municipality);
            record.midpoint_airport_name = Some(midpoint.name);
        }

        record
    }

    /// Drop empty midpoint values so a partially populated midpoint never reaches callers
    pub fn strip_empty(mut self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        self.midpoint_airport_country_iso_name = keep(self.midpoint_airport_country_iso_name);
        self.midpoint_airport_country_name = keep(self.midpoint_airport_country_name);
        self.midpoint_airport_iata_code = keep(self.midpoint_airport_iata_code);
        self.midpoint_airport_icao_code = keep(self.midpoint_airport_icao_code);
        self.midpoint_airport_municipality = keep(self.midpoint_airport_municipality);
        self.midpoint_airport_name = keep(self.midpoint_airport_name);
        self
    }
}

/// Response body of the callsign endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CallsignResponse {
    pub flightroute: FlightrouteRecord,
}
