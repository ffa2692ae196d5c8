use serde::{Deserialize, Serialize};

use crate::model::flightroute::FlightrouteRecord;

/// Aircraft details as returned to callers and stored in the cache
///
/// The photo fields are `None` when the persistent store has never been checked for a
/// photo, and an empty string once a photo lookup has been attempted without success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AircraftRecord {
    #[serde(rename = "type")]
    pub aircraft_type: String,
    pub icao_type: String,
    pub manufacturer: String,
    pub mode_s: String,
    pub registered_owner_country_iso_name: String,
    pub registered_owner_country_name: String,
    pub registered_owner_operator_flag_code: String,
    pub registered_owner: String,
    pub url_photo: Option<String>,
    pub url_photo_thumbnail: Option<String>,
}

impl AircraftRecord {
    pub fn has_photo(&self) -> bool {
        self.url_photo.is_some()
    }

    /// Attach photo urls, an absent photo is recorded as empty strings
    pub fn attach_photo(&mut self, photo: Option<&AircraftPhoto>) {
        self.url_photo = Some(photo.map(|p| p.url_photo.clone()).unwrap_or_default());
        self.url_photo_thumbnail = Some(
            photo
                .map(|p| p.url_photo_thumbnail.clone())
                .unwrap_or_default(),
        );
    }
}

/// A photo found for an aircraft by the photo scraper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AircraftPhoto {
    pub url_photo: String,
    pub url_photo_thumbnail: String,
    pub photographer: Option<String>,
}

/// Response body of the aircraft endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AircraftResponse {
    pub aircraft: AircraftRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flightroute: Option<FlightrouteRecord>,
}
