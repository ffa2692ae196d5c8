//! Fixture values with realistic defaults.

/// Aircraft row, along with the country it is registered in and an optional photo
#[derive(Debug, Clone)]
pub struct AircraftFixture {
    pub mode_s: String,
    pub registered_owner: String,
    pub registered_owner_operator_flag_code: String,
    pub country_name: String,
    pub country_iso_name: String,
    pub manufacturer: String,
    pub aircraft_type: String,
    pub icao_type: String,
    /// (url_photo, url_photo_thumbnail)
    pub photo: Option<(String, String)>,
}

impl AircraftFixture {
    pub fn with_photo(mut self) -> Self {
        self.photo = Some((
            format!("https://photos.example.com/001/{}.jpg", self.mode_s),
            format!("https://photos.example.com/thumbnails/001/{}.jpg", self.mode_s),
        ));
        self
    }
}

/// Airport row, along with its country
#[derive(Debug, Clone)]
pub struct AirportFixture {
    pub icao_code: String,
    pub iata_code: String,
    pub name: String,
    pub municipality: String,
    pub country_name: String,
    pub country_iso_name: String,
    pub elevation: i32,
    pub latitude: f64,
    pub longitude: f64,
}

/// Create an aircraft fixture with default values
pub fn aircraft(mode_s: &str) -> AircraftFixture {
    AircraftFixture {
        mode_s: mode_s.to_uppercase(),
        registered_owner: "United Airlines".to_string(),
        registered_owner_operator_flag_code: "UAL".to_string(),
        country_name: "United States".to_string(),
        country_iso_name: "US".to_string(),
        manufacturer: "Boeing".to_string(),
        aircraft_type: "737-924ER".to_string(),
        icao_type: "B739".to_string(),
        photo: None,
    }
}

/// Create an airport fixture, well known codes get their real details
pub fn airport(icao_code: &str) -> AirportFixture {
    let (iata_code, name, municipality, country_name, country_iso_name, elevation, latitude, longitude) =
        match icao_code {
            "EIDW" => ("DUB", "Dublin Airport", "Dublin", "Ireland", "IE", 242, 53.421299, -6.27007),
            "EGSS" => (
                "STN",
                "London Stansted Airport",
                "London",
                "United Kingdom",
                "GB",
                348,
                51.884998,
                0.235,
            ),
            "LPPT" => (
                "LIS",
                "Humberto Delgado Airport",
                "Lisbon",
                "Portugal",
                "PT",
                374,
                38.7813,
                -9.13592,
            ),
            _ => ("", "Test Airport", "Testville", "Testland", "TL", 0, 0.0, 0.0),
        };

    AirportFixture {
        icao_code: icao_code.to_string(),
        iata_code: iata_code.to_string(),
        name: name.to_string(),
        municipality: municipality.to_string(),
        country_name: country_name.to_string(),
        country_iso_name: country_iso_name.to_string(),
        elevation,
        latitude,
        longitude,
    }
}

/// Page text as served by the flightroute source, with the airports as `"icao":"XXXX"` tokens
pub fn route_text(origin: &str, destination: &str) -> String {
    format!(
        r#"<html><script>var flight = {{"origin":{{"icao":"{}","name":"Origin"}},"destination":{{"icao":"{}","name":"Destination"}}}};</script></html>"#,
        origin, destination
    )
}

/// Photo source response body containing a single image
pub fn photo_json(image: &str, photographer: &str) -> serde_json::Value {
    serde_json::json!({
        "status": 200,
        "count": 1,
        "data": [{
            "image": image,
            "link": "https://photos.example.com/photo/1",
            "photographer": photographer,
        }]
    })
}

/// Photo source response body without images
pub fn photo_json_empty() -> serde_json::Value {
    serde_json::json!({ "status": 200, "count": 0, "data": [] })
}
