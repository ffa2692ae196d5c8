//! Best effort lookups against external aircraft photo and flightroute sources.
//!
//! Every failure is logged and reported as `None`: an unreachable source never fails a
//! lookup, it only leaves it unresolved.

pub mod extract;

pub use extract::{extract_route, ScrapedRoute};

use std::time::Duration;

use serde::Deserialize;

use crate::{
    model::aircraft::AircraftPhoto,
    server::{
        config::Config,
        error::Error,
        model::identifier::{Callsign, ModeS},
    },
};

const PHOTO_TIMEOUT: Duration = Duration::from_millis(1000);
const FLIGHTROUTE_TIMEOUT: Duration = Duration::from_millis(2500);

#[derive(Debug, Deserialize)]
struct PhotoResponse {
    status: u16,
    #[serde(default)]
    data: Vec<PhotoEntry>,
}

#[derive(Debug, Deserialize)]
struct PhotoEntry {
    image: Option<String>,
    photographer: Option<String>,
}

#[derive(Clone)]
pub struct Scraper {
    client: reqwest::Client,
    photo_url: String,
    callsign_url: String,
    allow_photo: bool,
    allow_flightroute: bool,
}

impl Scraper {
    /// Build a scraper against the given base urls, both sources enabled
    pub fn new(photo_url: impl Into<String>, callsign_url: impl Into<String>) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            photo_url: photo_url.into().trim_end_matches('/').to_string(),
            callsign_url: callsign_url.into().trim_end_matches('/').to_string(),
            allow_photo: true,
            allow_flightroute: true,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Ok(Self::new(&config.url_aircraft_photo, &config.url_callsign)?
            .allow_photo(config.allow_scrape_photo)
            .allow_flightroute(config.allow_scrape_flightroute))
    }

    pub fn allow_photo(mut self, allow: bool) -> Self {
        self.allow_photo = allow;
        self
    }

    pub fn allow_flightroute(mut self, allow: bool) -> Self {
        self.allow_flightroute = allow;
        self
    }

    /// Look up a photo of the aircraft
    ///
    /// The thumbnail is the image returned by the source, the full size url is derived from
    /// it by dropping the `/thumbnails/` path segment.
    pub async fn fetch_photo(&self, mode_s: &ModeS) -> Option<AircraftPhoto> {
        if !self.allow_photo {
            return None;
        }

        let url = format!("{}/ac_thumb.json", self.photo_url);
        let request = self
            .client
            .get(url)
            .query(&[("m", mode_s.as_str()), ("n", "1")])
            .timeout(PHOTO_TIMEOUT);

        let response = match Self::send_json::<PhotoResponse>(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Failed to fetch photo for aircraft {}: {}", mode_s, e);
                return None;
            }
        };

        if response.status != 200 {
            return None;
        }

        let entry = response.data.into_iter().next()?;
        let image = entry.image.filter(|image| !image.is_empty())?;

        Some(AircraftPhoto {
            url_photo: image.replacen("/thumbnails/", "/", 1),
            url_photo_thumbnail: image,
            photographer: entry.photographer,
        })
    }

    /// Fetch the raw text of the flightroute page for a callsign
    pub async fn fetch_route_text(&self, callsign: &Callsign) -> Option<String> {
        if !self.allow_flightroute {
            return None;
        }

        let request = self
            .client
            .get(format!("{}/{}", self.callsign_url, callsign))
            .timeout(FLIGHTROUTE_TIMEOUT);

        match Self::send_text(request).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!("Failed to fetch flightroute for callsign {}: {}", callsign, e);
                None
            }
        }
    }

    /// Fetch and extract the airports flown under a callsign
    pub async fn fetch_route(&self, callsign: &Callsign) -> ScrapedRoute {
        match self.fetch_route_text(callsign).await {
            Some(text) => extract_route(&text),
            None => ScrapedRoute::default(),
        }
    }

    async fn send_json<T: serde::de::DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, Error> {
        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn send_text(request: reqwest::RequestBuilder) -> Result<String, Error> {
        let response = request.send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
