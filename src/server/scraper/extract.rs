//! Airport extraction from flightroute page text.

use std::sync::LazyLock;

use fancy_regex::Regex;

use crate::server::model::identifier::AirportIcao;

/// Characters searched for the destination, counted from the start of the origin token
const DESTINATION_WINDOW: usize = 1500;

static ICAO_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""icao":"([A-Z]{3,4})""#).expect("airport token pattern is valid")
});

/// Origin and destination airports found in scraped text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapedRoute {
    pub origin: Option<AirportIcao>,
    pub destination: Option<AirportIcao>,
}

impl ScrapedRoute {
    /// Both airports, if both were found
    pub fn airports(self) -> Option<(AirportIcao, AirportIcao)> {
        self.origin.zip(self.destination)
    }
}

/// Locate the origin and destination airport codes in `text`
///
/// The first `"icao":"XXXX"` token is the origin. The destination is the next token that
/// lies entirely within [`DESTINATION_WINDOW`] characters of the start of the origin token.
/// Without a destination neither airport is reported.
pub fn extract_route(text: &str) -> ScrapedRoute {
    let Some((origin, origin_start, origin_end)) = find_icao(text) else {
        return ScrapedRoute::default();
    };

    let window_end = text[origin_start..]
        .char_indices()
        .nth(DESTINATION_WINDOW)
        .map_or(text.len(), |(offset, _)| origin_start + offset);

    let destination = if origin_end < window_end {
        find_icao(&text[origin_end..window_end]).map(|(icao, _, _)| icao)
    } else {
        None
    };

    match destination {
        Some(destination) => ScrapedRoute {
            origin: Some(origin),
            destination: Some(destination),
        },
        None => ScrapedRoute::default(),
    }
}

/// First airport token in `text` with the byte range of the whole token
fn find_icao(text: &str) -> Option<(AirportIcao, usize, usize)> {
    let captures = match ICAO_TOKEN.captures(text) {
        Ok(captures) => captures?,
        Err(e) => {
            tracing::warn!("Failed to search scraped text for airports: {}", e);
            return None;
        }
    };

    let token = captures.get(0)?;
    let icao = AirportIcao::try_from(captures.get(1)?.as_str()).ok()?;

    Some((icao, token.start(), token.end()))
}
