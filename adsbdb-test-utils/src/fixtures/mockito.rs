//! Mock endpoints for the photo and flightroute sources.
//!
//! Both sources are served by the same mockito server, the scraper in the test context
//! uses its url as the base url of each.

use mockito::{Matcher, Mock};

use crate::fixtures::Fixtures;

impl<'a> Fixtures<'a> {
    /// Create a mock photo endpoint answering lookups of `mode_s` with `body`
    ///
    /// # Arguments
    /// - `mode_s` - Mode-S code the request must query for
    /// - `body` - JSON returned by the endpoint
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_photo_endpoint(
        &mut self,
        mode_s: &str,
        body: serde_json::Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/ac_thumb.json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("m".into(), mode_s.into()),
                Matcher::UrlEncoded("n".into(), "1".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock flightroute page for `callsign`
    ///
    /// # Arguments
    /// - `callsign` - Callsign in the request path
    /// - `status` - HTTP status to answer with
    /// - `body` - Page text returned by the endpoint
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_route_endpoint(
        &mut self,
        callsign: &str,
        status: usize,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/{}", callsign);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(status)
            .with_header("content-type", "text/html")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
