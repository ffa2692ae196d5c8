//! Identifiers shared by the fixtures and the tests using them.

/// Aircraft stored without a photo
pub static TEST_MODE_S: &str = "A7E152";

/// Aircraft stored with a photo already linked
pub static TEST_MODE_S_WITH_PHOTO: &str = "4247E3";

/// Valid Mode-S code never inserted by the fixtures
pub static TEST_MODE_S_UNKNOWN: &str = "ABCDEF";

pub static TEST_CALLSIGN: &str = "RYR544";

/// Valid callsign never inserted by the fixtures
pub static TEST_CALLSIGN_UNKNOWN: &str = "ZZZ999";

pub static TEST_ORIGIN_ICAO: &str = "EIDW";

pub static TEST_DESTINATION_ICAO: &str = "EGSS";

pub static TEST_MIDPOINT_ICAO: &str = "LPPT";

/// Client key used when exercising the rate limiter
pub static TEST_CLIENT: &str = "203.0.113.7";
