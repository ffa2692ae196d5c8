pub use super::aircraft::Entity as Aircraft;
pub use super::aircraft_photo::Entity as AircraftPhoto;
pub use super::airport::Entity as Airport;
pub use super::country::Entity as Country;
pub use super::flightroute::Entity as Flightroute;
pub use super::flightroute_callsign::Entity as FlightrouteCallsign;
