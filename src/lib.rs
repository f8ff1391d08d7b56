//! destinations — city autocomplete proxy over the Wunderground location API.
//!
//! One outbound call, one transform: fetch place suggestions for a query
//! string, keep the entries typed `"city"`, and return them as a flat JSON
//! list of city names. See [`gateway`] for the HTTP surface and
//! [`upstream`] for the client and filter rules.

pub mod config;
pub mod error;
pub mod gateway;
pub mod upstream;
