//! Operations behind the REST endpoints.
//!
//! Every operation takes its store handle explicitly; nothing is global.

pub mod activities;
pub mod links;
pub mod participants;
pub mod trips;
