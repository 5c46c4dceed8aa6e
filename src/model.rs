mod activities;
mod links;
mod participants;
mod trips;

pub use activities::{Activity, NewActivity};
pub use links::{Link, NewLink};
pub use participants::{NewParticipant, Participant};
pub use trips::{NewTrip, Trip};
