mod activities;
mod links;
mod participants;
mod trips;

pub use activities::ActivityRepo;
pub use links::LinkRepo;
pub use participants::ParticipantRepo;
pub use trips::TripRepo;
