/// Basic application code
pub mod app;
/// REST clients for outside services
pub mod client;
/// Controllers for REST endpoints
pub mod controller;
/// Domain objects
pub mod domain;
/// Error enums
pub mod error;
/// Grouping of trip activities by calendar day
pub mod itinerary;
/// Stored records
pub mod model;
/// Email notifications
pub mod notify;
/// Repositories
pub mod repo;
/// Trip, link, activity and participant operations
pub mod service;
/// Application settings
pub mod settings;
/// Application telemetry for tracing and logging
pub mod telemetry;
/// Public links to the application
pub mod urls;
