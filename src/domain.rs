mod email_address;
mod person_name;
mod resource_url;
mod title;
mod trip_dates;

pub use email_address::EmailAddress;
pub use person_name::PersonName;
pub use resource_url::ResourceUrl;
pub use title::{Destination, Title};
pub use trip_dates::TripDates;
