// Adapters layer: concrete clients for the venue page, the catalog and the SMS API.

pub mod http;
pub mod spotify;
pub mod twilio;
pub mod venue;

pub use http::build_client;
pub use spotify::SpotifyCatalog;
pub use twilio::TwilioNotifier;
pub use venue::VenuePage;
