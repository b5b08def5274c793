pub mod clock;
pub mod models;
pub mod poller;
pub mod settings;
