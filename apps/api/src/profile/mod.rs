// Profile capture: validation and the session slot endpoints.

pub mod capture;
pub mod handlers;
