// Roadmap: static recommendation tables and the profile → roadmap resolver.
// The resolver is pure; only the handlers read the profile store.

pub mod handlers;
pub mod resolver;
pub mod tables;

pub use resolver::resolve;
