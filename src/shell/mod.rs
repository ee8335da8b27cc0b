// Composition root and command line surface.
//
// Responsibilities
// - Read configuration from flags, the environment and `.env`.
// - Instantiate the concrete store and wire it into every use case handler.
// - Parse commands and route them to the inbound adapters.

pub mod cli;
pub mod config;
pub mod state;
