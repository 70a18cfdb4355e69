// Composition root for the events service.
//
// - Read config from the environment.
// - Build the in-memory event store and wire it into the use case handlers.
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
