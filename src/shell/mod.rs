// Composition root for the ledger backend.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate concrete collaborator implementations.
// - Wire implementations into use case handlers.
// - Expose the HTTP router.

pub mod http;
pub mod responses;
pub mod state;
