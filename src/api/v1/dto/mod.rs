pub mod me;
pub mod refresh_request;
pub mod token_response;
