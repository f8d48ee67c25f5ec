// Job listings: a static catalogue browsed by the client. No AI involved.

pub mod handlers;
pub mod listings;
