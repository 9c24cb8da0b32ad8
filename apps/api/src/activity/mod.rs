// Activity signal pipeline: cache-or-fetch, classify, report.
// All GitHub reads go through the github client — no direct HTTP here.

pub mod cache;
pub mod classify;
pub mod handlers;
pub mod models;
