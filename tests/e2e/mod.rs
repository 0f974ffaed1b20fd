// End-to-end tests for the Market Briefing API
//
// Each test gets its own server bound to a random port, backed by a fresh
// temporary data directory. Feed documents and the chat completions endpoint
// are served by per-test wiremock servers, so tests run in parallel.

mod helpers;
mod test_dashboard;
mod test_feeds;
mod test_health;
