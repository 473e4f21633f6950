// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod config;
pub mod countdown;
pub mod runtime;
pub mod schedule;
pub mod session;
pub mod util;
