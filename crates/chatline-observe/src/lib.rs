//! Observability setup for Chatline: structured logging and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
