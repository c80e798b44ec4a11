// Adapters layer: concrete implementations for external systems (http transport).

pub mod http;
