//! HTTP middleware: logging, request ids, metrics, and security headers.

pub mod logging;
pub mod metrics;
pub mod security_headers;
pub mod trace_id;

pub use metrics::{
    init_metrics, metrics_handler, metrics_middleware, record_device_registered,
    record_sample_ingested, record_violations_detected,
};
pub use security_headers::security_headers_middleware;
pub use trace_id::trace_id;
