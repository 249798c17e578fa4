use once_cell::sync::Lazy;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, HistogramVec, IntCounterVec, TextEncoder,
};

/// Number of service calls, labeled by method and error-present flag.
pub static REQUEST_COUNT: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "subject_api_request_count",
        "Number of subject service calls.",
        &["method", "error"]
    )
    .expect("register subject_api_request_count")
});

/// Service call latency in seconds, labeled by method and error-present flag.
pub static REQUEST_LATENCY: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "subject_api_request_latency_seconds",
        "Subject service call latency in seconds.",
        &["method", "error"]
    )
    .expect("register subject_api_request_latency_seconds")
});

/// Renders the process-global registry in the Prometheus text exposition
/// format.
pub fn gather() -> String {
    let encoder = TextEncoder::new();
    encoder
        .encode_to_string(&prometheus::gather())
        .unwrap_or_default()
}
