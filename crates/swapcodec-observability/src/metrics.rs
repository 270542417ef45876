//! SwapCodec metrics definitions.
//!
//! All metrics use OpenTelemetry conventions.
//! They can be exported via OTLP to Prometheus, Grafana, Datadog, etc.

use opentelemetry::{
    metrics::{Counter, Histogram, Meter},
    KeyValue,
};
use swapcodec_core::{DecodeError, SwapRecord};

/// Central metrics handle for SwapCodec.
#[derive(Clone)]
pub struct SwapCodecMetrics {
    pub records_decoded: Counter<u64>,
    pub decode_errors: Counter<u64>,
    pub multicall_elements: Histogram<u64>,
    pub decode_latency_ms: Histogram<f64>,
    pub batch_size: Histogram<u64>,
}

impl SwapCodecMetrics {
    pub fn new(meter: &Meter) -> Self {
        Self {
            records_decoded: meter
                .u64_counter("swapcodec.records_decoded")
                .with_description("Total number of swap records produced")
                .build(),
            decode_errors: meter
                .u64_counter("swapcodec.decode_errors")
                .with_description("Transactions that failed to decode")
                .build(),
            multicall_elements: meter
                .u64_histogram("swapcodec.multicall_elements")
                .with_description("Inner calls per decoded multicall")
                .build(),
            decode_latency_ms: meter
                .f64_histogram("swapcodec.decode_latency_ms")
                .with_description("Time to decode a batch in milliseconds")
                .build(),
            batch_size: meter
                .u64_histogram("swapcodec.batch_size")
                .with_description("Number of transactions in a batch decode request")
                .build(),
        }
    }

    /// Handle backed by the global meter provider (a no-op until one is installed).
    pub fn global() -> Self {
        Self::new(&opentelemetry::global::meter("swapcodec"))
    }

    pub fn record_decoded(&self, record: &SwapRecord) {
        self.records_decoded.add(
            1,
            &[
                KeyValue::new("version", record.version.to_string()),
                KeyValue::new("method", record.method_name.clone()),
            ],
        );
    }

    pub fn record_error(&self, version: &str, error: &DecodeError) {
        self.decode_errors.add(
            1,
            &[
                KeyValue::new("version", version.to_string()),
                KeyValue::new("error_type", error.kind()),
            ],
        );
    }

    pub fn record_multicall(&self, calls: usize) {
        self.multicall_elements.record(calls as u64, &[]);
    }

    pub fn record_latency(&self, ms: f64, version: &str) {
        self.decode_latency_ms
            .record(ms, &[KeyValue::new("version", version.to_string())]);
    }

    pub fn record_batch(&self, size: usize) {
        self.batch_size.record(size as u64, &[]);
    }
}
