#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use connpulse_core::stats::{summarize, RequestSample};

#[test]
fn empty_run_is_all_zero() {
    let summary = summarize(&[]);
    assert_eq!(summary.request_count, 0);
    assert_eq!(summary.error_count, 0);
    assert_eq!(summary.mean_response_time(), Duration::ZERO);
}

#[test]
fn non_200_statuses_count_as_errors() {
    let samples = [
        RequestSample::new(200, Duration::from_millis(10)),
        RequestSample::new(404, Duration::from_millis(10)),
        RequestSample::new(500, Duration::from_millis(10)),
        RequestSample::new(200, Duration::from_millis(10)),
    ];
    let summary = summarize(&samples);
    assert_eq!(summary.request_count, 4);
    assert_eq!(summary.error_count, 2);
}

#[test]
fn mean_is_over_all_samples() {
    let samples = [
        RequestSample::new(200, Duration::from_micros(100)),
        RequestSample::new(200, Duration::from_micros(300)),
    ];
    let summary = summarize(&samples);
    assert_eq!(summary.mean_response_micros, 200);
    assert_eq!(summary.mean_response_time(), Duration::from_micros(200));
}
