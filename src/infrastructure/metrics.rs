// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{info, warn};

pub const PAGES_CREATED_TOTAL: &str = "pagestats_pages_created_total";
pub const JOBS_TOTAL: &str = "pagestats_jobs_total";
pub const JOB_DURATION_SECONDS: &str = "pagestats_job_duration_seconds";

pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address '{}': {}", settings.listen_addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (API and worker on one host)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(PAGES_CREATED_TOTAL, "Pages accepted by the API");
    describe_counter!(JOBS_TOTAL, "Scrape jobs finished, labelled by terminal status");
    describe_histogram!(JOB_DURATION_SECONDS, "Wall time of a scrape job");

    info!("Metrics exporter listening on {}", addr);
}

pub fn record_page_created() {
    counter!(PAGES_CREATED_TOTAL).increment(1);
}

pub fn record_job(status: &'static str, elapsed: Duration) {
    counter!(JOBS_TOTAL, "status" => status).increment(1);
    histogram!(JOB_DURATION_SECONDS, "status" => status).record(elapsed.as_secs_f64());
}
