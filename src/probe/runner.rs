use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::future::join_all;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, error};

use super::types::{ProbeResult, ProbeResultSet, ProbeRun};
use crate::config::ProbeConfig;
use crate::error::{AppResult, ProbeError};
use crate::http::{Fetcher, is_success};

/// Runs `iterations` fetches concurrently and waits for all of them.
///
/// Each spawned task owns exactly one result and hands it back through its
/// join handle; handles are awaited in index order, so slot `i` is always the
/// result of task `i`. Individual fetch failures are counted and recorded in
/// their slot, never propagated.
///
/// # Errors
///
/// Returns a join error if a task panicked.
pub async fn run(
    fetcher: &Arc<dyn Fetcher>,
    config: &Arc<ProbeConfig>,
    iterations: usize,
) -> AppResult<ProbeRun> {
    if iterations == 0 {
        return Ok(ProbeRun::default());
    }

    let failures = Arc::new(AtomicU64::new(0));
    let (codes_tx, mut codes_rx) = mpsc::unbounded_channel::<u16>();

    let handles: Vec<_> = (0..iterations)
        .map(|index| {
            let fetcher = Arc::clone(fetcher);
            let config = Arc::clone(config);
            let failures = Arc::clone(&failures);
            let codes_tx = codes_tx.clone();
            tokio::spawn(async move {
                probe_once(index, fetcher.as_ref(), &config, &failures, &codes_tx).await
            })
        })
        .collect();
    drop(codes_tx);
    debug!("Spawned {} probe tasks", iterations);

    let mut slots = Vec::with_capacity(iterations);
    for joined in join_all(handles).await {
        slots.push(joined?);
    }

    let mut non_success_codes = Vec::new();
    while let Ok(code) = codes_rx.try_recv() {
        non_success_codes.push(code);
    }

    Ok(ProbeRun {
        results: ProbeResultSet::new(slots, non_success_codes),
        failures: failures.load(Ordering::Acquire),
    })
}

async fn probe_once(
    index: usize,
    fetcher: &dyn Fetcher,
    config: &ProbeConfig,
    failures: &AtomicU64,
    codes_tx: &mpsc::UnboundedSender<u16>,
) -> ProbeResult {
    let start = Instant::now();
    let (raw_response, outcome) = match fetcher.fetch(&config.target).await {
        Ok(raw) => {
            let status = config.status.parse(&raw).map_err(ProbeError::from);
            (raw, status)
        }
        Err(err) => (Vec::new(), Err(ProbeError::from(err))),
    };
    let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    match outcome {
        Ok(code) => {
            if !is_success(code) && codes_tx.send(code).is_err() {
                debug!("Status collector closed before probe {} reported", index);
            }
            ProbeResult {
                index,
                raw_response,
                duration_ms,
                status_code: Some(code),
                failure: None,
            }
        }
        Err(err) => {
            error!("Probe {} failed: {}", index, err);
            failures.fetch_add(1, Ordering::AcqRel);
            ProbeResult {
                index,
                raw_response,
                duration_ms,
                status_code: None,
                failure: Some(err),
            }
        }
    }
}
