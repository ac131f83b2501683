//! # Remote Deployment Demo
//!
//! 1. Starts a two-node [`Cluster`].
//! 2. Creates a router pool on the frontend whose workers live on the backend.
//! 3. Sends jobs through the pool and prints the results as they come back.
//! 4. Reaches the deployed workers again through a cross-node selection.
//! 5. Shuts both nodes down.

use actor_runtime::{setup_tracing, AnyMessage};
use remote_sample::cluster::Cluster;
use remote_sample::worker::{Collector, Job, JobDone};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn, Instrument};

const JOBS: u32 = 6;

async fn collect(results: &mut mpsc::UnboundedReceiver<JobDone>, expected: u32) {
    for _ in 0..expected {
        match tokio::time::timeout(Duration::from_secs(2), results.recv()).await {
            Ok(Some(done)) => info!(job_id = done.id, worker = %done.worker, result = %done.result, "Job done"),
            Ok(None) => break,
            Err(_) => {
                warn!("Timed out waiting for results");
                break;
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let cluster = Cluster::start().map_err(|e| e.to_string())?;
    let (tx, mut results) = mpsc::unbounded_channel();

    let collector = cluster
        .frontend
        .actor_of(Collector::props(tx), "collector")
        .await
        .map_err(|e| e.to_string())?;
    let pool = cluster
        .frontend
        .actor_of(cluster.worker_pool("done: ", 3), "workers")
        .await
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("jobs");
    async {
        for id in 0..JOBS {
            let job = Job {
                id,
                payload: format!("job-{}", id),
            };
            pool.tell(AnyMessage::new(job), Some(collector.clone()));
        }
        collect(&mut results, JOBS).await;
    }
    .instrument(span)
    .await;

    // Every deployed routee is registered under the frontend's path segments.
    let span = tracing::info_span!("selection");
    async {
        let selection = cluster
            .frontend
            .actor_selection("actor.tcp://backend@127.0.0.1:2553/remote/*routee-?")
            .map_err(|e| e.to_string())?;
        info!(%selection, "Broadcasting through selection");
        selection.tell(
            AnyMessage::new(Job {
                id: 100,
                payload: "hello".to_string(),
            }),
            Some(collector.clone()),
        );
        collect(&mut results, 3).await;
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    cluster.shutdown().await.map_err(|e| e.to_string())?;
    info!("Demo completed successfully");
    Ok(())
}
