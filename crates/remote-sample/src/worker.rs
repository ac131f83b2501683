//! Remotely deployable worker and the messages it understands.

use actor_runtime::{Actor, ActorContext, ActorError, AnyMessage, Props};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub payload: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDone {
    pub id: u32,
    /// Full path of the worker that did the job.
    pub worker: String,
    pub result: String,
}

/// Upper-cases job payloads behind a fixed prefix.
pub struct Worker {
    prefix: String,
}

impl Worker {
    /// Builds a worker from its single `String` argument, the prefix.
    pub fn from_args(args: &[AnyMessage]) -> Result<Self, ActorError> {
        match args.first().and_then(|arg| arg.downcast_ref::<String>()) {
            Some(prefix) => Ok(Self { prefix: prefix.clone() }),
            None => Err(ActorError::InvalidArguments {
                type_name: std::any::type_name::<Worker>().to_string(),
                reason: "expected a String prefix".to_string(),
            }),
        }
    }

    pub fn props(prefix: &str) -> Props {
        Props::with_args(vec![AnyMessage::new(prefix.to_string())], Worker::from_args)
    }
}

#[async_trait]
impl Actor for Worker {
    async fn pre_start(&mut self, ctx: &mut ActorContext) -> Result<(), ActorError> {
        info!(path = %ctx.path(), prefix = %self.prefix, "Worker ready");
        Ok(())
    }

    async fn receive(&mut self, ctx: &mut ActorContext, message: AnyMessage) -> Result<(), ActorError> {
        let Some(job) = message.downcast_ref::<Job>() else {
            ctx.unhandled(message);
            return Ok(());
        };
        debug!(path = %ctx.path(), job_id = job.id, "Working");
        ctx.reply(AnyMessage::new(JobDone {
            id: job.id,
            worker: ctx.path().to_string(),
            result: format!("{}{}", self.prefix, job.payload.to_uppercase()),
        }));
        Ok(())
    }
}

/// Hands every [`JobDone`] it receives to a channel outside the actor system.
pub struct Collector {
    results: mpsc::UnboundedSender<JobDone>,
}

impl Collector {
    pub fn props(results: mpsc::UnboundedSender<JobDone>) -> Props {
        Props::new(move || Collector {
            results: results.clone(),
        })
    }
}

#[async_trait]
impl Actor for Collector {
    async fn receive(&mut self, ctx: &mut ActorContext, message: AnyMessage) -> Result<(), ActorError> {
        match message.downcast_ref::<JobDone>() {
            Some(done) => {
                let _ = self.results.send(done.clone());
            }
            None => ctx.unhandled(message),
        }
        Ok(())
    }
}
