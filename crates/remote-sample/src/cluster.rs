//! # Cluster Wiring
//!
//! [`Cluster`] starts both nodes on one loopback transport, teaches them the
//! sample's message types and registers the worker on the backend, which is
//! what lets the backend build workers from a remote deployment request.

use crate::worker::{Job, JobDone, Worker};
use actor_runtime::deploy::Deploy;
use actor_runtime::remote::LoopbackTransport;
use actor_runtime::routing::RouterPoolActor;
use actor_runtime::supervision::{OneForOneStrategy, SupervisorStrategy};
use actor_runtime::{ActorSystem, Props, RuntimeError, SystemSettings};
use std::sync::Arc;
use tracing::info;

pub struct Cluster {
    pub frontend: ActorSystem,
    pub backend: ActorSystem,
    transport: LoopbackTransport,
}

impl Cluster {
    /// Frontend on port 2552, backend on 2553.
    pub fn start() -> Result<Self, RuntimeError> {
        Self::start_with(
            SystemSettings::new("frontend").with_remote("127.0.0.1", 2552),
            SystemSettings::new("backend").with_remote("127.0.0.1", 2553),
        )
    }

    pub fn start_with(frontend: SystemSettings, backend: SystemSettings) -> Result<Self, RuntimeError> {
        // =====================================================================
        // 1. NODES
        // =====================================================================
        let transport = LoopbackTransport::new();
        let frontend = transport.start_system(frontend)?;
        let backend = transport.start_system(backend)?;

        // =====================================================================
        // 2. SHARED VOCABULARY
        // =====================================================================
        for system in [&frontend, &backend] {
            system.serialization().register_serde::<Job>();
            system.serialization().register_serde::<JobDone>();
        }
        backend.register_actor(Worker::from_args);

        info!(frontend = %frontend.address(), backend = %backend.address(), "Cluster started");
        Ok(Self {
            frontend,
            backend,
            transport,
        })
    }

    /// A round-robin pool of `size` workers, all deployed on the backend.
    pub fn worker_pool(&self, prefix: &str, size: usize) -> Props {
        let strategy: Arc<dyn SupervisorStrategy> = Arc::new(OneForOneStrategy::default_strategy());
        let routee = Worker::props(prefix).with_deploy(Deploy::remote(self.backend.address().clone()));
        Props::new(move || RouterPoolActor::round_robin(strategy.clone(), routee.clone(), size))
    }

    /// Stops the frontend first, so its remote routees are told to stop while
    /// the backend is still up.
    pub async fn shutdown(self) -> Result<(), RuntimeError> {
        self.frontend.shutdown().await?;
        self.transport.detach(self.frontend.address());
        self.backend.shutdown().await?;
        self.transport.detach(self.backend.address());
        info!("Cluster stopped");
        Ok(())
    }
}
