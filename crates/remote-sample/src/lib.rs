//! # Remote Sample
//!
//! Two actor systems in one process, `frontend` and `backend`, connected by a
//! [`LoopbackTransport`](actor_runtime::remote::LoopbackTransport).
//!
//! ## 🚀 What it shows
//!
//! - **[worker]**: a `Worker` that is deployed remotely, and the serializable
//!   `Job` / `JobDone` messages that cross the node boundary.
//! - **[cluster]**: wiring both systems together and tearing them down.
//!
//! The frontend owns a round-robin router pool whose routees are deployed on the
//! backend. Jobs go out through the pool, results come straight back to a
//! collector on the frontend.

pub mod cluster;
pub mod worker;
