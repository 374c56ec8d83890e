//! # pirateserver - HTTP host of the Pirate Radio skill
//!
//! Wraps an axum `Router` behind a small [`Server`] type configured from
//! `pirateconfig`, installs the `tracing` subscriber and exposes the skill
//! endpoint.
//!
//! - [`server`] : server and builder
//! - [`logs`] : subscriber initialisation from the `host.logger` section and
//!   the runtime `/log_setup` endpoint
//! - [`skill_api`] : skill endpoint, station listing and service info
//!
//! ## Example
//!
//! ```rust,no_run
//! use pirateradio::{StationRegistry, skill_builder};
//! use pirateserver::{ServerBuilder, skill_api};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let registry = Arc::new(StationRegistry::embedded()?);
//!     let skill = Arc::new(skill_builder(registry.clone()).build());
//!
//!     let mut server = ServerBuilder::new("PirateRadio", "localhost", 8080).build();
//!     server.add_router("/", skill_api::create_router(skill, registry)).await;
//!     server.start().await?;
//!     server.wait().await;
//!     Ok(())
//! }
//! ```

pub mod logs;
pub mod server;
pub mod skill_api;

pub use logs::{LogHandle, LoggingOptions, create_log_router, init_logging};
pub use server::{Server, ServerBuilder, ServerInfo};
pub use skill_api::{SkillState, create_router};
