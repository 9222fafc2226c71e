//! Scriptymc - a Rust client for the Scripty Minecraft server plugin.
//!
//! This crate lets scripts place blocks, spawn entities and build whole
//! structures on a Minecraft server running the Scripty plugin, over the
//! plugin's authenticated REST API.
//!
//! # Overview
//!
//! The Scripty plugin embeds a small HTTP server (port 6060 by default)
//! accepting JSON requests under `/api/`, authenticated with an API key the
//! plugin writes to `plugins/Scripty/api-key.txt` at server start up. This
//! crate wraps that API: it resolves the key, attaches the auth headers,
//! classifies failures into a typed error taxonomy and expands high-level
//! geometric intents ("build a 5x5 floor") into paced sequences of single
//! block placements.
//!
//! # Features
//!
//! - **Block placement**: place single blocks with client-side block-type
//!   validation
//! - **Structure generation**: floors, walls and roofs expanded into
//!   deterministic, row-major placement sequences
//! - **Entity spawning**: spawn entities with client-side validation
//! - **Credential resolution**: explicit key, `SCRIPTY_API_KEY` environment
//!   variable or well-known key files, in that order
//! - **Typed errors**: authentication, server, timeout and connection
//!   failures are distinct [`Error`] variants
//! - **Backpressure**: a fixed pacing delay between placements keeps bulk
//!   builds from overloading the server
//!
//! # Usage
//!
//! ```no_run
//! use scriptymc::{Dimensions, Position, ScriptyClient};
//!
//! # fn main() -> Result<(), scriptymc::Error> {
//! let client = ScriptyClient::new()?;
//!
//! // A single block
//! client.place_block(100.0, 64.0, 100.0, "stone")?;
//!
//! // A 5x5 floor, row by row
//! let anchor = Position::new(100.0, 64.0, 100.0);
//! client.build_structure("floor", &anchor, &Dimensions::new().width(5).length(5))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Failure model
//!
//! Nothing is retried internally and there are no transactions: a structure
//! build that fails partway leaves the already-placed blocks in the world.
//! The first error aborts the remaining placements and is surfaced to the
//! caller, who owns all recovery policy.
//!
//! # Architecture
//!
//! - [`api`] - request layer and the block/entity/structure handlers
//! - [`client`] - the [`ScriptyClient`] facade composing the handlers
//! - [`config`] - server address, timeout and auth header derivation
//! - [`credentials`] - ordered credential source chain
//! - [`error`] - the error taxonomy
//! - [`pacing`] - pacing policy between consecutive placements
//! - [`position`] - the [`Position`] value type
//!
//! # Logging
//!
//! The crate logs through the `log` facade: requests at `info`, bodies and
//! responses at `debug`. Binaries pick the backend; the bundled
//! `build_house` example uses `env_logger` honoring `RUST_LOG`.

pub mod api;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod pacing;
pub mod position;

pub use crate::api::{Dimensions, StructureKind};
pub use crate::client::ScriptyClient;
pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::position::Position;
