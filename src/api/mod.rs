//! HTTP API handlers for the Scripty server plugin.
//!
//! This module contains the request layer and the operation handlers built
//! on top of it.
//!
//! # Modules
//!
//! - `requester` - request layer: URL building, auth headers, timeout and
//!   error classification for a single HTTP call
//! - `blocks` - single block placement with block-type validation
//! - `structures` - expansion of named structures into paced sequences of
//!   block placements
//! - `entities` - entity spawning with entity-type validation
//!
//! Handlers are generic over the [`Requester`] trait so tests can drive them
//! with mocks instead of a live server.

mod blocks;
mod entities;
mod requester;
mod structures;

pub use crate::api::blocks::{BlockHandler, VALID_BLOCK_TYPES};
pub use crate::api::entities::{EntityHandler, VALID_ENTITY_TYPES};
pub use crate::api::requester::{HttpRequester, Requester};
pub use crate::api::structures::{Dimensions, StructureHandler, StructureKind};
