//! Structure generation.
//!
//! This module expands a named structure and its dimensions into an ordered
//! sequence of block placements. The expansion is fully deterministic: the
//! whole sequence is regenerated from `(anchor, dimensions)` on every call,
//! no state is carried between calls, and the enumeration order is part of
//! the contract (callers may rely on build progression).
//!
//! Placements are paced by a [`Pacing`] policy to avoid overloading the
//! server. The first error aborts the remaining enumeration immediately;
//! blocks already placed stay placed, there is no rollback.

use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use reqwest::Method;

use crate::api::blocks::placement_body;
use crate::api::requester::Requester;
use crate::error::Error;
use crate::pacing::Pacing;
use crate::position::Position;

/// Material used for every generated structure block.
const STRUCTURE_MATERIAL: &str = "STONE";

/// The closed set of buildable structures.
///
/// Parsing an unknown name fails with [`Error::UnknownStructureType`]; the
/// match in [`StructureHandler::build`] is exhaustive, so adding a variant
/// here forces the generator to handle it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StructureKind {
    /// A flat `width x length` plane at the anchor's height
    Floor,
    /// A `width x length` perimeter, `height` layers tall
    Walls,
    /// A flat `width x length` plane; raise the anchor to put it on top
    Roof,
}

impl StructureKind {
    /// The lowercase name used in the public API.
    pub fn name(&self) -> &'static str {
        match self {
            StructureKind::Floor => "floor",
            StructureKind::Walls => "walls",
            StructureKind::Roof => "roof",
        }
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StructureKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "floor" => Ok(StructureKind::Floor),
            "walls" => Ok(StructureKind::Walls),
            "roof" => Ok(StructureKind::Roof),
            _ => Err(Error::UnknownStructureType(s.to_string())),
        }
    }
}

/// Dimension parameters for a structure build.
///
/// Which fields are required depends on the structure kind; a missing
/// required field fails with [`Error::MissingDimension`] before any request
/// is issued.
///
/// # Examples
///
/// ```
/// use scriptymc::Dimensions;
///
/// let dims = Dimensions::new().width(5).length(5).height(4);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Dimensions {
    width: Option<u32>,
    length: Option<u32>,
    height: Option<u32>,
}

impl Dimensions {
    /// Create an empty set of dimensions.
    pub fn new() -> Self {
        Dimensions::default()
    }

    /// Set the width (x axis extent).
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the length (z axis extent).
    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the height (y axis extent, walls only).
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }
}

/// Validate one required dimension: present and at least 1.
fn require(
    value: Option<u32>,
    structure: &'static str,
    dimension: &'static str,
) -> Result<u32, Error> {
    match value {
        None => Err(Error::MissingDimension {
            structure,
            dimension,
        }),
        Some(0) => Err(Error::InvalidDimension {
            structure,
            dimension,
        }),
        Some(value) => Ok(value),
    }
}

/// Expand a structure into its ordered block positions.
///
/// The full sequence is produced before any request is sent, so validation
/// failures have no side effects.
fn expand(kind: StructureKind, anchor: &Position, dims: &Dimensions) -> Result<Vec<Position>, Error> {
    match kind {
        // Floor and roof are the same plane expansion; the roof is placed
        // wherever the caller anchors it.
        StructureKind::Floor | StructureKind::Roof => {
            let width = require(dims.width, kind.name(), "width")?;
            let length = require(dims.length, kind.name(), "length")?;

            let mut positions = Vec::with_capacity(width as usize * length as usize);
            // Row-major: outer loop over dx, inner over dz. Contractual.
            for dx in 0..width {
                for dz in 0..length {
                    positions.push(anchor.offset(f64::from(dx), 0.0, f64::from(dz)));
                }
            }
            Ok(positions)
        }
        StructureKind::Walls => {
            let width = require(dims.width, kind.name(), "width")?;
            let length = require(dims.length, kind.name(), "length")?;
            let height = require(dims.height, kind.name(), "height")?;

            let mut positions = Vec::new();
            // Bottom-up layers, each scanned in the floor's row-major order
            // keeping perimeter cells only.
            for dy in 0..height {
                for dx in 0..width {
                    for dz in 0..length {
                        if dx == 0 || dx == width - 1 || dz == 0 || dz == length - 1 {
                            positions.push(anchor.offset(
                                f64::from(dx),
                                f64::from(dy),
                                f64::from(dz),
                            ));
                        }
                    }
                }
            }
            Ok(positions)
        }
    }
}

/// Expands named structures into paced sequences of block placements.
///
/// # Examples
///
/// ```no_run
/// use scriptymc::api::{HttpRequester, StructureHandler};
/// use scriptymc::pacing::FixedDelay;
/// use scriptymc::{Config, Dimensions, Position};
///
/// # fn main() -> Result<(), scriptymc::Error> {
/// let config = Config {
///     api_key: Some("secret".to_string()),
///     ..Config::default()
/// };
/// let structures = StructureHandler::new(HttpRequester::new(config)?, FixedDelay::default());
/// let anchor = Position::new(100.0, 64.0, 100.0);
/// let placed = structures.build("floor", &anchor, &Dimensions::new().width(5).length(5))?;
/// assert_eq!(placed, 25);
/// # Ok(())
/// # }
/// ```
pub struct StructureHandler<R: Requester, P: Pacing> {
    /// Requester used for each block placement
    requester: R,
    /// Backpressure policy applied between consecutive placements
    pacer: P,
}

impl<R: Requester, P: Pacing> StructureHandler<R, P> {
    /// Create a handler on top of the given requester and pacing policy.
    pub fn new(requester: R, pacer: P) -> Self {
        StructureHandler { requester, pacer }
    }

    /// Build a structure of `structure_type` anchored at `anchor`.
    ///
    /// Each generated position becomes one `POST block` request with
    /// material STONE; the pacing policy runs between consecutive
    /// placements (n-1 pauses for n blocks). Returns the number of blocks
    /// placed.
    ///
    /// # Errors
    ///
    /// Validation errors ([`Error::UnknownStructureType`],
    /// [`Error::MissingDimension`], [`Error::InvalidDimension`]) are
    /// returned before any request is issued. A request error aborts the
    /// remaining placements immediately; blocks placed before the failure
    /// stay in the world. Nothing is retried here: retry, logging and
    /// fallback policy belong to the caller.
    pub fn build(
        &self,
        structure_type: &str,
        anchor: &Position,
        dimensions: &Dimensions,
    ) -> Result<usize, Error> {
        let kind: StructureKind = structure_type.parse()?;
        let positions = expand(kind, anchor, dimensions)?;

        info!(
            "building {} of {} blocks at ({}, {}, {}) in {}",
            kind,
            positions.len(),
            anchor.x,
            anchor.y,
            anchor.z,
            anchor.world
        );

        for (index, position) in positions.iter().enumerate() {
            if index > 0 {
                self.pacer.pause();
            }
            debug!(
                "placing block {}/{} at ({}, {}, {})",
                index + 1,
                positions.len(),
                position.x,
                position.y,
                position.z
            );
            let body = placement_body(position, STRUCTURE_MATERIAL);
            self.requester.request("block", Method::POST, Some(body), None)?;
        }

        Ok(positions.len())
    }
}
