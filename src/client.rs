//! User-facing client facade.

use log::info;

use crate::api::{
    BlockHandler, Dimensions, EntityHandler, HttpRequester, StructureHandler,
};
use crate::config::Config;
use crate::credentials::CredentialResolver;
use crate::error::Error;
use crate::pacing::FixedDelay;
use crate::position::Position;

/// Client for the Scripty Minecraft server plugin.
///
/// The facade composes the block, entity and structure handlers over one
/// shared requester. The configuration and the API key are resolved once at
/// construction; every call afterwards reuses them.
///
/// # Examples
///
/// ```no_run
/// use scriptymc::{Dimensions, Position, ScriptyClient};
///
/// # fn main() -> Result<(), scriptymc::Error> {
/// let client = ScriptyClient::new()?;
///
/// client.place_block(100.0, 64.0, 100.0, "stone")?;
///
/// let anchor = Position::new(100.0, 64.0, 100.0);
/// client.build_structure("floor", &anchor, &Dimensions::new().width(5).length(5))?;
/// # Ok(())
/// # }
/// ```
pub struct ScriptyClient {
    /// Shared read-only configuration
    config: Config,
    /// Single block placement
    blocks: BlockHandler<HttpRequester>,
    /// Entity spawning
    entities: EntityHandler<HttpRequester>,
    /// Structure generation with the default pacing policy
    structures: StructureHandler<HttpRequester, FixedDelay>,
}

impl ScriptyClient {
    /// Create a client with the default configuration, resolving the API
    /// key through the standard chain (environment variable, then the
    /// well-known key files).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CredentialNotFound`] when no source yields a key.
    pub fn new() -> Result<Self, Error> {
        let api_key = CredentialResolver::standard(None).resolve()?;
        let config = Config {
            api_key: Some(api_key),
            ..Config::default()
        };
        Self::with_config(config)
    }

    /// Create a client with an explicit API key and otherwise default
    /// configuration.
    pub fn with_api_key(api_key: &str) -> Result<Self, Error> {
        let api_key = CredentialResolver::standard(Some(api_key)).resolve()?;
        let config = Config {
            api_key: Some(api_key),
            ..Config::default()
        };
        Self::with_config(config)
    }

    /// Create a client from a caller-assembled configuration.
    ///
    /// No credential resolution is performed: the configuration is taken as
    /// is. Without an API key every request fails with
    /// [`Error::MissingCredential`].
    pub fn with_config(config: Config) -> Result<Self, Error> {
        info!("scripty client for {}", config.base_url());
        let requester = HttpRequester::new(config.clone())?;
        Ok(ScriptyClient {
            blocks: BlockHandler::new(requester.clone()),
            entities: EntityHandler::new(requester.clone()),
            structures: StructureHandler::new(requester, FixedDelay::default()),
            config,
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Place a single block in the configured default world.
    ///
    /// See [`BlockHandler::place_block`] for validation and return-value
    /// semantics.
    pub fn place_block(&self, x: f64, y: f64, z: f64, block_type: &str) -> Result<bool, Error> {
        let position = Position::in_world(x, y, z, &self.config.default_world);
        self.blocks.place_block(&position, block_type)
    }

    /// Build a pre-defined structure anchored at `anchor`.
    ///
    /// See [`StructureHandler::build`] for enumeration order, pacing and
    /// failure semantics. A build that fails partway leaves the blocks
    /// placed so far in the world.
    pub fn build_structure(
        &self,
        structure_type: &str,
        anchor: &Position,
        dimensions: &Dimensions,
    ) -> Result<usize, Error> {
        self.structures.build(structure_type, anchor, dimensions)
    }

    /// Spawn an entity in the configured default world.
    ///
    /// See [`EntityHandler::spawn_entity`] for validation and return-value
    /// semantics.
    pub fn spawn_entity(&self, x: f64, y: f64, z: f64, entity_type: &str) -> Result<bool, Error> {
        let position = Position::in_world(x, y, z, &self.config.default_world);
        self.entities.spawn_entity(&position, entity_type)
    }
}
