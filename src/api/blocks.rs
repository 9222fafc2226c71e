//! Single block placement.

use log::info;
use reqwest::Method;
use serde_json::{Value, json};

use crate::api::requester::Requester;
use crate::error::Error;
use crate::position::Position;

/// Block types accepted by the server plugin.
///
/// The list is intentionally small and explicit; it is not derived from any
/// external registry.
pub const VALID_BLOCK_TYPES: [&str; 3] = ["STONE", "DIRT", "DIAMOND_BLOCK"];

/// Build the JSON body for one block placement.
///
/// The body is the position's flat field mapping plus the material.
pub(crate) fn placement_body(position: &Position, material: &str) -> Value {
    json!({
        "x": position.x,
        "y": position.y,
        "z": position.z,
        "world": position.world,
        "material": material,
    })
}

/// Handler for placing single blocks.
///
/// # Examples
///
/// ```no_run
/// use scriptymc::api::{BlockHandler, HttpRequester};
/// use scriptymc::{Config, Position};
///
/// # fn main() -> Result<(), scriptymc::Error> {
/// let config = Config {
///     api_key: Some("secret".to_string()),
///     ..Config::default()
/// };
/// let blocks = BlockHandler::new(HttpRequester::new(config)?);
/// let placed = blocks.place_block(&Position::new(100.0, 64.0, 100.0), "stone")?;
/// println!("placed: {placed}");
/// # Ok(())
/// # }
/// ```
pub struct BlockHandler<R: Requester> {
    /// Requester used to reach the server
    requester: R,
}

impl<R: Requester> BlockHandler<R> {
    /// Create a handler on top of the given requester.
    pub fn new(requester: R) -> Self {
        BlockHandler { requester }
    }

    /// Whether `block_type` (any case) is in the allow-list.
    pub fn validate_block_type(block_type: &str) -> bool {
        VALID_BLOCK_TYPES.contains(&block_type.to_uppercase().as_str())
    }

    /// Place one block of `block_type` at `position`.
    ///
    /// The block type is matched case-insensitively against
    /// [`VALID_BLOCK_TYPES`] and sent uppercased.
    ///
    /// Returns `Ok(true)` iff the decoded response body's `status` field is
    /// 200. A well-formed body with any other status returns `Ok(false)`:
    /// this is the business-level "did it work" signal, distinct from
    /// transport-level failures, which still error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBlockType`] before any network call when the
    /// block type is not allowed, and any [request error](crate::api::Requester::request)
    /// otherwise.
    pub fn place_block(&self, position: &Position, block_type: &str) -> Result<bool, Error> {
        if !Self::validate_block_type(block_type) {
            return Err(Error::InvalidBlockType(block_type.to_string()));
        }
        let material = block_type.to_uppercase();

        info!(
            "place {} at ({}, {}, {}) in {}",
            material, position.x, position.y, position.z, position.world
        );
        let body = placement_body(position, &material);
        let response = self.requester.request("block", Method::POST, Some(body), None)?;

        Ok(response.get("status").and_then(Value::as_i64) == Some(200))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::requester::MockRequester;

    fn handler_returning(body: Value) -> BlockHandler<MockRequester> {
        let mut requester = MockRequester::new();
        requester
            .expect_request()
            .withf(|endpoint, method, body, extra_headers| {
                endpoint == "block"
                    && *method == Method::POST
                    && body.is_some()
                    && extra_headers.is_none()
            })
            .times(1)
            .return_once(move |_, _, _, _| Ok(body));
        BlockHandler::new(requester)
    }

    #[test]
    fn test_place_block_success() {
        let handler = handler_returning(json!({"status": 200, "message": "Block placed successfully"}));
        let position = Position::new(100.0, 64.0, 100.0);
        assert!(handler.place_block(&position, "STONE").unwrap());
    }

    #[test]
    fn test_place_block_is_case_insensitive() {
        let mut requester = MockRequester::new();
        requester
            .expect_request()
            .withf(|_, _, body, _| body.as_ref().unwrap()["material"] == "STONE")
            .times(1)
            .return_once(|_, _, _, _| Ok(json!({"status": 200})));

        let handler = BlockHandler::new(requester);
        let position = Position::new(0.0, 0.0, 0.0);
        assert!(handler.place_block(&position, "stone").unwrap());
    }

    #[test]
    fn test_place_block_sends_position_fields() {
        let mut requester = MockRequester::new();
        requester
            .expect_request()
            .withf(|_, _, body, _| {
                let body = body.as_ref().unwrap();
                body["x"] == 1.0
                    && body["y"] == 2.0
                    && body["z"] == 3.0
                    && body["world"] == "world_nether"
                    && body["material"] == "DIRT"
            })
            .times(1)
            .return_once(|_, _, _, _| Ok(json!({"status": 200})));

        let handler = BlockHandler::new(requester);
        let position = Position::in_world(1.0, 2.0, 3.0, "world_nether");
        assert!(handler.place_block(&position, "dirt").unwrap());
    }

    #[test]
    fn test_place_block_non_200_body_status_is_false() {
        let handler = handler_returning(json!({"status": 500, "message": "world not found"}));
        let position = Position::new(0.0, 0.0, 0.0);
        assert!(!handler.place_block(&position, "STONE").unwrap());
    }

    #[test]
    fn test_place_block_body_without_status_is_false() {
        let handler = handler_returning(json!({"message": "ok"}));
        let position = Position::new(0.0, 0.0, 0.0);
        assert!(!handler.place_block(&position, "STONE").unwrap());
    }

    #[test]
    fn test_invalid_block_type_makes_no_request() {
        let mut requester = MockRequester::new();
        requester.expect_request().never();

        let handler = BlockHandler::new(requester);
        let position = Position::new(0.0, 0.0, 0.0);
        let error = handler.place_block(&position, "BEDROCK").unwrap_err();

        assert!(matches!(error, Error::InvalidBlockType(ref t) if t == "BEDROCK"));
    }

    #[test]
    fn test_validate_block_type() {
        assert!(BlockHandler::<MockRequester>::validate_block_type("stone"));
        assert!(BlockHandler::<MockRequester>::validate_block_type("DIAMOND_BLOCK"));
        assert!(!BlockHandler::<MockRequester>::validate_block_type("BEDROCK"));
    }
}
