//! Entity spawning.

use log::info;
use reqwest::Method;
use serde_json::{Value, json};

use crate::api::requester::Requester;
use crate::error::Error;
use crate::position::Position;

/// Entity types accepted by the server plugin.
///
/// Like the block allow-list, this set is small and explicit.
pub const VALID_ENTITY_TYPES: [&str; 5] = ["COW", "PIG", "SHEEP", "CHICKEN", "ZOMBIE"];

/// Handler for spawning entities.
pub struct EntityHandler<R: Requester> {
    /// Requester used to reach the server
    requester: R,
}

impl<R: Requester> EntityHandler<R> {
    /// Create a handler on top of the given requester.
    pub fn new(requester: R) -> Self {
        EntityHandler { requester }
    }

    /// Whether `entity_type` (any case) is in the allow-list.
    pub fn validate_entity_type(entity_type: &str) -> bool {
        VALID_ENTITY_TYPES.contains(&entity_type.to_uppercase().as_str())
    }

    /// Spawn one entity of `entity_type` at `position`.
    ///
    /// The entity type is matched case-insensitively against
    /// [`VALID_ENTITY_TYPES`] and sent uppercased as the `entityType` field
    /// of a `POST spawn` request. Returns `Ok(true)` iff the decoded
    /// response body's `status` field is 200.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEntityType`] before any network call when the
    /// entity type is not allowed, and any [request error](crate::api::Requester::request)
    /// otherwise.
    pub fn spawn_entity(&self, position: &Position, entity_type: &str) -> Result<bool, Error> {
        if !Self::validate_entity_type(entity_type) {
            return Err(Error::InvalidEntityType(entity_type.to_string()));
        }
        let entity = entity_type.to_uppercase();

        info!(
            "spawn {} at ({}, {}, {}) in {}",
            entity, position.x, position.y, position.z, position.world
        );
        let body = json!({
            "x": position.x,
            "y": position.y,
            "z": position.z,
            "world": position.world,
            "entityType": entity,
        });
        let response = self.requester.request("spawn", Method::POST, Some(body), None)?;

        Ok(response.get("status").and_then(Value::as_i64) == Some(200))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::requester::MockRequester;

    #[test]
    fn test_spawn_entity_success() {
        let mut requester = MockRequester::new();
        requester
            .expect_request()
            .withf(|endpoint, method, body, _| {
                let body = body.as_ref().unwrap();
                endpoint == "spawn"
                    && *method == Method::POST
                    && body["entityType"] == "COW"
                    && body["x"] == 5.0
            })
            .times(1)
            .return_once(|_, _, _, _| Ok(json!({"status": 200, "message": "Entity spawn scheduled"})));

        let handler = EntityHandler::new(requester);
        let position = Position::new(5.0, 64.0, 5.0);
        assert!(handler.spawn_entity(&position, "cow").unwrap());
    }

    #[test]
    fn test_spawn_entity_non_200_body_status_is_false() {
        let mut requester = MockRequester::new();
        requester
            .expect_request()
            .times(1)
            .return_once(|_, _, _, _| Ok(json!({"status": 400, "message": "World not found"})));

        let handler = EntityHandler::new(requester);
        let position = Position::new(0.0, 0.0, 0.0);
        assert!(!handler.spawn_entity(&position, "PIG").unwrap());
    }

    #[test]
    fn test_invalid_entity_type_makes_no_request() {
        let mut requester = MockRequester::new();
        requester.expect_request().never();

        let handler = EntityHandler::new(requester);
        let position = Position::new(0.0, 0.0, 0.0);
        let error = handler.spawn_entity(&position, "ENDER_DRAGON").unwrap_err();

        assert!(matches!(error, Error::InvalidEntityType(ref t) if t == "ENDER_DRAGON"));
    }

    #[test]
    fn test_validate_entity_type() {
        assert!(EntityHandler::<MockRequester>::validate_entity_type("zombie"));
        assert!(!EntityHandler::<MockRequester>::validate_entity_type("WITHER"));
    }
}
