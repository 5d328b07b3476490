use uuid::Uuid;

use crate::{IdentityError, IdentityResult};

/// Generate a new entity identifier.
///
/// UUIDv7 ids embed a millisecond timestamp and are monotonic within the
/// process, so sorting by id yields creation order.
pub fn new_id() -> Uuid {
    Uuid::now_v7()
}

/// Parse an identifier received from a client.
pub fn parse_id(raw: &str) -> IdentityResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|e| IdentityError::InvalidId(format!("{}: {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_is_not_nil() {
        let id = new_id();
        assert!(!id.is_nil());
        assert_eq!(id.get_version_num(), 7);
    }

    #[test]
    fn test_new_ids_are_unique_and_ordered() {
        let ids: Vec<Uuid> = (0..100).map(|_| new_id()).collect();

        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();

        assert_eq!(sorted.len(), ids.len(), "ids must be unique");
        assert_eq!(sorted, ids, "ids must be generated in ascending order");
    }

    #[test]
    fn test_parse_id_roundtrip() {
        let id = new_id();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        let err = parse_id("not-a-uuid").unwrap_err();
        assert!(matches!(err, IdentityError::InvalidId(_)));
        assert!(err.to_string().contains("not-a-uuid"));
    }
}
