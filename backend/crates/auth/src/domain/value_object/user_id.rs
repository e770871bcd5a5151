pub use kernel::id::UserId;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_new() {
        let user_id = UserId::new();
        let uuid = user_id.as_uuid();
        assert_eq!(uuid.get_version_num(), 4); // UUIDv4
    }

    #[test]
    fn test_from_uuid() {
        let uuid = uuid::Uuid::new_v4();
        let user_id = UserId::from_uuid(uuid);
        assert_eq!(user_id.as_uuid(), &uuid);
    }

    #[test]
    fn test_same_type_as_kernel_alias() {
        // The auth crate re-uses the kernel's alias; no second UserId type
        let id: kernel::id::UserId = UserId::new();
        let roundtrip: UserId = kernel::id::UserId::from_uuid(id.into_uuid());
        assert_eq!(id, roundtrip);
    }
}
