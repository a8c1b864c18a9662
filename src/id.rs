/// Opaque identifier generation for stored files
///
/// Identifiers are version-4 UUIDs in canonical hyphenated form: 128 bits
/// of randomness, safe to use both as a filesystem name component and as a
/// URL path segment. Uniqueness relies on the generator's collision
/// resistance; no uniqueness check is performed before a write.
use uuid::Uuid;

/// Generate a fresh file identifier
pub fn generate() -> String {
    Uuid::new_v4().to_string()
}
