//! Identifier generation.

use forge_core::RandomSource;
use uuid::Uuid;

/// Generate a UUID v4 from the random source.
///
/// Unlike `Uuid::new_v4`, the bytes come from the caller's seeded source,
/// so generated identifiers replay with the rest of the stream.
pub fn uuid_v4<R: RandomSource>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&rng.next_u64().to_le_bytes());
    bytes[8..].copy_from_slice(&rng.next_u64().to_le_bytes());

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}
