//! Deterministic seeds derived from a document's identity.

use std::fmt;

/// Fixed MurmurHash3 seed shared by every document.
pub const MURMUR_HASH_SEED: u32 = 843_031_067;

/// The immutable identity of a rendered document: its id and creation timestamp.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct DocumentIdentity {
    id: String,
    created_at: String,
}

impl DocumentIdentity {
    pub fn new(id: impl fmt::Display, created_at: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            created_at: created_at.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl fmt::Display for DocumentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.created_at)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Seed(u32);

impl Seed {
    pub fn derive(identity: &DocumentIdentity) -> Self {
        Self(murmurhash3_x86_32(identity.to_string().as_bytes(), MURMUR_HASH_SEED))
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for Seed {
    fn from(x: u32) -> Self {
        Self(x)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// MurmurHash3, x86 32-bit variant.
pub fn murmurhash3_x86_32(data: &[u8], seed: u32) -> u32 {
    const C1: u32 = 0xcc9e_2d51;
    const C2: u32 = 0x1b87_3593;

    let mut h = seed;
    let mut blocks = data.chunks_exact(4);
    for block in &mut blocks {
        let mut k = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        k = k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
        h ^= k;
        h = h.rotate_left(13).wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        let mut k = tail
            .iter()
            .rev()
            .fold(0u32, |acc, &byte| (acc << 8) | u32::from(byte));
        k = k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
        h ^= k;
    }

    h ^= data.len() as u32;
    fmix32(h)
}

fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^ (h >> 16)
}
