//! `FixedHasher` and `NoOpHasher`.
//!
//! `FixedHasher` is *foldhash* with a constant seed, so equal inputs hash
//! equally across runs. `NoOpHasher` uses the written integer as the hash,
//! which is all a [`TypeId`](core::any::TypeId) key needs.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const FIXED_SEED: FixedState = FixedState::with_seed(0x5EED_4A11_B0B5_C0DE);

/// Alias of [`foldhash::fast::FoldHasher`] created from a constant seed.
pub type FixedHasher = FoldHasher<'static>;

/// [`BuildHasher`] producing [`FixedHasher`]s.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use rm_utils::hash::FixedHashState;
///
/// let mut hasher = FixedHashState.build_hasher();
/// "name".hash(&mut hasher);
/// let _stable = hasher.finish();
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_SEED.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// Hasher that stores the last written `u64` as the hash value.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        // Keys are expected to call `write_u64`; fold anything else in.
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// [`BuildHasher`] producing [`NoOpHasher`]s.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}
