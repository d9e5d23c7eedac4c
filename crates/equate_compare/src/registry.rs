//! Process-wide default comparers, one per element type.
//!
//! The registry maps `TypeId` to a leaked `'static` comparer. Lookups of an
//! already-published type take only a shared read lock on one shard;
//! first-time publication double-checks under that shard's write lock, so
//! threads racing on the same type observe exactly one published instance.

use std::any::{type_name, Any, TypeId};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};

use equate_types::ComparerKind;

use crate::comparer::Variant;
use crate::{Element, EqualityComparer};

/// Number of independently locked shards.
const NUM_SHARDS: usize = 16;

type Published = &'static (dyn Any + Send + Sync);

/// Per-shard storage of published comparers.
struct RegistryShard {
    comparers: FxHashMap<TypeId, Published>,
}

impl RegistryShard {
    fn new() -> Self {
        Self {
            comparers: FxHashMap::default(),
        }
    }

    /// The published comparer for `T`, if any.
    fn get<T: Element>(&self) -> Option<&'static T::Comparer> {
        self.comparers
            .get(&TypeId::of::<T>())
            .copied()
            .and_then(<dyn Any + Send + Sync>::downcast_ref::<T::Comparer>)
    }
}

/// Sharded cache of default comparers.
///
/// # Thread Safety
/// Uses `RwLock` per shard. Published comparers are leaked and never
/// removed, so returned references are `'static`.
pub struct ComparerRegistry {
    shards: [RwLock<RegistryShard>; NUM_SHARDS],
    /// Total number of published comparers across all shards.
    published: AtomicUsize,
}

impl ComparerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            shards: std::array::from_fn(|_| RwLock::new(RegistryShard::new())),
            published: AtomicUsize::new(0),
        }
    }

    /// The process-wide registry behind [`default_comparer`].
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<ComparerRegistry> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    /// Compute the shard for a type.
    #[inline]
    fn shard_for(id: TypeId) -> usize {
        let mut hasher = FxHasher::default();
        id.hash(&mut hasher);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "only the low bits select a shard"
        )]
        let hash = hasher.finish() as usize;
        hash % NUM_SHARDS
    }

    /// The default comparer for `T`, publishing it on first request.
    ///
    /// Every call for the same `T` on the same registry returns the same
    /// reference.
    pub fn get_or_init<T: Element>(&self) -> &'static T::Comparer {
        let shard = &self.shards[Self::shard_for(TypeId::of::<T>())];

        // Fast path: already published.
        if let Some(comparer) = shard.read().get::<T>() {
            return comparer;
        }

        // Slow path: publish.
        let mut guard = shard.write();

        // Double-check after acquiring the write lock.
        if let Some(comparer) = guard.get::<T>() {
            return comparer;
        }

        let kind = <T::Comparer as Variant<T>>::KIND;
        debug_assert_eq!(
            kind,
            ComparerKind::resolve(&T::TYPE),
            "{} declares a comparer that disagrees with its descriptor",
            type_name::<T>()
        );

        let comparer: &'static T::Comparer = Box::leak(Box::new(T::Comparer::default()));
        guard.comparers.insert(TypeId::of::<T>(), comparer);
        self.published.fetch_add(1, Ordering::Relaxed);

        tracing::debug!(element = type_name::<T>(), %kind, "published default comparer");
        comparer
    }

    /// Returns `true` if a comparer for `T` has been published.
    pub fn contains<T: Element>(&self) -> bool {
        self.shards[Self::shard_for(TypeId::of::<T>())]
            .read()
            .get::<T>()
            .is_some()
    }

    /// Number of published comparers.
    pub fn len(&self) -> usize {
        self.published.load(Ordering::Relaxed)
    }

    /// Returns `true` if nothing has been published yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ComparerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide default comparer for `T`.
///
/// Repeated calls return the identical instance.
#[inline]
pub fn default_comparer<T: Element>() -> &'static T::Comparer {
    ComparerRegistry::global().get_or_init::<T>()
}

/// The default comparer for `T` as a trait object.
#[inline]
pub fn default_dyn<T: Element>() -> &'static dyn EqualityComparer<T> {
    default_comparer::<T>()
}

/// Returns `true` if `comparer` is `T`'s default variant.
///
/// Decided by the comparer's type, not its address: the variants are
/// stateless, so every instance of `T::Comparer` behaves like the published
/// one, while zero-sized explicit comparers may share its address.
pub fn is_default<T: Element>(comparer: &dyn EqualityComparer<T>) -> bool {
    comparer
        .as_variant()
        .is_some_and(<dyn Any>::is::<T::Comparer>)
}
