//! # Descriptor catalogs
//!
//! A catalog pairs every value of an enumeration with a [`TypeDescription`], stored in ordinal
//! order so that lookups are a plain index. Catalogs are compiled-in constants: their length is
//! fixed by the array type and their ordering is checked by [`assert_catalog!`] at compile time,
//! and again by [`Catalog::new`] when a process starts.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Serialize;
use std::hash::{Hash, Hasher};
use std::ops::Range;

use crate::registry::{ConsistencyError, OutOfRangeError, Taxonomy};

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// An enumeration backed by a descriptor catalog.
pub trait Described: Taxonomy {
    /// The process-wide catalog for this enumeration.
    fn catalog() -> Catalog<'static, Self>;

    /// Descriptor of this identifier.
    fn descriptor(self) -> &'static TypeDescription<Self> {
        Self::catalog().lookup(self)
    }

    /// Length of the data vector a reading of this type produces.
    fn data_size(self) -> usize {
        self.descriptor().data_size
    }

    /// True if this type is attached to a single joint rather than a Cartesian frame.
    fn is_joint(self) -> bool {
        self.descriptor().is_joint
    }
}

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Metadata describing one identifier of an enumeration.
///
/// # Equality
///
/// Two descriptions are equal if and only if their `id`s are equal. The name, description, size
/// and joint flag are **not** compared, and hashing follows the same rule, so collecting
/// descriptions into a set deduplicates them by identifier.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TypeDescription<T> {
    /// Identifier this description belongs to.
    pub id: T,

    /// Short human readable name.
    pub name: &'static str,

    /// Longer description, may be empty.
    pub description: &'static str,

    /// Size of the data vector returned by a reading of this type.
    pub data_size: usize,

    /// True if this type is associated to a joint.
    pub is_joint: bool,
}

/// A validated view over a descriptor table.
///
/// Constructing a `Catalog` proves that the table has exactly one entry per identifier, in ordinal
/// order, so [`Catalog::lookup`] is a total, constant time index.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a, T: Taxonomy> {
    entries: &'a [TypeDescription<T>],
}

/// Placement of one reading inside a composite reading buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot<T> {
    /// Type of the reading.
    pub id: T,

    /// Index of the first element of the reading in the buffer.
    pub offset: usize,

    /// Number of elements in the reading.
    pub size: usize,
}

/// Layout of a buffer holding several readings back to back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BufferLayout<T> {
    slots: Vec<Slot<T>>,
    len: usize,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl<T> TypeDescription<T> {
    /// Create a new description.
    pub const fn new(
        id: T,
        name: &'static str,
        data_size: usize,
        is_joint: bool,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            description,
            data_size,
            is_joint,
        }
    }
}

impl<T: PartialEq> PartialEq for TypeDescription<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T: Eq> Eq for TypeDescription<T> {}

impl<T: Hash> Hash for TypeDescription<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl<'a, T: Taxonomy> Catalog<'a, T> {
    /// Validate a descriptor table against its enumeration.
    ///
    /// Fails if the table length differs from the cardinality constant, or if any entry is not at
    /// the index given by its identifier's ordinal.
    pub fn new(entries: &'a [TypeDescription<T>]) -> Result<Self, ConsistencyError> {
        if entries.len() != T::SIZE {
            return Err(ConsistencyError::CatalogLength {
                taxonomy: T::NAME,
                expected: T::SIZE,
                found: entries.len(),
            });
        }

        for (index, entry) in entries.iter().enumerate() {
            if entry.id.ordinal() != index {
                return Err(ConsistencyError::CatalogOrder {
                    taxonomy: T::NAME,
                    index,
                    found: entry.id.ordinal(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Wrap a table already checked by [`assert_catalog!`].
    ///
    /// Performs no runtime check, [`crate::check_consistency`] validates every compiled-in table
    /// once at startup.
    pub(crate) fn verified(entries: &'a [TypeDescription<T>]) -> Self {
        Self { entries }
    }

    /// Descriptor of `id`.
    pub fn lookup(&self, id: T) -> &'a TypeDescription<T> {
        &self.entries[id.ordinal()]
    }

    /// Descriptor of the identifier with the given raw integer value.
    pub fn lookup_ordinal(&self, ordinal: usize) -> Result<&'a TypeDescription<T>, OutOfRangeError> {
        T::from_ordinal(ordinal).map(|id| self.lookup(id))
    }

    /// Descriptor with the given human readable name.
    pub fn find_by_name(&self, name: &str) -> Option<&'a TypeDescription<T>> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// All descriptors in ascending ordinal order.
    ///
    /// Each call starts a fresh iteration.
    pub fn all(&self) -> std::slice::Iter<'a, TypeDescription<T>> {
        self.entries.iter()
    }

    /// Descriptors of joint space types.
    pub fn joint(&self) -> impl Iterator<Item = &'a TypeDescription<T>> {
        self.entries.iter().filter(|e| e.is_joint)
    }

    /// Descriptors of Cartesian space types.
    pub fn cartesian(&self) -> impl Iterator<Item = &'a TypeDescription<T>> {
        self.entries.iter().filter(|e| !e.is_joint)
    }

    pub fn is_joint(&self, id: T) -> bool {
        self.lookup(id).is_joint
    }

    pub fn data_size(&self, id: T) -> usize {
        self.lookup(id).data_size
    }

    /// Number of descriptors, always equal to the cardinality constant.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the data sizes of every type in the catalog.
    pub fn total_data_size(&self) -> usize {
        self.entries.iter().map(|e| e.data_size).sum()
    }

    /// Lay out one reading of each of `ids`, in the given order, in a single buffer.
    ///
    /// Repeated identifiers each get their own slot.
    pub fn layout(&self, ids: &[T]) -> BufferLayout<T> {
        let mut slots = Vec::with_capacity(ids.len());
        let mut offset = 0;

        for &id in ids {
            let size = self.data_size(id);
            slots.push(Slot { id, offset, size });
            offset += size;
        }

        BufferLayout { slots, len: offset }
    }
}

impl<T> Slot<T> {
    /// Range of buffer indices covered by this slot.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.size
    }
}

impl<T: PartialEq> BufferLayout<T> {
    /// Total buffer length.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All slots, in the order they were requested.
    pub fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    /// First slot holding a reading of `id`.
    pub fn slot(&self, id: T) -> Option<&Slot<T>> {
        self.slots.iter().find(|s| s.id == id)
    }
}

// ------------------------------------------------------------------------------------------------
// MACROS
// ------------------------------------------------------------------------------------------------

/// Check at compile time that entry `i` of a descriptor table describes ordinal `i`.
///
/// The table's length is already pinned to the cardinality constant by its array type.
macro_rules! assert_catalog {
    ($table:ident) => {
        const _: () = {
            let mut i = 0;
            while i < $table.len() {
                assert!(
                    $table[i].id.ordinal() == i,
                    "catalog entries must be stored in ordinal order"
                );
                i += 1;
            }
        };
    };
}
