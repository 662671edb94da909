use crate::alloc::collections::TryReserveError;

/// An error sizing the slot array of a [`crate::Table`].
///
/// Every table operation besides allocation is total, so this is only produced by
/// [`crate::Table::try_with_capacity`] and by [`crate::Table::try_insert`] when an insertion
/// would trigger a rebuild.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The requested capacity (or the prime it rounds up to) does not fit in a `usize`.
    #[error("table capacity overflow")]
    CapacityOverflow,
    /// The allocator could not provide a slot array of the given capacity.
    #[error("failed to allocate a table with {capacity} slots")]
    AllocError {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
}
