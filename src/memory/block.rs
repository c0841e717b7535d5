//! A single block of the visualized memory pool.
//!
//! Blocks never change identity. Only their allocation state moves, and it
//! only moves through the methods below so that a block can never be both
//! allocated and freed at the same time.

/// Smallest size (in KB) a block may be allocated with.
pub const MIN_BLOCK_SIZE_KB: u32 = 10;

/// Largest size (in KB) a block may be allocated with.
pub const MAX_BLOCK_SIZE_KB: u32 = 100;

/// Allocation state of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    /// Never allocated, or reset by "Clear All".
    #[default]
    Untouched,
    /// Holds a live allocation of the given size in KB.
    Allocated { size_kb: u32 },
    /// Previously allocated and released, waiting for a clear.
    Freed,
}

/// One fixed-identity unit of the memory pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    id: u32,
    state: BlockState,
}

impl Block {
    /// Create an untouched block with the given 1-based id.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            state: BlockState::Untouched,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn state(&self) -> BlockState {
        self.state
    }

    /// True iff the block currently holds a live allocation.
    pub fn is_allocated(&self) -> bool {
        matches!(self.state, BlockState::Allocated { .. })
    }

    /// True iff the block was released and not yet cleared.
    pub fn is_freed(&self) -> bool {
        matches!(self.state, BlockState::Freed)
    }

    /// Allocation size in KB, 0 when not allocated.
    pub fn size_kb(&self) -> u32 {
        match self.state {
            BlockState::Allocated { size_kb } => size_kb,
            _ => 0,
        }
    }

    /// Mark the block allocated. Always clears the freed flag.
    pub fn allocate(&mut self, size_kb: u32) {
        self.state = BlockState::Allocated { size_kb };
    }

    /// Release the allocation. Always clears the allocated flag.
    pub fn free(&mut self) {
        self.state = BlockState::Freed;
    }

    /// Return to the untouched state with size 0.
    pub fn reset(&mut self) {
        self.state = BlockState::Untouched;
    }

    /// Apply a raw `(allocated, freed, size)` triple.
    ///
    /// # Panics
    ///
    /// Panics if both `allocated` and `freed` are set.
    pub fn apply(&mut self, allocated: bool, freed: bool, size_kb: u32) {
        assert!(
            !(allocated && freed),
            "block {} cannot be both allocated and freed",
            self.id
        );
        self.state = match (allocated, freed) {
            (true, _) => BlockState::Allocated { size_kb },
            (false, true) => BlockState::Freed,
            (false, false) => BlockState::Untouched,
        };
    }
}
