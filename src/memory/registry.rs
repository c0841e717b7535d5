//! Fixed-length, ordered collection of blocks.
//!
//! The registry is created once at startup and never grows or shrinks.
//! Indices are 0-based; block ids are `index + 1`.

use super::block::Block;
use super::summary::MemorySummary;

/// Ordered, fixed-size sequence of [`Block`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRegistry {
    blocks: Vec<Block>,
}

impl BlockRegistry {
    /// Create `count` untouched blocks with ids `1..=count`.
    pub fn create(count: usize) -> Self {
        let blocks = (1..=count).map(|id| Block::new(id as u32)).collect();
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the block at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Indices come from internal iteration
    /// or from an already validated selection, so this is an invariant
    /// violation rather than a user error.
    pub fn get(&self, index: usize) -> &Block {
        self.check_index(index);
        &self.blocks[index]
    }

    /// Mutable access to the block at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn get_mut(&mut self, index: usize) -> &mut Block {
        self.check_index(index);
        &mut self.blocks[index]
    }

    /// Overwrite the state of the block at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or if both flags are set.
    pub fn set(&mut self, index: usize, allocated: bool, freed: bool, size_kb: u32) {
        self.get_mut(index).apply(allocated, freed, size_kb);
    }

    /// Reset every block to untouched with size 0.
    pub fn clear_all(&mut self) {
        for block in &mut self.blocks {
            block.reset();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Display position `(row, column)` of `index` in a grid `columns` wide.
    pub fn grid_position(index: usize, columns: usize) -> (usize, usize) {
        (index / columns, index % columns)
    }

    /// One-pass statistics over all blocks.
    pub fn summary(&self) -> MemorySummary {
        MemorySummary::compute(&self.blocks)
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.blocks.len(),
            "block index {} out of range (registry holds {} blocks)",
            index,
            self.blocks.len()
        );
    }
}

impl<'a> IntoIterator for &'a BlockRegistry {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
