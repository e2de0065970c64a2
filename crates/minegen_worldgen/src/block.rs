//! # Block Data Model
//!
//! Block kinds produced by the world generator, and the block record
//! handed to callers.

use std::fmt;

/// The closed set of block kinds.
///
/// `Leaves` and `Wood` are reserved: the terrain classifier never produces
/// them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BlockType {
    /// Empty space.
    #[default]
    Air = 0,
    /// Grass-covered surface.
    Grass = 1,
    /// Sand surface and subsurface.
    Sand = 2,
    /// Subsurface under grass.
    Dirt = 3,
    /// Deep rock.
    Stone = 4,
    /// Tree canopy (reserved).
    Leaves = 5,
    /// Tree trunk (reserved).
    Wood = 6,
    /// Decoration placed on top of grass.
    Flower = 7,
}

/// Number of block kinds.
pub const BLOCK_TYPE_COUNT: usize = 8;

impl BlockType {
    /// Every block kind, in discriminant order.
    pub const ALL: [Self; BLOCK_TYPE_COUNT] = [
        Self::Air,
        Self::Grass,
        Self::Sand,
        Self::Dirt,
        Self::Stone,
        Self::Leaves,
        Self::Wood,
        Self::Flower,
    ];

    /// Converts a raw discriminant back into a block kind.
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Air),
            1 => Some(Self::Grass),
            2 => Some(Self::Sand),
            3 => Some(Self::Dirt),
            4 => Some(Self::Stone),
            5 => Some(Self::Leaves),
            6 => Some(Self::Wood),
            7 => Some(Self::Flower),
            _ => None,
        }
    }

    /// Returns true for empty space.
    #[inline]
    #[must_use]
    pub const fn is_air(self) -> bool {
        matches!(self, Self::Air)
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Air => "Air",
            Self::Grass => "Grass",
            Self::Sand => "Sand",
            Self::Dirt => "Dirt",
            Self::Stone => "Stone",
            Self::Leaves => "Leaves",
            Self::Wood => "Wood",
            Self::Flower => "Flower",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A generated block.
///
/// The dirty flag means nothing to the generator. It is always clear on a
/// fresh block and exists for downstream consumers (persistence, render
/// invalidation) to track modifications.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Block {
    block_type: BlockType,
    dirty: bool,
}

impl Block {
    /// Air block (empty).
    pub const AIR: Self = Self::new(BlockType::Air);

    /// Creates a clean block of the given kind.
    #[inline]
    #[must_use]
    pub const fn new(block_type: BlockType) -> Self {
        Self {
            block_type,
            dirty: false,
        }
    }

    /// The block kind.
    #[inline]
    #[must_use]
    pub const fn block_type(self) -> BlockType {
        self.block_type
    }

    /// Whether a consumer has marked this block as modified.
    #[inline]
    #[must_use]
    pub const fn is_dirty(self) -> bool {
        self.dirty
    }

    /// Flags the block as modified.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clears the modified flag.
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Returns true if this is an air block.
    #[inline]
    #[must_use]
    pub const fn is_air(self) -> bool {
        self.block_type.is_air()
    }
}

impl From<BlockType> for Block {
    #[inline]
    fn from(block_type: BlockType) -> Self {
        Self::new(block_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminants_round_trip() {
        for (i, block_type) in BlockType::ALL.iter().enumerate() {
            assert_eq!(*block_type as usize, i);
            assert_eq!(BlockType::from_u8(*block_type as u8), Some(*block_type));
        }
        assert_eq!(BlockType::from_u8(8), None);
        assert_eq!(BlockType::from_u8(u8::MAX), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(BlockType::Flower.to_string(), "Flower");
        assert_eq!(BlockType::Air.to_string(), "Air");
        assert_eq!(format!("{}", BlockType::Stone), "Stone");
    }

    #[test]
    fn test_new_block_is_clean() {
        let block = Block::new(BlockType::Grass);
        assert_eq!(block.block_type(), BlockType::Grass);
        assert!(!block.is_dirty());
        assert!(!block.is_air());
        assert!(Block::AIR.is_air());
    }

    #[test]
    fn test_dirty_flag() {
        let mut block = Block::from(BlockType::Sand);
        block.mark_dirty();
        assert!(block.is_dirty());
        assert_ne!(block, Block::new(BlockType::Sand));

        block.clear_dirty();
        assert!(!block.is_dirty());
        assert_eq!(block, Block::new(BlockType::Sand));
    }
}
