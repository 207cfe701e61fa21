/// A band of absolute pixel differences and the number of bits a pair in that band carries
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Tier {
    pub min: u8,
    pub max: u8,
    pub capacity: usize,
}

impl Tier {
    const fn new(min: u8, max: u8, capacity: usize) -> Self {
        Self { min, max, capacity }
    }

    /// largest value that can be represented with `capacity` bits
    pub fn max_value(&self) -> u16 {
        (1 << self.capacity) - 1
    }

    pub fn contains(&self, abs_diff: u16) -> bool {
        (self.min as u16..=self.max as u16).contains(&abs_diff)
    }
}

/// Covers `[0,255]` contiguously, capacity does not decrease with the range.
pub const RANGE_TABLE: [Tier; 6] = [
    Tier::new(0, 7, 3),
    Tier::new(8, 15, 3),
    Tier::new(16, 31, 4),
    Tier::new(32, 63, 5),
    Tier::new(64, 127, 6),
    Tier::new(128, 255, 7),
];

/// Maps a signed pixel difference to its capacity tier.
///
/// Total over `i16`, differences beyond the table fall back to the highest tier.
pub fn classify(diff: i16) -> Tier {
    let abs_diff = diff.unsigned_abs();
    RANGE_TABLE
        .iter()
        .find(|tier| tier.contains(abs_diff))
        .copied()
        .unwrap_or(RANGE_TABLE[RANGE_TABLE.len() - 1])
}
