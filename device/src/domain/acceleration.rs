//! Types related to acceleration.

use core::fmt::{Debug, Display, Formatter};
use core::ops::Index;

/// One of the three sensing axes, in wire order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Whether the value on this axis is negated to account for how the sensor is mounted.
    pub const fn inverted(&self) -> bool {
        match self {
            Axis::X => false,
            Axis::Y | Axis::Z => true,
        }
    }
}

/// A converted tri-axial sample, in milli-g.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub struct Acceleration {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Acceleration {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    pub fn values(&self) -> [i16; 3] {
        [self.x, self.y, self.z]
    }

    /// Little-endian `i16` triplet in X, Y, Z order.
    pub fn to_le_bytes(&self) -> [u8; 6] {
        let mut bytes = [0; 6];
        for (chunk, value) in bytes.chunks_exact_mut(2).zip(self.values()) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        bytes
    }
}

impl Index<Axis> for Acceleration {
    type Output = i16;

    fn index(&self, axis: Axis) -> &i16 {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl Debug for Acceleration {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Acceleration")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Acceleration {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(
            f,
            "Acceleration(x: {}mg, y: {}mg, z: {}mg)",
            self.x,
            self.y,
            self.z
        );
    }
}

impl Display for Acceleration {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {}) mg", self.x, self.y, self.z)
    }
}
