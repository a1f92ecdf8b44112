use super::register::xyz_data_cfg::FullScale;
use crate::domain::acceleration::{Acceleration, Axis};

/// Signed 12-bit reading of one axis, range `-2048..=2047`.
pub type AxisCount = i32;

/// The six output registers as read: X, Y and Z, most significant byte first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample([u8; RawSample::LEN]);

impl RawSample {
    pub const LEN: usize = 6;

    pub const fn new(bytes: [u8; RawSample::LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; RawSample::LEN] {
        &self.0
    }
}

/// Combine each MSB/LSB pair into a signed count.
///
/// The device left-justifies its 12-bit two's-complement value in the 16-bit pair, so the
/// count is the pair read as an `i16` and shifted right by four. The shift is arithmetic and
/// rounds towards negative infinity, which is exact here since the low nibble carries no data.
pub fn assemble(raw: &RawSample) -> [AxisCount; 3] {
    let mut counts = [0; 3];
    for (count, pair) in counts.iter_mut().zip(raw.0.chunks_exact(2)) {
        *count = AxisCount::from(i16::from_be_bytes([pair[0], pair[1]]) >> 4);
    }
    counts
}

/// Scale counts to milli-g for the configured range and apply the mounting polarity.
pub fn convert(counts: [AxisCount; 3], full_scale: FullScale) -> Acceleration {
    let (numerator, denominator) = full_scale.scale();
    let mut values = [0; 3];
    for ((value, count), axis) in values.iter_mut().zip(counts).zip(Axis::ALL) {
        let mg = count * numerator / denominator;
        let mg = if axis.inverted() { -mg } else { mg };
        // |mg| <= 2048 * 1000 / 256
        *value = mg as i16;
    }
    Acceleration::new(values[0], values[1], values[2])
}
