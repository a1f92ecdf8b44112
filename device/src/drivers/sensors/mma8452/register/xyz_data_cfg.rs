use super::{write_register, Register};
use crate::traits::i2c::I2cAddress;
use embedded_hal_async::i2c::I2c;

const HPF_OUT: u8 = 0b0001_0000;

/// Milli-g per g, the numerator shared by every range.
pub const SCALE_NUMERATOR: i32 = 1000;

/// Full-scale measurement range (`FS[1:0]`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FullScale {
    G2,
    G4,
    G8,
}

impl FullScale {
    /// Signed 12-bit counts per g in this range.
    pub const fn counts_per_g(&self) -> i32 {
        match self {
            FullScale::G2 => 1024,
            FullScale::G4 => 512,
            FullScale::G8 => 256,
        }
    }

    /// `(numerator, denominator)` taking a 12-bit count to milli-g.
    pub const fn scale(&self) -> (i32, i32) {
        (SCALE_NUMERATOR, self.counts_per_g())
    }
}

impl From<FullScale> for u8 {
    fn from(fs: FullScale) -> Self {
        match fs {
            FullScale::G2 => 0b00,
            FullScale::G4 => 0b01,
            FullScale::G8 => 0b10,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct XyzDataCfg {
    full_scale: FullScale,
    high_pass: bool,
}

impl Default for XyzDataCfg {
    fn default() -> Self {
        Self {
            full_scale: FullScale::G2,
            high_pass: false,
        }
    }
}

impl XyzDataCfg {
    pub async fn write<I: I2c>(
        address: I2cAddress,
        i2c: &mut I,
        reg: XyzDataCfg,
    ) -> Result<(), I::Error> {
        write_register(address, i2c, Register::XyzDataCfg, reg.into()).await
    }

    pub async fn set<I: I2c, F: FnOnce(&mut XyzDataCfg)>(
        address: I2cAddress,
        i2c: &mut I,
        set: F,
    ) -> Result<(), I::Error> {
        let mut reg = XyzDataCfg::default();
        set(&mut reg);
        Self::write(address, i2c, reg).await
    }

    pub fn full_scale(&mut self, fs: FullScale) -> &mut Self {
        self.full_scale = fs;
        self
    }

    pub fn high_pass(&mut self, enable: bool) -> &mut Self {
        self.high_pass = enable;
        self
    }
}

impl From<XyzDataCfg> for u8 {
    fn from(reg: XyzDataCfg) -> u8 {
        u8::from(reg.full_scale) | if reg.high_pass { HPF_OUT } else { 0 }
    }
}
