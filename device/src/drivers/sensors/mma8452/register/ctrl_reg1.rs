use super::{write_register, Register};
use crate::traits::i2c::I2cAddress;
use embedded_hal_async::i2c::I2c;

const ACTIVE: u8 = 0b0000_0001;
const LNOISE: u8 = 0b0000_0100;
const DR_SHIFT: u8 = 3;

/// Output data rate in active mode (`DR[2:0]`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputDataRate {
    Hz800,
    Hz400,
    Hz200,
    Hz100,
    Hz50,
    Hz12p5,
    Hz6p25,
    Hz1p56,
}

impl From<OutputDataRate> for u8 {
    fn from(odr: OutputDataRate) -> Self {
        let dr = match odr {
            OutputDataRate::Hz800 => 0b000,
            OutputDataRate::Hz400 => 0b001,
            OutputDataRate::Hz200 => 0b010,
            OutputDataRate::Hz100 => 0b011,
            OutputDataRate::Hz50 => 0b100,
            OutputDataRate::Hz12p5 => 0b101,
            OutputDataRate::Hz6p25 => 0b110,
            OutputDataRate::Hz1p56 => 0b111,
        };
        dr << DR_SHIFT
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ctrl1 {
    output_data_rate: OutputDataRate,
    low_noise: bool,
    active: bool,
}

impl Default for Ctrl1 {
    /// Power-on value: standby at 800 Hz.
    fn default() -> Self {
        Self {
            output_data_rate: OutputDataRate::Hz800,
            low_noise: false,
            active: false,
        }
    }
}

impl Ctrl1 {
    pub async fn write<I: I2c>(
        address: I2cAddress,
        i2c: &mut I,
        reg: Ctrl1,
    ) -> Result<(), I::Error> {
        write_register(address, i2c, Register::CtrlReg1, reg.into()).await
    }

    /// Write the power-on value as altered by `set`.
    pub async fn set<I: I2c, F: FnOnce(&mut Ctrl1)>(
        address: I2cAddress,
        i2c: &mut I,
        set: F,
    ) -> Result<(), I::Error> {
        let mut reg = Ctrl1::default();
        set(&mut reg);
        Self::write(address, i2c, reg).await
    }

    pub fn output_data_rate(&mut self, odr: OutputDataRate) -> &mut Self {
        self.output_data_rate = odr;
        self
    }

    pub fn active(&mut self, active: bool) -> &mut Self {
        self.active = active;
        self
    }

    pub fn low_noise(&mut self, low_noise: bool) -> &mut Self {
        self.low_noise = low_noise;
        self
    }
}

impl From<Ctrl1> for u8 {
    fn from(reg: Ctrl1) -> u8 {
        let mut bits = u8::from(reg.output_data_rate);
        if reg.low_noise {
            bits |= LNOISE;
        }
        if reg.active {
            bits |= ACTIVE;
        }
        bits
    }
}
