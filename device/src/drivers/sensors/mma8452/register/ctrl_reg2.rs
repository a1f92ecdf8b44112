use super::{write_register, Register};
use crate::traits::i2c::I2cAddress;
use embedded_hal_async::i2c::I2c;

const RST: u8 = 0b0100_0000;

/// Active mode oversampling (`MODS[1:0]`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
    Normal,
    LowNoiseLowPower,
    HighResolution,
    LowPower,
}

impl From<PowerMode> for u8 {
    fn from(mode: PowerMode) -> Self {
        match mode {
            PowerMode::Normal => 0b00,
            PowerMode::LowNoiseLowPower => 0b01,
            PowerMode::HighResolution => 0b10,
            PowerMode::LowPower => 0b11,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ctrl2 {
    reset: bool,
    mode: PowerMode,
}

impl Default for Ctrl2 {
    fn default() -> Self {
        Self {
            reset: false,
            mode: PowerMode::Normal,
        }
    }
}

impl Ctrl2 {
    pub async fn write<I: I2c>(
        address: I2cAddress,
        i2c: &mut I,
        reg: Ctrl2,
    ) -> Result<(), I::Error> {
        write_register(address, i2c, Register::CtrlReg2, reg.into()).await
    }

    pub async fn set<I: I2c, F: FnOnce(&mut Ctrl2)>(
        address: I2cAddress,
        i2c: &mut I,
        set: F,
    ) -> Result<(), I::Error> {
        let mut reg = Ctrl2::default();
        set(&mut reg);
        Self::write(address, i2c, reg).await
    }

    /// Software reset. The bit clears itself once the reset completes.
    pub fn reset(&mut self) -> &mut Self {
        self.reset = true;
        self
    }

    pub fn power_mode(&mut self, mode: PowerMode) -> &mut Self {
        self.mode = mode;
        self
    }
}

impl From<Ctrl2> for u8 {
    fn from(reg: Ctrl2) -> u8 {
        u8::from(reg.mode) | if reg.reset { RST } else { 0 }
    }
}
