use super::{write_register, Register};
use crate::traits::i2c::I2cAddress;
use embedded_hal_async::i2c::I2c;

/// Interrupt sources that may be routed to the INT pins.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Interrupt {
    DataReady = 0b0000_0001,
    FreefallMotion = 0b0000_0100,
    Pulse = 0b0000_1000,
    Orientation = 0b0001_0000,
    Transient = 0b0010_0000,
    AutoSleep = 0b1000_0000,
}

/// Interrupt enable mask. The default has every source disabled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Ctrl4 {
    enabled: u8,
}

impl Ctrl4 {
    pub async fn write<I: I2c>(
        address: I2cAddress,
        i2c: &mut I,
        reg: Ctrl4,
    ) -> Result<(), I::Error> {
        write_register(address, i2c, Register::CtrlReg4, reg.into()).await
    }

    pub async fn set<I: I2c, F: FnOnce(&mut Ctrl4)>(
        address: I2cAddress,
        i2c: &mut I,
        set: F,
    ) -> Result<(), I::Error> {
        let mut reg = Ctrl4::default();
        set(&mut reg);
        Self::write(address, i2c, reg).await
    }

    pub fn enable(&mut self, interrupt: Interrupt) -> &mut Self {
        self.enabled |= interrupt as u8;
        self
    }

    pub fn disable_all(&mut self) -> &mut Self {
        self.enabled = 0;
        self
    }
}

impl From<Ctrl4> for u8 {
    fn from(reg: Ctrl4) -> u8 {
        reg.enabled
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    #[test]
    fn test_mask() {
        let mut reg = Ctrl4::default();
        reg.enable(Interrupt::DataReady).enable(Interrupt::Transient);
        assert_eq!(0x21, u8::from(reg));
        reg.disable_all();
        assert_eq!(0x00, u8::from(reg));
    }
}
