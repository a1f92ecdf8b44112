use super::{read_register, Register};
use crate::traits::i2c::I2cAddress;
use embedded_hal_async::i2c::I2c;

const ZYXOW: u8 = 0b1000_0000;
const ZOW: u8 = 0b0100_0000;
const YOW: u8 = 0b0010_0000;
const XOW: u8 = 0b0001_0000;
const ZYXDR: u8 = 0b0000_1000;
const ZDR: u8 = 0b0000_0100;
const YDR: u8 = 0b0000_0010;
const XDR: u8 = 0b0000_0001;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    bits: u8,
}

impl Status {
    pub async fn read<I: I2c>(address: I2cAddress, i2c: &mut I) -> Result<Status, I::Error> {
        Ok(read_register(address, i2c, Register::Status).await?.into())
    }

    /// A complete X, Y and Z set is waiting in the output registers.
    pub fn xyz_available(&self) -> bool {
        self.bits & ZYXDR != 0
    }

    pub fn x_available(&self) -> bool {
        self.bits & XDR != 0
    }

    pub fn y_available(&self) -> bool {
        self.bits & YDR != 0
    }

    pub fn z_available(&self) -> bool {
        self.bits & ZDR != 0
    }

    /// A previous X, Y and Z set was overwritten before it was read.
    pub fn xyz_overwritten(&self) -> bool {
        self.bits & ZYXOW != 0
    }

    pub fn any_overwritten(&self) -> bool {
        self.bits & (ZYXOW | ZOW | YOW | XOW) != 0
    }
}

impl From<u8> for Status {
    fn from(bits: u8) -> Status {
        Status { bits }
    }
}
