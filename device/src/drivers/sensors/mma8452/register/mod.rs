//! MMA8452Q register map and single-register bus access.

pub mod ctrl_reg1;
pub mod ctrl_reg2;
pub mod ctrl_reg4;
pub mod out_xyz;
pub mod status;
pub mod who_am_i;
pub mod xyz_data_cfg;

use crate::traits::i2c::I2cAddress;
use embedded_hal_async::i2c::I2c;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    Status = 0x00,
    OutXMsb = 0x01,
    OutXLsb = 0x02,
    OutYMsb = 0x03,
    OutYLsb = 0x04,
    OutZMsb = 0x05,
    OutZLsb = 0x06,

    Sysmod = 0x0B,
    IntSource = 0x0C,
    WhoAmI = 0x0D,
    XyzDataCfg = 0x0E,
    HpFilterCutoff = 0x0F,

    PlStatus = 0x10,
    PlCfg = 0x11,
    PlCount = 0x12,
    PlBfZcomp = 0x13,
    PlPLThsReg = 0x14,

    FfMtCfg = 0x15,
    FfMtSrc = 0x16,
    FfMtThs = 0x17,
    FfMtCount = 0x18,

    TransientCfg = 0x1D,
    TransientSrc = 0x1E,
    TransientThs = 0x1F,
    TransientCount = 0x20,

    PulseCfg = 0x21,
    PulseSrc = 0x22,
    PulseThsx = 0x23,
    PulseThsy = 0x24,
    PulseThsz = 0x25,
    PulseTmlt = 0x26,
    PulseLtcy = 0x27,
    PulseWind = 0x28,

    AslpCount = 0x29,
    CtrlReg1 = 0x2A,
    CtrlReg2 = 0x2B,
    CtrlReg3 = 0x2C,
    CtrlReg4 = 0x2D,
    CtrlReg5 = 0x2E,

    OffX = 0x2F,
    OffY = 0x30,
    OffZ = 0x31,
}

impl Register {
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

impl From<Register> for u8 {
    fn from(register: Register) -> u8 {
        register.addr()
    }
}

/// Read a single register in one write-read transaction.
pub async fn read_register<I: I2c>(
    address: I2cAddress,
    i2c: &mut I,
    register: Register,
) -> Result<u8, I::Error> {
    let mut buf = [0; 1];
    i2c.write_read(address.into(), &[register.addr()], &mut buf)
        .await?;
    Ok(buf[0])
}

/// Write a single register in one write transaction.
pub async fn write_register<I: I2c>(
    address: I2cAddress,
    i2c: &mut I,
    register: Register,
    value: u8,
) -> Result<(), I::Error> {
    i2c.write(address.into(), &[register.addr(), value]).await
}
