use super::{read_register, Register};
use crate::drivers::sensors::mma8452::sample::RawSample;
use crate::traits::i2c::I2cAddress;
use embedded_hal_async::i2c::I2c;

/// Output registers in wire order.
const OUT_XYZ: [Register; RawSample::LEN] = [
    Register::OutXMsb,
    Register::OutXLsb,
    Register::OutYMsb,
    Register::OutYLsb,
    Register::OutZMsb,
    Register::OutZLsb,
];

pub struct OutXyz;

impl OutXyz {
    /// Read the six output registers, one transaction each. Nothing is returned unless all six
    /// succeed.
    pub async fn read<I: I2c>(address: I2cAddress, i2c: &mut I) -> Result<RawSample, I::Error> {
        let mut buf = [0; RawSample::LEN];
        for (byte, register) in buf.iter_mut().zip(OUT_XYZ) {
            *byte = read_register(address, i2c, register).await?;
        }
        Ok(RawSample::new(buf))
    }
}
