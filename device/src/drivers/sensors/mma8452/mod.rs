pub mod register;
pub mod sample;

use crate::domain::acceleration::Acceleration;
use crate::traits::i2c::I2cAddress;
use crate::traits::sensors::accelerometer::Accelerometer;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;
use register::ctrl_reg1::Ctrl1;
use register::ctrl_reg2::Ctrl2;
use register::ctrl_reg4::Ctrl4;
use register::out_xyz::OutXyz;
use register::status::Status;
use register::who_am_i::{WhoAmI, MMA8452Q_ID};
use register::xyz_data_cfg::XyzDataCfg;
use register::Register;
use sample::RawSample;

pub use register::ctrl_reg1::OutputDataRate;
pub use register::xyz_data_cfg::FullScale;

/// Address with SA0 pulled low.
pub const ADDR: u8 = 0x1C;
/// Address with SA0 pulled high.
pub const ADDR_SA0: u8 = 0x1D;

/// Time the device needs to come back from a software reset.
pub const RESET_DELAY_MS: u32 = 20;

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mma8452Error<E> {
    /// A register transaction failed.
    Bus(E),
    /// Configuring the device failed; it must not be used.
    Initialization { register: Register, error: E },
}

impl<E> From<E> for Mma8452Error<E> {
    fn from(e: E) -> Mma8452Error<E> {
        Mma8452Error::Bus(e)
    }
}

impl<E> Mma8452Error<E> {
    fn initialization(register: Register) -> impl FnOnce(E) -> Mma8452Error<E> {
        move |error| Mma8452Error::Initialization { register, error }
    }
}

/// Sampling parameters, fixed at initialization.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub address: I2cAddress,
    pub output_data_rate: OutputDataRate,
    pub full_scale: FullScale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: I2cAddress::new(ADDR),
            output_data_rate: OutputDataRate::Hz1p56,
            full_scale: FullScale::G2,
        }
    }
}

impl Config {
    pub fn address(mut self, address: I2cAddress) -> Self {
        self.address = address;
        self
    }

    pub fn output_data_rate(mut self, odr: OutputDataRate) -> Self {
        self.output_data_rate = odr;
        self
    }

    pub fn full_scale(mut self, fs: FullScale) -> Self {
        self.full_scale = fs;
        self
    }
}

pub struct Mma8452<I> {
    i2c: I,
    config: Config,
}

impl<I> Mma8452<I>
where
    I: I2c,
{
    pub fn new(i2c: I, config: Config) -> Self {
        Self { i2c, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reset the device, configure it in standby and then switch it to active mode with
    /// interrupts disabled.
    ///
    /// Stops at the first failed write; the device is then in an unknown state.
    pub async fn initialize<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), Mma8452Error<I::Error>> {
        let address = self.config.address;

        let id = WhoAmI::read(address, &mut self.i2c)
            .await
            .map_err(Mma8452Error::initialization(Register::WhoAmI))?;
        if id == MMA8452Q_ID {
            info!("MMA8452Q at {:#x}", u8::from(address));
        } else {
            warn!(
                "unexpected chip id {:#x} at {:#x}, continuing",
                id,
                u8::from(address)
            );
        }

        Ctrl2::set(address, &mut self.i2c, |reg| {
            reg.reset();
        })
        .await
        .map_err(Mma8452Error::initialization(Register::CtrlReg2))?;
        delay.delay_ms(RESET_DELAY_MS).await;

        // Configuration registers only take writes in standby.
        let odr = self.config.output_data_rate;
        Ctrl1::set(address, &mut self.i2c, |reg| {
            reg.output_data_rate(odr);
        })
        .await
        .map_err(Mma8452Error::initialization(Register::CtrlReg1))?;

        let fs = self.config.full_scale;
        XyzDataCfg::set(address, &mut self.i2c, |reg| {
            reg.full_scale(fs);
        })
        .await
        .map_err(Mma8452Error::initialization(Register::XyzDataCfg))?;

        Ctrl2::write(address, &mut self.i2c, Ctrl2::default())
            .await
            .map_err(Mma8452Error::initialization(Register::CtrlReg2))?;

        Ctrl4::set(address, &mut self.i2c, |reg| {
            reg.disable_all();
        })
        .await
        .map_err(Mma8452Error::initialization(Register::CtrlReg4))?;

        Ctrl1::set(address, &mut self.i2c, |reg| {
            reg.output_data_rate(odr).active(true);
        })
        .await
        .map_err(Mma8452Error::initialization(Register::CtrlReg1))?;

        debug!("configured {:?}", self.config);
        Ok(())
    }

    /// Read the output registers if the device flags a complete new sample.
    ///
    /// `Ok(None)` means nothing new since the last fetch.
    pub async fn fetch(&mut self) -> Result<Option<RawSample>, Mma8452Error<I::Error>> {
        let address = self.config.address;
        let status = Status::read(address, &mut self.i2c).await?;
        if !status.xyz_available() {
            trace!("no sample ready");
            return Ok(None);
        }
        if status.xyz_overwritten() {
            debug!("previous sample overwritten before it was read");
        }
        let raw = OutXyz::read(address, &mut self.i2c).await?;
        trace!("fetched {:?}", raw);
        Ok(Some(raw))
    }

    /// Give back the bus.
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I> Accelerometer for Mma8452<I>
where
    I: I2c,
{
    type Error = Mma8452Error<I::Error>;

    async fn acceleration(&mut self) -> Result<Option<Acceleration>, Self::Error> {
        let full_scale = self.config.full_scale;
        Ok(self
            .fetch()
            .await?
            .map(|raw| sample::convert(sample::assemble(&raw), full_scale)))
    }
}
