#![macro_use]
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(async_fn_in_trait)]
//! Acquisition of tri-axial acceleration from an NXP MMA8452Q over an async I2C bus, served
//! as a snapshot byte stream.
//!
//! The pipeline has four stages:
//!
//! * the [`Mma8452`] driver checks the data-ready flag and reads the six output registers,
//! * the raw bytes are assembled into signed 12-bit counts,
//! * the counts are converted to milli-g with the mounting polarity applied,
//! * an [`AccelStream`] serializes the result into a fixed-size snapshot and hands it out
//!   through repeated, possibly partial, `read` calls.
//!
//! # Example
//!
//! ```ignore
//! use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
//! use mma8452_device::{AccelStream, Config, Encoding, Mma8452};
//!
//! let driver = Mma8452::new(i2c, Config::default());
//!
//! // The stream only exists if the sensor was configured successfully.
//! let stream: AccelStream<CriticalSectionRawMutex, _> =
//!     AccelStream::mount(driver, &mut delay, Encoding::Binary).await?;
//!
//! let mut buf = [0; 6];
//! let n = stream.read(&mut buf).await?;
//! ```

pub(crate) mod fmt;

pub mod domain;
pub use domain::acceleration::{Acceleration, Axis};

pub mod traits;
pub use traits::i2c::I2cAddress;

pub mod drivers;
pub use drivers::sensors::mma8452::{Config, FullScale, Mma8452, Mma8452Error, OutputDataRate};

pub mod stream;
pub use stream::{AccelStream, Encoding};

#[cfg(feature = "std")]
pub mod testutil;
