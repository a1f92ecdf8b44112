//! Test doubles for driving the sensor without hardware.

use embassy_futures::yield_now;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{
    Error, ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation, SevenBitAddress,
};
use std::sync::{Arc, Mutex, MutexGuard};
use std::vec::Vec;

const REGISTERS: usize = 0x40;
const STATUS: u8 = 0x00;
const OUT_X_MSB: u8 = 0x01;
const OUT_Z_LSB: u8 = 0x06;
const WHO_AM_I: u8 = 0x0D;
const CTRL_REG1: u8 = 0x2A;
const ZYXDR: u8 = 0b0000_1000;
const ACTIVE: u8 = 0b0000_0001;

/// One observable step on the bus, in the order it happened.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transaction {
    Read(u8),
    Write(u8, u8),
    Wait(u64),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TestBusError {
    NoAcknowledge,
    Injected(u8),
}

impl Error for TestBusError {
    fn kind(&self) -> ErrorKind {
        match self {
            TestBusError::NoAcknowledge => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
            TestBusError::Injected(_) => ErrorKind::Other,
        }
    }
}

struct BusState {
    registers: [u8; REGISTERS],
    log: Vec<Transaction>,
    fail_read: Option<u8>,
    fail_write: Option<u8>,
    standby_writes: bool,
}

impl BusState {
    fn read(&mut self, register: u8) -> Result<u8, TestBusError> {
        if self.fail_read == Some(register) {
            return Err(TestBusError::Injected(register));
        }
        let value = *self
            .registers
            .get(register as usize)
            .ok_or(TestBusError::Injected(register))?;
        self.log.push(Transaction::Read(register));
        if register == OUT_Z_LSB {
            // Reading the last output byte acknowledges the sample.
            self.registers[STATUS as usize] &= !ZYXDR;
        }
        Ok(value)
    }

    fn write(&mut self, register: u8, value: u8) -> Result<(), TestBusError> {
        if self.fail_write == Some(register) {
            return Err(TestBusError::Injected(register));
        }
        if register as usize >= REGISTERS {
            return Err(TestBusError::Injected(register));
        }
        self.log.push(Transaction::Write(register, value));

        let ctrl1 = self.registers[CTRL_REG1 as usize];
        if self.standby_writes && ctrl1 & ACTIVE != 0 {
            // While active only the ACTIVE bit itself can change.
            if register == CTRL_REG1 {
                self.registers[CTRL_REG1 as usize] = (ctrl1 & !ACTIVE) | (value & ACTIVE);
            }
            return Ok(());
        }
        self.registers[register as usize] = value;
        Ok(())
    }
}

/// A register file answering on one 7-bit address.
///
/// Clones share state, so a test can keep a handle to script samples and inspect traffic
/// while the driver owns another. Every transaction yields once before touching state, which
/// lets concurrently polled readers interleave at bus boundaries.
#[derive(Clone)]
pub struct TestBus {
    address: SevenBitAddress,
    state: Arc<Mutex<BusState>>,
}

impl TestBus {
    /// A bus with an MMA8452Q at `address`.
    pub fn new(address: u8) -> Self {
        let mut registers = [0; REGISTERS];
        registers[WHO_AM_I as usize] = 0x2A;
        Self {
            address,
            state: Arc::new(Mutex::new(BusState {
                registers,
                log: Vec::new(),
                fail_read: None,
                fail_write: None,
                standby_writes: false,
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, BusState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn set_register(&self, register: u8, value: u8) {
        self.state().registers[register as usize] = value;
    }

    pub fn register(&self, register: u8) -> u8 {
        self.state().registers[register as usize]
    }

    /// Place a sample in the output registers and raise the data-ready flag.
    pub fn load_sample(&self, raw: [u8; 6]) {
        let mut state = self.state();
        let start = OUT_X_MSB as usize;
        state.registers[start..start + raw.len()].copy_from_slice(&raw);
        state.registers[STATUS as usize] |= ZYXDR;
    }

    pub fn set_ready(&self, ready: bool) {
        let mut state = self.state();
        if ready {
            state.registers[STATUS as usize] |= ZYXDR;
        } else {
            state.registers[STATUS as usize] &= !ZYXDR;
        }
    }

    /// Fail every read of `register` until cleared with `None`.
    pub fn fail_read(&self, register: Option<u8>) {
        self.state().fail_read = register;
    }

    /// Fail every write to `register` until cleared with `None`.
    pub fn fail_write(&self, register: Option<u8>) {
        self.state().fail_write = register;
    }

    /// Behave like the device when configuring: while CTRL_REG1 has ACTIVE set, writes are
    /// still acknowledged and logged but leave the registers unchanged, except for the
    /// ACTIVE bit.
    pub fn standby_writes_only(&self, enforce: bool) {
        self.state().standby_writes = enforce;
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.state().log.clone()
    }

    pub fn clear_transactions(&self) {
        self.state().log.clear();
    }

    pub fn reads_of(&self, register: u8) -> usize {
        self.state()
            .log
            .iter()
            .filter(|t| **t == Transaction::Read(register))
            .count()
    }

    /// A delay that records its waits in this bus's transaction log.
    pub fn delay(&self) -> TestDelay {
        TestDelay {
            state: self.state.clone(),
        }
    }
}

impl ErrorType for TestBus {
    type Error = TestBusError;
}

impl I2c for TestBus {
    async fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        yield_now().await;
        if address != self.address {
            return Err(TestBusError::NoAcknowledge);
        }

        let mut state = self.state();
        let mut pointer = None;
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    let (register, data) = bytes.split_first().ok_or(TestBusError::NoAcknowledge)?;
                    pointer = Some(*register);
                    for (register, value) in (*register..).zip(data.iter()) {
                        state.write(register, *value)?;
                    }
                }
                Operation::Read(buf) => {
                    let start = pointer.ok_or(TestBusError::NoAcknowledge)?;
                    for (register, byte) in (start..).zip(buf.iter_mut()) {
                        *byte = state.read(register)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Returns immediately, logging the requested wait.
pub struct TestDelay {
    state: Arc<Mutex<BusState>>,
}

impl DelayNs for TestDelay {
    async fn delay_ns(&mut self, ns: u32) {
        let mut state = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        state.log.push(Transaction::Wait(ns as u64));
    }
}
