#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use rgb7seg::RegisterBus;

/// A transfer seen by [`RecordingBus`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Write {
    Register(u8, u8),
    Block(u8, Vec<u8>),
}

/// Error returned by [`RecordingBus`] when told to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BusFault;

/// Shared view of the transfers made through a [`RecordingBus`]
#[derive(Debug, Clone, Default)]
pub(crate) struct BusLog(Rc<RefCell<Vec<Write>>>);

impl BusLog {
    pub(crate) fn writes(&self) -> Vec<Write> {
        self.0.borrow().clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub(crate) fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub(crate) fn blocks(&self) -> Vec<(u8, Vec<u8>)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|write| match write {
                Write::Block(start, values) => Some((*start, values.clone())),
                Write::Register(..) => None,
            })
            .collect()
    }

    pub(crate) fn count_register(&self, register: u8) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|write| matches!(write, Write::Register(r, _) if *r == register))
            .count()
    }
}

/// [`RegisterBus`] that records every transfer
#[derive(Debug)]
pub(crate) struct RecordingBus {
    log: BusLog,
    transfers: usize,
    fail_at: Option<usize>,
}

impl RecordingBus {
    pub(crate) fn new() -> (Self, BusLog) {
        let log = BusLog::default();
        let bus = Self {
            log: log.clone(),
            transfers: 0,
            fail_at: None,
        };
        (bus, log)
    }

    /// Fail the transfer with the given zero-based number
    pub(crate) fn failing_at(transfer: usize) -> (Self, BusLog) {
        let (mut bus, log) = Self::new();
        bus.fail_at = Some(transfer);
        (bus, log)
    }

    fn record(&mut self, write: Write) -> Result<(), BusFault> {
        let transfer = self.transfers;
        self.transfers += 1;
        if self.fail_at == Some(transfer) {
            return Err(BusFault);
        }
        self.log.0.borrow_mut().push(write);
        Ok(())
    }
}

impl RegisterBus for RecordingBus {
    type Error = BusFault;

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.record(Write::Register(register, value))
    }

    fn write_block(&mut self, start: u8, values: &[u8]) -> Result<(), Self::Error> {
        self.record(Write::Block(start, values.to_vec()))
    }
}

/// `embedded-hal` I2C bus that records `(address, bytes)` for every write
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingI2c {
    pub(crate) writes: Rc<RefCell<Vec<(u8, Vec<u8>)>>>,
}

impl ErrorType for RecordingI2c {
    type Error = ErrorKind;
}

impl I2c for RecordingI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for operation in operations {
            match operation {
                Operation::Write(bytes) => self.writes.borrow_mut().push((address, bytes.to_vec())),
                Operation::Read(_) => return Err(ErrorKind::Other),
            }
        }
        Ok(())
    }
}
