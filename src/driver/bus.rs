//! I2C transport for the LED driver.

use embedded_hal::i2c::I2c;

use crate::RegisterBus;

/// Largest number of bytes sent in one I2C write, register byte included
const MAX_TRANSFER: usize = 32;

/// I2C address of the LED driver, selected by the AD pin strapping
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ChipAddress {
    /// AD connected to GND
    Gnd = 0x3C,
    /// AD connected to SCL
    Scl = 0x3D,
    /// AD connected to SDA
    Sda = 0x3E,
    /// AD connected to VCC
    #[default]
    Vcc = 0x3F,
}

impl ChipAddress {
    /// Get the 7-bit bus address
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Parse a raw 7-bit address
    ///
    /// Returns `None` for addresses the chip cannot be strapped to.
    pub const fn from_raw(address: u8) -> Option<Self> {
        Some(match address {
            0x3C => Self::Gnd,
            0x3D => Self::Scl,
            0x3E => Self::Sda,
            0x3F => Self::Vcc,
            _ => return None,
        })
    }
}

/// [`RegisterBus`] over an `embedded-hal` I2C bus
///
/// Each register write is a single I2C write transaction of
/// `[register, value...]`. The chip auto-increments the register address
/// within a transaction.
#[derive(Debug)]
pub struct I2cRegisterBus<I2C> {
    i2c: I2C,
    address: ChipAddress,
}

impl<I2C: I2c> I2cRegisterBus<I2C> {
    /// Wrap an I2C bus, addressing the chip at `address`
    pub const fn new(i2c: I2C, address: ChipAddress) -> Self {
        Self { i2c, address }
    }

    /// Chip address used for every transfer
    pub const fn address(&self) -> ChipAddress {
        self.address
    }

    /// Give the I2C bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterBus for I2cRegisterBus<I2C> {
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address.as_u8(), &[register, value])
    }

    #[allow(clippy::cast_possible_truncation)]
    fn write_block(&mut self, start: u8, values: &[u8]) -> Result<(), Self::Error> {
        let mut buffer = [0u8; MAX_TRANSFER];
        let mut register = start;
        for chunk in values.chunks(MAX_TRANSFER - 1) {
            buffer[0] = register;
            buffer[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c
                .write(self.address.as_u8(), &buffer[..=chunk.len()])?;
            register = register.wrapping_add(chunk.len() as u8);
        }
        Ok(())
    }
}
