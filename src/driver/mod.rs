//! IS31FL3235A register-level driver
//!
//! The IS31FL3235A is a 28-channel, 8-bit PWM constant-current LED driver
//! with an I2C interface. PWM values are written to a shadow register bank
//! and only reach the outputs after a write to the update register.
//!
//! # Register Map
//!
//! - `0x00` shutdown (0 = software shutdown, 1 = normal operation)
//! - `0x05..=0x20` PWM level for OUT1..OUT28
//! - `0x25` PWM update (write 0 to latch the PWM bank)
//! - `0x2A..=0x45` LED control for OUT1..OUT28 (bit 0 = on)
//! - `0x4A` global control (0 = normal, 1 = all LEDs off)
//! - `0x4B` output frequency (0 = 3kHz, 1 = 22kHz)
//! - `0x4F` reset (write 0 to restore defaults)

mod bus;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use embedded_hal::i2c::I2c;

use crate::RegisterBus;
use crate::error::{Error, Result};

pub use bus::{ChipAddress, I2cRegisterBus};

/// IS31FL3235A register addresses
pub mod reg {
    /// Software shutdown control
    pub const SHUTDOWN: u8 = 0x00;
    /// PWM level for OUT1
    pub const PWM_START: u8 = 0x05;
    /// PWM level for OUT28
    pub const PWM_END: u8 = 0x20;
    /// Latches the PWM bank into the outputs
    pub const PWM_UPDATE: u8 = 0x25;
    /// LED control for OUT1
    pub const LED_CONTROL_START: u8 = 0x2A;
    /// LED control for OUT28
    pub const LED_CONTROL_END: u8 = 0x45;
    /// Global LED enable
    pub const GLOBAL_CONTROL: u8 = 0x4A;
    /// PWM output frequency
    pub const OUTPUT_FREQUENCY: u8 = 0x4B;
    /// Register reset
    pub const RESET: u8 = 0x4F;
}

/// Number of PWM output channels
pub const CHANNEL_COUNT: usize = 28;

/// Bus selector used by current hardware revisions
pub const DEFAULT_BUS: u8 = 1;

/// Bus selector used by early hardware revisions
pub const LEGACY_BUS: u8 = 0;

/// LED control value: output on, full current
const LED_ON: u8 = 0x01;

/// Largest accepted brightness
const MAX_BRIGHTNESS: f32 = 255.0;

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// I2C address of the chip
    pub address: ChipAddress,
    /// Selector of the physical bus the chip is attached to
    pub bus: u8,
    /// Switch the outputs to the high PWM frequency (moves switching noise
    /// out of the audible range)
    pub pwm_33khz: bool,
    /// Keep channel writes in the state vector until [`Driver::update`]
    pub buffered: bool,
    /// Do not run the initialization sequence on construction
    pub skip_init: bool,
}

impl DriverConfig {
    pub const DEFAULT: Self = Self {
        address: ChipAddress::Vcc,
        bus: DEFAULT_BUS,
        pwm_33khz: true,
        buffered: false,
        skip_init: false,
    };
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Last brightness written to each channel and the global enable flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedState {
    enabled: bool,
    pwm: [u8; CHANNEL_COUNT],
}

impl LedState {
    /// All channels dark, outputs globally enabled
    pub const fn new() -> Self {
        Self {
            enabled: true,
            pwm: [0; CHANNEL_COUNT],
        }
    }

    /// Check if the outputs are globally enabled
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Brightness of a 1-based channel
    pub fn channel(&self, index: u8) -> Option<u8> {
        let offset = channel_offset(index)?;
        Some(self.pwm[offset])
    }

    /// Brightness of all channels, OUT1 first
    pub const fn pwm(&self) -> &[u8; CHANNEL_COUNT] {
        &self.pwm
    }
}

impl Default for LedState {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a 1-based channel index into an offset into the PWM bank
const fn channel_offset(index: u8) -> Option<usize> {
    if index == 0 || index as usize > CHANNEL_COUNT {
        return None;
    }
    Some(index as usize - 1)
}

/// Validate a brightness and round it half-up to a PWM level
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn brightness_level(value: f32) -> Option<u8> {
    if !(0.0..=MAX_BRIGHTNESS).contains(&value) {
        return None;
    }
    Some(libm::floorf(value + 0.5).min(MAX_BRIGHTNESS) as u8)
}

/// IS31FL3235A driver
///
/// Owns the bus and mirrors every PWM value in a [`LedState`]. Writes are
/// blocking; a failed transfer is returned as [`Error::Bus`] and never
/// retried.
#[derive(Debug)]
pub struct Driver<B: RegisterBus> {
    bus: B,
    config: DriverConfig,
    state: LedState,
}

impl<B: RegisterBus> Driver<B> {
    /// Create a new driver
    ///
    /// Runs [`Driver::init`] unless `config.skip_init` is set.
    pub fn new(bus: B, config: DriverConfig) -> Result<Self, B::Error> {
        let mut driver = Self {
            bus,
            config,
            state: LedState::new(),
        };
        if !config.skip_init {
            driver.init()?;
        }
        Ok(driver)
    }

    /// Bring the chip into normal operation
    ///
    /// Resets the chip, clears the PWM bank, switches every output on,
    /// pushes the state vector live, selects the PWM frequency and leaves
    /// software shutdown.
    pub fn init(&mut self) -> Result<(), B::Error> {
        #[cfg(feature = "esp32-log")]
        println!(
            "[Driver.init] initializing chip (33kHz: {:?})",
            self.config.pwm_33khz
        );
        self.reset()?;
        for register in reg::PWM_START..=reg::PWM_END {
            self.write(register, 0)?;
        }
        for register in reg::LED_CONTROL_START..=reg::LED_CONTROL_END {
            self.write(register, LED_ON)?;
        }
        self.update()?;
        if self.config.pwm_33khz {
            self.write(reg::OUTPUT_FREQUENCY, 1)?;
        }
        self.write(reg::SHUTDOWN, 1)
    }

    /// Set the brightness of a 1-based channel
    ///
    /// The value is rounded to the nearest level. Unless the driver is
    /// buffered, the PWM register is written and latched right away.
    pub fn set_channel(&mut self, index: u8, value: f32) -> Result<(), B::Error> {
        let level = self.stage_channel(index, value)?;
        if self.config.buffered {
            return Ok(());
        }
        self.write(reg::PWM_START + index - 1, level)?;
        self.flush()
    }

    /// Store the brightness of a 1-based channel without touching the bus
    ///
    /// Returns the stored PWM level.
    pub fn stage_channel(&mut self, index: u8, value: f32) -> Result<u8, B::Error> {
        let offset = channel_offset(index).ok_or(Error::InvalidChannel(index))?;
        let level = brightness_level(value).ok_or(Error::BrightnessOutOfRange(value))?;
        self.state.pwm[offset] = level;
        Ok(level)
    }

    /// Switch all outputs on or off
    ///
    /// Stored brightness values are kept. Always applied immediately.
    pub fn set_global_enable(&mut self, enabled: bool) -> Result<(), B::Error> {
        #[cfg(feature = "esp32-log")]
        println!("[Driver.set_global_enable] enabled: {:?}", enabled);
        self.write(reg::GLOBAL_CONTROL, u8::from(!enabled))?;
        self.state.enabled = enabled;
        self.flush()
    }

    /// Write the whole PWM bank in one transfer and latch it
    pub fn update(&mut self) -> Result<(), B::Error> {
        self.bus
            .write_block(reg::PWM_START, &self.state.pwm)
            .map_err(Error::Bus)?;
        self.flush()
    }

    /// Latch pending PWM register writes into the outputs
    pub fn flush(&mut self) -> Result<(), B::Error> {
        self.write(reg::PWM_UPDATE, 0)
    }

    /// Restore the chip registers to their power-on defaults
    ///
    /// The chip is left in software shutdown; call [`Driver::init`] to
    /// resume normal operation.
    pub fn reset(&mut self) -> Result<(), B::Error> {
        #[cfg(feature = "esp32-log")]
        println!("[Driver.reset] resetting chip");
        self.write(reg::RESET, 0)?;
        self.state.enabled = true;
        Ok(())
    }

    /// Brightness of a 1-based channel
    pub fn channel(&self, index: u8) -> Option<u8> {
        self.state.channel(index)
    }

    /// Check if the outputs are globally enabled
    pub const fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    pub const fn state(&self) -> &LedState {
        &self.state
    }

    pub const fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub const fn is_buffered(&self) -> bool {
        self.config.buffered
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }

    fn write(&mut self, register: u8, value: u8) -> Result<(), B::Error> {
        self.bus
            .write_register(register, value)
            .map_err(Error::Bus)
    }
}

impl<I2C: I2c> Driver<I2cRegisterBus<I2C>> {
    /// Create a driver on an I2C bus, addressing the chip from the config
    pub fn from_i2c(i2c: I2C, config: DriverConfig) -> Result<Self, I2C::Error> {
        Self::new(I2cRegisterBus::new(i2c, config.address), config)
    }

    /// Create a driver, obtaining the I2C bus for the configured bus selector
    pub fn open<F>(config: DriverConfig, open_bus: F) -> Result<Self, I2C::Error>
    where
        F: FnOnce(u8) -> I2C,
    {
        Self::from_i2c(open_bus(config.bus), config)
    }
}
