//! I2C framing
//!
//! Register address is written first; bit 7 of it enables auto-increment
//! for burst reads.

use tremor_hal::I2cBus;

use super::Lis3Transport;

/// L3GD20 address with SA0 tied low
pub const L3GD20_ADDRESS_SA0_LOW: u8 = 0x6A;

/// L3GD20 address with SA0 tied high (breakout default)
pub const L3GD20_ADDRESS_SA0_HIGH: u8 = 0x6B;

const AUTO_INCREMENT: u8 = 0x80;

/// LIS3 transport over an I2C bus
pub struct Lis3TransportI2c<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2cBus> Lis3TransportI2c<I2C> {
    /// Create the transport for the device at `address`
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2cBus> Lis3Transport for Lis3TransportI2c<I2C> {
    type Error = I2C::Error;

    fn read_registers(&mut self, start: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        let mut sub_address = start & !AUTO_INCREMENT;
        if buf.len() > 1 {
            sub_address |= AUTO_INCREMENT;
        }
        self.i2c.write_read(self.address, &[sub_address], buf)
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[reg & !AUTO_INCREMENT, value])
    }
}
