//! L3GD20 3-axis gyroscope
//!
//! ST's L3GD20 (and the pin-compatible L3GD20H) reports angular rate as
//! three little-endian 16-bit registers. The driver implements
//! [`MotionSensor`]: liveness is a `WHO_AM_I` check, configuration writes
//! range and data rate, and reads stay pending until the device flags a
//! new sample.
//!
//! Register transfers themselves are blocking; the only suspension is
//! waiting for `STATUS_REG.ZYXDA`.

use core::task::Poll;

use tremor_core::traits::{MotionSensor, Range, Rate, Vector3};

use crate::transport::Lis3Transport;

/// L3GD20 register addresses
pub mod reg {
    /// Device identification
    pub const WHO_AM_I: u8 = 0x0F;
    /// Data rate, bandwidth, power and axis enables
    pub const CTRL_REG1: u8 = 0x20;
    /// Block data update, endianness, full scale
    pub const CTRL_REG4: u8 = 0x23;
    /// Data-ready and overrun flags
    pub const STATUS_REG: u8 = 0x27;
    /// First of six output registers (X_L, X_H, Y_L, Y_H, Z_L, Z_H)
    pub const OUT_X_L: u8 = 0x28;
}

/// Expected `WHO_AM_I` for the L3GD20
pub const WHO_AM_I_L3GD20: u8 = 0xD4;

/// Expected `WHO_AM_I` for the L3GD20H
pub const WHO_AM_I_L3GD20H: u8 = 0xD7;

/// CTRL_REG1: power on (normal mode)
const CTRL1_PD: u8 = 0x08;
/// CTRL_REG1: enable X, Y and Z axes
const CTRL1_XYZ_EN: u8 = 0x07;
/// CTRL_REG4: block data update until both bytes are read
const CTRL4_BDU: u8 = 0x80;
/// STATUS_REG: new X, Y and Z data available
const STATUS_ZYXDA: u8 = 0x08;

/// CTRL_REG1 data-rate bits (DR1:DR0), lowest bandwidth setting
pub const fn rate_bits(rate: Rate) -> u8 {
    match rate {
        Rate::Hz95 => 0x00,
        Rate::Hz190 => 0x40,
        Rate::Hz380 => 0x80,
        Rate::Hz760 => 0xC0,
    }
}

/// CTRL_REG4 full-scale bits (FS1:FS0)
pub const fn range_bits(range: Range) -> u8 {
    match range {
        Range::Dps250 => 0x00,
        Range::Dps500 => 0x10,
        Range::Dps2000 => 0x20,
    }
}

/// Sensitivity in degrees per second per LSB
pub const fn sensitivity_dps(range: Range) -> f32 {
    match range {
        Range::Dps250 => 0.008_75,
        Range::Dps500 => 0.017_5,
        Range::Dps2000 => 0.070,
    }
}

/// Convert the six output registers to degrees per second
pub fn decode(raw: &[u8; 6], range: Range) -> Vector3 {
    let scale = sensitivity_dps(range);
    let axis = |lo: u8, hi: u8| f32::from(i16::from_le_bytes([lo, hi])) * scale;
    Vector3::new(axis(raw[0], raw[1]), axis(raw[2], raw[3]), axis(raw[4], raw[5]))
}

/// L3GD20 driver
pub struct L3gd20<T> {
    transport: T,
    /// Range applied by the last successful configure, used for scaling
    range: Range,
}

impl<T: Lis3Transport> L3gd20<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            range: Range::default(),
        }
    }

    /// Check whether a new sample is waiting
    fn data_ready(&mut self) -> Result<bool, T::Error> {
        let status = self.transport.read_register(reg::STATUS_REG)?;
        Ok(status & STATUS_ZYXDA != 0)
    }

    pub fn release(self) -> T {
        self.transport
    }
}

impl<T: Lis3Transport> MotionSensor for L3gd20<T> {
    type Error = T::Error;

    fn ping(&mut self) -> Poll<Result<bool, Self::Error>> {
        let id = self.transport.read_register(reg::WHO_AM_I)?;
        Poll::Ready(Ok(matches!(id, WHO_AM_I_L3GD20 | WHO_AM_I_L3GD20H)))
    }

    fn configure(&mut self, range: Range, rate: Rate) -> Poll<Result<(), Self::Error>> {
        // Scale first, then power up so the first sample uses the new range
        self.transport
            .write_register(reg::CTRL_REG4, CTRL4_BDU | range_bits(range))?;
        self.transport
            .write_register(reg::CTRL_REG1, rate_bits(rate) | CTRL1_PD | CTRL1_XYZ_EN)?;
        self.range = range;
        Poll::Ready(Ok(()))
    }

    fn read(&mut self) -> Poll<Result<Vector3, Self::Error>> {
        if !self.data_ready()? {
            return Poll::Pending;
        }
        let mut raw = [0u8; 6];
        self.transport.read_registers(reg::OUT_X_L, &mut raw)?;
        Poll::Ready(Ok(decode(&raw, self.range)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;
    use proptest::prelude::*;

    /// Register file standing in for the device
    struct FakeDevice {
        regs: [u8; 0x40],
        writes: Vec<(u8, u8), 8>,
        /// Status reads left before ZYXDA is raised
        busy_polls: u8,
    }

    impl FakeDevice {
        fn new(who_am_i: u8) -> Self {
            let mut regs = [0u8; 0x40];
            regs[reg::WHO_AM_I as usize] = who_am_i;
            Self {
                regs,
                writes: Vec::new(),
                busy_polls: 0,
            }
        }

        fn with_output(mut self, x: i16, y: i16, z: i16) -> Self {
            let mut bytes = [0u8; 6];
            bytes[0..2].copy_from_slice(&x.to_le_bytes());
            bytes[2..4].copy_from_slice(&y.to_le_bytes());
            bytes[4..6].copy_from_slice(&z.to_le_bytes());
            let start = reg::OUT_X_L as usize;
            self.regs[start..start + 6].copy_from_slice(&bytes);
            self
        }
    }

    #[derive(Debug, PartialEq)]
    struct Nack;

    impl Lis3Transport for FakeDevice {
        type Error = Nack;

        fn read_registers(&mut self, start: u8, buf: &mut [u8]) -> Result<(), Nack> {
            if start == reg::STATUS_REG {
                if self.busy_polls > 0 {
                    self.busy_polls -= 1;
                    buf[0] = 0;
                } else {
                    buf[0] = STATUS_ZYXDA;
                }
                return Ok(());
            }
            let start = start as usize;
            let regs = self.regs.get(start..start + buf.len()).ok_or(Nack)?;
            buf.copy_from_slice(regs);
            Ok(())
        }

        fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Nack> {
            self.regs[reg as usize] = value;
            self.writes.push((reg, value)).map_err(|_| Nack)
        }
    }

    #[test]
    fn test_ping_accepts_both_variants() {
        let mut gyro = L3gd20::new(FakeDevice::new(WHO_AM_I_L3GD20));
        assert_eq!(gyro.ping(), Poll::Ready(Ok(true)));

        let mut gyro = L3gd20::new(FakeDevice::new(WHO_AM_I_L3GD20H));
        assert_eq!(gyro.ping(), Poll::Ready(Ok(true)));
    }

    #[test]
    fn test_ping_rejects_other_devices() {
        // LIS3DH answers on the same bus with 0x33
        let mut gyro = L3gd20::new(FakeDevice::new(0x33));
        assert_eq!(gyro.ping(), Poll::Ready(Ok(false)));
    }

    #[test]
    fn test_configure_writes_scale_then_power() {
        let mut gyro = L3gd20::new(FakeDevice::new(WHO_AM_I_L3GD20));
        assert_eq!(gyro.configure(Range::Dps250, Rate::Hz380), Poll::Ready(Ok(())));

        let device = gyro.release();
        assert_eq!(
            device.writes.as_slice(),
            &[(reg::CTRL_REG4, 0x80), (reg::CTRL_REG1, 0x8F)]
        );
    }

    #[test]
    fn test_read_pends_until_data_ready() {
        let mut device = FakeDevice::new(WHO_AM_I_L3GD20).with_output(1000, -2000, 0);
        device.busy_polls = 2;
        let mut gyro = L3gd20::new(device);
        let _ = gyro.configure(Range::Dps500, Rate::Hz95);

        assert_eq!(gyro.read(), Poll::Pending);
        assert_eq!(gyro.read(), Poll::Pending);
        match gyro.read() {
            Poll::Ready(Ok(v)) => {
                assert!((v.x - 17.5).abs() < 1e-4);
                assert!((v.y + 35.0).abs() < 1e-4);
                assert_eq!(v.z, 0.0);
            }
            other => panic!("expected a sample, got {:?}", other),
        }
    }

    #[test]
    fn test_bits() {
        assert_eq!(rate_bits(Rate::Hz760), 0xC0);
        assert_eq!(range_bits(Range::Dps2000), 0x20);
    }

    proptest! {
        #[test]
        fn prop_decode_is_linear(x: i16, y: i16, z: i16) {
            let mut raw = [0u8; 6];
            raw[0..2].copy_from_slice(&x.to_le_bytes());
            raw[2..4].copy_from_slice(&y.to_le_bytes());
            raw[4..6].copy_from_slice(&z.to_le_bytes());

            for range in [Range::Dps250, Range::Dps500, Range::Dps2000] {
                let v = decode(&raw, range);
                let s = sensitivity_dps(range);
                prop_assert_eq!(v.x, f32::from(x) * s);
                prop_assert_eq!(v.y, f32::from(y) * s);
                prop_assert_eq!(v.z, f32::from(z) * s);
                prop_assert!(v.x.abs() <= f32::from(range.full_scale_dps()) * 1.15);
            }
        }
    }
}
