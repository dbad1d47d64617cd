//! SPI framing
//!
//! First byte: bit 7 = read, bit 6 = auto-increment, bits 5..0 = register.
//! Chip select is held low for the whole transaction.

use tremor_hal::{OutputPin, SpiBus};

use super::Lis3Transport;

const READ: u8 = 0x80;
const AUTO_INCREMENT: u8 = 0x40;
const ADDRESS_MASK: u8 = 0x3F;

/// LIS3 transport over a SPI bus with a dedicated chip select
pub struct Lis3TransportSpi<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI: SpiBus, CS: OutputPin> Lis3TransportSpi<SPI, CS> {
    /// Create the transport and deselect the device
    pub fn new(spi: SPI, mut cs: CS) -> Self {
        cs.set_high();
        Self { spi, cs }
    }

    /// Release the bus and chip select
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    /// Run `f` with chip select asserted, deasserting it even on error
    fn select<T>(
        &mut self,
        f: impl FnOnce(&mut SPI) -> Result<T, SPI::Error>,
    ) -> Result<T, SPI::Error> {
        self.cs.set_low();
        let result = f(&mut self.spi);
        self.cs.set_high();
        result
    }
}

impl<SPI: SpiBus, CS: OutputPin> Lis3Transport for Lis3TransportSpi<SPI, CS> {
    type Error = SPI::Error;

    fn read_registers(&mut self, start: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        let mut command = READ | (start & ADDRESS_MASK);
        if buf.len() > 1 {
            command |= AUTO_INCREMENT;
        }
        self.select(|spi| {
            spi.write(&[command])?;
            spi.read(buf)
        })
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.select(|spi| spi.write(&[reg & ADDRESS_MASK, value]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    #[derive(Default)]
    struct MockSpi {
        written: Vec<u8, 16>,
        reply: u8,
        fail_reads: bool,
    }

    impl SpiBus for MockSpi {
        type Error = ();

        fn write(&mut self, data: &[u8]) -> Result<(), ()> {
            self.written.extend_from_slice(data).map_err(|_| ())
        }

        fn read(&mut self, buf: &mut [u8]) -> Result<(), ()> {
            if self.fail_reads {
                return Err(());
            }
            for (i, byte) in buf.iter_mut().enumerate() {
                *byte = self.reply.wrapping_add(i as u8);
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockCs {
        high: bool,
        edges: u8,
    }

    impl OutputPin for MockCs {
        fn set_high(&mut self) {
            self.high = true;
            self.edges += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.edges += 1;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_new_deselects() {
        let transport = Lis3TransportSpi::new(MockSpi::default(), MockCs::default());
        let (_, cs) = transport.release();
        assert!(cs.high);
    }

    #[test]
    fn test_single_read_has_no_auto_increment() {
        let spi = MockSpi {
            reply: 0xD4,
            ..MockSpi::default()
        };
        let mut transport = Lis3TransportSpi::new(spi, MockCs::default());
        assert_eq!(transport.read_register(0x0F), Ok(0xD4));

        let (spi, cs) = transport.release();
        assert_eq!(spi.written.as_slice(), &[0x8F]);
        assert!(cs.high);
        assert_eq!(cs.edges, 3); // deselect on new, select, deselect
    }

    #[test]
    fn test_burst_read_sets_auto_increment() {
        let mut transport = Lis3TransportSpi::new(MockSpi::default(), MockCs::default());
        let mut buf = [0u8; 6];
        transport.read_registers(0x28, &mut buf).unwrap();
        assert_eq!(buf, [0, 1, 2, 3, 4, 5]);

        let (spi, _) = transport.release();
        assert_eq!(spi.written.as_slice(), &[0xE8]);
    }

    #[test]
    fn test_write_clears_read_bit() {
        let mut transport = Lis3TransportSpi::new(MockSpi::default(), MockCs::default());
        transport.write_register(0x20, 0x8F).unwrap();
        let (spi, _) = transport.release();
        assert_eq!(spi.written.as_slice(), &[0x20, 0x8F]);
    }

    #[test]
    fn test_chip_select_released_on_error() {
        let spi = MockSpi {
            fail_reads: true,
            ..MockSpi::default()
        };
        let mut transport = Lis3TransportSpi::new(spi, MockCs::default());
        assert_eq!(transport.read_register(0x0F), Err(()));
        let (_, cs) = transport.release();
        assert!(cs.high);
    }
}
