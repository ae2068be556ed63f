//! Memory bus interface.

/// Memory bus interface.
///
/// The CPU core accesses the full 64 KiB address space through this trait.
/// Address decoding, mirroring, and register windows are the implementor's
/// responsibility; the core assumes every address in `0x0000..=0xFFFF` is
/// readable and writable.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);

    /// Read a 16-bit little-endian word: low byte at `address`, high byte
    /// at `address + 1`.
    ///
    /// A read at `0xFFFF` wraps, taking its high byte from `0x0000`. The
    /// address space is circular; there is no error path.
    fn read_word(&mut self, address: u16) -> u16 {
        let low = self.read(address);
        let high = self.read(address.wrapping_add(1));
        u16::from_le_bytes([low, high])
    }

    /// Write a 16-bit little-endian word, low byte first.
    ///
    /// Wraps at `0xFFFF` the same way [`Bus::read_word`] does.
    fn write_word(&mut self, address: u16, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.write(address, low);
        self.write(address.wrapping_add(1), high);
    }
}

/// Flat 64 KiB RAM bus for tests and standalone tools.
pub struct SimpleBus {
    ram: Box<[u8; 0x1_0000]>,
}

impl SimpleBus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; 0x1_0000]),
        }
    }

    /// Copy `data` into RAM starting at `start`, wrapping at the top of
    /// the address space.
    pub fn load(&mut self, start: u16, data: &[u8]) {
        let mut address = start;
        for &byte in data {
            self.ram[address as usize] = byte;
            address = address.wrapping_add(1);
        }
    }

    /// Inspect a byte without going through the bus interface.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.ram[address as usize]
    }
}

impl Default for SimpleBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for SimpleBus {
    fn read(&mut self, address: u16) -> u8 {
        self.ram[address as usize]
    }

    fn write(&mut self, address: u16, value: u8) {
        self.ram[address as usize] = value;
    }
}
