//! Board pin map
//!
//! Fixed assignment of every line on the PY32F030 counter board. The
//! firmware claims its peripherals by name and asserts at compile time that
//! they match this table and that no pin is assigned twice.

use core::fmt;

/// GPIO port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
}

impl Port {
    fn letter(self) -> char {
        match self {
            Port::A => 'A',
            Port::B => 'B',
        }
    }
}

/// A single port/pin pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId {
    pub port: Port,
    pub pin: u8,
}

impl PinId {
    /// Create a pin id
    pub const fn new(port: Port, pin: u8) -> Self {
        Self { port, pin }
    }

    /// Parse a pin name
    ///
    /// Supports formats:
    /// - "PA0" -> Port A, Pin 0
    /// - "pb1" -> Port B, Pin 1
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let bytes = s.as_bytes();

        if bytes.len() < 3 || !bytes[0].eq_ignore_ascii_case(&b'P') {
            return None;
        }

        let port = match bytes[1].to_ascii_uppercase() {
            b'A' => Port::A,
            b'B' => Port::B,
            _ => return None,
        };

        let pin: u8 = s[2..].parse().ok()?;
        if pin > 15 {
            return None;
        }

        Some(Self { port, pin })
    }

    /// Single-bit mask of this pin within its port
    pub const fn mask(&self) -> u16 {
        1 << self.pin
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.port.letter(), self.pin)
    }
}

/// A pin assigned to more than one signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConflict {
    pub pin: PinId,
}

/// Number of lines on the board
pub const PIN_COUNT: usize = 15;

/// Every line of the counter board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    /// Segment lines in A..G order
    pub segments: [PinId; 7],
    /// Decimal point (held low)
    pub decimal_point: PinId,
    /// Units digit select (DIG1)
    pub units_select: PinId,
    /// Tens digit select (DIG2)
    pub tens_select: PinId,
    /// Start button (A), pull-down
    pub start_button: PinId,
    /// Stop button (B), pull-down
    pub stop_button: PinId,
    /// Indicator LEDs
    pub indicators: [PinId; 3],
}

impl PinMap {
    /// All assigned pins, segments first
    pub const fn all(&self) -> [PinId; PIN_COUNT] {
        let s = self.segments;
        let l = self.indicators;
        [
            s[0],
            s[1],
            s[2],
            s[3],
            s[4],
            s[5],
            s[6],
            self.decimal_point,
            self.units_select,
            self.tens_select,
            self.start_button,
            self.stop_button,
            l[0],
            l[1],
            l[2],
        ]
    }

    /// First pin assigned to a second signal, if any
    ///
    /// `const` so board crates can reject a bad map at compile time.
    pub const fn find_conflict(&self) -> Option<PinId> {
        let pins = self.all();
        let mut port_a: u16 = 0;
        let mut port_b: u16 = 0;
        let mut i = 0;
        while i < PIN_COUNT {
            let pin = pins[i];
            let mask = pin.mask();
            match pin.port {
                Port::A => {
                    if port_a & mask != 0 {
                        return Some(pin);
                    }
                    port_a |= mask;
                }
                Port::B => {
                    if port_b & mask != 0 {
                        return Some(pin);
                    }
                    port_b |= mask;
                }
            }
            i += 1;
        }
        None
    }

    /// Check that no pin is assigned twice
    pub fn validate(&self) -> Result<(), PinConflict> {
        match self.find_conflict() {
            Some(pin) => Err(PinConflict { pin }),
            None => Ok(()),
        }
    }

    /// Check that both maps wire every signal to the same pin
    pub const fn same_pins(&self, other: &PinMap) -> bool {
        let a = self.all();
        let b = other.all();
        let mut i = 0;
        while i < PIN_COUNT {
            if a[i].port as u8 != b[i].port as u8 || a[i].pin != b[i].pin {
                return false;
            }
            i += 1;
        }
        true
    }
}

/// PY32F030 counter board wiring
pub const PIN_MAP: PinMap = PinMap {
    segments: [
        PinId::new(Port::A, 5),  // A
        PinId::new(Port::B, 0),  // B
        PinId::new(Port::B, 1),  // C
        PinId::new(Port::A, 15), // D
        PinId::new(Port::A, 12), // E
        PinId::new(Port::A, 6),  // F
        PinId::new(Port::A, 3),  // G
    ],
    decimal_point: PinId::new(Port::A, 4),
    units_select: PinId::new(Port::A, 11),
    tens_select: PinId::new(Port::A, 7),
    start_button: PinId::new(Port::A, 1),
    stop_button: PinId::new(Port::A, 2),
    indicators: [
        PinId::new(Port::A, 8),
        PinId::new(Port::A, 9),
        PinId::new(Port::A, 10),
    ],
};
