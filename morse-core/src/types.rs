//! Core data types for the Morse encoder

use heapless::Vec;

/// Longest symbol sequence a packed byte can carry
pub const MAX_SYMBOLS: usize = 7;

/// Decoded form of one Morse character, in transmission order
pub type SymbolSeq = Vec<Symbol, MAX_SYMBOLS>;

/// Morse code symbols
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(Hash))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    /// Dot (short pulse, one unit)
    Dot,
    /// Dash (long pulse, three units)
    Dash,
}

impl Symbol {
    /// Returns the duration of this symbol in timing units
    pub const fn duration_units(&self) -> u32 {
        match self {
            Symbol::Dot => 1,
            Symbol::Dash => 3,
        }
    }

    /// Wire bit value: 0 = dot, 1 = dash
    pub const fn bit(&self) -> u8 {
        match self {
            Symbol::Dot => 0,
            Symbol::Dash => 1,
        }
    }

    /// Symbol for a wire bit
    pub const fn from_bit(set: bool) -> Symbol {
        if set {
            Symbol::Dash
        } else {
            Symbol::Dot
        }
    }

    /// Returns the opposite symbol (Dot <-> Dash)
    pub const fn opposite(&self) -> Symbol {
        match self {
            Symbol::Dot => Symbol::Dash,
            Symbol::Dash => Symbol::Dot,
        }
    }
}

/// One Morse character packed into a single byte.
///
/// Morse characters are variable length, so the byte is self-delimiting:
/// the symbol sequence occupies the low-order bits, transmission order
/// running from the most significant symbol bit down to bit 0, and every
/// higher bit is padding set to the complement of the first symbol's bit.
/// Bit 7 therefore always carries the padding value. 0 = dot, 1 = dash.
///
/// ```text
/// Bit 76543210
///     11111101  letter A  .-    (padding 1s, symbols 01)
///     00001000  letter B  -...  (padding 0s, symbols 1000)
/// ```
///
/// The all-zero value is reserved as the "no Morse equivalent" sentinel
/// and never decodes to any symbols.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PackedMorse(u8);

impl PackedMorse {
    /// Sentinel for code points without a Morse mapping
    pub const NONE: PackedMorse = PackedMorse(0);

    /// Wrap a raw table byte
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Raw byte value
    pub const fn raw(&self) -> u8 {
        self.0
    }

    /// Returns true for the "no Morse equivalent" sentinel
    pub const fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// Pack a symbol sequence of 1 to [`MAX_SYMBOLS`] symbols.
    ///
    /// Returns `None` for sequences outside that range.
    pub fn pack(symbols: &[Symbol]) -> Option<PackedMorse> {
        let first = *symbols.first()?;
        if symbols.len() > MAX_SYMBOLS {
            return None;
        }

        let mut value = 0u8;
        for symbol in symbols {
            value = (value << 1) | symbol.bit();
        }

        // Fill the bits above the sequence with the complement of the
        // first symbol so the decoder can find where the padding ends.
        let padding = match first {
            Symbol::Dot => 0xFFu8 << symbols.len(),
            Symbol::Dash => 0,
        };

        Some(PackedMorse(value | padding))
    }

    /// Iterate the symbols in transmission order.
    ///
    /// Bit 7 holds the padding value; the first bit below it that differs
    /// starts the symbol field, which runs down to bit 0 inclusive. When
    /// no bit differs the value carries no symbols, which also covers the
    /// all-zero sentinel.
    pub fn symbols(&self) -> Symbols {
        let padding = self.0 & 0x80 != 0;
        let mut mask = 0x80u8 >> 1;
        while mask != 0 && ((self.0 & mask) != 0) == padding {
            mask >>= 1;
        }
        Symbols {
            packed: self.0,
            mask,
        }
    }

    /// Decode into the explicit sequence form
    pub fn decode(&self) -> SymbolSeq {
        let mut seq = SymbolSeq::new();
        for symbol in self.symbols() {
            // Capacity matches the longest encodable character.
            seq.push(symbol).ok();
        }
        seq
    }
}

/// Iterator over the symbols of a packed Morse character.
///
/// The mask is a single set bit identifying the next symbol to yield;
/// iteration ends when it shifts out past bit 0.
pub struct Symbols {
    packed: u8,
    mask: u8,
}

impl Iterator for Symbols {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        if self.mask == 0 {
            return None;
        }
        let symbol = Symbol::from_bit(self.packed & self.mask != 0);
        self.mask >>= 1;
        Some(symbol)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Symbols {
    fn len(&self) -> usize {
        if self.mask == 0 {
            0
        } else {
            self.mask.trailing_zeros() as usize + 1
        }
    }
}

/// Morse timing profile derived from a single base unit.
///
/// All pulse and gap durations are fixed integer multiples of the unit:
/// dot = 1, dash = 3, symbol gap = 1, letter gap = 3, word gap = 7.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingProfile {
    unit_ms: u32,
}

impl Default for TimingProfile {
    fn default() -> Self {
        Self { unit_ms: 60 } // 20 WPM
    }
}

impl TimingProfile {
    /// Create a profile from the base unit in milliseconds, with validation
    pub fn new(unit_ms: u32) -> Result<Self, &'static str> {
        if unit_ms == 0 {
            return Err("Timing unit must be positive");
        }
        Ok(Self { unit_ms })
    }

    /// Create a profile from a keying speed (PARIS standard: 50 units per word)
    pub fn from_wpm(wpm: u32) -> Result<Self, &'static str> {
        if wpm == 0 || wpm > 100 {
            return Err("WPM must be between 1 and 100");
        }
        Self::new(1200 / wpm)
    }

    /// Base timing unit in milliseconds
    pub const fn unit_ms(&self) -> u32 {
        self.unit_ms
    }

    /// Keying speed for the current unit timing
    pub fn wpm(&self) -> u32 {
        (1200 / self.unit_ms).max(1)
    }

    /// On-duration for a symbol
    pub const fn symbol_ms(&self, symbol: Symbol) -> u32 {
        self.unit_ms * symbol.duration_units()
    }

    /// Dot pulse duration
    pub const fn dot_ms(&self) -> u32 {
        self.unit_ms
    }

    /// Dash pulse duration
    pub const fn dash_ms(&self) -> u32 {
        self.unit_ms * 3
    }

    /// Gap between the symbols of one character
    pub const fn symbol_gap_ms(&self) -> u32 {
        self.unit_ms
    }

    /// Gap between the letters of one word
    pub const fn letter_gap_ms(&self) -> u32 {
        self.unit_ms * 3
    }

    /// Gap between words
    pub const fn word_gap_ms(&self) -> u32 {
        self.unit_ms * 7
    }
}

/// Outcome of sending a single character
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendOutcome {
    /// Pulses were emitted for the character
    Sent,
    /// The character was a space; only the inter-word gap was emitted
    WordGap,
    /// No Morse equivalent exists; nothing was emitted
    NoEquivalent,
}

/// Tally of a batch send
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SendReport {
    /// Characters that produced pulses
    pub sent: usize,
    /// Characters skipped for lack of a Morse equivalent
    pub skipped: usize,
}
