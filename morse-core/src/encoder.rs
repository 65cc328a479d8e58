//! Character to pulse sequence encoder

use embedded_hal::delay::DelayNs;

use crate::hal::Signal;
use crate::table::{self, ASCII_MASK};
use crate::types::{SendOutcome, SendReport, Symbol, TimingProfile};

/// ASCII code for the space character
const ASCII_SPACE: u8 = b' ';

/// Blocking Morse encoder driving a binary signal line.
///
/// Consumes one ASCII character at a time, decodes its packed table form
/// and drives the injected [`Signal`] with correctly timed pulses. Each
/// call blocks the caller for the full duration of the character; no
/// state crosses calls beyond the timing profile.
pub struct MorseEncoder<S, D> {
    timing: TimingProfile,
    signal: S,
    delay: D,
}

impl<S, D> MorseEncoder<S, D>
where
    S: Signal,
    D: DelayNs,
{
    /// Create an encoder with the given base timing unit in milliseconds
    pub fn new(unit_ms: u32, signal: S, delay: D) -> Result<Self, &'static str> {
        Ok(Self::with_timing(TimingProfile::new(unit_ms)?, signal, delay))
    }

    /// Create an encoder from an existing timing profile
    pub fn with_timing(timing: TimingProfile, signal: S, delay: D) -> Self {
        Self {
            timing,
            signal,
            delay,
        }
    }

    /// Current timing profile
    pub fn timing(&self) -> &TimingProfile {
        &self.timing
    }

    /// Give the signal and delay collaborators back
    pub fn release(self) -> (S, D) {
        (self.signal, self.delay)
    }

    /// Send one ASCII character as timed pulses.
    ///
    /// The input is masked to 7 bits first, silently folding high-bit-set
    /// values into the legal domain. Space emits a single inter-word gap
    /// and no pulses. Characters without a Morse equivalent emit nothing
    /// at all and report [`SendOutcome::NoEquivalent`]; the caller decides
    /// whether to count or log them.
    ///
    /// Letter-gap composition across calls is the caller's responsibility;
    /// see [`MorseEncoder::send_str`].
    pub fn send(&mut self, ascii: u8) -> Result<SendOutcome, S::Error> {
        let ascii = ascii & ASCII_MASK;

        if ascii == ASCII_SPACE {
            self.delay.delay_ms(self.timing.word_gap_ms());
            return Ok(SendOutcome::WordGap);
        }

        let packed = table::lookup(ascii);
        if packed.is_none() {
            #[cfg(feature = "defmt")]
            defmt::trace!("no Morse equivalent for {=u8}", ascii);
            return Ok(SendOutcome::NoEquivalent);
        }

        for symbol in packed.decode() {
            self.pulse(symbol)?;
        }
        Ok(SendOutcome::Sent)
    }

    /// Send a whole message, composing the gaps between characters.
    ///
    /// One inter-letter gap is inserted before every sent letter that
    /// follows another sent letter; spaces carry the word gap themselves.
    /// Characters without a Morse equivalent are skipped and counted,
    /// never aborting the rest of the message.
    pub fn send_str(&mut self, text: &str) -> Result<SendReport, S::Error> {
        let mut report = SendReport::default();
        let mut follows_letter = false;

        for &byte in text.as_bytes() {
            let ascii = byte & ASCII_MASK;
            if follows_letter && ascii != ASCII_SPACE && !table::lookup(ascii).is_none() {
                self.delay.delay_ms(self.timing.letter_gap_ms());
            }

            match self.send(byte)? {
                SendOutcome::Sent => {
                    report.sent += 1;
                    follows_letter = true;
                }
                SendOutcome::WordGap => {
                    follows_letter = false;
                }
                SendOutcome::NoEquivalent => {
                    report.skipped += 1;
                }
            }
        }

        Ok(report)
    }

    /// Emit one symbol: signal on for its duration, signal off, then one
    /// intra-character gap. The gap follows every symbol, the last one of
    /// a character included.
    fn pulse(&mut self, symbol: Symbol) -> Result<(), S::Error> {
        self.signal.on()?;
        self.delay.delay_ms(self.timing.symbol_ms(symbol));
        self.signal.off()?;
        self.delay.delay_ms(self.timing.symbol_gap_ms());
        Ok(())
    }
}
