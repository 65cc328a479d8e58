//! Signal line abstraction and adapters

use embedded_hal::digital::OutputPin;

/// Error type for signal operations
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalError {
    /// GPIO operation failed
    Gpio,
}

#[cfg(feature = "std")]
impl core::fmt::Display for SignalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SignalError::Gpio => write!(f, "GPIO operation failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SignalError {}

/// Minimal capability interface for the physical signal emitter.
///
/// Implementations begin and stop emitting the physical signal (LED,
/// buzzer, key line). Both operations are synchronous and side-effect
/// only; all timing belongs to the encoder. The encoder owns its signal
/// exclusively for the duration of a send.
pub trait Signal {
    type Error: From<SignalError>;

    /// Begin emitting the physical signal
    fn on(&mut self) -> Result<(), Self::Error>;

    /// Stop emitting the physical signal
    fn off(&mut self) -> Result<(), Self::Error>;
}

/// Adapter driving any embedded-hal output pin as a signal line
pub struct EmbeddedHalSignal<P> {
    pin: P,
    inverted: bool,
}

impl<P> EmbeddedHalSignal<P>
where
    P: OutputPin,
{
    /// Wrap a pin wired active high
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Wrap a pin wired active low
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }

    fn set(&mut self, emitting: bool) -> Result<(), SignalError> {
        if emitting != self.inverted {
            self.pin.set_high().map_err(|_| SignalError::Gpio)
        } else {
            self.pin.set_low().map_err(|_| SignalError::Gpio)
        }
    }
}

impl<P> Signal for EmbeddedHalSignal<P>
where
    P: OutputPin,
{
    type Error = SignalError;

    fn on(&mut self) -> Result<(), Self::Error> {
        self.set(true)
    }

    fn off(&mut self) -> Result<(), Self::Error> {
        self.set(false)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! Mock implementations for testing

    use super::*;

    /// Mock signal tracking state and transition counts
    #[derive(Debug, Default)]
    pub struct MockSignal {
        state: bool,
        on_count: u32,
        off_count: u32,
    }

    impl MockSignal {
        pub fn new() -> Self {
            Self::default()
        }

        /// Current signal state
        pub fn is_on(&self) -> bool {
            self.state
        }

        /// Number of on() calls so far
        pub fn on_count(&self) -> u32 {
            self.on_count
        }

        /// Number of off() calls so far
        pub fn off_count(&self) -> u32 {
            self.off_count
        }
    }

    impl Signal for MockSignal {
        type Error = SignalError;

        fn on(&mut self) -> Result<(), Self::Error> {
            self.state = true;
            self.on_count += 1;
            Ok(())
        }

        fn off(&mut self) -> Result<(), Self::Error> {
            self.state = false;
            self.off_count += 1;
            Ok(())
        }
    }

    /// Mock delay accumulating requested wait time instead of blocking
    #[derive(Debug, Default)]
    pub struct MockDelay {
        total_ns: u64,
        calls: u32,
    }

    impl MockDelay {
        pub fn new() -> Self {
            Self::default()
        }

        /// Total requested wait time in milliseconds
        pub fn total_ms(&self) -> u64 {
            self.total_ns / 1_000_000
        }

        /// Number of delay requests so far
        pub fn calls(&self) -> u32 {
            self.calls
        }
    }

    impl embedded_hal::delay::DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
            self.calls += 1;
        }
    }
}
