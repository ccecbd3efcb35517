//! Blink instance data
//!
//! Everything the ON and OFF states share: the LED pin, the clock and
//! the timestamp of the last turn-on.

use embedded_hal::digital::OutputPin;

use crate::clock::Clock;
use crate::config::BlinkConfig;

/// Instance data of the blink state machine
#[derive(Debug)]
pub struct Blink<P, C> {
    pub(crate) led: P,
    pub(crate) clock: C,
    pub(crate) config: BlinkConfig,
    /// Clock reading when the LED was last switched on
    pub(crate) turn_on_ms: u64,
    pub(crate) led_on: bool,
    /// Pin writes that returned an error
    pub(crate) led_faults: u32,
}

impl<P: OutputPin, C: Clock> Blink<P, C> {
    /// Create instance data for a dark LED
    pub fn new(led: P, clock: C, config: BlinkConfig) -> Self {
        Self {
            led,
            clock,
            config,
            turn_on_ms: 0,
            led_on: false,
            led_faults: 0,
        }
    }

    /// Get access to the LED pin
    pub fn led(&self) -> &P {
        &self.led
    }

    /// Timing configuration
    pub fn config(&self) -> &BlinkConfig {
        &self.config
    }

    /// Check if the LED was last driven high
    pub fn is_led_on(&self) -> bool {
        self.led_on
    }

    /// Clock reading of the last turn-on
    pub fn turn_on_ms(&self) -> u64 {
        self.turn_on_ms
    }

    /// Number of failed pin writes
    pub fn led_faults(&self) -> u32 {
        self.led_faults
    }

    /// Milliseconds since the LED was last switched on
    pub fn since_turn_on(&self) -> u64 {
        self.clock.elapsed_ms(self.turn_on_ms)
    }

    /// Drive the LED; a failing pin is counted, not reported
    pub(crate) fn drive_led(&mut self, on: bool) {
        let result = if on {
            self.led.set_high()
        } else {
            self.led.set_low()
        };

        match result {
            Ok(()) => self.led_on = on,
            Err(_) => {
                self.led_faults = self.led_faults.saturating_add(1);
                #[cfg(feature = "defmt")]
                defmt::warn!("blink: LED write failed (on={=bool})", on);
            }
        }
    }

    /// Latch the current time as turn-on timestamp
    pub(crate) fn arm(&mut self) {
        self.turn_on_ms = self.clock.now_ms();
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use core::convert::Infallible;

    use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

    /// LED that remembers what it was told
    #[derive(Debug, Default)]
    pub struct MockLed {
        pub high: bool,
        pub rising_edges: u32,
    }

    impl ErrorType for MockLed {
        type Error = Infallible;
    }

    impl OutputPin for MockLed {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            if !self.high {
                self.rising_edges += 1;
            }
            self.high = true;
            Ok(())
        }
    }

    /// LED whose driver always fails
    #[derive(Debug, Default)]
    pub struct BrokenLed;

    impl ErrorType for BrokenLed {
        type Error = ErrorKind;
    }

    impl OutputPin for BrokenLed {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }
    }
}
