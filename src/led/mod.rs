use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, PinState};

/// Read-only view of the LED, handed to the page assemblers.
pub trait LedStatus {
    fn is_on(&self) -> bool;
}

#[cfg(test)]
impl LedStatus for bool {
    fn is_on(&self) -> bool {
        *self
    }
}

/// The LED and the digital pin driving it.
pub struct Led<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> Led<P> {
    /// Takes the pin and drives it low.
    pub fn new(mut pin: P) -> Result<Self, P::Error> {
        pin.set_low()?;
        Ok(Self { pin, on: false })
    }

    pub fn set(&mut self, on: bool) -> Result<(), P::Error> {
        self.pin.set_state(PinState::from(on))?;
        if self.on != on {
            log::info!("LED switched {}", if on { "on" } else { "off" });
        }
        self.on = on;
        Ok(())
    }

    #[cfg(test)]
    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P> LedStatus for Led<P> {
    fn is_on(&self) -> bool {
        self.on
    }
}

/// Output pin for hosts without GPIO; it remembers and logs its level.
#[derive(Debug, Default)]
pub struct HostPin {
    high: bool,
}

#[cfg(test)]
impl HostPin {
    pub fn is_high(&self) -> bool {
        self.high
    }
}

impl ErrorType for HostPin {
    type Error = Infallible;
}

impl OutputPin for HostPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.high {
            log::debug!("LED pin low");
        }
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if !self.high {
            log::debug!("LED pin high");
        }
        self.high = true;
        Ok(())
    }
}
