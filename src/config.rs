//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_BLINK_RATE, MAX_BRIGHTNESS};

/// Default I2C address of the HT16K33 (all address jumpers open)
pub const DEFAULT_ADDRESS: u8 = 0x70;

/// Brightness applied at start-up unless configured otherwise
pub const DEFAULT_BRIGHTNESS: u8 = MAX_BRIGHTNESS;

/// Hardware blink rate
///
/// The discriminant is the value written to the blink bits of the display
/// setup register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum BlinkRate {
    /// Steady display
    #[default]
    Off = 0,
    /// Blink at about 2 Hz
    Fast = 1,
    /// Blink at about 1 Hz
    Medium = 2,
    /// Blink at about 0.5 Hz
    Slow = 3,
}

impl BlinkRate {
    /// Convert a raw blink mode (0-3) into a [`BlinkRate`]
    pub const fn from_raw(mode: u8) -> Option<Self> {
        match mode {
            0 => Some(Self::Off),
            1 => Some(Self::Fast),
            2 => Some(Self::Medium),
            3 => Some(Self::Slow),
            _ => None,
        }
    }

    /// Raw blink mode as written to the chip
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Nominal blink frequency in millihertz (0 when not blinking)
    pub const fn frequency_millihertz(self) -> u16 {
        match self {
            Self::Off => 0,
            Self::Fast => 2_000,
            Self::Medium => 1_000,
            Self::Slow => 500,
        }
    }
}

impl TryFrom<u8> for BlinkRate {
    /// The rejected raw value
    type Error = u8;

    fn try_from(mode: u8) -> Result<Self, Self::Error> {
        Self::from_raw(mode).ok_or(mode)
    }
}

/// Mounting orientation of the matrix
///
/// Only affects coordinate mapping in the graphics layer; the row/column
/// primitives on [`Display`](crate::Display) always address the native grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// Display configuration
///
/// Use [`Builder`] to create a validated Config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// I2C address of the controller
    pub address: u8,
    /// Brightness set during initialization (0-15)
    pub brightness: u8,
    /// Blink rate applied when the display is first powered on
    pub blink_rate: BlinkRate,
    /// Mounting orientation
    pub rotation: Rotation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            brightness: DEFAULT_BRIGHTNESS,
            blink_rate: BlinkRate::Off,
            rotation: Rotation::Rotate0,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use matrix8x8::{BlinkRate, Builder};
///
/// let config = match Builder::new().address(0x71).brightness(3).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.address, 0x71);
/// assert_eq!(config.blink_rate, BlinkRate::Off);
/// ```
#[must_use]
pub struct Builder {
    address: u8,
    brightness: u8,
    blink_rate: BlinkRate,
    rotation: Rotation,
}

impl Default for Builder {
    fn default() -> Self {
        let config = Config::default();
        Self {
            address: config.address,
            brightness: config.brightness,
            blink_rate: config.blink_rate,
            rotation: config.rotation,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the I2C address (default 0x70)
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set the initial brightness, 0 (dimmest) to 15 (brightest)
    pub fn brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set the blink rate used at power-on
    pub fn blink_rate(mut self, blink_rate: BlinkRate) -> Self {
        self.blink_rate = blink_rate;
        self
    }

    /// Set the mounting orientation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidBrightness` if brightness exceeds 15
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.brightness > MAX_BRIGHTNESS {
            return Err(BuilderError::InvalidBrightness(self.brightness));
        }
        Ok(Config {
            address: self.address,
            brightness: self.brightness,
            blink_rate: self.blink_rate,
            rotation: self.rotation,
        })
    }
}
