//! Potentiometer sampling
//!
//! Reads the value, saturation and (optionally) hue knobs once per frame and
//! maps the raw 12-bit conversions onto normalized parameters.

use crate::AnalogReader;
use crate::control::HueSource;

/// Full hue circle in degrees
pub const HUE_CIRCLE: f32 = 360.0;

/// Linear mapping from a raw conversion to 0.0-1.0
///
/// The potentiometers never reach the rails, so the usable range starts at
/// `offset` and spans `span` counts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    pub offset: u16,
    pub span: u16,
}

impl Calibration {
    /// Calibration of the stock 10k potentiometers on a 12-bit ADC
    pub const POTENTIOMETER: Self = Self {
        offset: 12,
        span: 4083,
    };

    /// Map a raw reading onto the normalized range
    ///
    /// Readings below `offset` come out slightly negative; they are not
    /// clamped here.
    pub fn normalize(self, raw: u16) -> f32 {
        (f32::from(raw) - f32::from(self.offset)) / f32::from(self.span)
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::POTENTIOMETER
    }
}

/// ADC channel assignment of the three knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelMap {
    pub value: u8,
    pub saturation: u8,
    pub hue: u8,
}

impl Default for ChannelMap {
    fn default() -> Self {
        Self {
            value: 0,
            saturation: 1,
            hue: 2,
        }
    }
}

/// Parameters sampled for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    pub value: f32,
    pub saturation: f32,
    /// Hue in degrees, present only when the hue knob was read
    pub hue: Option<f32>,
}

/// Reads the knobs through an [`AnalogReader`]
pub struct AnalogSampler<A: AnalogReader> {
    reader: A,
    calibration: Calibration,
    channels: ChannelMap,
}

impl<A: AnalogReader> AnalogSampler<A> {
    pub const fn new(reader: A, calibration: Calibration, channels: ChannelMap) -> Self {
        Self {
            reader,
            calibration,
            channels,
        }
    }

    /// Sample the knobs once
    ///
    /// The hue channel is only read for [`HueSource::Sensor`].
    pub fn sample(&mut self, hue_source: HueSource) -> Sample {
        let value = self
            .calibration
            .normalize(self.reader.read(self.channels.value));
        let saturation = self
            .calibration
            .normalize(self.reader.read(self.channels.saturation));

        let hue = match hue_source {
            HueSource::Sensor => {
                let raw = self.reader.read(self.channels.hue);
                Some(HUE_CIRCLE * self.calibration.normalize(raw))
            }
            HueSource::Sweep => None,
        };

        Sample {
            value,
            saturation,
            hue,
        }
    }

    pub const fn calibration(&self) -> Calibration {
        self.calibration
    }

    /// Release the reader handle
    pub fn into_reader(self) -> A {
        self.reader
    }
}
