//! Control loop
//!
//! Ties the knobs to the strip. Every cycle samples the potentiometers,
//! converts one color per LED, streams each word as soon as it is computed
//! and then pauses for a fixed interval.
//!
//! # Usage
//!
//! ```ignore
//! report_startup(ClockStatus::Configured { hz: 128_000_000 });
//!
//! let mut control: ControlLoop<_, _> =
//!     ControlLoop::new(adc, &mut pio_sm, &LoopConfig::default());
//! control.run(&mut BlockingPause)
//! ```

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{GrbWord, hsv_to_grb};
use crate::sampler::{AnalogSampler, Calibration, ChannelMap, HUE_CIRCLE, Sample};
use crate::stream::PixelStream;
use crate::{AnalogReader, Pause, PixelSerializer};

/// Number of LEDs on the strip
pub const STRIP_LEN: usize = 64;

/// Delay between the last word of a frame and the next sample
pub const DEFAULT_PACE: Duration = Duration::from_millis(100);

/// Where the per-pixel hue comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HueSource {
    /// Full rainbow across the strip, recomputed every frame
    Sweep,
    /// One hue for the whole strip, read from the hue knob
    Sensor,
}

impl HueSource {
    /// Build-time default, selected by the `hue-from-sensor` feature
    pub const DEFAULT: Self = if cfg!(feature = "hue-from-sensor") {
        Self::Sensor
    } else {
        Self::Sweep
    };
}

impl Default for HueSource {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration for the control loop
#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    pub hue_source: HueSource,
    pub pace: Duration,
    pub calibration: Calibration,
    pub channels: ChannelMap,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            hue_source: HueSource::DEFAULT,
            pace: DEFAULT_PACE,
            calibration: Calibration::POTENTIOMETER,
            channels: ChannelMap::default(),
        }
    }
}

/// Per-pixel hues of a rainbow sweep
///
/// Starts at 0 and accumulates `360 / len` per pixel.
#[derive(Debug, Clone)]
pub struct HueSweep {
    hue: f32,
    step: f32,
    remaining: usize,
}

impl HueSweep {
    #[allow(clippy::cast_precision_loss)]
    pub fn new(len: usize) -> Self {
        Self {
            hue: 0.0,
            step: HUE_CIRCLE / len as f32,
            remaining: len,
        }
    }
}

impl Iterator for HueSweep {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.remaining == 0 {
            return None;
        }
        let hue = self.hue;
        self.hue += self.step;
        self.remaining -= 1;
        Some(hue)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for HueSweep {}

/// Summary of one emitted frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameStats {
    /// Zero-based frame counter, wrapping
    pub index: u32,
    pub sample: Sample,
    /// Color of the first LED
    pub first: GrbWord,
    pub pixels: usize,
}

/// Pause backed by `embassy_time::block_for`
///
/// Busy-waits on the time driver, matching the single-flow model of the loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingPause;

impl Pause for BlockingPause {
    fn pause(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}

/// Sample, render, stream, pace
///
/// Owns the analog reader and the serializer handle for its whole life;
/// nothing else touches them, so no locking is involved.
pub struct ControlLoop<A: AnalogReader, S: PixelSerializer, const N: usize = STRIP_LEN> {
    sampler: AnalogSampler<A>,
    stream: PixelStream<S>,
    hue_source: HueSource,
    pace: Duration,
    frames: u32,
}

impl<A: AnalogReader, S: PixelSerializer, const N: usize> ControlLoop<A, S, N> {
    pub fn new(reader: A, serializer: S, config: &LoopConfig) -> Self {
        Self {
            sampler: AnalogSampler::new(reader, config.calibration, config.channels),
            stream: PixelStream::new(serializer),
            hue_source: config.hue_source,
            pace: config.pace,
            frames: 0,
        }
    }

    /// Run one cycle without the trailing pause
    ///
    /// Words are pushed as they are converted, in strip order 0..N.
    pub fn step(&mut self) -> FrameStats {
        let sample = self.sampler.sample(self.hue_source);

        #[cfg(feature = "esp32-log")]
        println!(
            "[ControlLoop.step] H: {:?}, S: {}, V: {}",
            sample.hue, sample.saturation, sample.value
        );

        let mut first = GrbWord::OFF;
        let mut pixels = 0;
        let mut emit = |stream: &mut PixelStream<S>, hue: f32| {
            let word = hsv_to_grb(hue, sample.saturation, sample.value);
            if pixels == 0 {
                first = word;
            }
            stream.push(word);
            pixels += 1;
        };

        match sample.hue {
            Some(hue) => {
                for _ in 0..N {
                    emit(&mut self.stream, hue);
                }
            }
            None => {
                for hue in HueSweep::new(N) {
                    emit(&mut self.stream, hue);
                }
            }
        }

        let stats = FrameStats {
            index: self.frames,
            sample,
            first,
            pixels,
        };
        self.frames = self.frames.wrapping_add(1);
        stats
    }

    /// Run a fixed number of cycles, pausing after each
    pub fn run_frames<P: Pause>(&mut self, frames: usize, pause: &mut P) {
        for _ in 0..frames {
            self.step();
            pause.pause(self.pace);
        }
    }

    /// Run forever
    pub fn run<P: Pause>(&mut self, pause: &mut P) -> ! {
        loop {
            self.step();
            pause.pause(self.pace);
        }
    }

    pub const fn hue_source(&self) -> HueSource {
        self.hue_source
    }

    pub const fn pace(&self) -> Duration {
        self.pace
    }

    /// Number of frames emitted so far, wrapping
    pub const fn frames(&self) -> u32 {
        self.frames
    }

    pub const fn stream(&self) -> &PixelStream<S> {
        &self.stream
    }

    /// Release the reader and serializer handles
    pub fn into_parts(self) -> (A, S) {
        (self.sampler.into_reader(), self.stream.into_serializer())
    }
}

/// Outcome of the system clock setup done during bring-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStatus {
    Configured { hz: u32 },
    /// The requested frequency could not be set; the loop still runs, but
    /// serializer timing derived from the clock may be off
    Failed,
}

impl ClockStatus {
    pub const fn is_configured(self) -> bool {
        matches!(self, Self::Configured { .. })
    }
}

/// Print the startup banner and the clock outcome
///
/// Never fatal: a failed clock setup is reported and bring-up continues.
pub fn report_startup(status: ClockStatus) {
    #[cfg(feature = "esp32-log")]
    {
        println!("starting pot-hsv-strip");
        match status {
            ClockStatus::Configured { hz } => println!("clock set to {}", hz),
            ClockStatus::Failed => println!("clock setup failed, continuing"),
        }
    }
    #[cfg(not(feature = "esp32-log"))]
    let _ = status;
}
