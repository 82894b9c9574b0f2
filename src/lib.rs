#![no_std]

pub mod color;
pub mod control;
pub mod fifo;
pub mod sampler;
pub mod stream;

pub use color::{GrbWord, Rgb, hsv_to_grb};
pub use control::{
    BlockingPause, ClockStatus, ControlLoop, DEFAULT_PACE, FrameStats, HueSource, HueSweep,
    LoopConfig, STRIP_LEN, report_startup,
};
pub use fifo::{PIO_TX_FIFO_DEPTH, TxFifo};
pub use sampler::{AnalogSampler, Calibration, ChannelMap, Sample};
pub use stream::PixelStream;

pub use embassy_time::{Duration, Instant};

/// Error returned by a serializer whose input queue has no free slot.
///
/// Carries the rejected word back to the caller so it can be retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueueFull(pub u32);

/// Analog channel reader
///
/// Implement this trait on top of the board ADC. Channel selection and
/// peripheral initialization happen before the reader is handed over.
pub trait AnalogReader {
    /// Read one conversion from `channel`, in the 12-bit range 0..=4095
    fn read(&mut self, channel: u8) -> u16;
}

impl<T: AnalogReader + ?Sized> AnalogReader for &mut T {
    fn read(&mut self, channel: u8) -> u16 {
        (**self).read(channel)
    }
}

/// Real-time pixel serializer
///
/// Accepts packed GRB words into the hardware queue that feeds the strip's
/// single-wire protocol. Bit timing is the implementor's concern.
pub trait PixelSerializer {
    /// Try to enqueue one word without waiting
    fn try_put(&mut self, word: u32) -> Result<(), QueueFull>;
}

impl<T: PixelSerializer + ?Sized> PixelSerializer for &mut T {
    fn try_put(&mut self, word: u32) -> Result<(), QueueFull> {
        (**self).try_put(word)
    }
}

/// Suspends the control flow between frames
pub trait Pause {
    fn pause(&mut self, duration: Duration);
}
