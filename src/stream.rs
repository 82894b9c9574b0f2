//! Pixel stream
//!
//! Hands packed words to the serializer one at a time, in strip order.
//! A full serializer queue is flow control, not an error: `push` waits for
//! a free slot, which paces the producer to the strip's bit rate.

use crate::color::GrbWord;
use crate::{PixelSerializer, QueueFull};

pub struct PixelStream<S: PixelSerializer> {
    serializer: S,
    pushed: u64,
}

impl<S: PixelSerializer> PixelStream<S> {
    pub const fn new(serializer: S) -> Self {
        Self {
            serializer,
            pushed: 0,
        }
    }

    /// Push one word, blocking until the serializer accepts it
    pub fn push(&mut self, word: GrbWord) {
        let mut pending = word.raw();
        while let Err(QueueFull(rejected)) = self.serializer.try_put(pending) {
            pending = rejected;
            core::hint::spin_loop();
        }
        self.pushed = self.pushed.wrapping_add(1);
    }

    /// Push a whole frame in order
    pub fn push_frame(&mut self, frame: &[GrbWord]) {
        for &word in frame {
            self.push(word);
        }
    }

    /// Total number of words accepted by the serializer
    pub const fn pushed(&self) -> u64 {
        self.pushed
    }

    pub fn serializer(&self) -> &S {
        &self.serializer
    }

    /// Release the serializer handle
    pub fn into_serializer(self) -> S {
        self.serializer
    }
}
