//! Bounded transmit FIFO for `no_std` environments.
//!
//! Models the input queue of a real-time pixel serializer: the control loop
//! fills it from one side while the peripheral (or the interrupt feeding it)
//! drains words from the other. Built on `critical-section` and
//! `heapless::Deque`, so both sides may live in different execution contexts.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::{PixelSerializer, QueueFull};

/// Depth of an RP2040 PIO state machine TX FIFO
pub const PIO_TX_FIFO_DEPTH: usize = 4;

/// A bounded, interrupt-safe word queue.
pub struct TxFifo<const DEPTH: usize = PIO_TX_FIFO_DEPTH> {
    inner: Mutex<RefCell<Deque<u32, DEPTH>>>,
}

impl<const DEPTH: usize> TxFifo<DEPTH> {
    /// Create a new empty FIFO.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Try to enqueue a word.
    ///
    /// Returns `Err(QueueFull(word))` if every slot is taken.
    pub fn try_put(&self, word: u32) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(word).map_err(QueueFull)
        })
    }

    /// Take the oldest word, if any.
    pub fn try_take(&self) -> Option<u32> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_empty())
    }

    pub fn is_full(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_full())
    }

    pub const fn capacity(&self) -> usize {
        DEPTH
    }
}

impl<const DEPTH: usize> Default for TxFifo<DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const DEPTH: usize> PixelSerializer for &TxFifo<DEPTH> {
    fn try_put(&mut self, word: u32) -> Result<(), QueueFull> {
        TxFifo::try_put(*self, word)
    }
}
