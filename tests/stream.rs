mod tests {
    use pot_hsv_strip::{GrbWord, PixelSerializer, PixelStream, QueueFull, TxFifo};

    /// Rejects a fixed number of attempts before accepting each word
    struct Stubborn {
        rejections: usize,
        attempts: usize,
        accepted: Vec<u32>,
    }

    impl PixelSerializer for Stubborn {
        fn try_put(&mut self, word: u32) -> Result<(), QueueFull> {
            self.attempts += 1;
            if self.attempts % (self.rejections + 1) != 0 {
                return Err(QueueFull(word));
            }
            self.accepted.push(word);
            Ok(())
        }
    }

    #[test]
    fn test_fifo_bounds() {
        let fifo: TxFifo<4> = TxFifo::new();
        assert!(fifo.is_empty());
        for word in 1..=4 {
            assert_eq!(fifo.try_put(word << 8), Ok(()));
        }
        assert!(fifo.is_full());
        assert_eq!(fifo.len(), 4);
        assert_eq!(fifo.try_put(0xAB00), Err(QueueFull(0xAB00)));

        assert_eq!(fifo.try_take(), Some(0x100));
        assert_eq!(fifo.try_put(0xAB00), Ok(()));
        let drained: Vec<u32> = core::iter::from_fn(|| fifo.try_take()).collect();
        assert_eq!(drained, vec![0x200, 0x300, 0x400, 0xAB00]);
        assert_eq!(fifo.try_take(), None);
    }

    #[test]
    fn test_push_retries_until_accepted() {
        let mut stream = PixelStream::new(Stubborn {
            rejections: 3,
            attempts: 0,
            accepted: Vec::new(),
        });
        let words = [GrbWord::new(1, 2, 3), GrbWord::new(4, 5, 6)];
        stream.push_frame(&words);

        assert_eq!(stream.pushed(), 2);
        assert_eq!(stream.serializer().attempts, 8);
        let serializer = stream.into_serializer();
        assert_eq!(serializer.accepted, vec![words[0].raw(), words[1].raw()]);
    }

    #[test]
    fn test_push_blocks_on_full_fifo_until_drained() {
        const WORDS: u8 = 64;
        let fifo: TxFifo<4> = TxFifo::new();

        let received = std::thread::scope(|scope| {
            let drain = scope.spawn(|| {
                let mut received = Vec::new();
                while received.len() < usize::from(WORDS) {
                    match fifo.try_take() {
                        Some(word) => received.push(word),
                        None => std::thread::yield_now(),
                    }
                }
                received
            });

            let mut stream = PixelStream::new(&fifo);
            for i in 0..WORDS {
                stream.push(GrbWord::new(i, 0, 0));
            }
            assert_eq!(stream.pushed(), u64::from(WORDS));
            drain.join().unwrap()
        });

        let expected: Vec<u32> = (0..WORDS).map(|i| GrbWord::new(i, 0, 0).raw()).collect();
        assert_eq!(received, expected);
        assert!(fifo.is_empty());
    }
}
