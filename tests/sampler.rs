mod tests {
    use pot_hsv_strip::{AnalogReader, AnalogSampler, Calibration, ChannelMap, HueSource};

    struct Knobs {
        readings: [u16; 3],
        reads: Vec<u8>,
    }

    impl Knobs {
        fn new(readings: [u16; 3]) -> Self {
            Self {
                readings,
                reads: Vec::new(),
            }
        }
    }

    impl AnalogReader for Knobs {
        fn read(&mut self, channel: u8) -> u16 {
            self.reads.push(channel);
            self.readings[usize::from(channel)]
        }
    }

    #[test]
    fn test_calibration_endpoints() {
        let cal = Calibration::POTENTIOMETER;
        assert_eq!(cal.normalize(12), 0.0);
        assert_eq!(cal.normalize(4095), 1.0);
        assert_eq!(cal.normalize(2048), 2036.0 / 4083.0);
        assert!(cal.normalize(0) < 0.0);
        assert_eq!(Calibration::default(), cal);
    }

    #[test]
    fn test_sweep_mode_skips_hue_channel() {
        let mut knobs = Knobs::new([4095, 12, 2048]);
        let mut sampler =
            AnalogSampler::new(&mut knobs, Calibration::POTENTIOMETER, ChannelMap::default());

        let sample = sampler.sample(HueSource::Sweep);
        assert_eq!(sample.value, 1.0);
        assert_eq!(sample.saturation, 0.0);
        assert_eq!(sample.hue, None);
        assert_eq!(knobs.reads, vec![0, 1]);
    }

    #[test]
    fn test_sensor_mode_reads_hue() {
        let mut knobs = Knobs::new([2048, 2048, 4095]);
        let mut sampler =
            AnalogSampler::new(&mut knobs, Calibration::POTENTIOMETER, ChannelMap::default());

        let sample = sampler.sample(HueSource::Sensor);
        assert_eq!(sample.hue, Some(360.0));
        assert_eq!(sample.value, sample.saturation);
        assert_eq!(knobs.reads, vec![0, 1, 2]);
    }

    #[test]
    fn test_custom_channel_map() {
        let channels = ChannelMap {
            value: 2,
            saturation: 0,
            hue: 1,
        };
        let mut sampler = AnalogSampler::new(
            Knobs::new([12, 4095, 4095]),
            Calibration::POTENTIOMETER,
            channels,
        );

        let sample = sampler.sample(HueSource::Sensor);
        assert_eq!(sample.value, 1.0);
        assert_eq!(sample.saturation, 0.0);
        assert_eq!(sample.hue, Some(360.0));
        assert_eq!(sampler.into_reader().reads, vec![2, 0, 1]);
    }
}
