#[cfg(feature = "std")]
mod tests {
    use embassy_futures::join::join;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use futures::executor::block_on;
    use mma8452_device::drivers::sensors::mma8452::ADDR;
    use mma8452_device::testutil::*;
    use mma8452_device::*;
    use std::sync::Once;

    static INIT: Once = Once::new();

    fn setup() {
        INIT.call_once(|| {
            env_logger::init();
        });
    }

    const STATUS: u8 = 0x00;
    const OUT_X_MSB: u8 = 0x01;
    const OUT_Y_LSB: u8 = 0x04;

    // counts [2047, 0, -2048]
    const FULL_SCALE: [u8; 6] = [0x7F, 0xF0, 0x00, 0x00, 0x80, 0x00];
    // counts [512, -512, 256]
    const QUARTER: [u8; 6] = [0x20, 0x00, 0xE0, 0x00, 0x10, 0x00];

    type Stream = AccelStream<NoopRawMutex, TestBus>;

    fn mounted(encoding: Encoding, config: Config) -> (TestBus, Stream) {
        setup();
        let bus = TestBus::new(ADDR);
        let mut delay = bus.delay();
        let stream = block_on(AccelStream::mount(
            Mma8452::new(bus.clone(), config),
            &mut delay,
            encoding,
        ))
        .unwrap();
        bus.clear_transactions();
        (bus, stream)
    }

    fn read(stream: &Stream, size: usize) -> Vec<u8> {
        let mut buf = vec![0; size];
        let n = block_on(stream.read(&mut buf)).unwrap();
        buf.truncate(n);
        buf
    }

    #[test]
    fn test_read_full_snapshot() {
        let (bus, stream) = mounted(Encoding::Binary, Config::default());
        bus.load_sample(FULL_SCALE);

        assert_eq!(6, stream.snapshot_len());
        let bytes = read(&stream, 6);
        assert_eq!(Acceleration::new(1999, 0, 2000).to_le_bytes().to_vec(), bytes);
        assert_eq!(Some(Acceleration::new(1999, 0, 2000)), block_on(stream.latest()));

        bus.clear_transactions();
        assert!(read(&stream, 0).is_empty());
        assert!(bus.transactions().is_empty());
    }

    #[test]
    fn test_burst_order() {
        let (bus, stream) = mounted(Encoding::Binary, Config::default());
        bus.load_sample(FULL_SCALE);
        read(&stream, 6);
        assert_eq!(
            vec![
                Transaction::Read(0x00),
                Transaction::Read(0x01),
                Transaction::Read(0x02),
                Transaction::Read(0x03),
                Transaction::Read(0x04),
                Transaction::Read(0x05),
                Transaction::Read(0x06),
            ],
            bus.transactions()
        );
    }

    #[test]
    fn test_not_ready() {
        let (bus, stream) = mounted(Encoding::Binary, Config::default());
        assert!(read(&stream, 6).is_empty());
        assert_eq!(vec![Transaction::Read(STATUS)], bus.transactions());
        assert_eq!(0, bus.reads_of(OUT_X_MSB));
        assert_eq!(None, block_on(stream.latest()));
    }

    #[test]
    fn test_not_ready_keeps_snapshot() {
        let (bus, stream) = mounted(Encoding::Binary, Config::default());
        bus.load_sample(FULL_SCALE);
        let first = read(&stream, 6);

        assert!(read(&stream, 6).is_empty());
        assert_eq!(Some(Acceleration::new(1999, 0, 2000)), block_on(stream.latest()));
        assert_eq!(0, block_on(stream.position()));

        bus.set_ready(true);
        assert_eq!(first, read(&stream, 6));
    }

    #[test]
    fn test_partial_reads_see_one_sample() {
        let (bus, stream) = mounted(Encoding::Binary, Config::default());
        bus.load_sample(FULL_SCALE);
        let whole = Acceleration::new(1999, 0, 2000).to_le_bytes().to_vec();

        let mut drained = read(&stream, 2);
        assert_eq!(2, block_on(stream.position()));

        // A newer sample lands mid-sequence.
        bus.load_sample(QUARTER);
        drained.extend(read(&stream, 1));
        drained.extend(read(&stream, 10));

        assert_eq!(whole, drained);
        assert_eq!(1, bus.reads_of(STATUS));
        assert_eq!(0, block_on(stream.position()));

        // The next sequence picks the newer sample up.
        assert_eq!(
            Acceleration::new(500, 500, -250).to_le_bytes().to_vec(),
            read(&stream, 6)
        );
    }

    #[test]
    fn test_text_drain() {
        let (bus, stream) = mounted(Encoding::Text, Config::default());
        bus.load_sample(FULL_SCALE);

        assert_eq!(15, stream.snapshot_len());
        let mut drained = Vec::new();
        for size in [4, 1, 4, 1, 4, 1] {
            drained.extend(read(&stream, size));
        }
        assert_eq!(b"07cf 0000 07d0\n".to_vec(), drained);
        assert_eq!(1, bus.reads_of(STATUS));
    }

    #[test]
    fn test_bus_error_during_fetch() {
        let (bus, stream) = mounted(Encoding::Binary, Config::default());
        bus.load_sample(FULL_SCALE);
        let first = read(&stream, 6);

        bus.load_sample(QUARTER);
        bus.fail_read(Some(OUT_Y_LSB));
        let mut buf = [0; 6];
        let result = block_on(stream.read(&mut buf));
        assert!(matches!(
            result,
            Err(Mma8452Error::Bus(TestBusError::Injected(OUT_Y_LSB)))
        ));
        assert_eq!([0; 6], buf);
        assert_eq!(Some(Acceleration::new(1999, 0, 2000)), block_on(stream.latest()));
        assert_eq!(0, block_on(stream.position()));

        bus.fail_read(None);
        let second = read(&stream, 6);
        assert_ne!(first, second);
        assert_eq!(Acceleration::new(500, 500, -250).to_le_bytes().to_vec(), second);
    }

    #[test]
    fn test_status_error() {
        let (bus, stream) = mounted(Encoding::Binary, Config::default());
        bus.load_sample(FULL_SCALE);
        bus.fail_read(Some(STATUS));

        let mut buf = [0; 6];
        assert!(matches!(
            block_on(stream.read(&mut buf)),
            Err(Mma8452Error::Bus(TestBusError::Injected(STATUS)))
        ));
        assert_eq!(0, bus.reads_of(OUT_X_MSB));
    }

    #[test]
    fn test_concurrent_readers_share_one_fetch() {
        let (bus, stream) = mounted(Encoding::Binary, Config::default());
        bus.load_sample(FULL_SCALE);

        let mut a = [0; 3];
        let mut b = [0; 3];
        let (ra, rb) = block_on(join(stream.read(&mut a), stream.read(&mut b)));
        assert_eq!(3, ra.unwrap());
        assert_eq!(3, rb.unwrap());

        let whole = Acceleration::new(1999, 0, 2000).to_le_bytes();
        assert_eq!(whole[..3], a);
        assert_eq!(whole[3..], b);
        assert_eq!(1, bus.reads_of(STATUS));
        assert_eq!(1, bus.reads_of(OUT_X_MSB));
    }

    #[test]
    fn test_concurrent_full_reads_do_not_refetch_data() {
        let (bus, stream) = mounted(Encoding::Binary, Config::default());
        bus.load_sample(FULL_SCALE);

        let mut a = [0; 6];
        let mut b = [0; 6];
        let (ra, rb) = block_on(join(stream.read(&mut a), stream.read(&mut b)));
        assert_eq!(6, ra.unwrap());
        assert_eq!(0, rb.unwrap());
        assert_eq!(2, bus.reads_of(STATUS));
        assert_eq!(1, bus.reads_of(OUT_X_MSB));
    }

    #[test]
    fn test_full_scale_from_config() {
        let (bus, stream) = mounted(
            Encoding::Binary,
            Config::default().full_scale(FullScale::G8),
        );
        bus.load_sample(FULL_SCALE);
        assert_eq!(
            Acceleration::new(7996, 0, 8000).to_le_bytes().to_vec(),
            read(&stream, 6)
        );
    }

    #[test]
    fn test_release() {
        let (bus, stream) = mounted(Encoding::Binary, Config::default());
        let driver = stream.release();
        assert_eq!(FullScale::G2, driver.config().full_scale);
        let _bus: TestBus = driver.release();
        assert!(bus.transactions().is_empty());
    }
}
