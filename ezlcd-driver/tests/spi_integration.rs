//! Driver over the SPI transport, against mocked bus and chip select

use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
use ezlcd_driver::{ButtonDescriptor, ButtonImages, ButtonState, EzLcd, TouchProtocol};
use ezlcd_hal::SpiTransport;

/// Expected bus traffic, built one chip select cycle at a time
#[derive(Default)]
struct Expect {
    spi: Vec<SpiTransaction<u8>>,
    cs: Vec<PinTransaction>,
}

impl Expect {
    fn transfer(mut self, bytes: &[(u8, u8)]) -> Self {
        self.cs.push(PinTransaction::set(PinState::Low));
        for &(write, read) in bytes {
            self.spi
                .push(SpiTransaction::transfer_in_place(vec![write], vec![read]));
        }
        self.spi.push(SpiTransaction::flush());
        self.cs.push(PinTransaction::set(PinState::High));
        self
    }

    fn command(self, bytes: &[u8]) -> Self {
        let pairs: Vec<(u8, u8)> = bytes.iter().map(|&b| (b, 0x00)).collect();
        self.transfer(&pairs)
    }

    fn nop(self, reply: u8) -> Self {
        self.transfer(&[(0x00, reply)])
    }

    fn mocks(&self) -> (SpiMock<u8>, PinMock) {
        (SpiMock::new(&self.spi), PinMock::new(&self.cs))
    }
}

#[test]
fn init_over_spi() {
    let expect = Expect::default()
        .command(&[0x83])
        .nop(0x00)
        .command(&[0x83])
        .nop(0x38)
        .command(&[0xB2, 0x01]);
    let (mut spi, mut cs) = expect.mocks();

    let mut lcd = EzLcd::new(SpiTransport::new(spi.clone(), cs.clone()));
    lcd.init().unwrap();
    assert_eq!(lcd.touch_protocol(), Some(TouchProtocol::EzButton));

    let transport = lcd.release();
    assert!(!transport.is_selected());
    spi.done();
    cs.done();
}

#[test]
fn button_press_over_spi() {
    let expect = Expect::default()
        .command(&[0xB2, 0x02])
        .command(&[0xB5, 4, 1, 0, 10, 0, 11, 0xFF, 0xFF, 0, 100, 0, 50, 80, 40])
        .nop(0x00)
        .nop(0x44)
        .command(&[0xB1, 4, 2])
        .nop(0x84)
        .command(&[0xB1, 4, 1]);
    let (mut spi, mut cs) = expect.mocks();

    let mut lcd = EzLcd::new(SpiTransport::new(spi.clone(), cs.clone()));
    lcd.set_touch_protocol(TouchProtocol::CuButton).unwrap();
    lcd.define_button(&ButtonDescriptor {
        id: 4,
        state: ButtonState::Up,
        images: ButtonImages::new(10, 11, ezlcd_protocol::NO_IMAGE),
        x: 100,
        y: 50,
        width: 80,
        height: 40,
    })
    .unwrap();
    assert_eq!(lcd.wait_for_event(), Ok(4));

    lcd.release();
    spi.done();
    cs.done();
}

#[test]
fn calibrate_over_spi() {
    let expect = Expect::default()
        .command(&[0xB6])
        .nop(0x00)
        .nop(0x32);
    let (mut spi, mut cs) = expect.mocks();

    let mut lcd = EzLcd::new(SpiTransport::new(spi.clone(), cs.clone()));
    lcd.calibrate().unwrap();

    lcd.release();
    spi.done();
    cs.done();
}

#[test]
fn polygon_is_one_transfer() {
    use ezlcd_driver::Point;

    let expect = Expect::default().command(&[0xA6, 2, 0, 1, 0, 2, 0, 3, 0, 4]);
    let (mut spi, mut cs) = expect.mocks();

    let mut lcd = EzLcd::new(SpiTransport::new(spi.clone(), cs.clone()));
    lcd.polygon(&[Point::new(1, 2), Point::new(3, 4)]).unwrap();

    lcd.release();
    spi.done();
    cs.done();
}
