use nfca::frontend::MockFrontEnd;
use nfca::protocol::{ExchangeResult, Transceiver};
use nfca::Error;

#[test]
fn silence_is_an_empty_result_not_an_error() {
    let mut mock = MockFrontEnd::new();
    mock.push_silence();
    let mut x = Transceiver::new(&mut mock);
    // Ok(0) from the front-end
    let a: ExchangeResult<2> = x.transceive_bits(0x26, 7, 10, false).unwrap();
    // Err(Timeout) from the front-end (empty queue)
    let b: ExchangeResult<2> = x.transceive_bits(0x26, 7, 10, false).unwrap();
    assert!(a.is_empty() && b.is_empty());
}

#[test]
fn crc_strip_applies_from_three_bytes() {
    let mut mock = MockFrontEnd::new();
    mock.push_response(vec![0x04, 0xDA, 0x17]);
    mock.push_response(vec![0x04]);
    let mut x = Transceiver::new(&mut mock);
    let three: ExchangeResult<3> = x.transceive_bytes(&[0x93, 0x70], 20, true).unwrap();
    let one: ExchangeResult<3> = x.transceive_bytes(&[0x93, 0x70], 20, true).unwrap();
    assert_eq!(three.as_bytes(), &[0x04]);
    assert_eq!(one.as_bytes(), &[0x04]);
}

#[test]
fn oversized_reply_is_clamped_to_capacity() {
    let mut mock = MockFrontEnd::new();
    mock.push_response(vec![0x11; 32]);
    let mut x = Transceiver::new(&mut mock);
    let r: ExchangeResult<5> = x.transceive_bytes(&[0x93, 0x20], 10, false).unwrap();
    assert_eq!(r.len(), 5);
}

#[test]
fn field_is_released_even_when_an_exchange_fails() {
    let mut mock = MockFrontEnd::new();
    let probe = mock.clone();
    mock.push_fault("bus error");
    let mut x = Transceiver::new(&mut mock);
    let res: Result<ExchangeResult<2>, Error> = (|| {
        let mut field = x.field_on()?;
        field.transceive_bits(0x26, 7, 10, false)
    })();
    assert!(matches!(res, Err(Error::FrontEnd(_))));
    assert_eq!(probe.field_log(), vec![true, false]);
}
