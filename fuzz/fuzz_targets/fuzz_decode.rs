#![no_main]

use fission::Encoding;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Encoding, Vec<u8>)| {
    let (encoding, bytes) = input;

    match (encoding.decode(&bytes), encoding.decode_utf16(&bytes)) {
        (Ok(text), Ok(units)) => {
            assert_eq!(text.encode_utf16().collect::<Vec<_>>(), units);
        }
        (Err(_), Err(_)) => {}
        (text, units) => panic!("decoders disagree: {text:?} vs {units:?}"),
    }
});
