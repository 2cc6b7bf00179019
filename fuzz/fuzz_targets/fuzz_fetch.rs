#![no_main]

use bitbuf_rs::BitBuffer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First two bytes pick the offset and width, the rest is the buffer
    if data.len() < 2 {
        return;
    }
    let offset = data[0] as usize;
    let nbits = u32::from(data[1] % 40);
    let mut buffer = BitBuffer::copied(&data[2..]).unwrap();

    // Every accessor must either succeed or return an error, never panic
    let bits = buffer.fetch_bits(offset, nbits);
    assert_eq!(
        bits.is_ok(),
        nbits <= 32 && buffer.has_enough_data(offset, nbits as usize)
    );
    let _ = buffer.get_u8(offset);
    let _ = buffer.get_u16(offset);
    let _ = buffer.get_u32(offset);
    let _ = buffer.get_u64(offset);
    let _ = buffer.at_byte_offset(offset);

    let mut out = [0u8; 16];
    let _ = buffer.fetch_nbytes(offset, nbits as usize % 17, &mut out);

    if let Ok(proof) = buffer.check_bounds(offset, nbits as usize) {
        let view = buffer.at_byte_offset_unchecked(&proof);
        assert_eq!(view.len(), proof.byte_range().len());
    }

    buffer.append_data(data).unwrap();
    let _ = buffer.to_string();
});
