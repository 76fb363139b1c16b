use crate::{Endian, Reader};

#[test]
fn unsigned_ints_roundtrip_both_endians() {
    let value = 0x1234u16;
    assert_eq!(
        Reader::new(&value.to_le_bytes()).read_u16().unwrap(),
        value
    );
    assert_eq!(
        Reader::with_endian(&value.to_be_bytes(), Endian::Big)
            .read_u16()
            .unwrap(),
        value
    );

    let value = 0xDEAD_BEEFu32;
    assert_eq!(
        Reader::new(&value.to_le_bytes()).read_u32().unwrap(),
        value
    );
    assert_eq!(
        Reader::with_endian(&value.to_be_bytes(), Endian::Big)
            .read_u32()
            .unwrap(),
        value
    );

    let value = 0x0123_4567_89AB_CDEFu64;
    assert_eq!(
        Reader::new(&value.to_le_bytes()).read_u64().unwrap(),
        value
    );
    assert_eq!(
        Reader::with_endian(&value.to_be_bytes(), Endian::Big)
            .read_u64()
            .unwrap(),
        value
    );
}

#[test]
fn signed_ints_roundtrip_both_endians() {
    assert_eq!(Reader::new(&[0xf8]).read_i8().unwrap(), -8);

    let value = -16i16;
    assert_eq!(
        Reader::new(&value.to_le_bytes()).read_i16().unwrap(),
        value
    );
    assert_eq!(
        Reader::with_endian(&value.to_be_bytes(), Endian::Big)
            .read_i16()
            .unwrap(),
        value
    );

    let value = -32i32;
    assert_eq!(
        Reader::new(&value.to_le_bytes()).read_i32().unwrap(),
        value
    );
    assert_eq!(
        Reader::with_endian(&value.to_be_bytes(), Endian::Big)
            .read_i32()
            .unwrap(),
        value
    );

    let value = -64i64;
    assert_eq!(
        Reader::new(&value.to_le_bytes()).read_i64().unwrap(),
        value
    );
    assert_eq!(
        Reader::with_endian(&value.to_be_bytes(), Endian::Big)
            .read_i64()
            .unwrap(),
        value
    );
}

#[test]
fn byte_reads() {
    let mut reader = Reader::new(&[0x08, 0xff]);
    assert_eq!(reader.read_u8().unwrap(), 8);
    assert_eq!(reader.read_i8().unwrap(), -1);
    assert_eq!(reader.position(), 2);
}

#[test]
fn bool_maps_nonzero_to_true() {
    let mut reader = Reader::new(&[0x00, 0x01, 0x2a]);
    assert!(!reader.read_bool().unwrap());
    assert!(reader.read_bool().unwrap());
    assert!(reader.read_bool().unwrap());
}

#[test]
fn floats_roundtrip_bit_for_bit() {
    for value in [4.0f32, -0.0, f32::INFINITY, core::f32::consts::PI] {
        let decoded = Reader::new(&value.to_le_bytes()).read_f32().unwrap();
        assert_eq!(decoded.to_bits(), value.to_bits());

        let decoded = Reader::with_endian(&value.to_be_bytes(), Endian::Big)
            .read_f32()
            .unwrap();
        assert_eq!(decoded.to_bits(), value.to_bits());
    }

    for value in [8.0f64, -0.0, f64::NEG_INFINITY, core::f64::consts::E] {
        let decoded = Reader::new(&value.to_le_bytes()).read_f64().unwrap();
        assert_eq!(decoded.to_bits(), value.to_bits());

        let decoded = Reader::with_endian(&value.to_be_bytes(), Endian::Big)
            .read_f64()
            .unwrap();
        assert_eq!(decoded.to_bits(), value.to_bits());
    }
}

#[test]
fn float_nan_payload_survives() {
    let bits = 0x7fc0_1234u32;
    let decoded = Reader::new(&bits.to_le_bytes()).read_f32().unwrap();
    assert!(decoded.is_nan());
    assert_eq!(decoded.to_bits(), bits);
}

#[test]
fn half_decodes_normals() {
    let cases: [(u16, f32); 5] = [
        (0x3c00, 1.0),
        (0x4000, 2.0),
        (0x4100, 2.5),
        (0xc100, -2.5),
        (0x7bff, 65504.0),
    ];
    for (bits, expected) in cases {
        let value = Reader::new(&bits.to_le_bytes()).read_f16().unwrap();
        assert_eq!(value, expected, "bits {bits:#06x}");
    }
}

#[test]
fn half_decodes_zeros_subnormals_and_specials() {
    let zero = Reader::new(&0x0000u16.to_le_bytes()).read_f16().unwrap();
    assert_eq!(zero.to_bits(), 0.0f32.to_bits());

    let neg_zero = Reader::new(&0x8000u16.to_le_bytes()).read_f16().unwrap();
    assert_eq!(neg_zero.to_bits(), (-0.0f32).to_bits());

    // smallest positive subnormal, 2^-24
    let tiny = Reader::new(&0x0001u16.to_le_bytes()).read_f16().unwrap();
    assert_eq!(tiny, 1.0 / 16_777_216.0);

    // largest subnormal, 1023 * 2^-24
    let sub = Reader::new(&0x03ffu16.to_le_bytes()).read_f16().unwrap();
    assert_eq!(sub, 1023.0 / 16_777_216.0);

    let inf = Reader::new(&0x7c00u16.to_le_bytes()).read_f16().unwrap();
    assert_eq!(inf, f32::INFINITY);

    let neg_inf = Reader::new(&0xfc00u16.to_le_bytes()).read_f16().unwrap();
    assert_eq!(neg_inf, f32::NEG_INFINITY);

    let nan = Reader::new(&0x7e00u16.to_le_bytes()).read_f16().unwrap();
    assert!(nan.is_nan());
}

#[test]
fn half_honors_endianness() {
    assert_eq!(Reader::new(&[0x00, 0x40]).read_f16().unwrap(), 2.0);
    assert_eq!(
        Reader::with_endian(&[0x40, 0x00], Endian::Big)
            .read_f16()
            .unwrap(),
        2.0
    );
}

#[test]
fn sequential_reads_advance_exactly() {
    let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
    let mut reader = Reader::new(&data);

    assert_eq!(reader.read_u8().unwrap(), 0x01);
    assert_eq!(reader.position(), 1);
    assert_eq!(reader.read_u16().unwrap(), 0x0302);
    assert_eq!(reader.position(), 3);
    assert_eq!(reader.read_u32().unwrap(), 0x07060504);
    assert_eq!(reader.position(), 7);
    assert_eq!(reader.remaining(), 0);
}
