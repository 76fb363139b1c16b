//! Decodes a small fictional record format to show the cursor API.
//!
//! Layout: a magic `u32`, a version `u16`, a flag byte, a 4-byte-aligned
//! name string, then a count-prefixed array of `f32` samples.

use bytecursor::{Endian, Reader};

fn main() {
    let blob = build_record();

    let mut reader = Reader::with_endian(&blob, Endian::Little);

    let magic = reader.read_u32().expect("magic");
    assert_eq!(magic, 0x5245_4344);
    let version = reader.read_u16().expect("version");
    let compressed = reader.read_bool().expect("flag");
    reader.skip(1).expect("reserved byte");

    let name = reader.read_str_aligned().expect("name");
    let samples = reader.read_f32_array().expect("samples");

    println!("record v{version} `{name}` (compressed: {compressed})");
    println!("{} samples: {:?}", samples.len(), samples);
    println!("consumed {} of {} bytes", reader.position(), reader.len());
}

fn build_record() -> Vec<u8> {
    let mut blob = Vec::new();
    blob.extend_from_slice(&0x5245_4344u32.to_le_bytes());
    blob.extend_from_slice(&3u16.to_le_bytes());
    blob.push(1);
    blob.push(0);

    let name = "probe-7";
    blob.extend_from_slice(&(name.len() as i32).to_le_bytes());
    blob.extend_from_slice(name.as_bytes());
    while (blob.len() - 8) % 4 != 0 {
        blob.push(0);
    }

    let samples = [0.25f32, -1.5, 3.75];
    blob.extend_from_slice(&(samples.len() as i32).to_le_bytes());
    for sample in samples {
        blob.extend_from_slice(&sample.to_le_bytes());
    }
    blob
}
