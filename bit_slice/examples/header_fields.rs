use bit_slice::{BitReader, BitSlice, BitWriter, ByteOrder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Packing a 3-byte header ===\n");

    // version:3 | ack:1 | retry:1 | priority:3 | length:12 | reserved:4
    let mut writer = BitWriter::new(ByteOrder::BigEndian);
    writer.write_u64(2, 3)?;
    writer.write_bool(true);
    writer.write_bool(false);
    writer.write_u64(5, 3)?;
    writer.write_u64(1500, 12)?;
    writer.write_u64(0, 4)?;

    let packed = writer.finish();
    println!("bits:  {}", packed);

    let mut wire = Vec::new();
    packed.to_buffer(&mut wire)?;
    println!("bytes: {:02X?}\n", wire);

    println!("=== Unpacking ===\n");

    let decoded = BitSlice::from_reader(&wire[..], ByteOrder::BigEndian, wire.len())?;
    let mut reader = BitReader::new(decoded);
    println!("version:  {}", reader.read_u64(3)?);
    println!("ack:      {}", reader.read_bool()?);
    println!("retry:    {}", reader.read_bool()?);
    println!("priority: {}", reader.read_u64(3)?);
    println!("length:   {}", reader.read_u64(12)?);
    reader.skip(4)?;

    println!("\n=== Masking flags ===\n");

    let flags = BitSlice::from_bytes(&wire[..1], ByteOrder::BigEndian);
    let ack_mask = BitSlice::from_bools(vec![false, false, false, true], ByteOrder::BigEndian);
    println!("flags:      {}", flags);
    println!("ack only:   {}", flags.and(&ack_mask));
    println!("inverted:   {}", flags.inverse());
    println!("shifted <3: {}", flags.shift_left(3));

    Ok(())
}
