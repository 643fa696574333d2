use std::io::{Read, Write};

/// A `// <offset>` comment precedes every this many bytes
pub const MARKER_INTERVAL: u64 = 1024;

/// Number of byte entries per line
pub const ENTRIES_PER_LINE: u64 = 16;

const READ_BUFFER_SIZE: usize = 8 * 1024;

/// Stream all bytes from `reader` into `writer` as a `const unsigned char` array literal.
///
/// Output layout, for each byte at offset `n` (counted across the whole stream):
/// - `\n// n` if `n` is a multiple of [`MARKER_INTERVAL`],
/// - then `\n` if `n` is a multiple of [`ENTRIES_PER_LINE`],
/// - then the entry, e.g. `0x0a,`.
///
/// The literal is closed with `\n};\n`, so an empty input still yields a well-formed (empty) declaration.
/// No length is emitted; consumers have to take `sizeof` of the array.
///
/// Returns the number of bytes written as entries.
pub fn write_literal<R: Read, W: Write>(identifier: &str, mut reader: R, mut writer: W) -> std::io::Result<u64> {
    write!(writer, "const unsigned char {identifier}[] = {{")?;
    let mut counter: u64 = 0;
    let mut buffer = [0u8; READ_BUFFER_SIZE];
    loop {
        let len = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(len) => len,
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        for byte in &buffer[..len] {
            // both checks fire at offset 0
            if counter % MARKER_INTERVAL == 0 {
                write!(writer, "\n// {counter}")?;
            }
            if counter % ENTRIES_PER_LINE == 0 {
                writer.write_all(b"\n")?;
            }
            write!(writer, "0x{byte:02x},")?;
            counter += 1;
        }
    }
    writer.write_all(b"\n};\n")?;
    Ok(counter)
}
