// Pieces of the literal layout that the parser matches against.

pub const HEADER_PREFIX: &str = "const unsigned char ";
pub const HEADER_SUFFIX: &str = "[] = {";
pub const MARKER_PREFIX: &str = "// ";
pub const ENTRY_PREFIX: &str = "0x";
pub const TERMINATOR: &str = "\n};\n";
