/*! # `hxx_resources`: resource files as C array literals

This crate turns arbitrary files into `const unsigned char` array declarations, so a C or C++ program can `#include` its assets instead of reading them at runtime.
It's the same idea as [`std::include_bytes!`], for compilers that don't have one.

Every file directly inside a directory named `resources` (at any depth below the search root) is a resource.
For a resource at `path/resources/logo.png`, a sibling `path/resources/logo.png.hxx` is (over)written:

```text
const unsigned char logo_png[] = {
// 0
0x89,0x50,0x4e,0x47,0x0d,0x0a,0x1a,0x0a,0x00,0x00,0x00,0x0d,0x49,0x48,0x44,0x52,
0x00,0x00,0x00,0x10,
};
```

The name of the array is the file name with every `.` replaced by `_`.
Nothing else is sanitized, and identical names from different directories aren't rejected (only logged as a warning).
No length is emitted; use `sizeof(logo_png)`.
A `// <offset>` comment is written every 1024 bytes.

Files ending in `.hxx` are never embedded themselves, so re-running over the same tree gives the same output.

# Command line

The `hxx-resources` binary embeds everything below the directory it is installed in:

```text
$ hxx-resources
/path/to/project/plugin/resources/logo.png
logo_png
```

For each resource, it prints the path and the identifier before processing it.
Pass a directory to search somewhere else: `hxx-resources path/to/project`.
Any error aborts the whole run with a non-zero exit code.
Diagnostics go to stderr and can be tuned with `RUST_LOG` (e.g. `RUST_LOG=debug`).

# Library

```
let mut out: Vec<u8> = vec![];
hxx_resources::write_literal("blob_bin", &b"\x0a\xff"[..], &mut out).unwrap();
let text = std::str::from_utf8(&out).unwrap();
assert_eq!(text, "const unsigned char blob_bin[] = {\n// 0\n0x0a,0xff,\n};\n");

let literal = hxx_resources::parse_literal(text).unwrap();
assert_eq!(literal.identifier.as_str(), "blob_bin");
assert_eq!(literal.bytes, [0x0a, 0xff]);
```

Embedding a whole tree, with progress lines collected instead of printed:

```no_run
let config = hxx_resources::EmbedConfig::new("path/to/project");
let mut progress: Vec<u8> = vec![];
for literal in hxx_resources::run(&config, &mut progress)? {
    println!("{}: {} bytes", literal.identifier, literal.byte_count);
}
# Ok::<(), anyhow::Error>(())
```
*/

pub use hxx_resources_decode::{parse_literal, Literal, ParseError};
pub use hxx_resources_encode::{
    colliding_identifiers, derive_identifier, discover, embed_file, output_path, run, write_literal, DiscoveryError, EmbedConfig, EmittedLiteral, Identifier,
    ResourceFile, SymlinkRules, DEFAULT_EXTENSION, DEFAULT_RESOURCE_DIR_NAME, ENTRIES_PER_LINE, MARKER_INTERVAL,
};
