//! Human-readable dump of buffer contents.
//!
//! ```text
//! <Buffer>
//!     <Length>2</Length>
//!     <Bytes>
//!         0x12 0x34
//!     </Bytes>
//! </Buffer>
//! ```

use std::fmt;
use std::io::{self, Write};

use super::BitBuffer;
use crate::constants::{DUMP_BYTES_INDENT, DUMP_BYTES_PER_LINE, DUMP_TAG_INDENT};

impl fmt::Display for BitBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<Buffer>")?;
        writeln!(f, "{:indent$}<Length>{}</Length>", "", self.len(), indent = DUMP_TAG_INDENT)?;
        writeln!(f, "{:indent$}<Bytes>", "", indent = DUMP_TAG_INDENT)?;

        for line in self.as_bytes().chunks(DUMP_BYTES_PER_LINE) {
            write!(f, "{:indent$}", "", indent = DUMP_BYTES_INDENT)?;
            for (i, byte) in line.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "0x{byte:02x}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{:indent$}</Bytes>", "", indent = DUMP_TAG_INDENT)?;
        writeln!(f, "</Buffer>")
    }
}

impl BitBuffer<'_> {
    /// Write the dump to `out`
    pub fn dump_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }

    /// Write the dump to standard output
    pub fn dump(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.dump_to(&mut handle)
    }
}
