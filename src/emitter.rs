//! Writes the quantized tables as a C source file.
//!
//! The generated file declares a two-dimensional `uint8_t` array placed in
//! program memory, plus a `MAX_TABLE` define holding the highest valid table
//! index. Values are written as lowercase hex bytes, 8 per line.
//!
//! ```text
//! #define MAX_TABLE 58
//!
//! const uint8_t saw_tables[59][256] PROGMEM = {
//!     {
//!         0xHH, 0xHH, 0xHH, 0xHH, 0xHH, 0xHH, 0xHH, 0xHH,
//!         ...
//!     },
//! };
//! ```

use super::TableError;

use log::{debug, info};

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const VALUES_PER_LINE: usize = 8;

// The trailing space after "filtering." is part of the format
const HEADER_COMMENT: &str = "// --- file generated by make_saw_table.py ---\n\
                              //\n\
                              // sampled sawtooth wave with different amounts\n\
                              // of low pass filtering. \n\
                              \n";

pub struct CEmitter {
}

impl CEmitter {
    // Fixed file header, up to and including the opening brace of the array.
    fn write_header<W: Write>(dest: &mut W, num_tables: usize, num_samples: usize) -> Result<(), std::io::Error> {
        dest.write_all(HEADER_COMMENT.as_bytes())?;
        write!(dest, "#define MAX_TABLE {}\n\n", num_tables as isize - 1)?;
        write!(dest, "const uint8_t saw_tables[{}][{}] PROGMEM = {{", num_tables, num_samples)
    }

    // A single brace enclosed table.
    //
    // Every value is followed by ", ", every 8th value additionally by a line
    // break and the indentation for the next line.
    fn write_table<W: Write>(dest: &mut W, table: &[u8]) -> Result<(), std::io::Error> {
        dest.write_all(b"\n    {\n        ")?;
        for (count, value) in table.iter().enumerate() {
            write!(dest, "0x{:02x}, ", value)?;
            if count % VALUES_PER_LINE == VALUES_PER_LINE - 1 {
                dest.write_all(b"\n        ")?;
            }
        }
        dest.write_all(b"\n    },\n")
    }

    /// Write the complete source listing to the given output stream.
    ///
    /// ```
    /// use saw_tables::CEmitter;
    ///
    /// let mut out = Vec::new();
    /// CEmitter::write_to(&mut out, &[vec![0x80; 8]]).unwrap();
    /// let text = String::from_utf8(out).unwrap();
    /// assert!(text.contains("#define MAX_TABLE 0\n"));
    /// assert!(text.contains("saw_tables[1][8] PROGMEM"));
    /// assert!(text.ends_with("    },\n};"));
    /// ```
    pub fn write_to<W: Write>(dest: &mut W, tables: &[Vec<u8>]) -> Result<(), std::io::Error> {
        let num_samples = tables.first().map(|t| t.len()).unwrap_or(0);
        CEmitter::write_header(dest, tables.len(), num_samples)?;
        for table in tables {
            CEmitter::write_table(dest, table)?;
        }
        dest.write_all(b"};")
    }

    /// Render the source listing into a string.
    pub fn render(tables: &[Vec<u8>]) -> String {
        let mut out = Vec::new();
        // Writing to a Vec can't fail
        if CEmitter::write_to(&mut out, tables).is_err() {
            return String::new();
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Write the source listing to a file.
    ///
    /// Missing parent directories are created, an existing file is
    /// overwritten.
    ///
    /// ``` no_run
    /// use saw_tables::CEmitter;
    ///
    /// # fn main() -> Result<(), saw_tables::TableError> {
    /// CEmitter::write_file("tables/saw_tables.c", &[vec![0x80; 256]])?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn write_file<P: AsRef<Path>>(path: P, tables: &[Vec<u8>]) -> Result<(), TableError> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                debug!("Creating directory [{}]", dir.display());
                fs::create_dir_all(dir)?;
            }
        }
        info!("Writing {} tables to [{}]", tables.len(), path.display());
        let mut writer = BufWriter::new(File::create(path)?);
        CEmitter::write_to(&mut writer, tables)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "// --- file generated by make_saw_table.py ---\n\
                          //\n\
                          // sampled sawtooth wave with different amounts\n\
                          // of low pass filtering. \n\
                          \n\
                          #define MAX_TABLE 1\n\
                          \n\
                          const uint8_t saw_tables[2][16] PROGMEM = {";

    #[test]
    fn listing_matches_reference_layout() {
        let tables = vec![(0..16).collect::<Vec<u8>>(), vec![0xff; 16]];
        let expected = String::new()
            + HEADER
            + "\n    {\n"
            + "        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, \n"
            + "        0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, \n"
            + "        \n"
            + "    },\n"
            + "\n    {\n"
            + "        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, \n"
            + "        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, \n"
            + "        \n"
            + "    },\n"
            + "};";
        assert_eq!(CEmitter::render(&tables), expected);
    }

    #[test]
    fn partial_last_line_has_no_extra_indent() {
        let text = CEmitter::render(&[vec![0x2a; 10]]);
        assert!(text.contains("0x2a, 0x2a, \n    },\n};"));
    }

    #[test]
    fn header_keeps_trailing_space() {
        let text = CEmitter::render(&[vec![0; 8]]);
        assert!(text.contains("// of low pass filtering. \n"));
    }
}
