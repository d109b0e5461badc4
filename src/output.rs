use std::fmt::Display;

pub const VALUES_PER_ROW: usize = 16;

/// Renders bytes as a C-style literal list: `0x00, 0xff, ...`, 16 per line.
/// No newline follows a partial last line.
pub struct HexArray<'a>(pub &'a [u8]);

impl<'a> Display for HexArray<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, b) in self.0.iter().enumerate() {
            write!(f, "0x{:02x}, ", b)?;
            if (idx + 1) % VALUES_PER_ROW == 0 {
                write!(f, "\n")?;
            }
        }
        Ok(())
    }
}

pub fn write_hex_array(out: &mut impl std::io::Write, bytes: &[u8]) -> std::io::Result<()> {
    write!(out, "{}", HexArray(bytes))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short() {
        assert_eq!(HexArray(&[0x00, 0x0a, 0xff]).to_string(), "0x00, 0x0a, 0xff, ");
        assert_eq!(HexArray(&[]).to_string(), "");
    }

    #[test]
    fn test_line_breaks() {
        let bytes: Vec<u8> = (0..33).collect();
        let mut out = Vec::new();
        write_hex_array(&mut out, &bytes).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches("0x").count(), 16);
        assert!(lines[0].starts_with("0x00, 0x01, "));
        assert!(lines[1].ends_with("0x1f, "));
        assert_eq!(lines[2], "0x20, ");
    }

    #[test]
    fn test_exact_row_ends_with_newline() {
        let text = HexArray(&[0xffu8; 16]).to_string();
        assert!(text.ends_with("0xff, \n"));
        assert_eq!(text.matches('\n').count(), 1);
    }
}
