//! UTF-16 buffer decoding for fixed-size Win32 string fields.

/// Decode a NUL-terminated UTF-16 buffer, stopping at the first NUL or the
/// end of the buffer when no terminator is present.
pub fn from_wide(buf: &[u16]) -> String {
    let end = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_the_first_nul() {
        let buf: Vec<u16> = "Monitor-A\0garbage".encode_utf16().collect();
        assert_eq!(from_wide(&buf), "Monitor-A");
    }

    #[test]
    fn takes_the_whole_buffer_without_a_terminator() {
        let buf: Vec<u16> = "DELL U2415".encode_utf16().collect();
        assert_eq!(from_wide(&buf), "DELL U2415");
    }

    #[test]
    fn empty_buffer_decodes_empty() {
        assert_eq!(from_wide(&[]), "");
        assert_eq!(from_wide(&[0, 0, 0]), "");
    }
}
