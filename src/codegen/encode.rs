//! Byte literal rendering.

/// Render bytes as lines of `0x..` literals, `per_line` values per line.
///
/// Every value is followed by a comma, which both C++ initializer lists and
/// Rust array expressions accept. Empty input yields no lines.
///
/// # Example
///
/// ```text
/// b"<html>" with per_line = 4  ->  ["0x3c, 0x68, 0x74, 0x6d,", "0x6c, 0x3e,"]
/// ```
pub fn byte_lines(bytes: &[u8], per_line: usize) -> Vec<String> {
    let per_line = per_line.max(1);
    bytes
        .chunks(per_line)
        .map(|chunk| {
            chunk
                .iter()
                .map(|b| format!("0x{b:02x},"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse rendered lines back into bytes.
    fn decode(lines: &[String]) -> Vec<u8> {
        lines
            .iter()
            .flat_map(|line| line.split(','))
            .map(str::trim)
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                let hex = tok.strip_prefix("0x").expect("0x prefix");
                assert_eq!(hex.len(), 2, "two hex digits: {tok}");
                u8::from_str_radix(hex, 16).unwrap()
            })
            .collect()
    }

    /// Deterministic pseudo-random bytes (64-bit LCG).
    fn noise(len: usize, seed: u64) -> Vec<u8> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                (state >> 56) as u8
            })
            .collect()
    }

    #[test]
    fn test_byte_lines_format() {
        let lines = byte_lines(b"<html>", 4);
        assert_eq!(lines, ["0x3c, 0x68, 0x74, 0x6d,", "0x6c, 0x3e,"]);
    }

    #[test]
    fn test_byte_lines_empty() {
        assert!(byte_lines(&[], 12).is_empty());
    }

    #[test]
    fn test_byte_lines_full_range() {
        let all: Vec<u8> = (0..=255).collect();
        let lines = byte_lines(&all, 12);
        assert_eq!(lines.len(), 22);
        assert!(lines[0].starts_with("0x00, 0x01,"));
        assert!(lines[21].ends_with("0xff,"));
    }

    #[test]
    fn test_round_trip() {
        for (i, len) in [0, 1, 11, 12, 13, 255, 4096, 10_007].into_iter().enumerate() {
            let bytes = noise(len, i as u64 + 1);
            for per_line in [1, 12, 16] {
                let lines = byte_lines(&bytes, per_line);
                assert_eq!(decode(&lines), bytes, "len={len} per_line={per_line}");
            }
        }
    }

    #[test]
    fn test_zero_per_line_is_clamped() {
        assert_eq!(byte_lines(&[1, 2], 0), ["0x01,", "0x02,"]);
    }
}
