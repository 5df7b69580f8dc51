//! Character-by-character output of assistant replies.

use std::io::{self, Write};
use std::time::Duration;

/// Write `text` one character at a time, pausing `delay` after each, then a
/// newline. A zero delay writes without pausing.
pub async fn typewrite<W: Write>(out: &mut W, text: &str, delay: Duration) -> io::Result<()> {
    for ch in text.chars() {
        write!(out, "{ch}")?;
        out.flush()?;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_writes_full_text_and_newline() {
        let mut out = Vec::new();
        typewrite(&mut out, "Héllo, wörld", Duration::ZERO).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Héllo, wörld\n");
    }

    #[tokio::test]
    async fn test_delay_is_per_character() {
        let mut out = Vec::new();
        let start = std::time::Instant::now();
        typewrite(&mut out, "abcd", Duration::from_millis(5)).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
