//! Report table rendering
//!
//! Each row is rendered into a fixed buffer and pushed to stdout with a single write-all so rows
//! land whole even if something else shares the terminal.

use crate::constants::{COL_WIDTH, ROW_SIZE};
use crate::err::*;
use crate::os::{STDOUT, println};
use crate::util::BufWriter;

pub fn header() {
    println("Benchmarking creation and joining of threads vs processes:");
    println("");
}

/// Render one table row: label, padding, elapsed seconds, worker count, noun
///
/// `Processes       | 0.182051 seconds for 1000 processes`
pub fn render_row<'a>(
    buf: &'a mut [u8],
    label: &str,
    elapsed_secs: f64,
    count: usize,
    noun: &str,
) -> Result<&'a [u8], Errno> {
    let mut w = BufWriter::new(buf);

    w.push(label.as_bytes())?;
    w.push_repeated(b' ', COL_WIDTH.saturating_sub(label.len()))?;
    w.push(b"| ")?;
    w.push(ryu::Buffer::new().format(elapsed_secs).as_bytes())?;
    w.push(b" seconds for ")?;
    w.push(itoa::Buffer::new().format(count).as_bytes())?;
    w.push(b" ")?;
    w.push(noun.as_bytes())?;
    w.push(b"\n")?;

    Ok(w.into_slice())
}

pub fn row(label: &str, elapsed_secs: f64, count: usize, noun: &str) {
    let mut buf = [0u8; ROW_SIZE];
    let rendered = render_row(&mut buf, label, elapsed_secs, count, noun)
        .or_abort("Unable to render report row");

    STDOUT
        .write_all(rendered)
        .or_abort("Unable to write report row");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_row_pads_label_column() {
        let mut buf = [0u8; ROW_SIZE];
        let rendered = render_row(&mut buf, "Processes", 0.25, 1000, "processes").unwrap();
        assert_eq!(
            rendered,
            b"Processes       | 0.25 seconds for 1000 processes\n"
        );
    }

    #[test]
    fn test_render_row_full_width_label() {
        let mut buf = [0u8; ROW_SIZE];
        let rendered = render_row(&mut buf, "Child Processes", 1.5, 3, "child processes").unwrap();
        assert_eq!(
            rendered,
            b"Child Processes | 1.5 seconds for 3 child processes\n"
        );
    }

    #[test]
    fn test_render_row_oversized_label_does_not_panic() {
        let mut buf = [0u8; ROW_SIZE];
        let rendered =
            render_row(&mut buf, "A label wider than the column", 0.1, 1, "workers").unwrap();
        assert!(rendered.starts_with(b"A label wider than the column| "));
    }

    #[test]
    fn test_render_row_rejects_tiny_buffer() {
        let mut buf = [0u8; 8];
        assert_eq!(
            render_row(&mut buf, "Threads", 0.1, 1000, "threads"),
            Err(Errno::EOVERFLOW)
        );
    }
}
