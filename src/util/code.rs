use super::{Code, Position};
use once_cell::unsync::OnceCell;

impl<'c> Code<'c> {
    pub fn new(source: &'c [u8]) -> Self {
        Self {
            source,
            line_starts: OnceCell::new(),
        }
    }

    // Byte offsets at which each line begins; the first line starts at 0.
    fn obtain_line_starts(&self) -> &[usize] {
        self.line_starts.get_or_init(|| {
            let mut starts = vec![0];
            starts.extend(
                self.source
                    .iter()
                    .enumerate()
                    .filter(|(_, byte)| **byte == b'\n')
                    .map(|(index, _)| index + 1),
            );
            starts
        })
    }

    /// The line and column a byte offset falls on, both counted from 1.
    /// Columns are byte columns, matching the atom offsets the scanners
    /// report.
    pub fn obtain_position(&self, pointer: usize) -> Position {
        let starts = self.obtain_line_starts();
        let line = starts.partition_point(|start| *start <= pointer);
        Position::new(line, pointer - starts[line - 1] + 1)
    }

    /// The original text covered by an atom range of the input. The soft
    /// and extra-soft codecs emit one atom per byte, so atom offsets slice
    /// the source directly.
    pub fn slice(&self, from: usize, to: usize) -> String {
        String::from_utf8_lossy(&self.source[from..to]).into_owned()
    }
}

impl<'c> From<&'c [u8]> for Code<'c> {
    fn from(source: &'c [u8]) -> Self {
        Code::new(source)
    }
}

impl<'c> From<&'c str> for Code<'c> {
    fn from(source: &'c str) -> Self {
        Code::new(source.as_bytes())
    }
}
