use crate::pixel::pixel_words;
use std::fmt::Write;

const PROLOGUE: &str = "long wm_icon[] = {";
const EPILOGUE: &str = "\n\t0, 0\n};\n\n";

/// Rendered icon array with the number of numeric entries it holds.
#[derive(Debug)]
pub struct Header {
    pub text: String,
    pub entries: usize,
}

pub struct HeaderWriter {
    text: String,
    entries: usize,
}

impl Default for HeaderWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderWriter {
    pub fn new() -> Self {
        Self {
            text: PROLOGUE.to_string(),
            entries: 0,
        }
    }

    /// Appends a `size, size,` pair followed by the swapped pixel words.
    pub fn push_image(&mut self, size: u32, raw: &[u8]) {
        // Writing into a String cannot fail.
        let _ = write!(self.text, "\n\t{size}, {size},\n");
        self.entries += 2;

        for word in pixel_words(raw) {
            let _ = write!(self.text, "{word:#x},");
            self.entries += 1;
        }
    }

    pub fn finish(mut self) -> Header {
        self.text.push_str(EPILOGUE);

        Header {
            text: self.text,
            entries: self.entries + 2,
        }
    }
}
