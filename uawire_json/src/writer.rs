use std::fmt::Display;
use std::io::Write;

use crate::error::{EncodingError, EncodingResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Top,
    Object,
    Array,
}

#[derive(Debug)]
struct Frame {
    container: Container,
    entries: usize,
    name_pending: bool,
}

impl Frame {
    const fn new(container: Container) -> Self {
        Self {
            container,
            entries: 0,
            name_pending: false,
        }
    }
}

/// A streaming JSON token writer.
///
/// Tracks a stack of container contexts and inserts commas and colons
/// automatically. A name is only legal immediately inside an object; a
/// value inside an object is only legal after a name. Misuse surfaces as
/// [`EncodingError::InvalidState`] before anything reaches the sink.
pub struct JsonWriter<'a> {
    out: &'a mut dyn Write,
    stack: Vec<Frame>,
    written: usize,
    max_size: usize,
}

impl<'a> JsonWriter<'a> {
    /// Binds the writer to a sink. `max_size` caps the document size in
    /// bytes; zero disables the cap.
    pub fn new(out: &'a mut dyn Write, max_size: usize) -> Self {
        Self {
            out,
            stack: vec![Frame::new(Container::Top)],
            written: 0,
            max_size,
        }
    }

    /// Bytes written so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Writes a field name inside the currently open object.
    pub fn name(&mut self, key: &str) -> EncodingResult<()> {
        let separate = {
            let frame = self.top()?;
            if frame.container != Container::Object {
                return Err(EncodingError::InvalidState("name outside of an object"));
            }
            if frame.name_pending {
                return Err(EncodingError::InvalidState("name written twice in a row"));
            }
            frame.name_pending = true;
            frame.entries > 0
        };
        if separate {
            self.write_bytes(b",")?;
        }
        self.write_escaped(key)?;
        self.write_bytes(b":")
    }

    pub fn begin_object(&mut self) -> EncodingResult<()> {
        self.before_value()?;
        self.stack.push(Frame::new(Container::Object));
        self.write_bytes(b"{")
    }

    pub fn end_object(&mut self) -> EncodingResult<()> {
        {
            let frame = self.top()?;
            if frame.container != Container::Object {
                return Err(EncodingError::InvalidState("end of object without a begin"));
            }
            if frame.name_pending {
                return Err(EncodingError::InvalidState("dangling name inside an object"));
            }
        }
        self.stack.pop();
        self.write_bytes(b"}")
    }

    pub fn begin_array(&mut self) -> EncodingResult<()> {
        self.before_value()?;
        self.stack.push(Frame::new(Container::Array));
        self.write_bytes(b"[")
    }

    pub fn end_array(&mut self) -> EncodingResult<()> {
        {
            let frame = self.top()?;
            if frame.container != Container::Array {
                return Err(EncodingError::InvalidState("end of array without a begin"));
            }
        }
        self.stack.pop();
        self.write_bytes(b"]")
    }

    pub fn null_value(&mut self) -> EncodingResult<()> {
        self.before_value()?;
        self.write_bytes(b"null")
    }

    pub fn bool_value(&mut self, value: bool) -> EncodingResult<()> {
        self.before_value()?;
        self.write_bytes(if value { b"true" } else { b"false" })
    }

    /// Writes a decimal JSON number from any integer-like value.
    pub fn number_value<T: Display>(&mut self, value: T) -> EncodingResult<()> {
        self.before_value()?;
        let literal = value.to_string();
        self.write_bytes(literal.as_bytes())
    }

    pub fn string_value(&mut self, value: &str) -> EncodingResult<()> {
        self.before_value()?;
        self.write_escaped(value)
    }

    /// Writes a pre-rendered JSON fragment verbatim. The caller vouches for
    /// its well-formedness.
    pub fn raw_value(&mut self, raw: &str) -> EncodingResult<()> {
        self.before_value()?;
        self.write_bytes(raw.as_bytes())
    }

    /// Verifies all containers are closed and flushes the sink.
    pub fn finish(&mut self) -> EncodingResult<()> {
        if self.stack.len() != 1 {
            return Err(EncodingError::InvalidState(
                "unclosed containers at end of document",
            ));
        }
        self.out.flush()?;
        Ok(())
    }

    fn top(&mut self) -> EncodingResult<&mut Frame> {
        self.stack
            .last_mut()
            .ok_or(EncodingError::InvalidState("writer has no open context"))
    }

    fn before_value(&mut self) -> EncodingResult<()> {
        let separate = {
            let frame = self.top()?;
            match frame.container {
                Container::Object => {
                    if !frame.name_pending {
                        return Err(EncodingError::InvalidState(
                            "value without a preceding name inside an object",
                        ));
                    }
                    frame.name_pending = false;
                    frame.entries += 1;
                    false
                }
                Container::Array => {
                    frame.entries += 1;
                    frame.entries > 1
                }
                Container::Top => {
                    if frame.entries > 0 {
                        return Err(EncodingError::InvalidState("multiple top-level values"));
                    }
                    frame.entries += 1;
                    false
                }
            }
        };
        if separate {
            self.write_bytes(b",")?;
        }
        Ok(())
    }

    fn write_escaped(&mut self, value: &str) -> EncodingResult<()> {
        let mut escaped = String::with_capacity(value.len() + 2);
        escaped.push('"');
        for c in value.chars() {
            match c {
                '"' => escaped.push_str("\\\""),
                '\\' => escaped.push_str("\\\\"),
                '\u{08}' => escaped.push_str("\\b"),
                '\u{0C}' => escaped.push_str("\\f"),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                c if (c as u32) < 0x20 => {
                    escaped.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => escaped.push(c),
            }
        }
        escaped.push('"');
        self.write_bytes(escaped.as_bytes())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> EncodingResult<()> {
        self.written += bytes.len();
        if self.max_size != 0 && self.written > self.max_size {
            return Err(EncodingError::LimitExceeded("message size"));
        }
        self.out.write_all(bytes)?;
        Ok(())
    }
}
