//! Routes `tracing` events to the browser console. Each formatted event is
//! buffered and flushed as one console call whose method follows the event
//! level, so devtools filtering by severity keeps working.

use std::io;
use tracing::{Level, Metadata, level_filters::LevelFilter};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Installs the global subscriber. Safe to call more than once; later calls
/// only report that a subscriber already exists.
pub fn init(level: LevelFilter) {
    let result = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_writer(ConsoleMakeWriter)
        .try_init();

    if let Err(err) = result {
        console::warn_1(&JsValue::from_str(&format!(
            "tracing subscriber already installed: {err}"
        )));
    }
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let message = String::from_utf8_lossy(&self.buffer);
        let message = message.trim_end();
        if message.is_empty() {
            return;
        }

        let value = JsValue::from_str(message);
        if self.level == Level::ERROR {
            console::error_1(&value);
        } else if self.level == Level::WARN {
            console::warn_1(&value);
        } else if self.level == Level::INFO {
            console::info_1(&value);
        } else {
            console::debug_1(&value);
        }
    }
}
