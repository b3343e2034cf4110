#![cfg(all(feature = "alloc", feature = "log"))]

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use growvec::{alloc::LoggingAlloc, vec::LoggingVector, Global, Vector};

struct CaptureLog(Mutex<Vec<(Level, String)>>);

impl Log for CaptureLog {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if record.target().starts_with("growvec") {
            self.0
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLog = CaptureLog(Mutex::new(Vec::new()));

#[test]
fn logging_provider_traces_blocks() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let mut v = Vector::<u32, _>::new_in(LoggingAlloc(Global));
    v.push(1);
    v.push(2);
    drop(v);

    let mut w = LoggingVector::<u64>::new();
    w.reserve(3);
    drop(w);

    let records = CAPTURE.0.lock().unwrap().clone();
    let messages: Vec<&str> = records
        .iter()
        .map(|(_, msg)| msg.split(" at ").next().unwrap())
        .collect();
    assert_eq!(
        messages,
        [
            "acquire 4 bytes (align 4)",
            "acquire 8 bytes (align 4)",
            "release 4 bytes (align 4)",
            "release 8 bytes (align 4)",
            "acquire 24 bytes (align 8)",
            "release 24 bytes (align 8)",
        ]
    );
    assert!(records.iter().all(|(level, _)| *level == Level::Debug));
}
