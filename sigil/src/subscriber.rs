use serde_derive::{Deserialize, Serialize};
use sigil_fol::trace::*;
use std::{
    fmt,
    io::Write,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
};
use tracing::*;

/// Thread safe json logger that writes one record per library event, one record per line.
pub struct JsonLogger<W: Write> {
    log_file: Mutex<W>,
    next_span: AtomicU64,
}

impl<W: Write> JsonLogger<W> {
    pub fn new(log_file: W) -> Self {
        Self {
            log_file: Mutex::new(log_file),
            next_span: AtomicU64::new(1),
        }
    }
}

impl<W: Write + Send + 'static> subscriber::Subscriber for JsonLogger<W> {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn new_span(&self, _span: &span::Attributes) -> Id {
        Id::from_u64(self.next_span.fetch_add(1, Ordering::Relaxed))
    }

    fn record(&self, _span: &Id, _values: &span::Record) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event) {
        let mut recorder = Recorder::default();
        event.record(&mut recorder);

        if let Some(record) = EventRecord::try_from(recorder) {
            let json = serde_json::to_string(&record);
            if let (Ok(json), Ok(mut file)) = (json, self.log_file.lock()) {
                let _ = writeln!(file, "{}", json);
            }
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

/// A record of a placeholder minted or reused by a skeleton traversal, or of a substitution
/// that was refused to avoid capturing a variable.
#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct EventRecord {
    event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    variable: Option<String>,
}

impl EventRecord {
    fn try_from(value: Recorder) -> Option<Self> {
        let event = value.event?;
        if ![MINT, REUSE, CAPTURE].contains(&event.as_str()) {
            return None;
        }
        Some(EventRecord {
            event,
            placeholder: value.placeholder,
            formula: value.formula,
            term: value.term,
            variable: value.variable,
        })
    }
}

/// Generic trace visitor to collect as many fields as it can.
#[derive(Default)]
struct Recorder {
    event: Option<String>,
    placeholder: Option<String>,
    formula: Option<String>,
    term: Option<String>,
    variable: Option<String>,
}

impl field::Visit for Recorder {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        if field.name() == EVENT_FIELD {
            self.event = Some(value.to_owned())
        }
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        let value = Some(format!("{:?}", value));
        match field.name() {
            PLACEHOLDER_FIELD => self.placeholder = value,
            FORMULA_FIELD => self.formula = value,
            TERM_FIELD => self.term = value,
            VARIABLE_FIELD => self.variable = value,
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigil_fol::{
        syntax::Formula,
        transform::{Substitute, Substitution, ToSkeleton},
    };
    use std::{io, sync::Arc};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn records(&self) -> Vec<EventRecord> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(|l| serde_json::from_str(l).unwrap())
                .collect()
        }
    }

    #[test]
    fn test_log_skeleton() {
        let buffer = Buffer::default();
        let logger = JsonLogger::new(buffer.clone());
        let formula: Formula = "(R(x)&R(x))".parse().unwrap();
        tracing::subscriber::with_default(logger, || formula.propositional_skeleton());

        assert_eq!(
            vec![
                EventRecord {
                    event: MINT.into(),
                    placeholder: Some("z1".into()),
                    formula: Some("R(x)".into()),
                    term: None,
                    variable: None,
                },
                EventRecord {
                    event: REUSE.into(),
                    placeholder: Some("z1".into()),
                    formula: Some("R(x)".into()),
                    term: None,
                    variable: None,
                },
            ],
            buffer.records()
        );
    }

    #[test]
    fn test_log_capture() {
        let buffer = Buffer::default();
        let logger = JsonLogger::new(buffer.clone());
        let formula: Formula = "Ay[x=c]".parse().unwrap();
        let sub = Substitution::parse_pairs(&["c=plus(d,y)"]).unwrap();
        let result = tracing::subscriber::with_default(logger, || formula.substitute_free(&sub));

        assert!(result.is_err());
        assert_eq!(
            vec![EventRecord {
                event: CAPTURE.into(),
                placeholder: None,
                formula: None,
                term: Some("plus(d,y)".into()),
                variable: Some("y".into()),
            }],
            buffer.records()
        );
    }
}
