use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;

/// One terminal line: `[HH:MM:SS.cc] MESSAGE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub stamp: String,
    pub message: Cow<'static, str>,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.stamp, self.message)
    }
}

/// Wall-clock stamp in 24h time with centiseconds.
#[must_use]
pub fn stamp() -> String {
    let now = chrono::Local::now();
    let centis = (now.timestamp_subsec_millis() / 10).min(99);
    format!("{}.{centis:02}", now.format("%H:%M:%S"))
}

/// Rolling buffer that drops the oldest line once `capacity` is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogBuffer {
    lines: VecDeque<LogLine>,
    capacity: usize,
}

impl LogBuffer {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { lines: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn push(&mut self, message: impl Into<Cow<'static, str>>) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(LogLine { stamp: stamp(), message: message.into() });
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogLine> {
        self.lines.iter()
    }

    /// Messages without stamps, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.message.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_line_is_dropped_at_capacity() {
        let mut logs = LogBuffer::new(2);
        logs.push("A");
        logs.push("B");
        logs.push("C");
        assert_eq!(logs.messages().collect::<Vec<_>>(), ["B", "C"]);
    }

    #[test]
    fn rendered_line_has_bracketed_stamp() {
        let mut logs = LogBuffer::new(4);
        logs.push("UPLINK ESTABLISHED.");
        let rendered = logs.iter().next().map(ToString::to_string).unwrap_or_default();

        // [HH:MM:SS.cc] = 13 chars
        assert_eq!(rendered.len(), 13 + 1 + "UPLINK ESTABLISHED.".len());
        assert!(rendered.starts_with('['));
        assert_eq!(&rendered[3..4], ":");
        assert_eq!(&rendered[9..10], ".");
        assert!(rendered.ends_with("] UPLINK ESTABLISHED."));
    }
}
