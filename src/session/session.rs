/// Process-wide transcription session: accumulated transcript segments and
/// whether a transcription run is currently active.
///
/// One instance exists for the whole process, owned by the HTTP layer behind
/// a lock. Handlers take the lock once per transition, so each transition is
/// atomic, but no ordering between concurrent callers is promised.
#[derive(Debug, Default)]
pub struct TranscriptSession {
    segments: Vec<String>,
    transcribing: bool,
}

impl TranscriptSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the transcribing state. Entering from idle discards any
    /// previously accumulated segments; while already transcribing this is
    /// a no-op so that successive uploads accumulate.
    pub fn begin(&mut self) {
        if !self.transcribing {
            self.segments.clear();
            self.transcribing = true;
        }
    }

    /// Append one transcript segment. Empty segments are dropped.
    pub fn append(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.segments.push(text);
        }
    }

    /// Leave the transcribing state. Returns the joined transcript if any
    /// segments were accumulated, for handing to the notifier. Segments are
    /// kept so `joined` still answers queries after stop.
    pub fn finish(&mut self) -> Option<String> {
        self.transcribing = false;
        if self.segments.is_empty() {
            None
        } else {
            Some(self.joined())
        }
    }

    /// The accumulated transcript, segments joined by single spaces in
    /// insertion order. Empty string when nothing has been accumulated.
    pub fn joined(&self) -> String {
        self.segments.join(" ")
    }

    /// Discard accumulated segments. The transcribing flag is untouched.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn is_transcribing(&self) -> bool {
        self.transcribing
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
