use super::segment::TextSegment;

/// Accumulates the segments of one parse call.
///
/// Holds the server and project that bare titles resolve against. Not reused
/// across calls.
#[derive(Debug)]
pub struct ScanContext {
    server: String,
    project: String,
    segments: Vec<TextSegment>,
}

impl ScanContext {
    pub fn new(server: &str, project: &str) -> Self {
        Self {
            server: server.to_string(),
            project: project.to_string(),
            segments: Vec::new(),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn push(&mut self, segment: TextSegment) {
        self.segments.push(segment);
    }

    /// Number of segments emitted so far; a checkpoint for [`Self::rewind`].
    pub fn mark(&self) -> usize {
        self.segments.len()
    }

    /// Drops every segment emitted after `mark`.
    pub fn rewind(&mut self, mark: usize) {
        self.segments.truncate(mark);
    }

    pub fn into_segments(self) -> Vec<TextSegment> {
        self.segments
    }
}
