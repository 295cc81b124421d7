//! Chat value objects

use std::fmt;

/// Position of a message in its transcript (assigned on append)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u64);

impl MessageId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

/// Correlation token for one submission.
///
/// Issued when the user sends a message; the bot placeholder created for that
/// submission carries the same id, and the reply is applied by looking it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(u64);

impl SubmissionId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// The id issued after this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_id_next_is_distinct() {
        let first = SubmissionId::new(1);
        let second = first.next();
        assert_ne!(first, second);
        assert_eq!(second, SubmissionId::new(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(SubmissionId::new(3).to_string(), "#3");
        assert_eq!(MessageId::new(0).to_string(), "m0");
    }
}
