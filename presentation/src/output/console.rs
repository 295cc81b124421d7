//! Console output formatter for chat transcripts

use colored::Colorize;
use tripchat_domain::{Message, Sender, Transcript};

/// Formats a transcript for console display
pub struct TranscriptFormatter;

impl TranscriptFormatter {
    /// Format the whole transcript, one block per message
    pub fn format(transcript: &Transcript) -> String {
        let mut output = String::new();

        for message in transcript.messages() {
            output.push_str(&Self::format_message(message));
            output.push('\n');
        }

        output
    }

    /// Format a single message block: sender label, then indented text
    pub fn format_message(message: &Message) -> String {
        let label = format!("{}:", message.sender().label());
        let label = match message.sender() {
            Sender::User => label.cyan().bold(),
            Sender::Bot => label.green().bold(),
        };

        let body = Self::indent(message.text(), "  ");
        let body = if message.is_pending() {
            body.dimmed().italic().to_string()
        } else if message.is_failure() {
            body.red().to_string()
        } else {
            body
        };

        format!("{}\n{}\n", label, body)
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripchat_domain::{ReplyOutcome, SubmissionId};

    #[test]
    fn test_format_pairs_in_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("Paris to Rome");
        let id = SubmissionId::new(1);
        transcript.push_placeholder(id);
        transcript
            .settle_placeholder(
                id,
                &ReplyOutcome::Itinerary("Day 1: Colosseum\nDay 2: Vatican".into()),
            )
            .unwrap();

        let output = TranscriptFormatter::format(&transcript);

        let you = output.find("You:").unwrap();
        let planner = output.find("Planner:").unwrap();
        assert!(you < planner);
        assert!(output.contains("  Paris to Rome"));
        assert!(output.contains("  Day 1: Colosseum"));
        assert!(output.contains("  Day 2: Vatican"));
    }

    #[test]
    fn test_empty_transcript_formats_to_nothing() {
        assert!(TranscriptFormatter::format(&Transcript::new()).is_empty());
    }

    #[test]
    fn test_indent_multiline() {
        assert_eq!(TranscriptFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
