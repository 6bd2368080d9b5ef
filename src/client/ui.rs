//! Plain-text rendering for the terminal client.

use std::io::{self, Write};

use crate::models::Question;
use crate::protocol::SubmitResponse;

pub fn render_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Quiz Questions:")
}

pub fn render_question<W: Write>(out: &mut W, question: &Question) -> io::Result<()> {
    writeln!(out, "{}. {}", question.id, question.text)?;
    for (idx, option) in question.options.iter().enumerate() {
        writeln!(out, "  {}: {}", idx + 1, option)?;
    }
    Ok(())
}

pub fn render_prompt<W: Write>(out: &mut W, question: &Question) -> io::Result<()> {
    write!(out, "Enter your answer (1-{}): ", question.option_count())?;
    out.flush()
}

pub fn render_invalid<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Invalid input. Please try again.")
}

pub fn render_result<W: Write>(out: &mut W, result: &SubmitResponse) -> io::Result<()> {
    writeln!(
        out,
        "You got {} out of {} questions correct!",
        result.correct, result.total
    )?;
    writeln!(
        out,
        "You were better than {}% of all quizzers.",
        result.comparison
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_question() {
        let question = Question::new(2, "What is 2 + 2?", &["3", "4"], 1);
        let mut out = Vec::new();
        render_question(&mut out, &question).unwrap();
        render_prompt(&mut out, &question).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2. What is 2 + 2?\n  1: 3\n  2: 4\nEnter your answer (1-2): "
        );
    }

    #[test]
    fn test_render_result() {
        let result = SubmitResponse {
            correct: 4,
            total: 5,
            comparison: "70.00".to_string(),
        };
        let mut out = Vec::new();
        render_result(&mut out, &result).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "You got 4 out of 5 questions correct!\nYou were better than 70.00% of all quizzers.\n"
        );
    }
}
