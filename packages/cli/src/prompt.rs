//! The three-question input flow.
//!
//! Collects a symbol count, the symbols themselves and the category
//! selector over any reader/writer pair, so the flow is testable without a
//! terminal. Malformed input is a driver error; the engine is only invoked
//! once a well-formed session exists.

use std::io::{BufRead, Write};

use phonofeat_algo::Category;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("expected a count between 1 and {max}, got {input:?}")]
    InvalidCount { input: String, max: usize },
    #[error("expected a symbol number, got {input:?}")]
    InvalidSymbol { input: String },
    #[error("invalid input: enter 0 for consonant or 1 for vowel")]
    InvalidCategory,
    #[error("input ended before all questions were answered")]
    UnexpectedEof,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One fully collected comparison request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub category: Category,
    pub symbols: Vec<u8>,
}

pub fn run<R, W>(input: &mut R, output: &mut W, max_symbols: usize) -> Result<Session, PromptError>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "How many consonants/vowels?")?;
    output.flush()?;
    let answer = read_line(input)?;
    let count = answer
        .parse::<usize>()
        .ok()
        .filter(|&n| n >= 1 && n <= max_symbols)
        .ok_or(PromptError::InvalidCount {
            input: answer,
            max: max_symbols,
        })?;

    let mut symbols = Vec::with_capacity(count);
    for slot in 1..=count {
        writeln!(output, "Enter symbol #{slot}.")?;
        output.flush()?;
        let answer = read_line(input)?;
        // Range validity is the engine's concern; only the shape of the
        // number is checked here.
        let symbol = answer
            .parse::<u8>()
            .map_err(|_| PromptError::InvalidSymbol { input: answer })?;
        symbols.push(symbol);
    }

    writeln!(output, "Vowel or consonant? Enter 0 if consonant, 1 if vowel.")?;
    output.flush()?;
    let category = match read_line(input)?.as_str() {
        "0" => Category::Consonant,
        "1" => Category::Vowel,
        _ => return Err(PromptError::InvalidCategory),
    };

    Ok(Session { category, symbols })
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String, PromptError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::UnexpectedEof);
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(input: &str, max_symbols: usize) -> (Result<Session, PromptError>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut written = Vec::new();
        let result = run(&mut reader, &mut written, max_symbols);
        (result, String::from_utf8(written).unwrap())
    }

    #[test]
    fn test_consonant_session() {
        let (result, transcript) = run_with("2\n1\n4\n0\n", 7);
        let session = result.unwrap();
        assert_eq!(session.category, Category::Consonant);
        assert_eq!(session.symbols, vec![1, 4]);
        assert!(transcript.contains("How many consonants/vowels?"));
        assert!(transcript.contains("Enter symbol #2."));
        assert!(transcript.contains("Enter 0 if consonant, 1 if vowel."));
    }

    #[test]
    fn test_vowel_session_with_whitespace() {
        let (result, _) = run_with(" 1 \n 13 \n 1 \n", 7);
        let session = result.unwrap();
        assert_eq!(session.category, Category::Vowel);
        assert_eq!(session.symbols, vec![13]);
    }

    #[test]
    fn test_count_out_of_bounds() {
        let (result, _) = run_with("0\n", 7);
        assert!(matches!(result, Err(PromptError::InvalidCount { .. })));

        let (result, _) = run_with("8\n", 7);
        assert!(matches!(result, Err(PromptError::InvalidCount { .. })));
    }

    #[test]
    fn test_count_respects_configured_limit() {
        let (result, _) = run_with("3\n1\n2\n3\n0\n", 3);
        assert!(result.is_ok());

        let (result, _) = run_with("4\n", 3);
        assert!(matches!(result, Err(PromptError::InvalidCount { .. })));
    }

    #[test]
    fn test_non_numeric_symbol() {
        let (result, _) = run_with("1\np\n0\n", 7);
        assert!(matches!(result, Err(PromptError::InvalidSymbol { .. })));
    }

    #[test]
    fn test_out_of_range_symbol_is_accepted_here() {
        // 30 is no consonant, but deciding that is the engine's job.
        let (result, _) = run_with("2\n1\n30\n0\n", 7);
        assert_eq!(result.unwrap().symbols, vec![1, 30]);
    }

    #[test]
    fn test_invalid_category_selector() {
        let (result, _) = run_with("1\n1\n2\n", 7);
        assert!(matches!(result, Err(PromptError::InvalidCategory)));
    }

    #[test]
    fn test_truncated_input() {
        let (result, _) = run_with("2\n1\n", 7);
        assert!(matches!(result, Err(PromptError::UnexpectedEof)));
    }
}
