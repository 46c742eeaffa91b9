use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use super::category::Category;
use super::engine::{AnswerSet, QUESTION_COUNT};

/// Parse one selection as typed on the command line.
///
/// "0", "-" and "_" mean unanswered; "1".."3" pick an option; a category
/// code (S/T/M) is accepted as a shorthand for its option.
pub fn parse_selection(raw: &str) -> Result<u8> {
    let raw = raw.trim();
    match raw {
        "" | "-" | "_" => return Ok(0),
        _ => {}
    }
    if let Ok(index) = raw.parse::<u8>() {
        return Ok(index);
    }
    raw.parse::<Category>()
        .map(Category::selection_index)
        .map_err(|e| anyhow::anyhow!("invalid selection '{}': {}", raw, e))
}

/// Parse selections from arguments. Each argument may itself be a comma
/// separated list, so `2,2,1` and `2 2 1` are equivalent.
pub fn parse_selections(args: &[String]) -> Result<Vec<Option<u8>>> {
    args.iter()
        .flat_map(|arg| arg.split(','))
        .enumerate()
        .map(|(i, raw)| {
            parse_selection(raw)
                .map(Some)
                .with_context(|| format!("Question Q{}", i + 1))
        })
        .collect()
}

fn option_menu() -> String {
    let mut options: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{}={}", c.selection_index(), c.short_name()))
        .collect();
    options.sort();
    format!("0=skip, {}", options.join(", "))
}

/// Ask for each question on stdout and read answers from `input`.
///
/// Invalid entries are re-asked; end of input leaves the remaining
/// questions unanswered.
pub fn prompt_answers<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<AnswerSet> {
    let menu = option_menu();
    let mut answers = AnswerSet::empty();

    let mut question = 1;
    while question <= QUESTION_COUNT {
        write!(output, "Q{} ({}): ", question, menu).context("Failed to write prompt")?;
        output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            break;
        }

        match parse_selection(&line) {
            Ok(0) => question += 1,
            Ok(index) => match Category::from_selection(index) {
                Some(category) => {
                    answers.set(question, Some(category));
                    question += 1;
                }
                None => {
                    writeln!(output, "  Please pick 0-3.").context("Failed to write prompt")?;
                }
            },
            Err(e) => {
                writeln!(output, "  {}", e).context("Failed to write prompt")?;
            }
        }
    }

    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_selection_forms() {
        assert_eq!(parse_selection("0").unwrap(), 0);
        assert_eq!(parse_selection("-").unwrap(), 0);
        assert_eq!(parse_selection(" 3 ").unwrap(), 3);
        assert_eq!(parse_selection("m").unwrap(), 1);
        assert_eq!(parse_selection("S").unwrap(), 2);
        assert_eq!(parse_selection("T").unwrap(), 3);
        assert!(parse_selection("banana").is_err());
    }

    #[test]
    fn test_parse_selection_passes_out_of_range_through() {
        // Range checking happens when building the AnswerSet
        assert_eq!(parse_selection("7").unwrap(), 7);
    }

    #[test]
    fn test_parse_selections_comma_and_spaces() {
        let args = vec!["2,2".to_string(), "1".to_string(), "-".to_string()];
        let parsed = parse_selections(&args).unwrap();
        assert_eq!(parsed, vec![Some(2), Some(2), Some(1), Some(0)]);
    }

    #[test]
    fn test_parse_selections_reports_question() {
        let args = vec!["1,x".to_string()];
        let err = parse_selections(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("Q2"));
    }

    #[test]
    fn test_prompt_answers_reads_each_question() {
        let mut input = Cursor::new("2\n2\n1\n0\n0\n0\n0\n0\n3\n");
        let mut output = Vec::new();
        let answers = prompt_answers(&mut input, &mut output).unwrap();
        assert_eq!(answers.selections(), vec![2, 2, 1, 0, 0, 0, 0, 0, 3]);
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Q9"));
    }

    #[test]
    fn test_prompt_answers_reasks_invalid() {
        let mut input = Cursor::new("9\nnope\n3\n");
        let mut output = Vec::new();
        let answers = prompt_answers(&mut input, &mut output).unwrap();
        assert_eq!(answers.get(1), Some(Category::Technology));
        assert_eq!(answers.answered_count(), 1);
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Please pick 0-3."));
    }

    #[test]
    fn test_prompt_answers_eof_leaves_rest_unanswered() {
        let mut input = Cursor::new("1\n");
        let mut output = Vec::new();
        let answers = prompt_answers(&mut input, &mut output).unwrap();
        assert_eq!(answers.answered_count(), 1);
        assert_eq!(answers.unanswered_questions().len(), 8);
    }
}
