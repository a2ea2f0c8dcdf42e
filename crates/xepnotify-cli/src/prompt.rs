//! Line-based prompts on arbitrary reader/writer pairs

use std::io::{self, BufRead, Write};

/// Ask until the answer is one of the characters in `options`
///
/// Answers are case-insensitive. End of input yields `eof`.
pub fn choose<R: BufRead, W: Write>(
    prompt: &str,
    options: &str,
    eof: char,
    input: &mut R,
    output: &mut W,
) -> io::Result<char> {
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(eof);
        }

        let answer = line.trim().to_lowercase();
        let mut chars = answer.chars();
        if let (Some(choice), None) = (chars.next(), chars.next()) {
            if options.contains(choice) {
                return Ok(choice);
            }
        }
    }
}

/// Ask for a single line; `None` on end of input
pub fn ask<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_choose_reasks_on_invalid_answer() {
        let mut input = Cursor::new("maybe\n\nN\n");
        let mut output = Vec::new();
        let choice = choose("? ", "yna", 'a', &mut input, &mut output).unwrap();
        assert_eq!(choice, 'n');
        assert_eq!(String::from_utf8(output).unwrap(), "? ? ? ");
    }

    #[test]
    fn test_choose_eof_yields_default() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(
            choose("? ", "yna", 'a', &mut input, &mut output).unwrap(),
            'a'
        );
    }

    #[test]
    fn test_ask_trims_and_detects_eof() {
        let mut output = Vec::new();
        let mut input = Cursor::new("  smtp.example.org \n");
        assert_eq!(
            ask("host: ", &mut input, &mut output).unwrap().as_deref(),
            Some("smtp.example.org")
        );
        assert_eq!(ask("host: ", &mut input, &mut output).unwrap(), None);
    }
}
