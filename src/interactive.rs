//! # Interactive Prompt
//!
//! Line-oriented front end used by `stego interactive`. The menu is a
//! two-level yes/no question: "encode?" and, on no, "decode?". Invalid
//! answers are re-asked a bounded number of times; end of input or running
//! out of attempts both resolve to [`MenuChoice::Exit`].
//!
//! Reader and writer are generic so sessions can be driven from tests with
//! in-memory buffers.

use log::{info, warn};
use std::io::{BufRead, Write};

use crate::common::config::StegoConfig;
use crate::common::error::Result;
use crate::processing::random::RandomSource;
use crate::processing::steganography::{hide, reveal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Encode,
    Decode,
    Exit,
}

/// Ask the two-level menu question.
pub fn read_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    max_attempts: usize,
) -> Result<MenuChoice> {
    let choice = match ask_yes_no(input, output, "Do you want to encode a message?", max_attempts)? {
        Some(true) => MenuChoice::Encode,
        Some(false) => {
            match ask_yes_no(input, output, "Do you want to decode a message?", max_attempts)? {
                Some(true) => MenuChoice::Decode,
                _ => MenuChoice::Exit,
            }
        }
        None => MenuChoice::Exit,
    };
    Ok(choice)
}

/// Read one non-empty line for `label`. `None` on end of input or when every
/// attempt was blank.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    max_attempts: usize,
) -> Result<Option<String>> {
    for _ in 0..max_attempts {
        write!(output, "{label}: ")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if !line.is_empty() {
            return Ok(Some(line));
        }
        writeln!(output, "{label} must not be empty.")?;
    }
    warn!("No value for {:?} after {} attempts", label, max_attempts);
    Ok(None)
}

/// Run menu rounds until the user exits. Operation failures are reported to
/// `output` and the menu is shown again.
pub fn run_session<R, W, G>(
    input: &mut R,
    output: &mut W,
    config: &StegoConfig,
    rng: &mut G,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: RandomSource + ?Sized,
{
    let attempts = config.prompt.max_attempts;
    loop {
        match read_choice(input, output, attempts)? {
            MenuChoice::Encode => {
                let Some(message) = prompt_line(input, output, "Message", attempts)? else {
                    break;
                };
                let Some(delimiter) = prompt_line(input, output, "Delimiter", attempts)? else {
                    break;
                };
                let Some(source) = prompt_line(input, output, "Cover image", attempts)? else {
                    break;
                };
                let Some(dest) = prompt_line(input, output, "Output name", attempts)? else {
                    break;
                };
                match hide(&message, &delimiter, &source, &dest, config, rng) {
                    Ok(path) => writeln!(output, "Message hidden in {}", path.display())?,
                    Err(e) => {
                        warn!("Encode failed: {}", e);
                        writeln!(output, "Error: {e}")?;
                    }
                }
            }
            MenuChoice::Decode => {
                let Some(source) = prompt_line(input, output, "Image", attempts)? else {
                    break;
                };
                let Some(delimiter) = prompt_line(input, output, "Delimiter", attempts)? else {
                    break;
                };
                match reveal(&source, &delimiter, config) {
                    Ok(message) => writeln!(output, "Hidden message: {message}")?,
                    Err(e) => {
                        warn!("Decode failed: {}", e);
                        writeln!(output, "Error: {e}")?;
                    }
                }
            }
            MenuChoice::Exit => break,
        }
    }
    info!("Interactive session finished");
    Ok(())
}

fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    max_attempts: usize,
) -> Result<Option<bool>> {
    for _ in 0..max_attempts {
        write!(output, "{question} (y/n): ")?;
        output.flush()?;
        let Some(answer) = read_line(input)? else {
            return Ok(None);
        };
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            _ => writeln!(output, "Please answer y or n.")?,
        }
    }
    warn!("Giving up on {:?} after {} invalid answers", question, max_attempts);
    Ok(None)
}

/// One line without its terminator, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging;
    use crate::processing::grid::PixelGrid;
    use crate::processing::random::FixedSource;
    use std::io::Cursor;

    fn choice(script: &str) -> MenuChoice {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        read_choice(&mut input, &mut output, 3).unwrap()
    }

    #[test]
    fn test_menu_choices() {
        assert_eq!(choice("y\n"), MenuChoice::Encode);
        assert_eq!(choice("n\nYes\n"), MenuChoice::Decode);
        assert_eq!(choice("no\nn\n"), MenuChoice::Exit);
        assert_eq!(choice(""), MenuChoice::Exit);
    }

    #[test]
    fn test_invalid_answers_are_bounded() {
        assert_eq!(choice("maybe\n?\ny\n"), MenuChoice::Encode);
        // three invalid answers exhaust the budget, the trailing "y" is never read
        assert_eq!(choice("a\nb\nc\ny\n"), MenuChoice::Exit);
    }

    #[test]
    fn test_prompt_line_skips_blank() {
        let mut input = Cursor::new(b"\n  hidden text \r\n".to_vec());
        let mut output = Vec::new();
        let line = prompt_line(&mut input, &mut output, "Message", 3).unwrap();
        assert_eq!(line.as_deref(), Some("  hidden text "));
        assert!(String::from_utf8(output).unwrap().contains("Message must not be empty."));
    }

    #[test]
    fn test_session_encode_then_decode() {
        let dir = tempfile::tempdir().unwrap();
        let cover = dir.path().join("cover.png");
        imaging::save_grid(&PixelGrid::filled(24, 8, 3, 90), &cover).unwrap();
        let dest = dir.path().join("secret");

        let script = format!(
            "y\nmeet at noon\n#!\n{}\n{}\nn\ny\n{}\n#!\nn\nn\n",
            cover.display(),
            dest.display(),
            dest.with_extension("png").display()
        );
        let mut input = Cursor::new(script.into_bytes());
        let mut output = Vec::new();
        run_session(&mut input, &mut output, &StegoConfig::default(), &mut FixedSource(1)).unwrap();

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Message hidden in"));
        assert!(transcript.contains("Hidden message: meet at noon"));
    }

    #[test]
    fn test_session_reports_errors() {
        let script = "n\ny\n/no/such/image.png\n#\nn\nn\n";
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_session(&mut input, &mut output, &StegoConfig::default(), &mut FixedSource(0)).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("Error:"));
    }
}
