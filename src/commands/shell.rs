use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, Instrument};

use super::{execute, Command, Session, ShellCommand};
use crate::ui::error_page::render_error_page;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unterminated quote in input")]
pub struct UnterminatedQuote;

/// Splits a line into words. Single and double quotes group words;
/// backslash escapes the next character outside single quotes.
pub fn split_words(line: &str) -> Result<Vec<String>, UnterminatedQuote> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') | (None, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
                in_word = true;
            }
            (Some(_), c) => current.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(UnterminatedQuote);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Reads commands from stdin until `exit` or end of input. Errors are shown
/// with the error page and the session keeps going.
pub async fn run_shell(session: &mut Session) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    info!("Shell started");

    loop {
        stdout.write_all(format!("pizza.shop {}> ", session.location).as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let words = match split_words(&line) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let command = match ShellCommand::try_parse_from(words) {
            Ok(ShellCommand { command: Command::Exit }) => break,
            Ok(parsed) => parsed.command,
            Err(e) => {
                println!("{}", e.render());
                continue;
            }
        };

        let span = tracing::info_span!("command", line = %line);
        match execute(command, session).instrument(span).await {
            Ok(output) if output.is_empty() => {}
            Ok(output) => println!("{}", output),
            Err(e) => {
                error!(error = %e, "Command failed");
                println!("{}", render_error_page(&format!("{:#}", e)));
            }
        }
    }

    info!("Shell finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_with_quotes() {
        let words = split_words(r#"orders list --customer-name "Ana Maria" --order-id 'a b'"#).unwrap();
        assert_eq!(words, ["orders", "list", "--customer-name", "Ana Maria", "--order-id", "a b"]);
    }

    #[test]
    fn test_split_words_escapes_and_empty_quotes() {
        assert_eq!(split_words(r#"go /orders\?page=1 """#).unwrap(), ["go", "/orders?page=1", ""]);
        assert!(split_words("   ").unwrap().is_empty());
    }

    #[test]
    fn test_unterminated_quote() {
        assert_eq!(split_words("sign-in --email \"a@b.com"), Err(UnterminatedQuote));
    }
}
