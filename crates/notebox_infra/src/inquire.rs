use std::io::{BufRead, Write};

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use notebox_app::UserInfra;

/// Reads user answers from the terminal.
///
/// When stdin is attached to a terminal the prompts are rendered with
/// dialoguer. Otherwise (piped input, scripts) questions are written to
/// stdout and answers are read line by line from stdin, so the program can
/// be driven like any line-oriented tool.
pub struct NoteboxInquire {
    interactive: bool,
}

impl Default for NoteboxInquire {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteboxInquire {
    pub fn new() -> Self {
        Self { interactive: atty::is(atty::Stream::Stdin) }
    }

    async fn prompt<T, F>(&self, f: F) -> Result<Option<T>>
    where
        F: FnOnce() -> Result<Option<T>> + Send + 'static,
        T: Send + 'static,
    {
        tokio::task::spawn_blocking(f).await?
    }
}

#[allow(irrefutable_let_patterns)]
fn cancelled(error: &dialoguer::Error) -> bool {
    if let dialoguer::Error::IO(e) = error {
        matches!(
            e.kind(),
            std::io::ErrorKind::UnexpectedEof | std::io::ErrorKind::Interrupted
        )
    } else {
        false
    }
}

fn terminal_input(question: &str) -> Result<Option<String>> {
    let question = question.trim_end().trim_end_matches(':');
    match Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(question)
        .allow_empty(true)
        .interact_text()
    {
        Ok(answer) => Ok(Some(answer)),
        Err(e) if cancelled(&e) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn terminal_select(message: &str, labels: &[String]) -> Result<Option<usize>> {
    match Select::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .items(labels)
        .default(0)
        .interact_opt()
    {
        Ok(choice) => Ok(choice),
        Err(e) if cancelled(&e) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Writes `question` without a newline and reads one line. `None` at end of
/// input.
fn line_input(question: &str) -> Result<Option<String>> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{question}")?;
    stdout.flush()?;
    drop(stdout);

    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(Some(trimmed.to_string()))
}

fn line_select(message: &str, labels: &[String]) -> Result<Option<usize>> {
    println!("\n{message}");
    for (i, label) in labels.iter().enumerate() {
        println!("{}. {label}", i + 1);
    }

    loop {
        let Some(answer) = line_input("Choose an option: ")? else {
            return Ok(None);
        };
        match answer.trim().parse::<usize>() {
            Ok(n) if (1..=labels.len()).contains(&n) => return Ok(Some(n - 1)),
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

#[async_trait::async_trait]
impl UserInfra for NoteboxInquire {
    async fn prompt_question(&self, question: &str) -> Result<Option<String>> {
        let question = question.to_string();
        if self.interactive {
            self.prompt(move || terminal_input(&question)).await
        } else {
            self.prompt(move || line_input(&question)).await
        }
    }

    async fn select_one<T: std::fmt::Display + Send + 'static>(
        &self,
        message: &str,
        options: Vec<T>,
    ) -> Result<Option<T>> {
        if options.is_empty() {
            return Ok(None);
        }

        let message = message.to_string();
        let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
        let interactive = self.interactive;
        let choice = self
            .prompt(move || {
                if interactive {
                    terminal_select(&message, &labels)
                } else {
                    line_select(&message, &labels)
                }
            })
            .await?;

        Ok(choice.and_then(|index| options.into_iter().nth(index)))
    }
}
