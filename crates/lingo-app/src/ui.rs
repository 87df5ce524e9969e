use std::io::{BufRead, Write};

use kanal::{AsyncReceiver, AsyncSender};
use lingo_types::{AppEvent, TranslationRecord};
use tokio_util::sync::CancellationToken;

const HELP: &str = "\
Type text to translate it. Commands:
  :lang <code>     select target language
  :langs           list languages
  :translate       translate the current input again
  :history         show recent translations
  :clear           clear input and result
  :clear-history   forget recent translations
  :copy            copy the result
  :speak           read the result aloud
  :quit            exit";

/// What one line of terminal input means
#[derive(Debug)]
pub enum Input {
    Events(Vec<AppEvent>),
    Help,
    Quit,
    Unknown(String),
    Empty,
}

pub fn parse_line(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Empty;
    }

    let Some(command) = trimmed.strip_prefix(':') else {
        return Input::Events(vec![AppEvent::TextInput(line.to_string()), AppEvent::Translate]);
    };

    let mut parts = command.split_whitespace();
    let event = match (parts.next(), parts.next()) {
        (Some("lang"), Some(code)) => AppEvent::SelectLanguage(code.to_string()),
        (Some("langs"), None) => AppEvent::ListLanguages,
        (Some("translate"), None) => AppEvent::Translate,
        (Some("history"), None) => AppEvent::ShowHistoryRequest,
        (Some("clear"), None) => AppEvent::ClearText,
        (Some("clear-history"), None) => AppEvent::ClearHistory,
        (Some("copy"), None) => AppEvent::Copy,
        (Some("speak"), None) => AppEvent::Speak,
        (Some("help"), None) => return Input::Help,
        (Some("quit" | "q"), None) => return Input::Quit,
        _ => return Input::Unknown(trimmed.to_string()),
    };

    Input::Events(vec![event])
}

/// Line-oriented presentation over stdin/stdout
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    let lines = spawn_stdin_reader();
    let mut input_closed = false;

    loop {
        tokio::select! {
            biased;

            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else {
                    tracing::debug!("app channel closed");
                    break;
                };
                let ready = matches!(event, AppEvent::BackendReady { .. });
                render(&event);
                if ready && interactive {
                    println!("{HELP}");
                }
                if interactive && !matches!(event, AppEvent::Loading(true)) {
                    prompt();
                }
            }
            line = lines.recv(), if !input_closed => {
                match line {
                    Ok(line) => match parse_line(&line) {
                        Input::Events(events) => {
                            for event in events {
                                ui_to_app_tx.send(event).await?;
                            }
                        }
                        Input::Help => println!("{HELP}"),
                        Input::Quit => {
                            ui_to_app_tx.send(AppEvent::Shutdown).await?;
                            input_closed = true;
                        }
                        Input::Unknown(command) => println!("Unknown command: {command} (try :help)"),
                        Input::Empty => {}
                    },
                    Err(_) => {
                        tracing::debug!("stdin closed");
                        ui_to_app_tx.send(AppEvent::Shutdown).await?;
                        input_closed = true;
                    }
                }
            }
            _ = cancel.cancelled() => break,
        }
    }

    Ok(())
}

/// Blocking reads live on their own thread so they never hold up runtime shutdown
fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (tx, rx) = kanal::unbounded::<String>();

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to read stdin: {e}");
                    break;
                }
            }
        }
    });

    rx.to_async()
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn render(event: &AppEvent) {
    match event {
        AppEvent::BackendReady { language, history } => {
            println!("Translating into {} ({})", language.name, language.code);
            if !history.is_empty() {
                render_history(history);
            }
        }
        AppEvent::Loading(true) => println!("Translating..."),
        AppEvent::Loading(false) => {}
        AppEvent::ShowTranslation {
            translated,
            language,
            ..
        } => println!("[{}] {translated}", language.name),
        AppEvent::ShowHistory(history) => render_history(history),
        AppEvent::ShowLanguages(languages) => {
            for language in languages {
                println!("  {:<4} {}", language.code, language.name);
            }
        }
        AppEvent::LanguageSelected(language) => {
            println!("Target language: {} ({})", language.name, language.code)
        }
        AppEvent::TextCleared => println!("Cleared"),
        AppEvent::ShowError { title, message } => println!("{title}: {message}"),
        AppEvent::Notice(message) => println!("{message}"),
        _ => {}
    }
}

fn render_history(history: &[TranslationRecord]) {
    if history.is_empty() {
        println!("No recent translations");
        return;
    }

    println!("Recent translations:");
    for record in history {
        println!(
            "  {} | {} -> {} ({})",
            record.timestamp.format("%Y-%m-%d %H:%M"),
            record.original,
            record.translated,
            record.language
        );
    }
}
