//! Interactive conversion session: renders the two currency lists and keeps
//! the displayed rate in sync with the user's selection.

use std::io::BufRead;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::debug;

use crate::cli::ui::{self, ConsolePresenter, StyleType};
use crate::core::controller::{AppEvent, ConversionController};
use crate::core::rates::RateClient;

pub async fn run(client: Arc<dyn RateClient>, default_base: &str) -> Result<()> {
    println!(
        "{}",
        ui::style_text("fxc - exchange rate checker", StyleType::Title)
    );
    println!(
        "{}",
        ui::style_text(
            "Commands: b <n> pick base, t <n> pick target, r retry, q quit",
            StyleType::Subtle
        )
    );

    let (events, mut rx) = mpsc::unbounded_channel();
    let mut controller = ConversionController::new(
        client,
        ConsolePresenter::new(),
        default_base,
        events.clone(),
    );
    controller.start();
    spawn_input_reader(events);

    while let Some(event) = rx.recv().await {
        if event == AppEvent::Quit {
            debug!("Quit requested");
            break;
        }
        controller.handle(event);
    }

    Ok(())
}

/// Reads stdin on a dedicated thread and forwards parsed events onto the
/// controller's channel. EOF counts as quit.
fn spawn_input_reader(events: mpsc::UnboundedSender<AppEvent>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            match parse_input(&line) {
                Some(event) => {
                    let quit = event == AppEvent::Quit;
                    if events.send(event).is_err() || quit {
                        return;
                    }
                }
                None => {
                    println!(
                        "{}",
                        ui::style_text("Unknown command, try: b <n>, t <n>, r, q", StyleType::Subtle)
                    );
                }
            }
        }
        let _ = events.send(AppEvent::Quit);
    });
}

/// Parses one input line. Selection indices are 1-based as displayed.
fn parse_input(line: &str) -> Option<AppEvent> {
    let mut parts = line.split_whitespace();
    let event = match parts.next()? {
        "b" | "base" => AppEvent::BaseSelected(parse_index(parts.next()?)?),
        "t" | "target" => AppEvent::TargetSelected(parse_index(parts.next()?)?),
        "r" | "retry" => AppEvent::BootstrapRetry,
        "q" | "quit" | "exit" => AppEvent::Quit,
        _ => return None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(event)
}

fn parse_index(token: &str) -> Option<usize> {
    token
        .parse::<usize>()
        .ok()
        .filter(|n| *n >= 1)
        .map(|n| n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_commands() {
        assert_eq!(parse_input("b 1"), Some(AppEvent::BaseSelected(0)));
        assert_eq!(parse_input("base 12"), Some(AppEvent::BaseSelected(11)));
        assert_eq!(parse_input("t 3"), Some(AppEvent::TargetSelected(2)));
        assert_eq!(parse_input("  target 1 "), Some(AppEvent::TargetSelected(0)));
    }

    #[test]
    fn test_parse_retry_and_quit() {
        assert_eq!(parse_input("r"), Some(AppEvent::BootstrapRetry));
        assert_eq!(parse_input("retry"), Some(AppEvent::BootstrapRetry));
        assert_eq!(parse_input("q"), Some(AppEvent::Quit));
        assert_eq!(parse_input("quit"), Some(AppEvent::Quit));
        assert_eq!(parse_input("exit"), Some(AppEvent::Quit));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("convert"), None);
        assert_eq!(parse_input("b"), None);
        assert_eq!(parse_input("b zero"), None);
        // Displayed indices start at 1
        assert_eq!(parse_input("b 0"), None);
        assert_eq!(parse_input("b 1 2"), None);
        assert_eq!(parse_input("q now"), None);
    }
}
