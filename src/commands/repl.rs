//! Read-Eval-Print Loop
//!
//! Reads commands line by line, dispatches them, and prints their output.

use std::future::Future;
use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::commands::{execute, Command, Flow, Session};
use crate::error::Result;
use crate::pokeapi::PokeApiClient;

/// Prompt printed before each line is read
pub const PROMPT: &str = "Pokedex > ";

/// Splits a line into lower-cased words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Runs the loop until `exit` or end of input.
///
/// Errors from individual commands are printed and the loop carries on;
/// only failures to read input or write output end it early.
pub async fn run<R, W>(input: R, out: &mut W, client: &PokeApiClient) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    run_until(input, out, client, std::future::pending()).await
}

/// Runs the loop until `exit`, end of input, or `interrupt` completes.
///
/// An interrupt abandons the pending prompt and ends the line.
pub async fn run_until<R, W, F>(
    input: R,
    out: &mut W,
    client: &PokeApiClient,
    interrupt: F,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    F: Future<Output = ()>,
{
    let interrupted = tokio::select! {
        outcome = read_eval_print(input, &mut *out, client) => {
            outcome?;
            false
        }
        _ = interrupt => true,
    };

    if interrupted {
        debug!("REPL interrupted");
        writeln!(out)?;
    }
    Ok(())
}

async fn read_eval_print<R, W>(mut input: R, out: &mut W, client: &PokeApiClient) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = Session::default();
    let mut buf = Vec::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            debug!("End of input");
            break;
        }

        // Undecodable bytes become U+FFFD and fall through to "Unknown command"
        let line = String::from_utf8_lossy(&buf);
        let words = clean_input(&line);
        let Some((name, args)) = words.split_first() else {
            continue;
        };

        let Some(command) = Command::from_name(name) else {
            writeln!(out, "Unknown command")?;
            continue;
        };

        match execute(command, args, &mut session, client, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => {
                debug!(command = command.name(), error = %e, "Command failed");
                writeln!(out, "{}", e)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Cache;
    use std::sync::Arc;
    use std::time::Duration;

    fn offline_client(cache: Arc<Cache>) -> PokeApiClient {
        PokeApiClient::new("http://127.0.0.1:9", Duration::from_millis(200), cache).unwrap()
    }

    #[test]
    fn test_clean_input() {
        assert_eq!(clean_input("  hello  world  "), vec!["hello", "world"]);
        assert_eq!(
            clean_input("Charmander Bulbasaur PIKACHU"),
            vec!["charmander", "bulbasaur", "pikachu"]
        );
        assert!(clean_input("").is_empty());
        assert!(clean_input(" \t ").is_empty());
    }

    #[tokio::test]
    async fn test_run_until_exit() {
        let cache = Arc::new(Cache::new(Duration::from_secs(5)));
        let client = offline_client(cache.clone());

        let input = tokio_test::io::Builder::new()
            .read(b"\n")
            .read(b"pokeball\n")
            .read(b"  EXIT  \n")
            .build();
        let mut out = Vec::new();

        run(tokio::io::BufReader::new(input), &mut out, &client)
            .await
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(
            output,
            "Pokedex > Pokedex > Unknown command\nPokedex > Closing the Pokedex... Goodbye!\n"
        );

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_run_stops_at_end_of_input() {
        let cache = Arc::new(Cache::new(Duration::from_secs(5)));
        let client = offline_client(cache.clone());
        let mut out = Vec::new();

        run(&b"mapb\n"[..], &mut out, &client).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(
            output,
            "Pokedex > Must use 'map' command at least once before 'mapb'\nPokedex > "
        );

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_run_prints_command_errors_and_continues() {
        let cache = Arc::new(Cache::new(Duration::from_secs(5)));
        let client = offline_client(cache.clone());
        let mut out = Vec::new();

        run(&b"explore\nhelp\n"[..], &mut out, &client).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Usage: explore <location-area>\n"));
        assert!(output.contains("Welcome to the Pokedex!"));

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_run_survives_invalid_utf8() {
        let cache = Arc::new(Cache::new(Duration::from_secs(5)));
        let client = offline_client(cache.clone());
        let mut out = Vec::new();

        run(&b"\xff\xfe\r\nexit\n"[..], &mut out, &client)
            .await
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(
            output,
            "Pokedex > Unknown command\nPokedex > Closing the Pokedex... Goodbye!\n"
        );

        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_run_until_interrupted_while_waiting_for_input() {
        let cache = Arc::new(Cache::new(Duration::from_secs(5)));
        let client = offline_client(cache.clone());
        // Keep the writer alive so reads block instead of hitting end of input
        let (_stdin_writer, stdin_reader) = tokio::io::duplex(64);
        let mut out = Vec::new();

        let finished = tokio::time::timeout(
            Duration::from_secs(2),
            run_until(
                tokio::io::BufReader::new(stdin_reader),
                &mut out,
                &client,
                tokio::time::sleep(Duration::from_millis(50)),
            ),
        )
        .await;

        assert!(finished.is_ok(), "Interrupt should end the loop");
        finished.unwrap().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Pokedex > \n");

        cache.shutdown().await;
    }
}
