//! Terminal demo client for the lapstore search service.
//!
//! Replays a string as keystrokes through the autocomplete controller against
//! a running server, rendering the dropdown as suggestions arrive, then
//! commits the query as a full search.

use std::time::Duration;

use tokio::sync::mpsc;

use lapstore_ui::client::HttpSearchClient;
use lapstore_ui::controller::{run, AutocompleteModel, Event, Key, Nav};
use lapstore_ui::highlight::{highlight_matches, Span};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut server =
        std::env::var("SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:3900".to_string());
    let mut text = "dlel xps".to_string();
    let mut delay_ms: u64 = 120;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--server" => {
                server = args[i + 1].clone();
                i += 2;
            }
            "--type" => {
                text = args[i + 1].clone();
                i += 2;
            }
            "--delay-ms" => {
                delay_ms = args[i + 1].parse()?;
                i += 2;
            }
            "--help" => {
                eprintln!(
                    "Usage: {} [--server <url>] [--type <text>] [--delay-ms <n>]",
                    args[0]
                );
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("Typing {:?} against {}", text, server);

    let search_client = HttpSearchClient::new(&server);
    let (tx, rx) = mpsc::unbounded_channel();

    let typist = async move {
        let mut typed = String::new();
        for ch in text.chars() {
            typed.push(ch);
            if tx.send(Event::Edited(typed.clone())).is_err() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        // Let the debounce fire and the dropdown settle before committing.
        tokio::time::sleep(Duration::from_millis(900)).await;
        let _ = tx.send(Event::Pressed(Key::Enter));
        // Dropping the sender ends the controller if nothing was committed.
    };

    let (nav, ()) = tokio::join!(run(search_client.clone(), rx, render_dropdown), typist);

    match nav {
        Some(Nav::Product { slug }) => {
            println!("-> /laptops/{}", slug);
        }
        Some(Nav::SearchResults { query }) => {
            println!("-> /search?q={}", urlencoding::encode(&query));
            match search_client.search(&query).await {
                Ok(results) => {
                    println!("{} result(s) for {:?}:", results.len(), query);
                    for hit in results {
                        println!(
                            "  {} {} ({}) /laptops/{}",
                            hit.brand_name, hit.name, hit.price, hit.slug
                        );
                    }
                }
                Err(err) => {
                    eprintln!("Search failed: {:#}", err);
                    std::process::exit(1);
                }
            }
        }
        None => {}
    }

    Ok(())
}

fn render_dropdown(model: &AutocompleteModel) {
    if !model.is_open() {
        return;
    }
    println!("Suggestions for {:?}:", model.query());
    for (index, suggestion) in model.suggestions().iter().enumerate() {
        let marker = if model.selected() == Some(index) { ">" } else { " " };
        println!(
            " {} {} | {} ({}) score={:.3}",
            marker,
            render_spans(&highlight_matches(&suggestion.name, model.query())),
            suggestion.brand_name,
            suggestion.price,
            suggestion.score
        );
    }
}

fn render_spans(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| {
            if span.highlighted {
                format!("\x1b[1;33m{}\x1b[0m", span.text)
            } else {
                span.text.clone()
            }
        })
        .collect()
}
