use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront::{execute, html, App, Command, Config, Document, Outcome};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Optional: STOREFRONT_MOUNT_ID (default: app)");
            eprintln!("Optional: STOREFRONT_PRINT_HTML (default: true)");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting storefront");
    tracing::info!("Mount container: #{}", config.mount_id);

    // Host page with the container the shop mounts into
    let mut doc = Document::new();
    let container = doc.create_element("div");
    let body = doc.body();
    if let Err(e) = doc
        .set_attribute(container, "id", &config.mount_id)
        .and_then(|_| doc.append(body, container))
    {
        eprintln!("Document error: {}", e);
        std::process::exit(1);
    }

    let mut app = App::new();
    if let Err(e) = app.init(&mut doc, &config.mount_id) {
        eprintln!("Startup error: {}", e);
        std::process::exit(1);
    }

    print_page(&doc, config.print_html);
    println!("{}", storefront::command::HELP);

    // One command at a time; each finishes before the next is read.
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!("Failed to read input: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("{}", e);
                println!("{}", e);
                continue;
            }
        };

        match execute(&app, &mut doc, command) {
            Ok(Outcome::Changed) => print_page(&doc, config.print_html),
            Ok(Outcome::Output(text)) => println!("{}", text),
            Ok(Outcome::Quit) => break,
            Err(e) => {
                tracing::warn!("Command failed: {}", e);
                println!("{}", e);
            }
        }
        if let Err(e) = io::stdout().flush() {
            tracing::warn!("Failed to flush output: {}", e);
        }
    }

    tracing::info!("Storefront closed");
}

fn print_page(doc: &Document, enabled: bool) {
    if !enabled {
        return;
    }
    match html::to_html(doc, doc.body()) {
        Ok(page) => print!("{}", page),
        Err(e) => tracing::warn!("Failed to render page: {}", e),
    }
}
