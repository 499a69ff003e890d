use std::str::FromStr;

use storefront_dom::{html, Document, NodeId};
use thiserror::Error;

use crate::app::App;
use crate::error::AppError;

/// A line typed by the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Press "Add to Cart" on the n-th product, counting from 1.
    Add(usize),
    /// Press "Order Now!".
    Order,
    Total,
    Html,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: add <n>")]
    BadPosition,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let command = match name.to_ascii_lowercase().as_str() {
            "add" => {
                let position = words
                    .next()
                    .and_then(|n| n.parse().ok())
                    .ok_or(CommandError::BadPosition)?;
                Command::Add(position)
            }
            "order" => Command::Order,
            "total" => Command::Total,
            "html" => Command::Html,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        if words.next().is_some() {
            return Err(CommandError::Unknown(line.trim().to_string()));
        }
        Ok(command)
    }
}

pub const HELP: &str = "\
Commands:
  add <n>   add the n-th product to the cart
  order     place the order
  total     show the cart total
  html      print the page
  help      show this message
  quit      leave the shop";

/// What the host should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Page state changed.
    Changed,
    /// Text to show the shopper.
    Output(String),
    Quit,
}

/// Run one command against the mounted shop, through the page's buttons.
pub fn execute(app: &App, doc: &mut Document, command: Command) -> Result<Outcome, AppError> {
    match command {
        Command::Add(position) => {
            app.shop()?;
            let items = doc.elements_by_class("product-item");
            let item = position
                .checked_sub(1)
                .and_then(|i| items.get(i).copied())
                .ok_or(AppError::NoSuchProduct(position))?;
            let button = find_button(doc, item)?;
            doc.click(button)?;
            Ok(Outcome::Changed)
        }
        Command::Order => {
            app.shop()?;
            let section = doc
                .elements_by_class("cart")
                .first()
                .copied()
                .ok_or(AppError::MissingSection("cart"))?;
            let button = find_button(doc, section)?;
            doc.click(button)?;
            Ok(Outcome::Output(format!(
                "Ordered {} item(s), total {}",
                app.cart()?.len(),
                app.cart()?.total()
            )))
        }
        Command::Total => {
            let shown = app.cart()?.displayed_total(doc)?;
            Ok(Outcome::Output(shown.unwrap_or_default()))
        }
        Command::Html => Ok(Outcome::Output(html::to_html(doc, doc.body())?)),
        Command::Help => Ok(Outcome::Output(HELP.to_string())),
        Command::Quit => Ok(Outcome::Quit),
    }
}

fn find_button(doc: &Document, root: NodeId) -> Result<NodeId, AppError> {
    let button = doc.query_tag(root, "button")?;
    button.ok_or(AppError::MissingButton(root))
}
