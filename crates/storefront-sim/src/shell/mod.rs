//! # Shell
//!
//! The line-oriented front end of the `storefront` binary. Each input line is split with
//! POSIX shell quoting rules and parsed by clap into one [`Action`].

pub mod output;

pub use output::Output;

use crate::lifecycle::Action;
use crate::model::{Password, PaymentMethod, ProductId, UserCreate};
use clap::error::ErrorKind as ClapErrorKind;
use clap::{Parser, Subcommand};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ShellError {
    #[error("unbalanced quotes")]
    UnbalancedQuotes,

    #[error("{0}")]
    Usage(String),
}

/// One parsed input line.
#[derive(Debug)]
pub enum Input {
    Action(Action),
    Help(String),
    Quit,
}

#[derive(Parser, Debug)]
#[command(name = "storefront", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Show the products on display
    Catalog,
    /// Show only products whose title contains the query (case-insensitive)
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Show every product again
    Reset,
    /// Fetch the catalog (after a failed startup fetch)
    Load,
    /// Create an account
    Signup {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Log in with email and password
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    Logout,
    /// Add a product to the cart by id
    Add { product_id: ProductId },
    /// Show the cart
    Cart,
    /// Remove everything from the cart
    ClearCart,
    /// Choose how to pay: credit-card or paypal
    Pay { method: PaymentMethod },
    /// Review the order before placing it
    Checkout,
    /// Place the order under review
    Confirm,
    /// Go back from the order review
    Cancel,
    /// Leave the storefront
    #[command(alias = "exit")]
    Quit,
}

impl From<ShellCommand> for Input {
    fn from(command: ShellCommand) -> Self {
        let action = match command {
            ShellCommand::Catalog => Action::ViewCatalog,
            ShellCommand::Search { query } => Action::Search(query.join(" ")),
            ShellCommand::Reset => Action::ResetCatalog,
            ShellCommand::Load => Action::LoadCatalog,
            ShellCommand::Signup {
                email,
                password,
                name,
                phone,
            } => Action::Register(UserCreate {
                name,
                email,
                phone,
                password: Password::new(password),
            }),
            ShellCommand::Login { email, password } => Action::Login {
                email,
                password: Password::new(password),
            },
            ShellCommand::Logout => Action::Logout,
            ShellCommand::Add { product_id } => Action::AddToCart(product_id),
            ShellCommand::Cart => Action::ViewCart,
            ShellCommand::ClearCart => Action::ClearCart,
            ShellCommand::Pay { method } => Action::SelectPayment(method),
            ShellCommand::Checkout => Action::RequestConfirmation,
            ShellCommand::Confirm => Action::ConfirmOrder,
            ShellCommand::Cancel => Action::CancelOrder,
            ShellCommand::Quit => return Input::Quit,
        };
        Input::Action(action)
    }
}

/// Parses one line of input. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Input>, ShellError> {
    let words = shlex::split(line).ok_or(ShellError::UnbalancedQuotes)?;
    if words.is_empty() {
        return Ok(None);
    }
    match ShellLine::try_parse_from(words) {
        Ok(parsed) => Ok(Some(parsed.command.into())),
        Err(e) if e.kind() == ClapErrorKind::DisplayHelp => {
            Ok(Some(Input::Help(e.render().to_string())))
        }
        Err(e) => Err(ShellError::Usage(e.render().to_string())),
    }
}
