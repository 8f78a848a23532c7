//! Command layer between the REPL and the address book.
//!
//! - **parser**: tokenizing input lines and naming commands
//! - **session**: the explicit per-session context handed to handlers
//! - **handlers**: one function per command plus error normalization

pub mod handlers;
pub mod parser;
pub mod session;

pub use handlers::respond;
pub use parser::{parse_input, Command, UnknownCommand};
pub use session::{Clock, FixedClock, Session, SystemClock};

use tracing::debug;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// What the REPL should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next line.
    Continue(String),
    /// Print the message and stop.
    Exit(String),
    /// Nothing to print (blank input).
    Silent,
}

/// Run one command against the session.
pub fn execute(command: Command, args: &[String], session: &mut Session) -> Reply {
    debug!(command = command.as_str(), args = args.len(), "Executing command");
    let outcome = match command {
        Command::Hello => return Reply::Continue(GREETING.to_string()),
        Command::Exit => return Reply::Exit(FAREWELL.to_string()),
        Command::Add => handlers::add_contact(args, session),
        Command::Change => handlers::change_contact(args, session),
        Command::Phone => handlers::show_phone(args, session),
        Command::All => handlers::show_all(args, session),
        Command::AddBirthday => handlers::add_birthday(args, session),
        Command::ShowBirthday => handlers::show_birthday(args, session),
        Command::Birthdays => handlers::birthdays(args, session),
    };
    Reply::Continue(respond(outcome))
}

/// Parse one input line and run it.
pub fn dispatch(line: &str, session: &mut Session) -> Reply {
    let Some((token, args)) = parse_input(line) else {
        return Reply::Silent;
    };
    match token.parse::<Command>() {
        Ok(command) => execute(command, &args, session),
        Err(UnknownCommand(token)) => {
            debug!(%token, "Unknown command");
            Reply::Continue(INVALID_COMMAND.to_string())
        }
    }
}
