//! LazyTask interactive console.
//!
//! # Responsibility
//! - Bootstrap logging and the frozen session clock.
//! - Hand stdin/stdout to the menu loop.

mod console;
mod prompt;
mod render;

use console::Console;
use lazytask_core::{init_logging, AppConfig, Clock, InMemoryTaskRepository, TaskService};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = AppConfig::default();
    // File logging is optional for the session; report and carry on.
    if let Err(err) = init_logging(&config.logging) {
        eprintln!("warning: logging disabled: {err}");
    }

    let service = TaskService::new(InMemoryTaskRepository::new(Clock::system()));
    let stdin = io::stdin();
    let mut console = Console::new(service, stdin.lock(), io::stdout());

    match console.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=session_end module=console status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
