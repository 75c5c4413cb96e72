extern crate ctrlc;
use crate::menu::{render, Runtime};
use log::{info, warn};
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod editor;
pub mod stdio;

pub fn main() {
    let mut runtime = Runtime::default();
    let result = if io::stdin().is_terminal() && io::stdout().is_terminal() {
        let interrupted = Arc::new(AtomicBool::new(false));
        let int_moved = interrupted.clone();
        install(move || {
            int_moved.store(true, Ordering::SeqCst);
        });
        editor::main_loop(&mut runtime, &interrupted)
    } else {
        // A blocked read never returns to the loop, so leave from the handler.
        install(leave);
        let stdin = io::stdin();
        stdio::run(&mut runtime, &mut stdin.lock(), &mut io::stdout())
    };
    if let Err(error) = result {
        eprintln!("{}", error);
    }
}

fn install<F: FnMut() + Send + 'static>(handler: F) {
    if let Err(error) = ctrlc::set_handler(handler) {
        warn!("Ctrl-C handler not installed: {}", error);
    }
}

/// Ends the process the same way closed input does.
fn leave() {
    info!("tour interrupted");
    let mut stdout = io::stdout();
    if write!(stdout, "\n{}", render::input_closed()).and_then(|_| stdout.flush()).is_err() {
        std::process::exit(1);
    }
    std::process::exit(0);
}
