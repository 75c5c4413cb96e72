extern crate ansi_term;
extern crate linefeed;
use crate::menu::{Event, Runtime};
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

/// Interactive frontend with line editing. Ctrl-C and Ctrl-D both leave.
pub fn main_loop(runtime: &mut Runtime<'_>, interrupted: &AtomicBool) -> io::Result<()> {
    let interface = Interface::new("tour")?;
    interface.set_report_signal(Signal::Interrupt, true);

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.close();
        }
        match runtime.execute() {
            Event::Print(s) => {
                interface.write_fmt(format_args!("{}", s))?;
            }
            Event::Error(s) => {
                interface.write_fmt(format_args!("\n{}\n", Style::new().bold().paint(s)))?;
            }
            Event::Input(prompt) => {
                interface.set_prompt(prompt)?;
                match interface.read_line()? {
                    ReadResult::Input(line) => runtime.enter(&line),
                    ReadResult::Signal(_) | ReadResult::Eof => {
                        interface.write_fmt(format_args!("\n"))?;
                        runtime.close();
                    }
                }
            }
            Event::Running => {}
            Event::Stopped => break,
        }
    }
    Ok(())
}
