use super::{render, topic, Choice, Error, Topic, EXIT, TOPICS};
use crate::topics::Page;
use log::{debug, info};

/// What the frontend must do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Print(String),
    Error(String),
    Input(&'static str),
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Welcome,
    Menu,
    Choice,
    Pause,
    Closing,
    Stopped,
}

enum Action<'a> {
    Exit,
    Run(&'a Topic),
}

/// The dispatcher. Frontends call `execute` until it asks for input,
/// then hand a line to `enter` (or report end of input with `close`).
pub struct Runtime<'a> {
    topics: &'a [Topic],
    state: State,
    entered: Option<String>,
}

impl Default for Runtime<'static> {
    fn default() -> Self {
        Runtime::new(TOPICS)
    }
}

impl<'a> Runtime<'a> {
    pub fn new(topics: &'a [Topic]) -> Runtime<'a> {
        debug_assert!(topic::is_well_formed(topics));
        Runtime {
            topics,
            state: State::Welcome,
            entered: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state != State::Stopped
    }

    pub fn enter(&mut self, line: &str) {
        if self.is_running() {
            self.entered = Some(line.to_string());
        }
    }

    /// End of input. Leaves without the farewell banner.
    pub fn close(&mut self) {
        if self.is_running() && self.state != State::Closing {
            debug!("input closed in state {:?}", self.state);
            self.entered = None;
            self.state = State::Closing;
        }
    }

    pub fn execute(&mut self) -> Event {
        match self.state {
            State::Welcome => {
                info!("tour started with {} topics", self.topics.len());
                self.state = State::Menu;
                Event::Print(render::welcome())
            }
            State::Menu => {
                self.state = State::Choice;
                Event::Print(render::menu(self.topics))
            }
            State::Choice => match self.entered.take() {
                None => Event::Input(render::PROMPT),
                Some(line) if line.trim().is_empty() => Event::Input(render::PROMPT),
                Some(line) => self.dispatch(&line),
            },
            State::Pause => match self.entered.take() {
                None => Event::Input(render::CONTINUE),
                Some(_) => {
                    self.state = State::Menu;
                    Event::Running
                }
            },
            State::Closing => {
                info!("tour stopped at end of input");
                self.state = State::Stopped;
                Event::Print(render::input_closed())
            }
            State::Stopped => Event::Stopped,
        }
    }

    fn dispatch(&mut self, line: &str) -> Event {
        match self.action(line) {
            Ok(Action::Exit) => {
                info!("tour stopped by request");
                self.state = State::Stopped;
                Event::Print(render::goodbye())
            }
            Ok(Action::Run(topic)) => {
                debug!("running topic {} ({})", topic.id, topic.name);
                let mut page = Page::default();
                (topic.run)(&mut page);
                self.state = State::Pause;
                Event::Print(format!("\n{}\n{}\n", page, render::divider()))
            }
            Err(error) => {
                self.state = State::Menu;
                Event::Error(error.to_string())
            }
        }
    }

    fn action(&self, line: &str) -> Result<Action<'a>, Error> {
        let max = topic::max_id(self.topics);
        match Choice::parse(line) {
            Choice::Invalid => Err(Error::ParseFailure { max }),
            Choice::Valid(EXIT) => Ok(Action::Exit),
            Choice::Valid(choice) => match topic::find(self.topics, choice) {
                Some(topic) => Ok(Action::Run(topic)),
                None => Err(Error::UnknownChoice { max }),
            },
        }
    }
}
