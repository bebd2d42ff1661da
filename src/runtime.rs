/// Interactive terminal loop
///
/// A reader thread turns stdin lines into channel messages; the main thread
/// waits on either input or the controller's next timer deadline, maps wall
/// time onto the controller's logical clock and repaints.

use crossbeam_channel::{after, never, select, unbounded, Receiver};
use std::io::{self, BufRead};
use std::thread;
use std::time::{Duration, Instant};

use crate::assistant::{DashboardAction, DashboardController, ModeStore};
use crate::error::AppResult;
use crate::messaging::Event;
use crate::view::Surface;
use crate::wizard::{WizardAction, WizardFlow};

/// Key that ends the session
pub const QUIT_KEY: char = 'q';

/// A controller the runtime can drive from the keyboard
pub trait Interactive {
    type Action: Copy + std::fmt::Debug;

    /// Action bound to `key` in the views currently shown
    fn action_for_key(&self, key: char) -> Option<Self::Action>;

    /// Apply an action, returning false if it was ignored
    fn perform(&mut self, action: Self::Action) -> bool;

    fn next_deadline(&self) -> Option<Duration>;

    fn advance_to(&mut self, until: Duration);

    fn repaint(&mut self) -> io::Result<()>;
}

impl<S: Surface<WizardAction>> Interactive for WizardFlow<S> {
    type Action = WizardAction;

    fn action_for_key(&self, key: char) -> Option<WizardAction> {
        self.surface().action_for_key(key).copied()
    }

    fn perform(&mut self, action: WizardAction) -> bool {
        self.dispatch(action)
    }

    fn next_deadline(&self) -> Option<Duration> {
        WizardFlow::next_deadline(self)
    }

    fn advance_to(&mut self, until: Duration) {
        WizardFlow::advance_to(self, until)
    }

    fn repaint(&mut self) -> io::Result<()> {
        self.surface_mut().present()
    }
}

impl<S, M> Interactive for DashboardController<S, M>
where
    S: Surface<DashboardAction>,
    M: ModeStore,
{
    type Action = DashboardAction;

    fn action_for_key(&self, key: char) -> Option<DashboardAction> {
        self.surface().action_for_key(key).copied()
    }

    fn perform(&mut self, action: DashboardAction) -> bool {
        self.dispatch(action)
    }

    fn next_deadline(&self) -> Option<Duration> {
        DashboardController::next_deadline(self)
    }

    fn advance_to(&mut self, until: Duration) {
        DashboardController::advance_to(self, until)
    }

    fn repaint(&mut self) -> io::Result<()> {
        self.surface_mut().present()
    }
}

/// Outcome of one line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Handled,
    Ignored,
    Quit,
}

/// Apply one line of keyboard input to `app`
pub fn handle_line<A: Interactive>(app: &mut A, line: &str) -> InputOutcome {
    let Some(key) = line.trim().chars().next() else {
        return InputOutcome::Ignored;
    };
    if key.eq_ignore_ascii_case(&QUIT_KEY) {
        return InputOutcome::Quit;
    }

    match app.action_for_key(key) {
        Some(action) => {
            tracing::debug!("Key {:?} -> {:?}", key, action);
            if app.perform(action) {
                InputOutcome::Handled
            } else {
                InputOutcome::Ignored
            }
        }
        None => {
            tracing::debug!("No action bound to {:?}", key);
            InputOutcome::Ignored
        }
    }
}

/// Bring `app` up to `now`, then apply one line of input
///
/// Timers the input schedules count from `now`, not from the last wakeup.
pub fn on_input<A: Interactive>(app: &mut A, line: &str, now: Duration) -> InputOutcome {
    app.advance_to(now);
    handle_line(app, line)
}

/// Run `app` until the user quits or stdin closes
pub fn run<A: Interactive>(app: &mut A, events: &Receiver<Event>) -> AppResult<()> {
    let start = Instant::now();
    let input = spawn_input_reader();

    app.repaint()?;
    loop {
        let timer = match app.next_deadline() {
            Some(deadline) => after(deadline.saturating_sub(start.elapsed())),
            None => never(),
        };

        select! {
            recv(input) -> line => match line {
                Ok(line) => {
                    if on_input(app, &line, start.elapsed()) == InputOutcome::Quit {
                        tracing::info!("Quit requested");
                        break;
                    }
                }
                Err(_) => {
                    tracing::info!("Input closed");
                    break;
                }
            },
            recv(timer) -> _ => app.advance_to(start.elapsed()),
        }

        for event in events.try_iter() {
            tracing::info!("{}", event.description());
        }
        app.repaint()?;
    }

    Ok(())
}

fn spawn_input_reader() -> Receiver<String> {
    let (tx, rx) = unbounded();

    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    rx
}
