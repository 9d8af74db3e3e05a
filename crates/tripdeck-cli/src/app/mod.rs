mod fetch;
mod remote;

use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::runtime::Handle;
use uuid::Uuid;

use tripdeck_client::TripClient;

pub use fetch::{FetchMessage, Fetcher};
pub use remote::Remote;

use crate::screens::{Nav, Screen};

/// Starting screen, mirroring the service's navigation surface:
/// the form, the trip list, or one trip's details.
#[derive(Debug, Clone, Copy)]
pub enum Route {
    Plan,
    Trips,
    Show(Uuid),
}

pub struct App {
    fetcher: Fetcher,
    rx: Receiver<FetchMessage>,
    screen: Screen,
}

/// Main entry point for the interactive app.
pub fn run(client: TripClient, rt: Handle, route: Route) -> Result<()> {
    let app = App::new(client, rt, route);
    app.run()
}

impl App {
    pub fn new(client: TripClient, rt: Handle, route: Route) -> Self {
        let (tx, rx) = mpsc::channel();
        let fetcher = Fetcher::new(rt, client, tx);

        let screen = match route {
            Route::Plan => Screen::form(),
            Route::Trips => Screen::list(&fetcher),
            Route::Show(id) => Screen::details(&fetcher, id),
        };

        Self {
            fetcher,
            rx,
            screen,
        }
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let tick_rate = Duration::from_millis(250);
        let mut last_tick = Instant::now();
        let mut should_quit = false;

        while !should_quit {
            terminal.draw(|f| self.screen.render(f))?;

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(nav) = self.screen.handle_key(key, &self.fetcher) {
                        should_quit = self.navigate(nav);
                    }
                }
            }

            while let Ok(msg) = self.rx.try_recv() {
                if let Some(nav) = self.screen.on_message(msg) {
                    should_quit = self.navigate(nav);
                }
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Swap the mounted screen. Returns true when the app should quit.
    /// A new mount issues fresh fetches; results addressed to the old
    /// mount are dropped by the incoming screen's message handling.
    fn navigate(&mut self, nav: Nav) -> bool {
        match nav {
            Nav::Quit => return true,
            Nav::ToForm => self.screen = Screen::form(),
            Nav::ToList => self.screen = Screen::list(&self.fetcher),
            Nav::ToDetails(id) => self.screen = Screen::details(&self.fetcher, id),
        }
        false
    }
}
