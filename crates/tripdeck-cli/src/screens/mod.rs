//! Page containers. Each screen owns its fetch lifecycle and local UI
//! state (focus, selection, active tab) and composes the stateless
//! widgets in `presentation::components`. Nothing here performs I/O
//! directly; requests go through the `Fetcher` and come back as
//! messages.

mod details;
mod form;
mod list;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use uuid::Uuid;

use crate::app::{FetchMessage, Fetcher};

pub use details::{DetailsScreen, DetailsTab};
pub use form::{FormField, FormScreen};
pub use list::ListScreen;

/// Navigation request bubbled up to the app loop. Mirrors the service's
/// client-side routes plus quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    ToForm,
    ToList,
    ToDetails(Uuid),
    Quit,
}

pub enum Screen {
    Form(FormScreen),
    List(ListScreen),
    Details(DetailsScreen),
}

impl Screen {
    pub fn form() -> Self {
        Screen::Form(FormScreen::new())
    }

    pub fn list(fetcher: &Fetcher) -> Self {
        Screen::List(ListScreen::new(fetcher))
    }

    pub fn details(fetcher: &Fetcher, id: Uuid) -> Self {
        Screen::Details(DetailsScreen::new(fetcher, id))
    }

    pub fn handle_key(&mut self, key: KeyEvent, fetcher: &Fetcher) -> Option<Nav> {
        match self {
            Screen::Form(screen) => screen.handle_key(key, fetcher),
            Screen::List(screen) => screen.handle_key(key),
            Screen::Details(screen) => screen.handle_key(key),
        }
    }

    pub fn on_message(&mut self, msg: FetchMessage) -> Option<Nav> {
        match self {
            Screen::Form(screen) => screen.on_message(msg),
            Screen::List(screen) => screen.on_message(msg),
            Screen::Details(screen) => screen.on_message(msg),
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        match self {
            Screen::Form(screen) => screen.render(f),
            Screen::List(screen) => screen.render(f),
            Screen::Details(screen) => screen.render(f),
        }
    }
}
