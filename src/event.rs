use crossterm::event::{KeyEvent, MouseEvent};

/// Terminal input, as delivered to the main loop.
#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
    Tick,
}
