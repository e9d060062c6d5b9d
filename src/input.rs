use crate::*;

/// Navigation keys a host forwards from its keydown events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    PageUp,
    PageDown,
    End,
    Home,
    Left,
    Up,
    Right,
    Down,
    Delete,
}

impl Key {
    /// Hosts should suppress the browser's own handling of these
    /// (page scrolling) once forwarded.
    pub fn consumes_default(&self) -> bool {
        !matches!(self, Self::Delete)
    }
}

/// DOM keyCode values
impl TryFrom<u32> for Key {
    type Error = anyhow::Error;
    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            33 => Ok(Self::PageUp),
            34 => Ok(Self::PageDown),
            35 => Ok(Self::End),
            36 => Ok(Self::Home),
            37 => Ok(Self::Left),
            38 => Ok(Self::Up),
            39 => Ok(Self::Right),
            40 => Ok(Self::Down),
            46 => Ok(Self::Delete),
            _ => Err(anyhow::anyhow!("unbound key code {}", code)),
        }
    }
}

/// What an input event asks the tree to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance(Stride),
    Retreat(Stride),
    Select(isize),
    Cut,
}

impl From<Key> for Command {
    fn from(key: Key) -> Self {
        match key {
            Key::PageUp => Self::Retreat(Stride::By(PAGE_STRIDE)),
            Key::PageDown => Self::Advance(Stride::By(PAGE_STRIDE)),
            Key::End => Self::Advance(Stride::Full),
            Key::Home => Self::Retreat(Stride::Full),
            Key::Left => Self::Retreat(Stride::By(1)),
            Key::Up => Self::Select(-1),
            Key::Right => Self::Advance(Stride::By(1)),
            Key::Down => Self::Select(1),
            Key::Delete => Self::Cut,
        }
    }
}

impl Command {
    /// a wheel notch: down moves forward, up moves back
    pub fn wheel(delta: f64) -> Option<Self> {
        if delta > 0. {
            Some(Self::Advance(Stride::By(1)))
        } else if delta < 0. {
            Some(Self::Retreat(Stride::By(1)))
        } else {
            None
        }
    }
}
