use std::{cell::RefCell, collections::HashMap};
use term::{color::Color, Attr, StdoutTerminal};

pub type StyleId = u8;

/// Is a foreground color, optionally with an attribute such as bold.
#[derive(Clone, Copy)]
pub struct Style {
    color: Color,
    attr: Option<Attr>,
}

impl Style {
    pub fn new(color: Color) -> Self {
        Self { color, attr: None }
    }

    pub fn with(self, attr: Attr) -> Self {
        Self {
            attr: Some(attr),
            ..self
        }
    }
}

/// Switches the standard output between named styles. A plain stylus never writes escape
/// codes, which is what `--no-color` and terminals without color support get.
pub enum Stylus {
    Plain,
    Colored {
        terminal: RefCell<Box<StdoutTerminal>>,
        styles: HashMap<StyleId, Style>,
    },
}

impl Stylus {
    /// Returns a colored stylus over the standard output, or a plain one if the standard
    /// output is not a terminal that `term` recognizes.
    pub fn colored<I>(styles: I) -> Self
    where
        I: IntoIterator<Item = (StyleId, Style)>,
    {
        match term::stdout() {
            Some(terminal) => Self::Colored {
                terminal: RefCell::new(terminal),
                styles: styles.into_iter().collect(),
            },
            None => Self::Plain,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain)
    }

    /// Resets the terminal and applies the style registered under `id`, if any.
    pub fn set(&self, id: StyleId) -> term::Result<()> {
        if let Self::Colored { terminal, styles } = self {
            let mut terminal = terminal.borrow_mut();
            terminal.reset()?;
            if let Some(style) = styles.get(&id) {
                terminal.fg(style.color)?;
                if let Some(attr) = style.attr {
                    terminal.attr(attr)?;
                }
            }
        }
        Ok(())
    }

    pub fn reset(&self) -> term::Result<()> {
        if let Self::Colored { terminal, .. } = self {
            terminal.borrow_mut().reset()?;
        }
        Ok(())
    }
}

impl Drop for Stylus {
    fn drop(&mut self) {
        let _ = self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_stylus() {
        let stylus = Stylus::Plain;
        assert!(stylus.is_plain());
        assert!(stylus.set(0).is_ok());
        assert!(stylus.reset().is_ok());
    }

    #[test]
    fn test_style() {
        let style = Style::new(term::color::RED).with(Attr::Bold);
        assert_eq!(term::color::RED, style.color);
        assert!(matches!(style.attr, Some(Attr::Bold)));
    }
}
