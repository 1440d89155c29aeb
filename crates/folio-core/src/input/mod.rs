//! Input abstraction layer.

pub mod mock;

/// Page events consumed by the portfolio app.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// Vertical scroll offset of the page, in layout units.
    Scroll(i32),
    /// Viewport height changed.
    Resize(i32),
    ToggleMenu,
    /// Navigation entry clicked, by index.
    NavLink(usize),
    /// Click anywhere outside the menu and its toggle.
    ClickOutside,
    ToggleTheme,
    SubmitContact,
    /// Ctrl/Meta-click on the contact email link.
    CopyEmail,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
