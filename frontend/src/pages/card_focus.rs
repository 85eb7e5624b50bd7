use std::rc::Rc;

use yew::functional::Reducible;

/// Which program card, if any, is pulled forward while the rest are dimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardFocus {
    focused: Option<usize>,
}

pub enum CardFocusAction {
    /// A click landed on card `index`.
    Click(usize),
    /// A click landed anywhere outside the cards.
    ClickOutside,
}

impl CardFocus {
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == Some(index)
    }

    /// Clicking the focused card releases it; any other card takes the focus.
    pub fn click(&self, index: usize) -> Self {
        if self.is_focused(index) {
            Self::default()
        } else {
            Self { focused: Some(index) }
        }
    }

    pub fn reset(&self) -> Self {
        Self::default()
    }
}

impl Reducible for CardFocus {
    type Action = CardFocusAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            CardFocusAction::Click(index) => self.click(index),
            CardFocusAction::ClickOutside => self.reset(),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
