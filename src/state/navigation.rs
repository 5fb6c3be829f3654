// Navigation state management.
// Holds the screen history that decides which top-level screen is drawn.

use serde::{Deserialize, Serialize};

/// A top-level screen of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Welcome,
    Login,
    Home,
}

impl Screen {
    /// Get the display title for this screen.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::Login => "Log in",
            Screen::Home => "Home",
        }
    }
}

/// Screen history with back navigation.
///
/// The current screen is the last element. The root entry is never
/// removed by [`NavigationStack::pop`], so the stack is never empty.
#[derive(Debug, Clone)]
pub struct NavigationStack {
    /// Stack of screens (bottom = root, top = current)
    stack: Vec<Screen>,
}

impl NavigationStack {
    /// Create a new navigation stack starting at the given screen.
    pub fn new(root: Screen) -> Self {
        Self { stack: vec![root] }
    }

    /// Get the current screen.
    pub fn current(&self) -> Screen {
        match self.stack.last() {
            Some(screen) => *screen,
            None => Screen::Welcome,
        }
    }

    /// Push a screen and make it current.
    pub fn push(&mut self, screen: Screen) {
        log::debug!("navigate: {:?} -> {:?}", self.current(), screen);
        self.stack.push(screen);
    }

    /// Pop the current screen (go back). Returns false if at root, in which
    /// case nothing is removed and the host should handle the back action.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            let left = self.stack.pop();
            log::debug!("back: {:?} -> {:?}", left, self.current());
            true
        } else {
            false
        }
    }

    /// Check if we can go back (not at root).
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Titles from root to current, for the header trail.
    pub fn trail(&self) -> Vec<&'static str> {
        self.stack.iter().map(Screen::title).collect()
    }

    /// Get the depth of the navigation stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Screen::Welcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_stack() {
        let mut nav = NavigationStack::default();

        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current(), Screen::Welcome);
        assert!(!nav.can_go_back());

        nav.push(Screen::Login);
        assert_eq!(nav.depth(), 2);
        assert!(nav.can_go_back());

        nav.push(Screen::Home);
        assert_eq!(nav.current(), Screen::Home);

        assert!(nav.pop());
        assert_eq!(nav.current(), Screen::Login);

        assert!(nav.pop());
        assert_eq!(nav.current(), Screen::Welcome);

        // Can't pop past root
        assert!(!nav.pop());
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current(), Screen::Welcome);
    }

    #[test]
    fn test_current_is_last_pushed() {
        let sequences: [&[Screen]; 3] = [
            &[Screen::Home],
            &[Screen::Login, Screen::Home, Screen::Login],
            &[Screen::Home, Screen::Home, Screen::Welcome],
        ];
        for seq in sequences {
            let mut nav = NavigationStack::default();
            for screen in seq {
                nav.push(*screen);
            }
            assert_eq!(Some(&nav.current()), seq.last());
        }
    }

    #[test]
    fn test_pop_on_fresh_stack() {
        let mut nav = NavigationStack::default();
        assert!(!nav.pop());
        assert_eq!(nav.current(), Screen::Welcome);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_pop_stops_at_floor() {
        let mut nav = NavigationStack::new(Screen::Login);
        nav.push(Screen::Home);
        assert!(nav.pop());
        assert_eq!(nav.current(), Screen::Login);
        assert!(!nav.pop());
        assert_eq!(nav.current(), Screen::Login);
    }

    #[test]
    fn test_trail() {
        let mut nav = NavigationStack::default();
        nav.push(Screen::Login);
        nav.push(Screen::Home);
        assert_eq!(nav.trail(), vec!["Welcome", "Log in", "Home"]);

        nav.pop();
        assert_eq!(nav.trail(), vec!["Welcome", "Log in"]);
    }
}
