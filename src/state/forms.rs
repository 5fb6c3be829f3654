// Form state for the welcome and login screens.
// Text inputs and focus cycling; no validation.

/// Single-line text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    masked: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// An input whose contents are shown as bullets.
    pub fn masked() -> Self {
        Self {
            value: String::new(),
            masked: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn insert(&mut self, c: char) {
        if !c.is_control() {
            self.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Text as it should be drawn.
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// Focusable buttons on the welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WelcomeFocus {
    CreateAccount,
    #[default]
    LogIn,
}

impl WelcomeFocus {
    pub fn toggle(&self) -> Self {
        match self {
            WelcomeFocus::CreateAccount => WelcomeFocus::LogIn,
            WelcomeFocus::LogIn => WelcomeFocus::CreateAccount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    Email,
    Password,
    Button,
}

impl LoginFocus {
    pub fn next(&self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Button,
            LoginFocus::Button => LoginFocus::Email,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::Button,
            LoginFocus::Password => LoginFocus::Email,
            LoginFocus::Button => LoginFocus::Password,
        }
    }
}

/// What a key on the login screen asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Submit,
}

#[derive(Debug, Clone)]
pub struct LoginState {
    pub email: TextInput,
    pub password: TextInput,
    pub focus: LoginFocus,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            email: TextInput::new(),
            password: TextInput::masked(),
            focus: LoginFocus::default(),
        }
    }
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            LoginFocus::Email => Some(&mut self.email),
            LoginFocus::Password => Some(&mut self.password),
            LoginFocus::Button => None,
        }
    }

    pub fn type_char(&mut self, c: char) {
        if let Some(input) = self.focused_input() {
            input.insert(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_input() {
            input.backspace();
        }
    }

    /// Enter advances through the fields and submits from the button.
    pub fn enter(&mut self) -> LoginAction {
        match self.focus {
            LoginFocus::Button => LoginAction::Submit,
            _ => {
                self.focus = self.focus.next();
                LoginAction::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input() {
        let mut input = TextInput::new();
        for c in "fern\n".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "fern");
        input.backspace();
        assert_eq!(input.display(), "fer");
        input.clear();
        assert!(input.is_empty());
        input.backspace();
        assert!(input.is_empty());
    }

    #[test]
    fn test_masked_display() {
        let mut input = TextInput::masked();
        for c in "hunter2".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "hunter2");
        assert_eq!(input.display(), "•••••••");
    }

    #[test]
    fn test_login_flow() {
        let mut login = LoginState::new();
        login.type_char('a');
        assert_eq!(login.enter(), LoginAction::None);
        assert_eq!(login.focus, LoginFocus::Password);
        login.type_char('p');
        assert_eq!(login.enter(), LoginAction::None);
        assert_eq!(login.focus, LoginFocus::Button);

        // Typing on the button does nothing
        login.type_char('x');
        assert_eq!(login.email.value(), "a");
        assert_eq!(login.password.value(), "p");

        assert_eq!(login.enter(), LoginAction::Submit);
    }

    #[test]
    fn test_focus_cycles() {
        let mut focus = LoginFocus::Email;
        for _ in 0..3 {
            focus = focus.next();
        }
        assert_eq!(focus, LoginFocus::Email);
        assert_eq!(focus.prev(), LoginFocus::Button);
        assert_eq!(WelcomeFocus::LogIn.toggle(), WelcomeFocus::CreateAccount);
    }
}
