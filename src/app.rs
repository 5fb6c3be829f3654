// App state and main event loop.
// Routes keys by current screen, owns the navigation stack and collects
// image load results once per tick.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;

use crate::config::Config;
use crate::image::{ImageLoader, ImageSource};
use crate::state::{
    HomeFocus, HomePage, HomeState, LoginAction, LoginState, NavigationStack, Palette, Screen,
    Theme, WelcomeFocus,
};
use crate::ui;

/// Main application state.
pub struct App {
    /// Screen history.
    pub nav: NavigationStack,
    /// Active colour theme.
    pub theme: Theme,
    /// Focused button on the welcome screen.
    pub welcome_focus: WelcomeFocus,
    /// Login form.
    pub login: LoginState,
    /// Home screen state.
    pub home: HomeState,
    /// Whether the app should exit.
    pub should_quit: bool,
    /// Loop iterations so far; drives the loading spinner.
    pub tick: usize,
    loader: ImageLoader,
    source: ImageSource,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &Config, loader: ImageLoader) -> Self {
        Self {
            nav: NavigationStack::default(),
            theme: config.theme,
            welcome_focus: WelcomeFocus::default(),
            login: LoginState::new(),
            home: HomeState::new(),
            should_quit: false,
            tick: 0,
            loader,
            source: config.image_source(),
            tick_rate: config.tick_rate(),
        }
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            self.sync_images();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
            self.tick = self.tick.wrapping_add(1);
        }
        Ok(())
    }

    /// Apply finished loads, then let visible cards observe their images.
    pub fn sync_images(&mut self) {
        let completions = self.loader.poll_completions();
        if !completions.is_empty() {
            log::trace!(
                "{} image results, {} still in flight",
                completions.len(),
                self.loader.in_flight()
            );
        }
        for completion in completions {
            if !self.home.resolve(&completion) {
                log::trace!("dropped stale image result {:?}", completion.ticket);
            }
        }
        if self.nav.current() == Screen::Home {
            self.home.observe_images(&mut self.loader, &self.source);
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Esc {
            self.back();
            return;
        }
        match self.nav.current() {
            Screen::Welcome => self.handle_welcome_key(key),
            Screen::Login => self.handle_login_key(key),
            Screen::Home => self.handle_home_key(key),
        }
    }

    /// Host back action: pop, or exit when already at the root. Leaving
    /// Home drops its state, so in-flight loads for it are discarded.
    pub fn back(&mut self) {
        let leaving = self.nav.current();
        if self.nav.pop() {
            if leaving == Screen::Home {
                self.home = HomeState::new();
            }
        } else {
            log::debug!("back at root (depth {}), quitting", self.nav.depth());
            self.should_quit = true;
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        log::debug!("theme -> {:?}", self.theme);
    }

    fn handle_welcome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.welcome_focus = self.welcome_focus.toggle();
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.welcome_focus = self.welcome_focus.toggle();
            }
            KeyCode::Enter => match self.welcome_focus {
                WelcomeFocus::LogIn => self.nav.push(Screen::Login),
                WelcomeFocus::CreateAccount => log::debug!("create account is not available"),
            },
            _ => {}
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.login.focus = self.login.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.login.focus = self.login.focus.prev(),
            KeyCode::Backspace => self.login.backspace(),
            KeyCode::Enter => {
                if self.login.enter() == LoginAction::Submit {
                    self.login.password.clear();
                    self.nav.push(Screen::Home);
                }
            }
            KeyCode::Char(c) => self.login.type_char(c),
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        let searching = self.home.page == HomePage::Home && self.home.focus == HomeFocus::Search;
        if !searching {
            match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('t') => {
                    self.toggle_theme();
                    return;
                }
                _ => {}
            }
        }

        let home = &mut self.home;
        if searching {
            match key.code {
                KeyCode::Char(c) => home.type_char(c),
                KeyCode::Backspace => home.backspace(),
                KeyCode::Tab | KeyCode::Enter => home.focus = home.focus.next(),
                KeyCode::BackTab => home.focus = home.focus.prev(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                if let Some(page) = HomePage::from_index(index) {
                    home.select_page(page);
                }
            }
            KeyCode::Tab if home.page == HomePage::Home => home.focus = home.focus.next(),
            KeyCode::BackTab if home.page == HomePage::Home => home.focus = home.focus.prev(),
            KeyCode::Char('/') if home.page == HomePage::Home => home.focus = HomeFocus::Search,
            KeyCode::Left | KeyCode::Right
                if home.page == HomePage::Home && home.focus == HomeFocus::Themes =>
            {
                home.move_cursor(if key.code == KeyCode::Left { -1 } else { 1 });
            }
            KeyCode::Left => home.select_page(home.page.prev()),
            KeyCode::Right => home.select_page(home.page.next()),
            KeyCode::Up if home.page == HomePage::Home && home.focus == HomeFocus::Garden => {
                home.move_cursor(-1)
            }
            KeyCode::Down if home.page == HomePage::Home && home.focus == HomeFocus::Garden => {
                home.move_cursor(1)
            }
            KeyCode::Char(' ') | KeyCode::Enter
                if home.page == HomePage::Home && home.focus == HomeFocus::Garden =>
            {
                home.toggle_selected();
            }
            _ => {}
        }
    }
}
