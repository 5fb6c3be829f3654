// State management module.
// Handles navigation, theme, forms and the home screen's catalog state.

pub mod catalog;
pub mod forms;
pub mod home;
pub mod navigation;
pub mod theme;

pub use catalog::{GARDEN, PlantEntity, THEMES};
pub use forms::{LoginAction, LoginFocus, LoginState, TextInput, WelcomeFocus};
pub use home::{HomeFocus, HomePage, HomeState};
pub use navigation::{NavigationStack, Screen};
pub use theme::{Chrome, Palette, Theme, chrome_for};
