// Home screen state.
// Pager page, focus, search filter, garden checkboxes and the image slots
// backing every visible card.

use std::collections::BTreeSet;

use crate::image::{ImageLoader, ImageSlot, ImageSource, LoadCompletion, RequestOptions};

use super::catalog::{GARDEN, PlantEntity, THEMES, filter_garden};
use super::forms::TextInput;

/// Theme card image area, in pixels (two pixels per terminal row).
pub const THEME_IMAGE_SIZE: (u32, u32) = (18, 8);
/// Garden thumbnail area, in pixels.
pub const GARDEN_IMAGE_SIZE: (u32, u32) = (8, 8);

/// Pages behind the bottom bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomePage {
    #[default]
    Home,
    Favorites,
    Profile,
    Cart,
}

impl HomePage {
    pub const ALL: [HomePage; 4] = [
        HomePage::Home,
        HomePage::Favorites,
        HomePage::Profile,
        HomePage::Cart,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            HomePage::Home => "Home",
            HomePage::Favorites => "Favorites",
            HomePage::Profile => "Profile",
            HomePage::Cart => "Cart",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            HomePage::Home => 0,
            HomePage::Favorites => 1,
            HomePage::Profile => 2,
            HomePage::Cart => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which part of the home page has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFocus {
    Search,
    #[default]
    Themes,
    Garden,
}

impl HomeFocus {
    pub fn next(&self) -> Self {
        match self {
            HomeFocus::Search => HomeFocus::Themes,
            HomeFocus::Themes => HomeFocus::Garden,
            HomeFocus::Garden => HomeFocus::Search,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            HomeFocus::Search => HomeFocus::Garden,
            HomeFocus::Themes => HomeFocus::Search,
            HomeFocus::Garden => HomeFocus::Themes,
        }
    }
}

#[derive(Debug)]
pub struct HomeState {
    pub page: HomePage,
    pub focus: HomeFocus,
    pub search: TextInput,
    /// Selected theme card.
    pub theme_cursor: usize,
    /// Selected row among the visible garden items.
    pub garden_cursor: usize,
    /// Checked garden plants, by catalog index.
    checked: BTreeSet<usize>,
    /// One slot per theme card.
    theme_slots: Vec<ImageSlot>,
    /// One slot per garden row position.
    garden_slots: Vec<ImageSlot>,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            page: HomePage::default(),
            focus: HomeFocus::default(),
            search: TextInput::new(),
            theme_cursor: 0,
            garden_cursor: 0,
            checked: BTreeSet::from([0]),
            theme_slots: (0..THEMES.len()).map(|_| ImageSlot::new()).collect(),
            garden_slots: (0..GARDEN.len()).map(|_| ImageSlot::new()).collect(),
        }
    }
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog indexes of the garden rows currently shown.
    pub fn visible_garden(&self) -> Vec<usize> {
        filter_garden(self.search.value())
    }

    pub fn is_checked(&self, plant: usize) -> bool {
        self.checked.contains(&plant)
    }

    /// Toggle the checkbox of the selected garden row.
    pub fn toggle_selected(&mut self) {
        let Some(&plant) = self.visible_garden().get(self.garden_cursor) else {
            return;
        };
        if !self.checked.remove(&plant) {
            self.checked.insert(plant);
        }
    }

    pub fn select_page(&mut self, page: HomePage) {
        self.page = page;
    }

    /// Move the cursor of the focused section by `delta`, clamped.
    pub fn move_cursor(&mut self, delta: isize) {
        let focus = self.focus;
        let (cursor, len) = match focus {
            HomeFocus::Themes => (&mut self.theme_cursor, THEMES.len()),
            HomeFocus::Garden => {
                let len = self.visible_garden().len();
                (&mut self.garden_cursor, len)
            }
            HomeFocus::Search => return,
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        *cursor = cursor.saturating_add_signed(delta).min(len - 1);
    }

    pub fn type_char(&mut self, c: char) {
        self.search.insert(c);
        self.clamp_garden_cursor();
    }

    pub fn backspace(&mut self) {
        self.search.backspace();
        self.clamp_garden_cursor();
    }

    fn clamp_garden_cursor(&mut self) {
        let len = self.visible_garden().len();
        self.garden_cursor = self.garden_cursor.min(len.saturating_sub(1));
    }

    /// Observe the image of every card on the current page. Rows that are
    /// not shown get a fresh slot, so late results for them are dropped.
    pub fn observe_images(&mut self, loader: &mut ImageLoader, source: &ImageSource) {
        if self.page != HomePage::Home {
            return;
        }
        let theme_options = RequestOptions::sized(THEME_IMAGE_SIZE.0, THEME_IMAGE_SIZE.1);
        for (slot, plant) in self.theme_slots.iter_mut().zip(THEMES.iter()) {
            loader.observe(slot, source.resolve(plant.image).as_ref(), theme_options);
        }

        let garden_options = RequestOptions::sized(GARDEN_IMAGE_SIZE.0, GARDEN_IMAGE_SIZE.1);
        let visible = self.visible_garden();
        for (row, slot) in self.garden_slots.iter_mut().enumerate() {
            match visible.get(row) {
                Some(&plant) => {
                    let reference = source.resolve(GARDEN[plant].image);
                    loader.observe(slot, reference.as_ref(), garden_options);
                }
                None => *slot = ImageSlot::new(),
            }
        }
    }

    /// Offer a completion to every slot. Returns true if one accepted it.
    pub fn resolve(&mut self, completion: &LoadCompletion) -> bool {
        self.theme_slots
            .iter_mut()
            .chain(self.garden_slots.iter_mut())
            .any(|slot| slot.resolve(completion))
    }

    /// Theme cards with their image slots.
    pub fn theme_cards(&self) -> impl Iterator<Item = (&PlantEntity, &ImageSlot)> {
        THEMES.iter().zip(self.theme_slots.iter())
    }

    /// Visible garden rows: (catalog index, plant, slot).
    pub fn garden_rows(&self) -> Vec<(usize, &PlantEntity, &ImageSlot)> {
        self.visible_garden()
            .into_iter()
            .zip(self.garden_slots.iter())
            .map(|(plant, slot)| (plant, &GARDEN[plant], slot))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{DecodedImage, ImageRef};
    use std::sync::Arc;
    use tokio::runtime::Handle;

    #[test]
    fn test_first_item_checked() {
        let mut home = HomeState::new();
        assert!(home.is_checked(0));
        assert!(!home.is_checked(1));

        home.focus = HomeFocus::Garden;
        home.toggle_selected();
        assert!(!home.is_checked(0));
        home.move_cursor(1);
        home.toggle_selected();
        assert!(home.is_checked(1));
    }

    #[test]
    fn test_checks_follow_plant_not_row() {
        let mut home = HomeState::new();
        for c in "lily".chars() {
            home.type_char(c);
        }
        assert_eq!(home.visible_garden(), vec![2]);
        home.toggle_selected();
        assert!(home.is_checked(2));

        home.search.clear();
        assert!(home.is_checked(2));
        assert!(!home.is_checked(1));
    }

    #[test]
    fn test_cursor_clamps() {
        let mut home = HomeState::new();
        home.focus = HomeFocus::Themes;
        home.move_cursor(-3);
        assert_eq!(home.theme_cursor, 0);
        home.move_cursor(99);
        assert_eq!(home.theme_cursor, THEMES.len() - 1);

        home.focus = HomeFocus::Garden;
        home.move_cursor(5);
        assert_eq!(home.garden_cursor, 5);
        for c in "snake".chars() {
            home.type_char(c);
        }
        assert_eq!(home.garden_cursor, 0);
    }

    #[test]
    fn test_pages() {
        assert_eq!(HomePage::Cart.next(), HomePage::Home);
        assert_eq!(HomePage::Home.prev(), HomePage::Cart);
        assert_eq!(HomePage::from_index(2), Some(HomePage::Profile));
        assert_eq!(HomePage::from_index(4), None);
    }

    #[tokio::test]
    async fn test_unavailable_source_marks_all_errors() {
        let mut loader = ImageLoader::new(Handle::current()).unwrap();
        let mut home = HomeState::new();
        home.observe_images(&mut loader, &ImageSource::Unavailable);

        assert_eq!(loader.in_flight(), 0);
        assert!(home.theme_cards().all(|(_, slot)| !slot.state().is_loading()));
    }

    #[tokio::test]
    async fn test_filter_restarts_row_loads() {
        let mut loader = ImageLoader::new(Handle::current()).unwrap();
        let source = ImageSource::Remote {
            base_url: "http://127.0.0.1:9".to_string(),
        };
        let mut home = HomeState::new();
        home.observe_images(&mut loader, &source);
        assert_eq!(loader.in_flight(), THEMES.len() + GARDEN.len());

        // Same view again: nothing new
        home.observe_images(&mut loader, &source);
        assert_eq!(loader.in_flight(), THEMES.len() + GARDEN.len());

        // Row 0 now shows Peace lily, the other rows unmount
        for c in "lily".chars() {
            home.type_char(c);
        }
        home.observe_images(&mut loader, &source);
        assert_eq!(loader.in_flight(), THEMES.len() + GARDEN.len() + 1);

        let rows = home.garden_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].2.reference(),
            Some(&ImageRef::Remote("http://127.0.0.1:9/peace_lily.jpg".to_string()))
        );
    }

    #[test]
    fn test_resolve_routes_to_owner() {
        let mut tickets = crate::image::Tickets::new();
        let mut home = HomeState::new();
        let reference = ImageRef::Remote("https://img.example.com/pothos.jpg".into());
        let request = home.garden_slots[3]
            .observe(Some(&reference), RequestOptions::default(), &mut tickets)
            .unwrap();

        let completion = LoadCompletion {
            ticket: request.ticket,
            result: Ok(Arc::new(DecodedImage::new(1, 1, vec![0, 0, 0, 255]))),
        };
        assert!(home.resolve(&completion));
        assert!(home.garden_slots[3].state().is_loaded());
        assert!(!home.resolve(&completion));
    }
}
