use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg, state::catalog::CatalogState},
    domain::{channel::Channel, layout::Layout},
};

/// Vertical sections of the home view, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeSection {
    #[default]
    Hero,
    Live,
    All,
}

impl HomeSection {
    fn next(self) -> Self {
        match self {
            HomeSection::Hero => HomeSection::Live,
            HomeSection::Live | HomeSection::All => HomeSection::All,
        }
    }

    fn prev(self) -> Self {
        match self {
            HomeSection::Hero | HomeSection::Live => HomeSection::Hero,
            HomeSection::All => HomeSection::Live,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeroButton {
    #[default]
    Watch,
    Info,
}

/// What has focus on the home view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HomeFocus {
    pub section: HomeSection,
    pub hero_button: HeroButton,
    /// Index into the live list
    pub live_index: usize,
    /// Index into the registry
    pub all_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutPickerState {
    pub is_open: bool,
    /// Index into `Layout::ALL`
    pub cursor: usize,
}

impl LayoutPickerState {
    pub fn selected(&self) -> Layout {
        Layout::ALL
            .get(self.cursor)
            .copied()
            .unwrap_or_default()
    }
}

/// UI-related state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: HomeFocus,
    pub picker: LayoutPickerState,
    /// Featured channel on the home view
    pub hero: Option<Channel>,
}

impl UiState {
    pub fn is_picking_layout(&self) -> bool {
        self.picker.is_open
    }

    /// Keep focus indices inside the current lists
    pub fn clamp_focus(&mut self, catalog: &CatalogState) {
        self.focus.live_index = clamp_index(self.focus.live_index, catalog.live_count());
        self.focus.all_index = clamp_index(self.focus.all_index, catalog.registry.len());
    }

    pub fn update(&mut self, msg: UiMsg, catalog: &CatalogState, layout: Layout) -> Vec<Cmd> {
        match msg {
            UiMsg::FocusNextSection => {
                self.focus.section = self.focus.section.next();
            }
            UiMsg::FocusPrevSection => {
                self.focus.section = self.focus.section.prev();
            }
            UiMsg::MoveLeft => match self.focus.section {
                HomeSection::Hero => self.focus.hero_button = HeroButton::Watch,
                HomeSection::Live => {
                    self.focus.live_index = self.focus.live_index.saturating_sub(1);
                }
                HomeSection::All => {
                    self.focus.all_index = self.focus.all_index.saturating_sub(1);
                }
            },
            UiMsg::MoveRight => match self.focus.section {
                HomeSection::Hero => self.focus.hero_button = HeroButton::Info,
                HomeSection::Live => {
                    self.focus.live_index =
                        clamp_index(self.focus.live_index + 1, catalog.live_count());
                }
                HomeSection::All => {
                    self.focus.all_index =
                        clamp_index(self.focus.all_index + 1, catalog.registry.len());
                }
            },
            UiMsg::FocusLiveGrid => {
                self.focus.section = HomeSection::Live;
                self.focus.live_index = clamp_index(self.focus.live_index, catalog.live_count());
            }
            UiMsg::OpenLayoutPicker => {
                self.picker.is_open = true;
                self.picker.cursor = Layout::ALL
                    .iter()
                    .position(|l| *l == layout)
                    .unwrap_or_default();
            }
            UiMsg::CloseLayoutPicker => {
                self.picker.is_open = false;
            }
            UiMsg::PickerNext => {
                self.picker.cursor = (self.picker.cursor + 1) % Layout::ALL.len();
            }
            UiMsg::PickerPrev => {
                let len = Layout::ALL.len();
                self.picker.cursor = (self.picker.cursor + len - 1) % len;
            }
        }
        vec![Cmd::RequestRender]
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
