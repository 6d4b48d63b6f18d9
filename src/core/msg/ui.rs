use serde::{Deserialize, Serialize};

/// Home view navigation and layout picker messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    FocusNextSection,
    FocusPrevSection,
    MoveLeft,
    MoveRight,
    /// Jump to the live grid (the hero's Info button)
    FocusLiveGrid,

    OpenLayoutPicker,
    CloseLayoutPicker,
    PickerNext,
    PickerPrev,
}

impl UiMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            UiMsg::MoveLeft | UiMsg::MoveRight | UiMsg::PickerNext | UiMsg::PickerPrev
        )
    }
}
