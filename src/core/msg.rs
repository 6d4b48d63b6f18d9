use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod player;
pub mod system;
pub mod ui;

use catalog::CatalogMsg;
use player::PlayerMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Live detection (delegated to CatalogState)
    Catalog(CatalogMsg),

    // Multi-pane player (delegated to PlayerState)
    Player(PlayerMsg),

    // Home view navigation and layout picker (delegated to UiState)
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages while debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Ui(msg) => msg.is_frequent(),
            Msg::Catalog(_) | Msg::Player(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Player(PlayerMsg::Close).is_frequent());
        assert!(Msg::Ui(UiMsg::MoveRight).is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_ne!(Msg::Ui(UiMsg::MoveLeft), Msg::Ui(UiMsg::MoveRight));
    }

    #[test]
    fn test_msg_serialization() -> color_eyre::Result<()> {
        let msg = Msg::System(SystemMsg::UpdateStatusMessage("test".to_string()));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
