//! Keyboard shortcuts for the coinlens terminal interface
//!
//! Maps crossterm key events to application actions:
//! - View navigation (1-4, Tab/Shift-Tab)
//! - List navigation (arrows, vim-like j/k)
//! - Review workflow (Enter detail, u audit, a approve, x reject, Esc close)
//! - Data actions (r refresh, m market refresh, e export, f favorite,
//!   s sentiment filter, d Dify fetch)

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// All keyboard actions supported by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardAction {
    Quit,

    // View navigation
    GotoDashboard,
    GotoHoldings,
    GotoReports,
    GotoNews,
    NextView,
    PrevView,

    // List navigation
    Up,
    Down,

    // Detail / review workflow
    OpenDetail,
    OpenAudit,
    CloseModal,
    Approve,
    Reject,

    // Data actions
    Refresh,
    RefreshMarket,
    Export,
    ToggleFavorite,
    CycleSentiment,
    FetchFromDify,
}

/// Key binding table
pub struct Keymap {
    bindings: HashMap<(KeyCode, KeyModifiers), KeyboardAction>,
}

impl Keymap {
    pub fn default_bindings() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, action: KeyboardAction| {
            bindings.insert((code, KeyModifiers::NONE), action);
        };

        bind(KeyCode::Char('q'), KeyboardAction::Quit);

        bind(KeyCode::Char('1'), KeyboardAction::GotoDashboard);
        bind(KeyCode::Char('2'), KeyboardAction::GotoHoldings);
        bind(KeyCode::Char('3'), KeyboardAction::GotoReports);
        bind(KeyCode::Char('4'), KeyboardAction::GotoNews);
        bind(KeyCode::Tab, KeyboardAction::NextView);
        bind(KeyCode::BackTab, KeyboardAction::PrevView);

        bind(KeyCode::Up, KeyboardAction::Up);
        bind(KeyCode::Down, KeyboardAction::Down);
        bind(KeyCode::Char('k'), KeyboardAction::Up);
        bind(KeyCode::Char('j'), KeyboardAction::Down);

        bind(KeyCode::Enter, KeyboardAction::OpenDetail);
        bind(KeyCode::Char('u'), KeyboardAction::OpenAudit);
        bind(KeyCode::Esc, KeyboardAction::CloseModal);
        bind(KeyCode::Char('a'), KeyboardAction::Approve);
        bind(KeyCode::Char('x'), KeyboardAction::Reject);

        bind(KeyCode::Char('r'), KeyboardAction::Refresh);
        bind(KeyCode::Char('m'), KeyboardAction::RefreshMarket);
        bind(KeyCode::Char('e'), KeyboardAction::Export);
        bind(KeyCode::Char('f'), KeyboardAction::ToggleFavorite);
        bind(KeyCode::Char('s'), KeyboardAction::CycleSentiment);
        bind(KeyCode::Char('d'), KeyboardAction::FetchFromDify);

        // BackTab arrives with SHIFT on most terminals.
        bindings.insert((KeyCode::BackTab, KeyModifiers::SHIFT), KeyboardAction::PrevView);

        Self { bindings }
    }

    /// Resolve a key event to an action, if bound
    pub fn resolve(&self, key: &KeyEvent) -> Option<KeyboardAction> {
        self.bindings.get(&(key.code, key.modifiers)).copied()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::default_bindings()
    }
}
