// Tue Feb 10 2026 - Alex

use serde::Serialize;

/// Every screen the classifier can recognize. Exactly one of these is
/// reported per query; anything else degrades to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScreenKind {
    None,
    Dialog,
    BattleActions,
    BattleMoves,
    BattleTarget,
    BattleYesNo,
    StartMenu,
    BagMenu,
    TmCase,
    PartyMenu,
    PokemonStorage,
    Pokedex,
    FlyMap,
    ShopBuyMenu,
    SummaryScreen,
    SummaryMoveReplace,
    TrainerCard,
    OptionMenu,
    TitleMenu,
    TitleScreen,
    NamingScreen,
    ControlsGuide,
    PikachuIntro,
    QuestLogPlayback,
    BerryCrushRankings,
    ElevatorMenu,
    PlayerPcMenu,
    ItemStorageList,
    ItemStorageMenu,
    WhiteoutRecovery,
}

/// What put the options of a [`ChoiceMenu`] on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChoiceKind {
    YesNo,
    Multichoice,
    ShopChoice,
    PlayerPc,
    Gender,
    Actions,
    Moves,
    Target,
    List,
    Menu,
}

/// A menu awaiting a selection, with the cursor resolved to the option
/// it sits on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceMenu {
    pub kind: ChoiceKind,
    pub options: Vec<String>,
    pub cursor_position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_text: Option<String>,
}

impl ChoiceMenu {
    /// Cursor positions beyond the option list clamp to the last entry
    /// rather than reporting a selection that does not exist.
    pub fn new(kind: ChoiceKind, options: Vec<String>, cursor: usize) -> Self {
        let cursor_position = if options.is_empty() {
            0
        } else {
            cursor.min(options.len() - 1)
        };
        let selected_option = options.get(cursor_position).cloned();
        Self {
            kind,
            options,
            cursor_position,
            selected_option,
            prompt_text: None,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt_text = Some(prompt.into());
        self
    }
}

/// One recognized screen state. `visible_text` is always populated
/// (empty for `None`); the optional blocks carry screen-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub menu_type: ScreenKind,
    pub visible_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice: Option<ChoiceMenu>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
    /// Set when the state was inferred from an empirical signal rather
    /// than a decoded structure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<&'static str>,
}

impl UiState {
    pub fn new(menu_type: ScreenKind, visible_text: impl Into<String>) -> Self {
        Self {
            menu_type,
            visible_text: visible_text.into(),
            choice: None,
            pages: Vec::new(),
            current_page: None,
            page_count: None,
            via: None,
        }
    }

    pub fn none() -> Self {
        Self::new(ScreenKind::None, "")
    }

    pub fn with_choice(mut self, choice: ChoiceMenu) -> Self {
        self.choice = Some(choice);
        self
    }

    pub fn with_pages(mut self, pages: Vec<String>, current_page: usize) -> Self {
        self.page_count = Some(pages.len());
        self.current_page = Some(current_page.clamp(1, pages.len().max(1)));
        self.pages = pages;
        self
    }

    pub fn via(mut self, signal: &'static str) -> Self {
        self.via = Some(signal);
        self
    }

    pub fn is_none(&self) -> bool {
        self.menu_type == ScreenKind::None
    }
}
