//! Presentation view model
//!
//! Turns simulation snapshots into what a front end needs to show: localized
//! status text, the score title and which overlay is up. Drawing is left to
//! the host.

pub mod titles;

use serde::{Deserialize, Serialize};

use crate::sim::GamePhase;
pub use titles::{TITLES, Title, title_for_score};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[serde(alias = "tr")]
    Turkish,
    #[serde(alias = "en")]
    English,
}

/// Fixed UI strings for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub game_title: &'static str,
    pub start_prompt: &'static str,
    pub game_over: &'static str,
    pub score_label: &'static str,
    pub title_label: &'static str,
    pub restart: &'static str,
}

impl Strings {
    pub fn for_locale(locale: Locale) -> &'static Strings {
        match locale {
            Locale::Turkish => &TURKISH,
            Locale::English => &ENGLISH,
        }
    }
}

static TURKISH: Strings = Strings {
    game_title: "Uçan Kedi",
    start_prompt: "Başlamak için tıkla veya boşluk tuşuna bas",
    game_over: "OYUN BİTTİ",
    score_label: "Puan",
    title_label: "Unvan",
    restart: "Yeniden Başla",
};

static ENGLISH: Strings = Strings {
    game_title: "Flying Cat",
    start_prompt: "Click or press space to start",
    game_over: "GAME OVER",
    score_label: "Score",
    title_label: "Title",
    restart: "Restart",
};

/// Full-screen overlay for the current phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    /// Nothing over the playfield
    None,
    /// Title screen with the start prompt
    Start,
    /// Final score and the title it earned
    GameOver { score: u64, title: &'static str },
}

impl Overlay {
    pub fn for_state(phase: GamePhase, score: u64, locale: Locale) -> Self {
        match phase {
            GamePhase::NotStarted => Overlay::Start,
            GamePhase::Running => Overlay::None,
            GamePhase::Over => Overlay::GameOver {
                score,
                title: title_for_score(score).text(locale),
            },
        }
    }
}

/// The restart affordance is only live once the session is over
pub fn restart_enabled(phase: GamePhase) -> bool {
    phase == GamePhase::Over
}
