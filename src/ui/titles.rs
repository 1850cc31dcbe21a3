//! Score titles shown on the game-over screen

use super::Locale;

/// A title unlocked at `score` points
#[derive(Debug, Clone, Copy)]
pub struct Title {
    pub score: u64,
    pub tr: &'static str,
    pub en: &'static str,
}

impl Title {
    pub fn text(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Turkish => self.tr,
            Locale::English => self.en,
        }
    }
}

/// Sorted by ascending threshold
pub const TITLES: [Title; 11] = [
    Title { score: 0, tr: "Yavru Kedi", en: "Kitten" },
    Title { score: 10, tr: "Ev Kedisi", en: "House Cat" },
    Title { score: 20, tr: "Sokak Kedisi", en: "Street Cat" },
    Title { score: 30, tr: "Mahalle Şampiyonu", en: "Neighbourhood Champion" },
    Title { score: 40, tr: "Şehir Kaşifi", en: "City Explorer" },
    Title { score: 50, tr: "Bölge Kahramanı", en: "Regional Hero" },
    Title { score: 60, tr: "Ulusal Yıldız", en: "National Star" },
    Title { score: 70, tr: "Dünya Yıldızı", en: "World Star" },
    Title { score: 80, tr: "Efsanevi Kedi", en: "Legendary Cat" },
    Title { score: 90, tr: "Uzay Kedisi", en: "Space Cat" },
    Title { score: 100, tr: "Galaksinin Koruyucusu", en: "Guardian of the Galaxy" },
];

/// Title for the highest threshold not above `score`
pub fn title_for_score(score: u64) -> &'static Title {
    TITLES
        .iter()
        .rev()
        .find(|t| score >= t.score)
        .unwrap_or(&TITLES[0])
}
