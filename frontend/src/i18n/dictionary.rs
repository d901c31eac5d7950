use std::collections::HashMap;
use once_cell::sync::Lazy;

use super::{ar, en};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    #[cfg(test)]
    pub const ALL: [Language; 2] = [Language::Ar, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim() {
            "ar" => Some(Language::Ar),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(&self) -> &'static str {
        match self {
            Language::Ar => "rtl",
            Language::En => "ltr",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }

    pub fn toggled(&self) -> Language {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }
}

static EN: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| en::ENTRIES.iter().copied().collect());
static AR: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ar::ENTRIES.iter().copied().collect());

fn dictionary(language: Language) -> &'static HashMap<&'static str, &'static str> {
    match language {
        Language::Ar => &AR,
        Language::En => &EN,
    }
}

/// Looks a key up, returning the key itself when it has no entry.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    dictionary(language).get(key).copied().unwrap_or(key)
}

#[cfg(test)]
pub fn has_key(language: Language, key: &str) -> bool {
    dictionary(language).contains_key(key)
}

/// Every key the page renders through the translation accessor.
#[cfg(test)]
pub const UI_KEYS: &[&str] = &[
    "nav.home",
    "nav.about",
    "nav.services",
    "nav.transformations",
    "nav.feedback",
    "nav.packages",
    "nav.faq",
    "nav.contact",
    "nav.language",
    "nav.menu",
    "nav.skip",
    "language.changing",
    "landing.title.break",
    "landing.title.your",
    "landing.title.limits",
    "landing.subtitle",
    "about.title",
    "about.me",
    "about.description",
    "about.qualification.1",
    "about.qualification.2",
    "about.qualification.3",
    "about.qualification.4",
    "services.title",
    "services.subtitle",
    "services.cta.looking",
    "services.cta.view",
    "services.workout.title",
    "services.workout.description",
    "services.workout.feature.1",
    "services.workout.feature.2",
    "services.workout.feature.3",
    "services.diet.title",
    "services.diet.description",
    "services.diet.feature.1",
    "services.diet.feature.2",
    "services.diet.feature.3",
    "services.tools.title",
    "services.tools.description",
    "services.tools.feature.1",
    "services.tools.feature.2",
    "services.tools.feature.3",
    "services.tools.feature.4",
    "transformations.title",
    "transformations.subtitle",
    "transformations.before",
    "transformations.after",
    "transformations.front",
    "transformations.back",
    "transformations.duration",
    "transformations.client.1.name",
    "transformations.client.1.role",
    "transformations.client.1.duration",
    "transformations.client.1.achievement",
    "transformations.client.1.story",
    "transformations.client.2.name",
    "transformations.client.2.role",
    "transformations.client.2.duration",
    "transformations.client.2.achievement",
    "transformations.client.2.story",
    "feedback.title",
    "feedback.subtitle",
    "feedback.ariaLabel.gallery",
    "feedback.ariaLabel.viewImage",
    "feedback.error.loadingImage",
    "feedback.close",
    "packages.title",
    "packages.subtitle",
    "packages.popular",
    "packages.features",
    "packages.tier",
    "packages.discount",
    "packages.duration",
    "packages.silver",
    "packages.gold",
    "packages.cta.silver",
    "packages.cta.gold",
    "packages.silver.benefit.1",
    "packages.silver.benefit.2",
    "packages.gold.benefit.1",
    "packages.gold.benefit.2",
    "packages.gold.benefit.3",
    "packages.feature.1",
    "packages.feature.2",
    "packages.feature.3",
    "packages.feature.4",
    "packages.feature.5",
    "packages.feature.6",
    "packages.feature.7",
    "packages.feature.8",
    "packages.feature.9",
    "packages.feature.10",
    "packages.testing.title",
    "packages.testing.duration",
    "packages.testing.suitableFor",
    "packages.development.title",
    "packages.development.duration",
    "packages.development.suitableFor",
    "packages.journey.title",
    "packages.journey.duration",
    "packages.journey.suitableFor",
    "packages.egp",
    "packages.usd",
    "faq.title",
    "faq.subtitle",
    "faq.q1",
    "faq.q2",
    "faq.q3",
    "faq.q4",
    "faq.q5",
    "faq.q6",
    "faq.q7",
    "faq.a1",
    "faq.a2",
    "faq.a3",
    "faq.a4",
    "faq.a5",
    "faq.a6",
    "faq.a7",
    "footer.tagline",
    "footer.quicklinks",
    "footer.legal",
    "footer.connect",
    "footer.privacy",
    "footer.terms",
    "footer.cookies",
    "footer.rights",
    "whatsapp.general",
    "whatsapp.package",
    "notfound.title",
    "notfound.subtitle",
    "notfound.description",
    "notfound.backhome",
    "image.unavailable",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_ui_key_is_translated_in_every_language() {
        for language in Language::ALL {
            for key in UI_KEYS {
                assert!(has_key(language, key), "{:?} is missing {}", language, key);
                let text = translate(language, key);
                assert_ne!(text, *key, "{:?} renders the raw key {}", language, key);
                assert!(!text.trim().is_empty(), "{:?} has an empty entry for {}", language, key);
            }
        }
    }

    #[test]
    fn dictionaries_have_the_same_keys() {
        let en_keys: HashSet<_> = en::ENTRIES.iter().map(|(k, _)| *k).collect();
        let ar_keys: HashSet<_> = ar::ENTRIES.iter().map(|(k, _)| *k).collect();
        let only_en: Vec<_> = en_keys.difference(&ar_keys).collect();
        let only_ar: Vec<_> = ar_keys.difference(&en_keys).collect();
        assert!(only_en.is_empty(), "missing in ar: {:?}", only_en);
        assert!(only_ar.is_empty(), "missing in en: {:?}", only_ar);
    }

    #[test]
    fn dictionaries_have_no_duplicate_keys() {
        for entries in [en::ENTRIES, ar::ENTRIES] {
            let unique: HashSet<_> = entries.iter().map(|(k, _)| *k).collect();
            assert_eq!(unique.len(), entries.len());
        }
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(translate(Language::En, "does.not.exist"), "does.not.exist");
        assert_eq!(translate(Language::Ar, "does.not.exist"), "does.not.exist");
    }

    #[test]
    fn language_codes_round_trip_and_reject_unknown() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::default(), Language::Ar);
    }

    #[test]
    fn double_toggle_restores_direction_and_text() {
        let start = Language::Ar;
        assert_eq!(start.dir(), "rtl");
        assert_eq!(start.toggled().dir(), "ltr");
        assert_eq!(start.toggled().toggled().dir(), "rtl");
        assert_eq!(
            translate(start.toggled().toggled(), "nav.home"),
            translate(start, "nav.home")
        );
        assert_ne!(translate(start.toggled(), "nav.home"), translate(start, "nav.home"));
    }
}
