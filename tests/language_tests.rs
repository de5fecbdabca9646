// Host-side tests for language card rendering.

mod common;

use common::*;
use folio_core::languages::build_cards;
use folio_core::{LanguageEntry, MemoryStore, PageController, SafeStorage, LANGUAGES};

static OUT_OF_RANGE: &[LanguageEntry] = &[
    LanguageEntry {
        name: "Klingon",
        proficiency: "Fluent",
        description: "Overachiever.",
        level: Some(150),
    },
    LanguageEntry {
        name: "Latin",
        proficiency: "Rusty",
        description: "Mostly mottos.",
        level: Some(-20),
    },
    LanguageEntry {
        name: "Esperanto",
        proficiency: "Curious",
        description: "No meter for this one.",
        level: None,
    },
];

#[test]
fn cards_preserve_table_order() {
    let cards = build_cards(LANGUAGES);
    let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        ["English", "Russian", "Spanish", "French", "Mandarin Chinese"]
    );
}

#[test]
fn card_labels_and_meter_ids() {
    let cards = build_cards(LANGUAGES);
    let spanish = &cards[2];
    assert_eq!(spanish.badge_label, "Proficiency level: Intermediate");

    let meter = spanish.meter.as_ref().unwrap();
    assert_eq!(meter.id, "language-meter-2");
    assert_eq!(meter.label, "Intermediate proficiency");
    assert_eq!(meter.value, 70);
    assert_eq!((meter.min, meter.max), (0, 100));
    assert_eq!(meter.aria_label, "Intermediate proficiency 70 out of 100");
}

#[test]
fn levels_are_clamped_and_optional() {
    let cards = build_cards(OUT_OF_RANGE);

    let high = cards[0].meter.as_ref().unwrap();
    assert_eq!(high.value, 100);
    assert_eq!(high.aria_label, "Fluent proficiency 100 out of 100");

    let low = cards[1].meter.as_ref().unwrap();
    assert_eq!(low.value, 0);

    assert!(cards[2].meter.is_none());
}

#[test]
fn boot_renders_cards_into_the_list() {
    let controller = boot(FakePage::plain(), MemoryStore::new());
    assert_eq!(controller.page().language_renders, 1);
    assert_eq!(controller.page().languages, build_cards(LANGUAGES));
}

#[test]
fn nothing_renders_without_a_list_or_data() {
    let controller = boot(FakePage::bare(), MemoryStore::new());
    assert_eq!(controller.page().language_renders, 0);

    let mut controller =
        PageController::with_languages(FakePage::plain(), SafeStorage::new(MemoryStore::new()), &[]);
    controller.boot();
    assert_eq!(controller.page().language_renders, 0);
}

#[test]
fn custom_tables_render_in_full() {
    let mut controller = PageController::with_languages(
        FakePage::plain(),
        SafeStorage::new(MemoryStore::new()),
        OUT_OF_RANGE,
    );
    controller.boot();
    assert_eq!(controller.page().languages.len(), 3);
    assert_eq!(controller.page().languages[0].name, "Klingon");
}
