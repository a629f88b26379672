// Built-in anchor tables. Curated data; edit here, never at runtime.
// Charisma has no table on purpose.

use super::{AbilityAxis, AnchorBook, ReferenceAnchor};

const COMMAND: &[(u8, &str)] = &[
    (100, "Genghis Khan"),
    (98, "Alexander the Great"),
    (97, "Napoleon Bonaparte"),
    (96, "Yi Sun-sin"),
    (94, "Hannibal Barca"),
    (92, "Julius Caesar"),
    (88, "Frederick the Great"),
    (80, "Seasoned field general"),
    (70, "Capable regional commander"),
    (55, "Competent officer"),
    (40, "Untested leader"),
    (20, "No command experience"),
];

const MARTIAL: &[(u8, &str)] = &[
    (100, "Lü Bu"),
    (98, "Guan Yu"),
    (97, "Zhang Fei"),
    (95, "Zhao Yun"),
    (92, "Miyamoto Musashi"),
    (88, "Richard the Lionheart"),
    (80, "Veteran champion"),
    (70, "Trained soldier"),
    (50, "Militia recruit"),
    (30, "Untrained civilian"),
];

const INTELLECT: &[(u8, &str)] = &[
    (100, "Isaac Newton"),
    (99, "Leonardo da Vinci"),
    (98, "Aristotle"),
    (97, "Sejong the Great"),
    (95, "Zhuge Liang"),
    (92, "Benjamin Franklin"),
    (85, "Renowned scholar"),
    (75, "Learned official"),
    (60, "Educated citizen"),
    (40, "Unlettered"),
];

fn to_anchors(rows: &[(u8, &str)]) -> Vec<ReferenceAnchor> {
    rows.iter()
        .map(|(score, label)| ReferenceAnchor::new(*score, *label))
        .collect()
}

pub(super) fn default_book() -> AnchorBook {
    AnchorBook::from_entries([
        (AbilityAxis::Command, to_anchors(COMMAND)),
        (AbilityAxis::Martial, to_anchors(MARTIAL)),
        (AbilityAxis::Intellect, to_anchors(INTELLECT)),
    ])
}
