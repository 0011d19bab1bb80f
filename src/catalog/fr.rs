use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::LocalizationTable;
use crate::model::template::TemplateLocalization;

/// French names and descriptions for the profession templates (gallery 4-10).
pub const FR_ENTRIES: [(&str, &str, &str); 7] = [
    (
        "creative-designer",
        "Designer Créatif",
        "Mise en page audacieuse et artistique avec approche axée sur le portfolio et impact visuel.",
    ),
    (
        "executive-manager",
        "Cadre Dirigeant",
        "Design professionnel et autoritaire pour les postes de direction supérieure.",
    ),
    (
        "professional-chef",
        "Chef Professionnel",
        "Design culinaire mettant en valeur l'expérience en cuisine et les spécialisations.",
    ),
    (
        "research-scientist",
        "Chercheur Scientifique",
        "Mise en page axée sur les données, parfaite pour les postes de recherche et le travail en laboratoire.",
    ),
    (
        "hr-manager",
        "Responsable RH",
        "Design axé sur les personnes, mettant l'accent sur les compétences interpersonnelles et le leadership d'équipe.",
    ),
    (
        "civil-engineer",
        "Ingénieur Civil",
        "Mise en page technique présentant les projets, certifications et compétences en ingénierie.",
    ),
    (
        "artist-musician",
        "Artiste / Musicien",
        "Design expressif pour les artistes, mettant l'accent sur les spectacles et les réalisations artistiques.",
    ),
];

static FRENCH: Lazy<LocalizationTable> = Lazy::new(|| {
    let entries: BTreeMap<String, TemplateLocalization> = FR_ENTRIES
        .iter()
        .map(|(id, name, description)| (id.to_string(), TemplateLocalization::new(*name, *description)))
        .collect();
    LocalizationTable::from_map(entries)
});

/// The built-in French table, shared for the whole process.
pub fn french() -> &'static LocalizationTable {
    &FRENCH
}
