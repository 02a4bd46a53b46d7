//! Reshaping of raw API payloads into display records
//!
//! Pure functions only; the aggregator wires them together around the network
//! calls. Ordering rules here are relied on by the UI: stats and abilities are
//! stored most-significant-first (the reverse of the API order) and forms are
//! listed in reverse source order.

use std::collections::HashSet;

use serde_json::Value;

use super::api::{AbilitySlot, FlavorText, Genus, LocalizedName, NamedResource, PokemonResponse, StatSlot};
use super::{FormImage, StatEntry, VariantRecord};

/// Language tag of the display name
const DISPLAY_LANGUAGE: &str = "ja";

/// Language tag of the category and descriptions
const TEXT_LANGUAGE: &str = "en";

/// Display value substituted for the "white" color, which is invisible on light backgrounds
pub const WHITE_DISPLAY_COLOR: &str = "#ddd";

/// First Japanese name, falling back to the canonical name
pub fn localized_name(names: &[LocalizedName], canonical: &str) -> String {
    names
        .iter()
        .find(|entry| entry.language.name == DISPLAY_LANGUAGE)
        .map(|entry| entry.name.clone())
        .unwrap_or_else(|| canonical.to_string())
}

/// First English genus, or an empty string
pub fn category(genera: &[Genus]) -> String {
    genera
        .iter()
        .find(|entry| entry.language.name == TEXT_LANGUAGE)
        .map(|entry| entry.genus.clone())
        .unwrap_or_default()
}

/// Collapses every run of whitespace (including line breaks and form feeds) to one space
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// English flavor texts, whitespace-normalized, deduplicated in first-seen order
pub fn descriptions(entries: &[FlavorText]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|entry| entry.language.name == TEXT_LANGUAGE)
        .map(|entry| normalize_whitespace(&entry.flavor_text))
        .filter(|text| seen.insert(text.clone()))
        .collect()
}

/// Color name as displayed
pub fn display_color(color: &str) -> String {
    if color == "white" {
        WHITE_DISPLAY_COLOR.to_string()
    } else {
        color.to_string()
    }
}

/// Hectograms to a kilogram label, e.g. 100 -> "10.00 kg"
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.2} kg", f64::from(hectograms) / 10.0)
}

/// Decimetres to a centimetre label, e.g. 7 -> "70.00 cm"
pub fn format_height(decimetres: u32) -> String {
    format!("{:.2} cm", f64::from(decimetres) * 10.0)
}

/// `{base}/{id}{suffix}.png`
pub fn image_url(image_base_url: &str, species_id: u32, form_label: &str) -> String {
    format!("{}/{}{}.png", image_base_url, species_id, form_label)
}

/// Form name with the species name stripped as a prefix, e.g. "-alola"
pub fn form_label(species_name: &str, form_name: &str) -> String {
    form_name
        .strip_prefix(species_name)
        .unwrap_or(form_name)
        .to_string()
}

/// Species-level context every variant of one fetch shares
#[derive(Debug, Clone)]
pub struct VariantContext<'a> {
    pub species_id: u32,
    pub species_name: &'a str,
    pub image_base_url: &'a str,
    pub single_image: bool,
}

/// Image list for one variant
pub fn variant_images(ctx: &VariantContext<'_>, forms: &[NamedResource]) -> Vec<FormImage> {
    if ctx.single_image {
        return vec![FormImage {
            form_name: String::new(),
            image: image_url(ctx.image_base_url, ctx.species_id, ""),
        }];
    }

    forms
        .iter()
        .rev()
        .map(|form| {
            let form_name = form_label(ctx.species_name, &form.name);
            let image = image_url(ctx.image_base_url, ctx.species_id, &form_name);
            FormImage { form_name, image }
        })
        .collect()
}

/// Stats in reverse source order
pub fn reversed_stats(stats: &[StatSlot]) -> Vec<StatEntry> {
    stats
        .iter()
        .rev()
        .map(|slot| StatEntry {
            name: slot.stat.name.clone(),
            base_stat: slot.base_stat,
        })
        .collect()
}

/// Sum and maximum of the base values; the maximum of nothing is 0
pub fn stat_totals(stats: &[StatEntry]) -> (u32, u32) {
    stats.iter().fold((0, 0), |(total, highest), entry| {
        (total + entry.base_stat, highest.max(entry.base_stat))
    })
}

/// Ability names in reverse source order, comma separated
pub fn ability_names(abilities: &[AbilitySlot]) -> String {
    abilities
        .iter()
        .rev()
        .map(|slot| slot.ability.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builds the display record for one variant
pub fn build_variant(response: PokemonResponse, ctx: &VariantContext<'_>) -> VariantRecord {
    let images = variant_images(ctx, &response.forms);
    let stats = reversed_stats(&response.stats);
    let (total_stats, highest_stat) = stat_totals(&stats);

    VariantRecord {
        name: response.name,
        height: format_height(response.height),
        weight: format_weight(response.weight),
        types: response.types,
        abilities: ability_names(&response.abilities),
        stats,
        images,
        total_stats,
        highest_stat,
    }
}

/// Species names of an evolution chain grouped by stage
///
/// Stage 0 holds the base species; stage `n` holds every species reachable in
/// `n` evolutions. An empty or malformed chain yields no stages.
pub fn evolution_stages(chain: &Value) -> Vec<Vec<String>> {
    let mut stages: Vec<Vec<String>> = Vec::new();
    collect_stage(chain, 0, &mut stages);
    stages
}

fn collect_stage(link: &Value, depth: usize, stages: &mut Vec<Vec<String>>) {
    let Some(name) = link
        .get("species")
        .and_then(|species| species.get("name"))
        .and_then(Value::as_str)
    else {
        return;
    };

    if stages.len() <= depth {
        stages.push(Vec::new());
    }
    stages[depth].push(name.to_string());

    if let Some(next) = link.get("evolves_to").and_then(Value::as_array) {
        for child in next {
            collect_stage(child, depth + 1, stages);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::api::TypeSlot;
    use serde_json::json;

    fn resource(name: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: String::new(),
        }
    }

    fn flavor(text: &str, language: &str) -> FlavorText {
        FlavorText {
            flavor_text: text.to_string(),
            language: resource(language),
        }
    }

    fn stat(name: &str, base_stat: u32) -> StatSlot {
        StatSlot {
            base_stat,
            stat: resource(name),
        }
    }

    fn ctx<'a>(species_id: u32, species_name: &'a str, single_image: bool) -> VariantContext<'a> {
        VariantContext {
            species_id,
            species_name,
            image_base_url: "https://img.test/images",
            single_image,
        }
    }

    #[test]
    fn test_localized_name_prefers_first_japanese_entry() {
        let names = vec![
            LocalizedName { name: "Bulbasaur".into(), language: resource("en") },
            LocalizedName { name: "フシギダネ".into(), language: resource("ja") },
            LocalizedName { name: "Fushigidane".into(), language: resource("ja") },
        ];
        assert_eq!(localized_name(&names, "bulbasaur"), "フシギダネ");
    }

    #[test]
    fn test_localized_name_falls_back_to_canonical() {
        let names = vec![LocalizedName { name: "Bisasam".into(), language: resource("de") }];
        assert_eq!(localized_name(&names, "bulbasaur"), "bulbasaur");
        assert_eq!(localized_name(&[], "bulbasaur"), "bulbasaur");
    }

    #[test]
    fn test_category_picks_english_or_empty() {
        let genera = vec![
            Genus { genus: "たねポケモン".into(), language: resource("ja") },
            Genus { genus: "Seed Pokémon".into(), language: resource("en") },
        ];
        assert_eq!(category(&genera), "Seed Pokémon");
        assert_eq!(category(&genera[..1]), "");
    }

    #[test]
    fn test_normalize_whitespace_collapses_runs() {
        assert_eq!(
            normalize_whitespace("A strange seed was\nplanted on its\u{c}back at birth."),
            "A strange seed was planted on its back at birth."
        );
        assert_eq!(normalize_whitespace("a\r\n\r\nb\t\tc"), "a b c");
        assert_eq!(normalize_whitespace("\nlead"), " lead");
    }

    #[test]
    fn test_descriptions_are_english_unique_and_single_line() {
        let entries = vec![
            flavor("It can go for days\nwithout eating.", "en"),
            flavor("Il peut rester des jours sans manger.", "fr"),
            flavor("It can go for days without\neating.", "en"),
            flavor("The seed on its back\nfills with nutrients.", "en"),
            flavor("It can go for days without eating.", "en"),
        ];

        let result = descriptions(&entries);

        assert_eq!(
            result,
            vec![
                "It can go for days without eating.".to_string(),
                "The seed on its back fills with nutrients.".to_string(),
            ]
        );
        assert!(result.iter().all(|text| !text.contains('\n')));
    }

    #[test]
    fn test_display_color_remaps_white_only() {
        assert_eq!(display_color("white"), "#ddd");
        assert_eq!(display_color("green"), "green");
        assert_eq!(display_color("White"), "White");
    }

    #[test]
    fn test_unit_formatting() {
        assert_eq!(format_weight(100), "10.00 kg");
        assert_eq!(format_weight(69), "6.90 kg");
        assert_eq!(format_height(7), "70.00 cm");
        assert_eq!(format_height(0), "0.00 cm");
    }

    #[test]
    fn test_form_label_strips_species_prefix() {
        assert_eq!(form_label("vulpix", "vulpix-alola"), "-alola");
        assert_eq!(form_label("vulpix", "vulpix"), "");
        assert_eq!(form_label("mr-mime", "mr-mime-galar"), "-galar");
        assert_eq!(form_label("", "unown-a"), "unown-a");
    }

    #[test]
    fn test_form_label_ignores_species_name_inside_form() {
        assert_eq!(form_label("chu", "pikachu"), "pikachu");
        assert_eq!(form_label("mime", "mr-mime-galar"), "mr-mime-galar");
    }

    #[test]
    fn test_variant_images_reverse_forms() {
        let forms = vec![resource("castform"), resource("castform-sunny"), resource("castform-rainy")];
        let images = variant_images(&ctx(351, "castform", false), &forms);

        let labels: Vec<&str> = images.iter().map(|i| i.form_name.as_str()).collect();
        assert_eq!(labels, vec!["-rainy", "-sunny", ""]);
        assert_eq!(images[0].image, "https://img.test/images/351-rainy.png");
        assert_eq!(images[2].image, "https://img.test/images/351.png");
    }

    #[test]
    fn test_single_image_variant_ignores_forms() {
        let forms = vec![resource("arceus-normal"), resource("arceus-fire")];
        let images = variant_images(&ctx(493, "arceus", true), &forms);

        assert_eq!(
            images,
            vec![FormImage {
                form_name: String::new(),
                image: "https://img.test/images/493.png".to_string(),
            }]
        );
    }

    #[test]
    fn test_stats_reversed_and_totalled() {
        let slots = vec![
            stat("hp", 45),
            stat("attack", 49),
            stat("defense", 49),
            stat("special-attack", 65),
            stat("special-defense", 65),
            stat("speed", 45),
        ];
        let stats = reversed_stats(&slots);

        assert_eq!(stats.first().map(|s| s.name.as_str()), Some("speed"));
        assert_eq!(stats.last().map(|s| s.name.as_str()), Some("hp"));
        assert_eq!(stat_totals(&stats), (318, 65));
    }

    #[test]
    fn test_stat_totals_of_nothing() {
        assert_eq!(stat_totals(&[]), (0, 0));
    }

    #[test]
    fn test_ability_names_reversed() {
        let abilities = vec![
            AbilitySlot { ability: resource("overgrow"), is_hidden: false },
            AbilitySlot { ability: resource("chlorophyll"), is_hidden: true },
        ];
        assert_eq!(ability_names(&abilities), "chlorophyll, overgrow");
        assert_eq!(ability_names(&[]), "");
    }

    #[test]
    fn test_build_variant() {
        let response = PokemonResponse {
            name: "vulpix-alola".into(),
            height: 6,
            weight: 99,
            types: vec![TypeSlot { slot: 1, kind: resource("ice") }],
            abilities: vec![
                AbilitySlot { ability: resource("snow-cloak"), is_hidden: false },
                AbilitySlot { ability: resource("snow-warning"), is_hidden: true },
            ],
            stats: vec![stat("hp", 38), stat("attack", 41), stat("speed", 65)],
            forms: vec![resource("vulpix-alola")],
        };

        let variant = build_variant(response, &ctx(37, "vulpix", false));

        assert_eq!(variant.name, "vulpix-alola");
        assert_eq!(variant.height, "60.00 cm");
        assert_eq!(variant.weight, "9.90 kg");
        assert_eq!(variant.types[0].kind.name, "ice");
        assert_eq!(variant.abilities, "snow-warning, snow-cloak");
        assert_eq!(variant.stats[0].name, "speed");
        assert_eq!(variant.total_stats, 144);
        assert_eq!(variant.highest_stat, 65);
        assert_eq!(variant.images[0].form_name, "-alola");
        assert_eq!(variant.images[0].image, "https://img.test/images/37-alola.png");
    }

    #[test]
    fn test_evolution_stages_branching_chain() {
        let chain = json!({
            "species": {"name": "eevee"},
            "evolves_to": [
                {"species": {"name": "vaporeon"}, "evolves_to": []},
                {"species": {"name": "jolteon"}, "evolves_to": []},
                {"species": {"name": "flareon"}, "evolves_to": []}
            ]
        });

        assert_eq!(
            evolution_stages(&chain),
            vec![
                vec!["eevee".to_string()],
                vec!["vaporeon".to_string(), "jolteon".to_string(), "flareon".to_string()],
            ]
        );
    }

    #[test]
    fn test_evolution_stages_linear_chain() {
        let chain = json!({
            "species": {"name": "bulbasaur"},
            "evolves_to": [{
                "species": {"name": "ivysaur"},
                "evolves_to": [{"species": {"name": "venusaur"}, "evolves_to": []}]
            }]
        });
        let stages = evolution_stages(&chain);
        assert_eq!(stages.len(), 3);
        assert_eq!(stages[2], vec!["venusaur".to_string()]);
    }

    #[test]
    fn test_evolution_stages_of_empty_chain() {
        assert!(evolution_stages(&json!([])).is_empty());
        assert!(evolution_stages(&json!({})).is_empty());
    }
}
