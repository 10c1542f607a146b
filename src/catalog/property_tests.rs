//! Property-Based Tests for Catalog Derivation
//!
//! Uses proptest to verify the generation mapping, URL id extraction,
//! and lineage walks across arbitrary chain shapes.

use proptest::prelude::*;

use crate::catalog::extract::{evolution_steps, generation_number, id_from_url, lineage_names};
use crate::models::upstream::{ChainLink, NamedResource};

const ROMAN_NUMERALS: [(&str, u32); 9] = [
    ("i", 1),
    ("ii", 2),
    ("iii", 3),
    ("iv", 4),
    ("v", 5),
    ("vi", 6),
    ("vii", 7),
    ("viii", 8),
    ("ix", 9),
];

// == Helpers ==

fn species_ref(name: &str, id: u32) -> NamedResource {
    NamedResource {
        name: name.to_string(),
        url: format!("https://api.example/pokemon-species/{}/", id),
    }
}

/// Linear chain over the given names, ids assigned by position.
fn linear_chain(names: &[String]) -> ChainLink {
    let mut node: Option<ChainLink> = None;
    for (index, name) in names.iter().enumerate().rev() {
        node = Some(ChainLink {
            species: species_ref(name, index as u32 + 1),
            evolves_to: node.take().into_iter().collect(),
        });
    }
    node.expect("names must not be empty")
}

/// Linear chain that grows an extra dead-end branch at every non-leaf
/// node. Decoy names carry a digit so they cannot collide with the
/// alphabetic path names.
fn chain_with_decoy_branches(names: &[String]) -> ChainLink {
    let mut node: Option<ChainLink> = None;
    for (index, name) in names.iter().enumerate().rev() {
        let evolves_to = match node.take() {
            Some(next) => vec![
                next,
                ChainLink {
                    species: species_ref(&format!("{}9", name), 1000 + index as u32),
                    evolves_to: vec![],
                },
            ],
            None => vec![],
        };
        node = Some(ChainLink {
            species: species_ref(name, index as u32 + 1),
            evolves_to,
        });
    }
    node.expect("names must not be empty")
}

fn unique_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{3,10}", 1..6)
        .prop_map(|set| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every known roman numeral maps to its number.
    #[test]
    fn prop_known_generations_map(index in 0usize..9) {
        let (roman, number) = ROMAN_NUMERALS[index];
        prop_assert_eq!(generation_number(&format!("generation-{}", roman)), number);
    }

    // Any other generation suffix maps to 0.
    #[test]
    fn prop_unknown_generations_are_zero(suffix in "[a-z]{1,10}") {
        prop_assume!(!ROMAN_NUMERALS.iter().any(|(roman, _)| *roman == suffix));
        prop_assert_eq!(generation_number(&format!("generation-{}", suffix)), 0);
    }

    // The trailing numeric segment survives any base path and an
    // optional trailing slash.
    #[test]
    fn prop_id_extracted_from_any_url(
        segments in prop::collection::vec("[a-z-]{1,12}", 1..4),
        id in any::<u32>(),
        trailing_slash in any::<bool>()
    ) {
        let mut url = format!("https://api.example/{}/{}", segments.join("/"), id);
        if trailing_slash {
            url.push('/');
        }
        prop_assert_eq!(id_from_url(&url), Some(id));
    }

    // A linear chain yields exactly its names in order, and the steps
    // carry the ids embedded in the species URLs.
    #[test]
    fn prop_linear_lineage_in_order(names in unique_names()) {
        let chain = linear_chain(&names);

        prop_assert_eq!(lineage_names(&chain), names.clone());

        let steps = evolution_steps(&chain).unwrap();
        prop_assert_eq!(steps.len(), names.len());
        for (index, step) in steps.iter().enumerate() {
            prop_assert_eq!(&step.name, &names[index]);
            prop_assert_eq!(step.id, index as u32 + 1);
        }
    }

    // Dead-end side branches never leak into the walked lineage.
    #[test]
    fn prop_branches_truncated_to_first(names in unique_names()) {
        let chain = chain_with_decoy_branches(&names);
        prop_assert_eq!(lineage_names(&chain), names);
    }

    // Appending an already-visited species ends the walk instead of
    // repeating names.
    #[test]
    fn prop_repeated_species_terminates(names in unique_names()) {
        let mut looped = names.clone();
        looped.push(names[0].clone());

        let chain = linear_chain(&looped);
        prop_assert_eq!(lineage_names(&chain), names);
    }
}
