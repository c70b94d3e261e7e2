// ABOUTME: Visual signature assignment mapping supplement names to stable color buckets
// ABOUTME: Known ingredients match by keyword; unknown names hash into a fixed palette
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

use advisor_core::models::{IngredientBucket, VisualSignature, PALETTE_COLORS};

/// Keywords per bucket, checked in `IngredientBucket::ALL` order
const fn bucket_keywords(bucket: IngredientBucket) -> &'static [&'static str] {
    match bucket {
        IngredientBucket::Protein => &[
            "proteína", "proteina", "protein", "whey", "caseína", "caseina", "casein",
        ],
        IngredientBucket::Creatine => &["creatina", "creatine"],
        IngredientBucket::Omega => &["omega", "aceite de pescado", "fish oil"],
        IngredientBucket::AminoAcids => &[
            "bcaa", "eaa", "aminoácido", "aminoacido", "amino", "leucina", "leucine",
        ],
        IngredientBucket::Electrolytes => &[
            "electrolito", "electrolyte", "sodio", "sodium", "potasio", "potassium", "isotónic",
            "isotonic",
        ],
        IngredientBucket::Stimulant => &[
            "cafeína", "cafeina", "caffeine", "pre-entreno", "preentreno", "pre-workout",
            "estimulante", "guaraná", "guarana",
        ],
        IngredientBucket::Vitamin => &["vitamina", "vitamin", "multivitam"],
        IngredientBucket::Mineral => &[
            "magnesio", "magnesium", "zinc", "zma", "hierro", "iron", "calcio", "calcium",
            "mineral",
        ],
        IngredientBucket::Glutamine => &["glutamina", "glutamine"],
        IngredientBucket::Carbohydrate => &[
            "carbohidrato", "carbohydrate", "carbs", "maltodextrin", "dextrosa", "dextrose",
            "ciclodextrina", "gel",
        ],
        IngredientBucket::Carnitine => &["carnitina", "carnitine"],
        IngredientBucket::Theanine => &["teanina", "theanine"],
        IngredientBucket::BetaAlanine => &[
            "beta-alanina", "beta alanina", "betaalanina", "beta-alanine", "beta alanine",
        ],
    }
}

/// 31-multiplier string hash over UTF-16 code units with 32-bit wrapping.
///
/// Defined independently of `std::hash` so the result is identical across
/// runs, platforms, and compiler versions.
#[must_use]
pub fn stable_hash(value: &str) -> i32 {
    value.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Rendering signature for a supplement name
#[must_use]
pub fn visual_signature(name: &str) -> VisualSignature {
    let lowered = name.to_lowercase();
    IngredientBucket::ALL
        .into_iter()
        .find(|bucket| {
            bucket_keywords(*bucket)
                .iter()
                .any(|keyword| lowered.contains(keyword))
        })
        .map_or_else(
            || {
                let slot = stable_hash(&lowered).unsigned_abs() % PALETTE_COLORS.len() as u32;
                VisualSignature::Palette(slot as u8)
            },
            VisualSignature::Ingredient,
        )
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_hash_known_values() {
        assert_eq!(stable_hash(""), 0);
        assert_eq!(stable_hash("a"), 97);
        assert_eq!(stable_hash("ab"), 97 * 31 + 98);
        // wraps like 32-bit integer arithmetic
        assert_eq!(stable_hash("ashwagandha"), stable_hash("ashwagandha"));
    }

    #[test]
    fn test_known_buckets_in_precedence_order() {
        assert_eq!(
            visual_signature("Proteína Whey"),
            VisualSignature::Ingredient(IngredientBucket::Protein)
        );
        assert_eq!(
            visual_signature("Creatina Monohidrato"),
            VisualSignature::Ingredient(IngredientBucket::Creatine)
        );
        assert_eq!(
            visual_signature("L-Glutamina"),
            VisualSignature::Ingredient(IngredientBucket::Glutamine)
        );
        assert_eq!(
            visual_signature("Multivitamínico"),
            VisualSignature::Ingredient(IngredientBucket::Vitamin)
        );
        assert_eq!(
            visual_signature("Cafeína + L-Teanina"),
            VisualSignature::Ingredient(IngredientBucket::Stimulant)
        );
        assert_eq!(
            visual_signature("Beta-Alanina"),
            VisualSignature::Ingredient(IngredientBucket::BetaAlanine)
        );
    }

    #[test]
    fn test_unknown_names_use_stable_palette_slot() {
        let first = visual_signature("Ashwagandha");
        let second = visual_signature("ASHWAGANDHA");
        assert_eq!(first, second);
        match first {
            VisualSignature::Palette(slot) => assert!(usize::from(slot) < PALETTE_COLORS.len()),
            VisualSignature::Ingredient(bucket) => panic!("unexpected bucket {bucket:?}"),
        }
    }
}
