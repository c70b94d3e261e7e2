// ABOUTME: Deterministic offline report synthesis from the user profile
// ABOUTME: Used when the completion endpoint cannot produce a usable reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

//! # Fallback Report
//!
//! The output is a pure function of the profile. Supplements are written as
//! `## Name` sections with `**Label:** value` lines so the structuring engine
//! renders them as cards; narrative sections use titles the engine skips.

use std::fmt::Write;

use crate::models::{ExperienceLevel, UserProfile};

/// One supplement recommendation in the fallback text
struct Recommendation {
    name: &'static str,
    dosage: &'static str,
    timing: &'static str,
    interactions: &'static str,
}

const fn rec(
    name: &'static str,
    dosage: &'static str,
    timing: &'static str,
    interactions: &'static str,
) -> Recommendation {
    Recommendation {
        name,
        dosage,
        timing,
        interactions,
    }
}

/// Supplement stack selected by the profile objective
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjectiveStack {
    MuscleGain,
    FatLoss,
    Performance,
}

impl ObjectiveStack {
    fn for_objective(objective: &str) -> Self {
        match objective.trim().to_lowercase().as_str() {
            "ganar masa muscular" | "gain muscle" | "muscle gain" => Self::MuscleGain,
            "perder peso" | "lose weight" | "weight loss" => Self::FatLoss,
            _ => Self::Performance,
        }
    }

    const fn summary(self) -> &'static str {
        match self {
            Self::MuscleGain => {
                "El objetivo de ganar masa muscular se apoya en un aporte suficiente de proteína y en suplementos con evidencia sólida sobre fuerza e hipertrofia."
            }
            Self::FatLoss => {
                "Para perder peso, la prioridad es mantener la masa muscular en déficit calórico y apoyar la energía durante el entrenamiento."
            }
            Self::Performance => {
                "Para mejorar el rendimiento general se recomiendan suplementos con evidencia sobre potencia, resistencia y recuperación."
            }
        }
    }

    const fn recommendations(self) -> &'static [Recommendation] {
        match self {
            Self::MuscleGain => &MUSCLE_GAIN_STACK,
            Self::FatLoss => &FAT_LOSS_STACK,
            Self::Performance => &PERFORMANCE_STACK,
        }
    }
}

const MUSCLE_GAIN_STACK: [Recommendation; 3] = [
    rec(
        "Proteína Whey",
        "25-30 g por toma",
        "Después del entrenamiento",
        "Ninguna conocida; elige proteína aislada si tienes intolerancia a la lactosa",
    ),
    rec(
        "Creatina Monohidrato",
        "5 g diarios",
        "Cualquier momento del día, siempre a la misma hora",
        "Evitar combinar con alcohol y mantener una buena hidratación",
    ),
    rec(
        "Omega 3",
        "1-2 g diarios de EPA y DHA",
        "Con las comidas principales",
        "Consulta con tu médico si tomas anticoagulantes",
    ),
];

const FAT_LOSS_STACK: [Recommendation; 3] = [
    rec(
        "Proteína Whey",
        "20-25 g por toma",
        "Después del entrenamiento o como tentempié",
        "Ninguna conocida; elige proteína aislada si tienes intolerancia a la lactosa",
    ),
    rec(
        "L-Carnitina",
        "1-2 g diarios",
        "30 minutos antes del entrenamiento",
        "Consulta con tu médico si tomas medicación para el tiroides",
    ),
    rec(
        "Cafeína",
        "3 mg por kg de peso corporal (máximo 400 mg al día)",
        "30-45 minutos antes del entrenamiento",
        "Evitar por la tarde y no combinar con otros estimulantes",
    ),
];

const PERFORMANCE_STACK: [Recommendation; 3] = [
    rec(
        "Creatina Monohidrato",
        "3-5 g diarios",
        "Cualquier momento del día, siempre a la misma hora",
        "Evitar combinar con alcohol y mantener una buena hidratación",
    ),
    rec(
        "Beta-Alanina",
        "3,2-6,4 g diarios repartidos en varias tomas",
        "Antes del entrenamiento",
        "Puede causar un hormigueo inofensivo; reparte la dosis para reducirlo",
    ),
    rec(
        "Cafeína",
        "3 mg por kg de peso corporal (máximo 400 mg al día)",
        "30-60 minutos antes del entrenamiento",
        "Evitar por la tarde y no combinar con otros estimulantes",
    ),
];

/// Sport block selected by keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SportBlock {
    Endurance,
    HighIntensity,
    Generic,
}

const ENDURANCE_KEYWORDS: &[&str] = &[
    "running",
    "correr",
    "maratón",
    "maraton",
    "marathon",
    "ciclismo",
    "cycling",
    "triatlón",
    "triatlon",
    "triathlon",
    "natación",
    "natacion",
    "swimming",
    "trail",
    "remo",
    "rowing",
];

const HIGH_INTENSITY_KEYWORDS: &[&str] = &[
    "crossfit",
    "hiit",
    "funcional",
    "functional",
    "boxeo",
    "boxing",
    "mma",
    "artes marciales",
    "circuito",
];

impl SportBlock {
    fn for_sport(sport: &str) -> Self {
        let lowered = sport.to_lowercase();
        if ENDURANCE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            Self::Endurance
        } else if HIGH_INTENSITY_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            Self::HighIntensity
        } else {
            Self::Generic
        }
    }

    fn intro(self, sport: &str) -> String {
        match self {
            Self::Endurance => format!(
                "En deportes de resistencia como {sport} la reposición de electrolitos y carbohidratos durante las sesiones largas marca la diferencia."
            ),
            Self::HighIntensity => format!(
                "En disciplinas de alta intensidad como {sport} conviene limitar el catabolismo muscular y acelerar la recuperación entre sesiones."
            ),
            Self::Generic => format!(
                "Para {sport} se recomienda cubrir primero las bases nutricionales que sostienen el entrenamiento regular."
            ),
        }
    }

    const fn recommendations(self) -> &'static [Recommendation] {
        match self {
            Self::Endurance => &ENDURANCE_BLOCK,
            Self::HighIntensity => &HIGH_INTENSITY_BLOCK,
            Self::Generic => &GENERIC_BLOCK,
        }
    }
}

const ENDURANCE_BLOCK: [Recommendation; 2] = [
    rec(
        "Electrolitos",
        "500-700 mg de sodio por litro de agua",
        "Durante sesiones de más de 60 minutos",
        "Precaución si sigues una dieta baja en sodio por hipertensión",
    ),
    rec(
        "Geles de carbohidratos",
        "30-60 g de carbohidratos por hora",
        "Durante el ejercicio prolongado",
        "Pruébalos en entrenamientos antes de usarlos en competición",
    ),
];

const HIGH_INTENSITY_BLOCK: [Recommendation; 2] = [
    rec(
        "Aminoácidos esenciales (EAA)",
        "10 g por toma",
        "Durante o después del entrenamiento",
        "Ninguna conocida",
    ),
    rec(
        "L-Glutamina",
        "5 g diarios",
        "Después del entrenamiento",
        "Consulta con tu médico si tienes enfermedad renal o hepática",
    ),
];

const GENERIC_BLOCK: [Recommendation; 2] = [
    rec(
        "Multivitamínico",
        "1 dosis diaria",
        "Con el desayuno",
        "Evitar duplicar vitaminas si ya tomas otros suplementos",
    ),
    rec(
        "Magnesio",
        "300-400 mg diarios",
        "Antes de dormir",
        "Separar al menos 2 horas de antibióticos",
    ),
];

const fn experience_note(level: ExperienceLevel) -> &'static str {
    match level {
        ExperienceLevel::Beginner => {
            "Como principiante, empieza con uno o dos suplementos básicos y evalúa tu tolerancia durante dos semanas antes de añadir otros."
        }
        ExperienceLevel::Intermediate => {
            "Con tu experiencia puedes combinar los suplementos del plan, ajustando las dosis a tu volumen de entrenamiento semanal."
        }
        ExperienceLevel::Advanced => {
            "Con un nivel avanzado, periodiza la suplementación según tus fases de carga y competición y registra la respuesta a cada producto."
        }
    }
}

const SAFETY_NOTES: &[&str] = &[
    "Este informe es orientativo y no sustituye el consejo de un profesional de la salud.",
    "Consulta a un médico o nutricionista antes de empezar cualquier suplemento, especialmente si tienes condiciones médicas o tomas medicación.",
    "Respeta las dosis indicadas y elige productos con certificación de calidad.",
];

const EXAMPLE_PRODUCTS: &[&str] = &[
    "Proteína whey: Optimum Nutrition Gold Standard 100% Whey",
    "Creatina: Creatina monohidrato Creapure",
    "Omega 3: aceite de pescado con certificación IFOS",
    "Electrolitos: sales minerales en comprimidos efervescentes",
    "Multivitamínico: fórmula diaria completa",
];

/// Build the offline report for `profile`
#[must_use]
pub fn synthesize_fallback_report(profile: &UserProfile) -> String {
    let stack = ObjectiveStack::for_objective(&profile.objective);
    let sport_block = SportBlock::for_sport(&profile.sport);

    let mut out = String::with_capacity(4096);
    out.push_str("# Recomendaciones básicas de suplementación\n\n");

    push_profile(&mut out, profile);

    out.push_str("## Introducción\n");
    out.push_str(
        "Este plan se ha generado sin conexión a partir de tu perfil. Revísalo con un profesional antes de seguirlo.\n",
    );
    out.push_str(stack.summary());
    out.push_str("\n\n");

    for recommendation in stack.recommendations() {
        push_recommendation(&mut out, recommendation);
    }

    let _ = write!(
        out,
        "## Suplementos específicos para {}\n{}\n\n",
        profile.sport,
        sport_block.intro(&profile.sport)
    );
    for recommendation in sport_block.recommendations() {
        push_recommendation(&mut out, recommendation);
    }

    let _ = write!(
        out,
        "## Según tu nivel de experiencia\n{}\n\n",
        experience_note(profile.experience)
    );

    push_additional_notes(&mut out, profile);

    out.push_str("## Consideraciones de seguridad\n");
    push_list(&mut out, SAFETY_NOTES.iter().copied());
    out.push('\n');

    out.push_str("## Productos de ejemplo\n");
    push_list(&mut out, EXAMPLE_PRODUCTS.iter().copied());

    out
}

fn push_profile(out: &mut String, profile: &UserProfile) {
    out.push_str("## Tu perfil\n");
    let _ = writeln!(out, "- **Edad:** {} años", profile.age);
    let _ = writeln!(out, "- **Género:** {}", profile.gender.as_str());
    let _ = writeln!(out, "- **Peso:** {} kg", profile.weight_kg);
    let _ = writeln!(out, "- **Altura:** {} cm", profile.height_cm);
    let _ = writeln!(out, "- **Objetivo:** {}", profile.objective);
    let _ = writeln!(out, "- **Deporte:** {}", profile.sport);
    let _ = writeln!(
        out,
        "- **Nivel de experiencia:** {}",
        profile.experience.as_str()
    );
    let _ = writeln!(
        out,
        "- **Frecuencia de entrenamiento:** {}",
        profile.training_frequency.as_str()
    );
    out.push('\n');
}

fn push_recommendation(out: &mut String, recommendation: &Recommendation) {
    let _ = write!(
        out,
        "## {}\n- **Dosis recomendada:** {}\n- **Momento de toma:** {}\n- **Interacciones:** {}\n\n",
        recommendation.name, recommendation.dosage, recommendation.timing, recommendation.interactions
    );
}

fn push_additional_notes(out: &mut String, profile: &UserProfile) {
    let mut notes = Vec::new();
    if let Some(allergies) = joined(&profile.allergies) {
        notes.push(format!(
            "Alergias declaradas: {allergies}. Revisa la etiqueta de cada producto."
        ));
    }
    if let Some(conditions) = joined(&profile.medical_conditions) {
        notes.push(format!(
            "Condiciones médicas: {conditions}. Consulta a tu médico antes de empezar cualquier suplemento."
        ));
    }
    if let Some(current) = joined(&profile.current_supplements) {
        notes.push(format!(
            "Suplementos actuales: {current}. Evita duplicar ingredientes con el plan propuesto."
        ));
    }
    if notes.is_empty() {
        return;
    }
    out.push_str("## Notas adicionales\n");
    push_list(out, notes.iter().map(String::as_str));
    out.push('\n');
}

fn push_list<'a>(out: &mut String, items: impl Iterator<Item = &'a str>) {
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}

fn joined(values: &[String]) -> Option<String> {
    let present: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();
    (!present.is_empty()).then(|| present.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_lookup() {
        assert_eq!(
            ObjectiveStack::for_objective("  Ganar masa muscular "),
            ObjectiveStack::MuscleGain
        );
        assert_eq!(
            ObjectiveStack::for_objective("perder peso"),
            ObjectiveStack::FatLoss
        );
        assert_eq!(ObjectiveStack::for_objective(""), ObjectiveStack::Performance);
        assert_eq!(
            ObjectiveStack::for_objective("salud general"),
            ObjectiveStack::Performance
        );
    }

    #[test]
    fn test_sport_lookup() {
        assert_eq!(SportBlock::for_sport("Trail Running"), SportBlock::Endurance);
        assert_eq!(SportBlock::for_sport("CrossFit"), SportBlock::HighIntensity);
        assert_eq!(SportBlock::for_sport("pádel"), SportBlock::Generic);
        assert!(SportBlock::Generic.intro("pádel").contains("pádel"));
    }
}
