// ABOUTME: Offline command-line calculator for nutrition targets
// ABOUTME: Prints calorie, BMI, and macro targets for a profile given as flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Activity as a multiplier
//! diet-cli --weight 70 --height 175 --age 30 --gender male --activity 1.2
//!
//! # Activity as a named tier, lower-carb split, JSON output
//! diet-cli --weight 60 --height 160 --age 25 --gender female \
//!     --activity lightly_active --goal lose --split lower_carb --json
//! ```

use anyhow::{anyhow, Result};
use clap::Parser;
use diet_to_discipline::{
    config::{MacroSplitPreset, NutritionConfig},
    intelligence::{compute_targets, derive_insights, ActivityLevel},
    logging::LoggingConfig,
    models::{Gender, Goal, Profile},
    routes::profile::TargetsPreview,
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "diet-cli",
    about = "Compute daily calorie, BMI, and macro targets",
    long_about = "Computes BMR (Mifflin-St Jeor), TDEE, goal-adjusted calories, BMI, and macronutrient grams for a profile."
)]
struct Cli {
    /// Body weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Height in centimetres
    #[arg(long)]
    height: f64,

    /// Age in whole years
    #[arg(long)]
    age: u32,

    /// Gender ("male" selects the male equation, anything else the female one)
    #[arg(long)]
    gender: String,

    /// Activity multiplier (e.g. 1.55) or tier name (sedentary, lightly_active, ...)
    #[arg(long)]
    activity: String,

    /// Goal: lose, maintain, or gain
    #[arg(long, default_value = "maintain")]
    goal: String,

    /// Macro split preset: standard or lower_carb
    #[arg(long, default_value_t = MacroSplitPreset::Standard)]
    split: MacroSplitPreset,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    LoggingConfig::for_cli().init()?;

    let config = NutritionConfig::with_preset(cli.split);
    let profile = Profile {
        weight_kg: cli.weight,
        height_cm: cli.height,
        age: cli.age,
        gender: Gender::from_str_lossy(&cli.gender),
        activity_factor: parse_activity(&cli.activity, &config)?,
        goal: Goal::from_str_lossy(&cli.goal),
    };
    debug!(?profile, split = %cli.split, "Computing targets");

    let targets = compute_targets(&profile, &config)?;
    let preview = TargetsPreview {
        metrics: profile,
        targets,
        insights: derive_insights(&profile, &targets),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
    } else {
        print_report(&preview, cli.split);
    }

    Ok(())
}

fn parse_activity(value: &str, config: &NutritionConfig) -> Result<f64> {
    if let Ok(factor) = value.trim().parse::<f64>() {
        return Ok(factor);
    }
    value
        .parse::<ActivityLevel>()
        .map(|level| level.factor(&config.activity_factors))
        .map_err(|e| anyhow!("Invalid --activity: {e}"))
}

fn print_report(preview: &TargetsPreview, split: MacroSplitPreset) {
    let TargetsPreview {
        metrics,
        targets,
        insights,
    } = preview;

    println!(
        "Profile: {} kg, {} cm, {} y, {}, activity x{}, goal {}",
        metrics.weight_kg,
        metrics.height_cm,
        metrics.age,
        metrics.gender,
        metrics.activity_factor,
        metrics.goal,
    );
    println!("BMR:            {} kcal/day", targets.bmr);
    println!("TDEE:           {} kcal/day", targets.tdee);
    println!("Daily calories: {} kcal/day", targets.daily_calories);
    println!(
        "BMI:            {:.1} ({})",
        targets.bmi,
        insights.bmi_category.label()
    );
    println!("Macros ({split}):");
    println!("  Carbs:   {} g", targets.macros.carbs_grams);
    println!("  Protein: {} g", targets.macros.protein_grams);
    println!("  Fats:    {} g", targets.macros.fats_grams);
    println!("Target weight:  {} kg", insights.target_weight_kg);
    println!(
        "Meal plan:      {}-{} kcal",
        insights.meal_plan_calories.min, insights.meal_plan_calories.max
    );
}
