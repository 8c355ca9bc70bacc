use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a food catalog file (.json or .csv); defaults to the built-in dishes
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the daily nutrient requirements for a profile
    Needs(ProfileArgs),
    /// Recommend dishes for the next meal
    Recommend {
        #[command(flatten)]
        profile: ProfileArgs,
        #[command(flatten)]
        eaten: EatenArgs,
        /// Number of dishes to return
        #[arg(long)]
        top_n: Option<usize>,
    },
    /// Print the nutrition facts of a dish by name
    Lookup {
        /// Dish label, e.g. as predicted by an image classifier
        label: String,
    },
}

/// Profile flags are taken as raw strings and normalised like any other caller input.
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    /// Age in years
    #[arg(long)]
    pub age: Option<String>,
    /// Male or Female
    #[arg(long)]
    pub gender: Option<String>,
    /// Body weight in kg
    #[arg(long)]
    pub weight: Option<String>,
    /// Height in cm
    #[arg(long)]
    pub height: Option<String>,
    /// Sedentary, Light, Moderate, Active or Very Active
    #[arg(long)]
    pub activity_level: Option<String>,
}

impl ProfileArgs {
    pub fn to_json(&self) -> Value {
        json!({
            "age": self.age,
            "gender": self.gender,
            "weight": self.weight,
            "height": self.height,
            "activityLevel": self.activity_level,
        })
    }
}

#[derive(Args, Debug, Default)]
pub struct EatenArgs {
    /// kcal already eaten today
    #[arg(long)]
    pub eaten_calories: Option<String>,
    /// Protein already eaten today (g)
    #[arg(long)]
    pub eaten_protein: Option<String>,
    /// Fat already eaten today (g)
    #[arg(long)]
    pub eaten_fat: Option<String>,
    /// Carbohydrate already eaten today (g)
    #[arg(long)]
    pub eaten_carbs: Option<String>,
}

impl EatenArgs {
    /// `None` when no eaten-today flag was given.
    pub fn to_json(&self) -> Option<Value> {
        let given = [&self.eaten_calories, &self.eaten_protein, &self.eaten_fat, &self.eaten_carbs];
        if given.iter().all(|v| v.is_none()) {
            return None;
        }
        Some(json!({
            "calories": self.eaten_calories,
            "protein": self.eaten_protein,
            "fat": self.eaten_fat,
            "carbs": self.eaten_carbs,
        }))
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_recommend() {
        let cli = Cli::try_parse_from([
            "meal-recommender",
            "--catalog",
            "foods.csv",
            "recommend",
            "--age",
            "30",
            "--activity-level",
            "Active",
            "--eaten-calories",
            "900",
            "--top-n",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("foods.csv")));
        match cli.command {
            Command::Recommend { profile, eaten, top_n } => {
                assert_eq!(profile.to_json()["age"], "30");
                assert_eq!(profile.to_json()["activityLevel"], "Active");
                assert!(profile.to_json()["weight"].is_null());
                assert_eq!(eaten.to_json().unwrap()["calories"], "900");
                assert_eq!(top_n, Some(3));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_no_eaten_flags() {
        assert!(EatenArgs::default().to_json().is_none());
    }

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::try_parse_from(["meal-recommender", "lookup", "Ca Kho To"]).unwrap();
        assert!(matches!(cli.command, Command::Lookup { label } if label == "Ca Kho To"));
    }
}
