use std::fs::File;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use study_compass::advisor::{
    match_percentages, EducationLevel, StudyField, Subject, SuggestionEngine,
};
use study_compass::budget;
use study_compass::config::AppConfig;
use study_compass::directory::{
    import, seed, CatalogError, InstructionLanguage, SearchFilter, SortKey, UniversityCatalog,
    UniversityId,
};
use study_compass::error::AppError;
use study_compass::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "study-compass",
    about = "Explore European universities: field suggestions, catalog search, and budget checks",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank recommended fields of study for a set of subjects
    Suggest(SuggestArgs),
    /// Search the university catalog
    Search(SearchArgs),
    /// Compare universities side by side
    Compare(CompareArgs),
    /// Check whether a monthly budget covers a university
    Budget(BudgetArgs),
}

#[derive(Args, Debug)]
struct SuggestArgs {
    /// Comma-separated subject labels; unknown labels are ignored
    #[arg(long, value_delimiter = ',', required = true)]
    subjects: Vec<String>,
    /// Education level: 10th, 12th, bachelor, or master
    #[arg(long, value_parser = parse_level)]
    level: EducationLevel,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Restrict to a country (case-insensitive)
    #[arg(long)]
    country: Option<String>,
    /// Restrict to universities offering this field, e.g. "Sciences"
    #[arg(long, value_parser = parse_field)]
    field: Option<StudyField>,
    /// Restrict to universities teaching in this language
    #[arg(long, value_parser = parse_language)]
    language: Option<InstructionLanguage>,
    /// Upper bound on tuition in EUR per year
    #[arg(long)]
    max_tuition: Option<u32>,
    /// Result order: name, tuition, or living-cost
    #[arg(long, value_parser = parse_sort, default_value = "name")]
    sort: SortKey,
    /// Catalog CSV to use instead of the built-in data
    #[arg(long)]
    catalog_csv: Option<PathBuf>,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Comma-separated university ids, at least two
    #[arg(long, value_delimiter = ',', num_args = 2..)]
    ids: Vec<String>,
    /// Catalog CSV to use instead of the built-in data
    #[arg(long)]
    catalog_csv: Option<PathBuf>,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct BudgetArgs {
    /// University id, e.g. "tum"
    #[arg(long)]
    university: String,
    /// Available budget in EUR per month
    #[arg(long)]
    monthly_budget: u32,
    /// Catalog CSV to use instead of the built-in data
    #[arg(long)]
    catalog_csv: Option<PathBuf>,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, config.environment)?;

    match cli.command {
        Command::Suggest(args) => run_suggest(args),
        Command::Search(args) => run_search(args, &config),
        Command::Compare(args) => run_compare(args, &config),
        Command::Budget(args) => run_budget(args, &config),
    }
}

fn load_catalog(
    override_csv: Option<PathBuf>,
    config: &AppConfig,
) -> Result<UniversityCatalog, AppError> {
    let path = override_csv.or_else(|| config.catalog_csv.clone());
    let catalog = match path {
        Some(path) => {
            let file = File::open(&path)?;
            let catalog = import::load_catalog(file)?;
            info!(path = %path.display(), universities = catalog.len(), "catalog loaded");
            catalog
        }
        None => seed::builtin_catalog(),
    };
    Ok(catalog)
}

#[derive(Debug, Serialize)]
struct SuggestionRow {
    rank: usize,
    field: &'static str,
    match_percent: u8,
    score: f64,
    matched_subjects: Vec<&'static str>,
    reasoning: String,
}

#[derive(Debug, Serialize)]
struct SuggestReport {
    level: &'static str,
    level_weight: f64,
    suggestions: Vec<SuggestionRow>,
}

fn run_suggest(args: SuggestArgs) -> Result<(), AppError> {
    let mut selected = Vec::new();
    for label in &args.subjects {
        match Subject::parse_label(label) {
            Some(subject) => selected.push(subject),
            None => warn!(label = label.as_str(), "ignoring unknown subject"),
        }
    }

    let engine = SuggestionEngine::new();
    let suggestions = engine.suggest(&selected, args.level);
    let percentages = match_percentages(&suggestions);

    let rows: Vec<SuggestionRow> = suggestions
        .iter()
        .zip(percentages.iter())
        .enumerate()
        .map(|(position, (suggestion, percent))| SuggestionRow {
            rank: position + 1,
            field: suggestion.field.label(),
            match_percent: *percent,
            score: suggestion.score,
            matched_subjects: suggestion
                .matched_subjects
                .iter()
                .map(|subject| subject.label())
                .collect(),
            reasoning: suggestion.reasoning.clone(),
        })
        .collect();

    if args.json {
        let report = SuggestReport {
            level: args.level.label(),
            level_weight: args.level.weight(),
            suggestions: rows,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No matching fields for the given subjects.");
        return Ok(());
    }

    println!("Recommended fields for level {}:", args.level.label());
    for row in &rows {
        println!("  {}. {} ({}% match)", row.rank, row.field, row.match_percent);
        println!("     {}", row.reasoning);
    }
    Ok(())
}

fn run_search(args: SearchArgs, config: &AppConfig) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog_csv, config)?;
    let filter = SearchFilter {
        country: args.country,
        field: args.field,
        language: args.language,
        max_tuition_eur: args.max_tuition,
    };

    let results = catalog.search(&filter, args.sort);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No universities match the given filters.");
        return Ok(());
    }

    println!("{} universities match:", results.len());
    for university in results {
        println!(
            "  {:<12} {:<36} {}, {}  tuition {} EUR/yr, living {} EUR/mo",
            university.id.0,
            university.name,
            university.city,
            university.country,
            university.tuition_eur_per_year,
            university.living_cost_eur_per_month,
        );
    }
    Ok(())
}

fn run_compare(args: CompareArgs, config: &AppConfig) -> Result<(), AppError> {
    if args.ids.len() > config.max_compare {
        return Err(AppError::Usage(format!(
            "cannot compare more than {} universities at once",
            config.max_compare
        )));
    }

    let catalog = load_catalog(args.catalog_csv, config)?;
    let ids: Vec<UniversityId> = args.ids.into_iter().map(UniversityId).collect();
    let view = catalog.compare(&ids)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("Comparing {} universities:", view.entries.len());
    for entry in &view.entries {
        println!(
            "  {:<12} {:<36} {}, {}  tuition {} EUR/yr, living {} EUR/mo ({})",
            entry.id.0,
            entry.name,
            entry.city,
            entry.country,
            entry.tuition_eur_per_year,
            entry.living_cost_eur_per_month,
            entry.funding.label(),
        );
    }
    println!("Cheapest tuition: {}", view.cheapest_tuition.0);
    println!("Lowest living cost: {}", view.lowest_living_cost.0);
    if !view.shared_fields.is_empty() {
        let labels: Vec<&str> = view.shared_fields.iter().map(|field| field.label()).collect();
        println!("Offered everywhere: {}", labels.join(", "));
    }
    Ok(())
}

fn run_budget(args: BudgetArgs, config: &AppConfig) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog_csv, config)?;
    let id = UniversityId(args.university);
    let university = catalog
        .get(&id)
        .ok_or_else(|| AppError::Catalog(CatalogError::UnknownUniversity(id.0.clone())))?;

    let assessment = budget::assess(university, args.monthly_budget);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
        return Ok(());
    }

    println!("Budget check for {}:", university.name);
    println!("  living costs   {:>6} EUR/mo", assessment.monthly_living_eur);
    println!("  tuition share  {:>6} EUR/mo", assessment.monthly_tuition_eur);
    println!("  total          {:>6} EUR/mo", assessment.total_monthly_eur);
    println!("  budget         {:>6} EUR/mo", assessment.monthly_budget_eur);
    println!("  margin         {:>6} EUR/mo", assessment.margin_eur);
    println!("  verdict: {}", assessment.verdict.label());
    Ok(())
}

fn parse_level(value: &str) -> Result<EducationLevel, String> {
    EducationLevel::parse_label(value)
        .ok_or_else(|| format!("unknown education level '{value}' (expected 10th, 12th, bachelor, or master)"))
}

fn parse_field(value: &str) -> Result<StudyField, String> {
    StudyField::parse_label(value).ok_or_else(|| format!("unknown study field '{value}'"))
}

fn parse_language(value: &str) -> Result<InstructionLanguage, String> {
    InstructionLanguage::parse_label(value)
        .ok_or_else(|| format!("unknown instruction language '{value}'"))
}

fn parse_sort(value: &str) -> Result<SortKey, String> {
    SortKey::parse_label(value)
        .ok_or_else(|| format!("unknown sort key '{value}' (expected name, tuition, or living-cost)"))
}

