use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use dialoguer::Select;

use crate::app::commands::{list, select, suggest, validate};
use crate::app::config;
use crate::domain::template::OptimizationFlags;
use crate::domain::{AppError, Complexity, Diagnostics, Language, ScoredTemplate, SelectionCriteria};
use crate::services::MergedCatalog;

#[derive(Parser)]
#[command(name = "podsmith")]
#[command(version)]
#[command(about = "Template selection and variable validation for MCP server pods")]
struct Cli {
    /// Extra template catalog roots, highest priority first
    #[arg(long = "templates", value_name = "DIR", global = true)]
    templates: Vec<PathBuf>,

    /// Print catalog scan diagnostics to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List templates in the merged catalog
    #[clap(visible_alias = "ls")]
    List {
        /// Only show templates for this language
        #[arg(short, long)]
        language: Option<String>,

        /// Show the full metadata of one template
        #[arg(long, value_name = "NAME")]
        detail: Option<String>,
    },
    /// Suggest templates for an existing script
    #[clap(visible_alias = "s")]
    Suggest {
        /// Script the generated pod should wrap
        script: PathBuf,

        /// Show every template, not just the scoring ones
        #[arg(long)]
        all: bool,

        /// Choose one of the suggestions interactively
        #[arg(short, long)]
        pick: bool,
    },
    /// Pick the best template for explicit criteria
    Select(SelectArgs),
    /// Validate variable values against a template's schema
    #[clap(visible_alias = "v")]
    Validate {
        /// Template name
        template: String,

        /// JSON or YAML file with variable values
        #[arg(long, value_name = "FILE")]
        values: Option<PathBuf>,

        /// Set a single variable (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
}

#[derive(Args)]
struct SelectArgs {
    /// Target language
    #[arg(short, long)]
    language: Option<String>,

    /// Require TurboRepo support
    #[arg(long)]
    turbo_repo: bool,

    /// Require hot reload support
    #[arg(long)]
    hot_reload: bool,

    /// Require shared dependency support
    #[arg(long = "shared-deps")]
    shared_deps: bool,

    /// Require build caching support
    #[arg(long)]
    build_caching: bool,

    /// Tag the template must advertise (repeatable)
    #[arg(short, long = "tag", value_name = "TAG")]
    tags: Vec<String>,

    /// Desired complexity: basic or advanced
    #[arg(short, long)]
    complexity: Option<String>,

    /// Show the whole ranked list instead of the single best match
    #[arg(long)]
    all: bool,
}

/// Entry point for the `podsmith` binary.
pub fn run() {
    let cli = Cli::parse();

    let result = dispatch(cli);

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn dispatch(cli: Cli) -> Result<i32, AppError> {
    let roots = config::resolve_catalog_roots(&cli.templates)?;
    let mut diagnostics = Diagnostics::default();
    let catalog = MergedCatalog::load(&roots, &mut diagnostics)?;
    if cli.verbose && (diagnostics.has_errors() || diagnostics.has_warnings()) {
        diagnostics.emit();
    }

    match cli.command {
        Commands::List { language, detail } => run_list(&catalog, language, detail),
        Commands::Suggest { script, all, pick } => run_suggest(&catalog, &script, all, pick),
        Commands::Select(args) => run_select(&catalog, args),
        Commands::Validate {
            template,
            values,
            set,
        } => run_validate(&catalog, &template, values.as_deref(), &set),
    }
}

fn run_list(
    catalog: &MergedCatalog,
    language: Option<String>,
    detail: Option<String>,
) -> Result<i32, AppError> {
    if let Some(name) = detail {
        let info = list::execute_detail(catalog, &name)?;
        print_template_detail(&info);
        return Ok(0);
    }

    let language = language.map(parse_language).transpose()?;
    let summaries = list::execute(catalog, language)?;
    if summaries.is_empty() {
        println!("No templates found.");
        return Ok(0);
    }

    println!("Available templates:");
    for summary in &summaries {
        println!(
            "  {} ({}, v{}) - {}",
            summary.name, summary.language, summary.version, summary.description
        );
    }
    Ok(0)
}

fn print_template_detail(detail: &list::TemplateDetail) {
    println!("{}: {}", detail.name, detail.description);
    println!("  Version:  {}", detail.version);
    println!("  Language: {}", detail.language);
    println!("  Location: {}", detail.location);
    if !detail.optimizations.is_empty() {
        println!("  Optimizations: {}", detail.optimizations.join(", "));
    }
    if !detail.tags.is_empty() {
        println!("  Tags: {}", detail.tags.join(", "));
    }

    if !detail.variables.is_empty() {
        println!("\nVariables:");
        for variable in &detail.variables {
            let required = if variable.required { ", required" } else { "" };
            println!("  • {} ({}{})", variable.name, variable.var_type, required);
            if !variable.description.is_empty() {
                println!("    {}", variable.description);
            }
            if let Some(default) = &variable.default {
                println!("    default: {}", default);
            }
            if !variable.constraints.is_empty() {
                println!("    {}", variable.constraints.join("; "));
            }
        }
    }

    if !detail.files.is_empty() {
        println!("\nFiles:");
        for file in &detail.files {
            println!("  • {} -> {}", file.source, file.destination);
        }
    }
}

fn run_suggest(
    catalog: &MergedCatalog,
    script: &Path,
    all: bool,
    pick: bool,
) -> Result<i32, AppError> {
    let suggestion = suggest::execute(catalog, script)?;

    match suggestion.language {
        Some(language) => println!("Detected language: {}", language),
        None => println!(
            "⚠️ Could not detect a language for {}; showing the full catalog.",
            script.display()
        ),
    }

    let visible: Vec<&ScoredTemplate> = if all || suggestion.language.is_none() {
        suggestion.templates.iter().collect()
    } else {
        suggestion
            .templates
            .iter()
            .filter(|entry| entry.score > 0)
            .collect()
    };

    if visible.is_empty() {
        println!("⚠️ No template matched; rerun with --all to see every template.");
        return Ok(1);
    }

    if pick {
        return pick_template(&visible);
    }

    println!("Suggestions:");
    print_ranked(&visible);
    Ok(0)
}

fn pick_template(visible: &[&ScoredTemplate]) -> Result<i32, AppError> {
    let items: Vec<String> = visible
        .iter()
        .map(|entry| format!("{} (score {})", entry.template.name(), entry.score))
        .collect();

    let selection = Select::new()
        .with_prompt("Select template")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to select template: {}", err)))?;

    match selection {
        Some(index) => {
            println!("✅ Selected template: {}", visible[index].template.name());
            Ok(0)
        }
        None => Ok(0),
    }
}

fn run_select(catalog: &MergedCatalog, args: SelectArgs) -> Result<i32, AppError> {
    let criteria = SelectionCriteria {
        language: args.language.map(parse_language).transpose()?,
        optimization: OptimizationFlags {
            turbo_repo: args.turbo_repo,
            hot_reload: args.hot_reload,
            shared_dependencies: args.shared_deps,
            build_caching: args.build_caching,
        },
        tags: args.tags,
        complexity: args.complexity.map(parse_complexity).transpose()?,
    };

    if args.all {
        let ranked = select::execute(catalog, &criteria)?;
        if ranked.is_empty() {
            println!("No templates found.");
            return Ok(0);
        }
        println!("Ranked templates:");
        let entries: Vec<&ScoredTemplate> = ranked.iter().collect();
        print_ranked(&entries);
        return Ok(0);
    }

    match select::execute_best(catalog, &criteria)? {
        Some(best) => {
            println!("✅ Best match: {} (score {})", best.template.name(), best.score);
            for reason in &best.reasons {
                println!("  • {}", reason);
            }
            Ok(0)
        }
        None => {
            println!("⚠️ No template matched the given criteria.");
            Ok(1)
        }
    }
}

fn run_validate(
    catalog: &MergedCatalog,
    template: &str,
    values_file: Option<&Path>,
    assignments: &[String],
) -> Result<i32, AppError> {
    let values = validate::collect_values(values_file, assignments)?;
    let report = validate::execute(catalog, template, &values)?;

    if report.is_valid {
        println!("✅ All variables valid for template '{}'", template);
        Ok(0)
    } else {
        println!(
            "❌ {} validation error(s) for template '{}':",
            report.errors.len(),
            template
        );
        for error in &report.errors {
            println!("  • {}", error.message);
        }
        Ok(1)
    }
}

fn print_ranked(entries: &[&ScoredTemplate]) {
    for (index, entry) in entries.iter().enumerate() {
        println!(
            "  {}. {} (score {})",
            index + 1,
            entry.template.name(),
            entry.score
        );
        for reason in &entry.reasons {
            println!("     • {}", reason);
        }
    }
}

fn parse_language(value: String) -> Result<Language, AppError> {
    Language::from_name(&value).ok_or(AppError::UnknownLanguage(value))
}

fn parse_complexity(value: String) -> Result<Complexity, AppError> {
    Complexity::from_name(&value).ok_or(AppError::UnknownComplexity(value))
}
