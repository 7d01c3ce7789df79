//! mason's main application entry point and orchestration logic.
//! Handles command-line argument parsing and dispatches subcommands to the
//! parser, generator and template catalog.

use std::path::PathBuf;

use mason::{
    cli::{get_args, Args, Command},
    error::{default_error_handler, Error, Result},
    generator::{Generator, Options},
    logger::init_logger,
    parser, renderer,
    templates::TemplateManager,
    ui, validators,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let Args { verbose, dry_run, templates_dir, command } = args;

    match command {
        Command::Init { file, output, overwrite } => {
            cmd_init(file, output, overwrite, verbose, dry_run)
        }
        Command::Create { template, name, output, overwrite } => {
            cmd_create(template, name, output, overwrite, verbose, dry_run, templates_dir)
        }
        Command::List { category } => cmd_list(category, templates_dir),
        Command::Show { template } => cmd_show(template, templates_dir),
    }
}

fn load_manager(templates_dir: Option<PathBuf>) -> Result<TemplateManager> {
    let mut manager = match templates_dir {
        Some(dir) => TemplateManager::new(dir),
        None => TemplateManager::with_default_dir(),
    };
    manager.load()?;
    Ok(manager)
}

/// Parses a markdown file and materializes the recovered structure.
fn cmd_init(
    file: PathBuf,
    output: Option<PathBuf>,
    overwrite: bool,
    verbose: bool,
    dry_run: bool,
) -> Result<()> {
    ui::info(&format!("Parsing project structure from '{}'", file.display()));
    let tree = parser::parse_file(&file)?;

    if verbose {
        ui::info("Project structure:");
        print!("{}", renderer::render(&tree, false));
    }

    ui::info("Generating project structure...");
    let destination = output.unwrap_or_else(|| PathBuf::from("."));
    let options = Options { dry_run, overwrite, verbose, progress: None };
    let stats = Generator::new(options).generate(&tree, &destination)?;

    if dry_run {
        ui::info("Dry run: nothing was written");
    }
    ui::summary(&stats);

    Ok(())
}

/// Creates a project from a catalog template.
fn cmd_create(
    template: String,
    name: String,
    output: Option<PathBuf>,
    overwrite: bool,
    verbose: bool,
    dry_run: bool,
    templates_dir: Option<PathBuf>,
) -> Result<()> {
    validators::validate_project_name(&name)?;
    validators::validate_template_name(&template)?;

    let manager = load_manager(templates_dir)?;

    if !manager.contains(&template) {
        ui::info("Available templates:");
        for available in manager.list() {
            println!("  - {available}");
        }
        return Err(Error::TemplateNotFound(template));
    }

    ui::info(&format!("Creating project '{}' from template '{}'", name, template));

    let destination = output.unwrap_or_else(|| PathBuf::from(&name));
    let options = Options { dry_run, overwrite, verbose, progress: None };
    let stats = manager.generate_from_template(&template, &name, &destination, options)?;

    if dry_run {
        ui::info("Dry run: nothing was written");
    }
    ui::summary(&stats);

    Ok(())
}

/// Lists templates, grouped by category or filtered to one.
fn cmd_list(category: Option<String>, templates_dir: Option<PathBuf>) -> Result<()> {
    let manager = load_manager(templates_dir)?;

    match category {
        Some(category) => {
            let templates = manager.list_in_category(&category);
            if templates.is_empty() {
                return Err(Error::InvalidInput(format!(
                    "no templates found in category: {category}"
                )));
            }
            ui::template_list(&templates);
        }
        None => {
            for category in manager.categories() {
                ui::category_header(&category);
                ui::template_list(&manager.list_in_category(&category));
                println!();
            }
        }
    }

    Ok(())
}

fn cmd_show(template: String, templates_dir: Option<PathBuf>) -> Result<()> {
    let manager = load_manager(templates_dir)?;
    let template = manager.get(&template)?;

    ui::template_details(template);

    Ok(())
}
