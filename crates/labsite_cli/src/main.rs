//! Command-line front end over `labsite_core`.
//!
//! # Responsibility
//! - Load the staff directory from a JSON file or a SQLite store.
//! - Render staff pages, project links and slugs as plain text.
//! - Import a JSON staff listing into a SQLite store.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use labsite_core::db::{open_db, open_db_read_only};
use labsite_core::service::staff_page::staff_href;
use labsite_core::{
    default_log_level, format_duration, init_logging, slugify, CollectionKind, CollectionRecord,
    CollectionView, Facet, SqliteStaffDirectory, StaffDirectory, StaffPage, StaticStaffDirectory,
    STAFF_NOT_FOUND_MESSAGE,
};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "labsite: research lab staff pages", long_about = None)]
struct Cli {
    /// Staff directory as a JSON file.
    #[arg(long, global = true, conflicts_with = "db")]
    data: Option<PathBuf>,

    /// Staff directory as a SQLite database.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off without it.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List staff members.
    Staff,
    /// Show one staff page with an optionally filtered collection.
    Show(ShowArgs),
    /// Resolve a project link of one staff member.
    Project {
        staff: String,
        project: String,
    },
    /// Print the URL slug of a title.
    Slug { title: String },
    /// Copy a JSON staff listing into the `--db` store.
    Import { json: PathBuf },
}

#[derive(Args, Debug)]
struct ShowArgs {
    slug: String,

    /// Collection to display.
    #[arg(long, default_value = "publications")]
    tab: CollectionKind,

    /// Case-insensitive free-text query.
    #[arg(long)]
    query: Option<String>,

    #[arg(long)]
    year: Option<String>,

    #[arg(long)]
    kind: Option<String>,

    #[arg(long)]
    domain: Option<String>,

    #[arg(long)]
    lead: Option<String>,
}

impl ShowArgs {
    fn selections(&self) -> [(Facet, Option<&String>); 4] {
        [
            (Facet::Year, self.year.as_ref()),
            (Facet::Kind, self.kind.as_ref()),
            (Facet::Domain, self.domain.as_ref()),
            (Facet::Lead, self.lead.as_ref()),
        ]
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    match &cli.command {
        Commands::Staff => list_staff(&cli),
        Commands::Show(args) => show_staff(&cli, args),
        Commands::Project { staff, project } => show_project(&cli, staff, project),
        Commands::Slug { title } => {
            println!("{}", slugify(title));
            Ok(())
        }
        Commands::Import { json } => import_staff(&cli, json),
    }
}

/// Runs `f` against the directory selected by `--data` or `--db`.
fn with_directory<T>(
    cli: &Cli,
    f: impl FnOnce(&dyn StaffDirectory) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    if let Some(path) = &cli.data {
        let directory = StaticStaffDirectory::from_path(path)
            .with_context(|| format!("failed to load `{}`", path.display()))?;
        return f(&directory);
    }
    if let Some(path) = &cli.db {
        let conn = open_db_read_only(path)
            .with_context(|| format!("failed to open `{}`", path.display()))?;
        return f(&SqliteStaffDirectory::new(&conn));
    }
    bail!("no staff data source; pass --data <json> or --db <sqlite>")
}

fn list_staff(cli: &Cli) -> anyhow::Result<()> {
    with_directory(cli, |directory| {
        for member in directory.all_staff()? {
            let title = member.title.as_deref().unwrap_or("");
            println!("{}\t{}\t{}", member.slug, member.name, title);
        }
        Ok(())
    })
}

fn show_staff(cli: &Cli, args: &ShowArgs) -> anyhow::Result<()> {
    with_directory(cli, |directory| {
        let Some(mut page) = StaffPage::load(directory, &args.slug)? else {
            println!("{STAFF_NOT_FOUND_MESSAGE}");
            return Ok(());
        };
        page.select_tab(args.tab);
        match args.tab {
            CollectionKind::Publications => apply_args(page.publications_mut(), args),
            CollectionKind::Projects => apply_args(page.projects_mut(), args),
        }

        print_header(&page);
        match page.active_tab() {
            CollectionKind::Publications => {
                let view = page.publications();
                print_facet_options(view);
                for publication in view.filtered() {
                    println!("- {}", publication.heading());
                    let details = [publication.kind.as_deref(), publication.domain.as_deref()]
                        .into_iter()
                        .flatten()
                        .filter(|value| !value.is_empty())
                        .collect::<Vec<_>>();
                    if !details.is_empty() {
                        println!("  {}", details.join(", "));
                    }
                }
            }
            CollectionKind::Projects => {
                print_facet_options(page.projects());
                for link in page.project_links() {
                    println!("- {} -> {}", link.title, link.href);
                    if let Some(subtitle) = link.subtitle {
                        println!("  {subtitle}");
                    }
                }
            }
        }
        Ok(())
    })
}

fn apply_args<R: CollectionRecord>(view: &mut CollectionView<R>, args: &ShowArgs) {
    if let Some(query) = &args.query {
        view.set_query(query.as_str());
    }
    for (facet, value) in args.selections() {
        if let Some(value) = value {
            view.set_facet(facet, Some(value.clone()));
        }
    }
}

fn print_header(page: &StaffPage) {
    let staff = page.staff();
    println!("{} ({})", staff.name, staff_href(&staff.slug));
    for value in [&staff.title, &staff.email, &staff.phone].into_iter().flatten() {
        println!("  {value}");
    }
    println!("  image: {}", staff.image_or_default());
    println!();
}

fn print_facet_options<R: CollectionRecord>(view: &CollectionView<R>) {
    for (facet, options) in view.all_facet_options() {
        let selected = view.state().selection(*facet).unwrap_or("all");
        println!("{facet} [{selected}]: {}", options.join(" | "));
    }
    println!(
        "{} of {} {}",
        view.filtered_indices().len(),
        view.records().len(),
        R::KIND
    );
    println!();
}

fn show_project(cli: &Cli, staff_slug: &str, project_slug: &str) -> anyhow::Result<()> {
    with_directory(cli, |directory| {
        let Some(page) = StaffPage::load(directory, staff_slug)? else {
            println!("{STAFF_NOT_FOUND_MESSAGE}");
            return Ok(());
        };
        let Some((index, project)) = page.resolve_project(project_slug) else {
            bail!("project `{project_slug}` not found for `{staff_slug}`");
        };
        let heading = if project.title.is_empty() {
            format!("Project #{}", index + 1)
        } else {
            project.title.clone()
        };
        println!("{heading}");
        for value in [&project.lead, &project.domain].into_iter().flatten() {
            println!("  {value}");
        }
        let period = format_duration(project.start.as_ref(), project.end.as_ref());
        if !period.is_empty() {
            println!("  {period}");
        }
        if let Some(description) = &project.description {
            println!();
            println!("{description}");
        }
        Ok(())
    })
}

fn import_staff(cli: &Cli, json: &Path) -> anyhow::Result<()> {
    let Some(db_path) = &cli.db else {
        bail!("import needs a target store; pass --db <sqlite>");
    };
    let source = StaticStaffDirectory::from_path(json)
        .with_context(|| format!("failed to load `{}`", json.display()))?;
    let conn =
        open_db(db_path).with_context(|| format!("failed to open `{}`", db_path.display()))?;
    let imported = SqliteStaffDirectory::new(&conn).import_all(&source.all_staff()?)?;
    info!(
        "event=staff_import module=cli status=ok source={} target={} staff={imported}",
        json.display(),
        db_path.display()
    );
    println!("imported {imported} staff member(s) into {}", db_path.display());
    Ok(())
}
