use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::catalog::CatalogIndex;
use crate::indexer::FsDescriptorSource;
use crate::utils::resolve_content_root;

#[derive(Parser)]
#[command(name = "lesson-catalog")]
#[command(version = "0.1.0")]
#[command(about = "Inspect the lesson catalog built from lesson.yml descriptors", long_about = None)]
pub struct Cli {
    /// Content root holding <course>/<lesson>/lesson.yml descriptors
    /// (falls back to the LESSON_SRC environment variable)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics about the catalog
    Stats,
    /// List lessons in a course, alphabetically
    List {
        course: String,
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Show normalized tags for a lesson
    Tags {
        course: String,
        lesson: String,
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Stats) => {
            show_stats(cli.root)?;
        }
        Some(Commands::List { course, json }) => {
            list_lessons(cli.root, &course, json)?;
        }
        Some(Commands::Tags { course, lesson, json }) => {
            show_tags(cli.root, &course, &lesson, json)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn open_index(root: Option<PathBuf>) -> Result<CatalogIndex<FsDescriptorSource>> {
    let root = resolve_content_root(root)?;
    Ok(CatalogIndex::from_content_root(root))
}

fn show_stats(root: Option<PathBuf>) -> Result<()> {
    let index = open_index(root)?;
    let catalog = index.catalog();

    let lesson_count: usize = catalog.values().map(|lessons| lessons.len()).sum();
    let indexed_count = catalog
        .values()
        .flat_map(|lessons| lessons.values())
        .filter(|metadata| metadata.is_indexed)
        .count();

    println!("Lesson Catalog Statistics");
    println!("=========================");
    println!("Courses: {}", catalog.len());
    println!("Lessons: {}", lesson_count);
    println!("  Indexed: {}", indexed_count);
    println!("  Instruction-only: {}", lesson_count - indexed_count);

    if !catalog.is_empty() {
        println!();
        for (course, lessons) in catalog {
            println!("  {}: {} lessons", course, lessons.len());
        }
    }

    Ok(())
}

fn list_lessons(root: Option<PathBuf>, course: &str, json: bool) -> Result<()> {
    let index = open_index(root)?;
    let lessons = index.lessons_in_course(course);

    if json {
        println!("{}", serde_json::to_string(&lessons[..])?);
    } else {
        for lesson in lessons.iter() {
            println!("{}", lesson);
        }
    }

    Ok(())
}

fn show_tags(root: Option<PathBuf>, course: &str, lesson: &str, json: bool) -> Result<()> {
    let index = open_index(root)?;

    let Some(tags) = index.tags(course, lesson) else {
        anyhow::bail!("Unknown lesson {}/{}", course, lesson);
    };

    if json {
        println!("{}", serde_json::to_string(tags)?);
    } else {
        for (category, values) in tags {
            println!("{}: {}", category, values.join(", "));
        }
    }

    Ok(())
}
