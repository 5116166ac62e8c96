mod print;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use learning_path::{Activation, LearningMap, MapConfig, ModuleId, TierStrategy};
use path_data::{CourseSource, RonCourseDir};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Tiers {
    /// Use the tier declared on each module
    Declared,
    /// Derive tiers from prerequisite depth
    Depth,
}

impl From<Tiers> for TierStrategy {
    fn from(tiers: Tiers) -> Self {
        match tiers {
            Tiers::Declared => TierStrategy::Declared,
            Tiers::Depth => TierStrategy::Depth,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    #[default]
    Text,
    Ron,
}

#[derive(Parser)]
#[command(author, version, about = "Show the learning path of a course")]
struct Args {
    /// Directory holding `<course>.ron` files
    #[arg(short, long, default_value = "fixtures")]
    dir: PathBuf,

    /// Course to show, lists the available courses when omitted
    course: Option<String>,

    /// Map settings in RON, see `MapConfig`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tier assignment, overrides the configuration file
    #[arg(long, value_enum)]
    tiers: Option<Tiers>,

    /// Module the learner is currently on
    #[arg(long)]
    current: Option<String>,

    /// Try to enter the given module
    #[arg(long)]
    activate: Option<String>,

    #[arg(long, value_enum, default_value_t)]
    format: Format,
}

fn load_config(args: &Args) -> Result<MapConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {path:?}"))?;
            MapConfig::from_ron(&text).with_context(|| format!("Invalid config {path:?}"))?
        }
        None => MapConfig::default(),
    };
    if let Some(tiers) = args.tiers {
        config.tier_strategy = tiers.into();
    }
    debug!("Using {config:?}");
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let source = RonCourseDir::new(&args.dir);

    let Some(course_id) = &args.course else {
        for id in source.list()? {
            println!("{id}");
        }
        return Ok(());
    };

    let config = load_config(&args)?;
    let course = source
        .course(course_id)
        .with_context(|| format!("Failed to load course {course_id}"))?;
    let map = LearningMap::resolve(&course, &config)
        .with_context(|| format!("Failed to resolve course {course_id}"))?;

    match args.format {
        Format::Text => print!("{}", print::render(&map, args.current.as_deref())),
        Format::Ron => println!("{}", path_data::to_ron(&map)?),
    }

    if let Some(id) = &args.activate {
        let mut navigate = |id: &ModuleId| info!("Opening module {id}");
        match map.activate(id, &mut navigate) {
            Activation::Navigated => println!("entered {id}"),
            Activation::Locked => println!("{id} is locked"),
            Activation::Unknown => println!("{id} is not part of this course"),
        }
    }

    Ok(())
}
