use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use fractal_compiler::catalog::{self, FoldEmission, ORBIT_STATEMENT};
use fractal_compiler::{
    CodegenOptions, FoldKind, PresetStore, RenameOutcome, SdfKind, Session, Settings,
};

#[derive(Parser)]
#[command(name = "fractal", version)]
#[command(about = "Fractal shader generator: fold chains to ray-marchable SDF fragments")]
struct Cli {
    /// Preset directory (driver, SDF fragment and description document live here)
    #[arg(long, global = true, default_value = "Shaders")]
    dir: PathBuf,

    /// JSON settings file (extensions, include paths)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a preset's fragments and description document
    Generate {
        /// Preset name; an existing preset with this name is loaded first
        name: String,

        /// Fold operation, repeatable, in loop-body order (replaces the chain)
        #[arg(long = "op", value_name = "FOLD", value_parser = parse_fold)]
        ops: Vec<FoldKind>,

        /// Start from an empty fold chain
        #[arg(long, conflicts_with = "ops")]
        clear: bool,

        /// Terminal distance function
        #[arg(long, value_parser = parse_sdf)]
        sdf: Option<SdfKind>,

        /// Treat unknown kinds as errors instead of emitting the sentinel
        #[arg(long)]
        strict: bool,
    },

    /// Print a preset's generated code without writing anything
    Show {
        name: String,

        /// Only the distance-function fragment
        #[arg(long, conflicts_with = "driver_only")]
        sdf_only: bool,

        /// Only the driver fragment
        #[arg(long)]
        driver_only: bool,
    },

    /// Rebuild a preset's fragments from its description document
    Regen {
        name: String,

        #[arg(long)]
        strict: bool,
    },

    /// List saved presets
    List,

    /// Delete a preset's fragments and description document
    Delete { name: String },

    /// Print the fold and SDF vocabulary with the code each emits
    Kinds,

    /// Regenerate presets whenever their description documents change
    Watch {
        #[arg(long)]
        strict: bool,
    },
}

fn parse_fold(s: &str) -> std::result::Result<FoldKind, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_sdf(s: &str) -> std::result::Result<SdfKind, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn main() {
    let cli = Cli::parse();
    fractal_compiler::logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("cannot load settings '{}'", path.display()))?,
        None => Settings::default(),
    };
    let store = PresetStore::with_settings(&cli.dir, settings);

    match cli.command {
        Commands::Generate {
            name,
            ops,
            clear,
            sdf,
            strict,
        } => {
            let mut session = Session::new(store);
            if session.rename(&name)? == RenameOutcome::Loaded {
                eprintln!("loaded existing preset '{name}'");
            }

            let config = session.config_mut();
            if clear {
                config.clear();
            } else if !ops.is_empty() {
                config.operations = ops;
            }
            if let Some(sdf) = sdf {
                config.terminal = sdf;
            }

            let published = session
                .generate(&CodegenOptions { strict })
                .with_context(|| format!("cannot generate '{name}'"))?;
            for w in &published.generated.warnings {
                eprintln!("warning: {w}");
            }
            for path in [
                &published.paths.driver,
                &published.paths.sdf,
                &published.paths.document,
            ] {
                eprintln!("wrote {}", path.display());
            }
        }

        Commands::Show {
            name,
            sdf_only,
            driver_only,
        } => {
            let config = store.read_document(&name)?;
            let generated = fractal_compiler::generate_with(
                &config,
                store.settings(),
                &CodegenOptions::default(),
            )?;
            for w in &generated.warnings {
                eprintln!("warning: {w}");
            }
            if !sdf_only {
                print!("{}", generated.driver);
            }
            if !sdf_only && !driver_only {
                println!();
            }
            if !driver_only {
                print!("{}", generated.sdf);
            }
        }

        Commands::Regen { name, strict } => {
            let published = store.regenerate(&name, &CodegenOptions { strict })?;
            for w in &published.generated.warnings {
                eprintln!("warning: {w}");
            }
            eprintln!(
                "regenerated {} and {}",
                published.paths.driver.display(),
                published.paths.sdf.display()
            );
        }

        Commands::List => {
            for name in store.list()? {
                println!("{name}");
            }
        }

        Commands::Delete { name } => {
            let removed = store.remove(&name)?;
            if removed == 0 {
                anyhow::bail!("no files found for preset '{name}'");
            }
            eprintln!("removed {removed} file(s) for '{name}'");
        }

        Commands::Kinds => print_kinds(),

        Commands::Watch { strict } => {
            fractal_compiler::watch::run(&store, &CodegenOptions { strict })?;
        }
    }

    Ok(())
}

fn print_kinds() {
    println!("folds:");
    for kind in FoldKind::ALL {
        match catalog::fold_emission(kind) {
            Ok(FoldEmission::Transform(call)) => {
                println!("  {:<20} new_p = {};", kind.name(), call.expr())
            }
            Ok(FoldEmission::OrbitAccumulate) => {
                println!("  {:<20} {ORBIT_STATEMENT}", kind.name())
            }
            Err(e) => println!("  {:<20} ({e})", kind.name()),
        }
    }

    println!();
    println!("sdfs:");
    for kind in SdfKind::ALL {
        match catalog::sdf_return(kind) {
            Ok(expr) => println!("  {:<20} return {expr};", kind.name()),
            Err(e) => println!("  {:<20} ({e})", kind.name()),
        }
    }
}
