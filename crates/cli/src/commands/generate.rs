use anyhow::{Context, Result, anyhow};
use clap::Args;
use ngforge_core::{ArtifactKind, GenerateRequest, ProjectConfig, Scaffolder, VirtualTree};
use std::env;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Artifact kind: directive or component
    pub kind: String,

    /// Artifact path and name, e.g. admin/highlight
    pub name: String,

    /// Selector prefix; pass an empty string to suppress the project default
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// File stem of the host module to register with
    #[arg(short, long)]
    pub module: Option<String>,

    /// Do not generate a .spec.ts file
    #[arg(long)]
    pub skip_tests: bool,

    /// Place files directly in the target directory instead of a subfolder
    #[arg(long)]
    pub flat: bool,

    /// Show what would change without writing anything
    #[arg(short, long)]
    pub dry_run: bool,

    /// Custom working directory (defaults to current directory)
    #[arg(long)]
    pub cwd: Option<String>,
}

pub fn generate_command(args: GenerateArgs) -> Result<()> {
    let cwd = match &args.cwd {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let cwd = cwd.canonicalize().context("Failed to canonicalize working directory")?;
    debug!("generating in {}", cwd.display());

    let kind: ArtifactKind = args.kind.parse().map_err(|e: String| anyhow!(e))?;
    let config = ProjectConfig::load_or_default(&cwd)
        .with_context(|| format!("Failed to load configuration above {}", cwd.display()))?;

    let mut scaffolder = Scaffolder::new(config, VirtualTree::at_root(&cwd))
        .context("Failed to initialize the scaffolder")?;

    let mut request = GenerateRequest::new(args.name, kind);
    request.prefix = args.prefix;
    request.module = args.module;
    request.skip_tests = args.skip_tests;
    request.flat = args.flat;

    if args.dry_run {
        let plan = scaffolder.plan(&request)?;
        println!("🔍 Dry run for {} ({})", plan.class_name, plan.selector);
        for path in plan.created_paths() {
            println!("   📄 would create {}", path.display());
        }
        for path in plan.updated_paths() {
            println!("   ✏️  would update {}", path.display());
        }
        if plan.already_registered {
            println!(
                "   ℹ️  {} is already registered in {}",
                plan.class_name,
                plan.host_path.display()
            );
        }
        return Ok(());
    }

    let summary = scaffolder.generate(&request)?;
    println!("✅ Generated {} ({})", summary.class_name, summary.selector);
    for path in &summary.created {
        println!("   📄 created {}", path.display());
    }
    for path in &summary.updated {
        println!("   ✏️  updated {}", path.display());
    }
    if summary.already_registered {
        println!(
            "   ℹ️  {} was already registered in {}",
            summary.class_name,
            summary.host_path.display()
        );
    }

    Ok(())
}
