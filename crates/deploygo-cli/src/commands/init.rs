//! Implementation of the `deploygo init` command.
//!
//! Responsibility: translate CLI arguments and config defaults into a
//! `ScaffoldRequest`, call the core scaffold service, and display results.
//! No business logic lives here.

use std::io::IsTerminal as _;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use deploygo_adapters::{HandlebarsRenderer, LocalFilesystem, TracingReporter};
use deploygo_core::{
    application::{ProgressReporter, RenderPolicy, ScaffoldRequest, ScaffoldService},
    domain::{Language, ProjectConfig, TemplateFamily},
    error::DeployError,
};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `deploygo init` command.
///
/// Dispatch sequence:
/// 1. Merge flags over config defaults into a `ScaffoldRequest`
/// 2. Early-exit if `--dry-run`
/// 3. Confirm a destructive overwrite on an interactive terminal
/// 4. Execute scaffolding via `ScaffoldService`
/// 5. Print the summary and next steps
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve request
    let request = build_request(&args, &config)?;
    let policy = if args.strict_templates || config.templates.strict {
        RenderPolicy::Strict
    } else {
        RenderPolicy::Lenient
    };

    debug!(
        config = %request.config,
        template = %request.template,
        target = %request.target_dir.display(),
        ?policy,
        "Request resolved"
    );

    // 2. Dry run: describe but do not write.
    if args.dry_run {
        return show_plan(&request, &output);
    }

    // 3. Overwrite confirmation
    if request.overwrite && !args.yes && !global.quiet && request.target_dir.exists() {
        if std::io::stdin().is_terminal() {
            if !confirm_overwrite(&request.target_dir)? {
                return Err(CliError::Cancelled);
            }
        } else {
            debug!("stdin is not a terminal; skipping overwrite confirmation");
        }
    }

    // 4. Scaffold
    let service = ScaffoldService::new(
        Box::new(HandlebarsRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
    .with_policy(policy);

    output.header(&format!("Creating '{}'...", request.config.project_name()))?;
    let report = service.scaffold(&request, progress_reporter(&global, &output))?;
    info!(files = report.written.len(), "Scaffold completed");

    for path in report.raw_fallbacks() {
        output.warning(&format!(
            "{} was written without substitution (template did not render)",
            path.display()
        ))?;
    }

    // 5. Summary
    let name = request.config.project_name();
    output.print("")?;
    output.success(&format!("Successfully created project: {name}"))?;
    output.print(&format!("  Directory: {}", report.target_dir.display()))?;
    output.print(&format!(
        "  Language:  {}",
        request.config.language().display_name()
    ))?;
    output.print(&format!("  Template:  {}", report.family))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", report.target_dir.display()))?;
    output.print("  deploygo build")?;
    output.print("  deploygo deploy staging")?;

    Ok(())
}

/// Where per-file progress goes: stdout normally, the log under `--quiet`.
fn progress_reporter<'a>(
    global: &GlobalArgs,
    output: &'a OutputManager,
) -> &'a dyn ProgressReporter {
    if global.quiet {
        &TracingReporter
    } else {
        output
    }
}

/// Merge CLI flags over configured defaults.
///
/// When `--language` is omitted the template family's own language is used.
fn build_request(args: &InitArgs, config: &AppConfig) -> CliResult<ScaffoldRequest> {
    let template = args
        .template
        .clone()
        .unwrap_or_else(|| config.defaults.template.clone());

    let language = match &args.language {
        Some(value) => value.parse::<Language>().map_err(DeployError::from)?,
        None => TemplateFamily::from_selector(&template)
            .map_err(DeployError::from)?
            .language(),
    };

    let project_config = ProjectConfig::builder()
        .project_name(args.name.clone())
        .language(language)
        .port(args.port.unwrap_or(config.defaults.port))
        .version(
            args.app_version
                .clone()
                .unwrap_or_else(|| config.defaults.version.clone()),
        )
        .build()
        .map_err(DeployError::from)?;

    Ok(ScaffoldRequest {
        target_dir: target_dir(args.output_dir.as_deref(), &args.name),
        config: project_config,
        template,
        overwrite: args.overwrite,
    })
}

fn target_dir(output_dir: Option<&Path>, name: &str) -> PathBuf {
    match output_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(request: &ScaffoldRequest, out: &OutputManager) -> CliResult<()> {
    let (family, file_set) = ScaffoldService::plan(&request.template, &request.config)?;

    out.info(&format!(
        "Dry run: would create '{}' at {}",
        request.config.project_name(),
        request.target_dir.display()
    ))?;
    out.print(&format!("  Template: {family}"))?;
    out.print(&format!("  Language: {}", request.config.language().display_name()))?;
    out.print(&format!("  Port:     {}", request.config.port()))?;
    out.print(&format!("  Version:  {}", request.config.version()))?;
    if request.target_dir.exists() {
        if request.overwrite {
            out.warning("The existing directory would be removed first")?;
        } else {
            out.warning("The directory already exists; pass --overwrite to replace it")?;
        }
    }
    out.print("  Files:")?;
    for path in file_set.paths() {
        out.print(&format!("    {}", path.under(&request.target_dir).display()))?;
    }
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm_overwrite(path: &Path) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(format!(
            "'{}' already exists. Remove it and everything inside?",
            path.display()
        ))
        .default(false)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e.to_string()),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm_overwrite(path: &Path) -> CliResult<bool> {
    use std::io::{self, Write};

    print!("'{}' already exists. Remove it? [y/N] ", path.display());
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::{Cli, Commands};

    fn init_args(argv: &[&str]) -> InitArgs {
        let mut full = vec!["deploygo", "init"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Init(args) => args,
            other => panic!("expected Init, got {other:?}"),
        }
    }

    #[test]
    fn defaults_come_from_config() {
        let request = build_request(&init_args(&["demo"]), &AppConfig::default()).unwrap();

        assert_eq!(request.template, "go");
        assert_eq!(request.config.port().get(), 8080);
        assert_eq!(request.config.version().as_str(), "1.0.0");
        assert_eq!(request.config.language(), Language::Go);
        assert_eq!(request.target_dir, PathBuf::from("demo"));
        assert!(!request.overwrite);
    }

    #[test]
    fn flags_override_config() {
        let mut config = AppConfig::default();
        config.defaults.port = 9000;
        config.defaults.template = "python".into();

        let request = build_request(
            &init_args(&["demo", "-t", "nodejs", "-p", "3000", "--version", "0.2.0"]),
            &config,
        )
        .unwrap();

        assert_eq!(request.template, "nodejs");
        assert_eq!(request.config.port().get(), 3000);
        assert_eq!(request.config.version().as_str(), "0.2.0");
    }

    #[test]
    fn language_follows_the_template_family() {
        let request =
            build_request(&init_args(&["demo", "-t", "python"]), &AppConfig::default()).unwrap();
        assert_eq!(request.config.language(), Language::Python);
    }

    #[test]
    fn explicit_language_wins() {
        let request = build_request(
            &init_args(&["demo", "-t", "go", "-l", "nodejs"]),
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(request.config.language(), Language::NodeJs);
    }

    #[test]
    fn unknown_language_is_rejected() {
        let err = build_request(&init_args(&["demo", "-l", "cobol"]), &AppConfig::default())
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn zero_port_is_rejected() {
        let err = build_request(&init_args(&["demo", "-p", "0"]), &AppConfig::default())
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn output_dir_prefixes_the_name() {
        let request = build_request(
            &init_args(&["demo", "-o", "/tmp/projects"]),
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(request.target_dir, PathBuf::from("/tmp/projects/demo"));
    }
}
