//! Implementation of the five create commands (`module`, `client`, `server`,
//! `controller`, `service`).
//!
//! Responsibility: turn CLI arguments and config into a `CreateRequest` plus
//! adapters, call the core service, and display the result. No naming logic
//! lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use luafile_adapters::{
    EditorOpener, LocalFilesystem, NoopOpener, ScriptedAnswer, ScriptedPrompt,
};
use luafile_core::{
    application::{
        CreateFileService, CreateOutcome, CreateRequest, SharedSettings,
        ports::{DocumentOpener, NamePrompt},
    },
    domain::{ResolvedFile, Settings, TemplateId},
};

use crate::{
    cli::{CreateArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute a create command.
///
/// Dispatch sequence:
/// 1. Merge per-invocation flags into the configured settings
/// 2. Make the location hint and workspace roots absolute
/// 3. Pick the prompt (scripted for `--yes` / `--name`, interactive otherwise)
/// 4. Preview (`--dry-run`) or create via `CreateFileService`
/// 5. Report the outcome
#[instrument(skip_all, fields(template = %template))]
pub fn execute(
    template: TemplateId,
    args: CreateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Settings
    let settings = invocation_settings(&config, &args);
    debug!(
        extension = %settings.extension,
        convention = %settings.convention,
        knit = settings.companion_framework_enabled,
        "Settings resolved"
    );

    // 2. Request
    let request = build_request(template, &args, &config)?;

    // 3. Adapters
    let prompt = build_prompt(&args, &output)?;
    let opener = build_opener(&args, &config);
    let service = CreateFileService::new(
        Box::new(LocalFilesystem::new()),
        prompt,
        opener,
        SharedSettings::new(settings),
    );

    // 4. Run
    let outcome = if args.dry_run {
        service.preview(&request)?
    } else {
        service.create(&request)?
    };

    // 5. Report
    match outcome {
        CreateOutcome::Cancelled => {
            info!("Nothing created");
            Ok(())
        }
        CreateOutcome::Created(file) => report(&file, args.dry_run, &output),
    }
}

// ── Request construction ──────────────────────────────────────────────────────

fn invocation_settings(config: &AppConfig, args: &CreateArgs) -> Settings {
    let mut settings = config.settings();
    if let Some(ext) = &args.ext {
        settings = settings.with_extension(ext.clone());
    }
    if let Some(convention) = args.convention {
        settings = settings.with_convention(convention.into());
    }
    settings
}

fn build_request(
    template: TemplateId,
    args: &CreateArgs,
    config: &AppConfig,
) -> CliResult<CreateRequest> {
    let mut request = CreateRequest::new(template);

    if let Some(location) = &args.location {
        request = request.with_location(absolute(location)?);
    }

    for root in workspace_roots(args, config)? {
        request = request.with_workspace_root(absolute(&root)?);
    }

    Ok(request)
}

/// `--workspace` flags, else `workspace.roots`, else the current directory.
fn workspace_roots(args: &CreateArgs, config: &AppConfig) -> CliResult<Vec<PathBuf>> {
    if !args.workspace.is_empty() {
        return Ok(args.workspace.clone());
    }
    if !config.workspace.roots.is_empty() {
        return Ok(config.workspace.roots.clone());
    }
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read current directory")?;
    Ok(vec![cwd])
}

fn absolute(path: &Path) -> CliResult<PathBuf> {
    std::path::absolute(path).with_cli_context(|| format!("Invalid path '{}'", path.display()))
}

// ── Adapter selection ─────────────────────────────────────────────────────────

fn scripted_answer(args: &CreateArgs) -> Option<ScriptedAnswer> {
    match (&args.name, args.exact) {
        (Some(name), true) => Some(ScriptedAnswer::Exact(name.clone())),
        (Some(name), false) => Some(ScriptedAnswer::Splice(name.clone())),
        (None, _) if args.yes => Some(ScriptedAnswer::AcceptDefault),
        (None, _) => None,
    }
}

#[cfg(feature = "interactive")]
fn build_prompt(args: &CreateArgs, output: &OutputManager) -> CliResult<Box<dyn NamePrompt>> {
    Ok(match scripted_answer(args) {
        Some(answer) => Box::new(ScriptedPrompt::once(answer)),
        None => Box::new(crate::prompt::DialoguerPrompt::new(output.supports_color())),
    })
}

#[cfg(not(feature = "interactive"))]
fn build_prompt(args: &CreateArgs, _output: &OutputManager) -> CliResult<Box<dyn NamePrompt>> {
    match scripted_answer(args) {
        Some(answer) => Ok(Box::new(ScriptedPrompt::once(answer))),
        None => Err(crate::error::CliError::FeatureNotAvailable {
            feature: "interactive",
        }),
    }
}

fn build_opener(args: &CreateArgs, config: &AppConfig) -> Box<dyn DocumentOpener> {
    if args.no_open || args.dry_run || !config.editor.open {
        Box::new(NoopOpener)
    } else {
        Box::new(EditorOpener::new(config.editor.command.clone()))
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

fn report(file: &ResolvedFile, dry_run: bool, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(file)?;
        return Ok(());
    }

    if dry_run {
        output.info(&format!(
            "Dry run: would create {} ({})",
            file.final_path.display(),
            file.kind,
        ))?;
    } else {
        output.success(&format!("Created {}", file.final_path.display()))?;
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
