//! Create File Service - main application orchestrator.
//!
//! This service runs one file-creation invocation end to end:
//! 1. Snapshot settings and look up the template
//! 2. Resolve the target directory
//! 3. Ask for a name (the only suspension point)
//! 4. Validate, normalize, and de-duplicate the name
//! 5. Write the file and open it
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, SharedSettings,
        ports::{DocumentOpener, Filesystem, NamePrompt, PromptRequest},
    },
    domain::{
        DomainValidator as validator, NamingContext, ResolvedFile, Settings, TemplateDescriptor,
        TemplateId, materialize, naming, registry,
    },
    error::LuafileResult,
};

/// What the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    pub template: TemplateId,
    /// A file or directory the command was invoked on.
    pub location: Option<PathBuf>,
    /// Fallback targets; only the first one is used.
    pub workspace_roots: Vec<PathBuf>,
}

impl CreateRequest {
    pub fn new(template: TemplateId) -> Self {
        Self {
            template,
            location: None,
            workspace_roots: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_workspace_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.workspace_roots.push(root.into());
        self
    }
}

/// Result of an invocation that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(ResolvedFile),
    /// The user dismissed the prompt. Nothing was written.
    Cancelled,
}

impl CreateOutcome {
    pub fn file(&self) -> Option<&ResolvedFile> {
        match self {
            Self::Created(file) => Some(file),
            Self::Cancelled => None,
        }
    }
}

/// File creation service.
pub struct CreateFileService {
    filesystem: Box<dyn Filesystem>,
    prompt: Box<dyn NamePrompt>,
    opener: Box<dyn DocumentOpener>,
    settings: SharedSettings,
}

impl CreateFileService {
    /// Create a new service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use luafile_core::application::{CreateFileService, SharedSettings};
    ///
    /// let service = CreateFileService::new(
    ///     filesystem, // impl Filesystem
    ///     prompt,     // impl NamePrompt
    ///     opener,     // impl DocumentOpener
    ///     SharedSettings::default(),
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        prompt: Box<dyn NamePrompt>,
        opener: Box<dyn DocumentOpener>,
        settings: SharedSettings,
    ) -> Self {
        Self {
            filesystem,
            prompt,
            opener,
            settings,
        }
    }

    /// Create a file from a template.
    ///
    /// A write failure aborts before anything is opened. An open failure is
    /// reported as [`ApplicationError::OpenFailed`] and the file stays on disk.
    #[instrument(skip_all, fields(template = %request.template))]
    pub fn create(&self, request: &CreateRequest) -> LuafileResult<CreateOutcome> {
        let file = match self.resolve(request)? {
            CreateOutcome::Created(file) => file,
            CreateOutcome::Cancelled => return Ok(CreateOutcome::Cancelled),
        };

        self.filesystem
            .write_new_file(&file.final_path, &file.content)?;
        info!(path = %file.final_path.display(), bytes = file.size(), "File written");

        if let Err(e) = self.opener.open(&file.final_path) {
            warn!(error = %e, path = %file.final_path.display(), "Open failed");
            return Err(ApplicationError::OpenFailed {
                path: file.final_path.clone(),
                reason: e.to_string(),
            }
            .into());
        }

        Ok(CreateOutcome::Created(file))
    }

    /// Run everything up to, but not including, the write.
    #[instrument(skip_all, fields(template = %request.template))]
    pub fn preview(&self, request: &CreateRequest) -> LuafileResult<CreateOutcome> {
        self.resolve(request)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn resolve(&self, request: &CreateRequest) -> LuafileResult<CreateOutcome> {
        // 1. One settings snapshot for the whole invocation
        let settings = self.settings.snapshot()?;

        // 2. Template
        let descriptor = registry::lookup(request.template);
        if descriptor.id.requires_companion_framework() && !settings.companion_framework_enabled {
            return Err(ApplicationError::TemplateDisabled {
                template: descriptor.id.to_string(),
            }
            .into());
        }

        // 3. Target directory
        let context = NamingContext::new(
            settings.extension.clone(),
            self.resolve_target_directory(request)?,
        );
        debug!(
            directory = %context.target_directory.display(),
            extension = %context.extension,
            "Naming context resolved"
        );

        // 4. Ask
        let prompt_request = PromptRequest::new(descriptor, &settings);
        let raw = match self.prompt.prompt(&prompt_request)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                info!("Prompt dismissed, nothing created");
                return Ok(CreateOutcome::Cancelled);
            }
        };

        // 5. Resolve
        let file = self.resolve_file(&raw, descriptor, &context, &settings)?;
        Ok(CreateOutcome::Created(file))
    }

    fn resolve_target_directory(&self, request: &CreateRequest) -> LuafileResult<PathBuf> {
        if let Some(hint) = &request.location {
            if self.filesystem.is_dir(hint)? {
                return Ok(hint.clone());
            }
            return Ok(hint
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf));
        }

        request
            .workspace_roots
            .first()
            .cloned()
            .ok_or_else(|| ApplicationError::NoTargetDirectory.into())
    }

    fn resolve_file(
        &self,
        raw: &str,
        descriptor: &TemplateDescriptor,
        context: &NamingContext,
        settings: &Settings,
    ) -> LuafileResult<ResolvedFile> {
        let kind = descriptor.kind;
        let extension = &context.extension;

        let name = validator::validate_input(raw, kind, extension, settings.strict_role_suffix)?;
        let name = naming::normalize_extension(&name, extension);
        let name = naming::apply_convention(&name, kind, extension, settings.convention);

        let snapshot = self.filesystem.list_entries(&context.target_directory)?;
        let final_name = naming::resolve_collision(&snapshot, &name, kind, extension);
        if final_name != name {
            debug!(
                requested = %name,
                resolved = %final_name,
                existing = snapshot.len(),
                "Name taken, incremented"
            );
        }

        Ok(ResolvedFile::new(
            &context.target_directory,
            final_name,
            materialize(kind),
            kind,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{MockDocumentOpener, MockFilesystem, MockNamePrompt};
    use crate::domain::{
        DirectorySnapshot, DomainError, NamingConvention, TemplateKind,
        registry::MODULE_BOILERPLATE,
    };
    use crate::error::LuafileError;

    const WS: &str = "/ws";

    fn answering(answer: Option<&str>) -> MockNamePrompt {
        let answer = answer.map(str::to_string);
        let mut prompt = MockNamePrompt::new();
        prompt
            .expect_prompt()
            .times(1)
            .returning(move |_| Ok(answer.clone()));
        prompt
    }

    fn accepting_default() -> MockNamePrompt {
        let mut prompt = MockNamePrompt::new();
        prompt
            .expect_prompt()
            .times(1)
            .returning(|request| Ok(Some(request.default_value().to_string())));
        prompt
    }

    fn listing(existing: &[&str]) -> MockFilesystem {
        let snapshot: DirectorySnapshot = existing.iter().copied().collect();
        let mut fs = MockFilesystem::new();
        fs.expect_list_entries()
            .returning(move |_| Ok(snapshot.clone()));
        fs
    }

    fn opener_expecting(times: usize) -> MockDocumentOpener {
        let mut opener = MockDocumentOpener::new();
        opener.expect_open().times(times).returning(|_| Ok(()));
        opener
    }

    fn service(
        fs: MockFilesystem,
        prompt: MockNamePrompt,
        opener: MockDocumentOpener,
        settings: Settings,
    ) -> CreateFileService {
        CreateFileService::new(
            Box::new(fs),
            Box::new(prompt),
            Box::new(opener),
            SharedSettings::new(settings),
        )
    }

    fn request(id: TemplateId) -> CreateRequest {
        CreateRequest::new(id).with_workspace_root(WS)
    }

    fn created(outcome: CreateOutcome) -> ResolvedFile {
        match outcome {
            CreateOutcome::Created(file) => file,
            CreateOutcome::Cancelled => panic!("expected a created file"),
        }
    }

    // ── end-to-end scenarios ──────────────────────────────────────────────

    #[test]
    fn module_default_in_empty_directory() {
        let mut fs = listing(&[]);
        fs.expect_write_new_file()
            .withf(|path, content| {
                path.to_path_buf() == PathBuf::from("/ws/ModuleScript.luau")
                    && content.to_string() == MODULE_BOILERPLATE
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let svc = service(fs, accepting_default(), opener_expecting(1), Settings::default());
        let file = created(svc.create(&request(TemplateId::ModuleScript)).unwrap());

        assert_eq!(file.final_name, "ModuleScript.luau");
        assert_eq!(file.content, "local module = {}\n\nreturn module\n");
    }

    #[test]
    fn service_collision_increments_before_suffix() {
        let mut fs = listing(&["NameService.lua"]);
        fs.expect_write_new_file()
            .withf(|path, content| path.ends_with("Name1Service.lua") && content.is_empty())
            .times(1)
            .returning(|_, _| Ok(()));

        let settings = Settings::default().with_extension(".lua".parse().unwrap());
        let svc = service(fs, accepting_default(), opener_expecting(1), settings);
        let file = created(svc.create(&request(TemplateId::KnitService)).unwrap());

        assert_eq!(file.final_name, "Name1Service.lua");
        assert_eq!(file.kind, TemplateKind::Service);
        assert!(file.content.is_empty());
    }

    #[test]
    fn client_typed_name_keeps_infix_under_fixed_convention() {
        let mut fs = listing(&[]);
        fs.expect_write_new_file().times(1).returning(|_, _| Ok(()));

        let svc = service(
            fs,
            answering(Some("Foo")),
            opener_expecting(1),
            Settings::default(),
        );
        let file = created(svc.create(&request(TemplateId::Client)).unwrap());

        assert_eq!(file.final_name, "Foo.client.luau");
        assert_eq!(file.content, "-- Client script\n\n");
    }

    #[test]
    fn client_typed_name_is_used_verbatim_under_free_convention() {
        let mut fs = listing(&[]);
        fs.expect_write_new_file().times(1).returning(|_, _| Ok(()));

        let settings = Settings::default().with_convention(NamingConvention::Free);
        let svc = service(fs, answering(Some("Foo")), opener_expecting(1), settings);
        let file = created(svc.create(&request(TemplateId::Client)).unwrap());

        assert_eq!(file.final_name, "Foo.luau");
    }

    #[test]
    fn cancel_has_no_side_effects() {
        let mut fs = MockFilesystem::new();
        fs.expect_list_entries().times(0);
        fs.expect_write_new_file().times(0);

        let svc = service(fs, answering(None), opener_expecting(0), Settings::default());
        let outcome = svc.create(&request(TemplateId::ModuleScript)).unwrap();

        assert_eq!(outcome, CreateOutcome::Cancelled);
    }

    #[test]
    fn empty_answer_counts_as_cancel() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_new_file().times(0);

        let svc = service(fs, answering(Some("")), opener_expecting(0), Settings::default());
        assert_eq!(
            svc.create(&request(TemplateId::Server)).unwrap(),
            CreateOutcome::Cancelled
        );
    }

    // ── target directory ─────────────────────────────────────────────────

    #[test]
    fn missing_workspace_is_an_error() {
        let mut prompt = MockNamePrompt::new();
        prompt.expect_prompt().times(0);

        let svc = service(
            MockFilesystem::new(),
            prompt,
            opener_expecting(0),
            Settings::default(),
        );
        let err = svc
            .create(&CreateRequest::new(TemplateId::ModuleScript))
            .unwrap_err();

        assert!(matches!(
            err,
            LuafileError::Application(ApplicationError::NoTargetDirectory)
        ));
    }

    #[test]
    fn file_hint_resolves_to_parent_directory() {
        let mut fs = listing(&[]);
        fs.expect_is_dir().returning(|_| Ok(false));

        let svc = service(fs, accepting_default(), opener_expecting(0), Settings::default());
        let req = CreateRequest::new(TemplateId::Server)
            .with_location("/ws/src/init.server.luau")
            .with_workspace_root("/elsewhere");
        let file = created(svc.preview(&req).unwrap());

        assert_eq!(file.final_path, PathBuf::from("/ws/src/Script.server.luau"));
    }

    #[test]
    fn directory_hint_wins_over_workspace_root() {
        let mut fs = listing(&[]);
        fs.expect_is_dir().returning(|_| Ok(true));

        let svc = service(fs, accepting_default(), opener_expecting(0), Settings::default());
        let req = CreateRequest::new(TemplateId::ModuleScript)
            .with_location("/ws/shared")
            .with_workspace_root("/elsewhere");
        let file = created(svc.preview(&req).unwrap());

        assert_eq!(file.final_path, PathBuf::from("/ws/shared/ModuleScript.luau"));
    }

    // ── validation & gating ──────────────────────────────────────────────

    #[test]
    fn invalid_name_aborts_before_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_new_file().times(0);

        let svc = service(
            fs,
            answering(Some("Foo/Bar")),
            opener_expecting(0),
            Settings::default(),
        );
        let err = svc.create(&request(TemplateId::ModuleScript)).unwrap_err();

        assert!(matches!(
            err,
            LuafileError::Domain(DomainError::InvalidCharacters { .. })
        ));
    }

    #[test]
    fn strict_mode_rejects_missing_suffix() {
        let svc = service(
            MockFilesystem::new(),
            answering(Some("Player")),
            opener_expecting(0),
            Settings::default().with_strict_role_suffix(true),
        );
        let err = svc.create(&request(TemplateId::KnitController)).unwrap_err();

        assert!(matches!(
            err,
            LuafileError::Domain(DomainError::MissingRoleSuffix { .. })
        ));
    }

    #[test]
    fn knit_templates_respect_companion_flag() {
        let mut prompt = MockNamePrompt::new();
        prompt.expect_prompt().times(0);

        let svc = service(
            MockFilesystem::new(),
            prompt,
            opener_expecting(0),
            Settings::default().with_companion_framework(false),
        );
        let err = svc.create(&request(TemplateId::KnitController)).unwrap_err();

        assert!(matches!(
            err,
            LuafileError::Application(ApplicationError::TemplateDisabled { .. })
        ));
    }

    // ── write / open failures ────────────────────────────────────────────

    #[test]
    fn write_failure_skips_open() {
        let mut fs = listing(&[]);
        fs.expect_write_new_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });

        let svc = service(fs, accepting_default(), opener_expecting(0), Settings::default());
        let err = svc.create(&request(TemplateId::ModuleScript)).unwrap_err();

        assert!(matches!(
            err,
            LuafileError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn open_failure_is_reported_after_write() {
        let mut fs = listing(&[]);
        fs.expect_write_new_file().times(1).returning(|_, _| Ok(()));

        let mut opener = MockDocumentOpener::new();
        opener.expect_open().times(1).returning(|_| {
            Err(crate::error::LuafileError::Internal {
                message: "no editor".into(),
            })
        });

        let svc = service(fs, accepting_default(), opener, Settings::default());
        let err = svc.create(&request(TemplateId::ModuleScript)).unwrap_err();

        assert!(matches!(
            err,
            LuafileError::Application(ApplicationError::OpenFailed { .. })
        ));
    }

    #[test]
    fn preview_never_writes() {
        let mut fs = listing(&["ModuleScript.luau"]);
        fs.expect_write_new_file().times(0);

        let svc = service(fs, accepting_default(), opener_expecting(0), Settings::default());
        let file = created(svc.preview(&request(TemplateId::ModuleScript)).unwrap());

        assert_eq!(file.final_name, "ModuleScript1.luau");
    }

    // ── settings snapshot ────────────────────────────────────────────────

    #[test]
    fn settings_change_during_prompt_does_not_leak_in() {
        let shared = SharedSettings::default();
        let updater = shared.clone();

        let mut prompt = MockNamePrompt::new();
        prompt.expect_prompt().times(1).returning(move |_| {
            updater
                .update(Settings::default().with_extension(".lua".parse().unwrap()))
                .unwrap();
            Ok(Some("Foo".to_string()))
        });

        let svc = CreateFileService::new(
            Box::new(listing(&[])),
            Box::new(prompt),
            Box::new(opener_expecting(0)),
            shared.clone(),
        );
        let file = created(svc.preview(&request(TemplateId::ModuleScript)).unwrap());

        assert_eq!(file.final_name, "Foo.luau");
        assert_eq!(shared.snapshot().unwrap().extension.as_str(), ".lua");
    }
}
