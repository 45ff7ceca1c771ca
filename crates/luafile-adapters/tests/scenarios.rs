//! End-to-end creation scenarios against the in-memory adapters.

use std::path::{Path, PathBuf};

use luafile_adapters::{
    LocalFilesystem, MemoryFilesystem, RecordingOpener, ScriptedAnswer, ScriptedPrompt,
};
use luafile_core::prelude::*;
use tempfile::TempDir;

fn service(
    fs: &MemoryFilesystem,
    answers: impl IntoIterator<Item = ScriptedAnswer>,
    opener: &RecordingOpener,
    settings: Settings,
) -> CreateFileService {
    CreateFileService::new(
        Box::new(fs.clone()),
        Box::new(ScriptedPrompt::new(answers)),
        Box::new(opener.clone()),
        SharedSettings::new(settings),
    )
}

fn in_ws(template: TemplateId) -> CreateRequest {
    CreateRequest::new(template).with_workspace_root("/ws")
}

#[test]
fn module_script_with_default_name() {
    let fs = MemoryFilesystem::new().with_dir("/ws");
    let opener = RecordingOpener::new();
    let svc = service(&fs, [ScriptedAnswer::AcceptDefault], &opener, Settings::default());

    svc.create(&in_ws(TemplateId::ModuleScript)).unwrap();

    let path = Path::new("/ws/ModuleScript.luau");
    assert_eq!(
        fs.read_file(path).as_deref(),
        Some("local module = {}\n\nreturn module\n")
    );
    assert_eq!(opener.opened(), vec![path.to_path_buf()]);
}

#[test]
fn knit_service_collides_with_existing_file() {
    let fs = MemoryFilesystem::new().with_file("/ws/NameService.lua", "");
    let opener = RecordingOpener::new();
    let settings = Settings::default().with_extension(".lua".parse().unwrap());
    let svc = service(&fs, [ScriptedAnswer::AcceptDefault], &opener, settings);

    let outcome = svc.create(&in_ws(TemplateId::KnitService)).unwrap();

    let file = outcome.file().unwrap();
    assert_eq!(file.final_name, "Name1Service.lua");
    assert_eq!(fs.read_file(Path::new("/ws/Name1Service.lua")).as_deref(), Some(""));
}

#[test]
fn repeated_creation_keeps_counting() {
    let fs = MemoryFilesystem::new().with_dir("/ws");
    let opener = RecordingOpener::new();
    let svc = service(
        &fs,
        [
            ScriptedAnswer::Splice("Input".into()),
            ScriptedAnswer::Splice("Input".into()),
            ScriptedAnswer::Splice("Input".into()),
        ],
        &opener,
        Settings::default(),
    );

    for _ in 0..3 {
        svc.create(&in_ws(TemplateId::KnitController)).unwrap();
    }

    assert_eq!(
        fs.list_files(),
        vec![
            PathBuf::from("/ws/Input1Controller.luau"),
            PathBuf::from("/ws/Input2Controller.luau"),
            PathBuf::from("/ws/InputController.luau"),
        ]
    );
}

#[test]
fn client_name_under_each_convention() {
    for (convention, expected) in [
        (NamingConvention::Fixed, "/ws/Foo.client.luau"),
        (NamingConvention::Free, "/ws/Foo.luau"),
    ] {
        let fs = MemoryFilesystem::new().with_dir("/ws");
        let opener = RecordingOpener::new();
        let settings = Settings::default().with_convention(convention);
        let svc = service(&fs, [ScriptedAnswer::Exact("Foo".into())], &opener, settings);

        svc.create(&in_ws(TemplateId::Client)).unwrap();

        assert_eq!(
            fs.read_file(Path::new(expected)).as_deref(),
            Some("-- Client script\n\n"),
            "convention {convention}"
        );
    }
}

#[test]
fn cancel_leaves_directory_untouched() {
    let fs = MemoryFilesystem::new().with_dir("/ws");
    let opener = RecordingOpener::new();
    let svc = service(&fs, [ScriptedAnswer::Cancel], &opener, Settings::default());

    let outcome = svc.create(&in_ws(TemplateId::Server)).unwrap();

    assert_eq!(outcome, CreateOutcome::Cancelled);
    assert!(fs.list_files().is_empty());
    assert!(opener.opened().is_empty());
}

#[test]
fn typed_extension_is_replaced() {
    let fs = MemoryFilesystem::new().with_dir("/ws");
    let opener = RecordingOpener::new();
    let svc = service(
        &fs,
        [ScriptedAnswer::Exact("Util.lua".into())],
        &opener,
        Settings::default(),
    );

    svc.create(&in_ws(TemplateId::ModuleScript)).unwrap();

    assert!(fs.read_file(Path::new("/ws/Util.luau")).is_some());
}

#[test]
fn write_failure_creates_nothing_and_opens_nothing() {
    let fs = MemoryFilesystem::new().with_dir("/ws").with_read_only("/ws");
    let opener = RecordingOpener::new();
    let svc = service(&fs, [ScriptedAnswer::AcceptDefault], &opener, Settings::default());

    let err = svc.create(&in_ws(TemplateId::ModuleScript)).unwrap_err();

    assert_eq!(err.category(), luafile_core::error::ErrorCategory::Internal);
    assert!(fs.list_files().is_empty());
    assert!(opener.opened().is_empty());
}

#[test]
fn open_failure_keeps_the_file() {
    let fs = MemoryFilesystem::new().with_dir("/ws");
    let opener = RecordingOpener::failing();
    let svc = service(&fs, [ScriptedAnswer::AcceptDefault], &opener, Settings::default());

    let err = svc.create(&in_ws(TemplateId::Server)).unwrap_err();

    assert!(err.to_string().contains("Script.server.luau"));
    assert!(fs.read_file(Path::new("/ws/Script.server.luau")).is_some());
}

#[test]
fn works_against_the_real_filesystem() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("ModuleScript.luau"), "").unwrap();

    let opener = RecordingOpener::new();
    let svc = CreateFileService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ScriptedPrompt::once(ScriptedAnswer::AcceptDefault)),
        Box::new(opener.clone()),
        SharedSettings::default(),
    );
    let request = CreateRequest::new(TemplateId::ModuleScript).with_location(dir.path());

    svc.create(&request).unwrap();

    let created = dir.path().join("ModuleScript1.luau");
    assert_eq!(
        std::fs::read_to_string(&created).unwrap(),
        "local module = {}\n\nreturn module\n"
    );
    assert_eq!(opener.opened(), vec![created]);
}
