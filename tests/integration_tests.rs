use explorer::domain::entities::drive::Drive;
use explorer::domain::entities::resource::{ResolvedResource, ResourceKind};
use explorer::domain::entities::summary::Summary;
use explorer::domain::errors::domain_error::DomainError;
use explorer::domain::errors::selection_error::SelectionError;
use explorer::domain::ports::primary::directory_listing_use_case::DirectoryListingUseCase;
use explorer::domain::ports::primary::resource_selection_use_case::ResourceSelectionUseCase;
use explorer::domain::ports::secondary::drive_provider::DriveProvider;
use explorer::domain::ports::secondary::resource_picker::ResourcePicker;
use explorer::domain::ports::secondary::summarizer::Summarizer;
use explorer::domain::services::directory_listing_service::DirectoryListingService;
use explorer::domain::services::resource_selection_service::ResourceSelectionService;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Answers based on markers in the submitted text and records every request.
#[derive(Default)]
struct ScriptedSummarizer {
    requests: Mutex<Vec<String>>,
}

impl Summarizer for ScriptedSummarizer {
    fn summarize(&self, text: &str) -> Summary {
        self.requests.lock().unwrap().push(text.to_string());
        if text.contains("SERVICE_ERROR") {
            Summary::ServiceError
        } else if text.contains("EXPLODE") {
            Summary::TransportFailure("connection reset by peer".to_string())
        } else {
            Summary::KeyPhrases(text.split_whitespace().map(str::to_string).collect())
        }
    }
}

struct ListingFixture {
    temp_dir: TempDir,
    summarizer: Arc<ScriptedSummarizer>,
    service: DirectoryListingService,
}

impl ListingFixture {
    fn new() -> Self {
        let summarizer = Arc::new(ScriptedSummarizer::default());
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
            service: DirectoryListingService::new(summarizer.clone()),
            summarizer,
        }
    }

    fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    fn write(&self, name: &str, content: impl AsRef<[u8]>) {
        fs::write(self.path().join(name), content).expect("Failed to write test file");
    }

    fn requests(&self) -> Vec<String> {
        self.summarizer.requests.lock().unwrap().clone()
    }

    fn listed_names(&self) -> Vec<String> {
        self.service
            .list_directory(self.path())
            .unwrap()
            .into_iter()
            .map(|row| row.name)
            .collect()
    }

    fn summary_of(&self, name: &str) -> String {
        self.service
            .list_directory(self.path())
            .unwrap()
            .into_iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.summary)
            .expect("file should be listed")
    }
}

#[test]
fn one_row_per_regular_file() {
    let fixture = ListingFixture::new();
    fixture.write("report.txt", "quarterly numbers");
    fixture.write("notes.md", "meeting notes");
    fixture.write("data.csv", "a,b,c");
    fs::create_dir(fixture.path().join("archive")).unwrap();
    fs::write(fixture.path().join("archive").join("old.txt"), "old").unwrap();

    let rows = fixture.service.list_directory(fixture.path()).unwrap();

    assert_eq!(rows.len(), 3);
    let is_nested = |name: &str| name == "archive" || name == "old.txt";
    assert!(!rows.iter().any(|row| is_nested(&row.name)));
    assert_eq!(fixture.requests().len(), 3);
}

#[test]
fn rows_follow_scan_order() {
    let fixture = ListingFixture::new();
    for name in ["c.txt", "a.txt", "b.txt"] {
        fixture.write(name, name);
    }

    let scanned: Vec<String> = fixture
        .service
        .scan_directory(fixture.path())
        .unwrap()
        .into_iter()
        .map(|file| file.name)
        .collect();

    assert_eq!(scanned, fixture.listed_names());
}

#[test]
fn successful_summary_lists_key_phrases() {
    let fixture = ListingFixture::new();
    fixture.write("story.txt", "dragons castles");

    assert_eq!(
        fixture.summary_of("story.txt"),
        "Key phrases extracted: dragons, castles"
    );
}

#[test]
fn failed_summary_only_affects_its_own_row() {
    let fixture = ListingFixture::new();
    fixture.write("broken.txt", "EXPLODE");
    fixture.write("fine.txt", "healthy content");

    let rows = fixture.service.list_directory(fixture.path()).unwrap();

    assert_eq!(rows.len(), 2);
    for row in rows {
        match row.name.as_str() {
            "broken.txt" => assert_eq!(
                row.summary,
                "Azure summarization failed: connection reset by peer"
            ),
            "fine.txt" => assert_eq!(row.summary, "Key phrases extracted: healthy, content"),
            other => panic!("unexpected row {other}"),
        }
    }
}

#[test]
fn unreadable_file_is_reported_on_its_own_row() {
    let fixture = ListingFixture::new();
    fixture.write("vanishing.txt", "here for now");
    fixture.write("steady.txt", "still here");
    let files = fixture.service.scan_directory(fixture.path()).unwrap();

    fs::remove_file(fixture.path().join("vanishing.txt")).unwrap();
    let rows: Vec<_> = files
        .iter()
        .map(|file| fixture.service.summarize(file))
        .collect();

    assert_eq!(rows.len(), 2);
    for row in rows {
        match row.name.as_str() {
            "vanishing.txt" => {
                assert!(row.summary.starts_with("Azure summarization failed: "));
                assert!(row.summary.len() > "Azure summarization failed: ".len());
            }
            "steady.txt" => assert_eq!(row.summary, "Key phrases extracted: still, here"),
            other => panic!("unexpected row {other}"),
        }
    }
    assert_eq!(fixture.requests(), vec!["still here".to_string()]);
}

#[test]
fn service_error_is_reported_verbatim() {
    let fixture = ListingFixture::new();
    fixture.write("rejected.txt", "SERVICE_ERROR");

    assert_eq!(fixture.summary_of("rejected.txt"), "Error summarizing the file.");
}

#[test]
fn missing_directory_yields_an_error_and_no_rows() {
    let fixture = ListingFixture::new();
    let missing = fixture.path().join("gone");

    let error = fixture.service.list_directory(&missing).unwrap_err();

    assert!(matches!(error, DomainError::DirectoryListing(_)));
    assert!(error.to_string().starts_with("Failed to list files: "));
    assert!(fixture.requests().is_empty());
}

#[test]
fn file_path_instead_of_directory_is_an_error() {
    let fixture = ListingFixture::new();
    fixture.write("plain.txt", "text");

    let result = fixture.service.list_directory(&fixture.path().join("plain.txt"));

    assert!(result.is_err());
}

#[test]
fn undetermined_mime_type_reads_unknown() {
    let fixture = ListingFixture::new();
    fixture.write("mystery", "no extension here");
    fixture.write("page.html", "<p>hi</p>");

    let rows = fixture.service.list_directory(fixture.path()).unwrap();
    let mime_of = |name: &str| {
        rows.iter()
            .find(|row| row.name == name)
            .map(|row| row.mime_type.clone())
            .unwrap()
    };

    assert_eq!(mime_of("mystery"), "Unknown");
    assert_eq!(mime_of("page.html"), "text/html");
}

#[test]
fn row_carries_size_and_timestamp() {
    let fixture = ListingFixture::new();
    fixture.write("sized.txt", "0123456789");

    let rows = fixture.service.list_directory(fixture.path()).unwrap();

    assert_eq!(rows[0].size_bytes, 10);
    assert_eq!(rows[0].size_label(), "10 bytes");
    let timestamp = &rows[0].last_modified;
    assert_eq!(timestamp.len(), 19);
    assert_eq!(&timestamp[4..5], "-");
    assert_eq!(&timestamp[10..11], " ");
    assert_eq!(&timestamp[13..14], ":");
}

#[test]
fn invalid_utf8_is_dropped_before_summarizing() {
    let fixture = ListingFixture::new();
    fixture.write("binary.dat", [b'o', b'k', 0xff, 0xfe, b'!']);

    fixture.service.list_directory(fixture.path()).unwrap();

    assert_eq!(fixture.requests(), vec!["ok!".to_string()]);
}

#[test]
fn listing_again_reflects_the_new_contents() {
    let fixture = ListingFixture::new();
    fixture.write("first.txt", "one");
    assert_eq!(fixture.listed_names(), vec!["first.txt".to_string()]);

    fs::remove_file(fixture.path().join("first.txt")).unwrap();
    fixture.write("second.txt", "two");
    fixture.write("third.txt", "three");

    let names = fixture.listed_names();
    assert_eq!(names.len(), 2);
    assert!(!names.contains(&"first.txt".to_string()));
}

struct FakePicker {
    folder: Option<PathBuf>,
    file: Option<PathBuf>,
}

impl ResourcePicker for FakePicker {
    fn pick_folder(&self, _title: &str) -> Option<PathBuf> {
        self.folder.clone()
    }

    fn pick_file(&self, _title: &str) -> Option<PathBuf> {
        self.file.clone()
    }
}

struct FakeDrives(Vec<Drive>);

impl DriveProvider for FakeDrives {
    fn list_drives(&self) -> Vec<Drive> {
        self.0.clone()
    }
}

fn selection(folder: Option<PathBuf>, file: Option<PathBuf>) -> ResourceSelectionService {
    ResourceSelectionService::new(
        Arc::new(FakePicker { folder, file }),
        Arc::new(FakeDrives(Vec::new())),
    )
}

fn resolve_kind(
    service: &ResourceSelectionService,
    kind: ResourceKind,
    drive: Option<&Drive>,
) -> Option<ResolvedResource> {
    service.resolve(Some(kind), drive, "").unwrap()
}

fn drive_at(mount_point: PathBuf) -> Drive {
    Drive {
        name: "Test".to_string(),
        mount_point,
        available_space: 0,
    }
}

#[test]
fn folder_selection_uses_the_chosen_directory() {
    let service = selection(Some(PathBuf::from("/home/user/docs")), None);

    let resolved = resolve_kind(&service, ResourceKind::Folder, None);

    let expected = ResolvedResource::directory(PathBuf::from("/home/user/docs"));
    assert_eq!(resolved, Some(expected));
}

#[test]
fn file_selection_lists_the_parent_directory() {
    let service = selection(None, Some(PathBuf::from("/home/user/docs/cv.pdf")));

    let resolved = resolve_kind(&service, ResourceKind::File, None).unwrap();

    assert_eq!(resolved.display_path, PathBuf::from("/home/user/docs/cv.pdf"));
    assert_eq!(resolved.directory, PathBuf::from("/home/user/docs"));
}

#[test]
fn cancelled_dialogs_resolve_to_nothing() {
    let service = selection(None, None);

    assert_eq!(resolve_kind(&service, ResourceKind::Folder, None), None);
    assert_eq!(resolve_kind(&service, ResourceKind::File, None), None);
}

#[test]
fn existing_drive_root_is_listed() {
    let temp_dir = TempDir::new().unwrap();
    let service = selection(None, None);
    let drive = drive_at(temp_dir.path().to_path_buf());

    let resolved = resolve_kind(&service, ResourceKind::Drive, Some(&drive));

    let expected = ResolvedResource::directory(temp_dir.path().to_path_buf());
    assert_eq!(resolved, Some(expected));
}

#[test]
fn absent_drive_root_is_silently_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let service = selection(None, None);
    let drive = drive_at(temp_dir.path().join("unplugged"));

    assert_eq!(resolve_kind(&service, ResourceKind::Drive, Some(&drive)), None);
    assert_eq!(resolve_kind(&service, ResourceKind::Drive, None), None);
}

#[test]
fn missing_resource_kind_is_rejected_with_a_warning() {
    let service = selection(Some(PathBuf::from("/tmp")), None);

    let error = service.resolve(None, None, "").unwrap_err();

    assert!(matches!(
        error,
        DomainError::Selection(SelectionError::NoResourceKind)
    ));
    assert_eq!(error.to_string(), "Please select a valid resource type.");
}

#[test]
fn drives_come_from_the_provider() {
    let drives = vec![
        drive_at(PathBuf::from("/")),
        drive_at(PathBuf::from("/mnt/usb")),
    ];
    let picker = FakePicker {
        folder: None,
        file: None,
    };
    let service = ResourceSelectionService::new(
        Arc::new(picker),
        Arc::new(FakeDrives(drives.clone())),
    );

    assert_eq!(service.available_drives(), drives);
}
