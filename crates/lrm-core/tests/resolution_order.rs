//! Lookup order, bundled-loader exclusion and search-path delegation, checked
//! with loaders that record every call made on them.

use lrm_core::{
    BundledResourceLoader, FileResourceLoader, LicenseResourceManager, LoaderRegistry, Resource,
    ResourceError, ResourceLoader, DEFAULT_HEADER,
};
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

#[derive(Debug, Default)]
struct CallLog {
    queries: Vec<(String, String)>,
    search_paths: Vec<(String, String)>,
}

type SharedLog = Rc<RefCell<CallLog>>;

/// Loader that answers from a fixed list of names and records every call.
#[derive(Debug)]
struct RecordingLoader {
    id: &'static str,
    hits: Vec<&'static str>,
    bundled: bool,
    fail_with_io: bool,
    log: SharedLog,
}

impl RecordingLoader {
    fn new(id: &'static str, hits: &[&'static str], log: &SharedLog) -> Self {
        Self {
            id,
            hits: hits.to_vec(),
            bundled: false,
            fail_with_io: false,
            log: Rc::clone(log),
        }
    }

    fn bundled(mut self) -> Self {
        self.bundled = true;
        self
    }

    fn failing(mut self) -> Self {
        self.fail_with_io = true;
        self
    }
}

impl ResourceLoader for RecordingLoader {
    fn get_resource(&self, name: &str) -> Result<Resource, ResourceError> {
        self.log
            .borrow_mut()
            .queries
            .push((self.id.to_string(), name.to_string()));
        if self.fail_with_io {
            return Err(ResourceError::LoadFailed {
                name: name.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            });
        }
        if self.hits.iter().any(|h| *h == name) {
            Ok(Resource::new(format!("{}:{}", self.id, name), name))
        } else {
            Err(ResourceError::NotFound(name.to_string()))
        }
    }

    fn add_search_path(&mut self, path: &str) {
        self.log
            .borrow_mut()
            .search_paths
            .push((self.id.to_string(), path.to_string()));
    }

    fn is_host_bundled(&self) -> bool {
        self.bundled
    }

    fn kind(&self) -> &'static str {
        "recording"
    }
}

fn queried(log: &SharedLog) -> Vec<String> {
    log.borrow().queries.iter().map(|(id, _)| id.clone()).collect()
}

#[test]
fn first_eligible_hit_wins_and_later_loaders_are_not_queried() {
    let log = SharedLog::default();
    let registry = LoaderRegistry::new()
        .with("a", RecordingLoader::new("a", &[], &log))
        .unwrap()
        .with("b", RecordingLoader::new("b", &["license.txt"], &log))
        .unwrap()
        .with("c", RecordingLoader::new("c", &["license.txt"], &log))
        .unwrap();
    let mgr = LicenseResourceManager::new(registry);

    let res = mgr.get_resource("license.txt").unwrap();
    assert_eq!(res.name(), "b:license.txt");
    assert_eq!(queried(&log), vec!["a", "b"]);
}

#[test]
fn bundled_loader_never_queried_for_other_names() {
    let log = SharedLog::default();
    let registry = LoaderRegistry::new()
        .with(
            "classpath",
            RecordingLoader::new("classpath", &["license.txt"], &log).bundled(),
        )
        .unwrap()
        .with("file", RecordingLoader::new("file", &[], &log))
        .unwrap();
    let mgr = LicenseResourceManager::new(registry);

    let err = mgr.get_resource("license.txt").unwrap_err();
    assert!(matches!(err, ResourceError::NotFound(ref n) if n == "license.txt"));
    assert_eq!(queried(&log), vec!["file"]);
}

#[test]
fn bundled_loader_eligible_for_default_header() {
    let log = SharedLog::default();
    let registry = LoaderRegistry::new()
        .with(
            "classpath",
            RecordingLoader::new("classpath", &[DEFAULT_HEADER], &log).bundled(),
        )
        .unwrap()
        .with("file", RecordingLoader::new("file", &[DEFAULT_HEADER], &log))
        .unwrap();
    let mgr = LicenseResourceManager::new(registry);

    let res = mgr.get_resource(DEFAULT_HEADER).unwrap();
    assert_eq!(res.name(), "classpath:config/maven-header.txt");
    assert_eq!(queried(&log), vec!["classpath"]);
}

#[test]
fn default_header_match_is_exact() {
    let log = SharedLog::default();
    let registry = LoaderRegistry::new()
        .with(
            "classpath",
            RecordingLoader::new("classpath", &["/config/maven-header.txt"], &log).bundled(),
        )
        .unwrap();
    let mgr = LicenseResourceManager::new(registry);

    assert!(mgr
        .get_resource("/config/maven-header.txt")
        .unwrap_err()
        .is_not_found());
    assert!(queried(&log).is_empty());
}

#[test]
fn exhaustion_reports_requested_name() {
    let log = SharedLog::default();
    let registry = LoaderRegistry::new()
        .with("a", RecordingLoader::new("a", &[], &log))
        .unwrap()
        .with("b", RecordingLoader::new("b", &[], &log))
        .unwrap();
    let mgr = LicenseResourceManager::new(registry);

    match mgr.get_resource("headers/apache.txt") {
        Err(ResourceError::NotFound(name)) => assert_eq!(name, "headers/apache.txt"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert_eq!(queried(&log), vec!["a", "b"]);
}

#[test]
fn hard_loader_error_stops_the_search() {
    let log = SharedLog::default();
    let registry = LoaderRegistry::new()
        .with("broken", RecordingLoader::new("broken", &[], &log).failing())
        .unwrap()
        .with("b", RecordingLoader::new("b", &["license.txt"], &log))
        .unwrap();
    let mgr = LicenseResourceManager::new(registry);

    assert!(matches!(
        mgr.get_resource("license.txt"),
        Err(ResourceError::LoadFailed { .. })
    ));
    assert_eq!(queried(&log), vec!["broken"]);
}

#[test]
fn add_search_path_delegates_once_to_named_loader() {
    let log = SharedLog::default();
    let registry = LoaderRegistry::new()
        .with("a", RecordingLoader::new("a", &[], &log))
        .unwrap()
        .with("b", RecordingLoader::new("b", &[], &log))
        .unwrap();
    let mut mgr = LicenseResourceManager::new(registry);

    mgr.add_search_path("b", "/opt/headers/").unwrap();
    assert_eq!(
        log.borrow().search_paths,
        vec![("b".to_string(), "/opt/headers/".to_string())]
    );
}

#[test]
fn add_search_path_unknown_id_touches_nothing() {
    let log = SharedLog::default();
    let registry = LoaderRegistry::new()
        .with("a", RecordingLoader::new("a", &[], &log))
        .unwrap();
    let mut mgr = LicenseResourceManager::new(registry);

    let err = mgr.add_search_path("unknown-id", "/tmp").unwrap_err();
    assert!(matches!(err, ResourceError::UnknownLoader(ref id) if id == "unknown-id"));
    assert_eq!(err.to_string(), "unknown resource loader: unknown-id");
    assert!(log.borrow().search_paths.is_empty());
}

#[test]
fn real_loaders_bundled_first_then_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("license.txt"), b"Copyright ACME Corp").unwrap();

    let registry = LoaderRegistry::new()
        .with("classpath", BundledResourceLoader::with_defaults())
        .unwrap()
        .with("file", FileResourceLoader::new())
        .unwrap();
    let mut mgr = LicenseResourceManager::new(registry);

    assert!(mgr.get_resource("license.txt").unwrap_err().is_not_found());

    mgr.add_search_path("file", dir.path().to_str().unwrap())
        .unwrap();
    let res = mgr.get_resource("license.txt").unwrap();
    assert_eq!(res.to_text().unwrap(), "Copyright ACME Corp");

    let header = mgr.get_resource(DEFAULT_HEADER).unwrap();
    assert_eq!(header.name(), "bundled:config/maven-header.txt");
}

#[cfg(target_os = "linux")]
#[test]
fn unreadable_file_falls_through_to_later_loader() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("mem"), b"project copy").unwrap();

    let registry = LoaderRegistry::new()
        .with("file", FileResourceLoader::with_search_paths(["/proc/self"]))
        .unwrap()
        .with("project", FileResourceLoader::with_search_paths([dir.path()]))
        .unwrap();
    let mgr = LicenseResourceManager::new(registry);

    let res = mgr.get_resource("mem").unwrap();
    assert_eq!(res.to_text().unwrap(), "project copy");
    assert_eq!(res.name(), dir.path().join("mem").display().to_string());
}
