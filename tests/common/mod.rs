// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed project + template package pair and a
// fluent builder so each integration test can set up an isolated environment
// without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::Path;

use scaffold_cli::config::Config;
use scaffold_cli::paths::Paths;
use scaffold_cli::salt::SaltSource;

/// Minimal settings template: carries the idempotency marker and the salt
/// placeholder, nothing else.
pub const SETTINGS_TEMPLATE: &str = "// START SHEPHERD CONFIG\n\
     $settings['hash_salt'] = '<<<DEFAULT_HASH_SALT>>>';\n\
     // END SHEPHERD CONFIG\n";

/// Salt source that repeats a fixed byte, for deterministic injected content.
#[derive(Debug)]
pub struct FixedSaltSource(pub u8);

impl SaltSource for FixedSaltSource {
    fn fill(&self, buf: &mut [u8]) {
        buf.fill(self.0);
    }
}

/// An isolated project + template package pair backed by a
/// [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct TestProject {
    /// Temporary directory containing the project tree and vendor directory.
    pub root: tempfile::TempDir,
    /// Resolved layout over the temporary tree.
    pub paths: Paths,
}

impl TestProject {
    /// Create a project with a populated template package: every default
    /// manifest origin file plus the settings template fixture.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let project = root.path().join("project");
        let paths = Paths::from_roots(project.clone(), project.join("vendor"));

        std::fs::create_dir_all(&project).expect("create project dir");
        std::fs::write(project.join("composer.json"), "{}\n").expect("write composer.json");
        std::fs::create_dir_all(paths.package()).expect("create package dir");

        let template = paths.settings_template();
        std::fs::create_dir_all(template.parent().expect("template parent"))
            .expect("create fixtures dir");
        std::fs::write(&template, SETTINGS_TEMPLATE).expect("write settings template");

        let fixture = Self { root, paths };
        let config = fixture.config();
        for entry in config
            .required
            .entries()
            .iter()
            .chain(config.optional.entries())
        {
            fixture.write_origin(&entry.origin_dir.join(&entry.filename), &entry.filename);
        }
        fixture
    }

    /// Path to the project root.
    pub fn project_path(&self) -> &Path {
        self.paths.project()
    }

    /// Load the configuration the engine would use for this layout.
    pub fn config(&self) -> Config {
        Config::load(&self.paths).expect("load config")
    }

    /// Expected content of the template copy of `filename`.
    pub fn origin_content(filename: &str) -> String {
        format!("template {filename}\n")
    }

    fn write_origin(&self, origin: &Path, filename: &str) {
        std::fs::create_dir_all(origin.parent().expect("origin parent"))
            .expect("create origin parent");
        std::fs::write(origin, Self::origin_content(filename)).expect("write origin file");
    }
}

/// Fluent builder for [`TestProject`].
///
/// Allows individual tests to customise the tree before the fixture is used
/// without modifying the shared setup.
pub struct TestProjectBuilder {
    fixture: TestProject,
}

impl TestProjectBuilder {
    /// Begin building a new fixture with a fully populated template package.
    pub fn new() -> Self {
        Self {
            fixture: TestProject::new(),
        }
    }

    /// Write `content` as the project's `settings.php`, creating the
    /// `web/sites/default` tree.
    pub fn with_settings_file(self, content: &str) -> Self {
        let target = self.fixture.paths.settings_file();
        std::fs::create_dir_all(target.parent().expect("settings parent"))
            .expect("create settings dir");
        std::fs::write(&target, content).expect("write settings file");
        self
    }

    /// Write `content` as the project's `.gitignore`.
    pub fn with_gitignore(self, content: &str) -> Self {
        std::fs::write(self.fixture.paths.gitignore_file(), content).expect("write .gitignore");
        self
    }

    /// Finish building and return the configured fixture.
    pub fn build(self) -> TestProject {
        self.fixture
    }
}
