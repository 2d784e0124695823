//! Inject generated configuration into the project's settings entry point.

use anyhow::{Context as _, Result};

use super::{Action, Context};
use crate::salt;
use crate::tasks::{AppendFile, Task};

/// Appends a rendered settings block — including a freshly generated hash
/// salt — to `settings.php`, exactly once for the lifetime of the file.
///
/// The file itself is provisioned by the upstream Drupal scaffold; when it is
/// absent there is nothing to do. Idempotency rests solely on the marker
/// substring inside the already-written block, so the marker must never
/// appear in the template's own prose.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrupalSettings;

impl Action for DrupalSettings {
    fn name(&self) -> &str {
        "Inject settings"
    }

    fn plan(&self, ctx: &Context) -> Result<Vec<Task>> {
        let settings = &ctx.config.settings;

        // settings.php comes from the upstream scaffold; absent means skip.
        if !settings.target.is_file() {
            ctx.log.debug(&format!(
                "no settings file at {}",
                settings.target.display()
            ));
            return Ok(vec![]);
        }

        let current = std::fs::read_to_string(&settings.target)
            .with_context(|| format!("reading {}", settings.target.display()))?;
        if contains_marker(&current, &settings.marker) {
            return Ok(vec![]);
        }

        let template = std::fs::read_to_string(&settings.template)
            .with_context(|| format!("reading settings template {}", settings.template.display()))?;
        let hash_salt = salt::hash_salt(ctx.salt.as_ref());
        let data = template.replace(&settings.placeholder, &hash_salt);

        Ok(vec![
            AppendFile::new(settings.target.clone(), format!("\n{data}")).into(),
        ])
    }
}

/// Whether the generated block has already been injected.
///
/// Substring search is deliberately simple and preserved as-is; swapping in a
/// structured sentinel only requires changing this predicate.
fn contains_marker(content: &str, marker: &str) -> bool {
    content.contains(marker)
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::actions::execute;
    use crate::actions::test_helpers::{make_context, setup_layout};
    use crate::paths::Paths;

    const TEMPLATE: &str = "// START SHEPHERD CONFIG\n$settings['hash_salt'] = '<<<DEFAULT_HASH_SALT>>>';\n// END SHEPHERD CONFIG\n";

    fn write_fixture(paths: &Paths, settings_content: &str) {
        let target = paths.settings_file();
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        std::fs::write(&target, settings_content).unwrap();

        let template = paths.settings_template();
        std::fs::create_dir_all(template.parent().unwrap()).unwrap();
        std::fs::write(&template, TEMPLATE).unwrap();
    }

    #[test]
    fn missing_settings_file_plans_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = make_context(setup_layout(tmp.path()));

        assert!(DrupalSettings.plan(&ctx).unwrap().is_empty());
    }

    #[test]
    fn marker_present_plans_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = setup_layout(tmp.path());
        write_fixture(&paths, "<?php\n// START SHEPHERD CONFIG\n");
        let ctx = make_context(paths);

        assert!(DrupalSettings.plan(&ctx).unwrap().is_empty());
    }

    #[test]
    fn plans_single_append_with_rendered_salt() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = setup_layout(tmp.path());
        write_fixture(&paths, "<?php\n");
        let ctx = make_context(paths);

        let tasks = DrupalSettings.plan(&ctx).unwrap();
        assert_eq!(tasks.len(), 1);
        let Task::Append(append) = &tasks[0] else {
            panic!("expected an append task");
        };
        assert!(append.data.starts_with('\n'));
        // FixedSaltSource(0) encodes 55 zero bytes as 74 'A's.
        assert!(append.data.contains(&format!("'{}'", "A".repeat(74))));
        assert!(!append.data.contains("<<<DEFAULT_HASH_SALT>>>"));
    }

    #[test]
    fn injection_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = setup_layout(tmp.path());
        write_fixture(&paths, "<?php\n");
        let target = paths.settings_file();
        let ctx = make_context(paths);

        execute(&DrupalSettings, &ctx).unwrap();
        let after_first = std::fs::read_to_string(&target).unwrap();
        assert!(after_first.starts_with("<?php\n"));
        assert!(after_first.contains("START SHEPHERD CONFIG"));

        execute(&DrupalSettings, &ctx).unwrap();
        let after_second = std::fs::read_to_string(&target).unwrap();
        assert_eq!(after_first, after_second);
        assert!(DrupalSettings.plan(&ctx).unwrap().is_empty());
    }

    #[test]
    fn user_content_is_preserved() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = setup_layout(tmp.path());
        write_fixture(&paths, "<?php\n$settings['mine'] = true;\n");
        let target = paths.settings_file();
        let ctx = make_context(paths);

        execute(&DrupalSettings, &ctx).unwrap();
        let content = std::fs::read_to_string(&target).unwrap();
        assert!(content.starts_with("<?php\n$settings['mine'] = true;\n"));
    }

    #[test]
    fn unreadable_template_fails_the_plan() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = setup_layout(tmp.path());
        let target = paths.settings_file();
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        std::fs::write(&target, "<?php\n").unwrap();
        // No template written.
        let ctx = make_context(paths);

        assert!(DrupalSettings.plan(&ctx).is_err());
    }

    #[test]
    fn marker_predicate_is_plain_substring_search() {
        assert!(contains_marker("abc START SHEPHERD CONFIG xyz", "START SHEPHERD CONFIG"));
        assert!(!contains_marker("abc", "START SHEPHERD CONFIG"));
    }
}
