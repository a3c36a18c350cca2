mod common;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use common::{ServerTarget, SwitchSource};
use strata::{Bindable, Config, ConfigBuilder, Field, Slot, StrataError};
use strata_sources::LiteralSource;

// ── Explicit reloads ───────────────────────────────────────

#[test]
fn reload_rebinds_with_new_value_and_notifies_once() {
    let source = SwitchSource::new("host", "value1");
    let config = Config::new();
    config.add_source(source.clone());

    let target = Arc::new(Mutex::new(ServerTarget::default()));
    config.bind(&target);
    assert_eq!(target.lock().host, "value1");
    assert_eq!(target.lock().notified, 0);

    source.set("value2");
    config.reload();

    assert_eq!(target.lock().host, "value2");
    assert_eq!(target.lock().notified, 1);
}

#[test]
fn reload_with_identical_values_does_not_notify_again() {
    let source = SwitchSource::new("host", "value1");
    let config = Config::new();
    config.add_source(source.clone());

    let target = Arc::new(Mutex::new(ServerTarget::default()));
    config.bind(&target);

    // Unchanged source output: rebind happens, nothing to announce.
    config.reload();
    assert_eq!(target.lock().notified, 0);

    source.set("value2");
    config.reload();
    assert_eq!(target.lock().notified, 1);

    config.reload();
    assert_eq!(target.lock().notified, 1);
}

#[test]
fn targets_rebind_in_registration_order() {
    struct Ordered {
        name: &'static str,
        value: String,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Bindable for Ordered {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![Field::new("host", Slot::Str(&mut self.value))]
        }

        fn notify(&mut self) {
            self.log.lock().push(self.name);
        }
    }

    let source = SwitchSource::new("host", "value1");
    let config = Config::new();
    config.add_source(source.clone());

    let log = Arc::new(Mutex::new(Vec::new()));
    let first = Arc::new(Mutex::new(Ordered {
        name: "first",
        value: String::new(),
        log: log.clone(),
    }));
    let second = Arc::new(Mutex::new(Ordered {
        name: "second",
        value: String::new(),
        log: log.clone(),
    }));
    config.bind(&first);
    config.bind(&second);

    source.set("value2");
    config.reload();

    assert_eq!(*log.lock(), vec!["first", "second"]);
}

// ── Watch-driven reloads ───────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn watched_file_write_triggers_rebind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.conf");
    std::fs::write(&path, "host: value1\n").unwrap();

    let config = ConfigBuilder::new()
        .with_file(&path, ":")
        .with_watch(&path)
        .build();

    let target = Arc::new(Mutex::new(ServerTarget::default()));
    config.bind(&target);
    assert_eq!(target.lock().host, "value1");

    std::fs::write(&path, "host: value2\n").unwrap();

    let mut updated = false;
    for _ in 0..100 {
        tokio::time::sleep(Duration::from_millis(50)).await;
        if target.lock().host == "value2" {
            updated = true;
            break;
        }
    }
    assert!(updated, "watched write never reached the bound target");
    assert_eq!(target.lock().notified, 1);

    config.close();
}

#[tokio::test]
async fn invalid_watch_path_reports_but_config_survives() {
    let config = Config::new();
    let mut errors = config.errors().unwrap();
    config.add_source(LiteralSource::new().with("key", "value"));

    config.watch("/nonexistent/path/app.conf");

    assert!(matches!(errors.try_recv(), Ok(StrataError::Watch(_))));
    assert_eq!(config.values().get("key"), Some("value".to_string()));
}

#[test]
fn watch_without_a_runtime_reports_instead_of_panicking() {
    let config = Config::new();
    let mut errors = config.errors().unwrap();

    config.watch("/tmp/app.conf");

    assert!(matches!(errors.try_recv(), Ok(StrataError::Watch(_))));
}
