/// Factory dispatch and invocation tests
use crate::*;
use serde_json::json;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use xyfy_common::MockFileSystem;

#[cfg(test)]
mod factory_tests {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    fn echo() -> Component {
        Component::named("Echo", Value::Object)
    }

    #[test]
    fn test_named_and_direct_dispatch_agree() {
        init_tracing();
        let x = xyfy([("echo", echo())]);
        let props = Props::from(json!({ "id": "root" }));
        let children = [Value::from("a"), Value::from("b")];

        let by_name = x.create("echo", Some(&props), &children).unwrap();
        let by_ref = x.create(echo(), Some(&props), &children).unwrap();
        let direct = jsx(&echo(), Some(&props), &children).unwrap();

        assert_eq!(by_name, by_ref);
        assert_eq!(by_ref, direct);
        assert_eq!(
            by_name,
            Value::from(json!({ "id": "root", "children": ["a", "b"] }))
        );
    }

    #[test]
    fn test_unknown_name_fails_at_call_time() {
        init_tracing();
        let x = xyfy([("echo", echo())]);

        assert!(x.resolve(&ComponentRef::from("missing")).is_none());
        match x.create("missing", None, &[]) {
            Err(RuntimeError::UnresolvedComponent { name }) => assert_eq!(name, "missing"),
            other => panic!("Expected UnresolvedComponent, got {:?}", other),
        }
    }

    #[test]
    fn test_component_called_exactly_once_with_merged_props() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let counted = Component::new(move |props| {
            counter.fetch_add(1, Ordering::SeqCst);
            Value::from(props.len() as f64)
        });

        let node = jsx(&counted, None, &[Value::from(1)]).unwrap();
        assert_eq!(node, Value::from(1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_return_value_is_passed_through() {
        let constant = Component::new(|_| Value::from("node"));
        let x = xyfy([("c", constant.clone())]);
        assert_eq!(x.create("c", None, &[]).unwrap(), Value::from("node"));
        assert_eq!(x.invoke(&constant, None, &[]).unwrap(), Value::from("node"));
    }

    #[test]
    fn test_fragment_through_factory() {
        let x = xyfy([("echo", echo())]);
        let group = x
            .create(fragment(), None, &[Value::from(2), Value::from(3)])
            .unwrap();
        assert!(is_fragment(&group));

        let node = x.create("echo", None, &[Value::from(1), group]).unwrap();
        assert_eq!(node, Value::from(json!({ "children": [1, 2, 3] })));
    }

    #[test]
    fn test_intrinsic_table_queries() {
        let x = xyfy([("b", echo()), ("a", echo())]);
        assert_eq!(x.intrinsic_names(), vec!["a", "b"]);
        assert!(x.has_intrinsic("a"));
        assert!(!x.has_intrinsic("c"));
    }

    #[test]
    fn test_factory_is_shareable_across_threads() {
        let x = xyfy([("echo", echo())]);
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let x = x.clone();
                std::thread::spawn(move || x.create("echo", None, &[Value::from(i)]).unwrap())
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let node = handle.join().unwrap();
            assert_eq!(node, Value::from(json!({ "children": i })));
        }
    }

    #[test]
    fn test_config_dir_enables_null_rejection() {
        init_tracing();
        let mut fs = MockFileSystem::new();
        fs.add_file(
            Path::new("/app").join("xyfy.config.json"),
            r#"{ "nullChildren": "reject" }"#,
        );

        let x = Factory::from_config_dir([("echo", echo())], &fs, Path::new("/app")).unwrap();
        assert_eq!(x.config().null_children, NullChildPolicy::Reject);

        let result = x.create("echo", None, &[Value::from(1), Value::Null]);
        assert!(matches!(result, Err(RuntimeError::NullChild { position: 1 })));

        // Merging happens before the call, so a null child wins over a missing name
        let result = x.create("missing", None, &[Value::Null]);
        assert!(matches!(result, Err(RuntimeError::NullChild { .. })));
    }

    #[test]
    fn test_bad_config_file_is_reported() {
        let mut fs = MockFileSystem::new();
        fs.add_file(Path::new("/app").join("xyfy.config.json"), "{ not json");

        let result = Factory::from_config_dir([("echo", echo())], &fs, Path::new("/app"));
        assert!(matches!(result, Err(RuntimeError::Config(_))));
    }

    #[test]
    fn test_default_factory_keeps_null_children() {
        let x = xyfy([("echo", echo())]);
        let node = x.create("echo", None, &[Value::Null]).unwrap();
        assert_eq!(node, Value::from(json!({ "children": null })));
    }
}
