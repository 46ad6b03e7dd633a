use super::{engines::*, namespace::Namespace, *};
use ruc::*;

fn tmp_cfg() -> EngineCfg {
    EngineCfg::with_path(format!(
        "/tmp/nskv_testing/core_{}",
        rand::random::<u128>()
    ))
}

#[test]
fn namespace_keys_are_prefixed() {
    let ns = Namespace::new("xxx");
    assert_eq!(ns.name(), b"xxx");

    let k = ns.key(b"foo");
    assert!(k.starts_with(ns.as_prefix()));
    assert!(k.ends_with(b"foo"));
    assert!(ns.owns(&k));
    assert_eq!(ns.key(NULL), ns.as_prefix());
}

#[test]
fn namespace_prefix_names_never_collide() {
    // the naive `name ++ logical` layout maps both of these to "abc"
    let a = Namespace::new("a");
    let ab = Namespace::new("ab");
    assert_ne!(a.key("bc"), ab.key("c"));
    assert!(!a.owns(&ab.key("c")));
    assert!(!ab.owns(&a.key("bc")));

    let empty = Namespace::new(NULL);
    assert_ne!(empty.key("x"), a.key(NULL));
}

#[test]
fn namespace_serde_uses_the_raw_name() {
    let ns = Namespace::new("queue-1");
    let json = pnk!(serde_json::to_string(&ns));
    let back: Namespace = pnk!(serde_json::from_str(&json));
    assert_eq!(ns, back);
    assert_eq!(back.key("k"), ns.key("k"));
}

#[test]
fn cfg_defaults_fill_missing_fields() {
    let cfg: EngineCfg =
        pnk!(serde_json::from_str(r#"{"path": "/tmp/x", "sync_writes": true}"#));
    assert_eq!(cfg.path, std::path::PathBuf::from("/tmp/x"));
    assert!(cfg.sync_writes);
    assert!(cfg.create_if_missing);
    assert_eq!(cfg.write_buffer_size, EngineCfg::default().write_buffer_size);
}

#[test]
fn rocks_get_put_delete() {
    let db = pnk!(RocksEngine::open(&tmp_cfg()));

    assert!(pnk!(db.get(b"k")).is_none());
    pnk!(db.put(b"k", b"v"));
    assert_eq!(pnk!(db.get(b"k")), Some(b"v".to_vec()));
    pnk!(db.delete(b"k"));
    assert!(pnk!(db.get(b"k")).is_none());

    // missing keys are fine
    pnk!(db.delete(b"k"));
}

#[test]
fn rocks_batch_applies_in_order() {
    let db = pnk!(RocksEngine::open(&tmp_cfg()));
    pnk!(db.put(b"gone", b"x"));

    pnk!(db.write_batch(|b| {
        b.insert(b"a".to_vec(), b"1".to_vec());
        b.insert(b"b".to_vec(), b"2".to_vec());
        b.remove(b"gone".to_vec());
        b.insert(b"a".to_vec(), b"3".to_vec());
    }));

    assert_eq!(pnk!(db.get(b"a")), Some(b"3".to_vec()));
    assert_eq!(pnk!(db.get(b"b")), Some(b"2".to_vec()));
    assert!(pnk!(db.get(b"gone")).is_none());
}

#[test]
fn rocks_scan_prefix_stays_in_namespace() {
    let db = pnk!(RocksEngine::open(&tmp_cfg()));
    let a = Namespace::new("a");
    let ab = Namespace::new("ab");

    pnk!(db.put(&a.key("1"), b"x"));
    pnk!(db.put(&a.key("2"), b"y"));
    pnk!(db.put(&ab.key("1"), b"z"));

    let hits = pnk!(db.scan_prefix(a.as_prefix()));
    assert_eq!(
        hits,
        vec![(a.key("1"), b"x".to_vec()), (a.key("2"), b"y".to_vec())]
    );
    assert_eq!(pnk!(db.scan_prefix(ab.as_prefix())).len(), 1);
}

#[test]
fn rocks_reopen_keeps_data() {
    let cfg = tmp_cfg().sync_writes(true);

    {
        let db = pnk!(RocksEngine::open(&cfg));
        pnk!(db.write_batch(|b| {
            b.insert(b"k1".to_vec(), b"v1".to_vec());
            b.insert(b"k2".to_vec(), b"v2".to_vec());
        }));
        assert_eq!(db.path(), cfg.path.as_path());
    }

    let db = pnk!(RocksEngine::open(&cfg));
    assert_eq!(pnk!(db.get(b"k1")), Some(b"v1".to_vec()));
    assert_eq!(pnk!(db.get(b"k2")), Some(b"v2".to_vec()));
    pnk!(db.flush());
}

#[test]
fn rocks_open_missing_dir_without_create_fails() {
    let cfg = tmp_cfg().create_if_missing(false);
    assert!(RocksEngine::open(&cfg).is_err());
}
