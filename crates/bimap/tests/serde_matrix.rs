#![cfg(feature = "serde")]

use splay_bimap::Bimap;

#[test]
fn serializes_pairs_in_left_order_matrix() {
    let mut map = Bimap::new();
    map.insert(3, "c".to_string());
    map.insert(1, "a".to_string());
    map.insert(2, "b".to_string());
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"[[1,"a"],[2,"b"],[3,"c"]]"#);

    let back: Bimap<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, map);
}

#[test]
fn rejects_duplicate_keys_matrix() {
    let err = serde_json::from_str::<Bimap<i32, String>>(r#"[[1,"a"],[2,"a"]]"#).unwrap_err();
    assert!(err.to_string().contains("duplicate key"));
    assert!(serde_json::from_str::<Bimap<i32, String>>(r#"[[1,"a"],[1,"b"]]"#).is_err());
}
