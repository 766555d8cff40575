use super::*;

#[test]
fn test_absolute_name() {
    assert_eq!(absolute_name("foo", "example.com"), "foo.example.com");
    assert_eq!(absolute_name("a.b", "example.com"), "a.b.example.com");
    assert_eq!(absolute_name("foo.", "example.com"), "foo.example.com");
    assert_eq!(absolute_name("foo", "example.com."), "foo.example.com.");
}

#[test]
fn test_absolute_name_apex() {
    assert_eq!(absolute_name("", "example.com"), "example.com");
    assert_eq!(absolute_name("@", "example.com"), "example.com");
}

#[test]
fn test_absolute_name_without_zone() {
    assert_eq!(absolute_name("foo.example.com.", ""), "foo.example.com");
}

#[test]
fn test_relative_name() {
    assert_eq!(relative_name("foo.example.com", "example.com"), "foo");
    assert_eq!(relative_name("foo.example.com.", "example.com."), "foo");
    assert_eq!(relative_name("a.b.example.com", "example.com"), "a.b");
    assert_eq!(relative_name("Foo.Example.com", "example.com"), "Foo");
    assert_eq!(relative_name("example.com", "example.com"), "@");
}

#[test]
fn test_relative_name_outside_zone() {
    assert_eq!(relative_name("foo.other.org", "example.com"), "foo.other.org");
    // suffix match has to fall on a label boundary
    assert_eq!(relative_name("fooexample.com", "example.com"), "fooexample.com");
    assert_eq!(relative_name("com", "example.com"), "com");
}

#[test]
fn test_normalize_zone_name() {
    assert_eq!(normalize_zone_name("example.com."), "example.com");
    assert_eq!(normalize_zone_name("example.com"), "example.com");
    assert_eq!(normalize_zone_name("example.com.."), "example.com.");
}

#[test]
fn test_record_deserialize_defaults() {
    let yaml = r#"
type: TXT
name: foo
value: bar
"#;
    let record: Record = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(record, Record::new("TXT", "foo", "bar", 0));
}
