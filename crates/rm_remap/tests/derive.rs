use rm_remap::info::TypePath;
use rm_remap::ops::{DynamicStruct, ReflectCloneError, ReflectKind, Struct};
use rm_remap::registry::Constructible;
use rm_remap::{FromReflect, Reflect, derive::Reflect, remap};

#[derive(Reflect, Debug, PartialEq)]
struct Config {
    name: String,
    #[reflect(default)]
    retries: u32,
    #[reflect(default = 30)]
    timeout: u64,
    #[reflect(ignore)]
    scratch: Vec<u8>,
}

#[test]
fn struct_info_lists_active_fields() {
    let info = Config::struct_info();

    assert_eq!(info.field_names(), ["name", "retries", "timeout"]);
    assert!(info.field("name").is_some_and(|f| f.is_required()));
    assert!(info.field("retries").is_some_and(|f| f.is_optional()));
    assert!(info.field("timeout").is_some_and(|f| f.type_is::<u64>()));
    assert!(!info.contains("scratch"));
    assert_eq!(info.required().count(), 1);
}

#[test]
fn construct_applies_defaults() {
    let mut args = DynamicStruct::new();
    args.extend("name", String::from("db"));

    let config = Config::construct(args).unwrap();
    assert_eq!(config.name, "db");
    assert_eq!(config.retries, 0);
    assert_eq!(config.timeout, 30);
    assert!(config.scratch.is_empty());
}

#[test]
fn construct_reports_missing_argument() {
    let err = Config::construct(DynamicStruct::new()).unwrap_err();
    assert_eq!(
        err,
        rm_remap::error::ConstructError::MissingArgument {
            dest_type: Config::type_path(),
            field: "name",
        },
    );
}

#[test]
fn struct_access() {
    let config = Config {
        name: String::from("db"),
        retries: 3,
        timeout: 10,
        scratch: vec![1],
    };

    assert_eq!(config.reflect_kind(), ReflectKind::Struct);
    assert_eq!(config.field_len(), 3);
    assert_eq!(config.name_at(1), Some("retries"));
    assert!(config.field("scratch").is_none());
    assert_eq!(
        config.field_at(2).and_then(|v| v.downcast_ref::<u64>()),
        Some(&10),
    );

    let names: Vec<_> = config.iter_fields().map(|(name, _)| name).collect();
    assert_eq!(names, ["name", "retries", "timeout"]);
}

#[test]
fn ignored_field_blocks_reflect_clone() {
    let config = Config {
        name: String::new(),
        retries: 0,
        timeout: 0,
        scratch: Vec::new(),
    };

    let err = config.reflect_clone().unwrap_err();
    assert_eq!(
        err,
        ReflectCloneError::FieldNotCloneable {
            type_path: Config::type_path().into(),
            field: "scratch".into(),
        },
    );
}

#[derive(Reflect, Clone, Debug, PartialEq)]
#[reflect(clone)]
struct Tagged {
    tag: String,
    #[reflect(ignore)]
    hidden: u8,
}

#[test]
fn clone_flag_uses_clone() {
    let tagged = Tagged {
        tag: String::from("t"),
        hidden: 4,
    };

    let cloned = tagged.reflect_clone().unwrap().take::<Tagged>().unwrap();
    assert_eq!(cloned, tagged);
}

#[derive(Reflect, Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn from_reflect_accepts_mappings_only() {
    let point = Point { x: 1, y: 2 };
    assert_eq!(Point::from_reflect(&point), Some(Point { x: 1, y: 2 }));

    let mut dynamic = DynamicStruct::new();
    dynamic.extend("y", 4_i32);
    dynamic.extend("x", 3_i32);
    assert_eq!(Point::from_reflect(&dynamic), Some(Point { x: 3, y: 4 }));

    #[derive(Reflect)]
    struct Other {
        x: i32,
        y: i32,
    }
    assert_eq!(Point::from_reflect(&Other { x: 1, y: 2 }), None);
}

#[test]
fn partial_eq_and_debug() {
    let point = Point { x: 1, y: 2 };

    let mut dynamic = DynamicStruct::new();
    dynamic.extend("x", 1_i32);
    dynamic.extend("y", 2_i32);

    assert_eq!(point.reflect_partial_eq(&dynamic), Some(true));
    assert_eq!(point.reflect_partial_eq(&Point { x: 1, y: 3 }), Some(false));
    assert_eq!(format!("{:?}", point.as_reflect()), "Point { x: 1, y: 2 }");
}

#[derive(Reflect, Debug, PartialEq)]
struct Keywords {
    r#type: String,
}

#[test]
fn raw_identifiers_are_unraw() {
    let mut source = DynamicStruct::new();
    source.extend("type", String::from("t"));

    assert_eq!(Keywords::struct_info().field_names(), ["type"]);
    assert_eq!(
        remap::<Keywords>(&source),
        Ok(Keywords {
            r#type: String::from("t")
        }),
    );
}

#[derive(Reflect)]
#[reflect(type_path = "demo::shapes::Circle")]
struct Circle {
    radius: f32,
}

#[test]
fn custom_type_path() {
    assert_eq!(Circle::type_path(), "demo::shapes::Circle");
    assert_eq!(Circle::type_name(), "Circle");
    assert_eq!(Circle::type_ident(), "Circle");
    assert_eq!(Circle::module_path(), Some("demo::shapes"));

    assert_eq!(Point::type_path(), "derive::Point");
    assert_eq!(Point::module_path(), Some("derive"));
}

#[derive(Reflect, Debug, PartialEq)]
struct Pair<T> {
    first: T,
    #[reflect(default)]
    second: Option<T>,
}

#[test]
fn generic_struct() {
    assert_eq!(<Pair<i32>>::type_path(), "derive::Pair<i32>");
    assert_eq!(<Pair<String>>::type_name(), "Pair<String>");

    let mut source = DynamicStruct::new();
    source.extend("first", 5_i32);

    assert_eq!(
        remap::<Pair<i32>>(&source),
        Ok(Pair {
            first: 5,
            second: None,
        }),
    );
}

#[derive(Reflect, Debug, PartialEq)]
struct Unit;

#[test]
fn unit_struct() {
    assert_eq!(Unit::struct_info().field_len(), 0);
    assert_eq!(remap::<Unit>(&Point { x: 0, y: 0 }), Ok(Unit));
    assert!(Unit.reflect_clone().is_ok());
}
