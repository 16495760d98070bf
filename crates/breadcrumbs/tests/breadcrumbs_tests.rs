use breadcrumbs::{Bread, BreadError, Crumb, Extra, SiteConfig};
use serde_json::json;

const SITE_NAME: &str = "Some site Name";

fn extra(pairs: &[(&str, serde_json::Value)]) -> Extra {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_breadcrumbs_can_be_collected() {
    let crumbs: Vec<Crumb> = Bread::new(SITE_NAME).into_iter().collect();
    assert!(!crumbs.is_empty());
}

#[test]
fn test_default_site_crumb() {
    let bread = Bread::new(SITE_NAME);
    let [crumb] = bread.as_slice() else {
        panic!("Expected a single site crumb");
    };

    assert_eq!(crumb.label(), SITE_NAME);
    assert_eq!(crumb.heading(), SITE_NAME);
    assert_eq!(crumb.url_path(), Some("/"));
    assert!(crumb.extra().is_empty());
}

#[test]
fn test_changed_site_attributes() {
    let site_extra = extra(&[("a", json!(1)), ("b", json!(2))]);
    let config = SiteConfig::builder()
        .site_name(SITE_NAME)
        .url_path("/some/other/")
        .heading("something different")
        .extra(site_extra.clone())
        .build()
        .unwrap();

    let bread = Bread::from_config(&config);
    assert_eq!(bread.len(), 1);

    let crumb = &bread[0];
    assert_eq!(crumb.label(), SITE_NAME);
    assert_eq!(crumb.heading(), "something different");
    assert_eq!(crumb.url_path(), Some("/some/other/"));
    assert_eq!(crumb.extra(), &site_extra);
}

#[test]
fn test_empty_site_url_path_is_not_a_link() {
    let config = SiteConfig::builder()
        .site_name(SITE_NAME)
        .url_path("")
        .build()
        .unwrap();

    assert!(!Bread::from_config(&config).site().has_link());
}

#[test]
fn test_adding_is_done_in_correct_order() {
    let mut bread = Bread::new(SITE_NAME);
    let test_extra = extra(&[("1", json!(2))]);
    bread.add_with(
        "Label",
        Some("Heading"),
        Some("/test/"),
        Some(test_extra.clone()),
    );

    let [site_crumb, test_crumb] = bread.as_slice() else {
        panic!("Expected two crumbs");
    };

    assert_eq!(site_crumb, &Crumb::new(SITE_NAME).with_url_path("/"));

    assert_eq!(test_crumb.label(), "Label");
    assert_eq!(test_crumb.heading(), "Heading");
    assert_eq!(test_crumb.url_path(), Some("/test/"));
    assert_eq!(test_crumb.extra(), &test_extra);
}

#[test]
fn test_adding_defaults() {
    let mut bread = Bread::new(SITE_NAME);
    bread.add("some label");

    assert_eq!(bread.len(), 2);
    assert_eq!(bread[0].label(), SITE_NAME);

    let test_crumb = &bread[1];
    assert_eq!(test_crumb.label(), "some label");
    assert_eq!(test_crumb.heading(), "some label");
    assert!(test_crumb.url_path().is_none());
    assert!(test_crumb.extra().is_empty());
}

#[test]
fn test_crumb_equality_covers_every_field() {
    let base = Crumb::from_parts(
        "label",
        Some("heading"),
        Some("/path/"),
        Some(extra(&[("k", json!("v"))])),
    );
    let same = Crumb::new("label")
        .with_heading("heading")
        .with_url_path("/path/")
        .with_extra_entry("k", "v");
    assert_eq!(base, same);

    assert_ne!(base, same.clone().with_heading("other"));
    assert_ne!(base, same.clone().with_url_path("/other/"));
    assert_ne!(base, same.clone().with_url_path(""));
    assert_ne!(base, same.clone().with_extra(Extra::new()));
    assert_ne!(
        base,
        Crumb::from_parts(
            "other",
            Some("heading"),
            Some("/path/"),
            Some(extra(&[("k", json!("v"))])),
        )
    );
}

#[test]
fn test_from_crumb() {
    let crumb = Crumb::new("Only").with_url_path("/only/");
    let bread = Bread::from_crumb(crumb.clone());

    assert_eq!(bread.as_slice(), std::slice::from_ref(&crumb));
}

#[test]
fn test_from_crumbs_preserves_order() {
    let crumbs = vec![Crumb::new("c1"), Crumb::new("c2"), Crumb::new("c3")];
    let bread = Bread::from_crumbs(crumbs.clone()).unwrap();

    // Iteration is restartable
    for _ in 0..2 {
        let seen: Vec<&Crumb> = bread.iter().collect();
        assert_eq!(seen, crumbs.iter().collect::<Vec<_>>());
    }
    assert_eq!(bread.site().label(), "c1");
    assert_eq!(bread.current().label(), "c3");
}

#[test]
fn test_from_crumbs_empty_fails() {
    let result = Bread::from_crumbs(std::iter::empty::<Crumb>());
    assert!(matches!(result, Err(BreadError::InvalidArgument { .. })));
}

#[test]
fn test_index_out_of_bounds() {
    let bread = Bread::new(SITE_NAME);
    match bread.crumb(5) {
        Err(BreadError::IndexOutOfBounds { index, len }) => {
            assert_eq!(index, 5);
            assert_eq!(len, 1);
        }
        other => panic!("Expected IndexOutOfBounds, got {other:?}"),
    }
}

#[test]
#[should_panic]
fn test_index_operator_panics_out_of_bounds() {
    let bread = Bread::new(SITE_NAME);
    let _ = &bread[5];
}

#[test]
fn test_crumb_deserialize_normalizes() {
    let crumb: Crumb = serde_json::from_str(r#"{"label": "Docs", "url_path": ""}"#).unwrap();
    assert_eq!(crumb, Crumb::new("Docs"));
}

#[test]
fn test_bread_serde() {
    let mut bread = Bread::new(SITE_NAME);
    bread.add_with("Docs", None, Some("/docs/"), None);

    let value = serde_json::to_value(&bread).unwrap();
    assert_eq!(
        value,
        json!([
            {"label": SITE_NAME, "heading": SITE_NAME, "url_path": "/"},
            {"label": "Docs", "heading": "Docs", "url_path": "/docs/"},
        ])
    );

    let err = serde_json::from_str::<Bread>("[]").unwrap_err();
    assert!(err.to_string().contains("at least one crumb"));
}
