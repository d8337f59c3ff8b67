/* src/server/core/rust/src/router/tests.rs */

use std::collections::BTreeMap;

use super::*;

fn config() -> I18nConfig {
  let ja = ["about", "projects", "resume", "blog"].map(|r| (r.to_string(), r.to_string()));
  let es = [("about", "sobre-mi"), ("projects", "proyectos"), ("resume", "curriculum"), ("blog", "blog")]
    .map(|(r, s)| (r.to_string(), s.to_string()));
  I18nConfig {
    locales: vec!["en".into(), "ja".into(), "es".into()],
    default: "en".into(),
    show_default_prefix: false,
    untranslated: vec!["papers".into(), "privacy".into()],
    routes: BTreeMap::from([
      ("ja".to_string(), BTreeMap::from(ja)),
      ("es".to_string(), BTreeMap::from(es)),
    ]),
  }
}

fn router() -> LocaleRouter {
  LocaleRouter::new(&config()).unwrap()
}

fn prefixed_router() -> LocaleRouter {
  LocaleRouter::new(&I18nConfig { show_default_prefix: true, ..config() }).unwrap()
}

// -- detect_locale --

#[test]
fn detect_known_prefix() {
  let r = router();
  assert_eq!(r.detect_locale("/ja/about").as_str(), "ja");
  assert_eq!(r.detect_locale("/es").as_str(), "es");
  assert_eq!(r.detect_locale("https://example.com/es/blog/2").as_str(), "es");
}

#[test]
fn detect_falls_back_to_default() {
  let r = router();
  assert_eq!(r.detect_locale("/about").as_str(), "en");
  assert_eq!(r.detect_locale("/").as_str(), "en");
  assert_eq!(r.detect_locale("").as_str(), "en");
  // unknown prefix is "no prefix", not an error
  assert_eq!(r.detect_locale("/fr/about").as_str(), "en");
  assert_eq!(r.detect_locale("/JA/about").as_str(), "en");
}

// -- localize --

#[test]
fn localize_default_is_unprefixed() {
  let r = router();
  let en = r.locale("en").unwrap();
  assert_eq!(r.localize("/about", en), "/about");
  assert_eq!(r.localize("/", en), "/");
  assert_eq!(r.localize("/ja/about", en), "/about");
}

#[test]
fn localize_adds_prefix_for_other_locales() {
  let r = router();
  let ja = r.locale("ja").unwrap();
  assert_eq!(r.localize("/about", ja), "/ja/about");
  assert_eq!(r.localize("/blog/2", ja), "/ja/blog/2");
  assert_eq!(r.localize("/", ja), "/ja");
}

#[test]
fn localize_translates_first_segment() {
  let r = router();
  let es = r.locale("es").unwrap();
  assert_eq!(r.localize("/about", es), "/es/sobre-mi");
  assert_eq!(r.localize("/projects/rust", es), "/es/proyectos/rust");
}

#[test]
fn localize_reads_back_localized_input() {
  let r = router();
  let ja = r.locale("ja").unwrap();
  let en = r.locale("en").unwrap();
  assert_eq!(r.localize("/es/sobre-mi", ja), "/ja/about");
  assert_eq!(r.localize("/es/sobre-mi", en), "/about");
}

#[test]
fn localize_untranslated_ignores_target() {
  let r = router();
  for locale in r.locales().iter() {
    assert_eq!(r.localize("/papers", locale), "/papers");
    assert_eq!(r.localize("/ja/privacy", locale), "/privacy");
  }
}

#[test]
fn localize_untranslated_stays_unprefixed_with_default_prefix_on() {
  let r = prefixed_router();
  let en = r.locale("en").unwrap();
  assert_eq!(r.localize("/papers", en), "/papers");
  assert_eq!(r.localize("/about", en), "/en/about");
}

#[test]
fn localize_route_without_table_entry_keeps_name() {
  let r = router();
  let es = r.locale("es").unwrap();
  assert_eq!(r.localize("/contact", es), "/es/contact");
}

#[test]
fn localize_keeps_query_and_fragment() {
  let r = router();
  let es = r.locale("es").unwrap();
  assert_eq!(r.localize("/about?tab=cv#top", es), "/es/sobre-mi?tab=cv#top");
}

#[test]
fn localize_is_deterministic() {
  let r = router();
  let es = r.locale("es").unwrap();
  assert_eq!(r.localize("/about", es), r.localize("/about", es));
}

// -- resolve_logical_route --

#[test]
fn resolve_default_is_identity() {
  let r = router();
  assert_eq!(r.resolve_logical_route("/about").as_deref(), Some("about"));
  assert_eq!(r.resolve_logical_route("/projects/").as_deref(), Some("projects"));
}

#[test]
fn resolve_reverse_lookup() {
  let r = router();
  assert_eq!(r.resolve_logical_route("/es/sobre-mi").as_deref(), Some("about"));
  assert_eq!(r.resolve_logical_route("/ja/blog").as_deref(), Some("blog"));
  assert_eq!(
    r.resolve_logical_route("https://example.com/es/proyectos?x=1").as_deref(),
    Some("projects")
  );
}

#[test]
fn resolve_miss_returns_raw_token() {
  // Tolerated fallback: a token missing from the table is returned as-is
  // rather than reported as not found.
  let r = router();
  assert_eq!(r.resolve_logical_route("/es/contacto").as_deref(), Some("contacto"));
  assert_eq!(r.resolve_logical_route("/ja/blog/2").as_deref(), Some("2"));
}

#[test]
fn resolve_root_is_not_found() {
  let r = router();
  assert_eq!(r.resolve_logical_route("/"), None);
  assert_eq!(r.resolve_logical_route("/ja"), None);
  assert_eq!(r.resolve_logical_route("/es/"), None);
}

#[test]
fn round_trip_for_translated_routes() {
  let r = router();
  let translated: Vec<String> = r.route_table().routes().iter().map(ToString::to_string).collect();
  for locale in r.locales().iter() {
    for route in &translated {
      let path = r.localize(&format!("/{route}"), locale);
      assert_eq!(
        r.resolve_logical_route(&path).as_deref(),
        Some(route.as_str()),
        "{route} via {locale} ({path})"
      );
    }
  }
}

#[test]
fn round_trip_with_default_prefix() {
  let r = prefixed_router();
  for locale in r.locales().iter() {
    let path = r.localize("/resume", locale);
    assert!(path.starts_with(&format!("/{locale}/")));
    assert_eq!(r.resolve_logical_route(&path).as_deref(), Some("resume"));
  }
}

// -- to_display_path --

#[test]
fn display_path_reprefixes() {
  let r = router();
  let en = r.locale("en").unwrap();
  let ja = r.locale("ja").unwrap();
  assert_eq!(r.to_display_path("/ja/blog/2", en), "/blog/2");
  assert_eq!(r.to_display_path("/blog/2", ja), "/ja/blog/2");
  assert_eq!(r.to_display_path("/es/sobre-mi", ja), "/ja/sobre-mi");
}

#[test]
fn display_path_root_has_no_trailing_slash() {
  let r = router();
  let en = r.locale("en").unwrap();
  let ja = r.locale("ja").unwrap();
  assert_eq!(r.to_display_path("/ja", en), "/");
  assert_eq!(r.to_display_path("/ja/", en), "/");
  assert_eq!(r.to_display_path("/", ja), "/ja");
  assert_eq!(r.to_display_path("", ja), "/ja");
  assert_eq!(r.to_display_path("/es/", ja), "/ja");
}

#[test]
fn display_path_with_default_prefix() {
  let r = prefixed_router();
  let en = r.locale("en").unwrap();
  assert_eq!(r.to_display_path("/ja", en), "/en");
  assert_eq!(r.to_display_path("/about", en), "/en/about");
}

// -- construction --

#[test]
fn detected_locale_outlives_the_path() {
  let router = router();
  let locale = {
    let path = String::from("/ja/blog/2");
    router.detect_locale(&path)
  };
  assert_eq!(locale.as_str(), "ja");
}

#[test]
fn rejects_segment_that_shadows_another_route() {
  let mut bad = config();
  bad.routes.get_mut("es").unwrap().insert("about".into(), "contact".into());
  let err = LocaleRouter::new(&bad).unwrap_err();
  assert!(err.to_string().contains("shadows route \"contact\""));
}

#[test]
fn rejects_invalid_config() {
  let err = LocaleRouter::new(&I18nConfig { default: "de".into(), ..config() }).unwrap_err();
  assert!(err.to_string().contains("\"de\""));

  let mut bad = config();
  bad.untranslated.push("blog".into());
  let err = LocaleRouter::new(&bad).unwrap_err();
  assert!(err.to_string().contains("untranslated page \"blog\""));
}

#[test]
fn strip_origin_only_for_schemes() {
  assert_eq!(strip_origin("https://example.com/ja/about"), "/ja/about");
  assert_eq!(strip_origin("https://example.com"), "/");
  assert_eq!(strip_origin("/search?u=http://x"), "/search?u=http://x");
}

#[test]
fn logical_path_strips_and_reads_back() {
  let r = router();
  assert_eq!(r.logical_path("/es/sobre-mi/cv"), "/about/cv");
  assert_eq!(r.logical_path("/ja"), "/");
  assert_eq!(r.logical_path("/blog/2?x=1"), "/blog/2?x=1");
}
