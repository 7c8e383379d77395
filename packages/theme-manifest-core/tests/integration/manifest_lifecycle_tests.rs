//! End-to-end manifest lifecycle tests.
//!
//! Parse a full declaration, derive the DRM flag, round-trip the record
//! through the wire codec and the JSON dump surface.

use ntest::timeout;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use theme_manifest_core::codec;
use theme_manifest_core::parser::parse_manifest;
use theme_manifest_core::resolver::LiteralResolver;
use theme_manifest_core::schema::{AttributeSchema, COMPULSORY_ATTRIBUTES, OPTIONAL_ATTRIBUTES};
use theme_manifest_core::source::{Attribute, NamespaceFilter, THEME_NAMESPACE};

use crate::helpers::{pluto_default_attrs, theme_attr, TableResolver};

#[timeout(1000)]
#[test]
fn test_pluto_default_declaration_end_to_end() {
    let schema = AttributeSchema::standard().unwrap();
    let filter = NamespaceFilter::new(THEME_NAMESPACE);
    let attrs = pluto_default_attrs();
    let resolver = TableResolver::new(attrs.as_slice()).with_int("drawable/preview", 2130837573);

    let manifest = parse_manifest(&schema, attrs.as_slice(), &filter, &resolver).unwrap();

    assert_eq!(manifest.name(), "Pluto Default");
    assert_eq!(manifest.preview_resource_id(), 2130837573);
    assert_eq!(manifest.author(), "John Doe");
    assert_eq!(manifest.theme_id(), "Pluto");
    assert_eq!(manifest.theme_style_name(), "Pluto");
    assert_eq!(manifest.ringtone_file_name(), Some("media/audio/ringtone.mp3"));
    assert_eq!(
        manifest.notification_ringtone_file_name(),
        Some("media/audio/locked/notification.mp3")
    );
    assert_eq!(manifest.copyright(), Some("T-Mobile, 2009"));

    // The locked notification ringtone path drives the derived flag.
    assert!(manifest.is_drm_protected());

    // Cross the process boundary and back.
    let bytes = codec::encode(&manifest);
    let decoded = codec::decode(&bytes).unwrap();
    assert_eq!(decoded, manifest);
    assert!(decoded.is_drm_protected());

    println!("Pluto Default round-tripped through {} bytes", bytes.len());
}

#[timeout(1000)]
#[test]
fn test_raw_fields_bypass_the_resolver() {
    let schema = AttributeSchema::standard().unwrap();
    let filter = NamespaceFilter::new(THEME_NAMESPACE);
    let mut attrs = pluto_default_attrs();
    attrs.push(theme_attr("soundpackName", "@string/pack"));
    // themeId keeps reference syntax verbatim even when the table could
    // resolve it.
    attrs[3] = theme_attr("themeId", "@string/theme_id");

    let resolver = TableResolver::new(attrs.as_slice())
        .with_int("drawable/preview", 77)
        .with_string("string/pack", "resolved pack")
        .with_string("string/theme_id", "resolved id");

    let manifest = parse_manifest(&schema, attrs.as_slice(), &filter, &resolver).unwrap();
    assert_eq!(manifest.theme_id(), "@string/theme_id");
    assert_eq!(manifest.sound_pack_name(), Some("@string/pack"));
}

#[timeout(1000)]
#[test]
fn test_resolved_strings_come_from_the_resource_table() {
    let schema = AttributeSchema::standard().unwrap();
    let filter = NamespaceFilter::new(THEME_NAMESPACE);
    let mut attrs = pluto_default_attrs();
    attrs[0] = theme_attr("name", "@string/theme_name");

    let resolver = TableResolver::new(attrs.as_slice())
        .with_int("drawable/preview", 77)
        .with_string("string/theme_name", "Pluto Localized");

    let manifest = parse_manifest(&schema, attrs.as_slice(), &filter, &resolver).unwrap();
    assert_eq!(manifest.name(), "Pluto Localized");
}

#[timeout(1000)]
#[test]
fn test_json_dump_uses_attribute_vocabulary() {
    let schema = AttributeSchema::standard().unwrap();
    let filter = NamespaceFilter::new(THEME_NAMESPACE);
    let attrs = pluto_default_attrs();
    let resolver = TableResolver::new(attrs.as_slice()).with_int("drawable/preview", 2130837573);

    let manifest = parse_manifest(&schema, attrs.as_slice(), &filter, &resolver).unwrap();
    let json = serde_json::to_value(&manifest).unwrap();

    assert_eq!(json["name"], "Pluto Default");
    assert_eq!(json["previewResourceId"], 2130837573);
    assert_eq!(json["themeStyleName"], "Pluto");
    assert_eq!(
        json["notificationRingtoneFileName"],
        "media/audio/locked/notification.mp3"
    );
    assert_eq!(json["isDrmProtected"], true);
    assert_eq!(json["soundPackName"], serde_json::Value::Null);
    assert_eq!(json["parentThemeId"], -1);
}

#[timeout(5000)]
#[test]
fn test_concurrent_parses_share_one_schema() {
    let schema = AttributeSchema::standard().unwrap();
    let filter = NamespaceFilter::new(THEME_NAMESPACE);

    std::thread::scope(|scope| {
        for worker in 0..4 {
            let schema = &schema;
            let filter = &filter;
            scope.spawn(move || {
                for round in 0..250 {
                    let mut attrs = pluto_default_attrs();
                    attrs[0] = theme_attr("name", &format!("Theme {worker}-{round}"));
                    let resolver = LiteralResolver::new(attrs.as_slice());
                    let manifest =
                        parse_manifest(schema, attrs.as_slice(), filter, &resolver).unwrap();
                    assert_eq!(manifest.name(), format!("Theme {worker}-{round}"));
                    assert!(manifest.is_drm_protected());
                }
            });
        }
    });

    println!("4 workers parsed 250 declarations each against one schema");
}

#[timeout(5000)]
#[test]
fn test_randomized_declarations_round_trip() {
    let schema = AttributeSchema::standard().unwrap();
    let filter = NamespaceFilter::new(THEME_NAMESPACE);
    let mut rng = StdRng::seed_from_u64(0x7EEE);

    for _ in 0..200 {
        let mut attrs: Vec<Attribute> = COMPULSORY_ATTRIBUTES
            .iter()
            .map(|name| theme_attr(name, &random_value(&mut rng)))
            .collect();
        for name in OPTIONAL_ATTRIBUTES {
            if rng.gen_bool(0.5) {
                attrs.push(theme_attr(name, &random_value(&mut rng)));
            }
        }
        attrs.shuffle(&mut rng);

        let resolver = LiteralResolver::new(attrs.as_slice());
        let manifest = parse_manifest(&schema, attrs.as_slice(), &filter, &resolver).unwrap();

        let decoded = codec::decode(&codec::encode(&manifest)).unwrap();
        assert_eq!(decoded, manifest);
    }
}

fn random_value(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..24);
    (0..len)
        .map(|_| rng.sample(rand::distributions::Alphanumeric) as char)
        .collect()
}
