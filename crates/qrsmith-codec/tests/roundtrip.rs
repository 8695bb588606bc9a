use qrsmith_codec::{
    DecodeOptions, MissingValuePolicy, ValueMap, decode, encode_template,
};
use qrsmith_types::{Subtag, Tag, TagCode, Template, ValueFormat};
use serde_json::Value;

fn static_tag(code: &str, value: &str) -> Tag {
    Tag {
        code: TagCode::new(code).expect("valid code"),
        content_desc: format!("tag {}", code),
        json_key: String::new(),
        content_value: Some(value.to_string()),
        format: ValueFormat::Text,
        min_length: 0,
        max_length: 0,
        is_static: true,
        is_dynamic: false,
        required: false,
        subtags: Vec::new(),
    }
}

fn dynamic_tag(code: &str, json_key: &str) -> Tag {
    Tag {
        code: TagCode::new(code).expect("valid code"),
        content_desc: format!("tag {}", code),
        json_key: json_key.to_string(),
        content_value: None,
        format: ValueFormat::Text,
        min_length: 0,
        max_length: 0,
        is_static: false,
        is_dynamic: true,
        required: true,
        subtags: Vec::new(),
    }
}

fn static_subtag(code: &str, value: &str) -> Subtag {
    Subtag {
        code: TagCode::new(code).expect("valid code"),
        content_desc: format!("subtag {}", code),
        json_key: String::new(),
        content_value: Some(value.to_string()),
        format: ValueFormat::Text,
        min_length: 0,
        max_length: 0,
        is_static: true,
        is_dynamic: false,
        required: false,
        subtags: Vec::new(),
    }
}

fn till_template() -> Template {
    let mut merchant_account = static_tag("26", "");
    merchant_account.content_value = None;
    merchant_account.is_static = false;
    merchant_account.subtags = vec![
        static_subtag("00", "GD"),
        static_subtag("01", "123456"),
    ];

    Template {
        id: 1,
        name: "Till Payment".to_string(),
        journey_id: "01".to_string(),
        tags: vec![
            static_tag("00", "01"),
            merchant_account,
            static_tag("52", "0000"),
            dynamic_tag("54", "amount"),
            static_tag("58", "KE"),
            dynamic_tag("59", "merchantName"),
        ],
    }
}

fn sample_values() -> ValueMap {
    let mut values = ValueMap::new();
    values.insert("amount".to_string(), Value::String("1250.00".to_string()));
    values.insert(
        "merchantName".to_string(),
        Value::String("KAMAU STORES".to_string()),
    );
    values
}

#[test]
fn encode_then_decode_recovers_structure() {
    let template = till_template();
    template.validate().expect("template is well formed");

    let encoded =
        encode_template(&template, &sample_values(), MissingValuePolicy::Strict).unwrap();

    let options = DecodeOptions::with_composite_tags(vec![TagCode::new("26").unwrap()]);
    let result = decode(&encoded, &options);
    assert!(result.is_complete(), "decode failed: {:?}", result.error);

    // One entry per node, depth-first: 6 top-level tags + 2 subtags
    assert_eq!(result.entries.len(), 8);

    let tags: Vec<(&str, usize)> = result
        .entries
        .iter()
        .map(|e| (e.tag.as_str(), e.depth))
        .collect();
    assert_eq!(
        tags,
        vec![
            ("00", 0),
            ("26", 0),
            ("00", 1),
            ("01", 1),
            ("52", 0),
            ("54", 0),
            ("58", 0),
            ("59", 0),
        ]
    );

    // Lengths are 2-digit decimals matching each value
    for entry in &result.entries {
        assert_eq!(entry.length, format!("{:02}", entry.value.len()));
    }

    let amount = result.entries.iter().find(|e| e.tag == "54").unwrap();
    assert_eq!(amount.value, "1250.00");
}

#[test]
fn decode_matches_under_shape_heuristic() {
    let template = till_template();
    let encoded =
        encode_template(&template, &sample_values(), MissingValuePolicy::Strict).unwrap();

    // The merchant account block has non-empty child values, so the shape
    // heuristic nests it without being told tag 26 is composite.
    let result = decode(&encoded, &DecodeOptions::default());
    assert!(result.is_complete());
    assert!(result.entries.iter().any(|e| e.tag == "01" && e.depth == 1));
}

#[test]
fn reencoding_decoded_leaves_is_stable() {
    let template = till_template();
    let values = sample_values();
    let first = encode_template(&template, &values, MissingValuePolicy::Strict).unwrap();
    let second = encode_template(&template, &values, MissingValuePolicy::Strict).unwrap();
    assert_eq!(first, second);
}
