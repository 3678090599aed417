use ortx_domain::constants::OP_DOMAIN;
use ortx_domain::descriptor::{ElementType, OpKey, OpSchema};
use ortx_domain::features::OpSources;

#[test]
fn element_types_use_onnx_codes() {
    assert_eq!(ElementType::Float.code(), 1);
    assert_eq!(ElementType::Int64.code(), 7);
    assert_eq!(ElementType::String.code(), 8);
    assert_eq!(ElementType::Bool.code(), 9);
    assert_eq!(ElementType::Uint64.code(), 13);

    for ty in ElementType::ALL {
        assert_eq!(ElementType::from_code(ty.code()), Some(ty));
    }
    assert_eq!(ElementType::from_code(0), None);
    assert_eq!(ElementType::from_code(14), None);
}

#[test]
fn element_types_parse_by_name() {
    assert_eq!("string".parse::<ElementType>(), Ok(ElementType::String));
    assert_eq!("INT32".parse::<ElementType>(), Ok(ElementType::Int32));
    assert!("complex64".parse::<ElementType>().is_err());
    assert_eq!(ElementType::Float16.to_string(), "float16");
}

#[test]
fn schema_builder_collects_signature() {
    let schema = OpSchema::new("SentencepieceTokenizer")
        .inputs([ElementType::String, ElementType::String])
        .input(ElementType::Float)
        .output(ElementType::Int32)
        .output(ElementType::Int64)
        .since_version(2);

    assert_eq!(schema.since_version, 2);
    assert_eq!(schema.inputs.len(), 3);
    assert_eq!(schema.outputs, vec![ElementType::Int32, ElementType::Int64]);
    assert_eq!(schema.key(), OpKey::contrib("SentencepieceTokenizer", 2));
}

#[test]
fn schema_deserializes_with_defaults() {
    let schema: OpSchema = serde_json::from_value(serde_json::json!({
        "name": "RaggedTensorToSparse",
        "inputs": ["int64", "int32"],
        "outputs": ["int64", "int32", "int64"]
    }))
    .expect("schema deserialize");

    assert_eq!(schema.since_version, 1);
    assert_eq!(schema.inputs, vec![ElementType::Int64, ElementType::Int32]);
    assert_eq!(schema.outputs.len(), 3);
}

#[test]
fn op_key_resolves_later_opsets_in_same_domain() {
    let key = OpKey::contrib("StringUpper", 3);
    assert_eq!(key.domain, OP_DOMAIN);
    assert!(key.resolves(OP_DOMAIN, "StringUpper", 3));
    assert!(key.resolves(OP_DOMAIN, "StringUpper", 7));
    assert!(!key.resolves(OP_DOMAIN, "StringUpper", 2));
    assert!(!key.resolves("", "StringUpper", 3));
    assert!(!key.resolves(OP_DOMAIN, "StringLower", 3));
    assert_eq!(key.to_string(), "ai.onnx.contrib::StringUpper@3");
}

#[test]
fn op_sources_parse_and_list_names() {
    assert_eq!(OpSources::from("native"), OpSources::NATIVE);
    assert_eq!(OpSources::from("script"), OpSources::SCRIPT);
    assert_eq!(OpSources::from("*"), OpSources::ALL);
    assert!(OpSources::from("wasm").is_empty());
    assert_eq!(OpSources::ALL.names(), vec!["native", "script"]);
    assert_eq!(OpSources::from(0xFF), OpSources::ALL);
}

#[test]
fn op_sources_serialize_by_name() -> Result<(), serde_json::Error> {
    assert_eq!(serde_json::to_value(OpSources::ALL)?, serde_json::json!(["native", "script"]));
    assert_eq!(serde_json::to_value(OpSources::NATIVE)?, serde_json::json!(["native"]));
    assert_eq!(serde_json::to_value(OpSources::empty())?, serde_json::json!([]));

    let parsed: OpSources = serde_json::from_value(serde_json::json!(["script", "wasm"]))?;
    assert_eq!(parsed, OpSources::SCRIPT);
    let round: OpSources = serde_json::from_value(serde_json::to_value(OpSources::ALL)?)?;
    assert_eq!(round, OpSources::ALL);
    Ok(())
}
