use super::*;
use crate::docs::Modifiers;

fn modifiers(visibility: Visibility) -> Modifiers {
    Modifiers {
        visibility,
        is_static: false,
        is_abstract: false,
        is_final: false,
    }
}

fn parameter(name: &str) -> ParameterInfo {
    ParameterInfo {
        name: name.to_string(),
        type_name: None,
        is_optional: false,
        default: None,
    }
}

fn optional(name: &str, default: Option<DefaultValue>) -> ParameterInfo {
    ParameterInfo {
        name: name.to_string(),
        type_name: None,
        is_optional: true,
        default,
    }
}

fn method(name: &str, class: &str) -> MemberInfo {
    MemberInfo {
        name: name.to_string(),
        declaring_type: Some(class.to_string()),
        modifiers: Some(modifiers(Visibility::Public)),
        parameters: Vec::new(),
        return_type: None,
        comment: None,
    }
}

fn free_function(name: &str) -> MemberInfo {
    MemberInfo {
        name: name.to_string(),
        declaring_type: None,
        modifiers: None,
        parameters: Vec::new(),
        return_type: None,
        comment: None,
    }
}

#[test]
fn test_private_member_renders_empty() {
    let mut member = method("internalState", "Cache");
    member.modifiers = Some(modifiers(Visibility::Private));
    member.return_type = Some("string".to_string());
    member.parameters.push(parameter("key"));

    assert_eq!(build_signature(&member), "");
}

#[test]
fn test_protected_member_is_not_suppressed() {
    let mut member = method("warm", "Cache");
    member.modifiers = Some(modifiers(Visibility::Protected));

    assert_eq!(build_signature(&member), "protected Cache::warm()");
}

#[test]
fn test_modifier_keywords_render_in_canonical_order() {
    let mut member = method("create", "Factory");
    member.modifiers = Some(Modifiers {
        visibility: Visibility::Public,
        is_static: true,
        is_abstract: true,
        is_final: true,
    });

    assert_eq!(build_signature(&member), "public static abstract final Factory::create()");
}

#[test]
fn test_declared_return_type_is_preferred() {
    let mut member = method("count", "Cache");
    member.return_type = Some("int".to_string());
    // The comment fallback must not be consulted when introspection delivers
    member.comment = Some("/**\n<return-type>string</return-type>\n*/".to_string());

    assert_eq!(build_signature(&member), "public int Cache::count()");
}

#[test]
fn test_return_type_falls_back_to_comment_fragment() {
    let mut member = method("count", "Cache");
    member.comment = Some("/** Counts entries.\n<return-type>int</return-type>\n*/".to_string());

    assert_eq!(
        build_signature(&member),
        "public <return-type>int</return-type> Cache::count()"
    );
}

#[test]
fn test_missing_return_type_is_omitted() {
    let member = method("touch", "Cache");
    assert_eq!(build_signature(&member), "public Cache::touch()");
}

#[test]
fn test_exception_fragment_becomes_throws_clause() {
    let mut member = method("fetch", "Cache");
    member.comment =
        Some("/**\n<exception>CacheMissException</exception>\n*/".to_string());

    assert_eq!(
        build_signature(&member),
        "public Cache::fetch() throws <exception>CacheMissException</exception>"
    );
}

#[test]
fn test_typed_and_untyped_parameters() {
    let mut member = method("store", "Cache");
    member.parameters.push(ParameterInfo {
        name: "key".to_string(),
        type_name: Some("string".to_string()),
        is_optional: false,
        default: None,
    });
    member.parameters.push(parameter("value"));

    assert_eq!(build_signature(&member), "public Cache::store( string $key, $value)");
}

#[test]
fn test_boolean_defaults_render_as_keywords() {
    let mut member = method("flush", "Cache");
    member.parameters.push(optional("force", Some(DefaultValue::Bool(true))));
    member.parameters.push(optional("deep", Some(DefaultValue::Bool(false))));

    assert_eq!(
        build_signature(&member),
        "public Cache::flush( $force = true, $deep = false)"
    );
}

#[test]
fn test_empty_string_default_renders_as_quotes() {
    let mut member = method("tag", "Cache");
    member.parameters.push(optional("label", Some(DefaultValue::Str(String::new()))));

    assert_eq!(build_signature(&member), "public Cache::tag( $label = \"\")");
}

#[test]
fn test_falsy_non_boolean_defaults_render_as_false() {
    // Loose-equality legacy: 0, 0.0 and "0" all collapse to false
    let mut member = method("expire", "Cache");
    member.parameters.push(optional("ttl", Some(DefaultValue::Int(0))));
    member.parameters.push(optional("jitter", Some(DefaultValue::Float(0.0))));
    member.parameters.push(optional("mode", Some(DefaultValue::Str("0".to_string()))));

    assert_eq!(
        build_signature(&member),
        "public Cache::expire( $ttl = false, $jitter = false, $mode = false)"
    );
}

#[test]
fn test_null_default_renders_as_null_keyword() {
    let mut member = method("read", "Cache");
    member.parameters.push(optional("options", Some(DefaultValue::Null)));

    assert_eq!(build_signature(&member), "public Cache::read( $options = NULL)");
}

#[test]
fn test_other_defaults_render_literally() {
    let mut member = method("connect", "Cache");
    member.parameters.push(optional("port", Some(DefaultValue::Int(11211))));
    member.parameters.push(optional("weight", Some(DefaultValue::Float(0.5))));
    member.parameters.push(optional("charset", Some(DefaultValue::Str("utf-8".to_string()))));

    assert_eq!(
        build_signature(&member),
        "public Cache::connect( $port = 11211, $weight = 0.5, $charset = utf-8)"
    );
}

#[test]
fn test_unreadable_default_is_silently_omitted() {
    // Natively-implemented routines keep the optional flag but expose no value
    let mut member = method("sort", "Collection");
    member.parameters.push(optional("flags", None));

    assert_eq!(build_signature(&member), "public Collection::sort( $flags)");
}

#[test]
fn test_free_function_never_renders_defaults() {
    let mut function = free_function("str_pad");
    function.parameters.push(parameter("input"));
    function.parameters.push(optional("pad", Some(DefaultValue::Str(" ".to_string()))));

    assert_eq!(build_signature(&function), "str_pad( $input, $pad)");
}

#[test]
fn test_free_function_never_consults_comment_fragments() {
    let mut function = free_function("str_len");
    function.comment = Some(
        "/**\n<return-type>int</return-type>\n<exception>ValueError</exception>\n*/".to_string(),
    );
    function.parameters.push(parameter("input"));

    assert_eq!(build_signature(&function), "str_len( $input)");
}

#[test]
fn test_malformed_comment_degrades_to_no_fragments() {
    let mut member = method("fetch", "Cache");
    member.comment = Some("/**\n<exception>never closed\n*/".to_string());

    assert_eq!(build_signature(&member), "public Cache::fetch()");
}

#[test]
fn test_build_signature_is_idempotent() {
    let mut member = method("read", "ClassName");
    member.return_type = Some("string".to_string());
    member.parameters.push(parameter("id"));
    member.parameters.push(optional("options", Some(DefaultValue::Null)));
    member.comment = Some("/**\n<exception>NotFoundException</exception>\n*/".to_string());

    let first = build_signature(&member);
    let second = build_signature(&member);
    assert_eq!(first, second);
}

#[test]
fn test_end_to_end_bound_method() {
    let mut member = method("read", "ClassName");
    member.return_type = Some("string".to_string());
    member.parameters.push(parameter("id"));
    member.parameters.push(optional("options", Some(DefaultValue::Null)));
    member.comment = Some(
        "/** Reads an item from the archive.\n<exception>NotFoundException</exception>\n*/"
            .to_string(),
    );

    assert_eq!(
        build_signature(&member),
        "public string ClassName::read( $id, $options = NULL) throws <exception>NotFoundException</exception>"
    );
}

#[test]
fn test_end_to_end_free_function() {
    let mut function = free_function("combine");
    function.parameters.push(parameter("first"));
    function.parameters.push(parameter("second"));

    let signature = build_signature(&function);
    assert_eq!(signature, "combine( $first, $second)");
    assert!(!signature.contains("public"));
    assert!(!signature.contains("throws"));
}
