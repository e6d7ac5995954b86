use semver_release::eql::{parse, ConfigMapping, SyntaxError};

fn mapping(pairs: &[(&str, &str)]) -> ConfigMapping {
    pairs.iter().copied().collect()
}

#[test]
fn test_eql_simple() {
    let result = parse("fix=path feat=minor bang=major").unwrap();
    assert_eq!(
        result,
        mapping(&[("fix", "path"), ("feat", "minor"), ("bang", "major")])
    );
}

#[test]
fn test_eql_invalid() {
    let result = parse(" =path test = true");
    assert_eq!(result, Err(SyntaxError::UnexpectedEquals { position: 2 }));
}

#[test]
fn test_eql_spaced() {
    let result = parse("fix = path feat = minor bang = major").unwrap();
    assert_eq!(
        result,
        mapping(&[("fix", "path"), ("feat", "minor"), ("bang", "major")])
    );
}

#[test]
fn test_quoted() {
    let result = parse(r#"fix = "path" feat = "minor" bang = "major""#).unwrap();
    assert_eq!(
        result,
        mapping(&[("fix", "path"), ("feat", "minor"), ("bang", "major")])
    );
}

#[test]
fn test_quoted_escape() {
    let result = parse(r#"test="foo bar" other=test abc="def \" ghi""#).unwrap();
    assert_eq!(
        result,
        mapping(&[("test", "foo bar"), ("other", "test"), ("abc", r#"def " ghi"#)])
    );
}

#[test]
fn test_single_quotes() {
    let result = parse(r#"*='Other Changes' feat="New 'Features'""#).unwrap();
    assert_eq!(result.get("*"), Some("Other Changes"));
    assert_eq!(result.get("feat"), Some("New 'Features'"));
}

#[test]
fn test_unterminated_quote() {
    assert_eq!(
        parse(r#"feat="New Features"#),
        Err(SyntaxError::UnterminatedQuote)
    );
    assert_eq!(parse(r#"a='x\'"#), Err(SyntaxError::UnterminatedQuote));
}

#[test]
fn test_quoted_values_are_trimmed() {
    let result = parse(r#"a="  padded  ""#).unwrap();
    assert_eq!(result.get("a"), Some("padded"));
}

#[test]
fn test_last_duplicate_wins() {
    let result = parse("fix=patch fix=minor").unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result.get("fix"), Some("minor"));
}

#[test]
fn test_empty_input() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("    ").unwrap().is_empty());
}

#[test]
fn test_serialized_output_parses_back() {
    let inputs = [
        "fix=path feat=minor bang=major",
        r#"test="foo bar" other=test abc="def \" ghi""#,
        r#"a='it\'s' b="say \"hi\"" c='x \"y'"#,
        r#"path="C:\temp\dir" empty="" spaced = "  a  b  ""#,
        r#"trail="dir \ " x=y"#,
        r#"k="\\\"" q='\\\''"#,
        r#"raw=a"b'c eq=x=y"#,
        r#"*="Other Changes" feat='New Features'"#,
        "k= ",
    ];

    for input in inputs {
        let parsed = parse(input).unwrap();
        let encoded = parsed.to_eql().unwrap();
        let reparsed = parse(&encoded)
            .unwrap_or_else(|e| panic!("{encoded:?} (from {input:?}) failed: {e}"));
        assert_eq!(parsed, reparsed, "round trip of {input:?} via {encoded:?}");
    }
}
