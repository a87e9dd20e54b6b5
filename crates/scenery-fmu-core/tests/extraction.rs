use scenery_fmu::{extract_variables, ExportConfig, ExportError};

fn cfg() -> ExportConfig {
    ExportConfig::default()
}

#[test]
fn finds_variables_at_any_depth_in_document_order() {
    let xml = r#"
<Scenery>
    <Object>
        <VariableName>parameters.speed</VariableName>
        <Value>3.5</Value>
    </Object>
    <Group>
        <Nested>
            <Deep>
                <VariableName>heading</VariableName>
                <Value>90</Value>
            </Deep>
        </Nested>
    </Group>
</Scenery>"#;
    let vars = extract_variables(xml, &cfg()).expect("extract");
    assert_eq!(vars.len(), 2);

    assert_eq!(vars[0].raw_name, "parameters.speed");
    assert_eq!(vars[0].display_name(), "speed");
    assert_eq!(vars[0].value, "3.5");
    assert!(vars[0].is_parameter);

    assert_eq!(vars[1].raw_name, "heading");
    assert_eq!(vars[1].display_name(), "heading");
    assert_eq!(vars[1].value, "90");
    assert!(!vars[1].is_parameter);
}

#[test]
fn duplicate_names_keep_the_first_occurrence() {
    // Same name twice with different values: first wins, later ones are
    // dropped silently rather than merged.
    let xml = r#"
<Scenery>
    <A><VariableName>parameters.speed</VariableName><Value>3.5</Value></A>
    <B><VariableName>parameters.speed</VariableName><Value>9.9</Value></B>
</Scenery>"#;
    let vars = extract_variables(xml, &cfg()).expect("extract");
    assert_eq!(vars.len(), 1);
    assert_eq!(vars[0].display_name(), "speed");
    assert_eq!(vars[0].value, "3.5");
}

#[test]
fn dedup_preserves_first_seen_order_across_repeats() {
    let xml = r#"
<Scenery>
    <E><VariableName>b</VariableName><Value>1</Value></E>
    <E><VariableName>a</VariableName><Value>2</Value></E>
    <E><VariableName>b</VariableName><Value>3</Value></E>
    <E><VariableName>c</VariableName><Value>4</Value></E>
    <E><VariableName>a</VariableName><Value>5</Value></E>
</Scenery>"#;
    let vars = extract_variables(xml, &cfg()).expect("extract");
    let names: Vec<&str> = vars.iter().map(|v| v.display_name()).collect();
    assert_eq!(names, ["b", "a", "c"]);
    let values: Vec<&str> = vars.iter().map(|v| v.value.as_str()).collect();
    assert_eq!(values, ["1", "2", "4"]);
}

#[test]
fn nested_interesting_elements_follow_start_tag_order() {
    // The outer element starts first, so it comes first even though its end
    // tag closes after the inner one.
    let xml = r#"
<Outer>
    <VariableName>outer</VariableName>
    <Value>1</Value>
    <Inner>
        <VariableName>inner</VariableName>
        <Value>2</Value>
    </Inner>
</Outer>"#;
    let vars = extract_variables(xml, &cfg()).expect("extract");
    let names: Vec<&str> = vars.iter().map(|v| v.display_name()).collect();
    assert_eq!(names, ["outer", "inner"]);
}

#[test]
fn only_the_first_name_child_of_an_element_counts() {
    let xml = r#"
<Scenery>
    <Object>
        <VariableName>first</VariableName>
        <VariableName>second</VariableName>
        <Value>1</Value>
    </Object>
</Scenery>"#;
    let vars = extract_variables(xml, &cfg()).expect("extract");
    assert_eq!(vars.len(), 1);
    assert_eq!(vars[0].display_name(), "first");
}

#[test]
fn missing_value_child_is_fatal() {
    let xml = r#"
<Scenery>
    <Object>
        <VariableName>throttle</VariableName>
    </Object>
</Scenery>"#;
    let err = extract_variables(xml, &cfg()).unwrap_err();
    match err {
        ExportError::MissingValue { variable } => assert_eq!(variable, "throttle"),
        other => panic!("expected MissingValue, got {other:?}"),
    }
}

#[test]
fn document_without_interesting_elements_yields_empty_list() {
    let xml = r#"
<Scenery>
    <Object><Mesh>cube.obj</Mesh></Object>
    <Value>orphan value, no name sibling</Value>
</Scenery>"#;
    let vars = extract_variables(xml, &cfg()).expect("extract");
    assert!(vars.is_empty());
}

#[test]
fn malformed_markup_is_a_parse_error() {
    let xml = "<Scenery><Object><VariableName>x</VariableName></Scenery>";
    let err = extract_variables(xml, &cfg()).unwrap_err();
    assert!(matches!(err, ExportError::Xml(_)), "got {err:?}");
}

#[test]
fn name_that_is_only_the_prefix_is_rejected() {
    let xml = r#"
<Scenery>
    <Object>
        <VariableName>parameters.</VariableName>
        <Value>1</Value>
    </Object>
</Scenery>"#;
    let err = extract_variables(xml, &cfg()).unwrap_err();
    match err {
        ExportError::EmptyName { raw_name } => assert_eq!(raw_name, "parameters."),
        other => panic!("expected EmptyName, got {other:?}"),
    }
}

#[test]
fn entities_in_value_text_are_unescaped() {
    let xml = r#"
<Scenery>
    <Object>
        <VariableName>label</VariableName>
        <Value>a &amp; b</Value>
    </Object>
</Scenery>"#;
    let vars = extract_variables(xml, &cfg()).expect("extract");
    assert_eq!(vars[0].value, "a & b");
}

#[test]
fn custom_field_tags_are_honoured() {
    let cfg = ExportConfig {
        variable_tag: "Var".to_string(),
        value_tag: "Init".to_string(),
        ..ExportConfig::default()
    };
    let xml = r#"
<Scenery>
    <Object>
        <Var>parameters.gain</Var>
        <Init>0.25</Init>
        <VariableName>ignored with these tags</VariableName>
    </Object>
</Scenery>"#;
    let vars = extract_variables(xml, &cfg).expect("extract");
    assert_eq!(vars.len(), 1);
    assert_eq!(vars[0].display_name(), "gain");
    assert_eq!(vars[0].value, "0.25");
}
