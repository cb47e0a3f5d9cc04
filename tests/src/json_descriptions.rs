use automata_runtime::*;

const ENDS_IN_ONE: &str = r#"{
    "type": "dfa",
    "states": ["S0", "S1"],
    "alphabet": ["0", "1"],
    "transitions": [["S0", "S1"], ["S0", "S1"]],
    "startState": "S0",
    "acceptStates": ["S1"]
}"#;

const CONTAINS_ZERO_ONE: &str = r#"{
    "type": "nfa",
    "states": ["A", "B", "C"],
    "alphabet": ["0", "1"],
    "transitions": [
        [["A", "B"], ["A"]],
        [[], ["C"]],
        [["C"], ["C"]]
    ],
    "startState": "A",
    "acceptStates": ["C"]
}"#;

#[test]
fn should_decode_descriptions_into_working_automata() {
    let input_output = [
        (ENDS_IN_ONE, "101", true),
        (ENDS_IN_ONE, "100", false),
        (ENDS_IN_ONE, "", false),
        (CONTAINS_ZERO_ONE, "001", true),
        (CONTAINS_ZERO_ONE, "000", false),
        (CONTAINS_ZERO_ONE, "0z1", false),
    ];

    for (test_id, (json, input, expected)) in input_output.into_iter().enumerate() {
        let description: AutomatonDescription = serde_json::from_str(json).unwrap();

        assert_eq!((test_id, Ok(())), (test_id, description.validate()));
        assert_eq!((test_id, expected), (test_id, description.accepts(input)));
    }
}

#[test]
fn should_default_missing_transitions_and_accept_states() {
    let json = r#"{
        "type": "nfa",
        "states": ["A"],
        "alphabet": ["0"],
        "startState": "A"
    }"#;

    let description: AutomatonDescription = serde_json::from_str(json).unwrap();

    assert!(!description.accepts(""));
    assert_eq!(
        Err(ModelError::RowCount {
            expected: 1,
            received: 0
        }),
        description.validate()
    );
}

#[test]
fn should_fail_to_decode_an_unknown_kind() {
    let json = ENDS_IN_ONE.replace(r#""dfa""#, r#""pda""#);

    assert!(serde_json::from_str::<AutomatonDescription>(&json).is_err());
}

#[test]
fn should_encode_converted_automata_with_subset_names() {
    let description: AutomatonDescription = serde_json::from_str(CONTAINS_ZERO_ONE).unwrap();
    let dfa = AutomatonDescription::from(description.to_deterministic());

    let encoded = serde_json::to_value(&dfa).unwrap();

    assert_eq!(Some("dfa"), encoded["type"].as_str());
    assert_eq!(Some("{A}"), encoded["startState"].as_str());
    assert_eq!(
        serde_json::json!(["{A,C}", "{A,B,C}"]),
        encoded["acceptStates"]
    );

    let decoded: AutomatonDescription = serde_json::from_value(encoded).unwrap();
    assert_eq!(dfa, decoded);
}

#[test]
fn should_trace_a_decoded_description() {
    let description: AutomatonDescription = serde_json::from_str(ENDS_IN_ONE).unwrap();

    let trace = description.trace("10");

    assert_eq!(vec!["S0".to_string()], trace.initial);
    assert_eq!(
        vec![
            Step::new('1', vec!["S1".to_string()]),
            Step::new('0', vec!["S0".to_string()]),
        ],
        trace.steps
    );
    assert!(!trace.accepted);
}
