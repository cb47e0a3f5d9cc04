use automata_runtime::*;

const BINARY: [char; 2] = ['0', '1'];

fn ends_in_one() -> ([&'static str; 2], Vec<Vec<Option<&'static str>>>) {
    (
        ["S0", "S1"],
        vec![vec![Some("S0"), Some("S1")], vec![Some("S0"), Some("S1")]],
    )
}

fn contains_zero_one() -> ([&'static str; 3], Vec<Vec<Vec<&'static str>>>) {
    (
        ["A", "B", "C"],
        vec![
            vec![vec!["A", "B"], vec!["A"]],
            vec![vec![], vec!["C"]],
            vec![vec!["C"], vec!["C"]],
        ],
    )
}

#[test]
fn should_accept_binary_strings_ending_in_one() {
    let (states, transitions) = ends_in_one();
    let input_output = [
        ("101", true),
        ("100", false),
        ("", false),
        ("1", true),
        ("0001", true),
        ("10a1", false),
    ];

    for (test_id, (input, expected)) in input_output.into_iter().enumerate() {
        let res = simulate_dfa(&states, &BINARY, &transitions, "S0", &["S1"], input);
        assert_eq!((test_id, expected), (test_id, res));
    }
}

#[test]
fn should_accept_binary_strings_containing_zero_one() {
    let (states, transitions) = contains_zero_one();
    let input_output = [
        ("001", true),
        ("000", false),
        ("", false),
        ("1010", true),
        ("1110", false),
        ("01x", false),
    ];

    for (test_id, (input, expected)) in input_output.into_iter().enumerate() {
        let res = simulate_nfa(&states, &BINARY, &transitions, "A", &["C"], input);
        assert_eq!((test_id, expected), (test_id, res));
    }
}

#[test]
fn should_accept_empty_input_only_from_an_accepting_start() {
    let (dfa_states, dfa_transitions) = ends_in_one();
    let (nfa_states, nfa_transitions) = contains_zero_one();

    assert!(simulate_dfa(&dfa_states, &BINARY, &dfa_transitions, "S1", &["S1"], ""));
    assert!(!simulate_dfa(&dfa_states, &BINARY, &dfa_transitions, "S0", &["S1"], ""));
    assert!(simulate_nfa(&nfa_states, &BINARY, &nfa_transitions, "C", &["C"], ""));
    assert!(!simulate_nfa(&nfa_states, &BINARY, &nfa_transitions, "A", &["C"], ""));
}

#[test]
fn should_reject_an_undefined_dfa_transition_before_reading_further() {
    let states = ["S0", "S1"];
    let transitions = vec![vec![Some("S1"), None], vec![Some("S1"), Some("S1")]];

    let mut consumed = 0;
    let mut evaluator = DfaEvaluator::new(&states, &BINARY, &transitions, "S0", &["S1"]);
    let res = evaluator.matches("1000".chars().inspect(|_| consumed += 1));

    assert!(!res);
    assert_eq!(1, consumed);
    assert!(evaluator.is_rejected());
}

#[test]
fn should_agree_between_simulation_model_and_conversion() {
    let (states, transitions) = contains_zero_one();

    let mut nfa = Nfa::empty(states, BINARY);
    for (from, row) in states.iter().zip(transitions.iter()) {
        for (&symbol, destinations) in BINARY.iter().zip(row.iter()) {
            for to in destinations {
                assert_eq!(Ok(true), nfa.add_transition(from, symbol, to));
            }
        }
    }
    assert_eq!(Ok(true), nfa.toggle_accept_state("C"));
    assert_eq!(Ok(()), nfa.validate());

    let dfa = convert_nfa_to_dfa(&states, &BINARY, &transitions, "A", &["C"]).into_dfa();
    assert_eq!(dfa, nfa.to_deterministic().into_dfa());
    assert_eq!(Ok(()), dfa.validate());

    for input in ["", "0", "01", "110", "1001", "111111", "0x"] {
        let expected = simulate_nfa(&states, &BINARY, &transitions, "A", &["C"], input);

        assert_eq!(expected, nfa.accepts(input), "{input}");
        assert_eq!(expected, dfa.accepts(input), "{input}");
    }
}

#[test]
fn should_trace_each_consumed_symbol() {
    let (states, transitions) = contains_zero_one();
    let mut evaluator = NfaEvaluator::new(&states, &BINARY, &transitions, "A", &["C"]);

    let trace = evaluator.trace("01".chars());

    assert_eq!(vec!["A".to_string()], trace.initial);
    assert_eq!(
        vec![
            Step::new('0', vec!["A".to_string(), "B".to_string()]),
            Step::new('1', vec!["A".to_string(), "C".to_string()]),
        ],
        trace.steps
    );
    assert!(trace.accepted);

    // a rejecting step ends the trace.
    let trace = evaluator.initial_state().trace("0x1".chars());
    assert_eq!(2, trace.len());
    assert!(trace.final_states().is_empty());
    assert!(!trace.accepted);
}

#[test]
fn should_edit_a_model_and_reflect_the_changes_in_evaluation() {
    let mut dfa = Dfa::empty(["S0", "S1"], BINARY);
    dfa.set_transition("S0", '1', "S1").unwrap();
    dfa.set_transition("S1", '1', "S1").unwrap();
    dfa.toggle_accept_state("S1").unwrap();

    assert!(dfa.accepts("11"));
    assert!(!dfa.accepts("10"));

    assert!(dfa.add_state("S2"));
    dfa.set_transition("S1", '0', "S2").unwrap();
    dfa.set_transition("S2", '0', "S2").unwrap();
    dfa.toggle_accept_state("S2").unwrap();
    assert!(dfa.accepts("100"));

    assert!(dfa.remove_state("S1"));
    assert_eq!(Ok(()), dfa.validate());
    assert!(!dfa.accepts("1"));
    assert!(dfa.accept_states().iter().all(|state| state != "S1"));
}
