//! Leftmost-derivation explorer tests

use derivar::prelude::*;

fn balanced_grammar() -> Grammar {
    let mut builder = GrammarBuilder::new();
    builder
        .add_terminal("a")
        .unwrap()
        .add_terminal("b")
        .unwrap();
    builder
        .add_rule("S -> a S b")
        .unwrap()
        .add_rule("S -> ε")
        .unwrap();
    builder.set_start("S").unwrap();
    builder.build(&GrammarFactory::standard()).unwrap()
}

fn form(names: &[&str]) -> SententialForm {
    SententialForm::new(names.iter().map(|n| Symbol::new(*n)))
}

#[test]
fn one_step_successors_of_start() {
    let grammar = balanced_grammar();
    let successors = grammar.derive_left(&form(&["S"]));

    assert_eq!(successors.len(), 2);
    assert!(successors.contains(&SententialForm::empty()));
    assert!(successors.contains(&form(&["a", "S", "b"])));
}

#[test]
fn depth_zero_returns_the_input_unchanged() {
    let grammar = balanced_grammar();
    let start = form(&["a", "S", "b"]);
    assert_eq!(grammar.derive_left_to_depth(&start, 0), vec![start]);
}

#[test]
fn frontier_forms_keep_balanced_shape() {
    let grammar = balanced_grammar();

    // After n expansions every surviving sentence is aⁿbⁿ or deepens further.
    for depth in 1..5 {
        for frontier_form in grammar.derive_left_to_depth(&form(&["S"]), depth) {
            let text = frontier_form.to_string();
            let opens = text.matches('a').count();
            let closes = text.matches('b').count();
            assert_eq!(opens, closes, "unbalanced frontier form `{text}`");
        }
    }
}

#[test]
fn lazy_iterator_yields_breadth_first_pairs() {
    let grammar = balanced_grammar();
    let items: Vec<(SententialForm, usize)> =
        grammar.derive_left_iter(form(&["S"])).take(5).collect();

    assert_eq!(items[0], (form(&["S"]), 0));
    let depths: Vec<usize> = items.iter().map(|(_, d)| *d).collect();
    assert!(depths.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn lazy_iterator_visits_every_sentence_of_a_finite_language() {
    let mut builder = GrammarBuilder::new();
    builder
        .add_terminal("x")
        .unwrap()
        .add_terminal("y")
        .unwrap();
    builder
        .add_rule("A -> x B")
        .unwrap()
        .add_rule("A -> y")
        .unwrap()
        .add_rule("B -> y")
        .unwrap();
    builder.set_start("A").unwrap();
    let grammar = builder.build(&GrammarFactory::standard()).unwrap();

    let sentences: Vec<String> = grammar
        .derive_left_iter(form(&["A"]))
        .filter(|(f, _)| f.first_index_of(|s| grammar.nonterminals().contains(s)).is_none())
        .map(|(f, _)| f.to_string())
        .collect();

    assert_eq!(sentences, ["y", "x y"]);
}

#[test]
fn recursive_grammar_keeps_producing() {
    let grammar = balanced_grammar();
    let pulled = grammar.derive_left_iter(form(&["S"])).take(500).count();
    assert_eq!(pulled, 500);
}
