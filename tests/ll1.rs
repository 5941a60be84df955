//! End-to-end LL(1) analysis tests
//!
//! Exercises the full pipeline — builder, factory, frozen grammar, and the
//! EMPTY/FIRST/FOLLOW/PREDICT chain — on small grammars with known answers.

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

fn expression_grammar() -> Grammar {
    let mut builder = GrammarBuilder::new();
    for terminal in ["plus", "star", "open", "close", "id"] {
        builder.add_terminal(terminal).unwrap();
    }
    for rule in [
        "E -> T E'",
        "E' -> plus T E'",
        "E' -> ε",
        "T -> F T'",
        "T' -> star F T'",
        "T' -> ε",
        "F -> open E close",
        "F -> id",
    ] {
        builder.add_rule(rule).unwrap();
    }
    builder.set_start("E").unwrap();
    builder.build(&GrammarFactory::standard()).unwrap()
}

fn symbols(names: &[&str]) -> Set<Symbol> {
    names.iter().map(|n| Symbol::new(*n)).collect()
}

fn rule(text: &str) -> Rule {
    text.parse().unwrap()
}

#[test]
fn balanced_grammar_analysis_chain() {
    let grammar = balanced_grammar();
    let s = Symbol::new("S");

    assert_eq!(grammar.empty(&s).unwrap(), Set::singleton(Symbol::epsilon()));
    assert_eq!(grammar.first(&s).unwrap(), symbols(&["a"]));
    assert_eq!(grammar.follow(&s).unwrap(), symbols(&["b", "$"]));
    assert_eq!(grammar.predict(&rule("S -> a S b")).unwrap(), symbols(&["a"]));
    assert_eq!(grammar.predict(&rule("S -> ε")).unwrap(), symbols(&["b", "$"]));
}

#[test]
fn balanced_grammar_predict_sets_are_disjoint() {
    let grammar = balanced_grammar();
    let a = grammar.predict(&rule("S -> a S b")).unwrap();
    let e = grammar.predict(&rule("S -> ε")).unwrap();
    assert!(a.intersect(&e).is_empty());
    assert!(grammar.ll1_conflicts().unwrap().is_empty());
}

#[test]
fn expression_grammar_first_sets() {
    let grammar = expression_grammar();
    let begins = symbols(&["open", "id"]);
    assert_eq!(grammar.first(&Symbol::new("E")).unwrap(), begins);
    assert_eq!(grammar.first(&Symbol::new("T")).unwrap(), begins);
    assert_eq!(grammar.first(&Symbol::new("F")).unwrap(), begins);
    assert_eq!(grammar.first(&Symbol::new("E'")).unwrap(), symbols(&["plus"]));
}

#[test]
fn expression_grammar_follow_sets() {
    let grammar = expression_grammar();
    assert_eq!(
        grammar.follow(&Symbol::new("E")).unwrap(),
        symbols(&["close", "$"])
    );
    assert_eq!(
        grammar.follow(&Symbol::new("E'")).unwrap(),
        symbols(&["close", "$"])
    );
    assert_eq!(
        grammar.follow(&Symbol::new("T")).unwrap(),
        symbols(&["plus", "close", "$"])
    );
    assert_eq!(
        grammar.follow(&Symbol::new("F")).unwrap(),
        symbols(&["plus", "star", "close", "$"])
    );
}

#[test]
fn expression_grammar_is_ll1() {
    let grammar = expression_grammar();
    assert!(grammar.ll1_conflicts().unwrap().is_empty());

    // Every pair of same-head rules must have disjoint predict sets.
    for nonterminal in grammar.nonterminals() {
        let rules: Vec<&Rule> = grammar.rules_of(nonterminal).unwrap().iter().collect();
        for (i, left) in rules.iter().enumerate() {
            for right in &rules[i + 1..] {
                let overlap = grammar
                    .predict(left)
                    .unwrap()
                    .intersect(&grammar.predict(right).unwrap());
                assert!(overlap.is_empty(), "conflict on {nonterminal}: {overlap}");
            }
        }
    }
}

#[test]
fn ambiguous_choice_is_reported_as_conflict() {
    let mut builder = GrammarBuilder::new();
    for terminal in ["if", "then", "else", "x"] {
        builder.add_terminal(terminal).unwrap();
    }
    // Dangling-else shape: both IS' rules predict on `else`.
    builder
        .add_rule("IS -> if x then IS IS'")
        .unwrap()
        .add_rule("IS -> x")
        .unwrap()
        .add_rule("IS' -> else IS")
        .unwrap()
        .add_rule("IS' -> ε")
        .unwrap();
    builder.set_start("IS").unwrap();
    let grammar = builder.build(&GrammarFactory::standard()).unwrap();

    let conflicts = grammar.ll1_conflicts().unwrap();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].head, Symbol::new("IS'"));
    assert!(conflicts[0].overlap.contains(&Symbol::new("else")));
}

#[test]
fn grammar_invariants_hold_after_freeze() {
    let grammar = expression_grammar();

    assert!(grammar
        .terminals()
        .intersect(grammar.nonterminals())
        .is_empty());

    for r in grammar.rules() {
        for symbol in r.body() {
            assert!(
                grammar.terminals().contains(symbol) || grammar.nonterminals().contains(symbol),
                "dangling symbol {symbol} in {r}"
            );
        }
    }

    assert!(grammar.nonterminals().contains(grammar.start()));
    for nonterminal in grammar.nonterminals() {
        assert!(!grammar.rules_of(nonterminal).unwrap().is_empty());
    }
}

#[test]
fn rule_round_trip_through_canonical_text() {
    for text in ["E -> T E'", "E' -> ε", "F -> open E close"] {
        assert_eq!(rule(text).to_string(), text);
    }
}
