//! Derivar CLI - LL(1) table demonstration
//!
//! Builds a small toy-language grammar and renders its rule listing,
//! predict sets, LL(1) parse table, conflicts, and leftmost derivations.

use std::collections::BTreeMap;

use clap::{Parser, Subcommand};
use derivar::prelude::*;

/// Derivar - Context-Free Grammar Analysis
#[derive(Parser)]
#[command(name = "derivar")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the numbered rule listing
    Rules,

    /// Print the LL(1) parse table (`;` delimited)
    Table,

    /// Print the predict set of every rule
    Predict {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// Print every LL(1) conflict of the grammar
    Conflicts,

    /// Print the leftmost-derivation frontier at a given depth
    Derive {
        /// Number of derivation steps from the start symbol
        #[arg(short, long, default_value = "3")]
        depth: usize,
    },
}

/// The toy-language grammar the demonstration renders
#[allow(clippy::too_many_lines)]
fn toy_grammar() -> Result<Grammar> {
    let mut builder = GrammarBuilder::new();
    builder.set_start("P")?;

    for terminal in [
        "eof",
        "eol",
        "identifier",
        "kw-class",
        "kw-if",
        "kw-else",
        "kw-is",
        "kw-in",
        "kw-return",
        "kw-var",
        "kw-while",
        "kw-static",
        "kw-import",
        "kw-for",
        "kw-break",
        "kw-continue",
        "kw-null",
        "kw-num",
        "kw-bool",
        "kw-string",
        "sp-open-paren",
        "sp-close-paren",
        "sp-open-brace",
        "sp-close-brace",
        "sp-comma",
        "lit-null",
        "lit-whole",
        "lit-decimal",
        "lit-boolean",
        "lit-string",
        "op-minus",
        "op-not",
        "op-equal",
    ] {
        builder.add_terminal(terminal)?;
    }

    builder.add_rule("W -> eol W")?.add_rule("W -> ε")?;

    builder.add_rule("P -> W I C")?;

    builder
        .add_rule("I -> I' W I")?
        .add_rule("I -> ε")?
        .add_rule("I' -> kw-import W lit-string kw-for W identifier eol")?;

    builder
        .add_rule("C -> C' W C")?
        .add_rule("C -> ε")?
        .add_rule("C' -> kw-class identifier CB eol")?;

    builder.add_rule("CB -> sp-open-brace W CM sp-close-brace")?;

    builder.add_rule("CM -> CM' W CM")?.add_rule("CM -> ε")?;

    builder.add_rule("CM' -> SFD")?;

    builder
        .add_rule("SFD -> kw-static identifier sp-open-paren PL sp-close-paren B eol")?;

    builder
        .add_rule("PL -> identifier PR'")?
        .add_rule("PL -> ε")?
        .add_rule("PR -> PR' PR")?
        .add_rule("PR -> ε")?
        .add_rule("PR' -> sp-comma identifier")?;

    builder
        .add_rule("B -> sp-open-brace B' sp-close-brace")?
        .add_rule("B' -> E")?
        .add_rule("B' -> ε")?
        .add_rule("B' -> eol S")?;

    builder
        .add_rule("S -> S' W S")?
        .add_rule("S -> ε")?
        .add_rule("S' -> B")?
        .add_rule("S' -> DS")?
        .add_rule("S' -> ES")?
        .add_rule("S' -> WS")?
        .add_rule("S' -> FS")?
        .add_rule("S' -> BS")?
        .add_rule("S' -> CS")?
        .add_rule("S' -> RS")?
        .add_rule("S' -> IS")?;

    builder
        .add_rule("DS -> kw-var identifier DS' eol")?
        .add_rule("DS' -> op-equal E")?
        .add_rule("DS' -> ε")?;

    builder.add_rule("ES -> E eol")?;

    builder.add_rule("WS -> kw-while sp-open-paren E sp-close-paren B eol")?;

    builder.add_rule("FS -> kw-for sp-open-paren identifier kw-in E sp-close-paren B eol")?;

    builder.add_rule("BS -> kw-break eol")?;
    builder.add_rule("CS -> kw-continue eol")?;

    builder
        .add_rule("RS -> kw-return RS' eol")?
        .add_rule("RS' -> E")?
        .add_rule("RS' -> ε")?;

    builder
        .add_rule("IS -> kw-if sp-open-paren E sp-close-paren B IS' eol")?
        .add_rule("IS' -> kw-else B")?
        .add_rule("IS' -> ε")?;

    builder
        .add_rule("E -> identifier")?
        .add_rule("E -> op-minus")?
        .add_rule("E -> op-not")?
        .add_rule("E -> lit-null")?
        .add_rule("E -> lit-whole")?
        .add_rule("E -> lit-decimal")?
        .add_rule("E -> lit-boolean")?
        .add_rule("E -> lit-string")?;

    builder.build(&GrammarFactory::standard())
}

/// Rules numbered from 1 in canonical-text order
fn numbered_rules(grammar: &Grammar) -> Vec<(usize, Rule)> {
    let mut rules: Vec<Rule> = grammar.rules().iter().cloned().collect();
    rules.sort_by_key(ToString::to_string);
    rules
        .into_iter()
        .enumerate()
        .map(|(i, rule)| (i + 1, rule))
        .collect()
}

/// Column symbols: sorted terminals plus the end-of-input sentinel
fn table_columns(grammar: &Grammar) -> Vec<Symbol> {
    let mut columns: Vec<Symbol> = grammar.terminals().iter().cloned().collect();
    columns.push(Symbol::end_of_input());
    columns
}

fn print_rules(grammar: &Grammar) {
    println!("{}", "=".repeat(50));
    println!("Id;Rule");
    for (id, rule) in numbered_rules(grammar) {
        println!("{id};{rule}");
    }
    println!("{}", "=".repeat(50));
}

fn print_table(grammar: &Grammar) -> Result<()> {
    let rules = numbered_rules(grammar);
    let ids: BTreeMap<&Rule, usize> = rules.iter().map(|(id, rule)| (rule, *id)).collect();
    let columns = table_columns(grammar);

    print!("\" \"");
    for terminal in &columns {
        print!(";{terminal}");
    }
    println!();

    for nonterminal in grammar.nonterminals() {
        print!("{nonterminal}");

        for terminal in &columns {
            let mut cell = 0_i64;

            for rule in grammar.rules_of(nonterminal)? {
                if !grammar.predict(rule)?.contains(terminal) {
                    continue;
                }

                let id = ids[rule];
                if cell != 0 {
                    eprintln!("ERR: [{cell}] <-> [{id}] ({rule})");
                    cell = -1;
                } else {
                    cell = id as i64;
                }
            }

            match cell {
                0 => print!(";\" \""),
                c if c < 0 => print!(";ERR"),
                c => print!(";{c}"),
            }
        }
        println!();
    }

    Ok(())
}

fn print_predict(grammar: &Grammar, output: &str) -> Result<()> {
    let rules = numbered_rules(grammar);

    if output == "json" {
        let entries: Vec<_> = rules
            .iter()
            .map(|(id, rule)| {
                let predict = grammar.predict(rule)?;
                Ok(serde_json::json!({
                    "id": id,
                    "rule": rule.to_string(),
                    "predict": predict.iter().map(ToString::to_string).collect::<Vec<_>>(),
                }))
            })
            .collect::<Result<_>>()?;
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).unwrap_or_default()
        );
        return Ok(());
    }

    for (id, rule) in rules {
        println!("{id};{rule};{}", grammar.predict(&rule)?);
    }
    Ok(())
}

fn print_conflicts(grammar: &Grammar) -> Result<()> {
    let conflicts = grammar.ll1_conflicts()?;
    if conflicts.is_empty() {
        println!("no LL(1) conflicts");
        return Ok(());
    }

    for conflict in conflicts {
        println!(
            "{}: ({}) <-> ({}) on {}",
            conflict.head, conflict.rules.0, conflict.rules.1, conflict.overlap
        );
    }
    Ok(())
}

fn print_derivations(grammar: &Grammar, depth: usize) {
    let start = SententialForm::new([grammar.start().clone()]);
    for form in grammar.derive_left_to_depth(&start, depth) {
        println!("{form}");
    }
}

fn main() {
    let cli = Cli::parse();

    let grammar = toy_grammar().unwrap_or_else(|e| {
        eprintln!("Grammar error: {e}");
        std::process::exit(1);
    });

    let outcome = match cli.command {
        Commands::Rules => {
            print_rules(&grammar);
            Ok(())
        }
        Commands::Table => print_table(&grammar),
        Commands::Predict { output } => print_predict(&grammar, &output),
        Commands::Conflicts => print_conflicts(&grammar),
        Commands::Derive { depth } => {
            print_derivations(&grammar, depth);
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("Analysis error: {e}");
        std::process::exit(1);
    }
}
