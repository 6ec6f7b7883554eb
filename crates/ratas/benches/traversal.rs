// Criterion benchmarks for ratas traversal and translation.
//
// Run:
//   cargo bench -p ratas

use criterion::{criterion_group, criterion_main, Criterion};

use ratas::{Fsa, FsaRule, Pda, PdaRule, State, Symbol, Translator};

fn states(names: &[&str]) -> Vec<State> {
    names.iter().map(|s| s.to_string()).collect()
}

fn ends_in_01() -> Fsa {
    Fsa::new(
        states(&["q0", "q1", "q2"]),
        "01".chars(),
        vec![
            FsaRule::new("q0", Symbol::Char('0'), "q1"),
            FsaRule::new("q0", Symbol::Char('1'), "q0"),
            FsaRule::new("q1", Symbol::Char('1'), "q2"),
            FsaRule::new("q1", Symbol::Char('0'), "q1"),
            FsaRule::new("q2", Symbol::Char('0'), "q1"),
            FsaRule::new("q2", Symbol::Char('1'), "q0"),
        ],
        "q0",
        states(&["q2"]),
    )
    .unwrap()
}

fn balanced_parens() -> Pda {
    Pda::new(
        states(&["q0"]),
        "()".chars(),
        vec![
            PdaRule::new("q0", Symbol::Char('('), Symbol::Epsilon, "(", "q0"),
            PdaRule::new("q0", Symbol::Char(')'), Symbol::Char('('), "", "q0"),
        ],
        "q0",
        states(&["q0"]),
    )
    .unwrap()
}

/// Drive the FSA over a 10k-character binary string.
fn bench_fsa_run(c: &mut Criterion) {
    let m = ends_in_01();
    let input = "0110".repeat(2_500);

    c.bench_function("fsa_run_10k_chars", |b| {
        b.iter(|| std::hint::black_box(m.run(&input)));
    });
}

/// Drive the PDA over 10k characters of deeply nested parentheses.
fn bench_pda_run(c: &mut Criterion) {
    let m = balanced_parens();
    let input = format!("{}{}", "(".repeat(5_000), ")".repeat(5_000));

    c.bench_function("pda_run_10k_nested", |b| {
        b.iter(|| std::hint::black_box(m.run(&input)));
    });
}

/// Translate a 10k-character string through a small table.
fn bench_translate(c: &mut Criterion) {
    let t = Translator::new(
        vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
            ("c".to_string(), "3".to_string()),
        ],
        vec!["1".to_string(), "2".to_string(), "3".to_string()],
    )
    .unwrap();
    let input = "abcabc".repeat(1_667);

    c.bench_function("translate_10k_chars", |b| {
        b.iter(|| std::hint::black_box(t.translate(&input)));
    });
}

criterion_group!(benches, bench_fsa_run, bench_pda_run, bench_translate);
criterion_main!(benches);
