// ratas-run: run an automaton description against inputs from stdin.
//
// Reads input strings from stdin (one per line) and prints the
// acceptance verdict for each:
//   A: input    (accepted)
//   R: input    (rejected)
//
// Usage:
//   ratas-run FILE [--max-steps N]
//
// Options:
//   --max-steps N   Give up after N applied moves per run instead of
//                   hanging on a non-terminating description
//   -h, --help      Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if ratas_cli::wants_help(&args) {
        println!("ratas-run: run an automaton description against inputs from stdin.");
        println!();
        println!("Usage: ratas-run FILE [--max-steps N]");
        println!();
        println!("Reads input strings from stdin (one per line). Prints:");
        println!("  A: input    (accepted)");
        println!("  R: input    (rejected)");
        println!();
        println!("Options:");
        println!("  --max-steps N   Give up after N applied moves per run");
        println!("  -h, --help      Print this help");
        return;
    }

    let (max_steps, args) =
        ratas_cli::parse_max_steps(&args).unwrap_or_else(|e| ratas_cli::fatal(&e));
    let [file] = args.as_slice() else {
        ratas_cli::fatal("expected exactly one FILE argument (see --help)");
    };

    let machine = ratas_cli::load_machine(file).unwrap_or_else(|e| ratas_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let input = match line {
            Ok(l) => l,
            Err(e) => ratas_cli::fatal(&format!("stdin: {e}")),
        };

        let verdict = match max_steps {
            Some(limit) => match machine.run_bounded(&input, limit) {
                Ok(v) => v,
                Err(e) => {
                    writeln!(out, "?: {input} ({e})").ok();
                    continue;
                }
            },
            None => machine.run(&input),
        };

        let mark = if verdict { 'A' } else { 'R' };
        if writeln!(out, "{mark}: {input}").is_err() {
            break;
        }
    }
}
