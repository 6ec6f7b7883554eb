// ratas-translate: translate stdin lines through a machine's table.
//
// Reads lines from stdin and prints each line's translation through the
// description's translation table. The table is independent of the
// acceptance machinery, so no run is performed.
//
// Usage:
//   ratas-translate FILE
//
// Fails if the description declares no `map:` entries.

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if ratas_cli::wants_help(&args) {
        println!("ratas-translate: translate stdin lines through a machine's table.");
        println!();
        println!("Usage: ratas-translate FILE");
        println!();
        println!("Reads lines from stdin, prints each line's translation.");
        println!("The description must declare 'map:' entries.");
        return;
    }

    let [file] = args.as_slice() else {
        ratas_cli::fatal("expected exactly one FILE argument (see --help)");
    };

    let machine = ratas_cli::load_machine(file).unwrap_or_else(|e| ratas_cli::fatal(&e));
    let Some(translator) = machine.translator() else {
        ratas_cli::fatal(&format!("{file} declares no translation table"));
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let input = match line {
            Ok(l) => l,
            Err(e) => ratas_cli::fatal(&format!("stdin: {e}")),
        };
        if writeln!(out, "{}", translator.translate(&input)).is_err() {
            break;
        }
    }
}
