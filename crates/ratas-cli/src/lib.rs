// ratas-cli: shared utilities for CLI tools.
//
// The engine consumes a fully formed descriptor; everything textual --
// the machine description file, the `&` epsilon notation, argument
// scanning -- lives here, outside the engine.

use std::process;

use ratas::{Fsa, FsaRule, Machine, Pda, PdaRule, State, Symbol, Translator};

/// Epsilon marker in the file notation. Parsed away before the engine
/// ever sees a rule.
pub const EPSILON_MARK: &str = "&";

/// Parse a machine description from text.
///
/// Line-based format; `#` starts a comment, blank lines are ignored.
/// Each line is `key: value`:
///
/// ```text
/// type: fsa                  # or pda
/// states: q0 q1 q2
/// alphabet: 0 1
/// start: q0
/// final: q2
/// rule: q0 0 q1              # fsa: from read to
/// rule: q0 ( & ( q0          # pda: from read pop push to
/// output: 1 2                # optional output alphabet
/// map: a 1                   # optional translation entry, order kept
/// ```
///
/// `rule:` and `map:` lines repeat; their file order is the engine's
/// tie-break order.
pub fn parse_machine(text: &str) -> Result<Machine, String> {
    let mut kind: Option<String> = None;
    let mut states: Vec<State> = Vec::new();
    let mut alphabet: Vec<char> = Vec::new();
    let mut start: Option<State> = None;
    let mut finals: Vec<State> = Vec::new();
    let mut rule_lines: Vec<(usize, Vec<String>)> = Vec::new();
    let mut output_alphabet: Vec<String> = Vec::new();
    let mut map_entries: Vec<(String, String)> = Vec::new();

    for (lineno, raw) in text.lines().enumerate() {
        let lineno = lineno + 1;
        let line = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        }
        .trim();
        if line.is_empty() {
            continue;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| format!("line {lineno}: expected 'key: value', got {line:?}"))?;
        let fields: Vec<String> = value.split_whitespace().map(str::to_string).collect();

        match key.trim() {
            "type" => match fields.as_slice() {
                [t] if t == "fsa" || t == "pda" => kind = Some(t.clone()),
                _ => return Err(format!("line {lineno}: type must be 'fsa' or 'pda'")),
            },
            "states" => states.extend(fields),
            "alphabet" => {
                for f in &fields {
                    alphabet.push(single_char(f, lineno, "alphabet symbol")?);
                }
            }
            "start" => match fields.as_slice() {
                [s] => start = Some(s.clone()),
                _ => return Err(format!("line {lineno}: start takes exactly one state")),
            },
            "final" => finals.extend(fields),
            "rule" => rule_lines.push((lineno, fields)),
            "output" => output_alphabet.extend(fields),
            "map" => match fields.as_slice() {
                [k, v] => {
                    // `&` means an epsilon fragment, same as a PDA push field.
                    let v = if v == EPSILON_MARK { String::new() } else { v.clone() };
                    map_entries.push((k.clone(), v));
                }
                _ => return Err(format!("line {lineno}: map takes 'key fragment'")),
            },
            other => return Err(format!("line {lineno}: unknown key {other:?}")),
        }
    }

    let kind = kind.ok_or("missing 'type:' line")?;
    let start = start.ok_or("missing 'start:' line")?;
    if states.is_empty() {
        return Err("missing 'states:' line".to_string());
    }
    if finals.is_empty() {
        return Err("missing 'final:' line".to_string());
    }

    let translator = if map_entries.is_empty() {
        None
    } else {
        Some(
            Translator::new(map_entries, output_alphabet)
                .map_err(|e| format!("translation table: {e}"))?,
        )
    };

    let machine = if kind == "fsa" {
        let mut rules = Vec::new();
        for (lineno, fields) in rule_lines {
            let [from, read, to] = fields.as_slice() else {
                return Err(format!("line {lineno}: fsa rule takes 'from read to'"));
            };
            rules.push(FsaRule::new(from.clone(), symbol(read, lineno)?, to.clone()));
        }
        let mut fsa = Fsa::new(states, alphabet, rules, start, finals)
            .map_err(|e| format!("descriptor: {e}"))?;
        if let Some(t) = translator {
            fsa = fsa.with_translator(t);
        }
        Machine::Fsa(fsa)
    } else {
        let mut rules = Vec::new();
        for (lineno, fields) in rule_lines {
            let [from, read, pop, push, to] = fields.as_slice() else {
                return Err(format!("line {lineno}: pda rule takes 'from read pop push to'"));
            };
            let push = if push == EPSILON_MARK { String::new() } else { push.clone() };
            rules.push(PdaRule::new(
                from.clone(),
                symbol(read, lineno)?,
                symbol(pop, lineno)?,
                push,
                to.clone(),
            ));
        }
        let mut pda = Pda::new(states, alphabet, rules, start, finals)
            .map_err(|e| format!("descriptor: {e}"))?;
        if let Some(t) = translator {
            pda = pda.with_translator(t);
        }
        Machine::Pda(pda)
    };

    Ok(machine)
}

/// Read and parse a machine description file.
pub fn load_machine(path: &str) -> Result<Machine, String> {
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
    parse_machine(&text)
}

fn symbol(field: &str, lineno: usize) -> Result<Symbol, String> {
    if field == EPSILON_MARK {
        return Ok(Symbol::Epsilon);
    }
    single_char(field, lineno, "symbol").map(Symbol::Char)
}

fn single_char(field: &str, lineno: usize, what: &str) -> Result<char, String> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("line {lineno}: {what} must be a single character, got {field:?}")),
    }
}

/// Parse a `--max-steps=N` or `--max-steps N` argument.
///
/// Returns `(max_steps, remaining_args)`.
pub fn parse_max_steps(args: &[String]) -> Result<(Option<u64>, Vec<String>), String> {
    let mut max_steps = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        let value = if let Some(v) = arg.strip_prefix("--max-steps=") {
            Some(v.to_string())
        } else if arg == "--max-steps" {
            if i + 1 < args.len() {
                skip_next = true;
                Some(args[i + 1].clone())
            } else {
                return Err("--max-steps requires a value".to_string());
            }
        } else {
            remaining.push(arg.clone());
            None
        };
        if let Some(v) = value {
            max_steps =
                Some(v.parse::<u64>().map_err(|_| format!("invalid --max-steps value {v:?}"))?);
        }
    }

    Ok((max_steps, remaining))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FSA_TEXT: &str = "\
# binary strings ending in 01
type: fsa
states: q0 q1 q2
alphabet: 0 1
start: q0
final: q2
rule: q0 0 q1
rule: q0 1 q0
rule: q1 1 q2
rule: q1 0 q1
rule: q2 0 q1
rule: q2 1 q0
";

    const PDA_TEXT: &str = "\
type: pda
states: q0
alphabet: ( )
start: q0
final: q0
rule: q0 ( & ( q0
rule: q0 ) ( & q0
";

    #[test]
    fn parse_fsa_description() {
        let m = parse_machine(FSA_TEXT).unwrap();
        assert!(m.run("1101"));
        assert!(!m.run("110"));
        assert!(m.translator().is_none());
    }

    #[test]
    fn parse_pda_description_with_epsilon_marks() {
        let m = parse_machine(PDA_TEXT).unwrap();
        assert!(m.run("(())"));
        assert!(!m.run("(()"));
    }

    #[test]
    fn parse_translation_section() {
        let text = format!("{FSA_TEXT}output: a b\nmap: 0 a\nmap: 1 b\n");
        let m = parse_machine(&text).unwrap();
        assert_eq!(m.translator().unwrap().translate("011"), "abb");
    }

    #[test]
    fn map_epsilon_mark_means_skip() {
        // `map: 0 &` declares an epsilon fragment: the symbol is
        // dropped from the translation, never emitted as a literal `&`,
        // even when `&` is listed in the output alphabet.
        let text = format!("{FSA_TEXT}output: & b\nmap: 0 &\nmap: 1 b\n");
        let m = parse_machine(&text).unwrap();
        assert_eq!(m.translator().unwrap().translate("0110"), "bb");
    }

    #[test]
    fn missing_type_rejected() {
        let err = parse_machine("states: q0\nstart: q0\nfinal: q0\n").unwrap_err();
        assert!(err.contains("type"));
    }

    #[test]
    fn wrong_rule_arity_rejected() {
        let text = "type: fsa\nstates: q0\nstart: q0\nfinal: q0\nrule: q0 q0\n";
        let err = parse_machine(text).unwrap_err();
        assert!(err.contains("from read to"));
    }

    #[test]
    fn bad_descriptor_surfaces_engine_error() {
        let text = "type: fsa\nstates: q0\nstart: qx\nfinal: q0\nrule: q0 a q0\n";
        let err = parse_machine(text).unwrap_err();
        assert!(err.contains("start state"));
    }

    #[test]
    fn max_steps_argument_forms() {
        let args = vec!["--max-steps=500".to_string(), "file".to_string()];
        let (limit, rest) = parse_max_steps(&args).unwrap();
        assert_eq!(limit, Some(500));
        assert_eq!(rest, vec!["file".to_string()]);

        let args = vec!["--max-steps".to_string(), "9".to_string()];
        let (limit, rest) = parse_max_steps(&args).unwrap();
        assert_eq!(limit, Some(9));
        assert!(rest.is_empty());

        assert!(parse_max_steps(&["--max-steps".to_string()]).is_err());
        assert!(parse_max_steps(&["--max-steps=x".to_string()]).is_err());
    }
}
