use super::*;

fn parser(args: &[&str]) -> ArgParser {
    ArgParser::new(std::iter::once("romsplit").chain(args.iter().copied()))
}

const TABLE: &[OptSpec] = &[
    OptSpec::value('f', "file"),
    OptSpec::flag('s', "split"),
    OptSpec::value('x', "suffix"),
];

fn parse_table(args: &[&str]) -> Result<ParsedArgs, ArgError> {
    parse(TABLE, std::iter::once("romsplit").chain(args.iter().copied()))
}

// ===== LOOKUP TESTS =====

#[test]
fn test_param_count_excludes_program() {
    assert_eq!(parser(&[]).param_count(), 0);
    assert_eq!(parser(&["a", "b"]).param_count(), 2);
    assert_eq!(ArgParser::new(Vec::<String>::new()).param_count(), 0);
}

#[test]
fn test_program_name() {
    assert_eq!(parser(&["x"]).program(), "romsplit");
    assert_eq!(ArgParser::new(Vec::<String>::new()).program(), "");
}

#[test]
fn test_help_short_and_long() {
    assert!(parser(&["-h"]).help_requested());
    assert!(parser(&["rom.img", "--help"]).help_requested());
    assert!(!parser(&["--helpme"]).help_requested());
}

#[test]
fn test_wants_help_without_args() {
    assert!(parser(&[]).wants_help(true));
    assert!(!parser(&[]).wants_help(false));
    assert!(!parser(&["rom.img"]).wants_help(true));
}

#[test]
fn test_long_flag() {
    assert_eq!(parser(&["--split"]).long_opt("split", false), Some(OptMatch::Present));
    assert_eq!(parser(&["--splitx"]).long_opt("split", false), None);
    assert_eq!(parser(&["-split"]).long_opt("split", false), None);
}

#[test]
fn test_long_value_forms() {
    assert_eq!(
        parser(&["--file=rom.img"]).long_opt("file", true),
        Some(OptMatch::Value("rom.img".into()))
    );
    assert_eq!(
        parser(&["--file", "rom.img"]).long_opt("file", true),
        Some(OptMatch::Value("rom.img".into()))
    );
}

#[test]
fn test_long_value_not_taken_from_option() {
    assert_eq!(parser(&["--file", "-s"]).long_opt("file", true), None);
    assert_eq!(parser(&["--file"]).long_opt("file", true), None);
    assert_eq!(parser(&["--file="]).long_opt("file", true), None);
}

#[test]
fn test_long_prefix_is_not_a_match() {
    assert_eq!(parser(&["--filename=x"]).long_opt("file", true), None);
}

#[test]
fn test_short_flag() {
    assert_eq!(parser(&["-s"]).short_opt('s', false), Some(OptMatch::Present));
    assert_eq!(parser(&["-sx"]).short_opt('s', false), None);
}

#[test]
fn test_short_value_forms() {
    let want = Some(OptMatch::Value("rom".into()));
    assert_eq!(parser(&["-f=rom"]).short_opt('f', true), want);
    assert_eq!(parser(&["-from"]).short_opt('f', true), want);
    assert_eq!(parser(&["-f", "rom"]).short_opt('f', true), want);
}

#[test]
fn test_short_value_needs_alnum_attached() {
    assert_eq!(parser(&["-f.cdr"]).short_opt('f', true), None);
}

#[test]
fn test_short_non_alnum_rejected() {
    assert_eq!(parser(&["-?"]).short_opt('?', false), None);
}

#[test]
fn test_opt_either_spelling() {
    assert_eq!(parser(&["-s"]).opt('s', "split", false), Ok(Some(OptMatch::Present)));
    assert_eq!(parser(&["--split"]).opt('s', "split", false), Ok(Some(OptMatch::Present)));
    assert_eq!(parser(&[]).opt('s', "split", false), Ok(None));
}

#[test]
fn test_opt_conflict_is_error() {
    let err = parser(&["-s", "--split"]).opt('s', "split", false).unwrap_err();
    assert_eq!(
        err,
        ArgError::Conflict {
            short: 's',
            long: "split".into()
        }
    );
    assert!(err.to_string().contains("--split"));
}

// ===== TABLE PARSE TESTS =====

#[test]
fn test_parse_full_command_line() {
    let parsed = parse_table(&["--file", "rom.img", "-s", "-x", ".cdr"]);
    // ".cdr" starts with '.', not '-', so the separate form takes it
    let parsed = parsed.unwrap();
    assert_eq!(parsed.value("file"), Some("rom.img"));
    assert!(parsed.has("split"));
    assert_eq!(parsed.value("suffix"), Some(".cdr"));
    assert!(parsed.positionals.is_empty());
    assert!(!parsed.help);
}

#[test]
fn test_parse_positionals() {
    let parsed = parse_table(&["kick.rom"]).unwrap();
    assert_eq!(parsed.positionals, vec!["kick.rom".to_string()]);
    assert!(parsed.options.is_empty());
    assert_eq!(parsed.program, "romsplit");
}

#[test]
fn test_parse_value_not_positional() {
    let parsed = parse_table(&["-f", "rom.img", "extra"]).unwrap();
    assert_eq!(parsed.value("file"), Some("rom.img"));
    assert_eq!(parsed.positionals, vec!["extra".to_string()]);
}

#[test]
fn test_parse_missing_value() {
    let err = parse_table(&["--file"]).unwrap_err();
    assert_eq!(
        err,
        ArgError::MissingValue {
            long: "file".into()
        }
    );
}

#[test]
fn test_parse_missing_value_followed_by_option() {
    let err = parse_table(&["-f", "-s"]).unwrap_err();
    assert!(matches!(err, ArgError::MissingValue { .. }));
}

#[test]
fn test_parse_conflict_propagates() {
    let err = parse_table(&["-f", "a", "--file=b"]).unwrap_err();
    assert!(matches!(err, ArgError::Conflict { short: 'f', .. }));
}

#[test]
fn test_parse_help_flag() {
    assert!(parse_table(&["-h"]).unwrap().help);
}
