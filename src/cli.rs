//! Hand-rolled argument handling for the `agify` binary.
//!
//! Two syntaxes are accepted: short flags with a following value token
//! (`-f names.txt`) and long flags with an inline value (`--filename=names.txt`).
//! The tokenizer splits the raw argument vector into both forms; the resolver
//! merges them into a final [`Config`], rejecting cross-form duplicates and
//! enforcing required values.
//!
//! Known looseness, kept on purpose: a short flag greedily consumes the next
//! token as its value without checking it against the recognized-flag set,
//! so `-f -c` binds `-f` to the literal string `"-c"` rather than erroring.

use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Default names file when neither `-f` nor `--filename=` is given.
pub const DEFAULT_FILENAME: &str = "names_reduced.txt";

const SHORT_FLAGS: [&str; 3] = ["-h", "-f", "-c"];
const LONG_FLAGS: [&str; 2] = ["--filename", "--country"];

pub const HELP: &str = "\
agify - fetch name age/count statistics from agify.io and plot them

Usage: agify [OPTIONS]

Options:
  -h                    Show this help and exit
  -f <FILE>             Names file, one name per line (default: names_reduced.txt)
  --filename=<FILE>     Long form of -f
  -c <COUNTRY>          ISO 3166-1 alpha-2 country filter for the API query
  --country=<COUNTRY>   Long form of -c

Lines in the names file whose first character is not a letter are treated
as comments and skipped. Results are written to agify.png.
";

/// Country codes accepted for the `country_id` API filter. A supplied
/// country outside this set is ignored and the query runs unfiltered.
pub const COUNTRIES: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AR", "AS", "AT", "AU",
    "AW", "AX", "AZ", "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ",
    "BM", "BN", "BO", "BR", "BS", "BT", "BW", "BY", "BZ", "CA", "CD", "CF",
    "CG", "CH", "CI", "CK", "CL", "CM", "CN", "CO", "CR", "CU", "CV", "CW",
    "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE", "EG", "ER",
    "ES", "ET", "FI", "FJ", "FM", "FO", "FR", "GA", "GB", "GD", "GE", "GF",
    "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GT", "GU", "GW",
    "GY", "HK", "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IQ",
    "IR", "IS", "IT", "JE", "JM", "JO", "JP", "KE", "KG", "KH", "KI", "KM",
    "KN", "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC", "LI", "LK", "LR",
    "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH",
    "MK", "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV",
    "MW", "MX", "MY", "MZ", "NA", "NC", "NE", "NF", "NG", "NI", "NL", "NO",
    "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG", "PH", "PK", "PL",
    "PM", "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU",
    "RW", "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL",
    "SM", "SN", "SO", "SR", "SS", "ST", "SV", "SX", "SY", "SZ", "TC", "TD",
    "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO", "TR", "TT", "TV", "TW",
    "TZ", "UA", "UG", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI", "VN",
    "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

/// Short-flag tokens and their optional values, as tokenized.
/// Same-form duplicates are collapsed with last-occurrence-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArgs(BTreeMap<String, Option<String>>);

impl RawArgs {
    pub fn contains(&self, flag: &str) -> bool {
        self.0.contains_key(flag)
    }

    /// `None` when the flag is absent, `Some(None)` when it was given
    /// without a value.
    pub fn get(&self, flag: &str) -> Option<Option<&str>> {
        self.0.get(flag).map(|v| v.as_deref())
    }
}

/// Long-flag names (without dashes) and their values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawKwargs(BTreeMap<String, String>);

impl RawKwargs {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|v| v.as_str())
    }
}

/// Validated, de-duplicated run parameters. Immutable after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub filename: String,
    pub country: Option<String>,
}

/// Outcome of resolution: either a runnable [`Config`] or a request for
/// help, which takes precedence over every other flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Help,
    Run(Config),
}

/// Split the raw argument vector (element 0 is the program name and is
/// skipped) into short-flag and long-flag maps.
///
/// Fails fast with [`Error::InvalidArgument`] on the first token that is
/// neither a recognized flag nor a consumed flag value; no partial result
/// is returned.
pub fn tokenize(argv: &[String]) -> Result<(RawArgs, RawKwargs)> {
    let mut args = BTreeMap::new();
    let mut kwargs = BTreeMap::new();

    let mut i = 1;
    while i < argv.len() {
        let token = &argv[i];
        if token.starts_with("--")
            && let Some((key, value)) = token.split_once('=')
        {
            if !LONG_FLAGS.contains(&key) {
                return Err(Error::InvalidArgument(token.clone()));
            }
            kwargs.insert(key[2..].to_string(), value.to_string());
        } else if SHORT_FLAGS.contains(&token.as_str()) {
            if i + 1 < argv.len() {
                // The value token is consumed as-is and never checked
                // against the recognized-flag set.
                args.insert(token.clone(), Some(argv[i + 1].clone()));
                i += 1;
            } else {
                args.insert(token.clone(), None);
            }
        } else {
            return Err(Error::InvalidArgument(token.clone()));
        }
        i += 1;
    }

    Ok((RawArgs(args), RawKwargs(kwargs)))
}

/// Merge tokenized flags into a [`Resolution`] against the built-in
/// [`COUNTRIES`] set.
pub fn resolve(args: &RawArgs, kwargs: &RawKwargs) -> Result<Resolution> {
    resolve_with(args, kwargs, COUNTRIES)
}

/// Like [`resolve`], with an explicit valid-country set.
///
/// Rules, in order:
/// - `-h` short-circuits to [`Resolution::Help`] before anything else;
/// - a field supplied via both forms is a [`Error::DuplicateArgument`];
/// - `-f` without a value is a [`Error::MissingValue`];
/// - a country value outside `countries` is silently ignored (the query
///   simply runs unfiltered); this is the only place country validity is
///   checked;
/// - `-c` without a value raises [`Error::MissingValue`] only when `-f`
///   was also given without a value. The gating on the filename flag is
///   inherited behavior, kept as-is.
pub fn resolve_with(args: &RawArgs, kwargs: &RawKwargs, countries: &[&str]) -> Result<Resolution> {
    if args.contains("-h") {
        return Ok(Resolution::Help);
    }

    let filename = match (args.get("-f"), kwargs.get("filename")) {
        (Some(_), Some(_)) => return Err(Error::DuplicateArgument("filename")),
        (Some(None), None) => return Err(Error::MissingValue("-f")),
        (Some(Some(value)), None) => value.to_string(),
        (None, Some(value)) => value.to_string(),
        (None, None) => DEFAULT_FILENAME.to_string(),
    };

    let mut country = None;
    match (args.get("-c"), kwargs.get("country")) {
        (Some(_), Some(_)) => return Err(Error::DuplicateArgument("country")),
        (Some(Some(value)), None) if countries.contains(&value) => {
            country = Some(value.to_string());
        }
        (None, Some(value)) if countries.contains(&value) => {
            country = Some(value.to_string());
        }
        (Some(None), None) => {
            if matches!(args.get("-f"), Some(None)) {
                return Err(Error::MissingValue("-c"));
            }
        }
        // Unknown country codes fall through with country left unset.
        _ => {}
    }

    Ok(Resolution::Run(Config { filename, country }))
}
