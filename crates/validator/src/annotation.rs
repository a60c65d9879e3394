//! Rule annotation parsing
//!
//! A field annotation is a comma-separated list of rule specifications:
//!
//! | form        | example       | arguments      |
//! |-------------|---------------|----------------|
//! | `name`      | `required`    | none           |
//! | `name=value`| `min=3`       | `["3"]`        |
//! | `name:a:b`  | `range:1:10`  | `["1", "10"]`  |
//!
//! Everything after the first `=` is a single argument, so `pattern=^a:b$`
//! keeps its colon. Commas always separate specifications.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use smallvec::SmallVec;

use crate::foundation::ConfigError;

static RULE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*$").expect("rule name pattern is valid")
});

/// One parsed rule reference from an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    name: String,
    args: SmallVec<[String; 2]>,
}

impl RuleSpec {
    /// Registry identifier of the rule.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw argument strings.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        match self.args.as_slice() {
            [] => Ok(()),
            [single] => write!(f, "={single}"),
            many => {
                for arg in many {
                    write!(f, ":{arg}")?;
                }
                Ok(())
            }
        }
    }
}

/// Parses an annotation into rule specifications.
///
/// An empty or all-whitespace annotation yields no specifications. Empty
/// entries (`"required,,min=1"`) and malformed names are configuration
/// errors.
///
/// # Examples
///
/// ```
/// use strata_validator::annotation::parse;
///
/// let specs = parse("required, min=3, range:1:10").unwrap();
/// assert_eq!(specs[1].name(), "min");
/// assert_eq!(specs[2].args(), ["1", "10"]);
/// ```
pub fn parse(annotation: &str) -> Result<Vec<RuleSpec>, ConfigError> {
    if annotation.trim().is_empty() {
        return Ok(Vec::new());
    }
    annotation.split(',').map(parse_spec).collect()
}

fn parse_spec(raw: &str) -> Result<RuleSpec, ConfigError> {
    let spec = raw.trim();
    let invalid = |reason: &str| ConfigError::InvalidRuleSpec {
        spec: spec.to_string(),
        reason: reason.to_string(),
    };

    if spec.is_empty() {
        return Err(invalid("empty rule specification"));
    }

    let (name, args): (&str, SmallVec<[String; 2]>) = match spec.split_once('=') {
        Some((name, value)) => (name.trim(), SmallVec::from_iter([value.trim().to_string()])),
        None => {
            let mut parts = spec.split(':');
            let name = parts.next().unwrap_or_default().trim();
            (name, parts.map(|arg| arg.trim().to_string()).collect())
        }
    };

    if !RULE_NAME.is_match(name) {
        return Err(invalid("rule name must start with a letter or underscore"));
    }

    Ok(RuleSpec {
        name: name.to_string(),
        args,
    })
}
