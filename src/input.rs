//! Input file grammar.
//!
//! Line-oriented directives; `#` starts a comment and blank lines are
//! ignored. Keywords are case-insensitive, process names are not.
//!
//! ```text
//! processcount 2
//! runfor 10
//! use rr
//! quantum 2
//! process name A arrival 0 burst 3
//! process name B arrival 1 burst 3
//! end
//! ```
//!
//! Unknown directives are ignored and `end` stops parsing. The parser
//! enforces the directive-level rules; see [`crate::validation`] for the
//! semantic checks.
//!
//! # Example
//!
//! ```
//! use u_cpusim::input::parse_input;
//! use u_cpusim::models::Policy;
//!
//! let params = parse_input("processcount 1\nrunfor 5\nuse sjf\nprocess name A arrival 0 burst 2\nend\n")?;
//! assert_eq!(params.policy, Policy::Sjf);
//! assert_eq!(params.processes[0].burst, 2);
//! # Ok::<(), u_cpusim::error::ConfigError>(())
//! ```

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::models::{Policy, ProcessSpec, SimulationParams, Tick};

/// Parses input text into simulation parameters.
pub fn parse_input(text: &str) -> Result<SimulationParams, ConfigError> {
    let mut process_count: Option<usize> = None;
    let mut runfor: Option<Tick> = None;
    let mut scheduler: Option<String> = None;
    let mut quantum: Option<Tick> = None;
    let mut processes = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or_default();
        let tokens: Vec<&str> = content.split_whitespace().collect();
        let Some(directive) = tokens.first() else {
            continue;
        };

        match directive.to_ascii_lowercase().as_str() {
            "processcount" => {
                let value = required_value(&tokens, "processcount")?;
                process_count = Some(parse_number(value, line, "processcount")?);
            }
            "runfor" => {
                let value = required_value(&tokens, "runfor")?;
                runfor = Some(parse_number(value, line, "runfor")?);
            }
            "use" => {
                let value = required_value(&tokens, "use")?;
                scheduler = Some(value.to_ascii_lowercase());
            }
            "quantum" => {
                let value = required_value(&tokens, "quantum")?;
                quantum = Some(parse_number(value, line, "quantum")?);
            }
            "process" => processes.push(parse_process(&tokens, line)?),
            "end" => break,
            _ => {}
        }
    }

    let declared = process_count.ok_or(ConfigError::MissingParameter("processcount"))?;
    let runfor = runfor.ok_or(ConfigError::MissingParameter("runfor"))?;
    let scheduler = scheduler.ok_or(ConfigError::MissingParameter("use"))?;

    let policy = match scheduler.as_str() {
        "fcfs" => Policy::Fcfs,
        "sjf" => Policy::Sjf,
        "rr" => {
            let quantum = quantum.ok_or(ConfigError::MissingQuantum)?;
            let quantum = NonZeroU32::new(quantum).ok_or_else(|| ConfigError::InvalidValue {
                line: quantum_line(text),
                directive: "quantum",
                value: quantum.to_string(),
            })?;
            Policy::RoundRobin { quantum }
        }
        _ => return Err(ConfigError::UnknownScheduler(scheduler)),
    };

    if processes.len() != declared {
        return Err(ConfigError::ProcessCountMismatch {
            declared,
            found: processes.len(),
        });
    }

    Ok(SimulationParams {
        policy,
        runfor,
        processes,
    })
}

impl FromStr for SimulationParams {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_input(s)
    }
}

/// Writes the parameters back in input grammar.
impl fmt::Display for SimulationParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "processcount {}", self.process_count())?;
        writeln!(f, "runfor {}", self.runfor)?;
        writeln!(f, "use {}", self.policy.keyword())?;
        if let Some(quantum) = self.policy.quantum() {
            writeln!(f, "quantum {quantum}")?;
        }
        for spec in &self.processes {
            writeln!(
                f,
                "process name {} arrival {} burst {}",
                spec.name, spec.arrival, spec.burst
            )?;
        }
        writeln!(f, "end")
    }
}

fn required_value<'a>(tokens: &[&'a str], directive: &'static str) -> Result<&'a str, ConfigError> {
    tokens
        .get(1)
        .copied()
        .ok_or(ConfigError::MissingParameter(directive))
}

fn parse_number<T: FromStr>(value: &str, line: usize, directive: &'static str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        line,
        directive,
        value: value.to_string(),
    })
}

/// Parses `process name <n> arrival <a> burst <b>`; keys may appear in any order.
fn parse_process(tokens: &[&str], line: usize) -> Result<ProcessSpec, ConfigError> {
    let name = key_value(tokens, "name", line)?;
    let arrival = parse_number(key_value(tokens, "arrival", line)?, line, "arrival")?;
    let burst = parse_number(key_value(tokens, "burst", line)?, line, "burst")?;
    Ok(ProcessSpec::new(name, arrival, burst))
}

fn key_value<'a>(tokens: &[&'a str], key: &str, line: usize) -> Result<&'a str, ConfigError> {
    tokens
        .iter()
        .position(|t| t.eq_ignore_ascii_case(key))
        .and_then(|i| tokens.get(i + 1))
        .copied()
        .ok_or(ConfigError::MalformedProcess { line })
}

/// Line of the last `quantum` directive, for error reporting.
fn quantum_line(text: &str) -> usize {
    text.lines()
        .enumerate()
        .filter(|(_, l)| {
            l.split_whitespace()
                .next()
                .is_some_and(|d| d.eq_ignore_ascii_case("quantum"))
        })
        .map(|(i, _)| i + 1)
        .last()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RR_INPUT: &str = "\
# sample
processcount 2   # two processes
runfor 10
use rr
quantum 2

process name A arrival 0 burst 3
process name B arrival 1 burst 3
end
";

    #[test]
    fn test_parse_round_robin() {
        let params = parse_input(RR_INPUT).unwrap();
        assert_eq!(params.runfor, 10);
        assert_eq!(params.policy.quantum(), Some(2));
        assert_eq!(
            params.processes,
            vec![ProcessSpec::new("A", 0, 3), ProcessSpec::new("B", 1, 3)]
        );
    }

    #[test]
    fn test_keywords_case_insensitive() {
        let text = "PROCESSCOUNT 1\nRunFor 4\nUSE FCFS\nProcess Name Job1 Arrival 2 Burst 1\nEND\n";
        let params = parse_input(text).unwrap();
        assert_eq!(params.policy, Policy::Fcfs);
        // Names keep their case
        assert_eq!(params.processes[0].name, "Job1");
    }

    #[test]
    fn test_process_keys_any_order() {
        let text = "processcount 1\nrunfor 4\nuse sjf\nprocess burst 3 name X arrival 1\n";
        let params = parse_input(text).unwrap();
        assert_eq!(params.processes[0], ProcessSpec::new("X", 1, 3));
    }

    #[test]
    fn test_end_stops_parsing() {
        let text = "processcount 1\nrunfor 4\nuse sjf\nprocess name A arrival 0 burst 1\nend\nprocess name B arrival 0 burst 1\n";
        assert_eq!(parse_input(text).unwrap().process_count(), 1);
    }

    #[test]
    fn test_missing_parameters() {
        assert_eq!(
            parse_input("runfor 4\nuse fcfs\n").unwrap_err(),
            ConfigError::MissingParameter("processcount")
        );
        assert_eq!(
            parse_input("processcount 0\nuse fcfs\n").unwrap_err(),
            ConfigError::MissingParameter("runfor")
        );
        assert_eq!(
            parse_input("processcount 0\nrunfor 3\n").unwrap_err(),
            ConfigError::MissingParameter("use")
        );
        assert_eq!(
            parse_input("processcount\n").unwrap_err(),
            ConfigError::MissingParameter("processcount")
        );
    }

    #[test]
    fn test_missing_quantum() {
        let text = "processcount 0\nrunfor 3\nuse rr\n";
        assert_eq!(parse_input(text).unwrap_err(), ConfigError::MissingQuantum);
    }

    #[test]
    fn test_zero_quantum() {
        let text = "processcount 0\nrunfor 3\nuse rr\nquantum 0\n";
        assert_eq!(
            parse_input(text).unwrap_err(),
            ConfigError::InvalidValue {
                line: 4,
                directive: "quantum",
                value: "0".into()
            }
        );
    }

    #[test]
    fn test_count_mismatch() {
        let text = "processcount 2\nrunfor 3\nuse fcfs\nprocess name A arrival 0 burst 1\n";
        assert_eq!(
            parse_input(text).unwrap_err(),
            ConfigError::ProcessCountMismatch {
                declared: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_malformed_process() {
        let text = "processcount 1\nrunfor 3\nuse fcfs\nprocess name A arrival 0\n";
        assert_eq!(
            parse_input(text).unwrap_err(),
            ConfigError::MalformedProcess { line: 4 }
        );

        let text = "processcount 1\nrunfor 3\nuse fcfs\nprocess name A arrival soon burst 1\n";
        assert!(matches!(
            parse_input(text).unwrap_err(),
            ConfigError::InvalidValue {
                directive: "arrival",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_runfor_rejected() {
        let text = "processcount 0\nrunfor -1\nuse fcfs\n";
        assert!(matches!(
            parse_input(text).unwrap_err(),
            ConfigError::InvalidValue {
                directive: "runfor",
                line: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_scheduler() {
        let text = "processcount 0\nrunfor 3\nuse lottery\n";
        assert_eq!(
            parse_input(text).unwrap_err(),
            ConfigError::UnknownScheduler("lottery".into())
        );
    }

    #[test]
    fn test_display_is_parseable() {
        let params = parse_input(RR_INPUT).unwrap();
        let text = params.to_string();
        assert!(text.starts_with("processcount 2\nrunfor 10\nuse rr\nquantum 2\n"));
        assert_eq!(text.parse::<SimulationParams>().unwrap(), params);
    }
}
