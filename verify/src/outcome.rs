use serde::{Deserialize, Serialize};

use crate::check::{CheckOutcome, Judgment};
use crate::exit_codes;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Pass => exit_codes::OK,
            Outcome::Fail => exit_codes::FAILED,
        }
    }
}

pub fn classify_outcome(judgment: &Judgment) -> Outcome {
    if judgment.checks.iter().all(CheckOutcome::passed) {
        Outcome::Pass
    } else {
        Outcome::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn judgment(results: &[bool]) -> Judgment {
        Judgment {
            suite_id: "s".to_string(),
            started_at: String::new(),
            finished_at: String::new(),
            checks: results
                .iter()
                .map(|passed| CheckOutcome::Probe {
                    name: "x.Y".to_string(),
                    expect: true,
                    actual: *passed,
                    passed: *passed,
                })
                .collect(),
        }
    }

    #[test]
    fn pass_when_all_checks_pass() {
        let outcome = classify_outcome(&judgment(&[true, true]));
        assert_eq!(outcome, Outcome::Pass);
        assert_eq!(outcome.exit_code(), exit_codes::OK);
    }

    #[test]
    fn fail_when_any_check_fails() {
        let outcome = classify_outcome(&judgment(&[true, false, true]));
        assert_eq!(outcome, Outcome::Fail);
        assert_eq!(outcome.exit_code(), exit_codes::FAILED);
    }
}
