use strum_macros::{Display, EnumString};

/// What the engine does with a game that fails validation: abort the whole
/// pass (strict) or log, skip, and keep folding (lenient). The policy is an
/// explicit configuration choice; there is no implicit default behavior in
/// the engine itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum MalformedGamePolicy {
    Reject,
    Skip
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse() {
        assert_eq!(MalformedGamePolicy::from_str("reject"), Ok(MalformedGamePolicy::Reject));
        assert_eq!(MalformedGamePolicy::from_str("skip"), Ok(MalformedGamePolicy::Skip));
        assert!(MalformedGamePolicy::from_str("ignore").is_err());
    }
}
