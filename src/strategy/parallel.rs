//! Parallel batch parsing
//!
//! Uses Rayon to parse independent documents concurrently. Parses share no
//! state, so no coordination is needed beyond collecting results in order.

use rayon::prelude::*;
use crate::core::Parser;
use crate::dom::Node;
use crate::error::Result;
use crate::options::ParseOptions;

/// Parse each input with default options; results keep input order
pub fn parse_parallel(inputs: &[&[u8]]) -> Vec<Result<Node>> {
    parse_parallel_with_options(inputs, &ParseOptions::default())
}

/// Parse each input with the given options; results keep input order
pub fn parse_parallel_with_options(inputs: &[&[u8]], options: &ParseOptions) -> Vec<Result<Node>> {
    inputs
        .par_iter()
        .map(|input| Parser::with_options(input, options.clone()).parse())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_parse() {
        let inputs: [&[u8]; 3] = [b"<a/>", b"<b><c/></b>", b"<broken"];
        let results = parse_parallel(&inputs);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().name, "a");
        assert_eq!(results[1].as_ref().unwrap().children[0].name, "c");
        assert!(results[2].is_err());
    }

    #[test]
    fn test_parallel_default_depth() {
        use crate::options::DEFAULT_MAX_DEPTH;

        let deep = format!(
            "{}{}",
            "<a>".repeat(DEFAULT_MAX_DEPTH),
            "</a>".repeat(DEFAULT_MAX_DEPTH)
        );
        let deeper = format!("<a>{deep}</a>");
        let inputs: [&[u8]; 2] = [deep.as_bytes(), deeper.as_bytes()];

        let results = parse_parallel(&inputs);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(crate::ParseError::DepthLimitExceeded { limit: DEFAULT_MAX_DEPTH, .. })
        ));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let docs: Vec<String> = (0..32)
            .map(|i| format!("<doc id=\"{i}\"><v>{i}</v></doc>"))
            .collect();
        let inputs: Vec<&[u8]> = docs.iter().map(|d| d.as_bytes()).collect();

        let strict = ParseOptions::strict();
        for (input, result) in inputs.iter().zip(parse_parallel_with_options(&inputs, &strict)) {
            let expected = crate::parse(input).unwrap();
            assert!(result.unwrap().matches(&expected).0);
        }
    }
}
