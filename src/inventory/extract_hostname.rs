use crate::error::ExtractError;
use crate::inventory::patterns::HOSTNAME_REGEX;

/// Hostname from the first `<hostname>#show version` prompt in `text`.
///
/// Every show file is expected to carry that prompt; its absence is an input
/// format error rather than an empty hostname.
pub fn extract_hostname(text: &str) -> Result<String, ExtractError> {
    HOSTNAME_REGEX
        .captures(text)
        .map(|caps| caps["hostname"].to_string())
        .ok_or(ExtractError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hostname_first_prompt_wins() {
        let text = "\
elizabeth_cotton#terminal length 0
elizabeth_cotton#sh ver
Cisco IOS Software, C2960C Software
other_name#show version
";
        assert_eq!(extract_hostname(text).unwrap(), "elizabeth_cotton");
    }

    #[test]
    fn test_extract_hostname_repeated_prompt() {
        let text = "howlin_wolf#sh ver\n...\nhowlin_wolf#sh ver | b Switch Ports\n";
        assert_eq!(extract_hostname(text).unwrap(), "howlin_wolf");
    }

    #[test]
    fn test_extract_hostname_not_found() {
        let text = "switch#show running-config\nhostname switch\n";
        assert_eq!(extract_hostname(text), Err(ExtractError::NotFound));
    }

    #[test]
    fn test_extract_hostname_empty_text() {
        assert_eq!(extract_hostname(""), Err(ExtractError::NotFound));
    }
}
